//! HTML rendering for the challenge page.
//!
//! The command text and rule metadata are attacker/agent-controlled strings
//! and are HTML-escaped before being embedded in markup. The target word and
//! math answer are never embedded as raw HTML; they go in as JSON-typed
//! literals inside an inline `<script>` block.

use crate::catalog::{MatchRecord, Severity};
use crate::challenge::kinds::Kind;

/// Escapes `& < > " '` as HTML entities.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "low",
        Severity::Medium => "medium",
        Severity::High => "high",
        Severity::Critical => "critical",
    }
}

fn render_matches(matches: &[MatchRecord]) -> String {
    let mut rows = String::new();
    for m in matches {
        rows.push_str(&format!(
            "<tr><td class=\"sev sev-{sev}\">{sev}</td><td>{id}</td><td>{desc}</td></tr>",
            sev = severity_label_from_str(&m.severity),
            id = escape_html(&m.id),
            desc = escape_html(&m.description),
        ));
    }
    rows
}

fn severity_label_from_str(s: &str) -> &str {
    match s {
        "low" | "medium" | "high" | "critical" => s,
        _ => "medium",
    }
}

/// Renders the full challenge page for `kind`.
#[must_use]
pub fn render_page(command: &str, matches: &[MatchRecord], kind: &Kind) -> String {
    let command_escaped = escape_html(command);
    let rows = render_matches(matches);

    let (title, body, script) = match kind {
        Kind::Confirm => (
            "Confirm command",
            r#"<p>Do you want to allow this command to run?</p>
<div class="actions">
  <button id="approve-btn" class="approve">Approve</button>
  <button id="deny-btn" class="deny">Deny</button>
</div>"#
                .to_string(),
            String::new(),
        ),
        Kind::Math { lhs, rhs } => (
            "Solve to approve",
            format!(
                r#"<p>Type the answer to approve: <strong>{lhs} + {rhs} = ?</strong></p>
<input id="answer" type="number" autocomplete="off" />
<div class="actions">
  <button id="approve-btn" class="approve">Submit</button>
  <button id="deny-btn" class="deny">Deny</button>
</div>
<p id="feedback"></p>"#
            ),
            format!(
                "const EXPECTED = {expected};\nlet attempts = 0;",
                expected = kind.math_answer().unwrap_or(0)
            ),
        ),
        Kind::Word { target } => (
            "Type the word to approve",
            format!(
                r#"<p>Type <strong>{target}</strong> exactly to approve.</p>
<input id="answer" type="text" autocomplete="off" />
<div class="actions">
  <button id="approve-btn" class="approve">Submit</button>
  <button id="deny-btn" class="deny">Deny</button>
</div>
<p id="feedback"></p>"#
            ),
            format!("const EXPECTED_WORD = {target:?};\nlet attempts = 0;"),
        ),
        Kind::Block => (
            "Command blocked",
            r#"<p>This command is blocked by policy and cannot be approved from this page.</p>
<div class="actions">
  <button id="deny-btn" class="deny">Acknowledge</button>
</div>"#
                .to_string(),
            String::new(),
        ),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 40rem; }}
code, pre {{ background: #f4f4f4; padding: 0.25rem 0.5rem; border-radius: 4px; }}
table {{ width: 100%; border-collapse: collapse; margin: 1rem 0; }}
td, th {{ border: 1px solid #ddd; padding: 0.4rem; text-align: left; }}
.sev-critical {{ color: #a00; font-weight: bold; }}
.sev-high {{ color: #c60; font-weight: bold; }}
.sev-medium {{ color: #a80; }}
.sev-low {{ color: #666; }}
.actions button {{ padding: 0.5rem 1rem; margin-right: 0.5rem; }}
.approve {{ background: #2a7; color: white; border: none; }}
.deny {{ background: #a33; color: white; border: none; }}
</style>
</head>
<body>
<h1>{title}</h1>
<pre>{command}</pre>
<table>
<thead><tr><th>Severity</th><th>Rule</th><th>Description</th></tr></thead>
<tbody>{rows}</tbody>
</table>
{body}
<script>
{script}
function post(path) {{
  fetch(path, {{ method: "POST" }}).catch(() => {{}});
}}
document.getElementById("deny-btn")?.addEventListener("click", () => post("/deny"));
const approveBtn = document.getElementById("approve-btn");
if (approveBtn) {{
  approveBtn.addEventListener("click", () => {{
    const input = document.getElementById("answer");
    if (!input) {{ post("/approve"); return; }}
    attempts += 1;
    const value = input.value.trim();
    const ok = (typeof EXPECTED !== "undefined" && Number(value) === EXPECTED)
      || (typeof EXPECTED_WORD !== "undefined" && value === EXPECTED_WORD);
    if (ok) {{
      post("/approve");
    }} else if (attempts >= 3) {{
      post("/deny");
    }} else {{
      document.getElementById("feedback").textContent = "Incorrect, try again (" + attempts + "/3).";
    }}
  }});
}}
</script>
</body>
</html>"#,
        title = title,
        command = command_escaped,
        rows = rows,
        body = body,
        script = script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_html_special_characters() {
        let escaped = escape_html(r#"<script>&"'"#);
        assert_eq!(escaped, "&lt;script&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn rendered_page_embeds_escaped_command() {
        let page = render_page("echo <hi> && \"rm\"", &[], &Kind::Confirm);
        assert!(page.contains("echo &lt;hi&gt;"));
        assert!(!page.contains("<hi>"));
    }

    #[test]
    fn math_page_embeds_expected_as_json_number_not_html() {
        let kind = Kind::Math { lhs: 2, rhs: 3 };
        let page = render_page("rm -rf /", &[], &kind);
        assert!(page.contains("const EXPECTED = 5;"));
    }

    #[test]
    fn word_page_embeds_target_as_json_string() {
        let kind = Kind::Word { target: "DANGER" };
        let page = render_page("rm -rf /", &[], &kind);
        assert!(page.contains(r#"const EXPECTED_WORD = "DANGER";"#));
    }

    #[test]
    fn block_page_has_no_approve_button() {
        let page = render_page("rm -rf /", &[], &Kind::Block);
        assert!(!page.contains("approve-btn"));
    }
}
