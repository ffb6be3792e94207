//! Compound-command splitting.
//!
//! A command line handed to the gate is rarely a single executable; shells
//! chain commands with `&&`, `||`, `|`, `;` and `&`. Each chained part must be
//! screened independently, otherwise `echo ok && rm -rf /` would be judged
//! safe by looking only at the first token.
//!
//! This is a lexical split, not a shell parse: quoting is honored so
//! separators inside `'...'`/`"..."` do not split, but heredocs, process
//! substitution, and arithmetic expansion are left untouched. The goal is to
//! find screenable boundaries, not to re-implement a shell.

/// Splits `command` at top-level `&&`, `||`, `|`, `;` and `&` (but not the
/// `&` that makes up `&&`), honoring single/double quoting and backslash
/// escapes outside single quotes.
///
/// Unbalanced quotes fail closed: the whole input is returned as one part,
/// so the matcher still gets a chance to flag it rather than the splitter
/// silently discarding half the command.
#[must_use]
pub fn split(command: &str) -> Vec<String> {
    if has_unbalanced_quotes(command) {
        let trimmed = command.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = command.chars().peekable();
    let mut in_single = false;
    let mut in_double = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' if !in_single => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '\'' if !in_double => {
                in_single = !in_single;
                current.push(c);
            }
            '"' if !in_single => {
                in_double = !in_double;
                current.push(c);
            }
            '&' if !in_single && !in_double => {
                if chars.peek() == Some(&'&') {
                    chars.next();
                    push_part(&mut parts, &current);
                    current.clear();
                } else {
                    push_part(&mut parts, &current);
                    current.clear();
                }
            }
            '|' if !in_single && !in_double => {
                if chars.peek() == Some(&'|') {
                    chars.next();
                }
                push_part(&mut parts, &current);
                current.clear();
            }
            ';' if !in_single && !in_double => {
                push_part(&mut parts, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }

    push_part(&mut parts, &current);
    parts
}

fn push_part(parts: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

fn has_unbalanced_quotes(command: &str) -> bool {
    let mut in_single = false;
    let mut in_double = false;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' if !in_single => {
                chars.next();
            }
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            _ => {}
        }
    }

    in_single || in_double
}
