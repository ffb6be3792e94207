//! Platform CLI destructive operation checks: GitHub CLI (`gh`), folding in
//! the teacher's search (Algolia) pack, which is a platform-adjacent SaaS
//! destructive surface with no domain of its own in this catalog.

use super::check;
use crate::catalog::Check;

const GH_NEGATIVE_LOOKAHEAD: &str =
    r"(?:\x22[^\x22]*\x22)|(?:'[^']*')|\S+";

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    let gh_prefix = format!(
        r"gh(?:\s+--?[A-Za-z][A-Za-z0-9-]*\b(?:\s+(?!(?:repo|gist|release|issue|ssh-key|api)\b)(?:{GH_NEGATIVE_LOOKAHEAD}))?)*"
    );

    check!(
        checks,
        "platform:gh_repo_delete",
        "platform",
        &format!(r"{gh_prefix}\s+repo\s+delete\b"),
        Critical,
        "gh repo delete permanently deletes a GitHub repository; cannot be undone.",
        hint = Word
    );
    check!(
        checks,
        "platform:gh_repo_archive",
        "platform",
        &format!(r"{gh_prefix}\s+repo\s+archive\b"),
        Medium,
        "gh repo archive makes a repository read-only until un-archived."
    );
    check!(
        checks,
        "platform:gh_gist_delete",
        "platform",
        &format!(r"{gh_prefix}\s+gist\s+delete\b"),
        Medium,
        "gh gist delete permanently deletes a Gist."
    );
    check!(
        checks,
        "platform:gh_release_delete",
        "platform",
        &format!(r"{gh_prefix}\s+release\s+delete\b"),
        High,
        "gh release delete permanently deletes a release."
    );
    check!(
        checks,
        "platform:gh_api_delete",
        "platform",
        &format!(r"{gh_prefix}\s+api\b.*(?:-X|--method)\s+DELETE\b"),
        High,
        "gh api DELETE calls can perform arbitrary destructive REST operations."
    );
    check!(
        checks,
        "platform:algolia_index_delete",
        "platform",
        r"\balgolia\b(?:\s+--?\S+(?:\s+\S+)?)*\s+indices\s+(delete|clear)\b",
        High,
        "algolia indices delete/clear permanently removes an index or all its objects."
    );
    check!(
        checks,
        "platform:algolia_sdk_delete_index",
        "platform",
        r"\b(?:algolia|algoliasearch)\b.*\bdeleteIndex\b",
        High,
        "Algolia SDK deleteIndex removes an index."
    );
}
