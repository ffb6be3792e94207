//! Git destructive operation checks: hard reset, force push, force clean,
//! protected branch deletion, history rewrite.

use super::check;
use crate::catalog::Check;

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    check!(
        checks,
        "git:reset_hard",
        "git",
        r"\bgit\s+reset\s+.*--hard\b",
        High,
        "git reset --hard discards uncommitted changes in the working tree."
    );
    check!(
        checks,
        "git:force_push",
        "git",
        r"\bgit\s+push\b.*(-\S*f\S*\b|--force(-with-lease)?\b)",
        Critical,
        "git push --force overwrites remote history; can destroy others' work.",
        hint = Word
    );
    check!(
        checks,
        "git:clean_force",
        "git",
        r"\bgit\s+clean\s+(-\S*f\S*)(\s|$)",
        High,
        "git clean -f permanently deletes untracked files."
    );
    check!(
        checks,
        "git:branch_delete_force",
        "git",
        r"\bgit\s+branch\s+(-\S*D\S*)(\s|$)",
        Medium,
        "git branch -D force-deletes a branch, even if unmerged."
    );
    check!(
        checks,
        "git:branch_delete_protected",
        "git",
        r"\bgit\s+(branch\s+-[dD]|push\s+\S*\s*(origin\s+)?--delete)\s+(main|master|production)\b",
        Critical,
        "deleting the main/master/production branch is rarely recoverable.",
        hint = Word
    );
    check!(
        checks,
        "git:filter_branch",
        "git",
        r"\bgit\s+filter-branch\b",
        High,
        "git filter-branch rewrites history across every commit it touches."
    );
    check!(
        checks,
        "git:rebase_onto_pushed",
        "git",
        r"\bgit\s+rebase\s+.*--onto\b",
        Medium,
        "git rebase --onto rewrites commit history and can orphan pushed commits."
    );
    check!(
        checks,
        "git:stash_drop_or_clear",
        "git",
        r"\bgit\s+stash\s+(drop|clear)\b",
        Medium,
        "git stash drop/clear permanently discards stashed changes."
    );
    check!(
        checks,
        "git:reflog_expire",
        "git",
        r"\bgit\s+reflog\s+expire\b.*--expire=now",
        High,
        "git reflog expire --expire=now removes the safety net for recovering lost commits."
    );
    check!(
        checks,
        "git:gc_aggressive_prune",
        "git",
        r"\bgit\s+gc\b.*--prune=now",
        Medium,
        "git gc --prune=now immediately discards unreachable objects."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_checks() -> Vec<Check> {
        let mut v = Vec::new();
        register(&mut v);
        v
    }

    #[test]
    fn force_push_variants_match() {
        let checks = catalog_checks();
        let hit = checks.iter().find(|c| c.id == "git:force_push").unwrap();
        assert!(hit.is_match("git push --force origin main"));
        assert!(hit.is_match("git push -f origin main"));
        assert!(hit.is_match("git push --force-with-lease origin main"));
        assert!(!hit.is_match("git push origin main"));
    }

    #[test]
    fn reset_hard_matches_plain_and_with_ref() {
        let checks = catalog_checks();
        let hit = checks.iter().find(|c| c.id == "git:reset_hard").unwrap();
        assert!(hit.is_match("git reset --hard"));
        assert!(hit.is_match("git reset --hard HEAD~1"));
        assert!(!hit.is_match("git reset --soft HEAD~1"));
    }

    #[test]
    fn protected_branch_delete_flagged() {
        let checks = catalog_checks();
        let hit = checks
            .iter()
            .find(|c| c.id == "git:branch_delete_protected")
            .unwrap();
        assert!(hit.is_match("git branch -D main"));
        assert!(hit.is_match("git push origin --delete production"));
        assert!(!hit.is_match("git branch -D feature/foo"));
    }

    #[test]
    fn clean_force_matches() {
        let checks = catalog_checks();
        let hit = checks.iter().find(|c| c.id == "git:clean_force").unwrap();
        assert!(hit.is_match("git clean -fd"));
        assert!(!hit.is_match("git clean -n"));
    }
}
