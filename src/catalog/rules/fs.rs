//! Filesystem destruction checks: recursive delete, disk overwrite,
//! permission blow-outs, filesystem formatting.

use super::check;
use crate::catalog::Check;

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    check!(
        checks,
        "fs:recursively_delete",
        "fs",
        r"\brm\s+(-\S*[rR]\S*)(\s|$)",
        Critical,
        "rm -r/-R recursively deletes files and directories; cannot be undone.",
        hint = Math
    );
    check!(
        checks,
        "fs:recursively_delete_root_or_home",
        "fs",
        r"\brm\s+(-\S*[rR]\S*\s+)+(/|~|\$HOME)(\s|$|/)",
        Critical,
        "rm -r targeting / or $HOME can destroy the entire filesystem or user data.",
        hint = Word
    );
    check!(
        checks,
        "fs:force_delete",
        "fs",
        r"\brm\s+-\S*f\S*(\s|$)",
        High,
        "rm -f deletes without confirmation and ignores missing-file errors."
    );
    check!(
        checks,
        "fs:chmod_permissive_root",
        "fs",
        r"\bchmod\s+(-\S*[rR]\S*\s+)*0?777\s+/",
        Critical,
        "chmod 777 on / makes the entire filesystem world-writable."
    );
    check!(
        checks,
        "fs:chown_recursive_root",
        "fs",
        r"\bchown\s+-\S*[rR]\S*\s+\S+\s+/(\s|$)",
        High,
        "chown -R on / rewrites ownership of the entire filesystem."
    );
    check!(
        checks,
        "fs:disk_overwrite_dd",
        "fs",
        r"\bdd\b[^|;&]*\bif=/dev/(zero|urandom|random)\b",
        Critical,
        "dd with if=/dev/zero or /dev/urandom can overwrite a disk with garbage.",
        hint = Word
    );
    check!(
        checks,
        "fs:shred_device",
        "fs",
        r"\bshred\b.*\s/dev/\S+",
        Critical,
        "shred on a block device irreversibly destroys its contents."
    );
    check!(
        checks,
        "fs:truncate_via_redirect",
        "fs",
        r">\s*/dev/(sd|nvme|hd)\w+",
        Critical,
        "redirecting output onto a raw block device overwrites it."
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
    fn rm_rf_root_is_critical() {
        let checks = catalog_checks();
        let hit = checks
            .iter()
            .find(|c| c.id == "fs:recursively_delete_root_or_home")
            .unwrap();
        assert!(hit.is_match("rm -rf /"));
        assert!(hit.is_match("rm -rf ~"));
        assert!(hit.is_match("rm -rf $HOME"));
    }

    #[test]
    fn rm_rf_relative_path_is_general_recursive_only() {
        let checks = catalog_checks();
        let general = checks
            .iter()
            .find(|c| c.id == "fs:recursively_delete")
            .unwrap();
        let targeted = checks
            .iter()
            .find(|c| c.id == "fs:recursively_delete_root_or_home")
            .unwrap();
        assert!(general.is_match("rm -rf ./build"));
        assert!(!targeted.is_match("rm -rf ./build"));
    }

    #[test]
    fn dd_to_dev_null_is_not_disk_overwrite() {
        let checks = catalog_checks();
        let hit = checks.iter().find(|c| c.id == "fs:disk_overwrite_dd").unwrap();
        assert!(!hit.is_match("dd if=/dev/sda of=/tmp/backup.img"));
        assert!(hit.is_match("dd if=/dev/zero of=/dev/sda"));
    }

    #[test]
    fn chmod_777_on_root_flagged() {
        let checks = catalog_checks();
        let hit = checks
            .iter()
            .find(|c| c.id == "fs:chmod_permissive_root")
            .unwrap();
        assert!(hit.is_match("chmod -R 777 /"));
        assert!(!hit.is_match("chmod 777 ./dist"));
    }
}
