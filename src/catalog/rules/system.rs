//! Host-level destructive checks: shutdown/reboot, filesystem formatting,
//! service termination. Folds in the teacher's HAProxy load-balancer pack,
//! which is host-service-level rather than its own domain here.

use super::check;
use crate::catalog::Check;

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    check!(
        checks,
        "system:shutdown",
        "system",
        r"\b(shutdown|poweroff|halt)\b(?!\s+-c\b)",
        Critical,
        "shutdown/poweroff/halt powers the host off immediately.",
        hint = Math
    );
    check!(
        checks,
        "system:reboot",
        "system",
        r"\breboot\b",
        High,
        "reboot restarts the host, interrupting any running processes."
    );
    check!(
        checks,
        "system:mkfs",
        "system",
        r"\bmkfs(\.\w+)?\b",
        Critical,
        "mkfs formats a filesystem, destroying all data currently on the target.",
        hint = Word
    );
    check!(
        checks,
        "system:fdisk_write",
        "system",
        r"\b(fdisk|parted)\b.*\s(-w|--write)?\b.*\b(d|delete|mklabel)\b",
        Critical,
        "fdisk/parted partition deletion or relabeling destroys the partition table."
    );
    check!(
        checks,
        "system:kill_all",
        "system",
        r"\bkillall\s+-9\b|\bkill\s+-9\s+-1\b",
        High,
        "kill -9 -1 / killall -9 sends an unblockable kill signal to matching or all processes."
    );
    check!(
        checks,
        "system:iptables_flush",
        "system",
        r"\biptables\s+(-F|--flush)\b",
        High,
        "iptables -F removes every firewall rule, potentially exposing the host."
    );
    check!(
        checks,
        "system:haproxy_stop",
        "system",
        r"\b(systemctl|service)\s+stop\s+haproxy(\.service)?\b|\bhaproxy\s+.*-s[ft]\b",
        High,
        "stopping HAProxy (service stop or -sf/-st signal) drops the load balancer."
    );
    check!(
        checks,
        "system:haproxy_runtime_disable",
        "system",
        r#"(?:echo|printf)\s+['"]?(disable|shutdown)\s+(server|frontend|sessions)\b.*\|\s*socat\b"#,
        Medium,
        "HAProxy runtime-API disable/shutdown commands remove a server or frontend from service."
    );
}
