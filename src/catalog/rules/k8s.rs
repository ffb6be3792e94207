//! Kubernetes destructive operation checks: `kubectl`, `helm`.

use super::check;
use crate::catalog::Check;

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    check!(
        checks,
        "k8s:delete_namespace",
        "k8s",
        r"\bkubectl\s+delete\s+(ns|namespace)\b",
        Critical,
        "kubectl delete namespace removes every resource in the namespace.",
        hint = Word
    );
    check!(
        checks,
        "k8s:delete_force_immediate",
        "k8s",
        r"\bkubectl\s+delete\b.*--force\b.*--grace-period=0",
        Critical,
        "kubectl delete --force --grace-period=0 skips graceful termination entirely.",
        hint = Math
    );
    check!(
        checks,
        "k8s:delete_all",
        "k8s",
        r"\bkubectl\s+delete\s+.*--all\b",
        High,
        "kubectl delete --all removes every resource of the given kind in scope."
    );
    check!(
        checks,
        "k8s:delete_pv",
        "k8s",
        r"\bkubectl\s+delete\s+(pv|persistentvolume)\b",
        Critical,
        "kubectl delete pv can release or destroy backing storage."
    );
    check!(
        checks,
        "k8s:delete_crd",
        "k8s",
        r"\bkubectl\s+delete\s+crd\b",
        High,
        "kubectl delete crd removes a CustomResourceDefinition and all its instances."
    );
    check!(
        checks,
        "k8s:drain_node",
        "k8s",
        r"\bkubectl\s+drain\b",
        Medium,
        "kubectl drain evicts all pods from a node."
    );
    check!(
        checks,
        "k8s:helm_uninstall",
        "k8s",
        r"\bhelm\s+(uninstall|delete)\b",
        High,
        "helm uninstall removes a release and, by default, its resources."
    );
    check!(
        checks,
        "k8s:helm_rollback",
        "k8s",
        r"\bhelm\s+rollback\b",
        Medium,
        "helm rollback reverts a release to a previous revision, replacing current resources."
    );
}
