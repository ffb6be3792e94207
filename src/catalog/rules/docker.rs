//! Docker/Podman/Compose destructive operation checks.

use super::check;
use crate::catalog::Check;

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    check!(
        checks,
        "docker:system_prune",
        "docker",
        r"\bdocker\s+system\s+prune\b",
        High,
        "docker system prune removes stopped containers, unused networks, and dangling images."
    );
    check!(
        checks,
        "docker:system_prune_all_volumes",
        "docker",
        r"\bdocker\s+system\s+prune\b.*(-a|--all)\b.*(--volumes)\b|\bdocker\s+system\s+prune\b.*--volumes\b.*(-a|--all)\b",
        Critical,
        "docker system prune -a --volumes also deletes all images and named volumes.",
        hint = Word
    );
    check!(
        checks,
        "docker:volume_rm",
        "docker",
        r"\bdocker\s+volume\s+(rm|prune)\b",
        High,
        "docker volume rm/prune deletes volume data permanently."
    );
    check!(
        checks,
        "docker:image_rm_force",
        "docker",
        r"\bdocker\s+(rmi|image\s+rm)\s+.*-f\b",
        Medium,
        "docker rmi -f removes an image even if containers depend on it."
    );
    check!(
        checks,
        "docker:container_rm_force",
        "docker",
        r"\bdocker\s+(rm|container\s+rm)\s+.*-f\b",
        High,
        "docker rm -f kills and removes a running container without graceful shutdown."
    );
    check!(
        checks,
        "docker:compose_down_volumes",
        "docker",
        r"\bdocker(?:-|\s+)compose\s+down\b.*(-v|--volumes)\b",
        High,
        "docker compose down -v deletes the volumes defined in the compose project."
    );
    check!(
        checks,
        "docker:network_rm",
        "docker",
        r"\bdocker\s+network\s+(rm|prune)\b",
        Medium,
        "docker network rm/prune removes custom networks and can disconnect running services."
    );
    check!(
        checks,
        "docker:podman_system_prune",
        "docker",
        r"\bpodman\s+system\s+prune\b",
        High,
        "podman system prune removes unused containers, networks, and images."
    );
}
