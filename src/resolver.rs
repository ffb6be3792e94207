//! Injectable filesystem predicate resolution.
//!
//! Predicate evaluation (does a path captured from a match exist on disk?)
//! touches real filesystem state. Tests that want deterministic behavior
//! inject a [`PathResolver`] instead of relying on [`RealFs`].

use std::path::Path;

/// Resolves whether a path exists. The default implementation calls through
/// to `std::path::Path::exists`; tests can substitute an in-memory fake.
pub trait PathResolver: Send + Sync {
    fn exists(&self, path: &str) -> bool;
}

/// The default resolver: a real `stat` of the path.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl PathResolver for RealFs {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeFs;
    use super::*;

    #[test]
    fn real_fs_reports_existing_path() {
        let resolver = RealFs;
        assert!(resolver.exists("/"));
    }

    #[test]
    fn real_fs_reports_missing_path() {
        let resolver = RealFs;
        assert!(!resolver.exists("/definitely/does/not/exist/amc99"));
    }

    #[test]
    fn fake_fs_is_deterministic() {
        let resolver = FakeFs::with_paths(["/tmp/present"]);
        assert!(resolver.exists("/tmp/present"));
        assert!(!resolver.exists("/tmp/absent"));
    }
}
