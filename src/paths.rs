use std::path::{Path, PathBuf};

/// Returns the root snackq directory path.
///
/// Resolution order:
/// 1. `SNACKQ_ROOT` environment variable (if set)
/// 2. Current working directory + `.snackq`
pub fn snackq_root() -> PathBuf {
    if let Ok(root) = std::env::var("SNACKQ_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".snackq")
    }
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    snackq_root().join("config.yaml")
}

/// Returns the path to the signed-in session file.
pub fn session_path() -> PathBuf {
    snackq_root().join("session.yaml")
}

/// Resolve a configured file name against the root unless it is already absolute.
pub fn resolve_in_root(name: &Path) -> PathBuf {
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        snackq_root().join(name)
    }
}

/// Format a path for display by making it relative to the snackq root.
pub fn format_relative_path(path: &Path) -> String {
    path.strip_prefix(snackq_root())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
