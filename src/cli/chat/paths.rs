use std::path::{Path, PathBuf};

/// Resolve a user-supplied file argument.
///
/// Expands a leading `~` to the home directory and resolves relative paths
/// against the current working directory.
pub fn sanitize_path(path: &str) -> PathBuf {
    let path = path.trim();

    if path == "~" || path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return match path.strip_prefix("~/") {
                Some(rest) => home.join(rest),
                None => home,
            };
        }
    }

    let path_buf = Path::new(path);
    if path_buf.is_relative() {
        if let Ok(current_dir) = std::env::current_dir() {
            return current_dir.join(path_buf);
        }
    }

    path_buf.to_path_buf()
}
