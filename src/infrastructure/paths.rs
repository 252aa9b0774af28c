//! Filesystem locations used by the crate.
//!
//! Only observability writes to disk: span exports land in the platform's
//! local data directory unless the configuration names a file.

use std::path::PathBuf;

/// Application directory name under the platform data directory.
const APP_DIR: &str = "modal-stack";

/// File name of the span export inside the data directory.
const TRACE_FILE_NAME: &str = "modal-stack-spans.jsonl";

/// Returns the data directory for modal-stack files.
///
/// Resolves to `<local data dir>/modal-stack` (for example
/// `~/.local/share/modal-stack` on Linux), falling back to the system
/// temporary directory when the platform reports no data directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Returns the default span export file.
#[must_use]
pub fn default_trace_file() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and every path when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use modal_stack::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/var/log/spans.jsonl"), PathBuf::from("/var/log/spans.jsonl"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
