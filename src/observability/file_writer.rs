//! Size-capped, rotating line writer for span exports.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size at which the active file is rotated (5 MB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of rotated files kept next to the active one.
pub const DEFAULT_BACKUPS: usize = 2;

/// Appends lines to a file, rotating it once it grows past a size cap.
///
/// Rotated files are renamed `<file>.<UTC timestamp>`; only the newest
/// `backups` of them are kept. The file handle opens lazily on the first
/// write, so construction never touches the filesystem.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    /// Creates a writer with the default limits.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    /// Path of the active file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails when rotation, opening or writing fails, or when the internal
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let oversized = fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes);
        if oversized {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "span file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3f");
        let mut rotated = self.path.clone().into_os_string();
        rotated.push(format!(".{stamp}"));
        fs::rename(&self.path, PathBuf::from(rotated))?;
        self.prune()
    }

    /// Deletes rotated files beyond the retention count, oldest first.
    fn prune(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let Some(stem) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{stem}.");

        let mut rotated: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort chronologically.
        rotated.sort();
        let excess = rotated.len().saturating_sub(self.backups);
        for old in rotated.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingWriter::new(dir.path().join("spans.jsonl"));

        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn rotates_past_the_cap_and_prunes() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingWriter::with_limits(dir.path().join("spans.jsonl"), 4, 1);

        for line in ["aaaaa", "bbbbb", "ccccc", "ddddd"] {
            writer.write_line(line).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "ddddd\n");
        let rotated = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("spans.jsonl."))
            .count();
        assert_eq!(rotated, 1);
    }
}
