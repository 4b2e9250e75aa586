//! Atomic file writes.
//!
//! All writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `rename` replaces an existing target on both POSIX and Windows, and is
//! atomic as long as source and destination share a filesystem, which the
//! same-directory temp file guarantees. On crash, a temporary file named
//! `.{filename}.tmp` may remain.

use crate::error::{GenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, replacing any existing file.
///
/// The target's parent directory must already exist.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let temp_path = generate_temp_path(path)?;

    write_and_sync(&temp_path, content).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        GenError::Io {
            path: temp_path.clone(),
            source,
        }
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        GenError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path next to the target: `.{filename}.tmp`.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GenError::Precondition(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("E1_GridSearch.py");

        atomic_write_file(&file_path, "print('hello')\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "print('hello')\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("E1_GridSearch.py");
        fs::write(&file_path, "old script").unwrap();

        atomic_write(&file_path, b"new script").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "new script");
    }

    #[test]
    fn test_atomic_write_temp_file_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.py");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join(".test.py.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("test.py");

        let err = atomic_write(&file_path, b"content").unwrap_err();

        assert!(matches!(err, GenError::Io { .. }));
        assert!(!file_path.exists());
    }

    #[test]
    fn test_generate_temp_path() {
        let target = Path::new("/some/path/E1_GridSearch.py");
        let temp = generate_temp_path(target).unwrap();

        assert_eq!(temp, Path::new("/some/path/.E1_GridSearch.py.tmp"));
    }
}
