use std::io;
use std::path::{Path, PathBuf};

/// Error that occurs when reading a file fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to read file `{path}`: {source}")]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Reads the whole file at the given path into a [`String`].
///
/// cgroup interface files are tiny and are re-read on every scrape, so no
/// handle is kept open between calls.
///
/// # Errors
///
/// Returns a [`FileReadError`] if the file cannot be opened or read.
///
/// # Example
/// ```no_run
/// # use container_pids_exporter::fsutil;
/// let content = fsutil::read_file_to_string("/sys/fs/cgroup/pids/pids.current")?;
/// # Ok::<(), fsutil::FileReadError>(())
/// ```
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String, FileReadError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| FileReadError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_read_file_to_string_success() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("pids.current");
        std::fs::write(&path, "42\n").unwrap();
        let content = read_file_to_string(&path).expect("should read test file");
        assert_eq!(content, "42\n");
    }

    #[test]
    fn test_read_file_to_string_error() {
        let result = read_file_to_string("/definitely/does/not/exist");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.path, PathBuf::from("/definitely/does/not/exist"));
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_file_to_string_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file_to_string(dir.path()).unwrap_err();
        assert_eq!(err.path, dir.path());
        assert!(err.to_string().contains("failed to read file"));
    }
}
