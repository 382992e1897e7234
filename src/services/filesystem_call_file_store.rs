use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::{AppError, CallFileName};
use crate::ports::CallFileStore;

/// Name of the output directory created under the working directory.
pub const CALL_FILE_DIR: &str = "callfiles";

/// Filesystem-based call file store.
#[derive(Debug, Clone)]
pub struct FilesystemCallFileStore {
    directory: PathBuf,
}

impl FilesystemCallFileStore {
    /// Create a store writing into `directory`.
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Create a store for `callfiles/` under the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd.join(CALL_FILE_DIR)))
    }
}

impl CallFileStore for FilesystemCallFileStore {
    fn ensure_directory(&self) -> Result<(), AppError> {
        if self.directory.is_dir() {
            return Ok(());
        }
        debug!("Call file directory {} does not exist, creating it", self.directory.display());
        fs::create_dir(&self.directory)
            .map_err(|source| AppError::OutputDirectory { path: self.directory.clone(), source })
    }

    fn write_call_file(&self, name: &CallFileName, content: &str) -> Result<PathBuf, AppError> {
        let path = self.directory.join(name.to_string());
        debug!("Writing call file {} to directory {}", name, self.directory.display());
        fs::write(&path, content)
            .map_err(|source| AppError::CallFileWrite { path: path.clone(), source })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn name() -> CallFileName {
        let stamp = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
        CallFileName::new(stamp, 42)
    }

    #[test]
    fn ensure_directory_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let store = FilesystemCallFileStore::new(temp.path().join(CALL_FILE_DIR));

        store.ensure_directory().unwrap();
        store.ensure_directory().unwrap();

        assert!(temp.path().join(CALL_FILE_DIR).is_dir());
    }

    #[test]
    fn ensure_directory_does_not_create_parents() {
        let temp = TempDir::new().unwrap();
        let store = FilesystemCallFileStore::new(temp.path().join("missing").join(CALL_FILE_DIR));

        let err = store.ensure_directory().unwrap_err();

        assert!(matches!(err, AppError::OutputDirectory { .. }));
    }

    #[test]
    fn write_call_file_writes_content_verbatim() {
        let temp = TempDir::new().unwrap();
        let store = FilesystemCallFileStore::new(temp.path().to_path_buf());

        let path = store.write_call_file(&name(), "Channel: SIP/100\nContext: default").unwrap();

        assert_eq!(path, temp.path().join("20240102_030405_42.call"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Channel: SIP/100\nContext: default");
    }

    #[test]
    fn write_call_file_reports_missing_directory() {
        let temp = TempDir::new().unwrap();
        let store = FilesystemCallFileStore::new(temp.path().join(CALL_FILE_DIR));

        let err = store.write_call_file(&name(), "x").unwrap_err();

        assert!(matches!(err, AppError::CallFileWrite { .. }));
    }
}
