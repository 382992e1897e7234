use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CallFileName};
use crate::ports::CallFileStore;

/// In-memory call file store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryCallFileStore {
    directory_created: Arc<Mutex<bool>>,
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryCallFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directory_created(&self) -> bool {
        *self.directory_created.lock().unwrap()
    }

    pub fn files(&self) -> HashMap<PathBuf, String> {
        self.files.lock().unwrap().clone()
    }
}

impl CallFileStore for MemoryCallFileStore {
    fn ensure_directory(&self) -> Result<(), AppError> {
        *self.directory_created.lock().unwrap() = true;
        Ok(())
    }

    fn write_call_file(&self, name: &CallFileName, content: &str) -> Result<PathBuf, AppError> {
        let path = PathBuf::from("callfiles").join(name.to_string());
        self.files.lock().unwrap().insert(path.clone(), content.to_string());
        Ok(path)
    }
}
