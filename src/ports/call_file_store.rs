use std::path::PathBuf;

use crate::domain::{AppError, CallFileName};

/// Destination for generated call files.
pub trait CallFileStore {
    /// Create the directory if it does not exist yet.
    fn ensure_directory(&self) -> Result<(), AppError>;

    /// Write `content` under `name`, returning the full path of the new file.
    fn write_call_file(&self, name: &CallFileName, content: &str) -> Result<PathBuf, AppError>;
}
