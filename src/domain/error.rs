use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for callgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Template file could not be read.
    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template failed to parse or render.
    #[error("Failed to render template '{name}': {details}")]
    TemplateRender { name: String, details: String },

    /// Output directory could not be created.
    #[error("Failed to create call file directory {}: {source}", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Call file could not be written.
    #[error("Failed to write call file {}: {source}", .path.display())]
    CallFileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
