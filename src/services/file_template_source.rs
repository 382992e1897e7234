use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Conventional template file name, looked up in the working directory.
pub const DEFAULT_TEMPLATE_FILE: &str = "template.j2";

/// Reads the call file template from a local file.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TemplateSource for FileTemplateSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_template(&self) -> Result<String, AppError> {
        fs::read_to_string(&self.path)
            .map_err(|source| AppError::TemplateUnreadable { path: self.path.clone(), source })
    }
}
