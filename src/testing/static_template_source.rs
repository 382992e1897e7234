use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Template source backed by a string, or by nothing at all.
#[derive(Debug, Clone)]
pub struct StaticTemplateSource {
    template: Option<String>,
}

impl StaticTemplateSource {
    pub fn new(template: &str) -> Self {
        Self { template: Some(template.to_string()) }
    }

    /// A source whose reads always fail with `NotFound`.
    pub fn missing() -> Self {
        Self { template: None }
    }
}

impl TemplateSource for StaticTemplateSource {
    fn name(&self) -> String {
        "static".to_string()
    }

    fn read_template(&self) -> Result<String, AppError> {
        self.template.clone().ok_or_else(|| AppError::TemplateUnreadable {
            path: PathBuf::from(self.name()),
            source: io::Error::new(io::ErrorKind::NotFound, "template not available"),
        })
    }
}
