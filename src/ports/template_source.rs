use crate::domain::AppError;

/// Supplies the raw call file template text.
pub trait TemplateSource {
    /// Name used in log lines and error messages.
    fn name(&self) -> String;

    fn read_template(&self) -> Result<String, AppError>;
}
