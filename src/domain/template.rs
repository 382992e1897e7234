//! Call file template rendering.

use super::{AppError, RenderContext};

/// Trait for rendering templates.
///
/// Keeps the template engine (minijinja) out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` with the given context.
    ///
    /// `template_name` is only used for error reporting.
    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        template_name: &str,
    ) -> Result<String, AppError>;
}

/// Render a call file body: substitute the context, then drop blank lines.
pub fn render_call_file<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    template: &str,
    context: &RenderContext,
    template_name: &str,
) -> Result<String, AppError> {
    let rendered = renderer.render(template, context, template_name)?;
    Ok(strip_blank_lines(&rendered))
}

/// Remove empty and whitespace-only lines, rejoining the rest with `\n`.
pub fn strip_blank_lines(text: &str) -> String {
    text.split('\n').filter(|line| !line.trim().is_empty()).collect::<Vec<_>>().join("\n")
}
