//! minijinja-backed template renderer.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, Value};

use crate::domain::{AppError, RenderContext, TemplateRenderer};

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Renders call file templates with Jinja syntax.
///
/// Undefined variables render as empty strings and test false, so templates
/// guard optional keys with `{% if name is defined %}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaRenderer;

impl MinijinjaRenderer {
    pub fn new() -> Self {
        Self
    }

    fn environment() -> &'static Environment<'static> {
        ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Lenient);
            env.set_keep_trailing_newline(true);
            env
        })
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &RenderContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        let ctx = Value::from_serialize(context);
        Self::environment().render_str(template, ctx).map_err(|err| AppError::TemplateRender {
            name: template_name.to_string(),
            details: err.to_string(),
        })
    }
}
