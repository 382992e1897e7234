//! Filesystem-backed entry points used by the CLI.

use crate::app::AppContext;
use crate::app::commands::generate::{self, GenerateOptions, GenerateOutcome};
use crate::domain::AppError;
use crate::services::{FileTemplateSource, FilesystemCallFileStore, MinijinjaRenderer};

/// Generate a call file in `callfiles/` under the current directory.
///
/// The template path is resolved against the current directory. In dry-run
/// mode nothing is written and the rendered body is returned for printing.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let cwd = std::env::current_dir()?;
    let store = FilesystemCallFileStore::current()?;
    let templates = FileTemplateSource::new(cwd.join(&options.template));
    let ctx = AppContext::new(store, templates, MinijinjaRenderer::new());

    generate::execute(&ctx, options)
}
