//! Call file generation: render the template, then print or persist it.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{
    AppError, CallFileName, CallOptions, RenderContext, TemplateRenderer, render_call_file,
};
use crate::ports::{CallFileStore, TemplateSource};

/// Line printed ahead of the body in dry-run mode.
pub const DRY_RUN_BANNER: &str = "Dry run of the call file generator, printing to console:";

/// Exit status reported after a dry run.
pub const DRY_RUN_EXIT_CODE: i32 = 1;

/// Inputs for a single generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub call: CallOptions,
    /// Template file, resolved against the working directory.
    pub template: PathBuf,
    /// Name the call file is written under; chosen once at startup.
    pub file_name: CallFileName,
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Dry run: nothing was written.
    DryRun { body: String },
    /// The call file was written to `path`.
    Written { path: PathBuf, body: String },
}

impl GenerateOutcome {
    pub fn body(&self) -> &str {
        match self {
            GenerateOutcome::DryRun { body } | GenerateOutcome::Written { body, .. } => body,
        }
    }

    /// Process exit status for this outcome. A dry run exits non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateOutcome::DryRun { .. } => DRY_RUN_EXIT_CODE,
            GenerateOutcome::Written { .. } => 0,
        }
    }
}

/// Execute the generate pipeline.
pub fn execute<S, T, R>(
    ctx: &AppContext<S, T, R>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    S: CallFileStore,
    T: TemplateSource,
    R: TemplateRenderer,
{
    for (name, value) in options.call.present_fields() {
        debug!("{} has been set as {}", name, value);
    }

    let context = RenderContext::new(&options.call);
    let template = ctx.templates().read_template()?;
    let body = render_call_file(ctx.renderer(), &template, &context, &ctx.templates().name())?;

    if options.call.dry_run {
        info!("Dry run option set, printing to console then exiting");
        return Ok(GenerateOutcome::DryRun { body });
    }

    ctx.store().ensure_directory()?;
    let path = ctx.store().write_call_file(&options.file_name, &body)?;

    Ok(GenerateOutcome::Written { path, body })
}
