//! callgen: generate Asterisk call files from command-line fields.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::generate;
pub use app::commands::generate::{DRY_RUN_BANNER, GenerateOptions, GenerateOutcome};
pub use domain::{AppError, CallFileName, CallOptions, LogLevel};
