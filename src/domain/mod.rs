pub mod call_file_name;
pub mod call_options;
pub mod caller_id;
pub mod error;
pub mod log_level;
pub mod render_context;
pub mod template;

pub use call_file_name::{CALL_FILE_EXTENSION, CallFileName};
pub use call_options::CallOptions;
pub use caller_id::derive_caller_id;
pub use error::AppError;
pub use log_level::LogLevel;
pub use render_context::RenderContext;
pub use template::{TemplateRenderer, render_call_file, strip_blank_lines};
