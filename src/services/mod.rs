mod file_template_source;
mod filesystem_call_file_store;
mod minijinja_renderer;

pub use file_template_source::{DEFAULT_TEMPLATE_FILE, FileTemplateSource};
pub use filesystem_call_file_store::{CALL_FILE_DIR, FilesystemCallFileStore};
pub use minijinja_renderer::MinijinjaRenderer;
