mod call_file_store;
mod template_source;

pub use call_file_store::CallFileStore;
pub use template_source::TemplateSource;
