mod memory_call_file_store;
mod static_template_source;

pub use memory_call_file_store::MemoryCallFileStore;
pub use static_template_source::StaticTemplateSource;

/// Reference call file template shipped with the crate.
pub const CALL_TEMPLATE: &str = include_str!("../../assets/template.j2");
