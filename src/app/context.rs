use crate::domain::TemplateRenderer;
use crate::ports::{CallFileStore, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: CallFileStore, T: TemplateSource, R: TemplateRenderer> {
    store: S,
    templates: T,
    renderer: R,
}

impl<S: CallFileStore, T: TemplateSource, R: TemplateRenderer> AppContext<S, T, R> {
    /// Create a new application context.
    pub fn new(store: S, templates: T, renderer: R) -> Self {
        Self { store, templates, renderer }
    }

    /// Get a reference to the call file store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template source.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
