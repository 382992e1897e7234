use serde::Serialize;

use super::{CallOptions, derive_caller_id};

/// Variables handed to the call file template.
///
/// Serializes as one flat map: every supplied [`CallOptions`] field plus
/// `callerid` when one could be derived.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    #[serde(flatten)]
    options: CallOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    callerid: Option<String>,
}

impl RenderContext {
    pub fn new(options: &CallOptions) -> Self {
        Self { callerid: derive_caller_id(options), options: options.clone() }
    }
}
