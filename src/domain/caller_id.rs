//! Caller ID display string derivation.

use tracing::debug;

use super::CallOptions;

/// Build the `callerid` value from the optional name and number fields.
///
/// A name without a number borrows the call's extension as the number.
/// Returns `None` when neither field was given.
pub fn derive_caller_id(options: &CallOptions) -> Option<String> {
    match (&options.cid_name, options.cid_number) {
        (Some(name), Some(number)) => {
            debug!("Received both cid name and cid number");
            Some(format!("\"{}\" <{}>", name, number))
        }
        (Some(name), None) => {
            debug!("Only cid name received, using exten as cid number");
            Some(format!("\"{}\" <{}>", name, options.exten))
        }
        (None, Some(number)) => {
            debug!("Only cid number received");
            Some(format!("<{}>", number))
        }
        (None, None) => {
            debug!("No caller id specified");
            None
        }
    }
}
