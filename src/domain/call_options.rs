use serde::Serialize;

/// Every field recognised on the command line, after parsing.
///
/// Serializing this struct yields the template variables: optional fields
/// that were not supplied are skipped entirely rather than rendered as
/// empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallOptions {
    pub channel: String,
    pub context: String,
    pub exten: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setvar: Option<String>,
    pub verbose: u8,
    pub dry_run: bool,
}

impl CallOptions {
    /// Options with only the required dial-plan coordinates set.
    pub fn new(channel: impl Into<String>, context: impl Into<String>, exten: u64) -> Self {
        Self {
            channel: channel.into(),
            context: context.into(),
            exten,
            priority: None,
            cid_number: None,
            cid_name: None,
            wait_time: None,
            max_retries: None,
            retry_time: None,
            account: None,
            setvar: None,
            verbose: 0,
            dry_run: false,
        }
    }

    /// `(name, value)` pairs for every field that was supplied, in declaration order.
    pub fn present_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("channel", self.channel.clone()),
            ("context", self.context.clone()),
            ("exten", self.exten.to_string()),
        ];
        let optional = [
            ("priority", self.priority.map(|v| v.to_string())),
            ("cid_number", self.cid_number.map(|v| v.to_string())),
            ("cid_name", self.cid_name.clone()),
            ("wait_time", self.wait_time.map(|v| v.to_string())),
            ("max_retries", self.max_retries.map(|v| v.to_string())),
            ("retry_time", self.retry_time.map(|v| v.to_string())),
            ("account", self.account.clone()),
            ("setvar", self.setvar.clone()),
        ];
        fields.extend(optional.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))));
        fields.push(("verbose", self.verbose.to_string()));
        fields.push(("dry_run", self.dry_run.to_string()));
        fields
    }
}
