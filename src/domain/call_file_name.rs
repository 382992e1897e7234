use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime};
use uuid::Uuid;

/// File extension Asterisk expects in its outgoing spool.
pub const CALL_FILE_EXTENSION: &str = "call";

/// Unique name for a generated call file: `<YYYYMMDD_HHMMSS>_<token>.call`.
///
/// Produced once per invocation and passed to the writer, so the clock and
/// the UUID source are never read further down the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallFileName {
    stamp: NaiveDateTime,
    token: u64,
}

impl CallFileName {
    pub fn new(stamp: NaiveDateTime, token: u64) -> Self {
        Self { stamp, token }
    }

    /// Name derived from the given instant and UUID.
    pub fn from_parts(now: DateTime<Local>, uuid: Uuid) -> Self {
        Self::new(now.naive_local(), token_from_uuid(&uuid))
    }

    /// Name for the current local time and a fresh v4 UUID.
    pub fn generate() -> Self {
        Self::from_parts(Local::now(), Uuid::new_v4())
    }

    pub fn stamp(&self) -> String {
        self.stamp.format("%Y%m%d_%H%M%S").to_string()
    }
}

impl fmt::Display for CallFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}.{}", self.stamp(), self.token, CALL_FILE_EXTENSION)
    }
}

/// Third-from-last hyphen group of the hyphenated UUID (`time_hi_and_version`), read as hex.
fn token_from_uuid(uuid: &Uuid) -> u64 {
    let bytes = uuid.as_bytes();
    u64::from(u16::from_be_bytes([bytes[6], bytes[7]]))
}
