use tracing::level_filters::LevelFilter;

/// Console log level selected by the number of `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Critical,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Map a `-v` repeat count to a level.
    ///
    /// The table is not monotonic: no flag and `-vvv` both mean INFO, while a
    /// single `-v` is the quietest setting.
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Info,
            1 => LogLevel::Critical,
            2 => LogLevel::Warning,
            3 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// tracing has no CRITICAL level; ERROR is the closest filter.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Critical => LevelFilter::ERROR,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}
