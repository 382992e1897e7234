//! Console logging setup using `tracing-subscriber`.

use std::fmt;
use std::io::IsTerminal;

use chrono::{DateTime, Local};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::domain::LogLevel;

/// Timestamp format for log lines.
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats events as `YYYY-MM-DD HH:MM:SS LEVEL: message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}", line_prefix(&Local::now(), event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn line_prefix(now: &DateTime<Local>, level: &Level) -> String {
    format!("{} {}: ", now.format(LOG_TIME_FORMAT), level)
}

/// Initialise stderr logging at `level`.
///
/// `RUST_LOG`, when set, takes precedence over the verbosity-derived level.
/// Calling this more than once is a no-op.
pub fn init(level: LogLevel) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.level_filter().into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .event_format(LineFormat)
        .try_init();
}
