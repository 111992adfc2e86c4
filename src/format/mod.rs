//! Formatter contract and the reference formatter family

pub mod ansi;
pub mod basic;
pub mod time;

pub use ansi::AnsiFormatter;
pub use basic::BasicFormatter;
pub use time::{AbsoluteTimeFormatter, RelativeTimeFormatter, StrftimeFormatter};

use crate::core::log_level::LogLevel;
use crate::core::log_source::LogSource;

/// Sentinel substituted for a segment a formatter cannot render (for
/// example an invalid strftime pattern). A broken formatter must never
/// prevent the rest of a message from being emitted.
pub const FORMATTING_ERROR: &str = "FORMATTING ERROR";

/// Turns a filtered log event into one renderable line.
///
/// Implementations are pure: no blocking, no shared mutable state, no
/// error channel. A formatter that cannot render some segment substitutes
/// [`FORMATTING_ERROR`] for it instead of failing the call.
///
/// `styled` is the backend's style hint after the sink's capabilities
/// have been applied; formatters without styled output ignore it.
/// Immutable formatter values may be shared across many backends.
pub trait Formatter: Send + Sync {
    fn render(&self, level: LogLevel, message: &str, source: &LogSource, styled: bool) -> String;
}
