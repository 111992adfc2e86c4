//! Time-prefixed formatter family
//!
//! Three variants sharing the layout `[<time>] [<level>] <source>: <message>`
//! (the source segment and its separator disappear when the event has no
//! source). All three read the wall clock, not a monotonic one: if the
//! system clock is adjusted, the rendered timestamps jump with it.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use super::{Formatter, FORMATTING_ERROR};
use crate::core::log_level::LogLevel;
use crate::core::log_source::LogSource;

fn prefixed(stamp: &str, level: LogLevel, message: &str, source: &LogSource) -> String {
    match source.display_name() {
        Some(name) => format!("[{}] [{}] {}: {}", stamp, level.name(), name, message),
        None => format!("[{}] [{}] {}", stamp, level.name(), message),
    }
}

/// Prefixes each line with Unix wall-clock seconds, optionally followed
/// by a zero-padded three-digit millisecond fraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteTimeFormatter {
    fractional: bool,
}

impl AbsoluteTimeFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self { fractional: false }
    }

    /// Append a `.mmm` millisecond fraction to the timestamp.
    #[must_use]
    pub fn with_fraction(mut self) -> Self {
        self.fractional = true;
        self
    }
}

impl Formatter for AbsoluteTimeFormatter {
    fn render(&self, level: LogLevel, message: &str, source: &LogSource, _styled: bool) -> String {
        let now = Utc::now();
        let stamp = if self.fractional {
            format!("{}.{:03}", now.timestamp(), now.timestamp_subsec_millis())
        } else {
            now.timestamp().to_string()
        };
        prefixed(&stamp, level, message, source)
    }
}

/// Prefixes each line with the seconds elapsed since the formatter was
/// created.
///
/// Elapsed time is a plain borrow-subtraction of `(seconds, nanoseconds)`
/// pairs read from the wall clock. If the system clock moves backward
/// past the creation instant, the reported value goes negative; that is
/// the documented contract, not a defect.
#[derive(Debug, Clone, Copy)]
pub struct RelativeTimeFormatter {
    origin_secs: i64,
    origin_nanos: u32,
    fractional: bool,
}

impl RelativeTimeFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::anchored(Utc::now())
    }

    /// Fix the origin instant explicitly instead of sampling the clock.
    #[must_use]
    pub fn anchored(origin: DateTime<Utc>) -> Self {
        Self {
            origin_secs: origin.timestamp(),
            origin_nanos: origin.timestamp_subsec_nanos(),
            fractional: false,
        }
    }

    /// Append a `.mmm` millisecond fraction to the elapsed seconds.
    #[must_use]
    pub fn with_fraction(mut self) -> Self {
        self.fractional = true;
        self
    }

    fn elapsed(&self, now: DateTime<Utc>) -> (i64, i64) {
        let mut secs = now.timestamp() - self.origin_secs;
        let mut nanos = i64::from(now.timestamp_subsec_nanos()) - i64::from(self.origin_nanos);
        if nanos < 0 {
            secs -= 1;
            nanos += 1_000_000_000;
        }
        (secs, nanos)
    }
}

impl Default for RelativeTimeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for RelativeTimeFormatter {
    fn render(&self, level: LogLevel, message: &str, source: &LogSource, _styled: bool) -> String {
        let (secs, nanos) = self.elapsed(Utc::now());
        let stamp = if self.fractional {
            format!("{}.{:03}", secs, nanos / 1_000_000)
        } else {
            secs.to_string()
        };
        prefixed(&stamp, level, message, source)
    }
}

/// Prefixes each line with the wall-clock time rendered through a
/// caller-supplied strftime pattern.
///
/// An invalid pattern never fails the log call: the whole timestamp
/// segment renders as [`FORMATTING_ERROR`] and the level/source/message
/// framing is emitted as usual.
#[derive(Debug, Clone)]
pub struct StrftimeFormatter {
    pattern: String,
}

impl StrftimeFormatter {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

fn render_pattern(pattern: &str, at: DateTime<Utc>) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    Some(at.format_with_items(items.into_iter()).to_string())
}

impl Formatter for StrftimeFormatter {
    fn render(&self, level: LogLevel, message: &str, source: &LogSource, _styled: bool) -> String {
        let stamp = render_pattern(&self.pattern, Utc::now())
            .unwrap_or_else(|| FORMATTING_ERROR.to_string());
        prefixed(&stamp, level, message, source)
    }
}
