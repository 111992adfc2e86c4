//! Plain-text formatter

use super::Formatter;
use crate::core::log_level::LogLevel;
use crate::core::log_source::LogSource;

/// The default formatter: `[<source>] <level>: <message>`, or
/// `<level>: <message>` when the event has no source. Ignores the style
/// hint.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFormatter;

impl BasicFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for BasicFormatter {
    fn render(&self, level: LogLevel, message: &str, source: &LogSource, _styled: bool) -> String {
        match source.display_name() {
            Some(name) => format!("[{}] {}: {}", name, level.name(), message),
            None => format!("{}: {}", level.name(), message),
        }
    }
}
