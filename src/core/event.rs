//! Log event structure

use crate::core::log_level::LogLevel;
use crate::core::log_source::LogSource;

/// One log call in flight: the level, the opaque message text, and the
/// origin tag. Events are built at the call site and travel through actor
/// mailboxes to each backend, which filters and renders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
    pub source: LogSource,
}

impl LogEvent {
    /// Sanitize the message so every rendered event stays a single line.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape
    /// sequences; sinks treat each rendered event as one opaque unit and
    /// an embedded newline would split it into fake entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String, source: LogSource) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kept_verbatim_without_control_chars() {
        let event = LogEvent::new(LogLevel::Info, "plain text".to_string(), LogSource::None);
        assert_eq!(event.message, "plain text");
    }

    #[test]
    fn test_newlines_escaped() {
        let event = LogEvent::new(
            LogLevel::Info,
            "line\nError: forged entry".to_string(),
            LogSource::None,
        );
        assert!(!event.message.contains('\n'));
        assert!(event.message.contains("\\n"));
    }
}
