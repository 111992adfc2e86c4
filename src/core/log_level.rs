//! Log level definitions

use std::fmt;
use std::str::FromStr;

use crate::core::error::LogError;

/// Severity tag attached to every log call.
///
/// The library ships five predefined levels; consumers can mint further
/// levels with [`LogLevel::Custom`]. Equality is by variant identity (a
/// custom level is identified by its name), which is what level-set
/// membership checks rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    /// A user-defined level. The name is the identity: two `Custom`
    /// levels with the same name are the same level.
    Custom(&'static str),
}

impl LogLevel {
    /// The five predefined levels, most severe first.
    pub const BUILTIN: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
            LogLevel::Custom(name) => name,
        }
    }

    /// Fixed color used by the ANSI formatter when styling is requested.
    /// Levels outside the predefined five all map to bright yellow.
    #[must_use]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Error => BrightRed,
            LogLevel::Warn => Yellow,
            LogLevel::Info => BrightGreen,
            LogLevel::Debug => BrightBlue,
            LogLevel::Trace => BrightCyan,
            LogLevel::Custom(_) => BrightYellow,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    /// Parses the five predefined level names, case-insensitively.
    /// Custom levels are defined in code, not parsed from text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(LogLevel::Error.name(), "Error");
        assert_eq!(LogLevel::Trace.name(), "Trace");
        assert_eq!(format!("{}", LogLevel::Warn), "Warn");
    }

    #[test]
    fn test_custom_identity() {
        let audit = LogLevel::Custom("Audit");
        assert_eq!(audit, LogLevel::Custom("Audit"));
        assert_ne!(audit, LogLevel::Custom("Metrics"));
        assert_ne!(audit, LogLevel::Info);
        assert_eq!(audit.name(), "Audit");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("ERROR".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("Trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("audit".parse::<LogLevel>().is_err());
    }
}
