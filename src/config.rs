//! Backend configuration profiles
//!
//! A [`BackendProfile`] is a serializable description of one backend's
//! filtering and rendering setup: level names, filter polarity and
//! source kinds, formatter choice, and style preference. Profiles are
//! applied to any [`LoggingBackend`] through the ordinary configuration
//! messages, so they work equally on a single backend or on a whole
//! dispatcher.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::backend::LoggingBackend;
use crate::core::error::Result;
use crate::core::level_set::LevelSet;
use crate::core::log_level::LogLevel;
use crate::core::log_source::LogSource;
use crate::core::source_filter::{FilterMode, SourceFilter};
use crate::format::{
    AbsoluteTimeFormatter, AnsiFormatter, BasicFormatter, Formatter, RelativeTimeFormatter,
    StrftimeFormatter,
};

/// Selects and parameterizes one of the reference formatters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatterSpec {
    #[default]
    Basic,
    Ansi,
    AbsoluteTime {
        #[serde(default)]
        fractional: bool,
    },
    RelativeTime {
        #[serde(default)]
        fractional: bool,
    },
    Strftime {
        pattern: String,
    },
}

impl FormatterSpec {
    /// Construct the described formatter. Relative-time formatters are
    /// anchored at the moment this method runs.
    #[must_use]
    pub fn build(&self) -> Arc<dyn Formatter> {
        match self {
            FormatterSpec::Basic => Arc::new(BasicFormatter::new()),
            FormatterSpec::Ansi => Arc::new(AnsiFormatter::new()),
            FormatterSpec::AbsoluteTime { fractional } => {
                let formatter = AbsoluteTimeFormatter::new();
                Arc::new(if *fractional {
                    formatter.with_fraction()
                } else {
                    formatter
                })
            }
            FormatterSpec::RelativeTime { fractional } => {
                let formatter = RelativeTimeFormatter::new();
                Arc::new(if *fractional {
                    formatter.with_fraction()
                } else {
                    formatter
                })
            }
            FormatterSpec::Strftime { pattern } => Arc::new(StrftimeFormatter::new(pattern.clone())),
        }
    }
}

/// One backend's configuration, as read from a config file.
///
/// Level names are the five predefined ones (case-insensitive); custom
/// levels are defined in code and cannot appear in a profile. Source
/// entries are kinds; a profile cannot name the no-source tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendProfile {
    pub levels: Vec<String>,
    pub filter_mode: FilterMode,
    pub sources: Vec<String>,
    pub formatter: FormatterSpec,
    pub styled: bool,
}

impl Default for BackendProfile {
    fn default() -> Self {
        Self {
            levels: vec!["error".into(), "warn".into(), "info".into()],
            filter_mode: FilterMode::Blacklist,
            sources: Vec::new(),
            formatter: FormatterSpec::Basic,
            styled: false,
        }
    }
}

impl BackendProfile {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse the profile's level names into a [`LevelSet`].
    pub fn level_set(&self) -> Result<LevelSet> {
        let mut levels = LevelSet::empty();
        for name in &self.levels {
            levels.insert(name.parse::<LogLevel>()?);
        }
        Ok(levels)
    }

    /// Build the profile's [`SourceFilter`].
    #[must_use]
    pub fn source_filter(&self) -> SourceFilter {
        SourceFilter::of(
            self.filter_mode,
            self.sources
                .iter()
                .map(|kind| LogSource::named(kind.clone())),
        )
    }

    /// Push this profile's configuration to a backend (or, through a
    /// dispatcher, to every registered backend) via the usual
    /// asynchronous configuration messages.
    pub fn apply_to(&self, backend: &dyn LoggingBackend) -> Result<()> {
        let levels = self.level_set()?;
        backend.set_levels(levels);
        backend.set_source_filter(self.source_filter());
        backend.set_formatter(self.formatter.build());
        backend.set_formatting_preference(self.styled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::{Backend, DEFAULT_FLUSH_TIMEOUT};
    use crate::sinks::MemorySink;

    #[test]
    fn test_default_profile() {
        let profile = BackendProfile::default();
        assert_eq!(
            profile.level_set().unwrap(),
            LevelSet::of([LogLevel::Error, LogLevel::Warn, LogLevel::Info])
        );
        assert_eq!(profile.formatter, FormatterSpec::Basic);
        assert!(!profile.styled);
    }

    #[test]
    fn test_parse_json_profile() {
        let profile = BackendProfile::from_json(
            r#"{
                "levels": ["Error", "debug"],
                "filter_mode": "whitelist",
                "sources": ["net"],
                "formatter": {"kind": "strftime", "pattern": "%H:%M:%S"},
                "styled": true
            }"#,
        )
        .expect("valid profile");

        assert_eq!(
            profile.level_set().unwrap(),
            LevelSet::of([LogLevel::Error, LogLevel::Debug])
        );
        assert_eq!(profile.filter_mode, FilterMode::Whitelist);
        assert!(profile.styled);

        let filter = profile.source_filter();
        assert!(!filter.is_filtered(&LogSource::named("net")));
        assert!(filter.is_filtered(&LogSource::named("disk")));
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let profile = BackendProfile {
            levels: vec!["audit".into()],
            ..BackendProfile::default()
        };
        assert!(profile.level_set().is_err());
    }

    #[test]
    fn test_apply_to_backend() {
        let capture = MemorySink::new();
        let backend = Backend::new(capture.clone());

        let profile = BackendProfile {
            levels: vec!["trace".into()],
            ..BackendProfile::default()
        };
        profile.apply_to(&backend).expect("apply profile");

        backend.log(LogLevel::Trace, "enabled by profile", LogSource::None);
        backend.log(LogLevel::Info, "no longer enabled", LogSource::None);
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["Trace: enabled by profile"]);
    }
}
