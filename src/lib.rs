//! # Fanlog
//!
//! A pluggable, level- and source-filtered log dispatch core: one
//! front-end accepts log calls and asynchronously fans them out to any
//! number of independently configured backends.
//!
//! ## Features
//!
//! - **Non-blocking dispatch**: every log and configuration call is a
//!   fire-and-forget message to a dedicated worker
//! - **Per-backend filtering**: each backend owns its enabled-level set,
//!   source filter, formatter, and style preference
//! - **Open tag sets**: levels, sources, formatters, sinks, and whole
//!   backends are all extension points
//! - **Total operations**: no error channel on the logging path; broken
//!   formatters fall back to a sentinel instead of failing the call

pub mod config;
pub mod core;
pub mod format;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::config::{BackendProfile, FormatterSpec};
    pub use crate::core::{
        Backend, BackendBuilder, Dispatcher, DispatcherBuilder, FilterMode, LevelSet, LogError,
        LogEvent, LogLevel, LogSource, LoggingBackend, Result, SourceFilter,
        DEFAULT_FLUSH_TIMEOUT,
    };
    pub use crate::format::{
        AbsoluteTimeFormatter, AnsiFormatter, BasicFormatter, Formatter, RelativeTimeFormatter,
        StrftimeFormatter, FORMATTING_ERROR,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, LogSink, MemorySink, NoopSink};
}

pub use crate::config::{BackendProfile, FormatterSpec};
pub use crate::core::{
    Backend, BackendBuilder, Dispatcher, DispatcherBuilder, FilterMode, LevelSet, LogError,
    LogEvent, LogLevel, LogSource, LoggingBackend, Result, SourceFilter, DEFAULT_FLUSH_TIMEOUT,
};
pub use crate::format::{
    AbsoluteTimeFormatter, AnsiFormatter, BasicFormatter, Formatter, RelativeTimeFormatter,
    StrftimeFormatter, FORMATTING_ERROR,
};
pub use crate::sinks::{ConsoleSink, FileSink, LogSink, MemorySink, NoopSink};
