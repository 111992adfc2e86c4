//! Core dispatch types and traits

pub mod backend;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod level_set;
pub mod log_level;
pub mod log_source;
pub mod source_filter;

pub use backend::{Backend, BackendBuilder, LoggingBackend, DEFAULT_FLUSH_TIMEOUT};
pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use error::{LogError, Result};
pub use event::LogEvent;
pub use level_set::LevelSet;
pub use log_level::LogLevel;
pub use log_source::LogSource;
pub use source_filter::{FilterMode, SourceFilter};
