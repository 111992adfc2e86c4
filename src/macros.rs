//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The target may
//! be a [`Dispatcher`] or any concrete backend handle with a matching
//! `log` method. An optional leading `[source]` argument tags the origin;
//! without it the message carries no source.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::{err, info};
//!
//! let dispatcher = Dispatcher::new();
//!
//! // Basic logging
//! info!(dispatcher, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(dispatcher, "Server listening on port {}", port);
//!
//! // With a source tag
//! err!(dispatcher, [LogSource::named("net")], "connection lost");
//! ```
//!
//! [`Dispatcher`]: crate::core::Dispatcher

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let dispatcher = Dispatcher::new();
/// use fanlog::log;
/// log!(dispatcher, LogLevel::Info, "Simple message");
/// log!(dispatcher, LogLevel::Error, "Error code: {}", 500);
/// log!(dispatcher, LogLevel::Warn, [LogSource::named("disk")], "almost full");
/// ```
#[macro_export]
macro_rules! log {
    ($target:expr, $level:expr, [$source:expr], $($arg:tt)+) => {
        $target.log($level, format!($($arg)+), $source)
    };
    ($target:expr, $level:expr, $($arg:tt)+) => {
        $target.log($level, format!($($arg)+), $crate::LogSource::None)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! err {
    ($target:expr, [$source:expr], $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Error, [$source], $($arg)+)
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($target:expr, [$source:expr], $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Warn, [$source], $($arg)+)
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($target:expr, [$source:expr], $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Info, [$source], $($arg)+)
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($target:expr, [$source:expr], $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Debug, [$source], $($arg)+)
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($target:expr, [$source:expr], $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Trace, [$source], $($arg)+)
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Backend, Dispatcher, LevelSet, LogLevel, LogSource, DEFAULT_FLUSH_TIMEOUT};
    use crate::sinks::MemorySink;

    #[test]
    fn test_log_macro_formats() {
        let capture = MemorySink::new();
        let dispatcher = Dispatcher::builder()
            .backend(Backend::new(capture.clone()))
            .build();

        log!(dispatcher, LogLevel::Info, "value: {}", 42);
        assert!(dispatcher.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["Info: value: 42"]);
    }

    #[test]
    fn test_level_macros() {
        let capture = MemorySink::new();
        let dispatcher = Dispatcher::builder()
            .backend(Backend::new(capture.clone()))
            .build();
        dispatcher.set_levels(LevelSet::all_builtin());

        err!(dispatcher, "e");
        warn!(dispatcher, "w {}", 1);
        info!(dispatcher, "i");
        debug!(dispatcher, "d");
        trace!(dispatcher, "t");
        assert!(dispatcher.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(
            capture.lines(),
            vec!["Error: e", "Warn: w 1", "Info: i", "Debug: d", "Trace: t"]
        );
    }

    #[test]
    fn test_source_argument() {
        let capture = MemorySink::new();
        let dispatcher = Dispatcher::builder()
            .backend(Backend::new(capture.clone()))
            .build();

        err!(dispatcher, [LogSource::named("net")], "down after {} retries", 3);
        assert!(dispatcher.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["[net] Error: down after 3 retries"]);
    }

    #[test]
    fn test_macros_work_on_backend_handles() {
        let capture = MemorySink::new();
        let backend = Backend::new(capture.clone());

        info!(backend, "direct");
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["Info: direct"]);
    }
}
