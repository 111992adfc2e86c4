//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod noop;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use noop::NoopSink;

use crate::core::error::Result;

/// Output destination owned by a backend.
///
/// A sink accepts one opaque unit of rendered text per [`emit`] call and
/// is assumed append-only, line-oriented, and fast; real I/O latency
/// belongs to the implementation, not the dispatch core. Sinks are moved
/// into their backend's worker thread, which serializes all access.
///
/// [`emit`]: LogSink::emit
pub trait LogSink: Send {
    /// Write one rendered line.
    fn emit(&mut self, line: &str) -> Result<()>;

    /// Flush buffered output, if any.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Whether this sink can render styled (e.g. ANSI-colored) output.
    /// A backend forces its style hint to false for sinks that cannot,
    /// regardless of the configured preference.
    fn supports_style(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}
