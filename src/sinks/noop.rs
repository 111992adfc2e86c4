//! Discarding sink

use super::LogSink;
use crate::core::error::Result;

/// Accepts and discards everything. Useful for benchmarks and for wiring
/// a backend whose output is intentionally dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NoopSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NoopSink {
    fn emit(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
