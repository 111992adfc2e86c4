//! In-memory capture sink

use std::sync::Arc;

use parking_lot::Mutex;

use super::LogSink;
use crate::core::error::Result;

/// Collects emitted lines in memory.
///
/// Clones share the same backing buffer, so a test (or an embedding
/// application) can keep one handle while the backend's worker owns the
/// other and inspect everything the backend emitted.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drains the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn supports_style(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "memory"
    }
}
