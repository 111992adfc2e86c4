//! Console sink implementation

use std::io::{self, Write};

use super::LogSink;
use crate::core::error::Result;

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes each rendered line to the process's stdout or stderr.
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl LogSink for ConsoleSink {
    fn emit(&mut self, line: &str) -> Result<()> {
        match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line)?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn supports_style(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "console"
    }
}
