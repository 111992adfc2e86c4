//! Dispatcher: the front-line actor fanning calls out to backends

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use crate::core::backend::{apply_op, BackendOp, LoggingBackend};
use crate::core::event::LogEvent;
use crate::core::level_set::LevelSet;
use crate::core::log_level::LogLevel;
use crate::core::log_source::LogSource;
use crate::core::source_filter::SourceFilter;
use crate::format::Formatter;

enum DispatchMsg {
    Append(Arc<dyn LoggingBackend>),
    Replace(Vec<Arc<dyn LoggingBackend>>),
    Broadcast(BackendOp),
    Flush(Sender<()>, Duration),
}

/// Front-line log entry point holding an ordered list of backends.
///
/// The dispatcher is an actor of the same shape as [`Backend`]: a cloneable
/// handle feeding an unbounded mailbox consumed by one worker thread. Every
/// log and configuration call is broadcast, in registration order, to every
/// currently registered backend, fire-and-forget: the dispatcher's own
/// message counts as handled once the sends are issued, not once backends
/// have applied them. A log call issued right after a configuration call
/// may therefore be filtered under either the old or the new configuration
/// of any given backend; only per-backend send order is guaranteed.
///
/// The dispatcher never inspects a backend's filtering decision and holds
/// no filtering state of its own.
///
/// Construct one explicitly and hand clones to the code that needs to log;
/// there is no process-wide implicit instance.
///
/// [`Backend`]: crate::core::backend::Backend
#[derive(Clone)]
pub struct Dispatcher {
    tx: Sender<DispatchMsg>,
}

impl Dispatcher {
    /// A dispatcher with no registered backends. Log calls are accepted
    /// and go nowhere until a backend is appended.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        thread::spawn(move || run_worker(&rx));
        Self { tx }
    }

    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    fn send(&self, msg: DispatchMsg) {
        let _ = self.tx.send(msg);
    }

    fn broadcast(&self, op: BackendOp) {
        self.send(DispatchMsg::Broadcast(op));
    }

    /// Add one backend to the tail of the list.
    pub fn append_backend<B: LoggingBackend + 'static>(&self, backend: B) {
        self.append_shared(Arc::new(backend));
    }

    /// Add one already-shared backend to the tail of the list.
    pub fn append_shared(&self, backend: Arc<dyn LoggingBackend>) {
        self.send(DispatchMsg::Append(backend));
    }

    /// Replace the whole backend list with a copy of `backends`.
    /// Backends dropped from the list receive no shutdown signal; they
    /// simply stop receiving broadcasts.
    pub fn set_backends(&self, backends: &[Arc<dyn LoggingBackend>]) {
        self.send(DispatchMsg::Replace(backends.to_vec()));
    }

    /// Broadcast a log call to every registered backend; each applies
    /// its own level and source filter.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, source: LogSource) {
        self.broadcast(BackendOp::Log(LogEvent::new(level, message.into(), source)));
    }

    pub fn err(&self, message: impl Into<String>, source: LogSource) {
        self.log(LogLevel::Error, message, source);
    }

    pub fn warn(&self, message: impl Into<String>, source: LogSource) {
        self.log(LogLevel::Warn, message, source);
    }

    pub fn info(&self, message: impl Into<String>, source: LogSource) {
        self.log(LogLevel::Info, message, source);
    }

    pub fn debug(&self, message: impl Into<String>, source: LogSource) {
        self.log(LogLevel::Debug, message, source);
    }

    pub fn trace(&self, message: impl Into<String>, source: LogSource) {
        self.log(LogLevel::Trace, message, source);
    }

    pub fn set_levels(&self, levels: LevelSet) {
        self.broadcast(BackendOp::SetLevels(levels));
    }

    pub fn enable_levels(&self, levels: LevelSet) {
        self.broadcast(BackendOp::EnableLevels(levels));
    }

    pub fn disable_levels(&self, levels: LevelSet) {
        self.broadcast(BackendOp::DisableLevels(levels));
    }

    pub fn set_source_filter(&self, filter: SourceFilter) {
        self.broadcast(BackendOp::SetSourceFilter(filter));
    }

    pub fn include_source(&self, source: LogSource) {
        self.broadcast(BackendOp::IncludeSource(source));
    }

    pub fn exclude_source(&self, source: LogSource) {
        self.broadcast(BackendOp::ExcludeSource(source));
    }

    pub fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        self.broadcast(BackendOp::SetFormatter(formatter));
    }

    pub fn set_formatting_preference(&self, styled: bool) {
        self.broadcast(BackendOp::SetStylePreference(styled));
    }

    /// Drain barrier: wait until broadcasts issued before this call have
    /// reached every backend and each backend reports its own drain
    /// complete. The timeout bounds each backend's individual drain, so
    /// the total wait can reach one timeout per registered backend.
    pub fn flush(&self, timeout: Duration) -> bool {
        let (ack_tx, ack_rx) = bounded(1);
        if self.tx.send(DispatchMsg::Flush(ack_tx, timeout)).is_err() {
            return false;
        }
        ack_rx.recv().is_ok()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatchers expose the full backend contract themselves, so one can
/// be registered as a backend of another and trees of dispatchers
/// compose.
impl LoggingBackend for Dispatcher {
    fn set_levels(&self, levels: LevelSet) {
        Dispatcher::set_levels(self, levels);
    }

    fn enable_levels(&self, levels: LevelSet) {
        Dispatcher::enable_levels(self, levels);
    }

    fn disable_levels(&self, levels: LevelSet) {
        Dispatcher::disable_levels(self, levels);
    }

    fn set_source_filter(&self, filter: SourceFilter) {
        Dispatcher::set_source_filter(self, filter);
    }

    fn include_source(&self, source: LogSource) {
        Dispatcher::include_source(self, source);
    }

    fn exclude_source(&self, source: LogSource) {
        Dispatcher::exclude_source(self, source);
    }

    fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        Dispatcher::set_formatter(self, formatter);
    }

    fn set_formatting_preference(&self, styled: bool) {
        Dispatcher::set_formatting_preference(self, styled);
    }

    fn log(&self, level: LogLevel, message: String, source: LogSource) {
        Dispatcher::log(self, level, message, source);
    }

    fn flush(&self, timeout: Duration) -> bool {
        Dispatcher::flush(self, timeout)
    }
}

fn run_worker(rx: &Receiver<DispatchMsg>) {
    let mut backends: Vec<Arc<dyn LoggingBackend>> = Vec::new();

    while let Ok(msg) = rx.recv() {
        match msg {
            DispatchMsg::Append(backend) => backends.push(backend),
            DispatchMsg::Replace(replacement) => backends = replacement,
            DispatchMsg::Broadcast(op) => {
                for backend in &backends {
                    apply_op(backend.as_ref(), op.clone());
                }
            }
            DispatchMsg::Flush(ack, timeout) => {
                for backend in &backends {
                    backend.flush(timeout);
                }
                let _ = ack.send(());
            }
        }
    }
}

/// Builder for constructing a [`Dispatcher`] with backends registered
/// before the first message
///
/// # Example
/// ```
/// use fanlog::prelude::*;
///
/// let capture = MemorySink::new();
/// let dispatcher = Dispatcher::builder()
///     .backend(Backend::new(capture.clone()))
///     .build();
/// dispatcher.info("wired", LogSource::None);
/// ```
pub struct DispatcherBuilder {
    backends: Vec<Arc<dyn LoggingBackend>>,
}

impl DispatcherBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Register a backend
    #[must_use = "builder methods return a new value"]
    pub fn backend<B: LoggingBackend + 'static>(mut self, backend: B) -> Self {
        self.backends.push(Arc::new(backend));
        self
    }

    /// Register an already-shared backend
    #[must_use = "builder methods return a new value"]
    pub fn shared(mut self, backend: Arc<dyn LoggingBackend>) -> Self {
        self.backends.push(backend);
        self
    }

    /// Build the dispatcher
    pub fn build(self) -> Dispatcher {
        let dispatcher = Dispatcher::new();
        dispatcher.set_backends(&self.backends);
        dispatcher
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::{Backend, DEFAULT_FLUSH_TIMEOUT};
    use crate::sinks::MemorySink;

    fn capture_backend() -> (Backend, MemorySink) {
        let capture = MemorySink::new();
        let backend = Backend::new(capture.clone());
        (backend, capture)
    }

    #[test]
    fn test_empty_dispatcher_accepts_calls() {
        let dispatcher = Dispatcher::new();
        dispatcher.info("nowhere to go", LogSource::None);
        assert!(dispatcher.flush(DEFAULT_FLUSH_TIMEOUT));
    }

    #[test]
    fn test_broadcast_reaches_all_backends() {
        let (b1, c1) = capture_backend();
        let (b2, c2) = capture_backend();

        let dispatcher = Dispatcher::builder().backend(b1).backend(b2).build();
        dispatcher.err("fan out", LogSource::None);
        assert!(dispatcher.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(c1.lines(), vec!["Error: fan out"]);
        assert_eq!(c2.lines(), vec!["Error: fan out"]);
    }

    #[test]
    fn test_set_backends_replaces_list() {
        let (b1, c1) = capture_backend();
        let (b2, c2) = capture_backend();

        let dispatcher = Dispatcher::new();
        dispatcher.append_backend(b1);
        dispatcher.append_backend(b2.clone());

        let replacement: Vec<Arc<dyn LoggingBackend>> = vec![Arc::new(b2)];
        dispatcher.set_backends(&replacement);
        dispatcher.info("only second", LogSource::None);
        assert!(dispatcher.flush(DEFAULT_FLUSH_TIMEOUT));

        assert!(c1.is_empty());
        assert_eq!(c2.lines(), vec!["Info: only second"]);
    }

    #[test]
    fn test_convenience_ops_carry_fixed_levels() {
        let (backend, capture) = capture_backend();
        let dispatcher = Dispatcher::builder().backend(backend).build();
        dispatcher.set_levels(LevelSet::all_builtin());

        dispatcher.err("e", LogSource::None);
        dispatcher.warn("w", LogSource::None);
        dispatcher.info("i", LogSource::None);
        dispatcher.debug("d", LogSource::None);
        dispatcher.trace("t", LogSource::None);
        assert!(dispatcher.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(
            capture.lines(),
            vec!["Error: e", "Warn: w", "Info: i", "Debug: d", "Trace: t"]
        );
    }

    #[test]
    fn test_dispatchers_compose() {
        let (backend, capture) = capture_backend();
        let inner = Dispatcher::builder().backend(backend).build();
        let outer = Dispatcher::builder().backend(inner.clone()).build();

        outer.err("through both", LogSource::None);
        assert!(outer.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["Error: through both"]);
    }
}
