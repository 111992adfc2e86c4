//! Backend actors: independently configured log sinks

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use crate::core::event::LogEvent;
use crate::core::level_set::LevelSet;
use crate::core::log_level::LogLevel;
use crate::core::log_source::LogSource;
use crate::core::source_filter::SourceFilter;
use crate::format::{BasicFormatter, Formatter};
use crate::sinks::LogSink;

/// Default timeout for [`LoggingBackend::flush`] barriers (5 seconds).
pub const DEFAULT_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// The capability contract of a log backend.
///
/// Every operation is a fire-and-forget message: it returns as soon as
/// the request is handed to the receiver, and the effect becomes visible
/// asynchronously. Implementations process requests one at a time in
/// receipt order and mutate only their own private state, so no
/// operation has an error channel and none may block the caller.
///
/// The one exception is [`flush`], a drain barrier that waits (bounded
/// by a timeout) until previously sent messages have been applied and
/// buffered output has reached the sink. Adapters that buffer nothing
/// can keep the default implementation.
///
/// [`flush`]: LoggingBackend::flush
pub trait LoggingBackend: Send + Sync {
    /// Replace the enabled-level set wholesale.
    fn set_levels(&self, levels: LevelSet);

    /// Enable the given levels in addition to the current set.
    fn enable_levels(&self, levels: LevelSet);

    /// Disable the given levels.
    fn disable_levels(&self, levels: LevelSet);

    /// Replace the source filter wholesale.
    fn set_source_filter(&self, filter: SourceFilter);

    /// Make a source pass this backend's filter.
    fn include_source(&self, source: LogSource);

    /// Make a source suppressed by this backend's filter.
    fn exclude_source(&self, source: LogSource);

    /// Replace the active formatter.
    fn set_formatter(&self, formatter: Arc<dyn Formatter>);

    /// Set the style hint passed to the formatter on every render. This
    /// is advisory: a backend whose sink cannot render styled output
    /// forces the hint to false regardless.
    fn set_formatting_preference(&self, styled: bool);

    /// Emit a message if this backend's level set and source filter both
    /// admit it; otherwise do nothing. Suppression is silent by design.
    fn log(&self, level: LogLevel, message: String, source: LogSource);

    /// Drain barrier: block until messages sent before this call have
    /// been applied and the sink is flushed, or until the timeout
    /// expires. Returns whether the drain completed in time.
    fn flush(&self, timeout: Duration) -> bool {
        let _ = timeout;
        true
    }
}

/// One configuration or log request, as carried through mailboxes.
///
/// The dispatcher broadcasts clones of these to every registered
/// backend; the channel-backed [`Backend`] uses the same type as its own
/// mailbox payload.
#[derive(Clone)]
pub(crate) enum BackendOp {
    SetLevels(LevelSet),
    EnableLevels(LevelSet),
    DisableLevels(LevelSet),
    SetSourceFilter(SourceFilter),
    IncludeSource(LogSource),
    ExcludeSource(LogSource),
    SetFormatter(Arc<dyn Formatter>),
    SetStylePreference(bool),
    Log(LogEvent),
}

/// Replays an op against any backend implementation.
pub(crate) fn apply_op(backend: &dyn LoggingBackend, op: BackendOp) {
    match op {
        BackendOp::SetLevels(levels) => backend.set_levels(levels),
        BackendOp::EnableLevels(levels) => backend.enable_levels(levels),
        BackendOp::DisableLevels(levels) => backend.disable_levels(levels),
        BackendOp::SetSourceFilter(filter) => backend.set_source_filter(filter),
        BackendOp::IncludeSource(source) => backend.include_source(source),
        BackendOp::ExcludeSource(source) => backend.exclude_source(source),
        BackendOp::SetFormatter(formatter) => backend.set_formatter(formatter),
        BackendOp::SetStylePreference(styled) => backend.set_formatting_preference(styled),
        BackendOp::Log(event) => backend.log(event.level, event.message, event.source),
    }
}

enum BackendMsg {
    Op(BackendOp),
    Flush(Sender<()>),
}

/// The reference [`LoggingBackend`]: a sequential actor owning one level
/// set, one source filter, one formatter, one style flag, and one sink.
///
/// Construction spawns a dedicated worker thread consuming an unbounded
/// mailbox; the handle is cheap to clone and all clones address the same
/// worker. Messages from one caller are applied in send order, messages
/// from different callers interleave in arrival order, and nothing is
/// applied concurrently: the worker is the only code that ever touches
/// the backend's state, which is why none of it sits behind a lock.
///
/// The worker drains its mailbox and flushes the sink when the last
/// handle drops. A message sent to a backend whose worker has died is
/// silently discarded.
#[derive(Clone)]
pub struct Backend {
    tx: Sender<BackendMsg>,
}

impl Backend {
    /// A backend with default configuration: levels `{Error, Warn,
    /// Info}`, an empty blacklist, the basic formatter, styling off.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        BackendBuilder::new().spawn(sink)
    }

    #[must_use]
    pub fn builder() -> BackendBuilder {
        BackendBuilder::new()
    }

    fn send(&self, op: BackendOp) {
        // Disconnected means the worker is gone; logging is best-effort.
        let _ = self.tx.send(BackendMsg::Op(op));
    }

    pub fn set_levels(&self, levels: LevelSet) {
        self.send(BackendOp::SetLevels(levels));
    }

    pub fn enable_levels(&self, levels: LevelSet) {
        self.send(BackendOp::EnableLevels(levels));
    }

    pub fn disable_levels(&self, levels: LevelSet) {
        self.send(BackendOp::DisableLevels(levels));
    }

    pub fn set_source_filter(&self, filter: SourceFilter) {
        self.send(BackendOp::SetSourceFilter(filter));
    }

    pub fn include_source(&self, source: LogSource) {
        self.send(BackendOp::IncludeSource(source));
    }

    pub fn exclude_source(&self, source: LogSource) {
        self.send(BackendOp::ExcludeSource(source));
    }

    pub fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        self.send(BackendOp::SetFormatter(formatter));
    }

    pub fn set_formatting_preference(&self, styled: bool) {
        self.send(BackendOp::SetStylePreference(styled));
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>, source: LogSource) {
        self.send(BackendOp::Log(LogEvent::new(level, message.into(), source)));
    }

    /// Wait until all messages sent before this call have been applied
    /// and the sink is flushed. Returns `false` on timeout or when the
    /// worker is gone.
    pub fn flush(&self, timeout: Duration) -> bool {
        let (ack_tx, ack_rx) = bounded(1);
        if self.tx.send(BackendMsg::Flush(ack_tx)).is_err() {
            return false;
        }
        ack_rx.recv_timeout(timeout).is_ok()
    }
}

impl LoggingBackend for Backend {
    fn set_levels(&self, levels: LevelSet) {
        Backend::set_levels(self, levels);
    }

    fn enable_levels(&self, levels: LevelSet) {
        Backend::enable_levels(self, levels);
    }

    fn disable_levels(&self, levels: LevelSet) {
        Backend::disable_levels(self, levels);
    }

    fn set_source_filter(&self, filter: SourceFilter) {
        Backend::set_source_filter(self, filter);
    }

    fn include_source(&self, source: LogSource) {
        Backend::include_source(self, source);
    }

    fn exclude_source(&self, source: LogSource) {
        Backend::exclude_source(self, source);
    }

    fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        Backend::set_formatter(self, formatter);
    }

    fn set_formatting_preference(&self, styled: bool) {
        Backend::set_formatting_preference(self, styled);
    }

    fn log(&self, level: LogLevel, message: String, source: LogSource) {
        Backend::log(self, level, message, source);
    }

    fn flush(&self, timeout: Duration) -> bool {
        Backend::flush(self, timeout)
    }
}

/// Builder for constructing a [`Backend`] with a fluent API
///
/// # Example
/// ```
/// use fanlog::prelude::*;
///
/// let backend = Backend::builder()
///     .levels(LevelSet::all_builtin())
///     .styled(true)
///     .spawn(MemorySink::new());
/// backend.log(LogLevel::Debug, "wired", LogSource::None);
/// ```
pub struct BackendBuilder {
    levels: LevelSet,
    filter: SourceFilter,
    formatter: Arc<dyn Formatter>,
    styled: bool,
}

impl BackendBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: LevelSet::default(),
            filter: SourceFilter::default(),
            formatter: Arc::new(BasicFormatter::new()),
            styled: false,
        }
    }

    /// Set the initial enabled-level set
    #[must_use = "builder methods return a new value"]
    pub fn levels(mut self, levels: LevelSet) -> Self {
        self.levels = levels;
        self
    }

    /// Set the initial source filter
    #[must_use = "builder methods return a new value"]
    pub fn source_filter(mut self, filter: SourceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the initial formatter
    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Set a formatter already shared behind an `Arc`
    #[must_use = "builder methods return a new value"]
    pub fn shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the initial style preference
    #[must_use = "builder methods return a new value"]
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Spawn the worker thread and return the backend handle.
    pub fn spawn(self, sink: impl LogSink + 'static) -> Backend {
        let (tx, rx) = unbounded();
        let state = BackendState {
            levels: self.levels,
            filter: self.filter,
            formatter: self.formatter,
            styled: self.styled,
            sink: Box::new(sink),
        };

        thread::spawn(move || run_worker(&rx, state));

        Backend { tx }
    }
}

impl Default for BackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct BackendState {
    levels: LevelSet,
    filter: SourceFilter,
    formatter: Arc<dyn Formatter>,
    styled: bool,
    sink: Box<dyn LogSink>,
}

impl BackendState {
    fn handle(&mut self, op: BackendOp) {
        match op {
            BackendOp::SetLevels(levels) => self.levels = levels,
            BackendOp::EnableLevels(levels) => {
                self.levels.union_with(&levels);
            }
            BackendOp::DisableLevels(levels) => {
                self.levels.subtract(&levels);
            }
            BackendOp::SetSourceFilter(filter) => self.filter = filter,
            BackendOp::IncludeSource(source) => {
                self.filter.include_source(&source);
            }
            BackendOp::ExcludeSource(source) => {
                self.filter.exclude_source(&source);
            }
            BackendOp::SetFormatter(formatter) => self.formatter = formatter,
            BackendOp::SetStylePreference(styled) => self.styled = styled,
            BackendOp::Log(event) => self.write(&event),
        }
    }

    /// The filtering gate: render and emit only when the level is
    /// enabled and the source passes the filter. Rendering happens fresh
    /// on every call; the configuration may have changed since the last.
    fn write(&mut self, event: &LogEvent) {
        if !self.levels.contains(event.level) || self.filter.is_filtered(&event.source) {
            return;
        }

        let styled = self.styled && self.sink.supports_style();
        let line = self
            .formatter
            .render(event.level, &event.message, &event.source, styled);

        if let Err(e) = self.sink.emit(&line) {
            eprintln!("[FANLOG ERROR] sink '{}' failed: {}", self.sink.name(), e);
        }
    }

    fn flush_sink(&mut self) {
        if let Err(e) = self.sink.flush() {
            eprintln!(
                "[FANLOG ERROR] sink '{}' failed to flush: {}",
                self.sink.name(),
                e
            );
        }
    }
}

fn run_worker(rx: &Receiver<BackendMsg>, mut state: BackendState) {
    while let Ok(msg) = rx.recv() {
        match msg {
            BackendMsg::Op(op) => state.handle(op),
            BackendMsg::Flush(ack) => {
                state.flush_sink();
                let _ = ack.send(());
            }
        }
    }
    // All handles dropped; the channel drained before disconnecting.
    state.flush_sink();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    fn capture_backend() -> (Backend, MemorySink) {
        let capture = MemorySink::new();
        let backend = Backend::new(capture.clone());
        (backend, capture)
    }

    #[test]
    fn test_default_levels_admit_info_and_above() {
        let (backend, capture) = capture_backend();

        backend.log(LogLevel::Info, "kept", LogSource::None);
        backend.log(LogLevel::Debug, "dropped", LogSource::None);
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["Info: kept"]);
    }

    #[test]
    fn test_set_levels_replaces_wholesale() {
        let (backend, capture) = capture_backend();

        backend.set_levels(LevelSet::of([LogLevel::Trace]));
        backend.log(LogLevel::Info, "dropped", LogSource::None);
        backend.log(LogLevel::Trace, "kept", LogSource::None);
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["Trace: kept"]);
    }

    #[test]
    fn test_enable_disable_levels() {
        let (backend, capture) = capture_backend();

        backend.enable_levels(LevelSet::of([LogLevel::Debug]));
        backend.disable_levels(LevelSet::of([LogLevel::Info]));
        backend.log(LogLevel::Debug, "kept", LogSource::None);
        backend.log(LogLevel::Info, "dropped", LogSource::None);
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["Debug: kept"]);
    }

    #[test]
    fn test_source_filter_gates_output() {
        let (backend, capture) = capture_backend();
        let net = LogSource::named("net");

        backend.exclude_source(net.clone());
        backend.log(LogLevel::Error, "dropped", net.clone());
        backend.log(LogLevel::Error, "kept", LogSource::named("disk"));

        backend.include_source(net.clone());
        backend.log(LogLevel::Error, "back", net);
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["[disk] Error: kept", "[net] Error: back"]);
    }

    #[test]
    fn test_messages_applied_in_send_order() {
        let (backend, capture) = capture_backend();

        // A reconfiguration enqueued after a log call must not affect it.
        backend.log(LogLevel::Info, "before", LogSource::None);
        backend.set_levels(LevelSet::empty());
        backend.log(LogLevel::Info, "after", LogSource::None);
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["Info: before"]);
    }

    #[test]
    fn test_style_preference_reaches_formatter() {
        use crate::format::AnsiFormatter;

        let (backend, capture) = capture_backend();
        backend.set_formatter(Arc::new(AnsiFormatter::new()));
        backend.set_formatting_preference(true);
        backend.log(LogLevel::Error, "boom", LogSource::None);
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert_eq!(capture.lines(), vec!["[\u{1b}[91mError\u{1b}[0m] boom"]);
    }

    #[test]
    fn test_adversarial_inputs_do_not_crash() {
        let (backend, capture) = capture_backend();

        backend.set_levels(LevelSet::empty());
        backend.log(LogLevel::Custom("Unknown"), "m", LogSource::named("nobody"));
        backend.include_source(LogSource::None);
        backend.include_source(LogSource::None);
        backend.disable_levels(LevelSet::all_builtin());
        backend.log(LogLevel::Error, "still dropped", LogSource::None);
        assert!(backend.flush(DEFAULT_FLUSH_TIMEOUT));

        assert!(capture.is_empty());
    }
}
