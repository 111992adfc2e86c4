//! Multi-backend fan-out example
//!
//! One dispatcher feeds two backends with different configurations: a
//! styled ANSI console backend that only shows warnings and errors, and
//! a plain file backend that records every built-in level but suppresses
//! the chatty "net" source.
//!
//! Run with: cargo run --example fanout

use fanlog::prelude::*;

fn main() -> Result<()> {
    let console = Backend::builder()
        .levels(LevelSet::of([LogLevel::Error, LogLevel::Warn]))
        .formatter(AnsiFormatter::new())
        .styled(true)
        .spawn(ConsoleSink::stdout());

    let file = Backend::builder()
        .levels(LevelSet::all_builtin())
        .spawn(FileSink::new("fanout-demo.log")?);
    file.exclude_source(LogSource::named("net"));

    let dispatcher = Dispatcher::builder().backend(console).backend(file).build();

    dispatcher.info("starting up", LogSource::None);
    dispatcher.debug("cache warmed", LogSource::named("cache"));
    dispatcher.trace("poll tick", LogSource::named("net"));
    dispatcher.warn("certificate expires soon", LogSource::named("tls"));
    dispatcher.err("upstream unreachable", LogSource::detailed("net", "10.0.0.7"));

    dispatcher.flush(DEFAULT_FLUSH_TIMEOUT);
    println!("full record written to fanout-demo.log");

    Ok(())
}
