//! Basic dispatcher usage example
//!
//! Demonstrates wiring one console backend, logging at different levels,
//! and reconfiguring the enabled-level set at runtime.
//!
//! Run with: cargo run --example basic_usage

use fanlog::prelude::*;

fn main() {
    // One console backend behind one dispatcher
    let dispatcher = Dispatcher::builder()
        .backend(Backend::new(ConsoleSink::stdout()))
        .build();

    // The default enabled set is {Error, Warn, Info}
    println!("1. Logging with the default level set:");
    dispatcher.trace("trace message (hidden)", LogSource::None);
    dispatcher.debug("debug message (hidden)", LogSource::None);
    dispatcher.info("info message", LogSource::None);
    dispatcher.warn("warning message", LogSource::None);
    dispatcher.err("error message", LogSource::None);
    dispatcher.flush(DEFAULT_FLUSH_TIMEOUT);

    println!("\n2. After enabling every built-in level:");
    dispatcher.set_levels(LevelSet::all_builtin());
    dispatcher.trace("trace message (now visible)", LogSource::None);
    dispatcher.debug("debug message (now visible)", LogSource::None);
    dispatcher.flush(DEFAULT_FLUSH_TIMEOUT);

    println!("\n3. Tagging messages with a source:");
    dispatcher.info("listening on 0.0.0.0:8080", LogSource::named("net"));
    dispatcher.warn("volume almost full", LogSource::detailed("disk", "/dev/sda1"));
    dispatcher.flush(DEFAULT_FLUSH_TIMEOUT);
}
