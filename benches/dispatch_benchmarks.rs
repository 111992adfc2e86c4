//! Criterion benchmarks for fanlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use fanlog::prelude::*;

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let source = LogSource::named("net");

    group.bench_function("basic", |b| {
        let formatter = BasicFormatter::new();
        b.iter(|| {
            black_box(formatter.render(
                black_box(LogLevel::Info),
                black_box("benchmark message"),
                &source,
                false,
            ))
        });
    });

    group.bench_function("ansi_styled", |b| {
        let formatter = AnsiFormatter::new();
        b.iter(|| {
            black_box(formatter.render(
                black_box(LogLevel::Error),
                black_box("benchmark message"),
                &source,
                true,
            ))
        });
    });

    group.bench_function("absolute_time", |b| {
        let formatter = AbsoluteTimeFormatter::new().with_fraction();
        b.iter(|| {
            black_box(formatter.render(
                black_box(LogLevel::Info),
                black_box("benchmark message"),
                &source,
                false,
            ))
        });
    });

    group.bench_function("strftime", |b| {
        let formatter = StrftimeFormatter::new("%Y-%m-%d %H:%M:%S");
        b.iter(|| {
            black_box(formatter.render(
                black_box(LogLevel::Info),
                black_box("benchmark message"),
                &source,
                false,
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    group.bench_function("backend_log_admitted", |b| {
        let backend = Backend::new(NoopSink::new());
        b.iter(|| {
            backend.log(LogLevel::Info, black_box("benchmark message"), LogSource::None);
        });
        backend.flush(DEFAULT_FLUSH_TIMEOUT);
    });

    group.bench_function("backend_log_suppressed", |b| {
        let backend = Backend::builder()
            .levels(LevelSet::empty())
            .spawn(NoopSink::new());
        b.iter(|| {
            backend.log(LogLevel::Info, black_box("benchmark message"), LogSource::None);
        });
        backend.flush(DEFAULT_FLUSH_TIMEOUT);
    });

    group.bench_function("dispatcher_fanout_3_backends", |b| {
        let dispatcher = Dispatcher::builder()
            .backend(Backend::new(NoopSink::new()))
            .backend(Backend::new(NoopSink::new()))
            .backend(Backend::new(NoopSink::new()))
            .build();
        b.iter(|| {
            dispatcher.info(black_box("benchmark message"), LogSource::None);
        });
        dispatcher.flush(DEFAULT_FLUSH_TIMEOUT);
    });

    group.finish();
}

criterion_group!(benches, bench_formatters, bench_dispatch);
criterion_main!(benches);
