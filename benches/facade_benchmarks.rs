//! Criterion benchmarks for the logging facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logging_facade::prelude::*;
use std::sync::Arc;

/// Discards everything; keeps emission cost out of facade benchmarks.
struct NullSink {
    ready: bool,
}

impl Sink for NullSink {
    fn ready(&self) -> bool {
        self.ready
    }

    fn emit(&self, record: &LogRecord) {
        black_box(record);
    }
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter");
    group.throughput(Throughput::Elements(1));

    group.bench_function("no_placeholders", |b| {
        b.iter(|| {
            let fm = MessageFormatter::format(black_box("plain message"), vec![]);
            black_box(fm)
        });
    });

    group.bench_function("two_placeholders", |b| {
        b.iter(|| {
            let fm = MessageFormatter::format(
                black_box("user {} performed {}"),
                vec![LogArg::value(42), LogArg::value("login")],
            );
            black_box(fm)
        });
    });

    #[derive(Debug, thiserror::Error)]
    #[error("bench failure")]
    struct BenchFailure;

    group.bench_function("throwable_extraction", |b| {
        b.iter(|| {
            let fm = MessageFormatter::format(
                black_box("operation {} failed"),
                vec![LogArg::value("sync"), LogArg::error(BenchFailure)],
            );
            black_box(fm)
        });
    });

    group.finish();
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.throughput(Throughput::Elements(1));

    let provider = ServiceProvider::initialize(Arc::new(NullSink { ready: true }));
    provider.logger(Some("hot.path"));

    group.bench_function("cached_lookup", |b| {
        b.iter(|| {
            let logger = provider.logger(black_box(Some("hot.path")));
            black_box(logger)
        });
    });

    group.bench_function("anonymous_lookup", |b| {
        b.iter(|| {
            let logger = provider.logger(black_box(None));
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Path Benchmarks
// ============================================================================

fn bench_logging_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging_path");
    group.throughput(Throughput::Elements(1));

    let enabled = ServiceProvider::initialize(Arc::new(NullSink { ready: true }));
    let enabled_logger = enabled.logger(Some("bench"));

    group.bench_function("enabled_plain", |b| {
        b.iter(|| {
            enabled_logger.info(black_box("benchmark message"));
        });
    });

    group.bench_function("enabled_fmt", |b| {
        b.iter(|| {
            enabled_logger.info_fmt(
                black_box("value {} of {}"),
                vec![LogArg::value(7), LogArg::value(10)],
            );
        });
    });

    let disabled = ServiceProvider::initialize(Arc::new(NullSink { ready: false }));
    let disabled_logger = disabled.logger(Some("bench"));

    group.bench_function("disabled_short_circuit", |b| {
        b.iter(|| {
            disabled_logger.info_fmt(
                black_box("value {} of {}"),
                vec![LogArg::value(7), LogArg::value(10)],
            );
        });
    });

    group.finish();
}

criterion_group!(benches, bench_formatter, bench_registry, bench_logging_path);
criterion_main!(benches);
