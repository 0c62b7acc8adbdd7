//! crates/logz/benches/logger_benchmark.rs
//!
//! Benchmarks for emitting log lines.
//!
//! Run with: `cargo bench -p logz`

use std::io::{self, Write};
use std::sync::Mutex;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use logz::{ColorChoice, Level, Logger, LoggerConfig};

fn logger_to_sink(level: Level, colors: ColorChoice) -> Logger {
    let config = LoggerConfig::new().with_level(level).with_colors(colors);
    Logger::with_writer(config, io::sink())
}

/// Benchmark a passing INFO call with and without colors.
fn bench_info(c: &mut Criterion) {
    let mut group = c.benchmark_group("info");

    for colors in [ColorChoice::Never, ColorChoice::Always] {
        let logger = logger_to_sink(Level::Debug, colors);
        group.bench_with_input(BenchmarkId::new("emit", colors), &logger, |b, logger| {
            b.iter(|| logger.info(&[&black_box("Benchmark message"), &black_box(42)]));
        });
    }

    let logger = logger_to_sink(Level::Debug, ColorChoice::Never);
    group.bench_function("success", |b| {
        b.iter(|| logger.info_with_success(&[&black_box("Benchmark message")]));
    });

    group.finish();
}

/// Benchmark a call rejected by the threshold.
fn bench_filtered(c: &mut Criterion) {
    let logger = logger_to_sink(Level::Error, ColorChoice::Never);
    c.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(&[&black_box("Benchmark message"), &black_box(42)]));
    });
}

/// Baseline: a mutex-guarded `writeln!` producing the same line.
fn bench_writeln_baseline(c: &mut Criterion) {
    let out = Mutex::new(io::sink());
    c.bench_function("writeln_baseline", |b| {
        b.iter(|| {
            let mut out = out.lock().unwrap();
            writeln!(out, "[INFO] {} {}", black_box("Benchmark message"), black_box(42)).unwrap();
        });
    });
}

criterion_group!(benches, bench_info, bench_filtered, bench_writeln_baseline);
criterion_main!(benches);
