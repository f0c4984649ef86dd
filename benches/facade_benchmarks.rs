//! Criterion benchmarks for rust_log_facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_log_facade::args;
use rust_log_facade::prelude::*;
use std::sync::Arc;

fn noop_logger() -> Logger {
    Logger::builder()
        .provider(Arc::new(NoopLoggerProvider::new()))
        .name("bench")
        .build()
}

// ============================================================================
// Message Logging Benchmarks
// ============================================================================

fn bench_message_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_logging");
    group.throughput(Throughput::Elements(1));

    let logger = noop_logger();
    let cx = Context::new();

    group.bench_function("info_args", |b| {
        let mut i = 0_i64;
        b.iter(|| {
            i += 1;
            logger.info(
                &cx,
                black_box("benchmark message"),
                &args!["iteration", i, "data", "test"],
            );
        });
    });

    group.bench_function("info_args_with_enabled_check", |b| {
        let mut i = 0_i64;
        b.iter(|| {
            i += 1;
            if logger.info_enabled(&cx) {
                logger.info(
                    &cx,
                    black_box("benchmark message"),
                    &args!["iteration", i, "data", "test"],
                );
            }
        });
    });

    group.bench_function("info_attr", |b| {
        let mut i = 0_i64;
        b.iter(|| {
            i += 1;
            logger.info_attr(
                &cx,
                black_box("benchmark message"),
                &[KeyValue::int("iteration", i), KeyValue::string("data", "test")],
            );
        });
    });

    group.finish();
}

// ============================================================================
// Composition Benchmarks
// ============================================================================

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");
    group.throughput(Throughput::Elements(1));

    let base = noop_logger();
    let cx = Context::new();

    group.bench_function("with", |b| {
        b.iter(|| {
            let logger = base.with(&args!["service", "test", "version", "1.0.0"]);
            black_box(logger)
        });
    });

    group.bench_function("with_attr", |b| {
        b.iter(|| {
            let logger = base.with_attr(&[
                KeyValue::string("service", "test"),
                KeyValue::string("version", "1.0.0"),
            ]);
            black_box(logger)
        });
    });

    let composed = base.with(&args!["service", "test", "version", "1.0.0"]);
    group.bench_function("info_through_composed", |b| {
        let mut i = 0_i64;
        b.iter(|| {
            i += 1;
            composed.info(&cx, black_box("benchmark message"), &args!["iteration", i]);
        });
    });

    group.finish();
}

// ============================================================================
// Event Benchmarks
// ============================================================================

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("events");
    group.throughput(Throughput::Elements(1));

    let logger = noop_logger();
    let cx = Context::new();

    group.bench_function("log_event", |b| {
        let mut i = 0_i64;
        b.iter(|| {
            i += 1;
            logger.log_event(
                &cx,
                Severity::Info,
                black_box("test.event"),
                &args!["iteration", i, "data", "test"],
            );
        });
    });

    group.bench_function("info_event_attr", |b| {
        let mut i = 0_i64;
        b.iter(|| {
            i += 1;
            logger.info_event_attr(
                &cx,
                black_box("test.event"),
                &[KeyValue::int("iteration", i)],
            );
        });
    });

    group.finish();
}

// ============================================================================
// Encoder Benchmarks
// ============================================================================

fn bench_encoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoder");
    group.throughput(Throughput::Elements(1));

    group.bench_function("encode_args_six_elements", |b| {
        let args = args!["string", "test", "int", 42, "bool", true];
        b.iter(|| black_box(encode_args(black_box(&args))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_message_logging,
    bench_composition,
    bench_events,
    bench_encoder
);
criterion_main!(benches);
