//! Benchmarks for Basewatch analysis
//!
//! Run with: cargo bench

use basewatch::analysis::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_symbol(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol");
    let long_text = "token ".repeat(200);

    for (label, address) in [
        ("short", "eth"),
        ("address", "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
        ("long_text", long_text.as_str()),
    ] {
        group.bench_function(format!("derive_{}", label), |b| {
            b.iter(|| derive_symbol(black_box(address)))
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    c.bench_function("render_report", |b| {
        b.iter(|| render_report(black_box("0X833")))
    });
}

fn bench_analyze(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let analyzer = Analyzer::new(AnalysisConfig::instant());

    c.bench_function("analyze_instant", |b| {
        b.iter(|| {
            runtime
                .block_on(analyzer.analyze(black_box("0x4200000000000000000000000000000000000006")))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_symbol, bench_report, bench_analyze);
criterion_main!(benches);
