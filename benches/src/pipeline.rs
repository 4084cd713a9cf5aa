mod common;

use std::hint::black_box;

use common::generate_dataset;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sales::prelude::*;

/// Benchmark the full analysis with different dataset sizes
fn bench_dataset_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis_sizes");
    let options = AnalysisOptions::standard();

    for (size_name, num_records, num_sellers) in [
        ("small_1k", 1_000, 10),
        ("medium_10k", 10_000, 100),
        ("large_100k", 100_000, 1_000),
    ] {
        let dataset = generate_dataset(num_records, num_sellers, 500, 4, 0.05);

        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &dataset,
            |b, dataset| {
                b.iter(|| black_box(analyze_sales_data(dataset, &options).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark projection cost as the top product list grows
fn bench_top_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_products");
    let options = AnalysisOptions::standard();
    let dataset = generate_dataset(10_000, 20, 2_000, 6, 0.0);

    for limit in [10, 100, 1_000] {
        let analyzer = SalesAnalyzer::new(
            AnalysisConfig::default()
                .with_top_products_limit(limit)
                .with_product_revenue(true),
        );

        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, _| {
            b.iter(|| black_box(analyzer.analyze(&dataset, &options).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark report encoding
fn bench_report_writers(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_writers");
    let dataset = generate_dataset(10_000, 1_000, 500, 4, 0.0);
    let results = analyze_sales_data(&dataset, &AnalysisOptions::standard()).unwrap();

    group.bench_function("csv", |b| b.iter(|| black_box(write_csv(&results).unwrap())));
    group.bench_function("json", |b| b.iter(|| black_box(write_json(&results).unwrap())));

    group.finish();
}

criterion_group!(
    benches,
    bench_dataset_sizes,
    bench_top_products,
    bench_report_writers
);
criterion_main!(benches);
