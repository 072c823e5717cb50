//! Performance benchmarks for the Payroll Calculation Engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single payroll calculation: < 10μs mean
//! - Single HTTP payroll request: < 1ms mean
//! - Batch of 100 payrolls: < 1ms mean
//! - Batch of 1000 payrolls: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::api::create_router;
use payroll_engine::calculation::calculate_payroll;
use payroll_engine::models::{LeaveCategory, LeaveRecord, Period, Salary};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a leave-record set with mixed categories across the period.
fn create_leaves(count: usize) -> Vec<LeaveRecord> {
    let categories = [
        (LeaveCategory::Sick, true),
        (LeaveCategory::Casual, true),
        (LeaveCategory::Paid, true),
        (LeaveCategory::Other, false),
    ];

    (0..count)
        .map(|i| {
            let (category, approved) = categories[i % categories.len()];
            LeaveRecord::new(
                NaiveDate::from_ymd_opt(2019, 9, (i % 30) as u32 + 1).unwrap(),
                category,
                approved,
            )
        })
        .collect()
}

/// Creates the JSON body for a single payroll HTTP request.
fn create_request_body() -> String {
    serde_json::json!({
        "employee": {
            "id": "emp_bench_001",
            "monthly_salary": "10000.00"
        },
        "period": {
            "year": 2019,
            "month": 9
        },
        "leaves": [
            { "date": "2019-09-02", "category": "sick", "approved": true },
            { "date": "2019-09-03", "category": "casual", "approved": true },
            { "date": "2019-09-04", "category": "paid", "approved": true },
            { "date": "2019-09-05", "category": "other", "approved": false }
        ]
    })
    .to_string()
}

/// Benchmark: Single payroll calculation through the library API.
///
/// Target: < 10μs mean
fn bench_single_calculation(c: &mut Criterion) {
    let base = Salary::of(Decimal::from_str("10000.00").unwrap()).unwrap();
    let period = Period::new(2019, 9).unwrap();
    let leaves = create_leaves(4);

    c.bench_function("single_calculation", |b| {
        b.iter(|| {
            let payroll = calculate_payroll(
                black_box("emp_bench_001"),
                black_box(&base),
                black_box(&period),
                black_box(&leaves),
            );
            black_box(payroll)
        })
    });
}

/// Benchmark: Single payroll request through the HTTP router.
///
/// Target: < 1ms mean
fn bench_single_http_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router();
    let body = create_request_body();

    c.bench_function("single_http_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batches of payroll calculations.
///
/// Targets: 100 payrolls < 1ms mean, 1000 payrolls < 10ms mean
fn bench_payroll_batches(c: &mut Criterion) {
    let base = Salary::of(Decimal::from_str("10000.00").unwrap()).unwrap();
    let period = Period::new(2019, 9).unwrap();
    let leaves = create_leaves(4);

    let mut group = c.benchmark_group("payroll_batches");
    for batch_size in [100usize, 1000] {
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &size| {
                b.iter(|| {
                    for i in 0..size {
                        let id = format!("emp_{:04}", i);
                        let payroll =
                            calculate_payroll(&id, black_box(&base), &period, &leaves);
                        black_box(payroll);
                    }
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: Calculation with growing leave-record counts.
fn bench_leave_scaling(c: &mut Criterion) {
    let base = Salary::of(Decimal::from_str("10000.00").unwrap()).unwrap();
    let period = Period::new(2019, 9).unwrap();

    let mut group = c.benchmark_group("leave_scaling");
    for leave_count in [0usize, 4, 30] {
        let leaves = create_leaves(leave_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(leave_count),
            &leaves,
            |b, leaves| {
                b.iter(|| {
                    let payroll =
                        calculate_payroll("emp_bench_001", black_box(&base), &period, leaves);
                    black_box(payroll)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_single_http_request,
    bench_payroll_batches,
    bench_leave_scaling
);
criterion_main!(benches);
