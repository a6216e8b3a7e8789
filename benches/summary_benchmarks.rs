//! Performance benchmarks for the attendance engine.
//!
//! This benchmark suite verifies that the computation stays comfortably
//! inside interactive-dashboard budgets:
//! - Single month summary: < 1ms mean
//! - Bulk report over 100 employees: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use attendance_engine::api::{create_router, AppState};
use attendance_engine::calculation::{aggregate_month, AttendanceThresholds};
use attendance_engine::config::ConfigLoader;
use attendance_engine::models::AttendanceRecord;

use axum::{body::Body, http::Request};
use chrono::{NaiveDate, NaiveTime};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a full month of on-time punch records.
fn create_month_records() -> Vec<AttendanceRecord> {
    (1..=31)
        .map(|day| AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            check_in: NaiveTime::from_hms_opt(9, 5, 0),
            check_out: NaiveTime::from_hms_opt(18, 0, 0),
            approved_leave: None,
            location: None,
        })
        .collect()
}

/// Creates a summary request body with a full month of records.
fn create_request_body(employee_id: &str) -> String {
    let records: Vec<serde_json::Value> = (1..=31)
        .map(|day| {
            serde_json::json!({
                "date": format!("2026-01-{:02}", day),
                "check_in": "09:05:00",
                "check_out": "18:00:00"
            })
        })
        .collect();

    serde_json::json!({
        "employee_id": employee_id,
        "month": 1,
        "year": 2026,
        "records": records
    })
    .to_string()
}

/// Benchmark: aggregate a single month directly, no HTTP.
fn bench_aggregate_month(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let ruleset = config.ruleset_for(2026).expect("ruleset");
    let thresholds: AttendanceThresholds = config.thresholds().expect("thresholds");
    let records = create_month_records();

    c.bench_function("aggregate_month", |b| {
        b.iter(|| {
            let summary = aggregate_month(
                black_box("emp_bench_001"),
                1,
                2026,
                &ruleset,
                &thresholds,
                &records,
            )
            .unwrap();
            black_box(summary)
        })
    });
}

/// Benchmark: bulk aggregation across many employees, as a monthly
/// compliance report would run it.
fn bench_bulk_report(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let ruleset = config.ruleset_for(2026).expect("ruleset");
    let thresholds = config.thresholds().expect("thresholds");
    let records = create_month_records();

    let mut group = c.benchmark_group("bulk_report");
    for employee_count in [10usize, 100] {
        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &employee_count,
            |b, &count| {
                b.iter(|| {
                    for i in 0..count {
                        let summary = aggregate_month(
                            &format!("emp_{i:03}"),
                            1,
                            2026,
                            &ruleset,
                            &thresholds,
                            &records,
                        )
                        .unwrap();
                        black_box(summary);
                    }
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: the full HTTP round trip for a month summary.
fn bench_summary_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body("emp_bench_001");

    c.bench_function("summary_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/attendance/summary")
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

criterion_group!(
    benches,
    bench_aggregate_month,
    bench_bulk_report,
    bench_summary_endpoint
);
criterion_main!(benches);
