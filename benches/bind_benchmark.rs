//! Benchmark for placeholder substitution.
//!
//! Measures binding a realistic query against a mixed argument list, which
//! is the hot path when the binder sits inside logging middleware.

use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use sql_bind_rs::{BindValue, bind, try_bind};
use std::hint::black_box;

/// Realistic query shape: mixed literal kinds, one repeated placeholder.
const QUERY: &str = "INSERT INTO activities (user_id, title, distance, is_public, started_at, notes) \
     VALUES ($1, $2, $3, $4, $5, $6) \
     ON CONFLICT (user_id, started_at) DO UPDATE SET title = $2";

fn arguments() -> Vec<BindValue> {
    vec![
        BindValue::Integer(42),
        BindValue::Text("Morning run along O'Connell Street".into()),
        BindValue::Real(10.5),
        BindValue::Boolean(true),
        BindValue::from(Utc.with_ymd_and_hms(2025, 11, 28, 6, 45, 0).unwrap()),
        BindValue::Null,
    ]
}

fn bench_bind(c: &mut Criterion) {
    let args = arguments();

    c.bench_function("bind/mixed_arguments", |b| {
        b.iter(|| bind(black_box(QUERY), black_box(&args)));
    });

    c.bench_function("try_bind/mixed_arguments", |b| {
        b.iter(|| try_bind(black_box(QUERY), black_box(&args)));
    });

    c.bench_function("bind/no_placeholders", |b| {
        b.iter(|| bind(black_box("SELECT count(*) FROM items"), black_box(&args)));
    });
}

criterion_group!(benches, bench_bind);
criterion_main!(benches);
