//! Serde round-trip for the value type, gated on the `serde` feature.

#![cfg(feature = "serde")]

use chrono::{TimeZone, Utc};
use sql_bind_rs::BindValue;

#[test]
fn test_bind_value_roundtrip() {
    let values = vec![
        BindValue::Null,
        BindValue::Integer(-5),
        BindValue::Text("it's".into()),
        BindValue::Timestamp(Utc.with_ymd_and_hms(2025, 11, 28, 14, 30, 0).unwrap()),
    ];
    let json = serde_json::to_string(&values).unwrap();
    let back: Vec<BindValue> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);
}
