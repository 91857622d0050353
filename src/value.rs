//! The loggable-value type and its SQL literal rendering.
//!
//! [`BindValue`] is a closed set of variants covering everything the binder
//! knows how to render. Callers convert their native argument types into it
//! through the `From` implementations below before binding; anything outside
//! the closed set goes through [`BindValue::other`].

use alloc::string::{String, ToString};
use core::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Timestamp layout: fixed-width nine-digit fractional seconds, trailing `Z`.
const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

/// A bound argument value, ready to be rendered as a SQL literal.
///
/// Timestamps are normalized to UTC on construction, so two values denoting
/// the same instant in different offsets render identically.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindValue {
    /// SQL NULL, also produced by `None` at any `Option` nesting depth.
    #[default]
    Null,
    /// UTF-8 text, rendered single-quoted with embedded quotes doubled.
    Text(String),
    /// Signed integer of any width up to 64 bits.
    Integer(i64),
    /// Unsigned 64-bit integer, kept apart so the full `u64` range renders.
    Unsigned(u64),
    /// IEEE 754 floating point, rendered in shortest round-tripping form.
    Real(f64),
    /// Boolean, rendered as the bare words `true` / `false`.
    Boolean(bool),
    /// An instant in time, rendered quoted in UTC with nanosecond precision.
    Timestamp(DateTime<Utc>),
    /// Pre-rendered text for types outside the closed set.
    ///
    /// Rendered single-quoted but **not** escaped: embedded quote characters
    /// pass through untouched, so the output is diagnostic-only.
    Other(String),
}

impl BindValue {
    /// Capture a value of an unrecognized type through its `Display` form.
    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn other(value: impl fmt::Display) -> Self {
        BindValue::Other(value.to_string())
    }

    /// Check if the value is Null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, BindValue::Null)
    }
}

impl fmt::Display for BindValue {
    /// Format a `BindValue` as a SQL literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Null => write!(f, "NULL"),
            BindValue::Text(s) => {
                // Escape single quotes by doubling them
                write!(f, "'")?;
                for c in s.chars() {
                    if c == '\'' {
                        write!(f, "''")?;
                    } else {
                        fmt::Write::write_char(f, c)?;
                    }
                }
                write!(f, "'")
            }
            BindValue::Integer(v) => write!(f, "{v}"),
            BindValue::Unsigned(v) => write!(f, "{v}"),
            BindValue::Real(v) => write!(f, "{v}"),
            BindValue::Boolean(v) => write!(f, "{v}"),
            BindValue::Timestamp(t) => write!(f, "'{}'", t.format(TIMESTAMP_LAYOUT)),
            BindValue::Other(s) => write!(f, "'{s}'"),
        }
    }
}

// From implementations for common argument types

impl From<i8> for BindValue {
    fn from(v: i8) -> Self {
        BindValue::Integer(i64::from(v))
    }
}

impl From<i16> for BindValue {
    fn from(v: i16) -> Self {
        BindValue::Integer(i64::from(v))
    }
}

impl From<i32> for BindValue {
    fn from(v: i32) -> Self {
        BindValue::Integer(i64::from(v))
    }
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Integer(v)
    }
}

impl From<u8> for BindValue {
    fn from(v: u8) -> Self {
        BindValue::Integer(i64::from(v))
    }
}

impl From<u16> for BindValue {
    fn from(v: u16) -> Self {
        BindValue::Integer(i64::from(v))
    }
}

impl From<u32> for BindValue {
    fn from(v: u32) -> Self {
        BindValue::Integer(i64::from(v))
    }
}

impl From<u64> for BindValue {
    fn from(v: u64) -> Self {
        BindValue::Unsigned(v)
    }
}

impl From<f32> for BindValue {
    fn from(v: f32) -> Self {
        BindValue::Real(f64::from(v))
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::Real(v)
    }
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        BindValue::Boolean(v)
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Text(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Text(v.to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for BindValue {
    fn from(v: DateTime<Tz>) -> Self {
        BindValue::Timestamp(v.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for BindValue {
    fn from(v: NaiveDateTime) -> Self {
        BindValue::Timestamp(v.and_utc())
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => BindValue::Null,
        }
    }
}

impl<T: Clone + Into<BindValue>> From<&T> for BindValue {
    fn from(v: &T) -> Self {
        v.clone().into()
    }
}
