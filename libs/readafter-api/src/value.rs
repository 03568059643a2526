use std::fmt;

use crate::document::Document;
use crate::optime::Timestamp;

/// Dynamically typed value of a command document field.
///
/// Numeric kinds mirror what a wire decoder produces: 32- and 64-bit
/// integers stay distinct, floating point is always `Double`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Bool(bool),
    Timestamp(Timestamp),

    /// Nested sub-document.
    Document(Document),
    Array(Vec<Value>),

    Null,
}

/// Kind of a [`Value`], without its payload. Used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int32,
    Int64,
    Double,
    Bool,
    Timestamp,
    Document,
    Array,
    Null,
    /// Any integral number (`Int32`, `Int64`, or a whole `Double`).
    /// Only appears as an expected kind.
    Integer,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Double(_) => ValueKind::Double,
            Value::Bool(_) => ValueKind::Bool,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Document(_) => ValueKind::Document,
            Value::Array(_) => ValueKind::Array,
            Value::Null => ValueKind::Null,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Integral value as `i64`.
    ///
    /// Doubles are accepted only when they carry no fractional part and
    /// fit in `i64`; NaN and infinities are rejected.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::Double(v) => {
                // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
                let in_range = *v >= i64::MIN as f64 && *v < i64::MAX as f64;
                if v.is_finite() && v.fract() == 0.0 && in_range {
                    Some(*v as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Int32 => "int",
            ValueKind::Int64 => "long",
            ValueKind::Double => "double",
            ValueKind::Bool => "bool",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Document => "object",
            ValueKind::Array => "array",
            ValueKind::Null => "null",
            ValueKind::Integer => "integer",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// From impls: Rust values → Value, for building documents
// ---------------------------------------------------------------------------

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

impl From<Document> for Value {
    fn from(v: Document) -> Self {
        Value::Document(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_kinds_widen_to_i64() {
        assert_eq!(Value::Int32(-7).as_i64(), Some(-7));
        assert_eq!(Value::Int64(1 << 40).as_i64(), Some(1 << 40));
        assert_eq!(Value::Double(2.0).as_i64(), Some(2));
    }

    #[test]
    fn non_integral_values_are_not_integers() {
        assert_eq!(Value::Double(2.5).as_i64(), None);
        assert_eq!(Value::Double(f64::NAN).as_i64(), None);
        assert_eq!(Value::Double(f64::INFINITY).as_i64(), None);
        assert_eq!(Value::Double(1e19).as_i64(), None);
        assert_eq!(Value::from("2").as_i64(), None);
        assert_eq!(Value::Bool(true).as_i64(), None);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(Document::new()).kind(), ValueKind::Document);
        assert_eq!(Value::from(Timestamp::new(1, 0)).kind(), ValueKind::Timestamp);
        assert_eq!(Value::Null.kind(), ValueKind::Null);
    }
}
