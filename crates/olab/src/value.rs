//! Dynamically typed field values.
//!
//! A `Record` can hold anything a MATLAB struct field can: numbers, text,
//! logicals, nested lists, numeric arrays and other records. `Value` is the
//! closed set of those shapes, with `From` conversions so callers rarely have
//! to spell a variant out.
use std::fmt;

use ndarray::{Array, Array1, ArrayD, Dimension};

use crate::record::Record;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Array(ArrayD<f64>),
    Record(Record),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Flatten nested lists and arrays into a single list of leaf values.
    ///
    /// Array elements come out in logical row-major order as `Value::Float`.
    /// Records are leaves and are not descended into.
    pub fn flatten(&self) -> Vec<Value> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<Value>) {
        match self {
            Value::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            Value::Array(a) => out.extend(a.iter().map(|&x| Value::Float(x))),
            other => out.push(other.clone()),
        }
    }

    /// Flatten into a one-dimensional numeric array.
    ///
    /// Returns `None` when any leaf is not a number or logical.
    pub fn to_flat_array(&self) -> Option<Array1<f64>> {
        self.flatten()
            .iter()
            .map(|v| match v {
                Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                other => other.as_f64(),
            })
            .collect()
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

macro_rules! from_lossless_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    // out-of-range values degrade to floats
                    i64::try_from(value)
                        .map(Value::Int)
                        .unwrap_or(Value::Float(value as f64))
                }
            }
        )*
    };
}

from_wide_int!(u64, usize, isize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<D: Dimension> From<Array<f64, D>> for Value {
    fn from(value: Array<f64, D>) -> Self {
        Value::Array(value.into_dyn())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Record(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
    } else {
        // Debug keeps the trailing ".0" on whole numbers
        write!(f, "{:?}", x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => fmt_float(*x, f),
            Value::Str(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            Value::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    write!(f, "{}", item)?;
                    if idx + 1 != items.len() {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
            Value::Array(a) => write!(f, "array({})", a),
            Value::Record(r) => write!(f, "{}", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_display_matches_repr_conventions() {
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::from(true).to_string(), "True");
        assert_eq!(Value::from(36).to_string(), "36");
        assert_eq!(Value::from(36.0).to_string(), "36.0");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from(f64::NAN).to_string(), "nan");
        assert_eq!(Value::from("Ada").to_string(), "'Ada'");
        assert_eq!(Value::from("it's").to_string(), "'it\\'s'");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
    }

    #[test]
    fn test_wide_ints_degrade_to_float() {
        assert_eq!(Value::from(7usize), Value::Int(7));
        assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn test_flatten_nested_lists_and_arrays() {
        let nested = Value::List(vec![
            Value::from(1),
            Value::from(vec!["2a", "2b"]),
            Value::from(array![[3.0, 4.0], [5.0, 6.0]]),
        ]);
        let flat = nested.flatten();
        assert_eq!(flat.len(), 7);
        assert_eq!(flat[1], Value::from("2a"));
        assert_eq!(flat[6], Value::Float(6.0));
    }

    #[test]
    fn test_to_flat_array_rejects_text() {
        let numeric = Value::from(vec![Value::from(1), Value::from(vec![2.5, 3.0]), Value::from(true)]);
        assert_eq!(numeric.to_flat_array(), Some(array![1.0, 2.5, 3.0, 1.0]));

        let mixed = Value::from(vec![Value::from(1), Value::from("x")]);
        assert_eq!(mixed.to_flat_array(), None);
    }

    #[test]
    fn test_json_objects_become_records() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"id": 1, "score": 0.25, "tags": ["a"], "meta": {"ok": true}}"#).unwrap();
        let value = Value::from(json);
        let record = value.as_record().unwrap();
        assert_eq!(record.field_names(), vec!["id", "score", "tags", "meta"]);
        assert_eq!(record["id"], Value::Int(1));
        assert_eq!(record["score"], Value::Float(0.25));
        assert_eq!(record["meta"].as_record().unwrap()["ok"], Value::Bool(true));
    }
}
