//! MATLAB/GNU Octave `struct` analogue.
//!
//! A `Record` is an insertion-ordered map from field name to [`Value`] with the
//! construction rules of a MATLAB struct: alternating name/value positional
//! arguments, followed by named arguments that override them.
//!
//! ```text
//! s = struct()                     Record::new()
//! s.k1 = v1                        s.set_field("k1", v1)
//! s = struct(f1, v1, f2, v2)       record!("f1", v1, "f2", v2)?
//! s = struct(k1=v1, k2=v2)         record!(k1 = v1, k2 = v2)?
//! s = struct(f1, v1, k2=v2)        record!("f1", v1; k2 = v2)?
//! ```
//!
//! Fields are stored apart from the methods, so a field may be called
//! `fieldnames` or `set_field` without shadowing anything.
use std::fmt;
use std::ops::{Index, IndexMut};

use indexmap::IndexMap;

use crate::error::RecordError;
use crate::value::Value;

#[derive(Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from positional name/value pairs and named fields.
    ///
    /// Positional pairs are applied first, in order, then the named fields;
    /// a later write to the same name overwrites the earlier one.
    ///
    /// # Errors
    ///
    /// * `RecordError::InvalidArguments` if `positional` has odd length.
    /// * `RecordError::InvalidFieldName` if a name slot holds anything other
    ///   than `Value::Str`.
    pub fn from_args<I, K, V>(positional: Vec<Value>, named: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let count = positional.len();
        if count % 2 != 0 {
            return Err(RecordError::InvalidArguments { count });
        }
        log::debug!("Building record from {} positional arguments", count);

        let mut record = Record::new();
        let mut args = positional.into_iter();
        let mut index = 0;
        while let (Some(name), Some(value)) = (args.next(), args.next()) {
            match name {
                Value::Str(name) => record.set_field(name, value),
                other => {
                    return Err(RecordError::InvalidFieldName {
                        index,
                        found: other.to_string(),
                    })
                }
            }
            index += 2;
        }

        record.bulk_assign(named);
        Ok(record)
    }

    /// Build a record from positional name/value pairs only.
    pub fn from_positional(positional: Vec<Value>) -> Result<Self, RecordError> {
        Self::from_args(positional, Vec::<(String, Value)>::new())
    }

    /// Add a field, or overwrite it if the name is already present.
    ///
    /// An overwritten field keeps its original position in `field_names`.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        log::trace!("Setting field '{}'", name);
        self.fields.insert(name, value.into());
    }

    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Apply every pair of `mapping` as a `set_field` call, in iteration order.
    pub fn bulk_assign<I, K, V>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in mapping {
            self.set_field(name, value);
        }
    }

    /// Names of the fields currently defined, in insertion order.
    ///
    /// This is a snapshot; later writes to the record are not reflected.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.fields.iter()
    }
}

/// List the field names of a record, in insertion order.
pub fn fieldnames(record: &Record) -> Vec<String> {
    record.field_names()
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        record.bulk_assign(iter);
        record
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Record {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.bulk_assign(iter);
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, name: &str) -> &Self::Output {
        match self.fields.get(name) {
            Some(value) => value,
            None => panic!("Record has no field named '{}'", name),
        }
    }
}

impl IndexMut<&str> for Record {
    fn index_mut(&mut self, name: &str) -> &mut Self::Output {
        match self.fields.get_mut(name) {
            Some(value) => value,
            None => panic!("Record has no field named '{}'", name),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Record {{")?;
        for (idx, (name, value)) in self.fields.iter().enumerate() {
            write!(f, "'{}': {}", name, value)?;
            if idx + 1 != self.fields.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "}}>")
    }
}

// Debug output is the same rendering as Display.
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Construct a [`Record`] with MATLAB-like syntax.
///
/// Positional arguments alternate name and value; named arguments follow a
/// `;`. Evaluates to `Result<Record, RecordError>`.
///
/// ```
/// use olab::{record, Value};
///
/// let s = record!("name", "Ada", "age", 36).unwrap();
/// assert_eq!(s["age"], Value::Int(36));
///
/// let s = record!("x", 1; x = 2).unwrap();
/// assert_eq!(s["x"], Value::Int(2));
///
/// let s = record!(id = 1, active = true).unwrap();
/// assert_eq!(s.field_names(), vec!["id", "active"]);
///
/// assert!(record!("odd").is_err());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::from_positional(::std::vec::Vec::new())
    };
    ($($name:ident = $value:expr),+ $(,)?) => {
        $crate::Record::from_args(
            ::std::vec::Vec::new(),
            [$((stringify!($name), $crate::Value::from($value))),+],
        )
    };
    ($($arg:expr),+ ; $($name:ident = $value:expr),* $(,)?) => {
        $crate::Record::from_args(
            ::std::vec![$($crate::Value::from($arg)),+],
            <::std::vec::Vec<(&str, $crate::Value)>>::from([$((stringify!($name), $crate::Value::from($value))),*]),
        )
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Record::from_positional(::std::vec![$($crate::Value::from($arg)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut s = Record::new();
        s.set_field("a", 1);
        s.set_field("b", 2);
        s.set_field("a", 3);
        assert_eq!(s.field_names(), vec!["a", "b"]);
        assert_eq!(s["a"], Value::Int(3));
    }

    #[test]
    fn test_invalid_field_name_reports_index() {
        let err = Record::from_positional(vec![
            Value::from("a"),
            Value::from(1),
            Value::from(2),
            Value::from(3),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidFieldName {
                index: 2,
                found: "2".to_string()
            }
        );
    }

    #[test]
    fn test_display_empty_and_nested() {
        assert_eq!(Record::new().to_string(), "<Record {}>");

        let mut inner = Record::new();
        inner.set_field("x", 1.5);
        let mut outer = Record::new();
        outer.set_field("inner", inner);
        outer.set_field("tags", vec!["a", "b"]);
        assert_eq!(
            outer.to_string(),
            "<Record {'inner': <Record {'x': 1.5}>, 'tags': ['a', 'b']}>"
        );
        assert_eq!(format!("{:?}", outer), outer.to_string());
    }

    #[test]
    #[should_panic(expected = "no field named 'missing'")]
    fn test_index_missing_field_panics() {
        let s = Record::new();
        let _ = &s["missing"];
    }
}
