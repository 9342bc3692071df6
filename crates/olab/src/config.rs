use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::RecordError;
use crate::record::Record;
use crate::value::Value;

/// Construction arguments for a `Record`, as a standalone object.
///
/// Mirrors a MATLAB `struct(...)` call: `positional` holds alternating
/// name/value entries and `named` holds the keyword fields applied after
/// them. Deserializes from JSON such as
/// `{"positional": ["name", "Ada"], "named": {"age": 36}}`; both keys are
/// optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "RawRecordArgs")]
pub struct RecordArgs {
    pub positional: Vec<Value>,
    pub named: IndexMap<String, Value>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawRecordArgs {
    positional: Vec<serde_json::Value>,
    named: serde_json::Map<String, serde_json::Value>,
}

impl From<RawRecordArgs> for RecordArgs {
    fn from(raw: RawRecordArgs) -> Self {
        Self {
            positional: raw.positional.into_iter().map(Value::from).collect(),
            named: raw
                .named
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
        }
    }
}

impl RecordArgs {
    pub fn new(positional: Vec<Value>, named: IndexMap<String, Value>) -> Self {
        Self { positional, named }
    }

    /// Build the record these arguments describe.
    pub fn build(self) -> Result<Record, RecordError> {
        Record::from_args(self.positional, self.named)
    }
}

impl FromStr for RecordArgs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| format!("Invalid record arguments: {}", e))
    }
}

/// Read `RecordArgs` from a JSON file.
pub fn load_record_args<P: AsRef<Path>>(path: P) -> Result<RecordArgs> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read record arguments: {}", path.as_ref().display()))?;
    let args: RecordArgs = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record arguments: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded {} positional and {} named record arguments from {}",
        args.positional.len(),
        args.named.len(),
        path.as_ref().display()
    );
    Ok(args)
}
