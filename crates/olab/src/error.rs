use std::error::Error;
use std::fmt;

/// Errors raised while constructing a `Record` from arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Positional arguments could not be paired into name/value
    InvalidArguments { count: usize },
    /// A positional argument in a name slot was not text
    InvalidFieldName { index: usize, found: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordError::InvalidArguments { count } => write!(
                f,
                "Received an odd number of positional arguments ({}); expected name/value pairs",
                count
            ),
            RecordError::InvalidFieldName { index, found } => write!(
                f,
                "Positional argument {} must be a field name, found {}",
                index, found
            ),
        }
    }
}

impl Error for RecordError {}
