use std::fmt;

/// Errors raised while reading or writing the metadata table
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem error around the sounds directory or the table file
    Io(std::io::Error),
    /// Malformed table: bad header, missing column, unparsable number
    Csv(csv::Error),
    /// A field parsed as text but failed validation
    InvalidField {
        line: u64,
        field: String,
        value: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "IO error: {err}"),
            StoreError::Csv(err) => write!(f, "Malformed sound table: {err}"),
            StoreError::InvalidField { line, field, value } => {
                write!(f, "Invalid value {value:?} for '{field}' on line {line}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Csv(err) => Some(err),
            StoreError::InvalidField { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::Csv(err)
    }
}
