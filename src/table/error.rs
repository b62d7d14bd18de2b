//! Table error definitions

use std::error::Error;
use std::fmt;

/// Table error types
///
/// The only recoverable failure in the container is a lookup for a key that
/// is not stored. The variant carries no payload so keys stay unconstrained
/// beyond `Eq + Hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// No entry with the requested key
    KeyNotFound,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::KeyNotFound => write!(f, "Key not found"),
        }
    }
}

impl Error for TableError {}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        assert_eq!(TableError::KeyNotFound.to_string(), "Key not found");
    }
}
