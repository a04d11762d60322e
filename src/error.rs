/// Errors that can occur while reading or editing a query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A `%` that is not followed by two hex digits
    MalformedEscape {
        /// Byte offset of the `%` inside the raw value
        offset: usize,
    },
    /// Percent escapes that decode to bytes which are not UTF-8
    InvalidUtf8,
    /// A key name that could not be turned into a matcher
    InvalidKey(String),
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedEscape { offset } => {
                write!(f, "Malformed percent escape at offset {offset}")
            }
            Self::InvalidUtf8 => f.write_str("Percent escapes do not decode to UTF-8"),
            Self::InvalidKey(reason) => write!(f, "Invalid key: {reason}"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Result type for query string operations
pub type Result<T> = core::result::Result<T, QueryError>;
