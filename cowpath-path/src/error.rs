//! Error type for path parsing.

/// Error returned when a path string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathParseError {
    /// A fragment is empty: the path is empty, starts or ends with a dot, or
    /// contains two dots in a row.
    EmptyFragment {
        /// The path string.
        path: String,
        /// Index of the empty fragment (0-based).
        position: usize,
    },
}

impl core::fmt::Display for PathParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathParseError::EmptyFragment { path, position } => {
                write!(f, "path '{path}': fragment {position} is empty")
            }
        }
    }
}

impl core::error::Error for PathParseError {}
