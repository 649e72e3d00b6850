//! Errors raised by session edits.

use cowpath_path::{Key, PathParseError};
use cowpath_value::ValueType;

/// Error returned by [`Session`](crate::Session) operations.
///
/// Every variant is a caller error: nothing is retried and nothing is
/// corrected silently. Locations (`at`) are rendered with substitutions
/// filled in, e.g. `items.a.x`, or `<root>` for the root value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditError {
    /// The walk had to clone through a missing or `null` value, or a session
    /// was opened on `null`. Use `ensure` to create the value first.
    NullishClone {
        /// Location of the nullish value.
        at: String,
    },

    /// More substitutions were supplied than the path has placeholders.
    SubstitutionCountMismatch {
        /// The path string.
        path: String,
        /// Number of placeholders in the path.
        expected: usize,
        /// Number of substitutions supplied.
        received: usize,
    },

    /// The walk reached a placeholder after all substitutions were consumed.
    SubstitutionMismatch {
        /// The path string.
        path: String,
        /// Index of the placeholder fragment (0-based).
        position: usize,
    },

    /// The session was already closed.
    ClosedSession,

    /// The path string could not be parsed.
    InvalidPath(PathParseError),

    /// The walk tried to step into a value that is neither an array nor an
    /// object.
    NotAContainer {
        /// Location of the value.
        at: String,
        /// What was found there.
        found: ValueType,
    },

    /// An array was addressed with a key that is not an index.
    InvalidKey {
        /// Location of the array.
        at: String,
        /// The offending key.
        key: Key,
    },

    /// An array element was assigned past the end of the array.
    IndexOutOfBounds {
        /// Location of the array.
        at: String,
        /// The index that was requested.
        index: usize,
        /// Length of the array.
        len: usize,
    },

    /// A range operation targeted something that is not an array.
    NotAnArray {
        /// Location of the target.
        at: String,
        /// What was found there, `None` if nothing was.
        found: Option<ValueType>,
    },
}

impl core::fmt::Display for EditError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EditError::NullishClone { at } => {
                write!(
                    f,
                    "cannot clone nullish value at '{at}': use `ensure` to create it first"
                )
            }
            EditError::SubstitutionCountMismatch {
                path,
                expected,
                received,
            } => {
                write!(
                    f,
                    "{expected} substitutions expected for path '{path}' but received {received}"
                )
            }
            EditError::SubstitutionMismatch { path, position } => {
                write!(
                    f,
                    "path '{path}': no substitution left for the placeholder at fragment {position}"
                )
            }
            EditError::ClosedSession => write!(f, "cannot make changes to a closed session"),
            EditError::InvalidPath(err) => write!(f, "invalid path: {err}"),
            EditError::NotAContainer { at, found } => {
                write!(f, "cannot step into {found} at '{at}'")
            }
            EditError::InvalidKey { at, key } => {
                write!(f, "array at '{at}' cannot be indexed by '{key}'")
            }
            EditError::IndexOutOfBounds { at, index, len } => {
                write!(
                    f,
                    "index {index} out of bounds for array at '{at}' (length {len})"
                )
            }
            EditError::NotAnArray { at, found } => match found {
                Some(found) => write!(f, "expected an array at '{at}', found {found}"),
                None => write!(f, "expected an array at '{at}', found nothing"),
            },
        }
    }
}

impl core::error::Error for EditError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            EditError::InvalidPath(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PathParseError> for EditError {
    fn from(err: PathParseError) -> Self {
        EditError::InvalidPath(err)
    }
}
