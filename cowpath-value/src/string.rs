//! String value type.

use core::borrow::Borrow;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::Deref;
use std::sync::Arc;

/// An immutable string value. Clones share the same allocation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VString(Arc<str>);

impl VString {
    /// Creates a string value.
    #[must_use]
    pub fn new(s: &str) -> Self {
        VString(Arc::from(s))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VString {
    fn default() -> Self {
        VString::new("")
    }
}

impl Deref for VString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VString {
    fn from(s: &str) -> Self {
        VString::new(s)
    }
}

impl From<String> for VString {
    fn from(s: String) -> Self {
        VString(Arc::from(s))
    }
}

impl PartialEq<str> for VString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for VString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Debug for VString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl Display for VString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
