#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

use core::fmt;
use std::sync::Arc;

mod error;
pub use error::PathParseError;

mod parse;
pub use parse::{parse, parse_index};

mod cache;
pub use cache::{cached_paths, resolve};

/// The placeholder token. Its key is taken from the substitution list.
pub const PLACEHOLDER: &str = "{}";

/// A concrete key: an object field name or an array index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// A field name
    Name(Arc<str>),
    /// An array index
    Index(usize),
}

impl Key {
    /// Returns the key as an array index, if it is one.
    ///
    /// A name that is canonically a non-negative integer (`"3"`, not `"03"`)
    /// also counts as an index.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(name) => parse_index(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(Arc::from(name))
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(Arc::from(name))
    }
}

impl From<Arc<str>> for Key {
    fn from(name: Arc<str>) -> Self {
        Key::Name(name)
    }
}

macro_rules! impl_key_from_index {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(i: $t) -> Self {
                    Key::Index(i as usize)
                }
            }
        )*
    };
}

impl_key_from_index!(u8, u16, u32, usize);

/// Signed integers map the same way an integer token in a path string does:
/// non-negative values are indices, negative ones (`-1`) are names.
macro_rules! impl_key_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(i: $t) -> Self {
                    match usize::try_from(i) {
                        Ok(index) => Key::Index(index),
                        Err(_) => Key::Name(Arc::from(i.to_string())),
                    }
                }
            }
        )*
    };
}

impl_key_from_signed!(i32, i64, isize);

/// Build a substitution list: `keys!["a", 3]` is `[Key::from("a"), Key::from(3)]`.
#[macro_export]
macro_rules! keys {
    () => {{
        let empty: [$crate::Key; 0] = [];
        empty
    }};
    ($($key:expr),+ $(,)?) => {
        [$($crate::Key::from($key)),+]
    };
}

/// One dot-separated segment of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// A key fixed in the path string
    Literal(Key),
    /// `{}`: the key comes from the next unconsumed substitution
    Placeholder,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Literal(key) => fmt::Display::fmt(key, f),
            Fragment::Placeholder => f.write_str(PLACEHOLDER),
        }
    }
}

/// A path string parsed into fragments.
///
/// Invariant: `placeholder_count` is the number of [`Fragment::Placeholder`]
/// entries in `fragments`, and `fragments` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    source: String,
    fragments: Vec<Fragment>,
    placeholder_count: usize,
}

impl ParsedPath {
    /// The path string this was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The fragments, in path order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of placeholder fragments.
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always `false`: a parsed path has at least one fragment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_macro_mixes_names_and_indices() {
        let owned = String::from("owned");
        let ks = keys!["a", 3, owned.as_str(), 7usize, -1];
        assert_eq!(
            ks,
            [
                Key::from("a"),
                Key::Index(3),
                Key::from("owned"),
                Key::Index(7),
                Key::from("-1"),
            ]
        );
        let none: [Key; 0] = keys![];
        assert!(none.is_empty());
    }

    #[test]
    fn key_as_index() {
        assert_eq!(Key::Index(4).as_index(), Some(4));
        assert_eq!(Key::from("4").as_index(), Some(4));
        assert_eq!(Key::from("04").as_index(), None);
        assert_eq!(Key::from("x").as_index(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Key::from("name").to_string(), "name");
        assert_eq!(Key::Index(2).to_string(), "2");
        assert_eq!(Fragment::Placeholder.to_string(), "{}");
    }
}
