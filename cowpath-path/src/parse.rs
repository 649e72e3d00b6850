//! Splitting a path string into fragments.

use crate::{Fragment, Key, PLACEHOLDER, ParsedPath, PathParseError};

/// Parse a path string without consulting the cache.
///
/// Tokens are classified as:
/// - `{}`: [`Fragment::Placeholder`]
/// - canonical non-negative integers (see [`parse_index`]): [`Key::Index`]
/// - anything else: [`Key::Name`]
///
/// Empty tokens are rejected.
pub fn parse(path: &str) -> Result<ParsedPath, PathParseError> {
    let mut fragments = Vec::new();
    let mut placeholder_count = 0;

    for (position, token) in path.split('.').enumerate() {
        if token.is_empty() {
            return Err(PathParseError::EmptyFragment {
                path: path.to_owned(),
                position,
            });
        }
        let fragment = if token == PLACEHOLDER {
            placeholder_count += 1;
            Fragment::Placeholder
        } else if let Some(index) = parse_index(token) {
            Fragment::Literal(Key::Index(index))
        } else {
            Fragment::Literal(Key::from(token))
        };
        fragments.push(fragment);
    }

    Ok(ParsedPath {
        source: path.to_owned(),
        fragments,
        placeholder_count,
    })
}

/// Returns the index a token denotes, if it is canonically a non-negative
/// integer: ASCII digits only, no sign, no leading zero (except `0` itself),
/// and within `usize`.
#[must_use]
pub fn parse_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => token.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_indices() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        for token in ["", "-1", "+1", " 1", "1 ", "01", "1.0", "1e3", "0x1", "abc"] {
            assert_eq!(parse_index(token), None, "{token:?}");
        }
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }

    #[test]
    fn counts_placeholders() {
        let p = parse("a.{}.b.{}").unwrap();
        assert_eq!(p.placeholder_count(), 2);
        assert_eq!(p.len(), 4);
        assert_eq!(
            p.fragments(),
            [
                Fragment::Literal(Key::from("a")),
                Fragment::Placeholder,
                Fragment::Literal(Key::from("b")),
                Fragment::Placeholder,
            ]
        );
    }

    #[test]
    fn placeholder_must_be_the_whole_token() {
        let p = parse("a{}.{}b").unwrap();
        assert_eq!(p.placeholder_count(), 0);
        assert_eq!(p.fragments()[0], Fragment::Literal(Key::from("a{}")));
    }

    #[test]
    fn single_fragment() {
        let p = parse("7").unwrap();
        assert_eq!(p.fragments(), [Fragment::Literal(Key::Index(7))]);
        assert_eq!(p.to_string(), "7");
    }

    #[test]
    fn rejects_empty_fragments() {
        for (path, position) in [("", 0), (".a", 0), ("a.", 1), ("a..b", 1)] {
            assert_eq!(
                parse(path),
                Err(PathParseError::EmptyFragment {
                    path: path.to_owned(),
                    position
                })
            );
        }
    }
}
