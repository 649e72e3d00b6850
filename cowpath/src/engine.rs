//! The clone-on-write walk from the root to the edited slot.

use std::borrow::Cow;
use std::fmt::Write;

use cowpath_path::{Fragment, Key, ParsedPath};
use cowpath_value::Value;

use crate::clone::CloneSet;
use crate::error::EditError;
use crate::slot::Slot;

/// How the root is rendered in error locations.
pub(crate) const ROOT: &str = "<root>";

/// The keys resolved so far, used to render error locations.
pub(crate) struct Trail<'p> {
    path: &'p ParsedPath,
    keys: Vec<Key>,
}

impl<'p> Trail<'p> {
    fn new(path: &'p ParsedPath) -> Self {
        Self {
            path,
            keys: Vec::with_capacity(path.len()),
        }
    }

    fn push(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// Location of the value the trail currently points at.
    pub(crate) fn at(&self) -> String {
        if self.keys.is_empty() {
            return ROOT.to_owned();
        }
        let mut out = String::new();
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            let _ = write!(out, "{key}");
        }
        out
    }

    /// Location of the child `key` of the value the trail points at.
    pub(crate) fn at_child(&self, key: &Key) -> String {
        if self.keys.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.at())
        }
    }
}

/// Consumes substitutions left to right as placeholders are reached.
struct Substitutions<'s> {
    remaining: core::slice::Iter<'s, Key>,
}

impl Substitutions<'_> {
    fn key_for(
        &mut self,
        fragment: &Fragment,
        path: &ParsedPath,
        position: usize,
    ) -> Result<Key, EditError> {
        match fragment {
            Fragment::Literal(key) => Ok(key.clone()),
            Fragment::Placeholder => {
                self.remaining
                    .next()
                    .cloned()
                    .ok_or_else(|| EditError::SubstitutionMismatch {
                        path: path.source().to_owned(),
                        position,
                    })
            }
        }
    }
}

fn check_substitution_count(path: &ParsedPath, substitutions: &[Key]) -> Result<(), EditError> {
    if path.placeholder_count() < substitutions.len() {
        return Err(EditError::SubstitutionCountMismatch {
            path: path.source().to_owned(),
            expected: path.placeholder_count(),
            received: substitutions.len(),
        });
    }
    Ok(())
}

/// Object field name for a key. Indices address the field with the same
/// decimal name, so `a.0` on an object is the field `"0"`.
pub(crate) fn field_name(key: &Key) -> Cow<'_, str> {
    match key {
        Key::Name(name) => Cow::Borrowed(name),
        Key::Index(i) => Cow::Owned(i.to_string()),
    }
}

/// Array index for a key, or `InvalidKey`.
pub(crate) fn element_index(key: &Key, trail: &Trail<'_>) -> Result<usize, EditError> {
    key.as_index().ok_or_else(|| EditError::InvalidKey {
        at: trail.at(),
        key: key.clone(),
    })
}

/// Walk `path` from `root`, copying every container on the way, and hand the
/// slot named by the last fragment to `terminal`.
///
/// `root` must already be local to the session. Each intermediate child is
/// passed through [`CloneSet::clone_if_needed`] before the walk descends
/// into it, so `terminal` always receives a parent it may mutate in place.
/// If the walk fails halfway, the copies made so far stay in the tree; they
/// are equal to what they replaced, so the value is unchanged.
pub(crate) fn walk<F>(
    root: &mut Value,
    clones: &mut CloneSet,
    path: &ParsedPath,
    substitutions: &[Key],
    terminal: F,
) -> Result<(), EditError>
where
    F: FnOnce(Slot<'_>) -> Result<(), EditError>,
{
    check_substitution_count(path, substitutions)?;
    let mut substitutions = Substitutions {
        remaining: substitutions.iter(),
    };

    // Parsed paths always have at least one fragment.
    let Some((last, intermediate)) = path.fragments().split_last() else {
        return Ok(());
    };

    let mut trail = Trail::new(path);
    let mut cursor = root;
    for (position, fragment) in intermediate.iter().enumerate() {
        let key = substitutions.key_for(fragment, path, position)?;
        let child = child_mut(cursor, &key, &trail)?;
        clones
            .clone_if_needed(child)
            .map_err(|_| EditError::NullishClone {
                at: trail.at_child(&key),
            })?;
        trail.push(key);
        cursor = child;
    }

    let key = substitutions.key_for(last, path, intermediate.len())?;
    terminal(Slot::new(cursor, key, trail)?)
}

/// The child of `parent` at `key`, for descending into.
///
/// A missing child is reported as nullish, the same as `null`.
fn child_mut<'v>(
    parent: &'v mut Value,
    key: &Key,
    trail: &Trail<'_>,
) -> Result<&'v mut Value, EditError> {
    let child = match parent {
        Value::Object(obj) => obj.make_mut().get_mut(&*field_name(key)),
        Value::Array(arr) => {
            let index = element_index(key, trail)?;
            arr.make_mut().get_mut(index)
        }
        other => {
            return Err(EditError::NotAContainer {
                at: trail.at(),
                found: other.value_type(),
            });
        }
    };
    child.ok_or_else(|| EditError::NullishClone {
        at: trail.at_child(key),
    })
}

/// Read the value at `path` without copying anything.
///
/// Returns `Ok(None)` when the path leads through a missing value or a
/// primitive. Substitution errors are reported the same way as for edits.
pub(crate) fn lookup<'v>(
    root: &'v Value,
    path: &ParsedPath,
    substitutions: &[Key],
) -> Result<Option<&'v Value>, EditError> {
    check_substitution_count(path, substitutions)?;
    let mut substitutions = Substitutions {
        remaining: substitutions.iter(),
    };

    let mut cursor = root;
    for (position, fragment) in path.fragments().iter().enumerate() {
        let key = substitutions.key_for(fragment, path, position)?;
        let child = match cursor {
            Value::Object(obj) => obj.get(&field_name(&key)),
            Value::Array(arr) => key.as_index().and_then(|i| arr.get(i)),
            _ => None,
        };
        match child {
            Some(child) => cursor = child,
            None => return Ok(None),
        }
    }
    Ok(Some(cursor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cowpath_path::{keys, parse};
    use cowpath_value::value;

    fn assign(root: &mut Value, path: &str, subs: &[Key], v: Value) -> Result<(), EditError> {
        let mut clones = CloneSet::new();
        clones.clone_if_needed(root).unwrap();
        walk(root, &mut clones, &parse(path).unwrap(), subs, |slot| {
            slot.assign(v)
        })
    }

    #[test]
    fn trail_rendering() {
        let path = parse("a.{}.c").unwrap();
        let mut trail = Trail::new(&path);
        assert_eq!(trail.at(), "<root>");
        assert_eq!(trail.at_child(&Key::from("a")), "a");
        trail.push(Key::from("a"));
        trail.push(Key::Index(3));
        assert_eq!(trail.at(), "a.3");
        assert_eq!(trail.at_child(&Key::from("c")), "a.3.c");
    }

    #[test]
    fn walk_copies_only_the_edited_path() {
        let original = value!({ "a": { "b": 1 }, "side": { "x": 0 } });
        let mut root = original.clone();
        assign(&mut root, "a.b", &[], Value::from(2)).unwrap();

        assert_eq!(root, value!({ "a": { "b": 2 }, "side": { "x": 0 } }));
        assert!(!root.get("a").unwrap().ptr_eq(original.get("a").unwrap()));
        assert!(root.get("side").unwrap().ptr_eq(original.get("side").unwrap()));
        assert_eq!(original, value!({ "a": { "b": 1 }, "side": { "x": 0 } }));
    }

    #[test]
    fn index_keys_address_object_fields_by_name() {
        let mut root = value!({ "m": { "0": "zero" } });
        assign(&mut root, "m.0", &[], Value::from("new")).unwrap();
        assert_eq!(root, value!({ "m": { "0": "new" } }));
    }

    #[test]
    fn canonical_name_substitutions_index_arrays() {
        let mut root = value!({ "list": [{ "n": 1 }, { "n": 2 }] });
        assign(&mut root, "list.{}.n", &keys!["1"], Value::from(20)).unwrap();
        assert_eq!(root, value!({ "list": [{ "n": 1 }, { "n": 20 }] }));
    }

    #[test]
    fn stepping_into_a_primitive_fails() {
        let mut root = value!({ "a": 1 });
        let err = assign(&mut root, "a.b.c", &[], Value::NULL).unwrap_err();
        assert_eq!(
            err,
            EditError::NotAContainer {
                at: "a".into(),
                found: cowpath_value::ValueType::Number
            }
        );
    }

    #[test]
    fn non_index_key_on_array_fails() {
        let mut root = value!({ "list": [[1]] });
        let err = assign(&mut root, "list.first.x", &[], Value::NULL).unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidKey {
                at: "list".into(),
                key: Key::from("first")
            }
        );
    }

    #[test]
    fn lookup_reads_without_copying() {
        let root = value!({ "items": { "a": { "x": [10, 20] } } });
        let path = parse("items.{}.x.1").unwrap();
        let found = lookup(&root, &path, &keys!["a"]).unwrap();
        assert_eq!(found, Some(&Value::from(20)));

        assert_eq!(lookup(&root, &path, &keys!["zz"]).unwrap(), None);
        assert_eq!(
            lookup(&root, &parse("items.a.x.1.deeper").unwrap(), &[]).unwrap(),
            None
        );
        assert!(matches!(
            lookup(&root, &path, &[]),
            Err(EditError::SubstitutionMismatch { position: 1, .. })
        ));
    }
}
