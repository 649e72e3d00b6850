//! The open → edit* → close lifecycle.

use cowpath_path::{Key, resolve};
use cowpath_value::Value;

use crate::clone::CloneSet;
use crate::engine::{self, ROOT};
use crate::error::EditError;
use crate::slot::Slot;

#[derive(Debug)]
enum State {
    Open { root: Value, clones: CloneSet },
    Closed,
}

/// An editing session over one value.
///
/// A session owns a working copy of the root and the set of containers it
/// has copied so far. Each edit walks from the root to its target, copying
/// the containers on that path the first time the session touches them, and
/// leaves every other branch shared with the value the session was opened
/// on. That value is never modified.
///
/// Edits return `&mut Self` so they can be chained with `?`. Once
/// [`close`](Session::close) has returned the result, the session is inert
/// and every further call fails with [`EditError::ClosedSession`].
///
/// A session is meant to be used by one thread at a time; edits take
/// `&mut self`.
///
/// # Example
///
/// ```
/// use cowpath::{Session, keys, value};
///
/// let original = value!({ "items": { "a": { "x": 1 } }, "other": [1, 2] });
/// let edited = Session::open(original.clone())?
///     .set("items.{}.x", &keys!["a"], 5)?
///     .insert("other", &[], None, [3])?
///     .close()?;
///
/// assert_eq!(edited, value!({ "items": { "a": { "x": 5 } }, "other": [1, 2, 3] }));
/// assert_eq!(original, value!({ "items": { "a": { "x": 1 } }, "other": [1, 2] }));
/// # Ok::<(), cowpath::EditError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    state: State,
}

impl Session {
    /// Open a session on `value`.
    ///
    /// The root is copied shallowly right away, so even a session closed
    /// without edits returns a root distinct from the input (primitives
    /// excepted). Fails with [`EditError::NullishClone`] if `value` is `null`.
    pub fn open(value: impl Into<Value>) -> Result<Self, EditError> {
        let mut root = value.into();
        let mut clones = CloneSet::new();
        clones
            .clone_if_needed(&mut root)
            .map_err(|_| EditError::NullishClone { at: ROOT.to_owned() })?;
        debug!(root = %root.value_type(), "opened session");
        Ok(Session {
            state: State::Open { root, clones },
        })
    }

    /// Returns `true` once [`close`](Session::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    #[cfg_attr(not(any(test, feature = "tracing")), allow(unused_variables))]
    fn edit<F>(
        &mut self,
        op: &'static str,
        path: &str,
        substitutions: &[Key],
        terminal: F,
    ) -> Result<&mut Self, EditError>
    where
        F: FnOnce(Slot<'_>) -> Result<(), EditError>,
    {
        let State::Open { root, clones } = &mut self.state else {
            return Err(EditError::ClosedSession);
        };
        let parsed = resolve(path)?;
        trace!(op, path, substitutions = substitutions.len(), "edit");
        engine::walk(root, clones, &parsed, substitutions, terminal)?;
        Ok(self)
    }

    /// Set the value at `path`.
    ///
    /// On an array, the index one past the end appends; indices further out
    /// fail with [`EditError::IndexOutOfBounds`].
    pub fn set(
        &mut self,
        path: &str,
        substitutions: &[Key],
        value: impl Into<Value>,
    ) -> Result<&mut Self, EditError> {
        let value = value.into();
        self.edit("set", path, substitutions, |slot| slot.assign(value))
    }

    /// Remove the key at `path`.
    ///
    /// Object fields are removed entirely. Array elements are replaced by
    /// `null` so later indices stay put. Nothing checks that the field is
    /// allowed to be absent: deleting a field the caller's data model
    /// requires is a caller error.
    pub fn delete(&mut self, path: &str, substitutions: &[Key]) -> Result<&mut Self, EditError> {
        self.edit("delete", path, substitutions, |slot| slot.delete())
    }

    /// If the value at `path` is missing or `null`, set it to `factory()`.
    ///
    /// `factory` is only called when the slot is empty.
    pub fn ensure<V, F>(
        &mut self,
        path: &str,
        substitutions: &[Key],
        factory: F,
    ) -> Result<&mut Self, EditError>
    where
        V: Into<Value>,
        F: FnOnce() -> V,
    {
        self.edit("ensure", path, substitutions, |slot| {
            slot.ensure(|| factory().into())
        })
    }

    /// Remove the range `[start, end)` from the array at `path`.
    ///
    /// Without `end`, only `[0, start)` is kept. Negative bounds count from
    /// the end of the array, and `end` is raised to `start` if it falls
    /// before it. The array is replaced, not modified.
    pub fn drop(
        &mut self,
        path: &str,
        substitutions: &[Key],
        start: isize,
        end: Option<isize>,
    ) -> Result<&mut Self, EditError> {
        self.edit("drop", path, substitutions, |slot| {
            slot.drop_range(start, end)
        })
    }

    /// Insert `items` into the array at `path`, before position `index`.
    ///
    /// `None`, or an index at or past the end, appends; `Some(0)` prepends.
    /// Negative indices count from the end: `Some(-1)` inserts before the
    /// last element, and anything before the start prepends. The array is
    /// replaced, not modified.
    pub fn insert<I>(
        &mut self,
        path: &str,
        substitutions: &[Key],
        index: Option<isize>,
        items: I,
    ) -> Result<&mut Self, EditError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        self.edit("insert", path, substitutions, |slot| {
            slot.insert_range(index, items)
        })
    }

    /// The working root as it stands.
    pub fn peek(&self) -> Result<&Value, EditError> {
        match &self.state {
            State::Open { root, .. } => Ok(root),
            State::Closed => Err(EditError::ClosedSession),
        }
    }

    /// The current value at `path`, or `None` if the path leads nowhere.
    ///
    /// Nothing is copied. Cloning the returned value is allowed: the session
    /// notices the extra handle and copies that container again before its
    /// next edit through it.
    pub fn get(&self, path: &str, substitutions: &[Key]) -> Result<Option<&Value>, EditError> {
        let root = self.peek()?;
        let parsed = resolve(path)?;
        engine::lookup(root, &parsed, substitutions)
    }

    /// End the session and return the edited value.
    ///
    /// The clone set is released. Calling `close` again, or any edit
    /// afterwards, fails with [`EditError::ClosedSession`].
    pub fn close(&mut self) -> Result<Value, EditError> {
        match core::mem::replace(&mut self.state, State::Closed) {
            State::Open { root, clones } => {
                debug!(clones = clones.len(), "closed session");
                drop(clones);
                Ok(root)
            }
            State::Closed => Err(EditError::ClosedSession),
        }
    }
}

/// Open a session on `value`. Same as [`Session::open`].
pub fn open(value: impl Into<Value>) -> Result<Session, EditError> {
    Session::open(value)
}
