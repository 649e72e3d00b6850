//! Clone-on-write bookkeeping for one session.

use std::collections::HashSet;

use cowpath_value::{NodeId, Value};

/// The value to clone was `null` or missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullishValue;

/// The set of containers a session has already copied.
///
/// Containers are tracked by identity ([`NodeId`]), never by structural
/// equality. A tracked container belongs to the session and may be mutated
/// in place; anything else is shared with the caller and has to be copied
/// first.
#[derive(Debug, Default)]
pub struct CloneSet {
    clones: HashSet<NodeId>,
}

impl CloneSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of containers copied so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clones.len()
    }

    /// Returns `true` if nothing has been copied yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clones.is_empty()
    }

    /// Returns `true` if `value` is a container this session copied and
    /// still owns exclusively.
    ///
    /// The uniqueness check matters once a handle to a session-local
    /// container has been handed out (see `Session::get`), and after a copy
    /// is dropped and its address reused by an unrelated allocation.
    #[must_use]
    pub fn is_local(&self, value: &Value) -> bool {
        match value {
            Value::Array(arr) => arr.is_unique() && self.clones.contains(&arr.id()),
            Value::Object(obj) => obj.is_unique() && self.clones.contains(&obj.id()),
            _ => false,
        }
    }

    /// Make `value` safe to mutate in place.
    ///
    /// - `null` fails: a missing link is never created implicitly.
    /// - Primitives are left alone.
    /// - Containers already local to the session are left alone.
    /// - Any other container is replaced by a shallow copy, which is
    ///   registered as local. The original is not touched.
    pub fn clone_if_needed(&mut self, value: &mut Value) -> Result<(), NullishValue> {
        if self.is_local(value) {
            return Ok(());
        }
        match value {
            Value::Null => return Err(NullishValue),
            Value::Array(arr) => {
                let copy = arr.shallow_copy();
                trace!(from = ?arr.id(), to = ?copy.id(), len = copy.len(), "cloned array");
                self.clones.remove(&arr.id());
                self.clones.insert(copy.id());
                *arr = copy;
            }
            Value::Object(obj) => {
                let copy = obj.shallow_copy();
                trace!(from = ?obj.id(), to = ?copy.id(), len = copy.len(), "cloned object");
                self.clones.remove(&obj.id());
                self.clones.insert(copy.id());
                *obj = copy;
            }
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
        Ok(())
    }
}
