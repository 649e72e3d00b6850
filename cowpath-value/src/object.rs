//! Object value type.

use core::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::{NodeId, Value};

/// The map behind a [`VObject`].
pub type ObjectMap = IndexMap<String, Value>;

/// A reference-counted object: string keys to [`Value`]s, in insertion order.
///
/// Like [`VArray`](crate::VArray), clones share the allocation and mutation
/// goes through [`make_mut`](VObject::make_mut).
#[derive(Clone, Default)]
pub struct VObject(Arc<ObjectMap>);

impl VObject {
    /// Creates a new empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new object with the specified capacity.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        VObject(Arc::new(ObjectMap::with_capacity(cap)))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the object is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Checks if a key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Identity of this allocation.
    #[must_use]
    pub fn id(&self) -> NodeId {
        NodeId(Arc::as_ptr(&self.0) as usize)
    }

    /// Returns `true` if both handles point at the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &VObject) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if no other handle shares this allocation.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.0) == 1
    }

    /// Copies the entries into a new allocation. Values are shared with
    /// `self`, not copied.
    #[must_use]
    pub fn shallow_copy(&self) -> Self {
        VObject(Arc::new((*self.0).clone()))
    }

    /// Mutable access to the entries, copying them first if shared.
    pub fn make_mut(&mut self) -> &mut ObjectMap {
        Arc::make_mut(&mut self.0)
    }

    /// Inserts an entry. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.make_mut().insert(key.into(), value.into())
    }

    /// Removes an entry, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        if !self.0.contains_key(key) {
            return None;
        }
        self.make_mut().shift_remove(key)
    }
}

impl PartialEq for VObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Debug for VObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        VObject(Arc::new(
            iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        ))
    }
}

impl From<ObjectMap> for VObject {
    fn from(map: ObjectMap) -> Self {
        VObject(Arc::new(map))
    }
}
