//! Array value type.

use core::fmt::{self, Debug, Formatter};
use core::ops::Deref;
use std::sync::Arc;

use crate::value::{NodeId, Value};

/// A reference-counted array of [`Value`]s.
///
/// Cloning a `VArray` shares the allocation. Mutation goes through
/// [`make_mut`](VArray::make_mut), which copies the elements first when the
/// allocation is shared, so a mutation is never visible through another
/// handle.
#[derive(Clone, Default)]
pub struct VArray(Arc<Vec<Value>>);

impl VArray {
    /// Creates a new empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new array with the specified capacity.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        VArray(Arc::new(Vec::with_capacity(cap)))
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Identity of this allocation.
    #[must_use]
    pub fn id(&self) -> NodeId {
        NodeId(Arc::as_ptr(&self.0) as usize)
    }

    /// Returns `true` if both handles point at the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &VArray) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if no other handle shares this allocation.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.0) == 1
    }

    /// Copies the element handles into a new allocation.
    ///
    /// The elements themselves are shared with `self`, not copied.
    #[must_use]
    pub fn shallow_copy(&self) -> Self {
        VArray(Arc::new((*self.0).clone()))
    }

    /// Mutable access to the elements, copying them first if shared.
    pub fn make_mut(&mut self) -> &mut Vec<Value> {
        Arc::make_mut(&mut self.0)
    }

    /// Appends an element.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.make_mut().push(value.into());
    }

    /// Removes the last element.
    pub fn pop(&mut self) -> Option<Value> {
        self.make_mut().pop()
    }
}

impl Deref for VArray {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl PartialEq for VArray {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Debug for VArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Vec<Value>> for VArray {
    fn from(items: Vec<Value>) -> Self {
        VArray(Arc::new(items))
    }
}

impl<T: Into<Value>> FromIterator<T> for VArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        VArray(Arc::new(iter.into_iter().map(Into::into).collect()))
    }
}

impl<'a> IntoIterator for &'a VArray {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_copy_shares_children() {
        let inner = VArray::from_iter([1, 2]);
        let outer = VArray::from(vec![Value::from(inner.clone()), Value::from(3)]);
        let copy = outer.shallow_copy();

        assert!(!copy.ptr_eq(&outer));
        assert_eq!(copy, outer);
        assert!(copy[0].ptr_eq(&outer[0]));
    }

    #[test]
    fn make_mut_does_not_leak_through_clones() {
        let mut a = VArray::from_iter([1, 2, 3]);
        let b = a.clone();
        assert!(!a.is_unique());

        a.push(4);
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 3);
        assert!(a.is_unique());
        assert!(b.is_unique());
    }

    #[test]
    fn ids_follow_allocations() {
        let a = VArray::new();
        let b = a.clone();
        let c = a.shallow_copy();
        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
    }
}
