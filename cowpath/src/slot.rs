//! Terminal operations: the mutation applied at the end of a walk.

use cowpath_path::Key;
use cowpath_value::{ObjectMap, VArray, Value};

use crate::engine::{Trail, element_index, field_name};
use crate::error::EditError;

enum Target<'a> {
    Field { map: &'a mut ObjectMap, name: String },
    Element { items: &'a mut Vec<Value>, index: usize },
}

/// The slot named by the last fragment of a path: a parent container the
/// session owns, plus the key inside it.
///
/// Array operations (`drop_range`, `insert_range`) build a new array and
/// assign it to the slot; the array that was there is never mutated.
pub(crate) struct Slot<'a> {
    target: Target<'a>,
    key: Key,
    trail: Trail<'a>,
}

impl<'a> Slot<'a> {
    pub(crate) fn new(parent: &'a mut Value, key: Key, trail: Trail<'a>) -> Result<Self, EditError> {
        let target = match parent {
            Value::Object(obj) => Target::Field {
                map: obj.make_mut(),
                name: field_name(&key).into_owned(),
            },
            Value::Array(arr) => Target::Element {
                index: element_index(&key, &trail)?,
                items: arr.make_mut(),
            },
            other => {
                return Err(EditError::NotAContainer {
                    at: trail.at(),
                    found: other.value_type(),
                });
            }
        };
        Ok(Slot { target, key, trail })
    }

    /// The value currently in the slot, if any.
    pub(crate) fn current(&self) -> Option<&Value> {
        match &self.target {
            Target::Field { map, name } => map.get(name.as_str()),
            Target::Element { items, index } => items.get(*index),
        }
    }

    fn at(&self) -> String {
        self.trail.at_child(&self.key)
    }

    fn out_of_bounds(&self) -> Option<EditError> {
        match &self.target {
            Target::Element { items, index } if *index > items.len() => {
                Some(EditError::IndexOutOfBounds {
                    at: self.trail.at(),
                    index: *index,
                    len: items.len(),
                })
            }
            _ => None,
        }
    }

    /// `parent[key] = value`. On arrays, one past the end appends.
    pub(crate) fn assign(self, value: Value) -> Result<(), EditError> {
        if let Some(err) = self.out_of_bounds() {
            return Err(err);
        }
        match self.target {
            Target::Field { map, name } => {
                map.insert(name, value);
            }
            Target::Element { items, index } => {
                if index == items.len() {
                    items.push(value);
                } else {
                    items[index] = value;
                }
            }
        }
        Ok(())
    }

    /// Remove the key. Array elements become `null` so that the indices of
    /// the elements after them do not shift. Removing something that is not
    /// there does nothing.
    pub(crate) fn delete(self) -> Result<(), EditError> {
        match self.target {
            Target::Field { map, name } => {
                map.shift_remove(name.as_str());
            }
            Target::Element { items, index } => {
                if let Some(item) = items.get_mut(index) {
                    *item = Value::Null;
                }
            }
        }
        Ok(())
    }

    /// Assign `factory()` if the slot is missing or `null`. The factory is
    /// not called otherwise.
    pub(crate) fn ensure(self, factory: impl FnOnce() -> Value) -> Result<(), EditError> {
        if self.current().is_some_and(|v| !v.is_null()) {
            return Ok(());
        }
        if let Some(err) = self.out_of_bounds() {
            return Err(err);
        }
        self.assign(factory())
    }

    fn current_array(&self) -> Result<&VArray, EditError> {
        match self.current() {
            Some(Value::Array(arr)) => Ok(arr),
            found => Err(EditError::NotAnArray {
                at: self.at(),
                found: found.map(Value::value_type),
            }),
        }
    }

    /// Remove the half-open range `[start, end)` from the array in the slot.
    ///
    /// Without `end`, everything from `start` on is removed. Negative bounds
    /// count from the end of the array; see [`resolve_bound`].
    pub(crate) fn drop_range(self, start: isize, end: Option<isize>) -> Result<(), EditError> {
        let arr = self.current_array()?;
        let len = arr.len();
        let start = resolve_bound(start, len);
        let end = end.map_or(len, |end| resolve_bound(end, len).max(start));
        let kept: VArray = arr[..start].iter().chain(&arr[end..]).cloned().collect();
        self.assign(Value::Array(kept))
    }

    /// Insert `items` before position `index` of the array in the slot.
    /// `None`, or an index at or past the end, appends. A negative index
    /// counts from the end the same way range bounds do, so `-1` inserts
    /// before the last element.
    pub(crate) fn insert_range(
        self,
        index: Option<isize>,
        items: Vec<Value>,
    ) -> Result<(), EditError> {
        let arr = self.current_array()?;
        let at = index.map_or(arr.len(), |i| resolve_bound(i, arr.len()));
        let mut merged = Vec::with_capacity(arr.len() + items.len());
        merged.extend_from_slice(&arr[..at]);
        merged.extend(items);
        merged.extend_from_slice(&arr[at..]);
        self.assign(Value::Array(VArray::from(merged)))
    }
}

/// Resolve a range bound against an array of length `len`, the way slice
/// arguments are resolved: a negative bound counts back from the end, and
/// the result is clamped to `[0, len]`. Each bound is resolved exactly once.
pub(crate) fn resolve_bound(bound: isize, len: usize) -> usize {
    let magnitude = bound.unsigned_abs();
    if bound < 0 {
        len.saturating_sub(magnitude)
    } else {
        magnitude.min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(resolve_bound(0, 5), 0);
        assert_eq!(resolve_bound(3, 5), 3);
        assert_eq!(resolve_bound(9, 5), 5);
        assert_eq!(resolve_bound(-1, 5), 4);
        assert_eq!(resolve_bound(-5, 5), 0);
        assert_eq!(resolve_bound(-9, 5), 0);
        assert_eq!(resolve_bound(isize::MIN, 5), 0);
    }
}
