//! The core [`Value`] type.
//!
//! Primitives are stored inline. Arrays and objects live behind a reference
//! count, so `Value::clone` is always shallow: it hands out another reference
//! to the same container. Two values that share a container are
//! [`ptr_eq`](Value::ptr_eq); structural equality is [`PartialEq`].

use core::fmt::{self, Debug, Display, Formatter};

use crate::array::VArray;
use crate::number::VNumber;
use crate::object::VObject;
use crate::string::VString;

/// Enum distinguishing the value types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// Null value
    Null,
    /// Boolean value
    Bool,
    /// Number (integers and floats)
    Number,
    /// String (UTF-8)
    String,
    /// Array
    Array,
    /// Object (key-value map)
    Object,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        })
    }
}

/// Identity of a shared container.
///
/// Two containers have the same `NodeId` exactly when they are the same
/// allocation. Ids are only meaningful while the container is alive: once it
/// is dropped, a new allocation may reuse the address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// A dynamic value: null, boolean, number, string, array or object.
#[derive(Clone, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(VNumber),
    /// An immutable, shared string.
    String(VString),
    /// A reference-counted array.
    Array(VArray),
    /// A reference-counted, insertion-ordered object.
    Object(VObject),
}

impl Value {
    /// JSON `null` value.
    pub const NULL: Self = Value::Null;

    /// JSON `true` value.
    pub const TRUE: Self = Value::Bool(true);

    /// JSON `false` value.
    pub const FALSE: Self = Value::Bool(false);

    /// Returns the type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns `true` if this is `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a boolean.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this is a number.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if this is an object.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for arrays and objects.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<&VNumber> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    pub const fn as_string(&self) -> Option<&VString> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array, if this is one.
    #[must_use]
    pub const fn as_array(&self) -> Option<&VArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the array mutably, if this is one.
    pub const fn as_array_mut(&mut self) -> Option<&mut VArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the object, if this is one.
    #[must_use]
    pub const fn as_object(&self) -> Option<&VObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the object mutably, if this is one.
    pub const fn as_object_mut(&mut self) -> Option<&mut VObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the identity of the container, or `None` for primitives.
    #[must_use]
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Value::Array(a) => Some(a.id()),
            Value::Object(o) => Some(o.id()),
            _ => None,
        }
    }

    /// Reference equality.
    ///
    /// Containers are `ptr_eq` when they are the same allocation. Primitives
    /// have no identity and are compared by value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => {
                false
            }
            (a, b) => a == b,
        }
    }

    /// Looks up an object key. Returns `None` for non-objects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Looks up an array element. Returns `None` for non-arrays.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }

    /// Takes the value out, leaving `null` in its place.
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => Debug::fmt(b, f),
            Value::Number(n) => Debug::fmt(n, f),
            Value::String(s) => Debug::fmt(s, f),
            Value::Array(a) => Debug::fmt(a, f),
            Value::Object(o) => Debug::fmt(o, f),
        }
    }
}

/// Compact JSON-like rendering. Use [`format_value`](crate::format_value) for
/// an indented one.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => Display::fmt(b, f),
            Value::Number(n) => Display::fmt(n, f),
            Value::String(s) => crate::format::write_escaped(f, s.as_str()),
            Value::Array(a) => {
                f.write_str("[")?;
                for (i, item) in a.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Value::Object(o) => {
                f.write_str("{")?;
                for (i, (key, val)) in o.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    crate::format::write_escaped(f, key)?;
                    f.write_str(":")?;
                    Display::fmt(val, f)?;
                }
                f.write_str("}")
            }
        }
    }
}

// === From implementations ===

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(VString::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(VString::from(s))
    }
}

impl From<VString> for Value {
    fn from(s: VString) -> Self {
        Value::String(s)
    }
}

impl From<VArray> for Value {
    fn from(a: VArray) -> Self {
        Value::Array(a)
    }
}

impl From<VObject> for Value {
    fn from(o: VObject) -> Self {
        Value::Object(o)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(VArray::from(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}
