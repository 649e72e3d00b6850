#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod error;
pub use error::EditError;

mod clone;
pub use clone::{CloneSet, NullishValue};

mod engine;
mod slot;

mod session;
pub use session::{Session, open};

pub use cowpath_path::{Fragment, Key, PLACEHOLDER, ParsedPath, PathParseError, keys};
pub use cowpath_value::{
    NodeId, ObjectMap, VArray, VNumber, VObject, VString, Value, ValueType, format_value, value,
};
