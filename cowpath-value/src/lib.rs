#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod macros;

mod value;
pub use value::*;

mod number;
pub use number::VNumber;

mod string;
pub use string::VString;

mod array;
pub use array::VArray;

mod object;
pub use object::{ObjectMap, VObject};

mod format;
pub use format::format_value;

#[cfg(feature = "serde_json")]
mod json;
