/// Build a [`Value`](crate::Value) with JSON-like syntax.
///
/// Object keys must be literals. Anything that is not `null`, an array or an
/// object is converted with `Value::from`.
///
/// ```
/// use cowpath_value::{Value, value};
///
/// let v = value!({
///     "name": "widget",
///     "tags": ["a", "b"],
///     "offset": -3,
///     "parent": null,
/// });
/// assert_eq!(v.to_string(), r#"{"name":"widget","tags":["a","b"],"offset":-3,"parent":null}"#);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([]) => {
        $crate::Value::Array($crate::VArray::new())
    };
    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::__value_array!(@elem [] [] $($tt)+))
    };
    ({}) => {
        $crate::Value::Object($crate::VObject::new())
    };
    ({ $($tt:tt)+ }) => {
        $crate::Value::Object($crate::__value_object!(@entry [] $($tt)+))
    };
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __value_array {
    (@elem [$($done:tt)*] [$($cur:tt)+] , $($rest:tt)*) => {
        $crate::__value_array!(@elem [$($done)* ($crate::value!($($cur)+))] [] $($rest)*)
    };
    (@elem [$($done:tt)*] [$($cur:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__value_array!(@elem [$($done)*] [$($cur)* $next] $($rest)*)
    };
    (@elem [$($done:tt)*] [$($cur:tt)+]) => {
        $crate::__value_array!(@elem [$($done)* ($crate::value!($($cur)+))] [])
    };
    (@elem [$($done:tt)*] []) => {
        <$crate::VArray as ::core::iter::FromIterator<$crate::Value>>::from_iter([$($done),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __value_object {
    (@entry [$($done:tt)*] $key:literal : $($rest:tt)+) => {
        $crate::__value_object!(@val [$($done)*] ($key) [] $($rest)+)
    };
    (@entry [$($done:tt)*]) => {{
        let mut object = $crate::VObject::new();
        $( object.insert $done; )*
        object
    }};
    (@val [$($done:tt)*] ($key:literal) [$($cur:tt)+] , $($rest:tt)*) => {
        $crate::__value_object!(@entry [$($done)* ($key, $crate::value!($($cur)+))] $($rest)*)
    };
    (@val [$($done:tt)*] ($key:literal) [$($cur:tt)*] $next:tt $($rest:tt)*) => {
        $crate::__value_object!(@val [$($done)*] ($key) [$($cur)* $next] $($rest)*)
    };
    (@val [$($done:tt)*] ($key:literal) [$($cur:tt)+]) => {
        $crate::__value_object!(@entry [$($done)* ($key, $crate::value!($($cur)+))])
    };
}
