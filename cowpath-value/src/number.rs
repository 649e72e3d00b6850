//! Number value type.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};

use crate::value::Value;

#[derive(Copy, Clone)]
enum Repr {
    /// Negative integer. Non-negative integers are always stored as `U64`.
    I64(i64),
    /// Non-negative integer
    U64(u64),
    /// Finite 64-bit float
    F64(f64),
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// A JSON number.
///
/// Integers keep their exact value; floats are always finite. Integers and
/// floats compare equal when they denote the same number.
#[derive(Copy, Clone)]
pub struct VNumber(Repr);

impl VNumber {
    /// Creates a number from an i64.
    #[must_use]
    pub const fn from_i64(v: i64) -> Self {
        if v < 0 {
            VNumber(Repr::I64(v))
        } else {
            VNumber(Repr::U64(v as u64))
        }
    }

    /// Creates a number from a u64.
    #[must_use]
    pub const fn from_u64(v: u64) -> Self {
        VNumber(Repr::U64(v))
    }

    /// Creates a number from an f64. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn from_f64(v: f64) -> Option<Self> {
        v.is_finite().then_some(VNumber(Repr::F64(v)))
    }

    /// Converts to i64 if it can be represented exactly.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self.0 {
            Repr::I64(i) => Some(i),
            Repr::U64(u) => i64::try_from(u).ok(),
            Repr::F64(f) if f.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&f) => {
                Some(f as i64)
            }
            Repr::F64(_) => None,
        }
    }

    /// Converts to u64 if it can be represented exactly.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        match self.0 {
            Repr::I64(_) => None,
            Repr::U64(u) => Some(u),
            Repr::F64(f) if f.fract() == 0.0 && (0.0..TWO_POW_64).contains(&f) => Some(f as u64),
            Repr::F64(_) => None,
        }
    }

    /// Converts to f64, potentially losing precision.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        match self.0 {
            Repr::I64(i) => i as f64,
            Repr::U64(u) => u as f64,
            Repr::F64(f) => f,
        }
    }

    /// Returns true if this number was created from a floating point value.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self.0, Repr::F64(_))
    }

    /// Returns true if this number is an integer (signed or unsigned).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }
}

impl PartialEq for VNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VNumber {}

impl PartialOrd for VNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl VNumber {
    /// The integer value, widened so both representations fit.
    fn as_i128(&self) -> Option<i128> {
        match self.0 {
            Repr::I64(i) => Some(i128::from(i)),
            Repr::U64(u) => Some(i128::from(u)),
            Repr::F64(_) => None,
        }
    }
}

/// Exact comparison of an integer with a finite float. Every integer lies in
/// `[-2^63, 2^64)`, and any float in that range truncates to an `i128`
/// without rounding.
fn cmp_int_float(i: i128, f: f64) -> Ordering {
    if f >= TWO_POW_64 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    i.cmp(&(whole as i128)).then_with(|| {
        if f > whole {
            Ordering::Less
        } else if f < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

impl Ord for VNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Repr::F64(a), Repr::F64(b)) => {
                // -0.0 and 0.0 are the same number.
                if a == b { Ordering::Equal } else { a.total_cmp(&b) }
            }
            (Repr::F64(a), _) => other
                .as_i128()
                .map_or(Ordering::Equal, |b| cmp_int_float(b, a).reverse()),
            (_, Repr::F64(b)) => self
                .as_i128()
                .map_or(Ordering::Equal, |a| cmp_int_float(a, b)),
            _ => self.as_i128().cmp(&other.as_i128()),
        }
    }
}

/// Integral floats hash like the integer they equal.
impl Hash for VNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(i) = self.to_i64() {
            0u8.hash(state);
            i.hash(state);
        } else if let Some(u) = self.to_u64() {
            1u8.hash(state);
            u.hash(state);
        } else {
            2u8.hash(state);
            self.to_f64_lossy().to_bits().hash(state);
        }
    }
}

impl Debug for VNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for VNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::I64(i) => Display::fmt(&i, f),
            Repr::U64(u) => Display::fmt(&u, f),
            Repr::F64(fl) => Display::fmt(&fl, f),
        }
    }
}

impl Default for VNumber {
    fn default() -> Self {
        Self::from_u64(0)
    }
}

// === From implementations ===

macro_rules! impl_from_int {
    ($($t:ty => $method:ident),* $(,)?) => {
        $(
            impl From<$t> for VNumber {
                fn from(v: $t) -> Self {
                    Self::$method(v as _)
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Number(VNumber::from(v))
                }
            }
        )*
    };
}

impl_from_int! {
    i8 => from_i64,
    i16 => from_i64,
    i32 => from_i64,
    i64 => from_i64,
    isize => from_i64,
    u8 => from_u64,
    u16 => from_u64,
    u32 => from_u64,
    u64 => from_u64,
    usize => from_u64,
}

/// Non-finite floats become `null`.
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        VNumber::from_f64(v).map_or(Value::Null, Value::Number)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::from(f64::from(v))
    }
}

impl From<VNumber> for Value {
    fn from(n: VNumber) -> Self {
        Value::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_normalize_sign() {
        assert_eq!(VNumber::from(5i64), VNumber::from(5u64));
        assert_eq!(VNumber::from(-5i64).to_i64(), Some(-5));
        assert_eq!(VNumber::from(-5i64).to_u64(), None);
        assert_eq!(VNumber::from(u64::MAX).to_i64(), None);
    }

    #[test]
    fn floats_compare_with_integers() {
        let two = VNumber::from_f64(2.0).unwrap();
        assert_eq!(two, VNumber::from(2u8));
        assert_eq!(two.to_i64(), Some(2));
        assert!(two.is_float());
        assert!(VNumber::from_f64(2.5).unwrap() > VNumber::from(2));
        assert!(VNumber::from(-1) < VNumber::from(0u8));
    }

    #[test]
    fn integer_float_comparison_is_exact() {
        let big = 1u64 << 53;
        let float = VNumber::from_f64(big as f64).unwrap();
        assert_eq!(float, VNumber::from(big));
        assert_ne!(float, VNumber::from(big + 1));
        assert!(float < VNumber::from(big + 1));
        assert!(VNumber::from(big + 1) > float);

        let mut sorted = [
            VNumber::from(big + 1),
            float,
            VNumber::from(big),
            VNumber::from_f64(0.5).unwrap(),
            VNumber::from(-3),
            VNumber::from_f64(-2.5).unwrap(),
        ];
        sorted.sort();
        let rendered: Vec<String> = sorted.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["-3", "-2.5", "0.5", "9007199254740992", "9007199254740992", "9007199254740993"]
        );

        assert!(VNumber::from(u64::MAX) < VNumber::from_f64(1.8446744073709552e19).unwrap());
        assert!(VNumber::from(i64::MIN) > VNumber::from_f64(-1e19).unwrap());
        assert_eq!(VNumber::from_f64(-0.0).unwrap(), VNumber::from(0));
    }

    #[test]
    fn conversions_stop_at_the_integer_range() {
        let two_pow_63 = VNumber::from_f64(9_223_372_036_854_775_808.0).unwrap();
        assert_eq!(two_pow_63.to_i64(), None);
        assert_eq!(two_pow_63.to_u64(), Some(1u64 << 63));
        let min = VNumber::from_f64(-9_223_372_036_854_775_808.0).unwrap();
        assert_eq!(min.to_i64(), Some(i64::MIN));
        let two_pow_64 = VNumber::from_f64(18_446_744_073_709_551_616.0).unwrap();
        assert_eq!(two_pow_64.to_u64(), None);
        assert_eq!(VNumber::from_f64(2.5).unwrap().to_i64(), None);
    }

    #[test]
    fn equal_numbers_hash_equally() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(n: VNumber) -> u64 {
            let mut hasher = DefaultHasher::new();
            n.hash(&mut hasher);
            hasher.finish()
        }

        let pairs = [
            (VNumber::from(1u64 << 63), 9_223_372_036_854_775_808.0),
            (VNumber::from(1u64 << 53), 9_007_199_254_740_992.0),
            (VNumber::from(-7), -7.0),
            (VNumber::from(0), -0.0),
        ];
        for (int, float) in pairs {
            let float = VNumber::from_f64(float).unwrap();
            assert_eq!(int, float);
            assert_eq!(hash_of(int), hash_of(float), "{int} vs {float}");
        }
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(VNumber::from_f64(f64::NAN).is_none());
        assert!(VNumber::from_f64(f64::INFINITY).is_none());
        assert!(Value::from(f64::NEG_INFINITY).is_null());
    }

    #[test]
    fn display() {
        assert_eq!(VNumber::from(-12).to_string(), "-12");
        assert_eq!(VNumber::from_f64(0.5).unwrap().to_string(), "0.5");
    }
}
