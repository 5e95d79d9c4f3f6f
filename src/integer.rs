/*
    Adaptive-precision integers
*/

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

mod arithmetic;
mod compare;
mod format;
mod words;

pub use format::*;
pub use words::WordBuffer;

// Bit length below which a positive big integer is copied into a `WordBuffer`.
const BUFFERED_BIT_LIMIT: u64 = 2048;

/// The representation currently used by an `AdaptiveInt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// A native 32-bit value.
    Small,
    /// A nonnegative `WordBuffer`.
    Buffered,
    /// An arbitrary-precision signed integer.
    Large,
}

// Exactly one payload per mode
#[derive(Clone, Debug)]
enum Repr {
    Small(i32),
    Buffered(WordBuffer),
    Large(BigInt),
}

/// A signed integer that stays in a native word while it can.
///
/// Arithmetic starts on an `i32` and, on overflow, moves to a `WordBuffer`
/// when the result is known to be nonnegative or to a `BigInt` otherwise.
/// Values never move back to a smaller representation on their own; use
/// `can_fit_i32` to test for it.
///
/// Mutators work in place and return `&mut Self` so calls can be chained.
/// A frozen value panics on any mutation.
#[derive(Debug)]
pub struct AdaptiveInt {
    repr: Repr,
    frozen: bool,
}

// 2^31, the magnitude of `i32::MIN`.
const NEGATED_I32_MIN: i64 = 1 << 31;

impl AdaptiveInt {
    /// Creates a new `AdaptiveInt` holding `val`.
    pub const fn new(val: i32) -> Self {
        Self {
            repr: Repr::Small(val),
            frozen: false,
        }
    }

    /// Creates a new `AdaptiveInt` holding `val`.
    pub fn from_i64(val: i64) -> Self {
        match i32::try_from(val) {
            Ok(v) => Self::new(v),
            Err(_) => Self::from_big(&BigInt::from(val)),
        }
    }

    /// Creates a new `AdaptiveInt` holding the value of `val`,
    /// choosing the cheapest representation for it.
    pub fn from_big(val: &BigInt) -> Self {
        let repr = if let Some(v) = val.to_i32() {
            Repr::Small(v)
        } else if val.is_positive() && val.bits() < BUFFERED_BIT_LIMIT {
            Repr::Buffered(WordBuffer::from_big(val))
        } else {
            Repr::Large(val.clone())
        };
        Self {
            repr,
            frozen: false,
        }
    }

    /// Returns a mutable deep copy of this value.
    pub fn copy(&self) -> Self {
        Self {
            repr: self.repr.clone(),
            frozen: false,
        }
    }

    /// Returns a deep copy of this value that rejects mutation.
    pub fn frozen_copy(&self) -> Self {
        Self {
            repr: self.repr.clone(),
            frozen: true,
        }
    }

    /// Returns true if this value rejects mutation.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns the representation currently in use.
    pub fn mode(&self) -> Mode {
        match self.repr {
            Repr::Small(_) => Mode::Small,
            Repr::Buffered(_) => Mode::Buffered,
            Repr::Large(_) => Mode::Large,
        }
    }

    /// Returns -1, 0, or 1 according to the sign of this value.
    pub fn sign(&self) -> i32 {
        match &self.repr {
            Repr::Small(v) => v.signum(),
            Repr::Buffered(m) => m.sign(),
            Repr::Large(x) => {
                if x.is_zero() {
                    0
                } else if x.is_negative() {
                    -1
                } else {
                    1
                }
            }
        }
    }

    /// Returns true if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.sign() == 0
    }

    /// Returns true if this value is even.
    pub fn is_even(&self) -> bool {
        match &self.repr {
            Repr::Small(v) => v & 1 == 0,
            Repr::Buffered(m) => m.is_even(),
            Repr::Large(x) => x.is_even(),
        }
    }

    /// Returns true if this value fits in an `i32`.
    pub fn can_fit_i32(&self) -> bool {
        match &self.repr {
            Repr::Small(_) => true,
            Repr::Buffered(m) => m.can_fit_i32(),
            Repr::Large(x) => x.to_i32().is_some(),
        }
    }

    /// Returns true if this value fits in an `i64`.
    pub fn can_fit_i64(&self) -> bool {
        match &self.repr {
            Repr::Small(_) => true,
            Repr::Buffered(m) => m.to_big().to_i64().is_some(),
            Repr::Large(x) => x.to_i64().is_some(),
        }
    }

    /// Converts this value to an `i32`.
    /// Panics if the value does not fit.
    pub fn to_i32(&self) -> i32 {
        match &self.repr {
            Repr::Small(v) => *v,
            Repr::Buffered(m) => {
                assert!(m.can_fit_i32(), "value does not fit in an i32: {}", self);
                m.to_i32()
            }
            Repr::Large(x) => x
                .to_i32()
                .unwrap_or_else(|| panic!("value does not fit in an i32: {}", x)),
        }
    }

    /// Converts this value to an `i64`, keeping only the low 64 bits
    /// (two's complement) when it does not fit.
    pub fn to_i64(&self) -> i64 {
        match &self.repr {
            Repr::Small(v) => i64::from(*v),
            Repr::Buffered(m) => low_i64(&m.to_big()),
            Repr::Large(x) => low_i64(x),
        }
    }

    /// Converts this value to an arbitrary-precision integer.
    pub fn to_big(&self) -> BigInt {
        match &self.repr {
            Repr::Small(v) => BigInt::from(*v),
            Repr::Buffered(m) => m.to_big(),
            Repr::Large(x) => x.clone(),
        }
    }

    /// Shifts `val` left by this value, or right if this value is negative.
    /// Panics if the shift amount does not fit in an `i64`.
    pub fn shift_big_left(&self, val: &BigInt) -> BigInt {
        assert!(self.can_fit_i64(), "shift amount out of range: {}", self);
        let by = self.to_i64();
        let amount = by.unsigned_abs() as usize;
        if by >= 0 {
            val << amount
        } else {
            val >> amount
        }
    }

    // Panics if this value is frozen.
    #[inline]
    fn check_mutable(&self) {
        assert!(!self.frozen, "attempted to mutate a frozen AdaptiveInt");
    }
}

// Low 64 bits of `x` in two's complement.
fn low_i64(x: &BigInt) -> i64 {
    let (sign, digits) = x.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0) as i64;
    if sign == num_bigint::Sign::Minus {
        low.wrapping_neg()
    } else {
        low
    }
}

/// Cloning always produces a mutable value, even from a frozen one.
impl Clone for AdaptiveInt {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl Default for AdaptiveInt {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<i32> for AdaptiveInt {
    fn from(val: i32) -> Self {
        Self::new(val)
    }
}

impl From<i64> for AdaptiveInt {
    fn from(val: i64) -> Self {
        Self::from_i64(val)
    }
}

impl From<u64> for AdaptiveInt {
    fn from(val: u64) -> Self {
        match i64::try_from(val) {
            Ok(v) => Self::from_i64(v),
            Err(_) => Self::from_big(&BigInt::from(val)),
        }
    }
}

impl From<&BigInt> for AdaptiveInt {
    fn from(val: &BigInt) -> Self {
        Self::from_big(val)
    }
}

impl From<BigInt> for AdaptiveInt {
    fn from(val: BigInt) -> Self {
        match &val.to_i32() {
            Some(v) => Self::new(*v),
            None if val.is_positive() && val.bits() < BUFFERED_BIT_LIMIT => Self::from_big(&val),
            None => Self {
                repr: Repr::Large(val),
                frozen: false,
            },
        }
    }
}

impl From<&AdaptiveInt> for BigInt {
    fn from(val: &AdaptiveInt) -> Self {
        val.to_big()
    }
}

impl fmt::Display for AdaptiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Small(v) => f.write_str(&int_to_string(*v)),
            Repr::Buffered(m) => write!(f, "{}", m.to_big()),
            Repr::Large(x) => write!(f, "{}", x),
        }
    }
}
