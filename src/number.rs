/*
    Defines radix-generic access to numbers
*/

use num_bigint::{BigInt, Sign};

use crate::AdaptiveInt;

/// Whether a numeric family can represent NaNs and infinities.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArithmeticSupport {
    /// Only finite values exist.
    FiniteOnly,
    /// Finite values, infinities, and NaNs exist.
    Full,
}

/// Sign and special-value classification of a number.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueFlags {
    negative: bool,
    infinity: bool,
    quiet_nan: bool,
    signaling_nan: bool,
}

impl ValueFlags {
    /// Returns true if the sign is negative.
    pub fn negative(&self) -> bool {
        self.negative
    }

    /// Returns true if this classifies an infinity.
    pub fn infinity(&self) -> bool {
        self.infinity
    }

    /// Returns true if this classifies a quiet NaN.
    pub fn quiet_nan(&self) -> bool {
        self.quiet_nan
    }

    /// Returns true if this classifies a signaling NaN.
    pub fn signaling_nan(&self) -> bool {
        self.signaling_nan
    }

    /// Returns true for infinities and NaNs.
    pub fn is_special(&self) -> bool {
        self.infinity || self.quiet_nan || self.signaling_nan
    }

    /// Returns true for quiet and signaling NaNs.
    pub fn is_nan(&self) -> bool {
        self.quiet_nan || self.signaling_nan
    }

    /// Sets the `negative` field.
    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// Sets the `infinity` field.
    pub fn with_infinity(mut self, infinity: bool) -> Self {
        self.infinity = infinity;
        self
    }

    /// Sets the `quiet_nan` field.
    pub fn with_quiet_nan(mut self, quiet_nan: bool) -> Self {
        self.quiet_nan = quiet_nan;
        self
    }

    /// Sets the `signaling_nan` field.
    pub fn with_signaling_nan(mut self, signaling_nan: bool) -> Self {
        self.signaling_nan = signaling_nan;
        self
    }
}

/// Radix-agnostic view of a numeric family.
///
/// A number is viewed as a sign, a coefficient magnitude, an exponent,
/// and a `ValueFlags` classification, with value `±mantissa * radix^exponent`
/// when finite. Arithmetic code only reaches concrete numbers
/// through this trait.
pub trait RadixHelper<T> {
    /// Returns the radix of the numeric family.
    fn radix(&self) -> u32;

    /// Returns whether special values can be represented.
    fn arithmetic_support(&self) -> ArithmeticSupport;

    /// Returns the sign of `value`; zero and NaNs have no sign.
    fn sign(&self, value: &T) -> Sign;

    /// Returns the coefficient magnitude, or the payload of a NaN.
    fn mantissa(&self, value: &T) -> BigInt;

    /// Returns the exponent; 0 for special values.
    fn exponent(&self, value: &T) -> BigInt;

    /// Returns the classification of `value`.
    fn flags(&self, value: &T) -> ValueFlags;

    /// Builds a value from a coefficient magnitude, an exponent,
    /// and a classification.
    fn create_new_with_flags(&self, mantissa: BigInt, exponent: BigInt, flags: ValueFlags) -> T;

    /// Builds the integer `val` with exponent 0.
    fn value_of(&self, val: i32) -> T;

    /// Returns `mantissa * radix^power`.
    /// Panics if `power` is negative.
    fn multiply_by_radix_power(&self, mantissa: &BigInt, power: &AdaptiveInt) -> BigInt {
        assert!(power.sign() >= 0, "negative radix power: {}", power);
        if mantissa.sign() == Sign::NoSign || power.is_zero() {
            return mantissa.clone();
        }
        if self.radix() == 2 {
            return power.shift_big_left(mantissa);
        }
        mantissa * crate::util::radix_power(self.radix(), &power.to_big())
    }

    /// Returns the number of radix digits in `mantissa`; 1 for zero.
    fn digit_length(&self, mantissa: &BigInt) -> AdaptiveInt {
        AdaptiveInt::from(crate::util::digit_length(mantissa, self.radix()))
    }
}
