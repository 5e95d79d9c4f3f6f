/*
    Arithmetic contexts
*/

use num_bigint::BigInt;

mod flags;
mod rounding;

pub use rounding::*;

/** Status flags raised by an arithmetic operation.
 *
 * Flags accumulate in a `Context` that tracks them; nothing ever clears
 * a flag except `Flags::clear` or `Context::with_blank_flags`.
 *
 *  - inexact: the result differs from the exact result;
 *  - rounded: nonzero or zero digits were discarded from the result;
 *  - subnormal: the result lies below the normal exponent range;
 *  - underflow: the result is subnormal and inexact;
 *  - overflow: the adjusted exponent of the rounded result exceeds `emax`;
 *  - clamped: the exponent was altered to fit the representable range;
 *  - division by zero: a finite dividend was divided by zero;
 *  - invalid: no useful definable result;
 *  - lost digits: an operand had more digits than the precision.
 *
 */
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    inexact: bool,
    rounded: bool,
    subnormal: bool,
    underflow: bool,
    overflow: bool,
    clamped: bool,
    division_by_zero: bool,
    invalid: bool,
    lost_digits: bool,
}

/// Rounding modes of decimal arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Round away from zero.
    Up,
    /// Round toward zero (truncate).
    Down,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Round to nearest, ties toward zero.
    HalfDown,
    /// Round to nearest, ties to an even last digit.
    HalfEven,
    /// Round toward zero unless the last digit would be 0 or 5,
    /// in which case round away from zero.
    ZeroFiveUp,
}

/// Directed component of a `Rounding`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundingDirection {
    ToZero,
    AwayZero,
    ToEven,
    ZeroFive,
}

/// Rounding and range parameters governing one arithmetic call.
///
/// Precision is counted in digits of the radix being operated on,
/// with 0 meaning unlimited. The exponent range, when present, bounds
/// the adjusted exponent `exp + digits - 1` of finite results.
#[derive(Clone, Debug)]
pub struct Context {
    precision: u64,
    rounding: Rounding,
    exponent_range: Option<(BigInt, BigInt)>,
    adjust_exponent: bool,
    clamp_normal_exponents: bool,
    has_flags: bool,
    flags: Flags,
}

impl Context {
    /// Creates a context with unlimited precision and exponent range,
    /// `Rounding::HalfUp`, and no flag tracking.
    pub fn unlimited() -> Self {
        Self {
            precision: 0,
            rounding: Rounding::HalfUp,
            exponent_range: None,
            adjust_exponent: true,
            clamp_normal_exponents: false,
            has_flags: false,
            flags: Flags::default(),
        }
    }

    /// Creates a context with `precision` digits and `Rounding::HalfUp`.
    pub fn for_precision(precision: u64) -> Self {
        Self::unlimited().with_precision(precision)
    }

    /// Creates a context with `precision` digits and the given rounding.
    pub fn for_precision_and_rounding(precision: u64, rounding: Rounding) -> Self {
        Self::for_precision(precision).with_rounding(rounding)
    }

    /// The decimal32 interchange format.
    pub fn decimal32() -> Self {
        Self::ieee(7, -95, 96)
    }

    /// The decimal64 interchange format.
    pub fn decimal64() -> Self {
        Self::ieee(16, -383, 384)
    }

    /// The decimal128 interchange format.
    pub fn decimal128() -> Self {
        Self::ieee(34, -6143, 6144)
    }

    /// The binary64 interchange format, for radix 2 values.
    pub fn binary64() -> Self {
        Self::ieee(53, -1022, 1023)
    }

    fn ieee(precision: u64, emin: i32, emax: i32) -> Self {
        Self::for_precision_and_rounding(precision, Rounding::HalfEven)
            .with_exponent_range(BigInt::from(emin), BigInt::from(emax))
            .with_clamp_normal_exponents(true)
    }

    /// Sets the precision in digits, 0 meaning unlimited.
    pub fn with_precision(mut self, precision: u64) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the rounding mode.
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the range of adjusted exponents.
    pub fn with_exponent_range(mut self, emin: BigInt, emax: BigInt) -> Self {
        assert!(emin <= emax, "invalid exponent range: {} > {}", emin, emax);
        self.exponent_range = Some((emin, emax));
        self
    }

    /// Removes the exponent range.
    pub fn with_unlimited_exponents(mut self) -> Self {
        self.exponent_range = None;
        self
    }

    /// Sets whether the exponent range applies to adjusted exponents
    /// rather than raw exponents.
    pub fn with_adjust_exponent(mut self, adjust: bool) -> Self {
        self.adjust_exponent = adjust;
        self
    }

    /// Sets whether exponents of normal results are clamped so that the
    /// coefficient fits in `precision` digits below `emax`.
    pub fn with_clamp_normal_exponents(mut self, clamp: bool) -> Self {
        self.clamp_normal_exponents = clamp;
        self
    }

    /// Returns a copy that tracks flags, starting with none raised.
    pub fn with_blank_flags(&self) -> Self {
        let mut ctx = self.clone();
        ctx.has_flags = true;
        ctx.flags.clear();
        ctx
    }

    /// Returns a copy that does not track flags.
    pub fn with_no_flags(&self) -> Self {
        let mut ctx = self.clone();
        ctx.has_flags = false;
        ctx.flags.clear();
        ctx
    }

    /// Returns the precision in digits, 0 meaning unlimited.
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Returns true if the precision is limited.
    pub fn has_max_precision(&self) -> bool {
        self.precision > 0
    }

    /// Returns the rounding mode.
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Returns the range of adjusted exponents, if any.
    pub fn exponent_range(&self) -> Option<(&BigInt, &BigInt)> {
        self.exponent_range.as_ref().map(|(lo, hi)| (lo, hi))
    }

    /// Returns true if the exponent range bounds adjusted exponents.
    pub fn adjust_exponent(&self) -> bool {
        self.adjust_exponent
    }

    /// Returns true if normal exponents are clamped.
    pub fn clamp_normal_exponents(&self) -> bool {
        self.clamp_normal_exponents
    }

    /// Returns true if this context records flags.
    pub fn has_flags(&self) -> bool {
        self.has_flags
    }

    /// Returns the flags raised so far.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Raises `flags` if this context records flags.
    pub fn raise(&mut self, flags: Flags) {
        if self.has_flags {
            self.flags |= flags;
        }
    }

    /// Returns true if a value with exponent `exp` and a full
    /// `precision`-digit coefficient lies within the exponent range.
    pub fn exponent_within_range(&self, exp: &BigInt) -> bool {
        match &self.exponent_range {
            None => true,
            Some((emin, emax)) => {
                if exp > emax {
                    false
                } else if self.adjust_exponent && self.precision > 0 {
                    exp + BigInt::from(self.precision) - 1 >= *emin
                } else {
                    exp >= emin
                }
            }
        }
    }

    /// Returns the smallest exponent of a subnormal value,
    /// `emin - (precision - 1)`, if the context has an exponent range.
    pub fn etiny(&self) -> Option<BigInt> {
        self.exponent_range.as_ref().map(|(emin, _)| {
            if self.precision > 0 {
                emin - BigInt::from(self.precision - 1)
            } else {
                emin.clone()
            }
        })
    }

    /// Returns the largest exponent of a full-precision coefficient,
    /// `emax - (precision - 1)`, if the context has an exponent range.
    pub fn etop(&self) -> Option<BigInt> {
        self.exponent_range.as_ref().map(|(_, emax)| {
            if self.precision > 0 {
                emax - BigInt::from(self.precision - 1)
            } else {
                emax.clone()
            }
        })
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::unlimited()
    }
}
