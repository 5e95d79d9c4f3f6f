/*
    Traits relevant to rounding
*/

use std::cmp::Ordering;

use num_bigint::BigInt;

use crate::{Context, RadixHelper};

/// A correctly-rounded arithmetic engine over a numeric family `T`.
///
/// For any computer number system, most mathematical operators
/// can be decomposed into two operations:
///  - a real number operation: `R^n -> R`, and
///  - a rounding operation: `R -> R`.
/// Every method here performs both, rounding to the `Context` passed in
/// and raising flags into it. Results are raw: no simplified-arithmetic
/// post-processing is applied.
pub trait RadixMath<T> {
    /// Returns the helper of the numeric family.
    fn helper(&self) -> &dyn RadixHelper<T>;

    fn add(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    fn multiply(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    /// Computes `a * b + c` with a single rounding.
    fn multiply_and_add(&self, a: &T, b: &T, c: &T, ctx: &mut Context) -> T;

    fn divide(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    /// Integer part of `a / b`, with the exponent of `a` minus the exponent of `b`
    /// when that leaves an integer.
    fn divide_to_integer_natural_scale(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    /// Integer part of `a / b` with exponent 0.
    fn divide_to_integer_zero_scale(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    /// `a / b` rounded to the given exponent.
    fn divide_to_exponent(&self, a: &T, b: &T, exponent: &BigInt, ctx: &mut Context) -> T;

    /// `a - b * n` where `n` is the integer part of `a / b`.
    fn remainder(&self, a: &T, b: &T, ctx: &mut Context, round_after_divide: bool) -> T;

    /// `a - b * n` where `n` is `a / b` rounded to nearest, ties to even.
    fn remainder_near(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    fn power(&self, base: &T, exponent: &T, ctx: &mut Context) -> T;

    fn ln(&self, a: &T, ctx: &mut Context) -> T;

    fn exp(&self, a: &T, ctx: &mut Context) -> T;

    fn square_root(&self, a: &T, ctx: &mut Context) -> T;

    fn pi(&self, ctx: &mut Context) -> T;

    fn abs(&self, a: &T, ctx: &mut Context) -> T;

    fn negate(&self, a: &T, ctx: &mut Context) -> T;

    /// `0 + a`, rounded.
    fn plus(&self, a: &T, ctx: &mut Context) -> T;

    /// The largest representable value less than `a`.
    fn next_minus(&self, a: &T, ctx: &mut Context) -> T;

    /// The smallest representable value greater than `a`.
    fn next_plus(&self, a: &T, ctx: &mut Context) -> T;

    /// The representable value next to `a` in the direction of `b`.
    fn next_toward(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    fn min_magnitude(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    fn max_magnitude(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    fn round_to_precision(&self, a: &T, ctx: &mut Context) -> T;

    /// `a` rounded to the exponent of `b`.
    fn quantize(&self, a: &T, b: &T, ctx: &mut Context) -> T;

    /// `a` rounded to `exponent`, signaling Inexact and Rounded.
    fn round_to_exponent_exact(&self, a: &T, exponent: &BigInt, ctx: &mut Context) -> T;

    /// `a` rounded to `exponent`; values already at or above `exponent` come back unchanged.
    fn round_to_exponent_simple(&self, a: &T, exponent: &BigInt, ctx: &mut Context) -> T;

    /// `a` rounded to `exponent` without raising Rounded or Inexact.
    fn round_to_exponent_no_rounded_flag(&self, a: &T, exponent: &BigInt, ctx: &mut Context)
        -> T;

    /// `a` rounded, then stripped of trailing zeros.
    fn reduce(&self, a: &T, ctx: &mut Context) -> T;

    /// Total numeric order of two non-NaN values.
    fn compare_to(&self, a: &T, b: &T) -> Ordering;

    /// Compares two values, returning -1, 0, or 1 as a `T`,
    /// or a NaN if either is a NaN.
    fn compare_to_with_context(
        &self,
        a: &T,
        b: &T,
        treat_quiet_nans_as_signaling: bool,
        ctx: &mut Context,
    ) -> T;

    /// The value an overflow produces under `ctx`, raising
    /// Overflow, Inexact, and Rounded.
    fn signal_overflow(&self, ctx: &mut Context, negative: bool) -> T;
}
