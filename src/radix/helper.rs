/*
    Reference helper and arithmetic engine for `RadixFloat`
*/

use std::marker::PhantomData;

use super::*;
use crate::{ArithmeticSupport, RadixHelper, RadixMath, ValueFlags};

/// Radix-agnostic view of `RadixFloat<B>` values.
#[derive(Clone, Copy, Debug)]
pub struct FloatHelper<const B: u32> {
    support: ArithmeticSupport,
}

impl<const B: u32> FloatHelper<B> {
    /// Creates a helper with the given support for special values.
    pub fn new(support: ArithmeticSupport) -> Self {
        assert_valid_radix!(B);
        Self { support }
    }
}

impl<const B: u32> RadixHelper<RadixFloat<B>> for FloatHelper<B> {
    fn radix(&self) -> u32 {
        B
    }

    fn arithmetic_support(&self) -> ArithmeticSupport {
        self.support
    }

    fn sign(&self, value: &RadixFloat<B>) -> Sign {
        match &value.num {
            RadixNum::Nan(_, _, _) => Sign::NoSign,
            RadixNum::Number(_, _, c) if c.is_zero() => Sign::NoSign,
            _ if value.sign() => Sign::Minus,
            _ => Sign::Plus,
        }
    }

    fn mantissa(&self, value: &RadixFloat<B>) -> BigInt {
        match &value.num {
            RadixNum::Number(_, _, c) => c.clone(),
            RadixNum::Infinity(_) => BigInt::zero(),
            RadixNum::Nan(_, _, payload) => payload.clone(),
        }
    }

    fn exponent(&self, value: &RadixFloat<B>) -> BigInt {
        value.exponent().cloned().unwrap_or_default()
    }

    fn flags(&self, value: &RadixFloat<B>) -> ValueFlags {
        let flags = ValueFlags::default().with_negative(value.sign());
        match value.num {
            RadixNum::Number(_, _, _) => flags,
            RadixNum::Infinity(_) => flags.with_infinity(true),
            RadixNum::Nan(_, true, _) => flags.with_signaling_nan(true),
            RadixNum::Nan(_, false, _) => flags.with_quiet_nan(true),
        }
    }

    fn create_new_with_flags(
        &self,
        mantissa: BigInt,
        exponent: BigInt,
        flags: ValueFlags,
    ) -> RadixFloat<B> {
        let neg = flags.negative();
        if flags.signaling_nan() {
            RadixFloat::nan(neg, true, mantissa)
        } else if flags.quiet_nan() {
            RadixFloat::nan(neg, false, mantissa)
        } else if flags.infinity() {
            RadixFloat::infinity(neg)
        } else {
            RadixFloat::finite(neg, mantissa, exponent)
        }
    }

    fn value_of(&self, val: i32) -> RadixFloat<B> {
        RadixFloat::from(val)
    }
}

/** Correctly-rounded arithmetic on `RadixFloat<B>`.
 *
 * Results are raw: every operation rounds once to the context it is
 * given and raises the General Decimal Arithmetic flags into it.
 * A `FullMath` built with `finite_only` reports its family as unable to
 * represent special values, which the simplified layer turns into errors.
 */
#[derive(Clone, Copy, Debug)]
pub struct FullMath<const B: u32> {
    helper: FloatHelper<B>,
    _radix: PhantomData<RadixFloat<B>>,
}

impl<const B: u32> FullMath<B> {
    /// Creates an engine over values with special values.
    pub fn new() -> Self {
        Self::with_support(ArithmeticSupport::Full)
    }

    /// Creates an engine over a finite-only family.
    pub fn finite_only() -> Self {
        Self::with_support(ArithmeticSupport::FiniteOnly)
    }

    fn with_support(support: ArithmeticSupport) -> Self {
        Self {
            helper: FloatHelper::new(support),
            _radix: PhantomData,
        }
    }
}

impl<const B: u32> Default for FullMath<B> {
    fn default() -> Self {
        Self::new()
    }
}

type F<const B: u32> = RadixFloat<B>;

impl<const B: u32> RadixMath<F<B>> for FullMath<B> {
    fn helper(&self) -> &dyn RadixHelper<F<B>> {
        &self.helper
    }

    fn add(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.add(b, ctx)
    }

    fn multiply(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.mul(b, ctx)
    }

    fn multiply_and_add(&self, a: &F<B>, b: &F<B>, c: &F<B>, ctx: &mut Context) -> F<B> {
        a.mul_add(b, c, ctx)
    }

    fn divide(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.div(b, ctx)
    }

    fn divide_to_integer_natural_scale(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.div_to_integer_natural_scale(b, ctx)
    }

    fn divide_to_integer_zero_scale(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.div_to_integer_zero_scale(b, ctx)
    }

    fn divide_to_exponent(&self, a: &F<B>, b: &F<B>, exponent: &BigInt, ctx: &mut Context) -> F<B> {
        a.div_to_exponent(b, exponent, ctx)
    }

    // the integer quotient is always exact here
    fn remainder(&self, a: &F<B>, b: &F<B>, ctx: &mut Context, _round_after_divide: bool) -> F<B> {
        a.rem(b, ctx)
    }

    fn remainder_near(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.rem_near(b, ctx)
    }

    fn power(&self, base: &F<B>, exponent: &F<B>, ctx: &mut Context) -> F<B> {
        base.pow(exponent, ctx)
    }

    fn ln(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.ln(ctx)
    }

    fn exp(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.exp(ctx)
    }

    fn square_root(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.sqrt(ctx)
    }

    fn pi(&self, ctx: &mut Context) -> F<B> {
        F::<B>::pi(ctx)
    }

    fn abs(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.abs(ctx)
    }

    fn negate(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.negate(ctx)
    }

    fn plus(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.plus(ctx)
    }

    fn next_minus(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.next_minus(ctx)
    }

    fn next_plus(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.next_plus(ctx)
    }

    fn next_toward(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.next_toward(b, ctx)
    }

    fn min_magnitude(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.min_magnitude(b, ctx)
    }

    fn max_magnitude(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.max_magnitude(b, ctx)
    }

    fn round_to_precision(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.round(ctx)
    }

    fn quantize(&self, a: &F<B>, b: &F<B>, ctx: &mut Context) -> F<B> {
        a.quantize(b, ctx)
    }

    fn round_to_exponent_exact(&self, a: &F<B>, exponent: &BigInt, ctx: &mut Context) -> F<B> {
        a.round_to_exponent_exact(exponent, ctx)
    }

    fn round_to_exponent_simple(&self, a: &F<B>, exponent: &BigInt, ctx: &mut Context) -> F<B> {
        a.round_to_exponent_simple(exponent, ctx)
    }

    fn round_to_exponent_no_rounded_flag(
        &self,
        a: &F<B>,
        exponent: &BigInt,
        ctx: &mut Context,
    ) -> F<B> {
        a.round_to_exponent_no_rounded_flag(exponent, ctx)
    }

    fn reduce(&self, a: &F<B>, ctx: &mut Context) -> F<B> {
        a.reduce(ctx)
    }

    fn compare_to(&self, a: &F<B>, b: &F<B>) -> Ordering {
        a.cmp_numeric(b)
    }

    fn compare_to_with_context(
        &self,
        a: &F<B>,
        b: &F<B>,
        treat_quiet_nans_as_signaling: bool,
        ctx: &mut Context,
    ) -> F<B> {
        a.compare_with_context(b, treat_quiet_nans_as_signaling, ctx)
    }

    fn signal_overflow(&self, ctx: &mut Context, negative: bool) -> F<B> {
        F::<B>::signal_overflow(negative, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_round_trips_classification() {
        let helper = FloatHelper::<10>::new(ArithmeticSupport::Full);
        for v in [
            Decimal::finite(true, BigInt::from(12), BigInt::from(-3)),
            Decimal::infinity(false),
            Decimal::nan(true, true, BigInt::from(7)),
        ] {
            let rebuilt = helper.create_new_with_flags(helper.mantissa(&v), helper.exponent(&v), helper.flags(&v));
            assert_eq!(rebuilt, v);
        }
        assert_eq!(helper.sign(&Decimal::zero(true)), Sign::NoSign);
        assert_eq!(helper.sign(&Decimal::from(-3)), Sign::Minus);
    }
}
