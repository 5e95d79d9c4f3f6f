/*
    Operand and result processing
*/

use std::cmp::Ordering;

use num_traits::Zero;

use super::*;
use crate::util::reduce_trailing_zeros;

impl<'a, T: Clone> SimpleRadixMath<'a, T> {
    /// Rounds a finite operand to the precision of `ctx` if it has
    /// more digits than that.
    ///
    /// Losing nonzero digits raises Lost Digits along with Inexact and
    /// Rounded. An operand that overflows becomes the overflow result.
    pub(super) fn pre_round(&self, value: &T, ctx: &mut Context) -> T {
        let helper = self.helper();
        let flags = helper.flags(value);
        if flags.is_special() || !ctx.has_max_precision() {
            return value.clone();
        }
        let digits = helper.digit_length(&helper.mantissa(value));
        if digits.compare_to_big(&BigInt::from(ctx.precision())) != Ordering::Greater {
            return value.clone();
        }

        let mut trial = ctx.with_blank_flags();
        let rounded = self.wrapper.round_to_precision(value, &mut trial);
        let raised = trial.flags();
        if raised.inexact() {
            ctx.raise(Flags::lost_digits_group());
        }
        if raised.rounded() {
            ctx.raise(Flags::default().with_rounded(true));
        }
        if raised.overflow() {
            debug!(digits = %digits, "operand overflowed while rounding to precision");
            ctx.raise(Flags::default().with_lost_digits(true));
            return self.wrapper.signal_overflow(ctx, flags.negative());
        }
        rounded
    }

    /// Merges the flags of `src` into `dest` and normalizes a raw result.
    pub(super) fn post_process(
        &self,
        value: T,
        dest: &mut Context,
        src: Context,
        mode: PostMode,
    ) -> MathResult<T> {
        let helper = self.helper();
        let value_flags = helper.flags(&value);
        if dest.has_flags() {
            let mut raised = src.flags();
            if !src.clamp_normal_exponents() {
                raised = raised.with_clamped(false);
            }
            dest.raise(raised);
            if raised.subnormal() {
                // subnormal results are always underflows
                dest.raise(
                    Flags::default()
                        .with_underflow(true)
                        .with_subnormal(true)
                        .with_inexact(true)
                        .with_rounded(true),
                );
            }
        }
        trace!(flags = ?dest.flags(), ?mode, "post-processing result");

        if value_flags.is_special() {
            if dest.flags().is_empty() {
                return self.signal_invalid(dest);
            }
            if helper.arithmetic_support() == ArithmeticSupport::FiniteOnly {
                return Err(ArithmeticError::NonFiniteResult);
            }
            return Ok(value);
        }

        let mant = helper.mantissa(&value);
        if mant.is_zero() {
            return Ok(if mode == PostMode::AfterQuantize {
                helper.create_new_with_flags(mant, helper.exponent(&value), ValueFlags::default())
            } else {
                self.wrapper.round_to_precision(&helper.value_of(0), dest)
            });
        }
        if mode == PostMode::AfterQuantize {
            return Ok(value);
        }

        let exp = helper.exponent(&value);
        let radix = helper.radix();
        if exp.sign() == Sign::Plus {
            // larger exponents cannot be written out as digits
            let expandable = exp <= BigInt::from(u32::MAX);
            let mut fast_exp = AdaptiveInt::from_big(&exp);
            if !dest.has_max_precision() {
                if !expandable {
                    debug!(exponent = %exp, "positive exponent left in place");
                    return Ok(value);
                }
                let mant = helper.multiply_by_radix_power(&mant, &fast_exp);
                return Ok(helper.create_new_with_flags(mant, BigInt::zero(), value_flags));
            }
            if !dest.exponent_within_range(&exp) {
                return Ok(value);
            }

            let mut room = AdaptiveInt::from(dest.precision());
            room.subtract(&helper.digit_length(&mant));
            if expandable && room.sign() > 0 && room.compare_to(&fast_exp) != Ordering::Less {
                let mant = helper.multiply_by_radix_power(&mant, &fast_exp);
                return Ok(helper.create_new_with_flags(mant, BigInt::zero(), value_flags));
            }
            if mode == PostMode::AfterDivision {
                let mant = reduce_trailing_zeros(mant, &mut fast_exp, radix, None);
                return Ok(helper.create_new_with_flags(mant, fast_exp.to_big(), value_flags));
            }
        } else if mode == PostMode::AfterDivision && exp.sign() == Sign::Minus {
            let mut fast_exp = AdaptiveInt::from_big(&exp);
            let ideal = AdaptiveInt::new(0);
            let mant = reduce_trailing_zeros(mant, &mut fast_exp, radix, Some(&ideal));
            return Ok(helper.create_new_with_flags(mant, fast_exp.to_big(), value_flags));
        }
        Ok(value)
    }
}
