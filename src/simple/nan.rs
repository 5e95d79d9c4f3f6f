/*
    NaN propagation
*/

use num_traits::{One, Zero};

use super::*;

impl<'a, T: Clone> SimpleRadixMath<'a, T> {
    /// Returns the NaN an operation on `operands` propagates, if any.
    ///
    /// The first signaling NaN wins and raises Invalid; otherwise the
    /// first quiet NaN wins. Either way the result is quiet.
    pub(super) fn check_nan(&self, operands: &[&T], ctx: &mut Context) -> Option<T> {
        let helper = self.helper();
        if let Some(snan) = operands.iter().find(|v| helper.flags(v).signaling_nan()) {
            ctx.raise(Flags::default().with_invalid(true));
            return Some(self.return_quiet_nan(snan, ctx));
        }
        operands
            .iter()
            .find(|v| helper.flags(v).quiet_nan())
            .map(|qnan| self.return_quiet_nan(qnan, ctx))
    }

    // Quiets a NaN, keeping at most `precision` digits of its payload.
    fn return_quiet_nan(&self, value: &T, ctx: &Context) -> T {
        let helper = self.helper();
        let mut payload = helper.mantissa(value);
        let mut truncated = false;
        if !payload.is_zero() && ctx.has_max_precision() {
            let limit =
                helper.multiply_by_radix_power(&BigInt::one(), &AdaptiveInt::from(ctx.precision()));
            if payload >= limit {
                payload %= &limit;
                truncated = true;
            }
        }

        let flags = helper.flags(value);
        if !truncated && flags.quiet_nan() {
            return value.clone();
        }
        let flags = ValueFlags::default()
            .with_negative(flags.negative())
            .with_quiet_nan(true);
        helper.create_new_with_flags(payload, BigInt::zero(), flags)
    }

    /// Raises Invalid and returns a quiet NaN, or fails if the
    /// numeric family has no NaNs.
    pub(super) fn signal_invalid(&self, ctx: &mut Context) -> MathResult<T> {
        let helper = self.helper();
        if helper.arithmetic_support() == ArithmeticSupport::FiniteOnly {
            return Err(ArithmeticError::InvalidOperation);
        }
        debug!("invalid operation signaled");
        ctx.raise(Flags::default().with_invalid(true));
        Ok(helper.create_new_with_flags(
            BigInt::zero(),
            BigInt::zero(),
            ValueFlags::default().with_quiet_nan(true),
        ))
    }
}
