/*
    Simplified arithmetic
*/

use std::marker::PhantomData;

use num_bigint::{BigInt, Sign};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{AdaptiveInt, ArithmeticSupport, Context, Flags, RadixHelper, RadixMath, ValueFlags};

mod arithmetic;
mod nan;
mod post;

/// Failures of simplified arithmetic.
///
/// Numeric exceptional conditions are never failures; they raise flags
/// and produce a value. These only occur for numeric families that
/// cannot represent special values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("invalid operation")]
    InvalidOperation,
    #[error("result is not finite and the numeric family is finite-only")]
    NonFiniteResult,
}

/// Result of a simplified arithmetic operation.
pub type MathResult<T> = Result<T, ArithmeticError>;

/// Post-processing applied to a raw result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PostMode {
    Plain,
    AfterDivision,
    AfterQuantize,
}

/** Simplified decimal arithmetic over a correctly-rounded engine.
 *
 * Every operation follows the same protocol:
 *
 *  - NaN operands are intercepted, signaling ones first, left to right;
 *  - each finite operand is rounded to the context precision;
 *  - the wrapped engine computes the result against a copy of the
 *      context with blank flags;
 *  - the result is normalized and the copy's flags are merged into
 *      the caller's context.
 *
 * Subnormal results are always reported as underflows, and Clamped is
 * only reported when the context clamps normal exponents.
 */
pub struct SimpleRadixMath<'a, T> {
    wrapper: &'a dyn RadixMath<T>,
    _value: PhantomData<fn() -> T>,
}

impl<'a, T: Clone> SimpleRadixMath<'a, T> {
    /// Wraps a full arithmetic engine.
    pub fn new(wrapper: &'a dyn RadixMath<T>) -> Self {
        Self {
            wrapper,
            _value: PhantomData,
        }
    }

    /// Returns the helper of the wrapped engine.
    pub fn helper(&self) -> &dyn RadixHelper<T> {
        self.wrapper.helper()
    }

    // NaN check, pre-rounding, and post-processing around a one-operand call.
    fn unary<F>(&self, a: &T, ctx: &mut Context, mode: PostMode, op: F) -> MathResult<T>
    where
        F: FnOnce(&dyn RadixMath<T>, &T, &mut Context) -> T,
    {
        if let Some(nan) = self.check_nan(&[a], ctx) {
            return Ok(nan);
        }
        let mut ctx2 = ctx.with_blank_flags();
        let a = self.pre_round(a, &mut ctx2);
        let result = op(self.wrapper, &a, &mut ctx2);
        self.post_process(result, ctx, ctx2, mode)
    }

    // NaN check, pre-rounding, and post-processing around a two-operand call.
    fn binary<F>(&self, a: &T, b: &T, ctx: &mut Context, mode: PostMode, op: F) -> MathResult<T>
    where
        F: FnOnce(&dyn RadixMath<T>, &T, &T, &mut Context) -> T,
    {
        if let Some(nan) = self.check_nan(&[a, b], ctx) {
            return Ok(nan);
        }
        let mut ctx2 = ctx.with_blank_flags();
        let a = self.pre_round(a, &mut ctx2);
        let b = self.pre_round(b, &mut ctx2);
        let result = op(self.wrapper, &a, &b, &mut ctx2);
        self.post_process(result, ctx, ctx2, mode)
    }

    fn is_zero(&self, value: &T) -> bool {
        self.helper().sign(value) == Sign::NoSign
    }
}
