/*
    Simplified arithmetic operations
*/

use std::cmp::Ordering;

use super::*;

impl<'a, T: Clone> SimpleRadixMath<'a, T> {
    /// Adds two values.
    ///
    /// A zero operand skips the addition: the other operand
    /// (or zero) is just rounded.
    pub fn add(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        if let Some(nan) = self.check_nan(&[a, b], ctx) {
            return Ok(nan);
        }
        let mut ctx2 = ctx.with_blank_flags();
        let a = self.pre_round(a, &mut ctx2);
        let b = self.pre_round(b, &mut ctx2);
        let result = match (self.is_zero(&a), self.is_zero(&b)) {
            (true, true) => {
                let zero = self.wrapper.round_to_precision(&self.helper().value_of(0), &mut ctx2);
                self.round_to_precision(&zero, &mut ctx2)?
            }
            (true, false) => self.round_to_precision(&b, &mut ctx2)?,
            (false, true) => self.round_to_precision(&a, &mut ctx2)?,
            (false, false) => self.wrapper.add(&a, &b, &mut ctx2),
        };
        self.post_process(result, ctx, ctx2, PostMode::Plain)
    }

    /// Subtracts `b` from `a` by adding the negation of `b`.
    pub fn subtract(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        let helper = self.helper();
        let flags = helper.flags(b);
        if flags.is_nan() {
            return self.add(a, b, ctx);
        }
        let negated = helper.create_new_with_flags(
            helper.mantissa(b),
            helper.exponent(b),
            flags.with_negative(!flags.negative()),
        );
        self.add(a, &negated, ctx)
    }

    pub fn multiply(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::Plain, |m, a, b, c| m.multiply(a, b, c))
    }

    /// Computes `a * b + c`.
    ///
    /// A zero product reduces to rounding `c`;
    /// a zero `c` reduces to a multiplication.
    pub fn multiply_and_add(&self, a: &T, b: &T, c: &T, ctx: &mut Context) -> MathResult<T> {
        if let Some(nan) = self.check_nan(&[a, b, c], ctx) {
            return Ok(nan);
        }
        let mut ctx2 = ctx.with_blank_flags();
        let a = self.pre_round(a, &mut ctx2);
        let b = self.pre_round(b, &mut ctx2);
        let c = self.pre_round(c, &mut ctx2);
        let zero_product = self.is_zero(&a) || self.is_zero(&b);
        let zero_augend = self.is_zero(&c);
        let result = if zero_product {
            let value = if zero_augend {
                self.wrapper.round_to_precision(&self.helper().value_of(0), &mut ctx2)
            } else {
                c
            };
            self.round_to_precision(&value, &mut ctx2)?
        } else if zero_augend {
            self.wrapper.multiply(&a, &b, &mut ctx2)
        } else {
            self.wrapper.multiply_and_add(&a, &b, &c, &mut ctx2)
        };
        self.post_process(result, ctx, ctx2, PostMode::Plain)
    }

    pub fn divide(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::AfterDivision, |m, a, b, c| m.divide(a, b, c))
    }

    pub fn divide_to_integer_natural_scale(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::AfterDivision, |m, a, b, c| {
            m.divide_to_integer_natural_scale(a, b, c)
        })
    }

    pub fn divide_to_integer_zero_scale(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::AfterDivision, |m, a, b, c| {
            m.divide_to_integer_zero_scale(a, b, c)
        })
    }

    pub fn divide_to_exponent(
        &self,
        a: &T,
        b: &T,
        exponent: &BigInt,
        ctx: &mut Context,
    ) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::AfterDivision, |m, a, b, c| {
            m.divide_to_exponent(a, b, exponent, c)
        })
    }

    pub fn remainder(
        &self,
        a: &T,
        b: &T,
        ctx: &mut Context,
        round_after_divide: bool,
    ) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::Plain, |m, a, b, c| {
            m.remainder(a, b, c, round_after_divide)
        })
    }

    pub fn remainder_near(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::Plain, |m, a, b, c| m.remainder_near(a, b, c))
    }

    /// Raises `base` to `exponent`; `0^0` is 1.
    pub fn power(&self, base: &T, exponent: &T, ctx: &mut Context) -> MathResult<T> {
        let helper = self.helper();
        self.binary(base, exponent, ctx, PostMode::AfterDivision, |m, x, y, c| {
            if helper.sign(x) == Sign::NoSign && helper.sign(y) == Sign::NoSign {
                m.round_to_precision(&helper.value_of(1), c)
            } else {
                m.power(x, y, c)
            }
        })
    }

    pub fn ln(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.ln(a, c))
    }

    pub fn exp(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.exp(a, c))
    }

    pub fn square_root(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.square_root(a, c))
    }

    /// Computes pi; the wrapped engine's result is returned as is.
    pub fn pi(&self, ctx: &mut Context) -> MathResult<T> {
        Ok(self.wrapper.pi(ctx))
    }

    pub fn abs(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.abs(a, c))
    }

    pub fn negate(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.negate(a, c))
    }

    pub fn plus(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.plus(a, c))
    }

    pub fn next_minus(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.next_minus(a, c))
    }

    pub fn next_plus(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.next_plus(a, c))
    }

    pub fn next_toward(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::Plain, |m, a, b, c| m.next_toward(a, b, c))
    }

    pub fn min_magnitude(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::Plain, |m, a, b, c| m.min_magnitude(a, b, c))
    }

    pub fn max_magnitude(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::Plain, |m, a, b, c| m.max_magnitude(a, b, c))
    }

    /// Returns the greater operand, `a` on ties.
    pub fn max(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::Plain, |m, a, b, _| {
            if m.compare_to(a, b) != Ordering::Less {
                a.clone()
            } else {
                b.clone()
            }
        })
    }

    /// Returns the lesser operand, `a` on ties.
    pub fn min(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        self.binary(a, b, ctx, PostMode::Plain, |m, a, b, _| {
            if m.compare_to(a, b) != Ordering::Greater {
                a.clone()
            } else {
                b.clone()
            }
        })
    }

    pub fn round_to_precision(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::Plain, |m, a, c| m.round_to_precision(a, c))
    }

    /// Rounds `a` to the exponent of `b`.
    ///
    /// Quantizing to a subnormal `b` is invalid.
    pub fn quantize(&self, a: &T, b: &T, ctx: &mut Context) -> MathResult<T> {
        if let Some(nan) = self.check_nan(&[a, b], ctx) {
            return Ok(nan);
        }
        let mut ctx2 = ctx.with_blank_flags();
        let a = self.pre_round(a, &mut ctx2);
        let b = self.pre_round(b, &mut ctx2);
        let mut trial = ctx2.with_blank_flags();
        self.wrapper.round_to_precision(&b, &mut trial);
        if trial.flags().subnormal() {
            return self.signal_invalid(ctx);
        }
        let result = self.wrapper.quantize(&a, &b, &mut ctx2);
        self.post_process(result, ctx, ctx2, PostMode::AfterQuantize)
    }

    pub fn round_to_exponent_exact(
        &self,
        a: &T,
        exponent: &BigInt,
        ctx: &mut Context,
    ) -> MathResult<T> {
        self.unary(a, ctx, PostMode::AfterQuantize, |m, a, c| {
            m.round_to_exponent_exact(a, exponent, c)
        })
    }

    pub fn round_to_exponent_simple(
        &self,
        a: &T,
        exponent: &BigInt,
        ctx: &mut Context,
    ) -> MathResult<T> {
        self.unary(a, ctx, PostMode::AfterQuantize, |m, a, c| {
            m.round_to_exponent_simple(a, exponent, c)
        })
    }

    pub fn round_to_exponent_no_rounded_flag(
        &self,
        a: &T,
        exponent: &BigInt,
        ctx: &mut Context,
    ) -> MathResult<T> {
        self.unary(a, ctx, PostMode::AfterQuantize, |m, a, c| {
            m.round_to_exponent_no_rounded_flag(a, exponent, c)
        })
    }

    pub fn reduce(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        self.unary(a, ctx, PostMode::AfterQuantize, |m, a, c| m.reduce(a, c))
    }

    /// Rounds a freshly converted value; zero becomes the canonical zero.
    pub fn round_after_conversion(&self, a: &T, ctx: &mut Context) -> MathResult<T> {
        if let Some(nan) = self.check_nan(&[a], ctx) {
            return Ok(nan);
        }
        if self.is_zero(a) {
            return Ok(self.wrapper.round_to_precision(&self.helper().value_of(0), ctx));
        }
        let mut ctx2 = ctx.with_blank_flags();
        let result = self.wrapper.round_to_precision(a, &mut ctx2);
        self.post_process(result, ctx, ctx2, PostMode::AfterQuantize)
    }

    /// Returns the overflow result for `ctx`.
    pub fn signal_overflow(&self, ctx: &mut Context, negative: bool) -> MathResult<T> {
        let mut ctx2 = ctx.with_blank_flags();
        let result = self.wrapper.signal_overflow(&mut ctx2, negative);
        self.post_process(result, ctx, ctx2, PostMode::AfterQuantize)
    }

    /// Compares two non-NaN values numerically.
    pub fn compare_to(&self, a: &T, b: &T) -> Ordering {
        self.wrapper.compare_to(a, b)
    }

    /// Compares two values after rounding them to `ctx`, returning
    /// -1, 0, or 1 as a value. NaN operands propagate.
    pub fn compare_to_with_context(
        &self,
        a: &T,
        b: &T,
        treat_quiet_nans_as_signaling: bool,
        ctx: &mut Context,
    ) -> MathResult<T> {
        if let Some(nan) = self.check_nan(&[a, b], ctx) {
            return Ok(nan);
        }
        let a = self.pre_round(a, ctx);
        let b = self.pre_round(b, ctx);
        Ok(self
            .wrapper
            .compare_to_with_context(&a, &b, treat_quiet_nans_as_signaling, ctx))
    }
}
