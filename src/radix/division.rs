/*
    Division and remainders
*/

use super::*;
use crate::util::reduce_trailing_zeros;
use crate::AdaptiveInt;

// Aligns two finite coefficients to their common exponent `min(e1, e2)`.
fn align<const B: u32>(e1: &BigInt, c1: &BigInt, e2: &BigInt, c2: &BigInt) -> (BigInt, BigInt) {
    if e1 >= e2 {
        (c1 * radix_power(B, &(e1 - e2)), c2.clone())
    } else {
        (c1.clone(), c2 * radix_power(B, &(e2 - e1)))
    }
}

// Strips trailing zeros of `coeff` while `exp` stays at or below `ideal`.
pub(crate) fn strip_to_ideal<const B: u32>(coeff: BigInt, exp: BigInt, ideal: &BigInt) -> (BigInt, BigInt) {
    if coeff.is_zero() || exp >= *ideal {
        return (coeff, exp);
    }
    let mut fast_exp = AdaptiveInt::from(exp);
    let ideal = AdaptiveInt::from(ideal);
    let coeff = reduce_trailing_zeros(coeff, &mut fast_exp, B, Some(&ideal));
    (coeff, fast_exp.to_big())
}

impl<const B: u32> RadixFloat<B> {
    // Handles the operand classes shared by every division.
    // `zero_exp` is the exponent of a finite value divided by infinity.
    fn divide_special(&self, other: &Self, zero_exp: Option<BigInt>, ctx: &mut Context) -> Option<Self> {
        if let Some(nan) = Self::propagate_nan(&[self, other], ctx) {
            return Some(nan);
        }
        let neg = self.sign() != other.sign();
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return Some(Self::invalid(ctx)),
            (true, false) => return Some(Self::infinity(neg)),
            (false, true) => {
                let exp = match zero_exp.or_else(|| ctx.etiny()) {
                    Some(exp) => exp,
                    None => BigInt::zero(),
                };
                if ctx.exponent_range().is_some() {
                    ctx.raise(Flags::default().with_clamped(true));
                }
                return Some(Self::finite(neg, BigInt::zero(), exp));
            }
            (false, false) => {}
        }
        if other.is_zero() {
            if self.is_zero() {
                return Some(Self::invalid(ctx));
            }
            ctx.raise(Flags::default().with_division_by_zero(true));
            return Some(Self::infinity(neg));
        }
        None
    }

    /// Computes `self / other` rounded to `ctx`.
    ///
    /// Exact quotients take the exponent closest to the exponent of
    /// `self` minus the exponent of `other`. Without a precision limit,
    /// a quotient with no terminating radix expansion is Invalid.
    pub fn div(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(r) = self.divide_special(other, None, ctx) {
            return r;
        }
        let (s1, e1, c1) = self.finite_parts();
        let (s2, e2, c2) = other.finite_parts();
        let neg = s1 != s2;
        let ideal = e1 - e2;
        if c1.is_zero() {
            return Self::round_finite(neg, BigInt::zero(), ideal, Remnant::Exact, ctx);
        }

        let prec = ctx.precision();
        if prec > 0 {
            // at least one digit beyond the precision
            let da = digit_length(c1, B);
            let db = digit_length(c2, B);
            let shift = (prec + 1 + db).saturating_sub(da);
            let n = c1 * radix_power(B, &BigInt::from(shift));
            let (q, r) = n.div_rem(c2);
            let exp = &ideal - BigInt::from(shift);
            let remnant = Remnant::from_ratio(&r, c2);
            let (q, exp) = if remnant.is_exact() {
                strip_to_ideal::<B>(q, exp, &ideal)
            } else {
                (q, exp)
            };
            return Self::round_finite(neg, q, exp, remnant, ctx);
        }

        // find k such that the reduced divisor divides B^k
        let g = c1.gcd(c2);
        let n = c1 / &g;
        let d = c2 / &g;
        let radix = BigInt::from(B);
        let mut rest = d.clone();
        let mut k = 0u64;
        while !rest.is_one() {
            let f = rest.gcd(&radix);
            if f.is_one() {
                return Self::invalid(ctx);
            }
            rest /= f;
            k += 1;
        }
        let q = n * radix_power(B, &BigInt::from(k)) / d;
        let (q, exp) = strip_to_ideal::<B>(q, &ideal - BigInt::from(k), &ideal);
        Self::round_finite(neg, q, exp, Remnant::Exact, ctx)
    }

    // Truncated integer quotient of the magnitudes, or None if it has more
    // digits than the precision of `ctx`.
    fn integer_quotient(&self, other: &Self, ctx: &Context) -> Option<BigInt> {
        let (_, e1, c1) = self.parts()?;
        let (_, e2, c2) = other.parts()?;
        let (n, d) = align::<B>(e1, c1, e2, c2);
        let q = n / d;
        let prec = ctx.precision();
        if prec > 0 && digit_length(&q, B) > prec {
            return None;
        }
        Some(q)
    }

    /// Computes the integer part of `self / other` with exponent 0.
    pub fn div_to_integer_zero_scale(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(r) = self.divide_special(other, Some(BigInt::zero()), ctx) {
            return r;
        }
        let neg = self.sign() != other.sign();
        match self.integer_quotient(other, ctx) {
            Some(q) => Self::round_finite(neg, q, BigInt::zero(), Remnant::Exact, ctx),
            None => Self::invalid(ctx),
        }
    }

    /// Computes the integer part of `self / other` with the exponent
    /// closest to the exponent of `self` minus the exponent of `other`.
    pub fn div_to_integer_natural_scale(&self, other: &Self, ctx: &mut Context) -> Self {
        let ideal = match (self.exponent(), other.exponent()) {
            (Some(e1), Some(e2)) => e1 - e2,
            _ => BigInt::zero(),
        };
        if let Some(r) = self.divide_special(other, Some(ideal.clone()), ctx) {
            return r;
        }
        let neg = self.sign() != other.sign();
        let q = match self.integer_quotient(other, ctx) {
            Some(q) => q,
            None => return Self::invalid(ctx),
        };
        if q.is_zero() {
            return Self::round_finite(neg, q, ideal, Remnant::Exact, ctx);
        }

        let (q, exp) = if ideal.is_positive() {
            strip_to_ideal::<B>(q, BigInt::zero(), &ideal)
        } else {
            // pad toward a negative ideal as far as the precision allows
            let mut pad = -&ideal;
            let prec = ctx.precision();
            if prec > 0 {
                let room = BigInt::from(prec.saturating_sub(digit_length(&q, B)));
                pad = pad.min(room);
            }
            (q * radix_power(B, &pad), -pad)
        };
        Self::round_finite(neg, q, exp, Remnant::Exact, ctx)
    }

    /// Computes `self / other` rounded to exponent `target`.
    /// The result is Invalid if it does not fit in `ctx`.
    pub fn div_to_exponent(&self, other: &Self, target: &BigInt, ctx: &mut Context) -> Self {
        if let Some(r) = self.divide_special(other, Some(target.clone()), ctx) {
            return r;
        }
        let (s1, e1, c1) = self.finite_parts();
        let (s2, e2, c2) = other.finite_parts();
        let neg = s1 != s2;

        let scale = e1 - e2 - target;
        let (n, d) = if scale.is_negative() {
            (c1.clone(), c2 * radix_power(B, &-scale))
        } else {
            (c1 * radix_power(B, &scale), c2.clone())
        };
        let (mut q, r) = n.div_rem(&d);
        let remnant = Remnant::from_ratio(&r, &d);
        let last = (&q % B).to_u32().unwrap_or(0);
        if ctx.rounding().requires_increment(neg, last, remnant, B) {
            q += 1u32;
        }

        let prec = ctx.precision();
        if prec > 0 && digit_length(&q, B) > prec {
            return Self::invalid(ctx);
        }
        if let (Some(etiny), Some((_, emax))) = (ctx.etiny(), ctx.exponent_range()) {
            if target > emax || *target < etiny {
                return Self::invalid(ctx);
            }
        }
        if !remnant.is_exact() {
            ctx.raise(Flags::default().with_inexact(true).with_rounded(true));
        }
        Self::finite(neg, q, target.clone())
    }

    // Shared operand handling of the remainders.
    fn remainder_special(&self, other: &Self, ctx: &mut Context) -> Option<Self> {
        if let Some(nan) = Self::propagate_nan(&[self, other], ctx) {
            return Some(nan);
        }
        if self.is_infinity() || other.is_zero() {
            return Some(Self::invalid(ctx));
        }
        if other.is_infinity() {
            return Some(self.round(ctx));
        }
        None
    }

    /// Computes `self - other * n` where `n` is the integer part of
    /// `self / other`. The result has the sign of `self`.
    pub fn rem(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(r) = self.remainder_special(other, ctx) {
            return r;
        }
        let (s1, e1, c1) = self.finite_parts();
        let (_, e2, c2) = other.finite_parts();
        if self.integer_quotient(other, ctx).is_none() {
            return Self::invalid(ctx);
        }
        let (n, d) = align::<B>(e1, c1, e2, c2);
        let r = n % d;
        Self::round_finite(s1, r, e1.min(e2).clone(), Remnant::Exact, ctx)
    }

    /// Computes `self - other * n` where `n` is `self / other` rounded
    /// to the nearest integer, ties to even.
    pub fn rem_near(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(r) = self.remainder_special(other, ctx) {
            return r;
        }
        let (s1, e1, c1) = self.finite_parts();
        let (_, e2, c2) = other.finite_parts();
        let (n, d) = align::<B>(e1, c1, e2, c2);
        let (mut q, mut r) = n.div_rem(&d);
        let mut neg = s1;
        let twice: BigInt = &r * 2u32;
        if twice > d || (twice == d && q.is_odd()) {
            q += 1u32;
            r = &d - r;
            neg = !neg;
        }

        let prec = ctx.precision();
        if prec > 0 && digit_length(&q, B) > prec {
            return Self::invalid(ctx);
        }
        if r.is_zero() {
            neg = s1;
        }
        Self::round_finite(neg, r, e1.min(e2).clone(), Remnant::Exact, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(neg: bool, c: i64, e: i64) -> Decimal {
        Decimal::finite(neg, BigInt::from(c), BigInt::from(e))
    }

    #[test]
    fn divides_to_precision() {
        let mut ctx = Context::for_precision(5).with_blank_flags();
        let r = dec(false, 1, 0).div(&dec(false, 3, 0), &mut ctx);
        assert_eq!(r, dec(false, 33333, -5));
        assert!(ctx.flags().inexact() && ctx.flags().rounded());

        let mut ctx = Context::for_precision(5).with_blank_flags();
        let r = dec(false, 1000, 0).div(&dec(false, 10, 0), &mut ctx);
        assert_eq!(r, dec(false, 100, 0));
        assert!(ctx.flags().is_empty());
    }

    #[test]
    fn unlimited_division_needs_termination() {
        let mut ctx = Context::unlimited().with_blank_flags();
        let r = dec(false, 1, 0).div(&dec(false, 8, 0), &mut ctx);
        assert_eq!(r, dec(false, 125, -3));

        let mut ctx = Context::unlimited().with_blank_flags();
        let r = dec(false, 1, 0).div(&dec(false, 3, 0), &mut ctx);
        assert!(r.is_nan() && ctx.flags().invalid());
    }

    #[test]
    fn division_specials() {
        let mut ctx = Context::for_precision(5).with_blank_flags();
        let r = dec(true, 1, 0).div(&Decimal::zero(false), &mut ctx);
        assert!(r.is_infinity() && r.sign() && ctx.flags().division_by_zero());

        let mut ctx = Context::for_precision(5).with_blank_flags();
        let r = Decimal::zero(false).div(&Decimal::zero(true), &mut ctx);
        assert!(r.is_nan() && ctx.flags().invalid());
    }

    #[test]
    fn integer_division_and_remainders() {
        let mut ctx = Context::for_precision(9);
        let a = dec(false, 75, -1);
        let b = dec(false, 2, 0);
        assert_eq!(a.div_to_integer_zero_scale(&b, &mut ctx), dec(false, 3, 0));
        assert_eq!(a.rem(&b, &mut ctx), dec(false, 15, -1));
        assert_eq!(a.rem_near(&b, &mut ctx), dec(true, 5, -1));
        assert_eq!(dec(false, 10, 0).rem_near(&dec(false, 4, 0), &mut ctx), dec(false, 2, 0));

        let mut ctx = Context::for_precision(2).with_blank_flags();
        let r = dec(false, 1000, 0).rem(&dec(false, 3, 0), &mut ctx);
        assert!(r.is_nan() && ctx.flags().invalid());
    }
}
