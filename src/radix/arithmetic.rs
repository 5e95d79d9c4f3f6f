/*
    Addition, multiplication, and related operations
*/

use super::*;
use crate::Rounding;

// (sign, exponent, coefficient) of a finite value
type Parts<'a> = (bool, &'a BigInt, &'a BigInt);

// Exact sum of two finite values.
//
// When rounding to `prec` digits in an even radix, an addend lying
// entirely below the rounding position of the other is replaced by a
// single sticky digit.
pub(crate) fn add_exact<const B: u32>(a: Parts, b: Parts, prec: u64) -> (bool, BigInt, BigInt) {
    let (hi, lo) = if a.1 >= b.1 { (a, b) } else { (b, a) };
    let (hs, he, hc) = hi;
    let (ls, le, lc) = lo;

    let mut aligned = None;
    if B % 2 == 0 && prec > 0 && !hc.is_zero() && !lc.is_zero() {
        let k = (prec + 2).saturating_sub(digit_length(hc, B));
        let e = he - BigInt::from(k);
        let lo_adjusted = le + BigInt::from(digit_length(lc, B)) - 1;
        if lo_adjusted < e {
            let hc = hc * radix_power(B, &BigInt::from(k + 1));
            aligned = Some((hc, BigInt::one(), e - 1));
        }
    }
    let (hc, lc, exp) = match aligned {
        Some(sticky) => sticky,
        None => (hc * radix_power(B, &(he - le)), lc.clone(), le.clone()),
    };

    let hv = if hs { -hc } else { hc };
    let lv = if ls { -lc } else { lc };
    let sum = hv + lv;
    (sum.is_negative(), sum.abs(), exp)
}

impl<const B: u32> RadixFloat<B> {
    // (sign, exponent, coefficient) of a finite value
    pub(crate) fn parts(&self) -> Option<Parts<'_>> {
        match &self.num {
            RadixNum::Number(s, exp, c) => Some((*s, exp, c)),
            _ => None,
        }
    }

    // Parts of a value already known to be finite
    pub(crate) fn finite_parts(&self) -> Parts<'_> {
        match self.parts() {
            Some(parts) => parts,
            None => panic!("expected a finite value: {:?}", self),
        }
    }

    // Sign of an exact zero sum of addends with signs `s1` and `s2`.
    fn zero_sum_sign(s1: bool, s2: bool, ctx: &Context) -> bool {
        if s1 == s2 {
            s1
        } else {
            ctx.rounding() == Rounding::Floor
        }
    }

    /// Computes `self + other` rounded to `ctx`.
    pub fn add(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self, other], ctx) {
            return nan;
        }
        match (&self.num, &other.num) {
            (RadixNum::Infinity(s1), RadixNum::Infinity(s2)) => {
                if s1 == s2 {
                    self.clone()
                } else {
                    Self::invalid(ctx)
                }
            }
            (RadixNum::Infinity(_), _) => self.clone(),
            (_, RadixNum::Infinity(_)) => other.clone(),
            (RadixNum::Number(s1, e1, c1), RadixNum::Number(s2, e2, c2)) => {
                let (neg, coeff, exp) =
                    add_exact::<B>((*s1, e1, c1), (*s2, e2, c2), ctx.precision());
                let neg = if coeff.is_zero() {
                    Self::zero_sum_sign(*s1, *s2, ctx)
                } else {
                    neg
                };
                Self::round_finite(neg, coeff, exp, Remnant::Exact, ctx)
            }
            _ => Self::invalid(ctx),
        }
    }

    /// Computes `self - other` rounded to `ctx`.
    pub fn sub(&self, other: &Self, ctx: &mut Context) -> Self {
        if other.is_nan() {
            return self.add(other, ctx);
        }
        self.add(&other.with_sign(!other.sign()), ctx)
    }

    /// Computes `self * other` rounded to `ctx`.
    pub fn mul(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self, other], ctx) {
            return nan;
        }
        let neg = self.sign() != other.sign();
        match (&self.num, &other.num) {
            (RadixNum::Number(_, e1, c1), RadixNum::Number(_, e2, c2)) => {
                Self::round_finite(neg, c1 * c2, e1 + e2, Remnant::Exact, ctx)
            }
            _ if self.is_zero() || other.is_zero() => Self::invalid(ctx),
            _ => Self::infinity(neg),
        }
    }

    /// Computes `self * b + c` with a single rounding.
    pub fn mul_add(&self, b: &Self, c: &Self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self, b, c], ctx) {
            return nan;
        }
        let prod_neg = self.sign() != b.sign();
        if self.is_infinity() || b.is_infinity() {
            if self.is_zero() || b.is_zero() {
                return Self::invalid(ctx);
            }
            if c.is_infinity() && c.sign() != prod_neg {
                return Self::invalid(ctx);
            }
            return Self::infinity(prod_neg);
        }
        if c.is_infinity() {
            return c.clone();
        }

        match (&self.num, &b.num, &c.num) {
            (RadixNum::Number(_, e1, c1), RadixNum::Number(_, e2, c2), RadixNum::Number(s3, e3, c3)) => {
                let prod_c = c1 * c2;
                let prod_e = e1 + e2;
                let (neg, coeff, exp) =
                    add_exact::<B>((prod_neg, &prod_e, &prod_c), (*s3, e3, c3), ctx.precision());
                let neg = if coeff.is_zero() {
                    Self::zero_sum_sign(prod_neg, *s3, ctx)
                } else {
                    neg
                };
                Self::round_finite(neg, coeff, exp, Remnant::Exact, ctx)
            }
            _ => Self::invalid(ctx),
        }
    }

    /// Computes `0 + self` rounded to `ctx`.
    pub fn plus(&self, ctx: &mut Context) -> Self {
        match &self.num {
            RadixNum::Number(s, _, c) if c.is_zero() => {
                let neg = *s && ctx.rounding() == Rounding::Floor;
                self.with_sign(neg).round(ctx)
            }
            _ => self.round(ctx),
        }
    }

    /// Computes `0 - self` rounded to `ctx`.
    pub fn negate(&self, ctx: &mut Context) -> Self {
        match &self.num {
            RadixNum::Nan(_, _, _) => self.round(ctx),
            RadixNum::Number(s, _, c) if c.is_zero() => {
                let neg = !*s && ctx.rounding() == Rounding::Floor;
                self.with_sign(neg).round(ctx)
            }
            _ => self.with_sign(!self.sign()).round(ctx),
        }
    }

    /// Computes `|self|` rounded to `ctx`.
    pub fn abs(&self, ctx: &mut Context) -> Self {
        match &self.num {
            RadixNum::Nan(_, _, _) => self.round(ctx),
            _ => self.with_sign(false).round(ctx),
        }
    }
}

// Neighbors
impl<const B: u32> RadixFloat<B> {
    // Steps to the adjacent representable value above or below.
    fn next(&self, up: bool, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self], ctx) {
            return nan;
        }
        let prec = ctx.precision();
        let (exp, c) = match &self.num {
            RadixNum::Infinity(s) => {
                // stepping back from infinity lands on the largest finite value
                if *s == up {
                    return Self::largest_finite(*s, ctx).unwrap_or_else(|| self.clone());
                }
                return self.clone();
            }
            RadixNum::Number(_, exp, c) => (exp, c),
            RadixNum::Nan(_, _, _) => return Self::invalid(ctx),
        };
        if prec == 0 {
            return Self::invalid(ctx);
        }

        // a positive value below half an ulp of any result
        let tiny_exp = match ctx.etiny() {
            Some(etiny) => exp.min(&etiny) - 1,
            None if c.is_zero() => return Self::invalid(ctx),
            None => {
                let last = exp + BigInt::from(digit_length(c, B)) - BigInt::from(prec);
                exp.min(&last) - 1
            }
        };
        let tiny = Self::finite(!up, BigInt::one(), tiny_exp);
        let rounding = if up {
            Rounding::Ceiling
        } else {
            Rounding::Floor
        };
        let mut nctx = ctx.with_no_flags().with_rounding(rounding);
        self.add(&tiny, &mut nctx)
    }

    /// Returns the smallest representable value greater than `self`.
    pub fn next_plus(&self, ctx: &mut Context) -> Self {
        self.next(true, ctx)
    }

    /// Returns the largest representable value less than `self`.
    pub fn next_minus(&self, ctx: &mut Context) -> Self {
        self.next(false, ctx)
    }

    /// Returns the representable value next to `self` in the direction of
    /// `other`, or `self` with the sign of `other` if they are equal.
    pub fn next_toward(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self, other], ctx) {
            return nan;
        }
        let result = match self.cmp_numeric(other) {
            Ordering::Equal => return self.with_sign(other.sign()),
            Ordering::Less => self.next(true, ctx),
            Ordering::Greater => self.next(false, ctx),
        };

        if result.is_infinity() && self.is_finite() {
            ctx.raise(
                Flags::default()
                    .with_overflow(true)
                    .with_inexact(true)
                    .with_rounded(true),
            );
        } else if let (Some(adjusted), Some((emin, _))) =
            (result.adjusted_exponent(), ctx.exponent_range())
        {
            if result.is_zero() || adjusted < *emin {
                let mut flags = Flags::default()
                    .with_underflow(true)
                    .with_subnormal(true)
                    .with_inexact(true)
                    .with_rounded(true);
                if result.is_zero() {
                    flags = flags.with_clamped(true);
                }
                ctx.raise(flags);
            }
        }
        result
    }
}

// Selection and comparison
impl<const B: u32> RadixFloat<B> {
    // A quiet NaN loses to a number; anything else propagates.
    fn select_nan(&self, other: &Self, ctx: &mut Context) -> Option<Self> {
        match (self.is_signaling(), other.is_signaling()) {
            (Some(true), _) | (_, Some(true)) => Self::propagate_nan(&[self, other], ctx),
            (Some(false), Some(false)) => Some(self.clone()),
            (Some(false), None) => Some(other.round(ctx)),
            (None, Some(false)) => Some(self.round(ctx)),
            (None, None) => None,
        }
    }

    /// Returns the operand with the larger magnitude, rounded to `ctx`.
    /// Ties are broken by numeric order.
    pub fn max_magnitude(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(r) = self.select_nan(other, ctx) {
            return r;
        }
        let order = self.cmp_magnitude(other).then_with(|| self.cmp_numeric(other));
        if order == Ordering::Less {
            other.round(ctx)
        } else {
            self.round(ctx)
        }
    }

    /// Returns the operand with the smaller magnitude, rounded to `ctx`.
    /// Ties are broken by numeric order.
    pub fn min_magnitude(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(r) = self.select_nan(other, ctx) {
            return r;
        }
        let order = self.cmp_magnitude(other).then_with(|| self.cmp_numeric(other));
        if order == Ordering::Greater {
            other.round(ctx)
        } else {
            self.round(ctx)
        }
    }

    /// Compares two values, returning -1, 0, or 1 as a `RadixFloat`.
    /// NaN operands propagate; quiet NaNs raise Invalid when
    /// `signal_quiet` is set.
    pub fn compare_with_context(&self, other: &Self, signal_quiet: bool, ctx: &mut Context) -> Self {
        if signal_quiet && (self.is_nan() || other.is_nan()) {
            ctx.raise(Flags::default().with_invalid(true));
        }
        if let Some(nan) = Self::propagate_nan(&[self, other], ctx) {
            return nan;
        }
        match self.cmp_numeric(other) {
            Ordering::Less => Self::from(-1),
            Ordering::Equal => Self::from(0),
            Ordering::Greater => Self::from(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(neg: bool, c: i64, e: i64) -> Decimal {
        Decimal::finite(neg, BigInt::from(c), BigInt::from(e))
    }

    #[test]
    fn sticky_addition_rounds_like_exact() {
        let big = dec(false, 1, 50);
        let small = dec(true, 3, -20);
        for rounding in [Rounding::Down, Rounding::Up, Rounding::HalfEven, Rounding::Floor] {
            let mut exact = Context::unlimited();
            let sum = big.add(&small, &mut exact);
            let mut c1 = Context::for_precision_and_rounding(9, rounding);
            let mut c2 = Context::for_precision_and_rounding(9, rounding);
            assert_eq!(sum.round(&mut c1), big.add(&small, &mut c2));
        }
    }

    #[test]
    fn zero_sums_and_infinities() {
        let mut ctx = Context::for_precision(5);
        assert!(!dec(false, 1, 0).add(&dec(true, 1, 0), &mut ctx).sign());
        let mut ctx = Context::for_precision_and_rounding(5, Rounding::Floor);
        assert!(dec(false, 1, 0).add(&dec(true, 1, 0), &mut ctx).sign());

        let mut ctx = Context::for_precision(5).with_blank_flags();
        let r = Decimal::infinity(false).add(&Decimal::infinity(true), &mut ctx);
        assert!(r.is_nan() && ctx.flags().invalid());

        let mut ctx = Context::for_precision(5).with_blank_flags();
        let r = Decimal::infinity(false).mul(&Decimal::zero(true), &mut ctx);
        assert!(r.is_nan() && ctx.flags().invalid());
    }

    #[test]
    fn fused_multiply_add_rounds_once() {
        let mut ctx = Context::for_precision(3);
        let a = dec(false, 111, -2);
        let r = a.mul_add(&a, &dec(true, 123, -2), &mut ctx);
        // 1.2321 - 1.23 = 0.0021
        assert_eq!(r, dec(false, 21, -4));
    }

    #[test]
    fn neighbors() {
        let mut ctx = Context::for_precision(3).with_exponent_range(BigInt::from(-5), BigInt::from(5));
        assert_eq!(dec(false, 1, 0).next_plus(&mut ctx), dec(false, 101, -2));
        assert_eq!(dec(false, 1, 0).next_minus(&mut ctx), dec(false, 999, -3));
        assert_eq!(Decimal::zero(false).next_plus(&mut ctx), dec(false, 1, -7));
        assert_eq!(Decimal::infinity(false).next_minus(&mut ctx), dec(false, 999, 3));
    }
}
