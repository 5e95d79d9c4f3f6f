/*
    Rounding
*/

use super::*;
use crate::AdaptiveInt;

// Drops the lowest `drop` digits of `coeff`, combining them with the
// remnant `below` of digits dropped earlier.
pub(crate) fn shift_right<const B: u32>(
    coeff: BigInt,
    drop: &BigInt,
    below: Remnant,
) -> (BigInt, Remnant) {
    if !drop.is_positive() {
        return (coeff, below);
    }
    // everything is dropped and sits below B^(drop - 1)
    if *drop > BigInt::from(digit_length(&coeff, B)) {
        let remnant = if coeff.is_zero() && below.is_exact() {
            Remnant::Exact
        } else {
            Remnant::BelowHalf
        };
        return (BigInt::zero(), remnant);
    }
    let divisor = radix_power(B, drop);
    let (q, r) = coeff.div_rem(&divisor);
    (q, Remnant::shift(&r, &divisor, below))
}

// Rounding core
impl<const B: u32> RadixFloat<B> {
    /// Rounds the exact value `(coeff + remnant) * B^exp` to `ctx`,
    /// raising flags into it.
    ///
    /// `remnant` describes digits already discarded below the last digit
    /// of `coeff`. The result has at most `precision` digits, an exponent
    /// no smaller than `Etiny`, and an adjusted exponent no larger than
    /// `emax` unless it overflows to infinity.
    pub(crate) fn round_finite(
        neg: bool,
        mut coeff: BigInt,
        mut exp: BigInt,
        mut remnant: Remnant,
        ctx: &mut Context,
    ) -> Self {
        if coeff.is_zero() && remnant.is_exact() {
            // The exceptional case: exact zero
            // Only the exponent may need adjusting
            return Self::clamp_zero(neg, exp, ctx);
        }

        let prec = ctx.precision();
        let mut flags = Flags::default();

        // subnormal is judged before rounding
        let digits = digit_length(&coeff, B);
        let subnormal = match ctx.exponent_range() {
            Some((emin, _)) => &exp + BigInt::from(digits) - 1 < *emin,
            None => false,
        };

        // digits dropped for precision, then for the subnormal range
        let mut drop = BigInt::zero();
        if prec > 0 && digits > prec {
            drop = BigInt::from(digits - prec);
        }
        if let Some(etiny) = ctx.etiny() {
            if &exp + &drop < etiny {
                drop = etiny - &exp;
            }
        }
        if drop.is_positive() {
            flags = flags.with_rounded(true);
            let (q, r) = shift_right::<B>(coeff, &drop, remnant);
            coeff = q;
            remnant = r;
            exp += &drop;
        }

        if !remnant.is_exact() {
            flags = flags.with_inexact(true).with_rounded(true);
            let last = (&coeff % B).to_u32().unwrap_or(0);
            if ctx.rounding().requires_increment(neg, last, remnant, B) {
                coeff += 1u32;
                if prec > 0 && digit_length(&coeff, B) > prec {
                    // carried into a new digit: B^prec
                    coeff /= B;
                    exp += 1;
                }
            }
        }

        // overflow is judged after rounding
        if let Some((_, emax)) = ctx.exponent_range() {
            if !coeff.is_zero() && &exp + BigInt::from(digit_length(&coeff, B)) - 1 > *emax {
                ctx.raise(flags);
                return Self::signal_overflow(neg, ctx);
            }
        }

        if subnormal {
            flags = flags.with_subnormal(true);
            if flags.inexact() {
                flags = flags.with_underflow(true);
            }
            if coeff.is_zero() {
                flags = flags.with_clamped(true);
            }
        }

        // fold down exponents of normal values when clamping
        if ctx.clamp_normal_exponents() && !coeff.is_zero() {
            if let Some(etop) = ctx.etop() {
                if exp > etop {
                    coeff *= radix_power(B, &(&exp - &etop));
                    exp = etop;
                    flags = flags.with_clamped(true);
                }
            }
        }

        ctx.raise(flags);
        Self::finite(neg, coeff, exp)
    }

    // Moves the exponent of a zero into the representable range.
    fn clamp_zero(neg: bool, mut exp: BigInt, ctx: &mut Context) -> Self {
        if let (Some(etiny), Some((_, emax))) = (ctx.etiny(), ctx.exponent_range()) {
            let top = match ctx.etop() {
                Some(etop) if ctx.clamp_normal_exponents() => etop,
                _ => emax.clone(),
            };
            if exp < etiny {
                exp = etiny;
                ctx.raise(Flags::default().with_clamped(true));
            } else if exp > top {
                exp = top;
                ctx.raise(Flags::default().with_clamped(true));
            }
        }
        Self::finite(neg, BigInt::zero(), exp)
    }

    /// Returns the largest finite value of `ctx`, if it has one.
    pub fn largest_finite(neg: bool, ctx: &Context) -> Option<Self> {
        match (ctx.etop(), ctx.precision()) {
            (Some(_), 0) | (None, _) => None,
            (Some(etop), prec) => {
                let coeff = radix_power(B, &BigInt::from(prec)) - 1;
                Some(Self::finite(neg, coeff, etop))
            }
        }
    }

    /// Returns the result of an overflow under `ctx`, raising
    /// Overflow, Inexact, and Rounded.
    pub fn signal_overflow(neg: bool, ctx: &mut Context) -> Self {
        ctx.raise(
            Flags::default()
                .with_overflow(true)
                .with_inexact(true)
                .with_rounded(true),
        );
        if ctx.rounding().overflow_to_infinity(neg) {
            return Self::infinity(neg);
        }
        Self::largest_finite(neg, ctx).unwrap_or_else(|| Self::infinity(neg))
    }

    /// Rounds this `RadixFloat` to the precision and range of `ctx`.
    pub fn round(&self, ctx: &mut Context) -> Self {
        match &self.num {
            RadixNum::Number(s, exp, c) => {
                Self::round_finite(*s, c.clone(), exp.clone(), Remnant::Exact, ctx)
            }
            RadixNum::Infinity(_) => self.clone(),
            RadixNum::Nan(_, _, _) => Self::propagate_nan(&[self], ctx).unwrap_or_default(),
        }
    }
}

// Special values
impl<const B: u32> RadixFloat<B> {
    /// Returns the NaN an operation on `operands` produces, if any.
    /// A signaling NaN raises Invalid and is quieted.
    pub(crate) fn propagate_nan(operands: &[&Self], ctx: &mut Context) -> Option<Self> {
        if let Some(x) = operands.iter().find(|x| x.is_signaling() == Some(true)) {
            ctx.raise(Flags::default().with_invalid(true));
            return Some(Self::nan(x.sign(), false, x.nan_payload().cloned().unwrap_or_default()));
        }
        operands.iter().find(|x| x.is_nan()).map(|x| (*x).clone())
    }

    /// Raises Invalid and returns a quiet NaN.
    pub(crate) fn invalid(ctx: &mut Context) -> Self {
        ctx.raise(Flags::default().with_invalid(true));
        Self::nan(false, false, BigInt::zero())
    }
}

// Rescaling
impl<const B: u32> RadixFloat<B> {
    // Exact coefficient of this finite value at exponent `target`, rounded
    // by the mode of `ctx`. Also returns the remnant of the discarded digits.
    fn rescale(&self, target: &BigInt, ctx: &Context) -> (BigInt, Remnant) {
        let (neg, exp, c) = match &self.num {
            RadixNum::Number(s, exp, c) => (*s, exp, c),
            _ => panic!("rescaling a non-finite value"),
        };
        if target <= exp {
            return (c * radix_power(B, &(exp - target)), Remnant::Exact);
        }
        let (mut coeff, remnant) = shift_right::<B>(c.clone(), &(target - exp), Remnant::Exact);
        let last = (&coeff % B).to_u32().unwrap_or(0);
        if ctx.rounding().requires_increment(neg, last, remnant, B) {
            coeff += 1u32;
        }
        (coeff, remnant)
    }

    /// Rounds this `RadixFloat` to the exponent of `other`.
    /// The result is Invalid if it does not fit in `ctx`.
    pub fn quantize(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self, other], ctx) {
            return nan;
        }
        match (&self.num, &other.num) {
            (RadixNum::Infinity(_), RadixNum::Infinity(_)) => self.clone(),
            (RadixNum::Number(_, _, _), RadixNum::Number(_, target, _)) => {
                self.quantize_to(&target.clone(), ctx)
            }
            _ => Self::invalid(ctx),
        }
    }

    // Quantizes this finite value to exponent `target`.
    pub(crate) fn quantize_to(&self, target: &BigInt, ctx: &mut Context) -> Self {
        let (neg, exp, c) = match &self.num {
            RadixNum::Number(s, exp, c) => (*s, exp, c),
            _ => return Self::invalid(ctx),
        };
        if let (Some(etiny), Some((_, emax))) = (ctx.etiny(), ctx.exponent_range()) {
            if target > emax || *target < etiny {
                return Self::invalid(ctx);
            }
        }

        let (coeff, remnant) = self.rescale(target, ctx);
        let mut flags = Flags::default();
        if target > exp && !c.is_zero() {
            flags = flags.with_rounded(true);
        }
        if !remnant.is_exact() {
            flags = flags.with_inexact(true).with_rounded(true);
        }

        let prec = ctx.precision();
        let digits = digit_length(&coeff, B);
        if prec > 0 && digits > prec {
            return Self::invalid(ctx);
        }
        if !coeff.is_zero() {
            let adjusted = target + BigInt::from(digits) - 1;
            if let Some((emin, emax)) = ctx.exponent_range() {
                if adjusted > *emax {
                    return Self::invalid(ctx);
                }
                if adjusted < *emin {
                    flags = flags.with_subnormal(true);
                    if flags.inexact() {
                        flags = flags.with_underflow(true);
                    }
                }
            }
        }
        ctx.raise(flags);
        Self::finite(neg, coeff, target.clone())
    }

    /// Rounds this `RadixFloat` to exponent `target` if its exponent is
    /// smaller, raising Inexact and Rounded as needed; otherwise rounds
    /// to the precision of `ctx`.
    pub fn round_to_exponent_exact(&self, target: &BigInt, ctx: &mut Context) -> Self {
        match &self.num {
            RadixNum::Number(_, exp, _) if exp < target => {
                let mut pctx = ctx.with_blank_flags().with_precision(0);
                let rounded = self.quantize_to(target, &mut pctx);
                ctx.raise(pctx.flags());
                rounded
            }
            _ => self.round(ctx),
        }
    }

    /// Like `round_to_exponent_exact` but never raises Inexact or Rounded.
    pub fn round_to_exponent_no_rounded_flag(&self, target: &BigInt, ctx: &mut Context) -> Self {
        let mut pctx = ctx.with_blank_flags();
        let rounded = self.round_to_exponent_exact(target, &mut pctx);
        ctx.raise(pctx.flags().with_inexact(false).with_rounded(false));
        rounded
    }

    /// Rounds this `RadixFloat` to exponent `target` if its exponent is
    /// smaller. Larger exponents are left as they are.
    pub fn round_to_exponent_simple(&self, target: &BigInt, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self], ctx) {
            return nan;
        }
        match &self.num {
            RadixNum::Number(neg, exp, _) if exp < target => {
                let (coeff, remnant) = self.rescale(target, ctx);
                if !remnant.is_exact() {
                    ctx.raise(Flags::default().with_inexact(true).with_rounded(true));
                }
                Self::finite(*neg, coeff, target.clone())
            }
            _ => self.clone(),
        }
    }

    /// Rounds this `RadixFloat` to `ctx` and strips trailing zeros.
    pub fn reduce(&self, ctx: &mut Context) -> Self {
        let rounded = self.round(ctx);
        match rounded.num {
            RadixNum::Number(s, exp, c) => {
                let mut exp = AdaptiveInt::from(exp);
                let c = crate::util::reduce_trailing_zeros(c, &mut exp, B, None);
                Self::finite(s, c, exp.to_big())
            }
            _ => rounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rounding;

    fn dec(neg: bool, c: i64, e: i64) -> Decimal {
        Decimal::finite(neg, BigInt::from(c), BigInt::from(e))
    }

    #[test]
    fn rounds_to_precision() {
        let mut ctx = Context::for_precision(3).with_blank_flags();
        let r = dec(false, 12345, 0).round(&mut ctx);
        assert_eq!(r, dec(false, 123, 2));
        assert!(ctx.flags().inexact() && ctx.flags().rounded());

        let mut ctx = Context::for_precision(3).with_blank_flags();
        let r = dec(false, 99950, -2).round(&mut ctx);
        assert_eq!(r, dec(false, 100, 1));
    }

    #[test]
    fn zero_digits_dropped_are_rounded_only() {
        let mut ctx = Context::for_precision(2).with_blank_flags();
        let r = dec(false, 1200, 0).round(&mut ctx);
        assert_eq!(r, dec(false, 12, 2));
        assert!(ctx.flags().rounded() && !ctx.flags().inexact());
    }

    #[test]
    fn subnormal_and_overflow() {
        let mut ctx = Context::decimal32().with_blank_flags();
        let r = dec(false, 1234567, -104).round(&mut ctx);
        // Etiny is -101
        assert_eq!(r, dec(false, 1235, -101));
        assert!(ctx.flags().subnormal() && ctx.flags().underflow());

        let mut ctx = Context::decimal32().with_blank_flags();
        let r = dec(true, 1, 97).round(&mut ctx);
        assert!(r.is_infinity() && r.sign());
        assert!(ctx.flags().overflow() && ctx.flags().inexact());

        let mut ctx = Context::decimal32().with_rounding(Rounding::Down).with_blank_flags();
        let r = dec(false, 1, 97).round(&mut ctx);
        assert_eq!(r, dec(false, 9999999, 90));
    }

    #[test]
    fn clamps_normal_exponents() {
        let mut ctx = Context::decimal32().with_blank_flags();
        let r = dec(false, 1, 96).round(&mut ctx);
        assert_eq!(r, dec(false, 1000000, 90));
        assert!(ctx.flags().clamped());
    }

    #[test]
    fn quantize_rounds_and_checks_precision() {
        let mut ctx = Context::for_precision(5).with_blank_flags();
        let r = dec(false, 2175, -3).quantize(&dec(false, 1, -2), &mut ctx);
        assert_eq!(r, dec(false, 218, -2));
        assert!(ctx.flags().inexact());

        let mut ctx = Context::for_precision(3).with_blank_flags();
        let r = dec(false, 12345, 0).quantize(&dec(false, 1, -1), &mut ctx);
        assert!(r.is_nan() && ctx.flags().invalid());
    }
}
