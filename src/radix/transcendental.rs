/*
    Square roots, powers, and transcendental functions

    Transcendental results are computed with MPFR at a working precision
    64 bits beyond the target precision and then rounded once more to
    the radix of the result.
*/

use std::f64::consts::LN_2;

use num_integer::Integer as _;
use rug::float::{Constant, Round};
use rug::integer::Order;
use rug::ops::{AddAssignRound, PowAssignRound};
use rug::{Float, Integer};

use super::division::strip_to_ideal;
use super::*;

/// Converts a `BigInt` into an MPFR-compatible integer.
pub(crate) fn to_rug_integer(val: &BigInt) -> Integer {
    let (sign, bytes) = val.to_bytes_le();
    let i = Integer::from_digits(&bytes, Order::Lsf);
    if sign == Sign::Minus {
        -i
    } else {
        i
    }
}

/// Converts an MPFR-compatible integer into a `BigInt`.
pub(crate) fn from_rug_integer(val: &Integer) -> BigInt {
    let sign = match val.cmp0() {
        Ordering::Less => Sign::Minus,
        Ordering::Equal => Sign::NoSign,
        Ordering::Greater => Sign::Plus,
    };
    BigInt::from_bytes_le(sign, &val.to_digits::<u8>(Order::Lsf))
}

impl<const B: u32> RadixFloat<B> {
    // Bits needed for `digits` radix digits, plus guard bits.
    fn working_bits(digits: u64) -> u32 {
        let bits = (digits as f64) * f64::from(B).log2();
        (bits.ceil().min(f64::from(u32::MAX / 4)) as u32) + 64
    }

    // Rounds this finite value into MPFR at `bits` of precision.
    pub(crate) fn to_mpfr(&self, bits: u32) -> Float {
        let (s, exp, c) = self.finite_parts();
        let mut f = Float::with_val(bits, to_rug_integer(c));
        if !exp.is_zero() {
            let mut scale = Float::with_val(bits, B);
            scale.pow_assign_round(&to_rug_integer(exp), Round::Nearest);
            f *= scale;
        }
        if s {
            -f
        } else {
            f
        }
    }

    // Rounds an MPFR result to `ctx`. `dir` tells how the MPFR value
    // compares to the true result.
    pub(crate) fn from_mpfr(f: &Float, dir: Ordering, ctx: &mut Context) -> Self {
        if f.is_nan() {
            return Self::invalid(ctx);
        }
        let neg = f.is_sign_negative();
        if f.is_infinite() {
            return Self::signal_overflow(neg, ctx);
        }
        let (m, k) = match f.to_integer_exp() {
            Some((m, k)) if !f.is_zero() => (from_rug_integer(&m).abs(), k),
            _ => {
                // underflowed in MPFR: far below anything representable
                let exp = match ctx.etiny() {
                    Some(etiny) => etiny - 1,
                    None => BigInt::from(i64::MIN),
                };
                return Self::round_finite(neg, BigInt::zero(), exp, Remnant::BelowHalf, ctx);
            }
        };

        // a few digits past the precision
        let bin_exp = f64::from(f.get_exp().unwrap_or(0));
        let t = (bin_exp * LN_2 / f64::from(B).ln()).floor() as i64 - ctx.precision() as i64 - 3;
        let mut num = m;
        let mut den = BigInt::one();
        if k >= 0 {
            num <<= k as usize;
        } else {
            den <<= k.unsigned_abs() as usize;
        }
        if t >= 0 {
            den *= radix_power(B, &BigInt::from(t));
        } else {
            num *= radix_power(B, &BigInt::from(-t));
        }

        let (mut q, r) = num.div_rem(&den);
        let mut remnant = Remnant::from_ratio(&r, &den);
        if dir != Ordering::Equal {
            // magnitude computed below the true magnitude
            let below = (dir == Ordering::Less) != neg;
            remnant = match remnant {
                Remnant::Exact if below => Remnant::BelowHalf,
                Remnant::Exact => {
                    q -= 1u32;
                    Remnant::AboveHalf
                }
                Remnant::Half if below => Remnant::AboveHalf,
                Remnant::Half => Remnant::BelowHalf,
                other => other,
            };
        }
        Self::round_finite(neg, q, BigInt::from(t), remnant, ctx)
    }

    // Whether this finite value is an integer; if so, whether it is odd
    // and its value when small enough to materialize.
    fn integer_parts(&self) -> Option<(bool, Option<BigInt>)> {
        let (s, exp, c) = self.parts()?;
        if c.is_zero() {
            return Some((false, Some(BigInt::zero())));
        }
        let signed = |v: BigInt| if s { -v } else { v };
        if !exp.is_negative() {
            if *exp > BigInt::from(64) {
                return Some((B % 2 == 1 && c.is_odd(), None));
            }
            let v = c * radix_power(B, exp);
            return Some((v.is_odd(), Some(signed(v))));
        }
        let shift = -exp;
        if shift > BigInt::from(digit_length(c, B)) {
            return None;
        }
        let (q, r) = c.div_rem(&radix_power(B, &shift));
        if !r.is_zero() {
            return None;
        }
        Some((q.is_odd(), Some(signed(q))))
    }

    // Computes `self^n` exactly before a single rounding, if the exact
    // power is small enough.
    fn integer_pow(&self, n: &BigInt, ctx: &mut Context) -> Option<Self> {
        let (s, exp, c) = self.finite_parts();
        let m = n.abs().to_u32()?;
        let prec = ctx.precision();
        let limit = if prec == 0 { 100_000 } else { (4 * prec).max(10_000) };
        if digit_length(c, B).checked_mul(u64::from(m))? > limit {
            return None;
        }

        let neg = s && m % 2 == 1;
        let pc = c.pow(m);
        let pe = exp * BigInt::from(m);
        if n.is_negative() {
            Some(Self::from(1).div(&Self::finite(neg, pc, pe), ctx))
        } else {
            Some(Self::round_finite(neg, pc, pe, Remnant::Exact, ctx))
        }
    }

    /// Computes `self^other` rounded to `ctx`.
    ///
    /// Integer powers are exact before rounding; other powers are
    /// evaluated with MPFR and need a precision limit.
    pub fn pow(&self, other: &Self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self, other], ctx) {
            return nan;
        }
        let int = other.integer_parts();
        let odd = matches!(int, Some((true, _)));
        let neg = self.sign() && odd;
        if self.sign() && !self.is_zero() && int.is_none() {
            return Self::invalid(ctx);
        }

        if self.is_infinity() {
            return if other.is_zero() {
                Self::from(1)
            } else if other.sign() {
                Self::zero(neg)
            } else {
                Self::infinity(neg)
            };
        }
        if other.is_infinity() {
            return match (self.cmp_magnitude(&Self::from(1)), other.sign()) {
                (Ordering::Equal, _) => {
                    ctx.raise(Flags::default().with_inexact(true).with_rounded(true));
                    Self::from(1).round(ctx)
                }
                (Ordering::Greater, false) | (Ordering::Less, true) => Self::infinity(false),
                _ => Self::zero(false),
            };
        }
        if self.is_zero() {
            return if other.is_zero() {
                Self::invalid(ctx)
            } else if other.sign() {
                Self::infinity(neg)
            } else {
                Self::zero(neg)
            };
        }
        if other.is_zero() {
            return Self::from(1).round(ctx);
        }

        if let Some((_, Some(n))) = &int {
            if let Some(r) = self.integer_pow(n, ctx) {
                return r;
            }
        }
        let prec = ctx.precision();
        if prec == 0 {
            return Self::invalid(ctx);
        }

        let (_, _, c) = self.finite_parts();
        let y_digits = other.adjusted_exponent().and_then(|a| a.to_u64()).unwrap_or(0);
        let bits = Self::working_bits(prec.max(digit_length(c, B)) + y_digits);
        let mut f = self.with_sign(false).to_mpfr(bits);
        let dir = f.pow_assign_round(&other.to_mpfr(bits), Round::Nearest);
        if neg {
            f = -f;
            return Self::from_mpfr(&f, dir.reverse(), ctx);
        }
        Self::from_mpfr(&f, dir, ctx)
    }

    /// Computes the square root of `self` rounded to `ctx`.
    ///
    /// The ideal exponent is half the exponent of `self`, rounded down.
    /// Without a precision limit, inexact roots are Invalid.
    pub fn sqrt(&self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self], ctx) {
            return nan;
        }
        let (s, exp, c) = match &self.num {
            RadixNum::Infinity(false) => return self.clone(),
            RadixNum::Number(s, exp, c) => (*s, exp, c),
            _ => return Self::invalid(ctx),
        };
        let ideal = exp.div_floor(&BigInt::from(2));
        if c.is_zero() {
            return Self::round_finite(s, BigInt::zero(), ideal, Remnant::Exact, ctx);
        }
        if s {
            return Self::invalid(ctx);
        }

        // scale to an even exponent with room for the precision
        let prec = ctx.precision();
        let digits = digit_length(c, B);
        let mut shift = (2 * (prec + 1)).saturating_sub(digits);
        if (exp - BigInt::from(shift)).is_odd() {
            shift += 1;
        }
        let n = c * radix_power(B, &BigInt::from(shift));
        let root = n.sqrt();
        let rem = &n - &root * &root;
        let rexp = (exp - BigInt::from(shift)) / 2;

        if rem.is_zero() {
            let (root, rexp) = strip_to_ideal::<B>(root, rexp, &ideal);
            return Self::round_finite(false, root, rexp, Remnant::Exact, ctx);
        }
        if prec == 0 {
            return Self::invalid(ctx);
        }
        // (root + 1/2)^2 = root^2 + root + 1/4
        let remnant = if rem <= root {
            Remnant::BelowHalf
        } else {
            Remnant::AboveHalf
        };
        Self::round_finite(false, root, rexp, remnant, ctx)
    }

    /// Computes the natural logarithm of `self` rounded to `ctx`.
    pub fn ln(&self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self], ctx) {
            return nan;
        }
        let (exp, c) = match &self.num {
            RadixNum::Infinity(false) => return self.clone(),
            RadixNum::Number(_, _, c) if c.is_zero() => return Self::infinity(true),
            RadixNum::Number(false, exp, c) => (exp, c),
            _ => return Self::invalid(ctx),
        };
        if c.is_one() && exp.is_zero() {
            return Self::zero(false);
        }
        let prec = ctx.precision();
        if prec == 0 {
            return Self::invalid(ctx);
        }

        let digits = digit_length(c, B);
        let bits = Self::working_bits(prec.max(digits));
        let adjusted: BigInt = exp + BigInt::from(digits) - 1;
        if adjusted.is_zero() || adjusted == BigInt::from(-1) {
            // near 1: evaluate directly to avoid cancellation
            let mut f = self.to_mpfr(bits);
            let dir = f.ln_round(Round::Nearest);
            return Self::from_mpfr(&f, dir, ctx);
        }

        // ln(m) + adjusted * ln(B) with 1 <= m < B
        let mut f = Self::finite(false, c.clone(), BigInt::from(1) - BigInt::from(digits)).to_mpfr(bits);
        let ln_dir = f.ln_round(Round::Nearest);
        let mut scaled = Float::with_val(bits, B);
        let radix_dir = scaled.ln_round(Round::Nearest);
        scaled *= Float::with_val(bits, to_rug_integer(&adjusted));
        let dir = match f.add_assign_round(&scaled, Round::Nearest) {
            // the sum landed on a float; fall back to the error of a term
            Ordering::Equal if ln_dir != Ordering::Equal => ln_dir,
            Ordering::Equal => radix_dir,
            dir => dir,
        };
        Self::from_mpfr(&f, dir, ctx)
    }

    /// Computes `e^self` rounded to `ctx`.
    pub fn exp(&self, ctx: &mut Context) -> Self {
        if let Some(nan) = Self::propagate_nan(&[self], ctx) {
            return nan;
        }
        let (s, c) = match &self.num {
            RadixNum::Infinity(false) => return self.clone(),
            RadixNum::Infinity(true) => return Self::zero(false),
            RadixNum::Number(s, _, c) => (*s, c),
            RadixNum::Nan(_, _, _) => return Self::invalid(ctx),
        };
        if c.is_zero() {
            return Self::from(1);
        }
        let prec = ctx.precision();
        if prec == 0 {
            return Self::invalid(ctx);
        }

        let adjusted = self.adjusted_exponent().unwrap_or_default();
        if adjusted > BigInt::from(40) {
            if s {
                return Self::from_mpfr(&Float::new(64), Ordering::Less, ctx);
            }
            return Self::signal_overflow(false, ctx);
        }
        if adjusted < -BigInt::from(prec + 3) {
            // 1 + self lies strictly inside the last guard digit
            let scale = BigInt::from(prec + 2);
            let one = radix_power(B, &scale);
            return if s {
                Self::round_finite(false, one - 1u32, -scale, Remnant::AboveHalf, ctx)
            } else {
                Self::round_finite(false, one, -scale, Remnant::BelowHalf, ctx)
            };
        }

        let magnitude = adjusted.to_u64().unwrap_or(0);
        let bits = Self::working_bits(prec.max(digit_length(c, B)) + magnitude);
        let mut f = self.to_mpfr(bits);
        let dir = f.exp_round(Round::Nearest);
        Self::from_mpfr(&f, dir, ctx)
    }

    /// Returns pi rounded to `ctx`.
    /// Without a precision limit the result is Invalid.
    pub fn pi(ctx: &mut Context) -> Self {
        let prec = ctx.precision();
        if prec == 0 {
            return Self::invalid(ctx);
        }
        let (f, dir) = Float::with_val_round(Self::working_bits(prec), Constant::Pi, Round::Nearest);
        Self::from_mpfr(&f, dir, ctx)
    }
}
