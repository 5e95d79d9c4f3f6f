/*
    Conversions to and from native floating-point numbers
*/

use num_traits::Float as _;
use rug::{Float, Rational};
use tracing::warn;

use super::transcendental::to_rug_integer;
use super::*;

impl<const B: u32> RadixFloat<B> {
    /// Returns the `f64` nearest to this `RadixFloat`.
    pub fn to_f64(&self) -> f64 {
        let (s, exp, c) = match &self.num {
            RadixNum::Number(s, exp, c) => (*s, exp, c),
            RadixNum::Infinity(s) => return if *s { f64::NEG_INFINITY } else { f64::INFINITY },
            RadixNum::Nan(_, _, _) => return f64::NAN,
        };
        let signed = |x: f64| if s { -x } else { x };
        if c.is_zero() {
            return signed(0.0);
        }

        // far outside the range of f64
        let adjusted = self.adjusted_exponent().unwrap_or_default();
        let log2 = adjusted.to_f64().unwrap_or(f64::NAN) * f64::from(B).log2();
        if log2 > 1100.0 {
            return signed(f64::INFINITY);
        }
        if log2 < -1200.0 {
            return signed(0.0);
        }

        let num = to_rug_integer(c);
        let q = if exp.is_negative() {
            Rational::from((num, to_rug_integer(&radix_power(B, &-exp))))
        } else {
            Rational::from(num * to_rug_integer(&radix_power(B, exp)))
        };
        signed(Float::with_val(53, &q).to_f64())
    }
}

impl From<f64> for Binary {
    /// Exact conversion of an `f64`.
    fn from(val: f64) -> Self {
        if val.is_nan() {
            return Self::nan(val.is_sign_negative(), false, BigInt::zero());
        }
        if val.is_infinite() {
            return Self::infinity(val.is_sign_negative());
        }
        let (mant, exp, _) = val.integer_decode();
        Self::finite(
            val.is_sign_negative(),
            BigInt::from(mant),
            BigInt::from(exp),
        )
    }
}

/// Splits `value` into a high `f32` and a low `f32` residual.
///
/// Both halves are single precision, so `high + low` carries about
/// 48 significant bits of `value`.
///
/// `high` is `value` rounded to the nearest `f64` and then to `f32`;
/// `low` is what `high` misses of that `f64`. Infinities yield a zero
/// residual and NaNs yield NaN in both halves. A nonzero value too small
/// for either half logs a warning.
pub fn to_hi_lo_pair<const B: u32>(value: &RadixFloat<B>) -> (f32, f32) {
    let d = value.to_f64();
    if d.is_nan() {
        return (f32::NAN, f32::NAN);
    }
    let hi = d as f32;
    if hi.is_infinite() {
        return (hi, 0.0);
    }
    let lo = (d - f64::from(hi)) as f32;
    if hi == 0.0 && lo == 0.0 && !value.is_zero() {
        warn!(value = ?value, "value underflowed to 0 when split into a pair of f32");
    }
    (hi, lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_double() {
        let tenth = Decimal::finite(false, BigInt::from(1), BigInt::from(-1));
        assert_eq!(tenth.to_f64(), 0.1);
        let third = Decimal::finite(true, BigInt::from(333333333333333333i64), BigInt::from(-18));
        assert_eq!(third.to_f64(), -0.333333333333333333);
        assert_eq!(Binary::from(0.1).to_f64(), 0.1);
        let huge = Decimal::finite(false, BigInt::from(1), BigInt::from(400));
        assert_eq!(huge.to_f64(), f64::INFINITY);
    }

    #[test]
    fn splits_into_high_and_low() {
        let tenth = Decimal::finite(false, BigInt::from(1), BigInt::from(-1));
        let (hi, lo) = to_hi_lo_pair(&tenth);
        assert_eq!(hi, 0.1f32);
        assert!((f64::from(hi) + f64::from(lo) - 0.1).abs() < 1e-15);

        let tiny = Decimal::finite(false, BigInt::from(1), BigInt::from(-100));
        assert_eq!(to_hi_lo_pair(&tiny), (0.0, 0.0));
        assert_eq!(to_hi_lo_pair(&Decimal::infinity(true)), (f32::NEG_INFINITY, 0.0));
        let (hi, lo) = to_hi_lo_pair(&Decimal::nan(false, false, BigInt::zero()));
        assert!(hi.is_nan() && lo.is_nan());
    }
}
