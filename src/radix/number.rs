/*
    Constructors, getters, and comparison
*/

use super::*;

// Format parameters
impl<const B: u32> RadixFloat<B> {
    /// Returns the radix of this `RadixFloat`.
    #[inline(always)]
    pub const fn radix() -> u32 {
        B
    }
}

// Constructors and getters
impl<const B: u32> RadixFloat<B> {
    /// Creates a finite value `(-1)^sign * coefficient * B^exponent`.
    /// The sign of `coefficient` is ignored.
    pub fn finite(sign: bool, coefficient: BigInt, exponent: BigInt) -> Self {
        assert_valid_radix!(B);
        let coefficient = if coefficient.is_negative() {
            -coefficient
        } else {
            coefficient
        };
        Self {
            num: RadixNum::Number(sign, exponent, coefficient),
        }
    }

    /// Returns a zero with a particular sign and exponent 0.
    pub fn zero(sign: bool) -> Self {
        Self::finite(sign, BigInt::zero(), BigInt::zero())
    }

    /// Returns an infinity with a particular sign.
    pub fn infinity(sign: bool) -> Self {
        assert_valid_radix!(B);
        Self {
            num: RadixNum::Infinity(sign),
        }
    }

    /// Returns a NaN value based on the specified sign, signaling status,
    /// and payload. The sign of `payload` is ignored.
    pub fn nan(sign: bool, signaling: bool, payload: BigInt) -> Self {
        assert_valid_radix!(B);
        Self {
            num: RadixNum::Nan(sign, signaling, payload.abs()),
        }
    }

    /// Returns the sign of this `RadixFloat`.
    pub fn sign(&self) -> bool {
        match self.num {
            RadixNum::Number(s, _, _) => s,
            RadixNum::Infinity(s) => s,
            RadixNum::Nan(s, _, _) => s,
        }
    }

    /// Returns the exponent of this `RadixFloat`.
    /// The result is wrapped in an option since only finite
    /// numbers have a valid exponent.
    pub fn exponent(&self) -> Option<&BigInt> {
        match &self.num {
            RadixNum::Number(_, exp, _) => Some(exp),
            _ => None,
        }
    }

    /// Returns the coefficient of this `RadixFloat`.
    /// The result is wrapped in an option since only finite
    /// numbers have a coefficient.
    pub fn coefficient(&self) -> Option<&BigInt> {
        match &self.num {
            RadixNum::Number(_, _, c) => Some(c),
            _ => None,
        }
    }

    /// Returns the exponent of the most significant digit,
    /// `exponent + digits - 1`, for finite values.
    pub fn adjusted_exponent(&self) -> Option<BigInt> {
        match &self.num {
            RadixNum::Number(_, exp, c) => Some(exp + BigInt::from(digit_length(c, B)) - 1),
            _ => None,
        }
    }

    /// Returns true if this `RadixFloat` encodes a zero.
    pub fn is_zero(&self) -> bool {
        matches!(&self.num, RadixNum::Number(_, _, c) if c.is_zero())
    }

    /// Returns true if this `RadixFloat` encodes a finite number.
    pub fn is_finite(&self) -> bool {
        matches!(self.num, RadixNum::Number(_, _, _))
    }

    /// Returns true if this `RadixFloat` encodes an infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self.num, RadixNum::Infinity(_))
    }

    /// Returns true if this `RadixFloat` encodes a NaN.
    pub fn is_nan(&self) -> bool {
        matches!(self.num, RadixNum::Nan(_, _, _))
    }

    /// Returns true if this `RadixFloat` encodes a signaling NaN.
    /// The result is wrapped in an option since only NaNs
    /// can be signaling.
    pub fn is_signaling(&self) -> Option<bool> {
        match self.num {
            RadixNum::Nan(_, signal, _) => Some(signal),
            _ => None,
        }
    }

    /// Returns the NaN payload of this `RadixFloat`.
    /// The result is wrapped in an option since only a NaN
    /// has a payload.
    pub fn nan_payload(&self) -> Option<&BigInt> {
        match &self.num {
            RadixNum::Nan(_, _, payload) => Some(payload),
            _ => None,
        }
    }

    /// Returns a copy with the sign replaced.
    pub(crate) fn with_sign(&self, sign: bool) -> Self {
        let num = match &self.num {
            RadixNum::Number(_, exp, c) => RadixNum::Number(sign, exp.clone(), c.clone()),
            RadixNum::Infinity(_) => RadixNum::Infinity(sign),
            RadixNum::Nan(_, signal, payload) => RadixNum::Nan(sign, *signal, payload.clone()),
        };
        Self { num }
    }
}

// Comparison
impl<const B: u32> RadixFloat<B> {
    /// Compares the magnitudes of two finite values.
    pub(crate) fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (&self.num, &other.num) {
            (RadixNum::Number(_, e1, c1), RadixNum::Number(_, e2, c2)) => {
                match (c1.is_zero(), c2.is_zero()) {
                    (true, true) => return Ordering::Equal,
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    (false, false) => {}
                }
                let adj1 = e1 + BigInt::from(digit_length(c1, B));
                let adj2 = e2 + BigInt::from(digit_length(c2, B));
                adj1.cmp(&adj2).then_with(|| {
                    // same number of integer digits: align and compare
                    if e1 >= e2 {
                        (c1 * radix_power(B, &(e1 - e2))).cmp(c2)
                    } else {
                        c1.cmp(&(c2 * radix_power(B, &(e2 - e1))))
                    }
                })
            }
            (RadixNum::Infinity(_), RadixNum::Infinity(_)) => Ordering::Equal,
            (RadixNum::Infinity(_), _) => Ordering::Greater,
            (_, RadixNum::Infinity(_)) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }

    /// Numeric comparison. Zeros of either sign are equal;
    /// NaNs compare equal to each other and above everything else.
    pub fn cmp_numeric(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
        if self.is_zero() && other.is_zero() {
            return Ordering::Equal;
        }
        let s1 = self.sign() && !self.is_zero();
        let s2 = other.sign() && !other.is_zero();
        match (s1, s2) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl<const B: u32> Default for RadixFloat<B> {
    fn default() -> Self {
        Self::zero(false)
    }
}

impl<const B: u32> From<i64> for RadixFloat<B> {
    fn from(val: i64) -> Self {
        Self::finite(val < 0, BigInt::from(val), BigInt::zero())
    }
}

impl<const B: u32> From<i32> for RadixFloat<B> {
    fn from(val: i32) -> Self {
        Self::from(i64::from(val))
    }
}
