/*
    Adaptive integer arithmetic
*/

use super::*;

// Magnitude of `i32::MIN` as a big integer.
fn negated_i32_min() -> BigInt {
    BigInt::from(NEGATED_I32_MIN)
}

impl AdaptiveInt {
    /// Replaces this value with `val` in native mode.
    pub fn set_i32(&mut self, val: i32) -> &mut Self {
        self.check_mutable();
        self.repr = Repr::Small(val);
        self
    }

    /// Replaces this value with its absolute value.
    pub fn abs(&mut self) -> &mut Self {
        self.check_mutable();
        match self.repr {
            Repr::Small(v) if v != i32::MIN => {
                self.repr = Repr::Small(v.abs());
                self
            }
            Repr::Small(_) => self.negate(),
            _ if self.sign() < 0 => self.negate(),
            _ => self,
        }
    }

    /// Negates this value.
    ///
    /// Negating `i32::MIN` moves to a buffer holding 2^31;
    /// any other non-native value moves to a big integer.
    pub fn negate(&mut self) -> &mut Self {
        self.check_mutable();
        let next = match &mut self.repr {
            Repr::Small(v) if *v == i32::MIN => {
                Repr::Buffered(WordBuffer::from_big(&negated_i32_min()))
            }
            Repr::Small(v) => Repr::Small(-*v),
            Repr::Buffered(m) => Repr::Large(-m.to_big()),
            Repr::Large(x) => Repr::Large(-std::mem::take(x)),
        };
        self.repr = next;
        self
    }

    /// Multiplies this value by `val`.
    pub fn multiply(&mut self, val: i32) -> &mut Self {
        self.check_mutable();
        if val == 0 {
            self.repr = Repr::Small(0);
            return self;
        }

        match &mut self.repr {
            Repr::Small(v) => {
                let product = i64::from(*v) * i64::from(val);
                if let Ok(p) = i32::try_from(product) {
                    *v = p;
                } else if *v > 0 && val > 0 {
                    // nonnegative overflow stays unsigned
                    self.repr = Repr::Buffered(WordBuffer::from_i64(product));
                } else {
                    self.repr = Repr::Large(BigInt::from(product));
                }
            }
            Repr::Buffered(m) if val > 0 => {
                m.multiply(val as u32);
            }
            Repr::Buffered(m) => {
                let product = m.to_big() * val;
                self.repr = Repr::Large(product);
            }
            Repr::Large(x) => *x *= val,
        }
        self
    }

    /// Adds `val` to this value.
    pub fn add_i32(&mut self, val: i32) -> &mut Self {
        self.check_mutable();
        match &mut self.repr {
            Repr::Small(v) => match v.checked_add(val) {
                Some(sum) => *v = sum,
                None if val >= 0 => {
                    let mut buf = WordBuffer::from_i32(*v);
                    buf.add(val as u32);
                    self.repr = Repr::Buffered(buf);
                }
                None => {
                    let sum = BigInt::from(*v) + val;
                    self.repr = Repr::Large(sum);
                }
            },
            Repr::Buffered(m) if val >= 0 => {
                m.add(val as u32);
            }
            Repr::Buffered(m) => {
                let sum = m.to_big() + val;
                self.repr = Repr::Large(sum);
            }
            Repr::Large(x) => *x += val,
        }
        self
    }

    /// Subtracts `val` from this value.
    pub fn subtract_i32(&mut self, val: i32) -> &mut Self {
        self.check_mutable();
        if val == i32::MIN {
            return self.add_big(&negated_i32_min());
        }
        if let Repr::Small(v) = &mut self.repr {
            match v.checked_sub(val) {
                Some(diff) => *v = diff,
                None => {
                    let diff = BigInt::from(*v) - val;
                    self.repr = Repr::Large(diff);
                }
            }
            return self;
        }
        self.add_i32(-val)
    }

    /// Adds another adaptive integer to this value.
    pub fn add(&mut self, val: &AdaptiveInt) -> &mut Self {
        self.check_mutable();
        match (&mut self.repr, &val.repr) {
            (Repr::Small(_), Repr::Small(w)) => return self.add_i32(*w),
            (Repr::Small(v), _) => {
                let sum = BigInt::from(*v) + val.to_big();
                self.repr = Repr::Large(sum);
            }
            (Repr::Buffered(m), Repr::Small(w)) if *w >= 0 => {
                m.add(*w as u32);
            }
            (Repr::Buffered(m), _) => {
                let sum = m.to_big() + val.to_big();
                self.repr = Repr::Large(sum);
            }
            (Repr::Large(x), _) => *x += val.to_big(),
        }
        self
    }

    /// Subtracts another adaptive integer from this value.
    ///
    /// A buffered value stays buffered only when the result is known to be
    /// nonnegative.
    pub fn subtract(&mut self, val: &AdaptiveInt) -> &mut Self {
        self.check_mutable();
        match (&mut self.repr, &val.repr) {
            (Repr::Small(v), Repr::Small(w)) => match v.checked_sub(*w) {
                Some(diff) => *v = diff,
                None => {
                    let diff = BigInt::from(*v) - *w;
                    self.repr = Repr::Large(diff);
                }
            },
            (Repr::Small(v), _) => {
                let diff = BigInt::from(*v) - val.to_big();
                self.repr = Repr::Large(diff);
            }
            (Repr::Buffered(m), Repr::Buffered(n)) if m.compare_to(n) != Ordering::Less => {
                m.subtract_buffer(n);
            }
            (Repr::Buffered(m), Repr::Small(w))
                if *w >= 0 && m.compare_to_i32(*w) != Ordering::Less =>
            {
                m.subtract(*w as u32);
            }
            (Repr::Buffered(m), _) => {
                let diff = m.to_big() - val.to_big();
                self.repr = Repr::Large(diff);
            }
            (Repr::Large(x), _) => *x -= val.to_big(),
        }
        self
    }

    /// Adds an arbitrary-precision integer to this value.
    pub fn add_big(&mut self, val: &BigInt) -> &mut Self {
        self.check_mutable();
        match &mut self.repr {
            Repr::Small(_) => match val.to_i32() {
                Some(v) => return self.add_i32(v),
                None => return self.add(&AdaptiveInt::from_big(val)),
            },
            Repr::Buffered(m) => {
                let sum = m.to_big() + val;
                self.repr = Repr::Large(sum);
            }
            Repr::Large(x) => *x += val,
        }
        self
    }

    /// Subtracts an arbitrary-precision integer from this value.
    pub fn subtract_big(&mut self, val: &BigInt) -> &mut Self {
        self.check_mutable();
        if let Repr::Large(x) = &mut self.repr {
            *x -= val;
            return self;
        }
        if val.is_zero() {
            return self;
        }
        // Anything in (i32::MIN, i32::MAX] negates natively
        match val.to_i32() {
            Some(v) if v > i32::MIN && v < 0 => self.add_i32(-v),
            Some(v) if v > 0 => self.subtract_i32(v),
            _ => self.add_big(&-val),
        }
    }

    /// Adds `val` to this value.
    pub fn add_i64(&mut self, val: i64) -> &mut Self {
        match i32::try_from(val) {
            Ok(v) => self.add_i32(v),
            Err(_) => self.add_big(&BigInt::from(val)),
        }
    }

    /// Subtracts `val` from this value.
    pub fn subtract_i64(&mut self, val: i64) -> &mut Self {
        match i32::try_from(val) {
            Ok(v) => self.subtract_i32(v),
            Err(_) => self.subtract_big(&BigInt::from(val)),
        }
    }

    /// Adds one to this value.
    pub fn increment(&mut self) -> &mut Self {
        self.check_mutable();
        match &mut self.repr {
            Repr::Small(v) if *v != i32::MAX => {
                *v += 1;
                self
            }
            Repr::Small(_) => {
                self.repr = Repr::Buffered(WordBuffer::from_big(&negated_i32_min()));
                self
            }
            _ => self.add_i32(1),
        }
    }

    /// Subtracts one from this value.
    ///
    /// Decrementing `i32::MIN` moves to a big integer since
    /// the result is negative.
    pub fn decrement(&mut self) -> &mut Self {
        self.check_mutable();
        match &mut self.repr {
            Repr::Small(v) if *v != i32::MIN => {
                *v -= 1;
                self
            }
            Repr::Small(_) => {
                self.repr = Repr::Large(BigInt::from(i32::MIN) - 1);
                self
            }
            _ => self.subtract_i32(1),
        }
    }

    /// Replaces this value with the remainder of truncating division
    /// by `divisor`. The result is always native.
    /// Panics if `divisor` is zero.
    pub fn remainder(&mut self, divisor: i32) -> &mut Self {
        self.check_mutable();
        assert!(divisor != 0, "attempted remainder by zero");
        let rem = match &self.repr {
            Repr::Small(v) => v.wrapping_rem(divisor),
            Repr::Buffered(m) => rem_to_i32(&m.to_big(), divisor),
            Repr::Large(x) => rem_to_i32(x, divisor),
        };
        self.repr = Repr::Small(rem);
        self
    }

    /// Replaces this value with the truncated quotient of division
    /// by `divisor`.
    /// Panics if `divisor` is zero.
    pub fn divide(&mut self, divisor: i32) -> &mut Self {
        self.check_mutable();
        assert!(divisor != 0, "attempted division by zero");
        let quotient = match &self.repr {
            Repr::Small(v) if divisor == -1 && *v == i32::MIN => {
                Repr::Buffered(WordBuffer::from_big(&negated_i32_min()))
            }
            Repr::Small(v) => Repr::Small(v / divisor),
            Repr::Buffered(m) => collapse_zero(m.to_big() / divisor),
            Repr::Large(x) => collapse_zero(x / divisor),
        };
        self.repr = quotient;
        self
    }
}

// Truncating remainder of `x` by a native divisor. Always fits an `i32`.
fn rem_to_i32(x: &BigInt, divisor: i32) -> i32 {
    let rem = x % divisor;
    rem.to_i32()
        .unwrap_or_else(|| unreachable!("remainder by an i32 divisor fits an i32"))
}

// Quotients of non-native values stay big unless they vanish.
fn collapse_zero(x: BigInt) -> Repr {
    if x.is_zero() {
        Repr::Small(0)
    } else {
        Repr::Large(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_min_is_buffered() {
        let mut a = AdaptiveInt::new(i32::MIN);
        a.negate();
        assert_eq!(a.mode(), Mode::Buffered);
        assert_eq!(a.to_big(), BigInt::from(2147483648i64));
        a.negate();
        assert_eq!(a.mode(), Mode::Large);
        assert_eq!(a.to_i32(), i32::MIN);
    }

    #[test]
    fn negative_overflow_goes_large() {
        let mut a = AdaptiveInt::new(-2_000_000_000);
        a.add_i32(-2_000_000_000);
        assert_eq!(a.mode(), Mode::Large);
        assert_eq!(a.to_i64(), -4_000_000_000);

        let mut b = AdaptiveInt::new(-70_000);
        b.multiply(70_000);
        assert_eq!(b.mode(), Mode::Large);
        assert_eq!(b.to_i64(), -4_900_000_000);
    }

    #[test]
    fn buffered_subtract_stays_buffered_when_nonnegative() {
        let mut a = AdaptiveInt::from_i64(1 << 33);
        assert_eq!(a.mode(), Mode::Buffered);
        let mut b = AdaptiveInt::new(i32::MAX);
        b.increment();
        b.multiply(4);
        assert_eq!(b.mode(), Mode::Buffered);
        b.subtract(&AdaptiveInt::new(5));
        assert_eq!(b.mode(), Mode::Buffered);
        assert_eq!(b.to_i64(), (1 << 33) - 5);
        b.subtract(&AdaptiveInt::new(-5));
        assert_eq!(b.mode(), Mode::Large);
        a.subtract_i32(0);
        assert_eq!(b.compare_to(&a), Ordering::Equal);
    }

    #[test]
    fn decrement_min_goes_large() {
        let mut a = AdaptiveInt::new(i32::MIN);
        a.decrement();
        assert_eq!(a.mode(), Mode::Large);
        assert_eq!(a.to_i64(), i64::from(i32::MIN) - 1);
    }

    #[test]
    fn min_remainder_and_division_by_minus_one() {
        let mut a = AdaptiveInt::new(i32::MIN);
        a.remainder(-1);
        assert_eq!(a.to_i32(), 0);

        let mut b = AdaptiveInt::new(i32::MIN);
        b.divide(-1);
        assert_eq!(b.to_i64(), 1 << 31);
    }

    #[test]
    fn subtract_big_min() {
        let mut a = AdaptiveInt::new(0);
        a.subtract_big(&BigInt::from(i32::MIN));
        assert_eq!(a.to_i64(), 1 << 31);
        a.subtract_i64(1 << 40);
        assert_eq!(a.to_i64(), (1 << 31) - (1 << 40));
    }
}
