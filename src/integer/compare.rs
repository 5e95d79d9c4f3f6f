/*
    Adaptive integer comparison
*/

use super::*;

impl AdaptiveInt {
    /// Compares this value with another adaptive integer.
    ///
    /// Values of the same mode compare directly. Otherwise, a native value
    /// is compared on the other side's terms, and a big integer on this side
    /// converts the other side to a big integer.
    pub fn compare_to(&self, other: &AdaptiveInt) -> Ordering {
        match (&self.repr, &other.repr) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            (Repr::Small(a), Repr::Buffered(m)) => m.compare_to_i32(*a).reverse(),
            (Repr::Small(a), Repr::Large(y)) => y.cmp(&BigInt::from(*a)).reverse(),
            (Repr::Buffered(m), Repr::Small(b)) => m.compare_to_i32(*b),
            (Repr::Buffered(m), Repr::Buffered(n)) => m.compare_to(n),
            (Repr::Buffered(m), Repr::Large(y)) => m.to_big().cmp(y),
            (Repr::Large(x), _) => x.cmp(&other.to_big()),
        }
    }

    /// Compares this value with an arbitrary-precision integer.
    pub fn compare_to_big(&self, other: &BigInt) -> Ordering {
        match &self.repr {
            Repr::Small(a) => other.cmp(&BigInt::from(*a)).reverse(),
            Repr::Buffered(m) => m.to_big().cmp(other),
            Repr::Large(x) => x.cmp(other),
        }
    }

    /// Compares this value with a native integer.
    pub fn compare_to_i32(&self, other: i32) -> Ordering {
        match &self.repr {
            Repr::Small(a) => a.cmp(&other),
            Repr::Buffered(m) => m.compare_to_i32(other),
            Repr::Large(x) => x.cmp(&BigInt::from(other)),
        }
    }
}

impl PartialEq for AdaptiveInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }
}

impl Eq for AdaptiveInt {}

impl PartialOrd for AdaptiveInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AdaptiveInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl PartialEq<i32> for AdaptiveInt {
    fn eq(&self, other: &i32) -> bool {
        self.compare_to_i32(*other) == Ordering::Equal
    }
}

impl PartialOrd<i32> for AdaptiveInt {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.compare_to_i32(*other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_modes_agree_with_big_integers() {
        let values = [
            AdaptiveInt::new(-7),
            AdaptiveInt::new(i32::MAX),
            AdaptiveInt::from_i64(1 << 35),
            AdaptiveInt::from_i64(-(1 << 35)),
            AdaptiveInt::from_big(&(BigInt::from(1) << 4096)),
        ];
        for a in values.iter() {
            for b in values.iter() {
                assert_eq!(
                    a.compare_to(b),
                    a.to_big().cmp(&b.to_big()),
                    "compare {} ({:?}) with {} ({:?})",
                    a,
                    a.mode(),
                    b,
                    b.mode()
                );
                assert_eq!(a.compare_to_big(&b.to_big()), a.to_big().cmp(&b.to_big()));
            }
        }
    }
}
