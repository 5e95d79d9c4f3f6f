/*
    Rounding decisions
*/

use super::*;

/// Position of discarded digits relative to half a unit
/// in the last kept place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Remnant {
    Exact,
    BelowHalf,
    Half,
    AboveHalf,
}

impl Remnant {
    /// Returns the remnant of a division with remainder `rem` by `divisor`.
    pub fn from_ratio(rem: &BigInt, divisor: &BigInt) -> Self {
        if rem == &BigInt::from(0) {
            return Remnant::Exact;
        }
        let twice: BigInt = rem * 2;
        match twice.cmp(divisor) {
            std::cmp::Ordering::Less => Remnant::BelowHalf,
            std::cmp::Ordering::Equal => Remnant::Half,
            std::cmp::Ordering::Greater => Remnant::AboveHalf,
        }
    }

    /// Combines the remnant of the digits dropped in one shift with
    /// the remnant `below` of digits dropped earlier, further right.
    ///
    /// `dropped` is the value of the digits just removed and `divisor`
    /// the radix power they were removed by.
    pub fn shift(dropped: &BigInt, divisor: &BigInt, below: Remnant) -> Self {
        match Self::from_ratio(dropped, divisor) {
            Remnant::Exact if below != Remnant::Exact => Remnant::BelowHalf,
            Remnant::Half if below != Remnant::Exact => Remnant::AboveHalf,
            r => r,
        }
    }

    /// Returns true if nothing was discarded.
    pub fn is_exact(&self) -> bool {
        *self == Remnant::Exact
    }
}

impl Rounding {
    /// Translates a `Rounding` and sign to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies tie-breaking behavior.
    pub fn direction(&self, negative: bool) -> (bool, RoundingDirection) {
        match (self, negative) {
            (Rounding::HalfEven, _) => (true, RoundingDirection::ToEven),
            (Rounding::HalfUp, _) => (true, RoundingDirection::AwayZero),
            (Rounding::HalfDown, _) => (true, RoundingDirection::ToZero),
            (Rounding::Ceiling, false) => (false, RoundingDirection::AwayZero),
            (Rounding::Ceiling, true) => (false, RoundingDirection::ToZero),
            (Rounding::Floor, false) => (false, RoundingDirection::ToZero),
            (Rounding::Floor, true) => (false, RoundingDirection::AwayZero),
            (Rounding::Up, _) => (false, RoundingDirection::AwayZero),
            (Rounding::Down, _) => (false, RoundingDirection::ToZero),
            (Rounding::ZeroFiveUp, _) => (false, RoundingDirection::ZeroFive),
        }
    }

    /// Returns true if a truncated coefficient whose last digit is
    /// `last_digit` must be incremented by one unit.
    pub fn requires_increment(
        &self,
        negative: bool,
        last_digit: u32,
        remnant: Remnant,
        radix: u32,
    ) -> bool {
        if remnant.is_exact() {
            return false;
        }
        match self.direction(negative) {
            (true, RoundingDirection::ToEven) => {
                // tie => increment if odd
                remnant == Remnant::AboveHalf || (remnant == Remnant::Half && last_digit % 2 == 1)
            }
            (true, RoundingDirection::AwayZero) => remnant != Remnant::BelowHalf,
            (true, _) => remnant == Remnant::AboveHalf,
            (false, RoundingDirection::AwayZero) => true,
            (false, RoundingDirection::ZeroFive) => {
                // a 5 is only special in decimal
                last_digit == 0 || (radix == 10 && last_digit == 5)
            }
            (false, _) => false,
        }
    }

    /// Assuming overflow has occured, return true if the result
    /// should be an infinity rather than the largest finite value.
    pub fn overflow_to_infinity(&self, negative: bool) -> bool {
        match self.direction(negative) {
            // nearest carries all overflows to infinity
            (true, _) => true,
            (_, RoundingDirection::AwayZero) => true,
            (_, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments() {
        let half = Remnant::Half;
        assert!(Rounding::HalfEven.requires_increment(false, 3, half, 10));
        assert!(!Rounding::HalfEven.requires_increment(false, 4, half, 10));
        assert!(Rounding::HalfUp.requires_increment(true, 4, half, 10));
        assert!(!Rounding::HalfDown.requires_increment(false, 4, half, 10));
        assert!(Rounding::Ceiling.requires_increment(false, 4, Remnant::BelowHalf, 10));
        assert!(!Rounding::Ceiling.requires_increment(true, 4, Remnant::AboveHalf, 10));
        assert!(Rounding::ZeroFiveUp.requires_increment(false, 5, Remnant::BelowHalf, 10));
        assert!(!Rounding::ZeroFiveUp.requires_increment(false, 5, Remnant::BelowHalf, 16));
        assert!(!Rounding::ZeroFiveUp.requires_increment(false, 0, Remnant::Exact, 10));
    }

    #[test]
    fn shifted_remnants() {
        let ten = BigInt::from(10);
        let r = Remnant::shift(&BigInt::from(5), &ten, Remnant::BelowHalf);
        assert_eq!(r, Remnant::AboveHalf);
        let r = Remnant::shift(&BigInt::from(0), &ten, Remnant::Half);
        assert_eq!(r, Remnant::BelowHalf);
        assert_eq!(Remnant::from_ratio(&BigInt::from(4), &ten), Remnant::BelowHalf);
    }
}
