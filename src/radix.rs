/*
    Radix-B floating-point numbers
*/

use std::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::util::{digit_length, radix_power};
use crate::{Context, Flags, Remnant};

macro_rules! assert_valid_radix {
    ($B:expr) => {
        assert!(
            (2 <= $B) && ($B <= 36),
            "invalid radix, must be 2 <= B <= 36: {}",
            $B
        );
    };
}

mod arithmetic;
mod convert;
mod division;
mod helper;
mod number;
mod round;
mod transcendental;

pub use convert::to_hi_lo_pair;
pub use helper::{FloatHelper, FullMath};

// Minimal floating-point encoding grouped by classification
#[derive(Clone, Debug, PartialEq, Eq)]
enum RadixNum {
    // signed zero or finite number
    // => (sign, exponent, coefficient)
    Number(bool, BigInt, BigInt),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign, signaling, payload)
    Nan(bool, bool, BigInt),
}

/** A floating-point number in radix `B`.
 *
 * A finite value is `(-1)^sign * coefficient * B^exponent` with an
 * unbounded nonnegative coefficient and an unbounded exponent. Trailing
 * zeros of the coefficient are significant: `1.0` and `1.00` are distinct
 * members of the same cohort. Zeros are signed.
 *
 * Values carry no precision of their own; every operation rounds to
 * the `Context` it is given.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadixFloat<const B: u32> {
    num: RadixNum,
}

/// Decimal floating-point numbers.
pub type Decimal = RadixFloat<10>;

/// Binary floating-point numbers.
pub type Binary = RadixFloat<2>;
