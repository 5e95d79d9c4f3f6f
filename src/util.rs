/*
    Big-integer helpers
*/

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use crate::AdaptiveInt;

/// Returns `radix^power`.
/// Panics if `power` is negative or too large to materialize.
pub fn radix_power(radix: u32, power: &BigInt) -> BigInt {
    assert!(!power.is_negative(), "negative radix power: {}", power);
    let p = power
        .to_u32()
        .unwrap_or_else(|| panic!("radix power too large: {}", power));
    if radix == 2 {
        BigInt::one() << p as usize
    } else {
        Pow::pow(BigInt::from(radix), p)
    }
}

/// Returns the number of base-`radix` digits in `|val|`; 1 for zero.
pub fn digit_length(val: &BigInt, radix: u32) -> u64 {
    if val.is_zero() {
        1
    } else if radix == 2 {
        val.bits()
    } else {
        val.magnitude().to_str_radix(radix).len() as u64
    }
}

/// Strips trailing zero digits from `mant`, incrementing `exp` once per
/// digit removed. Stops once `exp` reaches `ideal`, when given.
/// A zero coefficient is returned as is with `exp` reset to 0.
pub fn reduce_trailing_zeros(
    mut mant: BigInt,
    exp: &mut AdaptiveInt,
    radix: u32,
    ideal: Option<&AdaptiveInt>,
) -> BigInt {
    if mant.is_zero() {
        exp.set_i32(0);
        return mant;
    }
    let r = BigInt::from(radix);
    loop {
        if let Some(ideal) = ideal {
            if exp.compare_to(ideal) != std::cmp::Ordering::Less {
                break;
            }
        }
        let (q, rem) = mant.div_rem(&r);
        if !rem.is_zero() {
            break;
        }
        mant = q;
        exp.increment();
    }
    mant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_toward_ideal() {
        let mut exp = AdaptiveInt::new(-4);
        let m = reduce_trailing_zeros(BigInt::from(1_200_000), &mut exp, 10, Some(&AdaptiveInt::new(0)));
        assert_eq!(m, BigInt::from(120));
        assert_eq!(exp.to_i32(), 0);

        let mut exp = AdaptiveInt::new(3);
        let m = reduce_trailing_zeros(BigInt::from(1_200), &mut exp, 10, None);
        assert_eq!(m, BigInt::from(12));
        assert_eq!(exp.to_i32(), 5);
    }

    #[test]
    fn digit_lengths() {
        assert_eq!(digit_length(&BigInt::from(0), 10), 1);
        assert_eq!(digit_length(&BigInt::from(-999), 10), 3);
        assert_eq!(digit_length(&BigInt::from(8), 2), 4);
        assert_eq!(radix_power(10, &BigInt::from(3)), BigInt::from(1000));
    }
}
