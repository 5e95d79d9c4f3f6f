/*
    Decimal rendering of native integers
*/

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

// Below this bound `v / 10 == ((v >> 1) * 52429) >> 18` holds exactly.
const FAST_DIV_BOUND: u32 = 163840;

// Writes the decimal digits of `v` in reverse order.
fn push_digits_u64(mut v: u64, out: &mut Vec<u8>) {
    while v >= u64::from(FAST_DIV_BOUND) {
        let q = v / 10;
        out.push(DIGITS[(v - q * 10) as usize]);
        v = q;
    }
    push_digits_u32(v as u32, out);
}

fn push_digits_u32(mut v: u32, out: &mut Vec<u8>) {
    while v >= FAST_DIV_BOUND {
        let q = v / 10;
        out.push(DIGITS[(v - q * 10) as usize]);
        v = q;
    }
    while v > 9 {
        let q = ((v >> 1).wrapping_mul(52429) >> 18) & 16383;
        out.push(DIGITS[(v - q * 10) as usize]);
        v = q;
    }
    out.push(DIGITS[v as usize]);
}

fn finish(neg: bool, mut digits: Vec<u8>) -> String {
    if neg {
        digits.push(b'-');
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Renders `val` in base 10.
pub fn int_to_string(val: i32) -> String {
    let mut digits = Vec::with_capacity(11);
    push_digits_u32(val.unsigned_abs(), &mut digits);
    finish(val < 0, digits)
}

/// Renders `val` in base 10.
pub fn long_to_string(val: i64) -> String {
    let mut digits = Vec::with_capacity(20);
    push_digits_u64(val.unsigned_abs(), &mut digits);
    finish(val < 0, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_std_formatting() {
        for v in [0, 7, -7, 10, 163839, 163840, 163841, -999999, i32::MAX, i32::MIN] {
            assert_eq!(int_to_string(v), v.to_string());
        }
        for v in [0i64, -1, 1 << 40, i64::MAX, i64::MIN] {
            assert_eq!(long_to_string(v), v.to_string());
        }
    }

    #[test]
    fn fast_division_is_exact() {
        for v in 0..FAST_DIV_BOUND {
            assert_eq!(((v >> 1).wrapping_mul(52429) >> 18) & 16383, v / 10, "v = {}", v);
        }
    }
}
