/*
    Growable unsigned word buffer
*/

use std::cmp::Ordering;

use num_bigint::{BigInt, Sign};

// Number of words allocated beyond what a growth step needs.
const GROWTH_SLACK: usize = 20;

// Initial number of allocated words.
const INITIAL_WORDS: usize = 4;

/// A nonnegative integer of unbounded size stored as little-endian 32-bit words.
///
/// Only the first `word_count` words are meaningful and the highest of them
/// is never zero, so equal values always expose identical words.
/// All mutators work in place and return the buffer for chaining.
#[derive(Clone, Debug)]
pub struct WordBuffer {
    data: Vec<u32>,
    word_count: usize,
}

impl WordBuffer {
    /// Creates a buffer holding `val`.
    /// Panics if `val` is negative.
    pub fn from_i32(val: i32) -> Self {
        assert!(val >= 0, "WordBuffer requires a nonnegative value, received {}", val);
        let mut data = vec![0; INITIAL_WORDS];
        data[0] = val as u32;
        Self {
            data,
            word_count: usize::from(val != 0),
        }
    }

    /// Creates a buffer holding `val`.
    /// Panics if `val` is negative.
    pub fn from_i64(val: i64) -> Self {
        assert!(val >= 0, "WordBuffer requires a nonnegative value, received {}", val);
        let mut buf = Self::from_i32(0);
        buf.data[0] = val as u32;
        buf.data[1] = (val >> 32) as u32;
        buf.trim_to(2);
        buf
    }

    /// Creates a buffer holding the value of `val`.
    /// Panics if `val` is negative.
    pub fn from_big(val: &BigInt) -> Self {
        let (sign, words) = val.to_u32_digits();
        assert!(
            sign != Sign::Minus,
            "WordBuffer requires a nonnegative value, received {}",
            val
        );
        let len = words.len();
        let mut data = words;
        data.resize(usize::max(INITIAL_WORDS, len + 1), 0);
        let mut buf = Self {
            data,
            word_count: 0,
        };
        buf.trim_to(len);
        buf
    }

    /// Replaces the value of this buffer with `val`.
    /// Panics if `val` is negative.
    pub fn set_i32(&mut self, val: i32) -> &mut Self {
        assert!(val >= 0, "WordBuffer requires a nonnegative value, received {}", val);
        self.data[0] = val as u32;
        self.word_count = usize::from(val != 0);
        self
    }

    /// Exports this buffer as an arbitrary-precision integer.
    pub fn to_big(&self) -> BigInt {
        BigInt::from_slice(Sign::Plus, self.words())
    }

    /// Returns the meaningful words, least significant first.
    pub fn words(&self) -> &[u32] {
        &self.data[..self.word_count]
    }

    /// Returns true if the value fits in an `i32`.
    pub fn can_fit_i32(&self) -> bool {
        self.word_count == 0 || (self.word_count == 1 && self.data[0] >> 31 == 0)
    }

    /// Returns the lowest word reinterpreted as an `i32`.
    /// Only meaningful when `can_fit_i32` holds.
    pub fn to_i32(&self) -> i32 {
        if self.word_count == 0 {
            0
        } else {
            self.data[0] as i32
        }
    }

    /// Returns 0 for zero and 1 otherwise.
    pub fn sign(&self) -> i32 {
        i32::from(self.word_count != 0)
    }

    /// Returns true if the value is even.
    pub fn is_even(&self) -> bool {
        self.word_count == 0 || self.data[0] & 1 == 0
    }

    /// Compares this buffer with a native integer.
    pub fn compare_to_i32(&self, val: i32) -> Ordering {
        if val < 0 || self.word_count > 1 {
            Ordering::Greater
        } else if self.word_count == 0 {
            0.cmp(&val)
        } else {
            self.data[0].cmp(&(val as u32))
        }
    }

    /// Compares this buffer with another, most significant word first.
    pub fn compare_to(&self, other: &WordBuffer) -> Ordering {
        self.word_count
            .cmp(&other.word_count)
            .then_with(|| self.words().iter().rev().cmp(other.words().iter().rev()))
    }

    /// Adds a single word.
    pub fn add(&mut self, augend: u32) -> &mut Self {
        if augend == 0 {
            return self;
        }
        let mut carry = u64::from(augend);
        for w in self.data[..self.word_count].iter_mut() {
            let sum = u64::from(*w) + carry;
            *w = sum as u32;
            carry = sum >> 32;
            if carry == 0 {
                return self;
            }
        }
        self.push_word(carry as u32);
        self
    }

    /// Subtracts a single word.
    /// Panics if the result would be negative.
    pub fn subtract(&mut self, subtrahend: u32) -> &mut Self {
        if subtrahend == 0 {
            return self;
        }
        let mut borrow = subtrahend;
        for w in self.data[..self.word_count].iter_mut() {
            let (diff, under) = w.overflowing_sub(borrow);
            *w = diff;
            borrow = u32::from(under);
            if borrow == 0 {
                break;
            }
        }
        assert!(borrow == 0, "WordBuffer subtraction produced a negative result");
        self.trim_to(self.word_count);
        self
    }

    /// Subtracts another buffer.
    /// Panics if the result would be negative.
    pub fn subtract_buffer(&mut self, other: &WordBuffer) -> &mut Self {
        assert!(
            other.word_count <= self.word_count,
            "WordBuffer subtraction produced a negative result"
        );
        let mut borrow = false;
        for i in 0..self.word_count {
            let b = if i < other.word_count { other.data[i] } else { 0 };
            if b == 0 && !borrow && i >= other.word_count {
                break;
            }
            let (d1, u1) = self.data[i].overflowing_sub(b);
            let (d2, u2) = d1.overflowing_sub(u32::from(borrow));
            self.data[i] = d2;
            borrow = u1 || u2;
        }
        assert!(!borrow, "WordBuffer subtraction produced a negative result");
        self.trim_to(self.word_count);
        self
    }

    /// Multiplies by a single word.
    pub fn multiply(&mut self, multiplicand: u32) -> &mut Self {
        if multiplicand == 0 {
            self.data[0] = 0;
            self.word_count = 0;
            return self;
        }
        let mut carry = 0u64;
        for w in self.data[..self.word_count].iter_mut() {
            let product = u64::from(*w) * u64::from(multiplicand) + carry;
            *w = product as u32;
            carry = product >> 32;
        }
        if carry != 0 {
            self.push_word(carry as u32);
        }
        self
    }

    // Appends a high-order word, growing the storage with slack when full.
    fn push_word(&mut self, word: u32) {
        if self.word_count >= self.data.len() {
            self.data.resize(self.word_count + GROWTH_SLACK, 0);
        }
        self.data[self.word_count] = word;
        self.word_count += 1;
    }

    // Sets the word count to `len` minus any leading zero words.
    fn trim_to(&mut self, len: usize) {
        self.word_count = len;
        while self.word_count != 0 && self.data[self.word_count - 1] == 0 {
            self.word_count -= 1;
        }
    }
}

impl PartialEq for WordBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.words() == other.words()
    }
}

impl Eq for WordBuffer {}

impl PartialOrd for WordBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_across_words() {
        let mut buf = WordBuffer::from_i64(0xFFFF_FFFF);
        buf.add(1);
        assert_eq!(buf.words(), &[0, 1]);
        buf.subtract(1);
        assert_eq!(buf.words(), &[0xFFFF_FFFF]);
    }

    #[test]
    fn grows_with_slack() {
        let mut buf = WordBuffer::from_i32(1);
        for _ in 0..200 {
            buf.multiply(0x8000_0000);
        }
        // 2^6200 occupies bit 6200, i.e. word 193
        assert_eq!(buf.words().len(), 194);
        assert_eq!(buf.words()[193], 1 << 24);
        assert!(buf.data.len() >= buf.words().len());
    }

    #[test]
    fn subtract_trims_high_words() {
        let mut a = WordBuffer::from_i64(1 << 40);
        let b = WordBuffer::from_i64((1 << 40) - 5);
        a.subtract_buffer(&b);
        assert_eq!(a.words(), &[5]);
        assert!(a.can_fit_i32());
    }

    #[test]
    #[should_panic]
    fn subtract_below_zero_panics() {
        let mut a = WordBuffer::from_i32(3);
        a.subtract(4);
    }
}
