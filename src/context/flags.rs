/*
    Flags
*/

use std::ops::{BitOr, BitOrAssign};

use super::*;

macro_rules! flag_accessors {
    ($($field:ident => $with:ident),* $(,)?) => {
        $(
            #[doc = concat!("Returns true if `", stringify!($field), "` is raised.")]
            pub fn $field(&self) -> bool {
                self.$field
            }

            #[doc = concat!("Sets the `", stringify!($field), "` field.")]
            pub fn $with(mut self, raised: bool) -> Self {
                self.$field = raised;
                self
            }
        )*
    };
}

impl Flags {
    flag_accessors!(
        inexact => with_inexact,
        rounded => with_rounded,
        subnormal => with_subnormal,
        underflow => with_underflow,
        overflow => with_overflow,
        clamped => with_clamped,
        division_by_zero => with_division_by_zero,
        invalid => with_invalid,
        lost_digits => with_lost_digits,
    );

    /// Clears all flags.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if no flag is raised.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Inexact, rounded, and lost digits: the flags raised when an
    /// operand loses nonzero digits to the precision.
    pub fn lost_digits_group() -> Self {
        Self::default()
            .with_inexact(true)
            .with_rounded(true)
            .with_lost_digits(true)
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            inexact: self.inexact || rhs.inexact,
            rounded: self.rounded || rhs.rounded,
            subnormal: self.subnormal || rhs.subnormal,
            underflow: self.underflow || rhs.underflow,
            overflow: self.overflow || rhs.overflow,
            clamped: self.clamped || rhs.clamped,
            division_by_zero: self.division_by_zero || rhs.division_by_zero,
            invalid: self.invalid || rhs.invalid,
            lost_digits: self.lost_digits || rhs.lost_digits,
        }
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_flags_and_raise() {
        let mut ctx = Context::for_precision(5);
        ctx.raise(Flags::default().with_inexact(true));
        assert!(ctx.flags().is_empty(), "untracked context recorded a flag");

        let mut ctx = ctx.with_blank_flags();
        ctx.raise(Flags::lost_digits_group());
        assert!(ctx.flags().inexact() && ctx.flags().rounded() && ctx.flags().lost_digits());
        assert!(!ctx.flags().invalid());
        assert!(ctx.with_blank_flags().flags().is_empty());
    }
}
