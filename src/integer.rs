use crate::{BigInt, Error, Result};

use num_traits::{One, Zero};
use std::fmt;

/// What a type has to provide to be the numerator and denominator of a
/// [`Rational`](crate::Rational).
///
/// Every operation that can fail returns an error instead of panicking:
/// division by zero for all implementors, and overflow for the fixed-width
/// primitives.
pub trait IntegerLike: Clone + Ord + fmt::Display + fmt::Debug + Zero + One {
    /// Parse an optionally negative run of decimal digits
    fn from_decimal(input: &str) -> Result<Self>;
    fn try_add(&self, other: &Self) -> Result<Self>;
    fn try_sub(&self, other: &Self) -> Result<Self>;
    fn try_mul(&self, other: &Self) -> Result<Self>;
    /// Truncating division, returning `(quotient, remainder)` where the
    /// remainder has the sign of `self`
    fn try_div_rem(&self, other: &Self) -> Result<(Self, Self)>;
    fn try_abs(&self) -> Result<Self>;
    fn try_neg(&self) -> Result<Self> {
        Self::zero().try_sub(self)
    }
}

impl IntegerLike for BigInt {
    fn from_decimal(input: &str) -> Result<Self> {
        input.parse()
    }
    fn try_add(&self, other: &Self) -> Result<Self> {
        Ok(self + other)
    }
    fn try_sub(&self, other: &Self) -> Result<Self> {
        Ok(self - other)
    }
    fn try_mul(&self, other: &Self) -> Result<Self> {
        Ok(self * other)
    }
    fn try_div_rem(&self, other: &Self) -> Result<(Self, Self)> {
        self.div_rem(other)
    }
    fn try_abs(&self) -> Result<Self> {
        Ok(self.abs())
    }
    fn try_neg(&self) -> Result<Self> {
        Ok(-self)
    }
}

/// Check that `input` is an optional `-` followed by at least one ASCII
/// digit. The standard parsers also accept a leading `+`, which we don't.
fn check_decimal(input: &str) -> Result<()> {
    let body = if input.starts_with('-') { &input[1..] } else { input };
    if body.is_empty() {
        return Err(Error::invalid(input, "no digits"));
    }
    if !body.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Error::invalid(input, "unexpected character"));
    }
    Ok(())
}

macro_rules! impl_integer_like {
    ($($int:ident),*) => {
        $(impl IntegerLike for $int {
            fn from_decimal(input: &str) -> Result<Self> {
                check_decimal(input)?;
                // Only out of range input can fail after the check above
                input.parse().map_err(|_| Error::Overflow)
            }
            fn try_add(&self, other: &Self) -> Result<Self> {
                self.checked_add(*other).ok_or(Error::Overflow)
            }
            fn try_sub(&self, other: &Self) -> Result<Self> {
                self.checked_sub(*other).ok_or(Error::Overflow)
            }
            fn try_mul(&self, other: &Self) -> Result<Self> {
                self.checked_mul(*other).ok_or(Error::Overflow)
            }
            fn try_div_rem(&self, other: &Self) -> Result<(Self, Self)> {
                if *other == 0 {
                    return Err(Error::DivisionByZero);
                }
                // MIN / -1 is the only other way for these to fail
                let quotient = self.checked_div(*other).ok_or(Error::Overflow)?;
                let remainder = self.checked_rem(*other).ok_or(Error::Overflow)?;
                Ok((quotient, remainder))
            }
            fn try_abs(&self) -> Result<Self> {
                self.checked_abs().ok_or(Error::Overflow)
            }
            fn try_neg(&self) -> Result<Self> {
                self.checked_neg().ok_or(Error::Overflow)
            }
        })*
    }
}
impl_integer_like!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(i64::from_decimal("-42"), Ok(-42));
        assert_eq!(i64::from_decimal("007"), Ok(7));
        assert_eq!(BigInt::from_decimal("-0"), Ok(BigInt::zero()));
        assert_eq!(i8::from_decimal("128"), Err(Error::Overflow));
        assert_eq!(i8::from_decimal("-128"), Ok(std::i8::MIN));
        for input in &["", "-", "+1", "12a3", " 1"] {
            match i32::from_decimal(input) {
                Err(Error::InvalidFormat { .. }) => (),
                other => panic!("{:?} parsed as {:?}", input, other)
            }
        }
    }
    #[test]
    fn fixed_width_errors() {
        assert_eq!(std::i32::MAX.try_add(&1), Err(Error::Overflow));
        assert_eq!(std::i32::MIN.try_sub(&1), Err(Error::Overflow));
        assert_eq!(std::i32::MAX.try_mul(&2), Err(Error::Overflow));
        assert_eq!(5i32.try_div_rem(&0), Err(Error::DivisionByZero));
        assert_eq!(std::i32::MIN.try_div_rem(&-1), Err(Error::Overflow));
        assert_eq!(std::i32::MIN.try_abs(), Err(Error::Overflow));
        assert_eq!(std::i32::MIN.try_neg(), Err(Error::Overflow));
    }
    #[test]
    fn truncating_division() {
        assert_eq!((-7i64).try_div_rem(&3), Ok((-2, -1)));
        assert_eq!(BigInt::new(-7).try_div_rem(&BigInt::new(3)), Ok((BigInt::new(-2), BigInt::new(-1))));
        assert_eq!(BigInt::new(7).try_div_rem(&BigInt::zero()), Err(Error::DivisionByZero));
    }
    #[test]
    fn negation() {
        assert_eq!(BigInt::new(5).try_neg(), Ok(BigInt::new(-5)));
        assert_eq!(BigInt::zero().try_neg(), Ok(BigInt::zero()));
        assert_eq!(3i16.try_neg(), Ok(-3));
    }
}
