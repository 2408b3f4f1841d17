use super::magnitude::{self, Digits};
use crate::{Error, Result};

use num_traits::*;
use std::{
    cmp::Ordering,
    fmt,
    ops::*,
    str::FromStr
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Positive
}
impl Default for Sign {
    fn default() -> Self {
        Sign::Positive
    }
}
impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative
        }
    }
}
impl Mul for Sign {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        if self == other { Sign::Positive } else { Sign::Negative }
    }
}

/// An arbitrary-precision signed integer, stored as a sign and a list of
/// decimal digits, least significant first.
///
/// Values are immutable: every operation returns a new number. `/` and `%`
/// panic on a zero divisor, `div_rem` returns an error instead.
/// ```rust
/// use exact_types::BigInt;
///
/// let a: BigInt = "36423452523432434".parse().unwrap();
/// let b: BigInt = "-18423432424542345".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "18000020098890089");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(super) sign: Sign,
    pub(super) digits: Digits
}
impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}
impl BigInt {
    /// Alias of `from`
    pub fn new<T: Into<Self>>(value: T) -> Self {
        value.into()
    }
    /// Build a number from a sign and a magnitude, restoring the invariants:
    /// no leading zeros, and zero is never negative.
    pub(super) fn from_parts(sign: Sign, mut digits: Digits) -> Self {
        magnitude::trim(&mut digits);
        let sign = if magnitude::is_zero(&digits) { Sign::Positive } else { sign };
        Self { sign, digits }
    }
    /// Return the sign. Zero is always positive.
    pub fn sign(&self) -> Sign {
        self.sign
    }
    /// Number of decimal digits in the magnitude. Zero has one digit.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }
    /// Compare the absolute values of two numbers, ignoring their signs
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        magnitude::cmp(&self.digits, &other.digits)
    }
    /// Return the absolute value
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            digits: self.digits.clone()
        }
    }
    /// The non-negative number made of digits `[start, end)` of this one,
    /// counted from the least significant digit. The range is clamped to the
    /// number's length and an empty range yields zero.
    /// ```rust
    /// use exact_types::BigInt;
    /// assert_eq!(BigInt::new(-123456).sub_range(0, 3), BigInt::new(456));
    /// assert_eq!(BigInt::new(-123456).sub_range(3, 6), BigInt::new(123));
    /// ```
    pub fn sub_range(&self, start: usize, end: usize) -> Self {
        Self::from_parts(Sign::Positive, magnitude::sub_range(&self.digits, start, end))
    }
    /// Multiply by `10^positions`
    pub fn shift_left(&self, positions: usize) -> Self {
        Self {
            sign: self.sign,
            digits: magnitude::shift_left(&self.digits, positions)
        }
    }
    /// Grade-school multiplication. This is also what the `*` operator does.
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        Self::from_parts(self.sign * other.sign, magnitude::mul(&self.digits, &other.digits))
    }
    /// Divide and return `(quotient, remainder)`. Division truncates towards
    /// zero, so the remainder takes the sign of the dividend and
    /// `self == other * quotient + remainder`.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self)> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (quotient, remainder) = magnitude::div_rem(&self.digits, &other.digits);
        Ok((
            Self::from_parts(self.sign * other.sign, quotient),
            Self::from_parts(self.sign, remainder)
        ))
    }
    /// Like `/`, but returns an error instead of panicking on a zero divisor
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.div_rem(other).map(|(quotient, _)| quotient)
    }
    /// Like `%`, but returns an error instead of panicking on a zero divisor
    pub fn try_rem(&self, other: &Self) -> Result<Self> {
        self.div_rem(other).map(|(_, remainder)| remainder)
    }
}
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let (sign, body) = if input.starts_with('-') {
            (Sign::Negative, &input[1..])
        } else {
            (Sign::Positive, input)
        };
        if body.is_empty() {
            return Err(Error::invalid(input, "no digits"));
        }
        let mut digits = Digits::with_capacity(body.len());
        for byte in body.bytes().rev() {
            if !byte.is_ascii_digit() {
                return Err(Error::invalid(input, "unexpected character"));
            }
            digits.push(byte - b'0');
        }
        Ok(Self::from_parts(sign, digits))
    }
}
impl Num for BigInt {
    type FromStrRadixErr = Error;

    fn from_str_radix(input: &str, radix: u32) -> Result<Self> {
        if radix != 10 {
            return Err(Error::invalid(input, "only base 10 is supported"));
        }
        input.parse()
    }
}
impl Zero for BigInt {
    fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            digits: magnitude::zero()
        }
    }
    fn is_zero(&self) -> bool {
        magnitude::is_zero(&self.digits)
    }
}
impl One for BigInt {
    fn one() -> Self {
        Self::new(1u8)
    }
    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.digits[..] == [1u8]
    }
}
impl Signed for BigInt {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }
    fn abs_sub(&self, other: &Self) -> Self {
        if self > other {
            self - other
        } else {
            Self::zero()
        }
    }
    fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else if self.sign == Sign::Positive {
            Self::one()
        } else {
            -Self::one()
        }
    }
    fn is_positive(&self) -> bool {
        !self.is_zero() && self.sign == Sign::Positive
    }
    fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}
macro_rules! impl_from {
    ($($int:ident),*) => {
        $(impl From<$int> for BigInt {
            #[allow(unused_comparisons)]
            fn from(i: $int) -> Self {
                let sign = if i < 0 { Sign::Negative } else { Sign::Positive };
                // i128::MIN has no positive counterpart, unsigned_abs avoids the overflow
                Self::from_parts(sign, digits_of((i as i128).unsigned_abs()))
            }
        })*
    }
}
impl_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);

impl From<u128> for BigInt {
    fn from(i: u128) -> Self {
        Self::from_parts(Sign::Positive, digits_of(i))
    }
}
fn digits_of(mut i: u128) -> Digits {
    let mut digits = Digits::new();
    loop {
        digits.push((i % 10) as u8);
        i /= 10;
        if i == 0 {
            break digits;
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => self.cmp_abs(other),
            // A larger magnitude is a smaller negative number
            (Sign::Negative, Sign::Negative) => other.cmp_abs(self)
        }
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        } else if f.sign_plus() {
            write!(f, "+")?;
        }
        for digit in self.digits.iter().rev() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl Neg for BigInt {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}
impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;
    fn add(self, other: &BigInt) -> Self::Output {
        if self.sign == other.sign {
            // Such as (1 + 3 = 4) or (-1 + -3 = -4)
            BigInt::from_parts(self.sign, magnitude::add(&self.digits, &other.digits))
        } else if self.cmp_abs(other) == Ordering::Less {
            // Such as (3 + -4 = -1) or (-3 + 4 = 1)
            BigInt::from_parts(other.sign, magnitude::sub(&other.digits, &self.digits))
        } else {
            // Such as (4 + -3 = 1) or (-4 + 3 = -1), and (4 + -4 = 0)
            BigInt::from_parts(self.sign, magnitude::sub(&self.digits, &other.digits))
        }
    }
}
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;
    fn sub(self, other: &BigInt) -> Self::Output {
        if self.sign != other.sign {
            // Such as (1 - -3 = 4) or (-1 - 3 = -4)
            BigInt::from_parts(self.sign, magnitude::add(&self.digits, &other.digits))
        } else if self.cmp_abs(other) == Ordering::Less {
            // Such as (1 - 3 = -2) or (-1 - -3 = 2)
            BigInt::from_parts(-self.sign, magnitude::sub(&other.digits, &self.digits))
        } else {
            BigInt::from_parts(self.sign, magnitude::sub(&self.digits, &other.digits))
        }
    }
}
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;
    fn mul(self, other: &BigInt) -> Self::Output {
        self.schoolbook_mul(other)
    }
}
impl Div<&BigInt> for &BigInt {
    type Output = BigInt;
    fn div(self, other: &BigInt) -> Self::Output {
        self.try_div(other).expect("division by 0")
    }
}
impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;
    fn rem(self, other: &BigInt) -> Self::Output {
        self.try_rem(other).expect("division by 0")
    }
}
impl Pow<u32> for BigInt {
    type Output = Self;

    fn pow(self, mut exponent: u32) -> Self {
        let mut base = self;
        let mut result = Self::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = &base * &base;
            }
        }
        result
    }
}

impl CheckedDiv for BigInt {
    fn checked_div(&self, other: &Self) -> Option<Self> {
        self.try_div(other).ok()
    }
}
impl CheckedRem for BigInt {
    fn checked_rem(&self, other: &Self) -> Option<Self> {
        self.try_rem(other).ok()
    }
}
impl CheckedNeg for BigInt {
    fn checked_neg(&self) -> Option<Self> {
        Some(-self)
    }
}

macro_rules! impl_op {
    ($($op_trait:ident $op_fn:ident$(, $checked_trait:ident $checked_fn:ident)? = $assign_trait:ident $assign_fn:ident),*) => {
        $(
            $(impl $checked_trait for BigInt {
                fn $checked_fn(&self, other: &Self) -> Option<Self> {
                    Some(self.$op_fn(other))
                }
            })?
            impl $op_trait<BigInt> for BigInt {
                type Output = BigInt;
                fn $op_fn(self, other: BigInt) -> Self::Output {
                    (&self).$op_fn(&other)
                }
            }
            impl $op_trait<&BigInt> for BigInt {
                type Output = BigInt;
                fn $op_fn(self, other: &BigInt) -> Self::Output {
                    (&self).$op_fn(other)
                }
            }
            impl $op_trait<BigInt> for &BigInt {
                type Output = BigInt;
                fn $op_fn(self, other: BigInt) -> Self::Output {
                    self.$op_fn(&other)
                }
            }
            impl $assign_trait<&BigInt> for BigInt {
                fn $assign_fn(&mut self, other: &BigInt) {
                    *self = (&*self).$op_fn(other);
                }
            }
            impl $assign_trait<BigInt> for BigInt {
                fn $assign_fn(&mut self, other: BigInt) {
                    *self = (&*self).$op_fn(&other);
                }
            }
        )*
    }
}
impl_op! {
    Add add, CheckedAdd checked_add = AddAssign add_assign,
    Sub sub, CheckedSub checked_sub = SubAssign sub_assign,
    Mul mul, CheckedMul checked_mul = MulAssign mul_assign,
    Div div = DivAssign div_assign,
    Rem rem = RemAssign rem_assign
}
