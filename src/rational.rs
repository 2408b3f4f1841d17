use crate::{Error, IntegerLike, Result};

use log::trace;
use num_traits::{One, Zero};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr
};

/// Find the greatest common divisor of two non-negative numbers using
/// Euclid's algorithm. `gcd(x, 0)` is `x`.
pub fn gcd<T: IntegerLike>(x: &T, y: &T) -> Result<T> {
    let mut x = x.clone();
    let mut y = y.clone();
    while !y.is_zero() {
        let (_, remainder) = x.try_div_rem(&y)?;
        x = y;
        y = remainder;
    }
    Ok(x)
}

/// An exact fraction of two integers. This ensures (10/3) * 3 is actually 10
/// and not 9.99998.
///
/// A rational is always kept in lowest terms with a positive denominator, so
/// two equal values always have equal parts. The operators panic on
/// overflow or division by zero, the `checked_*` methods return an error.
/// ```rust
/// use exact_types::{BigInt, Rational};
///
/// let a = Rational::new(BigInt::new(3), BigInt::new(4)).unwrap();
/// let b = Rational::new(BigInt::new(5), BigInt::new(6)).unwrap();
/// assert_eq!((a + b).to_string(), "19/12");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational<T> {
    numerator: T,
    denominator: T
}
impl<T: IntegerLike> Rational<T> {
    /// Construct a new fraction in lowest terms. The sign ends up on the
    /// numerator.
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        if denominator.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        let divisor = gcd(&numerator.try_abs()?, &denominator.try_abs()?)?;
        let (mut numerator, _) = numerator.try_div_rem(&divisor)?;
        let (mut denominator, _) = denominator.try_div_rem(&divisor)?;

        // -1/-2 becomes 1/2, 1/-2 becomes -1/2
        if denominator < T::zero() {
            numerator = numerator.try_neg()?;
            denominator = denominator.try_neg()?;
        }
        trace!("rational: reduced by {} to {}/{}", divisor, numerator, denominator);

        Ok(Self { numerator, denominator })
    }
    /// A whole number, with denominator 1
    pub fn from_integer(numerator: T) -> Self {
        Self {
            numerator,
            denominator: T::one()
        }
    }
    /// Return the numerator, which carries the sign
    pub fn numerator(&self) -> &T {
        &self.numerator
    }
    /// Return the denominator, which is always positive
    pub fn denominator(&self) -> &T {
        &self.denominator
    }
    /// Split into `(numerator, denominator)`
    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let left = self.numerator.try_mul(&other.denominator)?;
        let right = other.numerator.try_mul(&self.denominator)?;
        Self::new(left.try_add(&right)?, self.denominator.try_mul(&other.denominator)?)
    }
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let left = self.numerator.try_mul(&other.denominator)?;
        let right = other.numerator.try_mul(&self.denominator)?;
        Self::new(left.try_sub(&right)?, self.denominator.try_mul(&other.denominator)?)
    }
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.numerator.try_mul(&other.numerator)?,
            self.denominator.try_mul(&other.denominator)?
        )
    }
    /// Fails with `DivisionByZero` if `other` is zero
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Self::new(
            self.numerator.try_mul(&other.denominator)?,
            self.denominator.try_mul(&other.numerator)?
        )
    }
    pub fn checked_neg(&self) -> Result<Self> {
        Ok(Self {
            numerator: self.numerator.try_neg()?,
            denominator: self.denominator.clone()
        })
    }
    /// abs of 1/2 is 1/2, abs of -1/2 is 1/2
    pub fn checked_abs(&self) -> Result<Self> {
        Ok(Self {
            numerator: self.numerator.try_abs()?,
            denominator: self.denominator.clone()
        })
    }
    /// Same thing as in mathematics taking the power of -1. Fails with
    /// `DivisionByZero` for zero.
    pub fn recip(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Self::new(self.denominator.clone(), self.numerator.clone())
    }
    /// Compare by cross-multiplying. Only fails if the products overflow.
    pub fn checked_cmp(&self, other: &Self) -> Result<Ordering> {
        let left = self.numerator.try_mul(&other.denominator)?;
        let right = other.numerator.try_mul(&self.denominator)?;
        Ok(left.cmp(&right))
    }
}
impl<T: IntegerLike> Default for Rational<T> {
    fn default() -> Self {
        Self::zero()
    }
}
impl<T: IntegerLike> From<T> for Rational<T> {
    fn from(numerator: T) -> Self {
        Self::from_integer(numerator)
    }
}
impl<T: IntegerLike> Zero for Rational<T> {
    fn zero() -> Self {
        Self::from_integer(T::zero())
    }
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}
impl<T: IntegerLike> One for Rational<T> {
    fn one() -> Self {
        Self::from_integer(T::one())
    }
}
impl<T: IntegerLike> PartialOrd for Rational<T> {
    /// Returns `None` only if a fixed-width `T` overflows while comparing
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.checked_cmp(other).ok()
    }
}
impl<T: fmt::Display> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
impl<T: fmt::Debug> fmt::Debug for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.numerator, self.denominator)
    }
}
impl<T: IntegerLike> FromStr for Rational<T> {
    type Err = Error;

    /// Parse either `numerator/denominator` or a lone integer
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.splitn(2, '/');
        let numerator = T::from_decimal(parts.next().unwrap_or_default())?;
        match parts.next() {
            Some(denominator) => Self::new(numerator, T::from_decimal(denominator)?),
            None => Ok(Self::from_integer(numerator))
        }
    }
}
impl<T: IntegerLike> Neg for Rational<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg().expect("integer overflow")
    }
}

macro_rules! impl_op {
    ($($trait:ident $fn:ident = $call:ident, $trait_assign:ident $fn_assign:ident),*) => {
        $(impl<T: IntegerLike> $trait for Rational<T> {
            type Output = Self;
            fn $fn(self, other: Self) -> Self {
                self.$call(&other).expect("integer overflow or other math error")
            }
        }
        impl<'a, T: IntegerLike> $trait<&'a Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;
            fn $fn(self, other: Self) -> Rational<T> {
                self.$call(other).expect("integer overflow or other math error")
            }
        }
        impl<T: IntegerLike> $trait_assign for Rational<T> {
            fn $fn_assign(&mut self, other: Self) {
                *self = self.$call(&other).expect("integer overflow or other math error");
            }
        })*
    }
}
impl_op! {
    Add add = checked_add, AddAssign add_assign,
    Sub sub = checked_sub, SubAssign sub_assign,
    Mul mul = checked_mul, MulAssign mul_assign,
    Div div = checked_div, DivAssign div_assign
}
