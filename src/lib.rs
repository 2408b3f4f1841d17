//! Exact arithmetic: arbitrary-precision decimal integers and fractions.
//!
//! [`BigInt`] stores its magnitude as decimal digits and offers both
//! schoolbook and Karatsuba multiplication. [`Rational`] works on top of any
//! [`IntegerLike`] type, `BigInt` and the primitive signed integers included.

mod big;
mod error;
mod integer;
mod rational;

#[cfg(test)]
mod proptests;

pub use self::big::*;
pub use self::error::*;
pub use self::integer::*;
pub use self::rational::*;
