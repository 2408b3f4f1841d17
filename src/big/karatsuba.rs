use super::BigInt;

use log::trace;
use num_traits::Zero;
use std::cmp;

impl BigInt {
    /// Multiply using Karatsuba's divide and conquer algorithm. Gives the same
    /// result as `schoolbook_mul`.
    ///
    /// Each level of recursion halves the digit count, so the depth grows with
    /// the logarithm of the input length. Numbers of many tens of thousands of
    /// digits recurse deeply; `*` has no recursion at all.
    /// ```rust
    /// use exact_types::BigInt;
    /// assert_eq!(BigInt::new(123).karatsuba(&BigInt::new(-456)), BigInt::new(-56088));
    /// ```
    pub fn karatsuba(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        if self.digit_count() == 1 || other.digit_count() == 1 {
            return self.schoolbook_mul(other);
        }

        let half = cmp::max(self.digit_count(), other.digit_count()) / 2;
        trace!("karatsuba: splitting {}x{} digits at {}", self.digit_count(), other.digit_count(), half);

        let high1 = self.sub_range(half, self.digit_count());
        let low1 = self.sub_range(0, half);
        let high2 = other.sub_range(half, other.digit_count());
        let low2 = other.sub_range(0, half);

        let p1 = high1.karatsuba(&high2);
        let p2 = low1.karatsuba(&low2);
        let p3 = (&high1 + &low1).karatsuba(&(&high2 + &low2)) - &p1 - &p2;

        let product = p1.shift_left(2 * half) + p3.shift_left(half) + p2;
        Self::from_parts(self.sign * other.sign, product.digits)
    }
}
