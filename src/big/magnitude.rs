//! Arithmetic on bare magnitudes: little-endian slices of decimal digits.
//!
//! Every function here expects trimmed input (no most-significant zeros,
//! never empty) and returns trimmed output.

use smallvec::SmallVec;
use std::{
    cmp::{self, Ordering},
    iter
};

/// How many digits a number can hold before it spills onto the heap
pub const DIGITS_INLINE: usize = 32;

pub type Digits = SmallVec<[u8; DIGITS_INLINE]>;

/// The canonical zero magnitude: a single 0 digit
pub fn zero() -> Digits {
    iter::once(0).collect()
}
pub fn is_zero(digits: &[u8]) -> bool {
    digits.len() == 1 && digits[0] == 0
}
/// Drop most-significant zeros, keeping at least one digit
pub fn trim(digits: &mut Digits) {
    while digits.len() > 1 && digits[digits.len() - 1] == 0 {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}
/// Compare by length first, then from the most significant digit down
pub fn cmp(left: &[u8], right: &[u8]) -> Ordering {
    let cmp = left.len().cmp(&right.len());
    if cmp != Ordering::Equal {
        return cmp;
    }
    left.iter().rev().cmp(right.iter().rev())
}
pub fn add(left: &[u8], right: &[u8]) -> Digits {
    let len = cmp::max(left.len(), right.len());
    let mut result = Digits::with_capacity(len + 1);
    let mut carry = 0;

    for i in 0..len {
        let sum = left.get(i).unwrap_or(&0) + right.get(i).unwrap_or(&0) + carry;
        result.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        result.push(carry);
    }

    result
}
/// Subtract `smaller` from `larger`. The caller guarantees that
/// `larger >= smaller`.
pub fn sub(larger: &[u8], smaller: &[u8]) -> Digits {
    debug_assert_ne!(cmp(larger, smaller), Ordering::Less, "magnitude underflow");

    let mut result = Digits::with_capacity(larger.len());
    let mut borrow = 0;

    for (i, &digit) in larger.iter().enumerate() {
        let other = smaller.get(i).unwrap_or(&0) + borrow;
        if digit < other {
            result.push(digit + 10 - other);
            borrow = 1;
        } else {
            result.push(digit - other);
            borrow = 0;
        }
    }

    trim(&mut result);
    result
}
/// Grade-school multiplication into a `len(left) + len(right)` buffer
pub fn mul(left: &[u8], right: &[u8]) -> Digits {
    let mut acc: Digits = iter::repeat(0).take(left.len() + right.len()).collect();

    for (i, &digit) in left.iter().enumerate() {
        let mut carry = 0u32;
        for (j, &digit2) in right.iter().enumerate() {
            let current = acc[i + j] as u32 + digit as u32 * digit2 as u32 + carry;
            acc[i + j] = (current % 10) as u8;
            carry = current / 10;
        }
        // A single row never carries more than one digit past its end
        acc[i + right.len()] += carry as u8;
    }

    trim(&mut acc);
    acc
}
/// Multiply by `10^positions`
pub fn shift_left(digits: &[u8], positions: usize) -> Digits {
    if is_zero(digits) {
        return zero();
    }
    let mut result = Digits::with_capacity(digits.len() + positions);
    result.extend(iter::repeat(0).take(positions));
    result.extend(digits.iter().cloned());
    result
}
/// Digits `[start, end)`, clamped to the length of the input
pub fn sub_range(digits: &[u8], start: usize, end: usize) -> Digits {
    let end = cmp::min(end, digits.len());
    let start = cmp::min(start, end);
    let mut result: Digits = digits[start..end].iter().cloned().collect();
    trim(&mut result);
    result
}
/// Long division by repeated subtraction. Returns `(quotient, remainder)`.
/// The caller rejects a zero divisor.
pub fn div_rem(dividend: &[u8], divisor: &[u8]) -> (Digits, Digits) {
    debug_assert!(!is_zero(divisor), "magnitude division by zero");

    let mut quotient = Digits::with_capacity(dividend.len());
    let mut remainder = zero();

    for &digit in dividend.iter().rev() {
        // remainder = remainder * 10 + digit
        if is_zero(&remainder) {
            remainder[0] = digit;
        } else {
            remainder.insert(0, digit);
        }

        // The remainder stays below 10 * divisor, so this runs at most 9 times
        let mut count = 0;
        while cmp(&remainder, divisor) != Ordering::Less {
            remainder = sub(&remainder, divisor);
            count += 1;
        }
        quotient.push(count);
    }

    quotient.reverse();
    trim(&mut quotient);
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(input: &str) -> Digits {
        input.bytes().rev().map(|b| b - b'0').collect()
    }
    fn string(digits: &[u8]) -> String {
        digits.iter().rev().map(|d| (b'0' + d) as char).collect()
    }

    #[test]
    fn trimming() {
        let mut num = digits("000120");
        trim(&mut num);
        assert_eq!(string(&num), "120");
        let mut num = digits("0000");
        trim(&mut num);
        assert_eq!(&num[..], &[0]);
        let mut num = Digits::new();
        trim(&mut num);
        assert_eq!(&num[..], &[0]);
    }
    #[test]
    fn ordering() {
        assert_eq!(cmp(&digits("99"), &digits("100")), Ordering::Less);
        assert_eq!(cmp(&digits("123"), &digits("122")), Ordering::Greater);
        assert_eq!(cmp(&digits("5"), &digits("5")), Ordering::Equal);
        assert_eq!(cmp(&digits("21"), &digits("12")), Ordering::Greater);
    }
    #[test]
    fn add_sub() {
        assert_eq!(string(&add(&digits("999"), &digits("1"))), "1000");
        assert_eq!(string(&add(&digits("0"), &digits("42"))), "42");
        assert_eq!(string(&sub(&digits("1000"), &digits("1"))), "999");
        assert_eq!(string(&sub(&digits("42"), &digits("42"))), "0");
        assert_eq!(string(&sub(&digits("5002"), &digits("4999"))), "3");
    }
    #[test]
    fn multiply() {
        assert_eq!(string(&mul(&digits("123"), &digits("456"))), "56088");
        assert_eq!(string(&mul(&digits("999"), &digits("999"))), "998001");
        assert_eq!(string(&mul(&digits("0"), &digits("999"))), "0");
        assert_eq!(string(&mul(&digits("99999999"), &digits("9"))), "899999991");
    }
    #[test]
    fn shift_and_range() {
        assert_eq!(string(&shift_left(&digits("12"), 3)), "12000");
        assert_eq!(string(&shift_left(&digits("0"), 3)), "0");
        assert_eq!(string(&sub_range(&digits("123456"), 0, 3)), "456");
        assert_eq!(string(&sub_range(&digits("123456"), 3, 6)), "123");
        assert_eq!(string(&sub_range(&digits("100056"), 2, 5)), "0");
        assert_eq!(string(&sub_range(&digits("12"), 2, 2)), "0");
        assert_eq!(string(&sub_range(&digits("12"), 5, 9)), "0");
    }
    #[test]
    fn divide() {
        let (q, r) = div_rem(&digits("100"), &digits("7"));
        assert_eq!((string(&q), string(&r)), ("14".to_string(), "2".to_string()));
        let (q, r) = div_rem(&digits("3"), &digits("10"));
        assert_eq!((string(&q), string(&r)), ("0".to_string(), "3".to_string()));
        let (q, r) = div_rem(&digits("1000000"), &digits("1000"));
        assert_eq!((string(&q), string(&r)), ("1000".to_string(), "0".to_string()));
        let (q, r) = div_rem(&digits("0"), &digits("3"));
        assert_eq!((string(&q), string(&r)), ("0".to_string(), "0".to_string()));
    }
}
