//! Property-based tests for the integer and rational types.

use num_traits::{One, Zero};
use proptest::prelude::*;

use crate::{gcd, BigInt, Error, Rational, Sign};

// Canonical decimal strings, long enough to exercise Karatsuba's recursion
fn decimal() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "-?[1-9][0-9]{0,60}"]
}
fn big() -> impl Strategy<Value = BigInt> {
    decimal().prop_map(|s| s.parse().unwrap())
}
fn non_zero_big() -> impl Strategy<Value = BigInt> {
    "-?[1-9][0-9]{0,30}".prop_map(|s| s.parse().unwrap())
}
fn rational() -> impl Strategy<Value = Rational<BigInt>> {
    (any::<i32>(), any::<i32>().prop_filter("zero denominator", |d| *d != 0))
        .prop_map(|(n, d)| Rational::new(BigInt::new(n), BigInt::new(d)).unwrap())
}

proptest! {
    #[test]
    fn round_trip(s in decimal()) {
        prop_assert_eq!(s.parse::<BigInt>().unwrap().to_string(), s);
    }

    #[test]
    fn matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::new(a), BigInt::new(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!(&x + &y, BigInt::new(a + b));
        prop_assert_eq!(&x - &y, BigInt::new(a - b));
        prop_assert_eq!(&x * &y, BigInt::new(a * b));
        prop_assert_eq!(x.karatsuba(&y), BigInt::new(a * b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(x.div_rem(&y).unwrap(), (BigInt::new(a / b), BigInt::new(a % b)));
        }
    }

    #[test]
    fn add_commutative_associative(a in big(), b in big(), c in big()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_commutative_associative(a in big(), b in big(), c in big()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn identities(a in big()) {
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        prop_assert_eq!(&a * &BigInt::one(), a.clone());
        let zero = &a * &BigInt::zero();
        prop_assert!(zero.is_zero());
        prop_assert_eq!(zero.sign(), Sign::Positive);
        prop_assert_eq!(&a - &a, BigInt::zero());
    }

    #[test]
    fn karatsuba_matches_schoolbook(a in big(), b in big()) {
        prop_assert_eq!(a.karatsuba(&b), a.schoolbook_mul(&b));
    }

    #[test]
    fn division_invariant(a in big(), b in non_zero_big()) {
        let (quotient, remainder) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&b * &quotient) + &remainder, a.clone());
        prop_assert!(remainder.is_zero() || remainder.sign() == a.sign());
        prop_assert_eq!(remainder.cmp_abs(&b), std::cmp::Ordering::Less);
    }

    #[test]
    fn division_by_zero(a in big()) {
        prop_assert_eq!(a.try_div(&BigInt::zero()), Err(Error::DivisionByZero));
        prop_assert_eq!(a.try_rem(&BigInt::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn rational_normalized(r in rational()) {
        let divisor = gcd(&r.numerator().abs(), &r.denominator().abs()).unwrap();
        prop_assert!(divisor.is_one());
        prop_assert!(*r.denominator() > BigInt::zero());
    }

    #[test]
    fn rational_field_laws(a in rational(), b in rational()) {
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        if !b.is_zero() {
            prop_assert_eq!(&(&a * &b) / &b, a.clone());
        }
    }

    #[test]
    fn rational_fixed_width_agrees(n in -1000i64..1000, d in 1i64..1000) {
        let small = Rational::new(n, d).unwrap();
        let large = Rational::new(BigInt::new(n), BigInt::new(d)).unwrap();
        let (sn, sd) = small.into_parts();
        prop_assert_eq!(large.into_parts(), (BigInt::new(sn), BigInt::new(sd)));
    }
}
