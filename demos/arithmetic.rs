extern crate exact_types;

use exact_types::{BigInt, Rational};

use std::{
    fmt::Display,
    time::Instant
};

fn timed<T: Display, F: FnOnce() -> T>(label: &str, op: F) {
    let start = Instant::now();
    let result = op();
    let elapsed = start.elapsed();
    println!("{}: {} (time: {} ns)", label, result, elapsed.as_nanos());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num1: BigInt = "36423452523432434".parse()?;
    let num2: BigInt = "-18423432424542345".parse()?;

    println!("BigInt arithmetic:");
    timed("Sum", || &num1 + &num2);
    timed("Difference", || &num1 - &num2);
    timed("Product (schoolbook)", || num1.schoolbook_mul(&num2));
    timed("Product (Karatsuba)", || num1.karatsuba(&num2));
    timed("Quotient", || &num1 / &num2);
    timed("Remainder", || &num1 % &num2);

    println!();
    println!("Rational<BigInt> arithmetic:");
    let r1 = Rational::new(BigInt::new(3), BigInt::new(4))?;
    let r2 = Rational::new(BigInt::new(5), BigInt::new(6))?;
    timed("Sum", || &r1 + &r2);
    timed("Difference", || &r1 - &r2);
    timed("Product", || &r1 * &r2);
    timed("Quotient", || &r1 / &r2);

    println!();
    println!("Rational<i64> arithmetic:");
    let r1 = Rational::new(3i64, 4)?;
    let r2 = Rational::new(5i64, 6)?;
    timed("Sum", || r1 + r2);
    timed("Difference", || r1 - r2);
    timed("Product", || r1 * r2);
    timed("Quotient", || r1 / r2);

    Ok(())
}
