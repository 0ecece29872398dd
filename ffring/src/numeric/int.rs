//! Plain-integer backend for the [`Numeric`] contract.

use crate::errors::FfringError;
use crate::intmath;
use crate::numeric::{Numeric, parse_int_auto};

/// `i64` arithmetic: decimal/hex/binary/octal literals, truncating
/// division, mathematical (non-negative) modulo.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntNumeric;

impl IntNumeric {
    pub fn new() -> Self {
        IntNumeric
    }
}

impl Numeric for IntNumeric {
    type Value = i64;
    type Exponent = i64;

    fn from_string(&self, lexeme: &str) -> Result<i64, FfringError> {
        parse_int_auto(lexeme)
    }

    fn parse_exponent(&self, lexeme: &str) -> Result<i64, FfringError> {
        parse_int_auto(lexeme)
    }

    fn render(&self, a: &i64) -> String {
        a.to_string()
    }

    fn add(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_add(*b)
    }

    fn subtract(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_sub(*b)
    }

    fn multiply(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_mul(*b)
    }

    fn divide(&self, a: &i64, b: &i64) -> Result<i64, FfringError> {
        if *b == 0 {
            return Err(FfringError::DivisionByZero(format!("{} / 0", a)));
        }
        Ok(a / b)
    }

    fn modulo(&self, a: &i64, b: &i64) -> Result<i64, FfringError> {
        if *b == 0 {
            return Err(FfringError::DivisionByZero(format!("{} mod 0", a)));
        }
        Ok(a.rem_euclid(*b))
    }

    fn exponentiate(&self, a: &i64, e: &i64) -> Result<i64, FfringError> {
        if *a == 0 && *e == 0 {
            return Err(FfringError::ZeroToZero);
        }
        intmath::int_exp(*a, *e)
    }

    fn to_exponent(&self, a: &i64) -> Result<i64, FfringError> {
        Ok(*a)
    }

    fn negate(&self, a: &i64) -> i64 {
        a.wrapping_neg()
    }
}
