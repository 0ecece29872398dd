//! GF(2)-polynomial backend for the [`Numeric`] contract.
//!
//! Value literals are bare hex digits (no prefix), matching
//! [`F2Poly::from_hex`]; exponent literals are ordinary signed
//! integers.

use crate::errors::FfringError;
use crate::f2poly::F2Poly;
use crate::numeric::{Numeric, parse_int_auto};

#[derive(Debug, Default, Clone, Copy)]
pub struct F2PolyNumeric;

impl F2PolyNumeric {
    pub fn new() -> Self {
        F2PolyNumeric
    }
}

impl Numeric for F2PolyNumeric {
    type Value = F2Poly;
    type Exponent = i64;

    fn from_string(&self, lexeme: &str) -> Result<F2Poly, FfringError> {
        F2Poly::from_hex(lexeme)
    }

    fn parse_exponent(&self, lexeme: &str) -> Result<i64, FfringError> {
        parse_int_auto(lexeme)
    }

    fn render(&self, a: &F2Poly) -> String {
        a.to_string()
    }

    fn add(&self, a: &F2Poly, b: &F2Poly) -> F2Poly {
        *a + *b
    }

    fn subtract(&self, a: &F2Poly, b: &F2Poly) -> F2Poly {
        *a - *b
    }

    fn multiply(&self, a: &F2Poly, b: &F2Poly) -> F2Poly {
        *a * *b
    }

    fn divide(&self, a: &F2Poly, b: &F2Poly) -> Result<F2Poly, FfringError> {
        a.quo(b)
    }

    fn modulo(&self, a: &F2Poly, b: &F2Poly) -> Result<F2Poly, FfringError> {
        a.rem(b)
    }

    fn exponentiate(&self, a: &F2Poly, e: &i64) -> Result<F2Poly, FfringError> {
        a.pow(*e)
    }

    fn to_exponent(&self, a: &F2Poly) -> Result<i64, FfringError> {
        if a.bits() > 0x7fff_ffff {
            return Err(FfringError::ExponentOutOfRange(format!(
                "{} is out of exponent range",
                a
            )));
        }
        Ok(a.bits() as i64)
    }

    fn negate(&self, a: &F2Poly) -> F2Poly {
        -*a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let n = F2PolyNumeric::new();
        assert_eq!(n.from_string("13").unwrap(), F2Poly::new(0x13));
        // polynomial literals are bare hex; prefixes belong to integers
        assert!(n.from_string("0x13").is_err());
        assert_eq!(n.render(&F2Poly::new(0x1fe)), "1fe");
        assert_eq!(n.parse_exponent("15").unwrap(), 15);
    }

    #[test]
    fn test_ops() {
        let n = F2PolyNumeric::new();
        let a = F2Poly::new(0x7);
        let b = F2Poly::new(0x3);
        assert_eq!(n.add(&a, &b), F2Poly::new(0x4));
        assert_eq!(n.subtract(&a, &b), F2Poly::new(0x4));
        assert_eq!(n.multiply(&a, &b), F2Poly::new(0x9));
        assert_eq!(n.negate(&a), a);
        assert_eq!(n.divide(&F2Poly::new(0x9), &b).unwrap(), a);
        assert_eq!(n.modulo(&F2Poly::new(0x13), &b).unwrap(), F2Poly::new(0x1));
        assert!(n.divide(&a, &F2Poly::new(0)).is_err());
        assert!(n.modulo(&a, &F2Poly::new(0)).is_err());
    }

    #[test]
    fn test_exponent_paths() {
        let n = F2PolyNumeric::new();
        assert_eq!(
            n.exponentiate(&F2Poly::new(0x2), &4).unwrap(),
            F2Poly::new(0x10)
        );
        assert!(n.exponentiate(&F2Poly::new(0x2), &-1).is_err());
        assert_eq!(n.to_exponent(&F2Poly::new(0x13)).unwrap(), 0x13);
        assert!(n.to_exponent(&F2Poly::new(0x1_0000_0000)).is_err());
    }
}
