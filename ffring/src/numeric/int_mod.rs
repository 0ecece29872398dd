//! [`IntMod`]-backed Z/nZ backend for the [`Numeric`] contract.
//!
//! The second of the two Z/nZ backends: values carry their modulus (as
//! [`IntMod`]) and inversion goes through the Fermat/Euler path in
//! [`IntMod::recip`], in contrast to the extended-Euclid inverse of
//! [`crate::numeric::ResidueNumeric`].

use crate::errors::FfringError;
use crate::intmod::IntMod;
use crate::numeric::{Numeric, parse_int_auto};

#[derive(Debug, Clone, Copy)]
pub struct IntModNumeric {
    modulus: i64,
}

impl IntModNumeric {
    /// # Errors
    ///
    /// `InvalidModulus` unless the modulus is positive.
    pub fn try_with(modulus: i64) -> Result<Self, FfringError> {
        // constructing a throwaway residue validates the modulus once
        IntMod::try_with(0, modulus)?;
        Ok(IntModNumeric { modulus })
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }
}

impl Numeric for IntModNumeric {
    type Value = IntMod;
    type Exponent = i64;

    fn from_string(&self, lexeme: &str) -> Result<IntMod, FfringError> {
        IntMod::try_with(parse_int_auto(lexeme)?, self.modulus)
    }

    fn parse_exponent(&self, lexeme: &str) -> Result<i64, FfringError> {
        parse_int_auto(lexeme)
    }

    fn render(&self, a: &IntMod) -> String {
        a.to_string()
    }

    fn add(&self, a: &IntMod, b: &IntMod) -> IntMod {
        *a + *b
    }

    fn subtract(&self, a: &IntMod, b: &IntMod) -> IntMod {
        *a - *b
    }

    fn multiply(&self, a: &IntMod, b: &IntMod) -> IntMod {
        *a * *b
    }

    fn divide(&self, a: &IntMod, b: &IntMod) -> Result<IntMod, FfringError> {
        a.div(b)
    }

    fn modulo(&self, _a: &IntMod, _b: &IntMod) -> Result<IntMod, FfringError> {
        Err(FfringError::UnsupportedOperation(
            "mod is not defined on residues of Z/nZ".to_string(),
        ))
    }

    fn exponentiate(&self, a: &IntMod, e: &i64) -> Result<IntMod, FfringError> {
        a.pow(*e)
    }

    fn to_exponent(&self, a: &IntMod) -> Result<i64, FfringError> {
        Ok(a.residue())
    }

    fn negate(&self, a: &IntMod) -> IntMod {
        -*a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        assert!(IntModNumeric::try_with(11).is_ok());
        assert!(IntModNumeric::try_with(0).is_err());
    }

    #[test]
    fn test_ops() {
        let n = IntModNumeric::try_with(11).unwrap();
        let a = n.from_string("15").unwrap();
        let b = n.from_string("-1").unwrap();
        assert_eq!(a.residue(), 4);
        assert_eq!(b.residue(), 10);
        assert_eq!(n.add(&a, &b).residue(), 3);
        assert_eq!(n.multiply(&a, &b).residue(), 7);
        assert_eq!(n.negate(&a).residue(), 7);
        assert_eq!(n.render(&a), "4");
        assert!(n.modulo(&a, &b).is_err());
    }

    #[test]
    fn test_divide_and_pow() {
        let n = IntModNumeric::try_with(11).unwrap();
        let one = n.from_string("1").unwrap();
        let a = n.from_string("3").unwrap();
        assert_eq!(n.multiply(&a, &n.divide(&one, &a).unwrap()), one);
        assert_eq!(n.exponentiate(&a, &5).unwrap().residue(), 1);
        assert_eq!(n.to_exponent(&a).unwrap(), 3);
    }
}
