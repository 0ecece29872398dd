//! Raw-residue Z/nZ backend for the [`Numeric`] contract.
//!
//! Values are bare `i64` residues held in `[0, modulus)`; the modulus
//! lives in the ring instance rather than in each value. Inversion goes
//! through the extended Euclidean algorithm, the cheap counterpart to
//! the Fermat/Euler inverse that [`crate::IntMod`] carries.

use crate::errors::FfringError;
use crate::intmath;
use crate::numeric::{Numeric, parse_int_auto};

#[derive(Debug, Clone, Copy)]
pub struct ResidueNumeric {
    modulus: i64,
}

impl ResidueNumeric {
    /// # Errors
    ///
    /// `InvalidModulus` unless the modulus is positive.
    pub fn try_with(modulus: i64) -> Result<Self, FfringError> {
        if modulus <= 0 {
            return Err(FfringError::InvalidModulus(format!(
                "modulus must be positive, got {}",
                modulus
            )));
        }
        Ok(ResidueNumeric { modulus })
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    fn reduce(&self, a: i128) -> i64 {
        a.rem_euclid(self.modulus as i128) as i64
    }

    /// Extended-Euclid inverse of `a` mod the ring modulus.
    fn recip(&self, a: i64) -> Result<i64, FfringError> {
        let (d, s, _) = intmath::ext_gcd(a, self.modulus);
        if d.abs() != 1 {
            return Err(FfringError::NoInverse(format!(
                "impossible inverse: gcd({}, {}) = {}",
                a,
                self.modulus,
                d.abs()
            )));
        }
        // s is the Bezout coefficient of a; d = -1 flips its sign
        Ok(self.reduce((d * s) as i128))
    }
}

impl Numeric for ResidueNumeric {
    type Value = i64;
    type Exponent = i64;

    fn from_string(&self, lexeme: &str) -> Result<i64, FfringError> {
        Ok(self.reduce(parse_int_auto(lexeme)? as i128))
    }

    fn parse_exponent(&self, lexeme: &str) -> Result<i64, FfringError> {
        parse_int_auto(lexeme)
    }

    fn render(&self, a: &i64) -> String {
        a.to_string()
    }

    fn add(&self, a: &i64, b: &i64) -> i64 {
        self.reduce(*a as i128 + *b as i128)
    }

    fn subtract(&self, a: &i64, b: &i64) -> i64 {
        self.reduce(*a as i128 - *b as i128)
    }

    fn multiply(&self, a: &i64, b: &i64) -> i64 {
        self.reduce(*a as i128 * *b as i128)
    }

    fn divide(&self, a: &i64, b: &i64) -> Result<i64, FfringError> {
        let binv = self.recip(*b)?;
        Ok(self.multiply(a, &binv))
    }

    fn modulo(&self, _a: &i64, _b: &i64) -> Result<i64, FfringError> {
        Err(FfringError::UnsupportedOperation(
            "mod is not defined on residues of Z/nZ".to_string(),
        ))
    }

    fn exponentiate(&self, a: &i64, e: &i64) -> Result<i64, FfringError> {
        if self.reduce(*a as i128) == 0 {
            if *e == 0 {
                return Err(FfringError::ZeroToZero);
            }
            if *e < 0 {
                return Err(FfringError::DivisionByZero(format!(
                    "negative power of zero mod {}",
                    self.modulus
                )));
            }
            return Ok(0);
        }
        if *e < 0 {
            let ainv = self.recip(*a)?;
            return intmath::mod_exp(ainv, -*e, self.modulus);
        }
        intmath::mod_exp(*a, *e, self.modulus)
    }

    fn to_exponent(&self, a: &i64) -> Result<i64, FfringError> {
        Ok(*a)
    }

    fn negate(&self, a: &i64) -> i64 {
        self.reduce(-(*a as i128))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        assert!(ResidueNumeric::try_with(11).is_ok());
        assert!(ResidueNumeric::try_with(0).is_err());
        assert!(ResidueNumeric::try_with(-3).is_err());
    }

    #[test]
    fn test_parse_reduces() {
        let n = ResidueNumeric::try_with(11).unwrap();
        assert_eq!(n.from_string("15").unwrap(), 4);
        assert_eq!(n.from_string("-1").unwrap(), 10);
        assert_eq!(n.from_string("0x10").unwrap(), 5);
    }

    #[test]
    fn test_ring_ops() {
        let n = ResidueNumeric::try_with(11).unwrap();
        assert_eq!(n.add(&5, &8), 2);
        assert_eq!(n.subtract(&5, &8), 8);
        assert_eq!(n.multiply(&5, &8), 7);
        assert_eq!(n.negate(&5), 6);
        assert!(n.modulo(&5, &3).is_err());
    }

    #[test]
    fn test_divide_via_ext_gcd() {
        let n = ResidueNumeric::try_with(11).unwrap();
        for a in 1..11 {
            assert_eq!(n.multiply(&a, &n.divide(&1, &a).unwrap()), 1);
        }
        let n = ResidueNumeric::try_with(10).unwrap();
        assert!(n.divide(&1, &2).is_err());
        assert!(n.divide(&3, &0).is_err());
    }

    #[test]
    fn test_exponentiate() {
        let n = ResidueNumeric::try_with(11).unwrap();
        assert_eq!(n.exponentiate(&2, &10).unwrap(), 1);
        assert_eq!(n.exponentiate(&2, &-1).unwrap(), 6);
        assert!(matches!(
            n.exponentiate(&0, &0),
            Err(FfringError::ZeroToZero)
        ));
        assert!(n.exponentiate(&0, &-1).is_err());
        assert_eq!(n.exponentiate(&0, &5).unwrap(), 0);
    }
}
