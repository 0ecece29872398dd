//! F2[x]/(m) backend for the [`Numeric`] contract.
//!
//! Constructed from a nonzero modulus polynomial; value literals are
//! bare hex digits, reduced on entry.

use crate::errors::FfringError;
use crate::f2poly::F2Poly;
use crate::f2polymod::F2PolyMod;
use crate::numeric::{Numeric, parse_int_auto};

#[derive(Debug, Clone, Copy)]
pub struct F2PolyModNumeric {
    modulus: F2Poly,
}

impl F2PolyModNumeric {
    /// # Errors
    ///
    /// `InvalidModulus` when the modulus polynomial is zero.
    pub fn try_with(modulus: F2Poly) -> Result<Self, FfringError> {
        F2PolyMod::try_with(F2Poly::new(0), modulus)?;
        Ok(F2PolyModNumeric { modulus })
    }

    /// Construct from a bare-hex modulus literal.
    pub fn try_from_hex(lexeme: &str) -> Result<Self, FfringError> {
        Self::try_with(F2Poly::from_hex(lexeme)?)
    }

    pub fn modulus(&self) -> F2Poly {
        self.modulus
    }
}

impl Numeric for F2PolyModNumeric {
    type Value = F2PolyMod;
    type Exponent = i64;

    fn from_string(&self, lexeme: &str) -> Result<F2PolyMod, FfringError> {
        F2PolyMod::try_with(F2Poly::from_hex(lexeme)?, self.modulus)
    }

    fn parse_exponent(&self, lexeme: &str) -> Result<i64, FfringError> {
        parse_int_auto(lexeme)
    }

    fn render(&self, a: &F2PolyMod) -> String {
        a.to_string()
    }

    fn add(&self, a: &F2PolyMod, b: &F2PolyMod) -> F2PolyMod {
        *a + *b
    }

    fn subtract(&self, a: &F2PolyMod, b: &F2PolyMod) -> F2PolyMod {
        *a - *b
    }

    fn multiply(&self, a: &F2PolyMod, b: &F2PolyMod) -> F2PolyMod {
        *a * *b
    }

    fn divide(&self, a: &F2PolyMod, b: &F2PolyMod) -> Result<F2PolyMod, FfringError> {
        a.div(b)
    }

    fn modulo(&self, _a: &F2PolyMod, _b: &F2PolyMod) -> Result<F2PolyMod, FfringError> {
        Err(FfringError::UnsupportedOperation(
            "mod is not defined on residues of F2[x]/(m)".to_string(),
        ))
    }

    fn exponentiate(&self, a: &F2PolyMod, e: &i64) -> Result<F2PolyMod, FfringError> {
        a.pow(*e)
    }

    fn to_exponent(&self, a: &F2PolyMod) -> Result<i64, FfringError> {
        let bits = a.residue().bits();
        if bits > 0x7fff_ffff {
            return Err(FfringError::ExponentOutOfRange(format!(
                "{} is out of exponent range",
                a
            )));
        }
        Ok(bits as i64)
    }

    fn negate(&self, a: &F2PolyMod) -> F2PolyMod {
        -*a
    }
}
