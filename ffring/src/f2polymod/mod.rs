//! # The quotient ring F2[x]/(m)
//!
//! [`F2PolyMod`] pairs a reduced [`F2Poly`] residue with a fixed nonzero
//! modulus polynomial. When the modulus is irreducible of degree n this
//! is the field GF(2^n).

use crate::errors::FfringError;
use crate::f2poly::F2Poly;

use rand::Rng;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct F2PolyMod {
    residue: F2Poly,
    modulus: F2Poly,
}

impl F2PolyMod {
    /// Create a residue class mod `modulus`.
    ///
    /// The residue is reduced on entry.
    ///
    /// # Errors
    ///
    /// `InvalidModulus` when the modulus is the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// # use ffring::{F2Poly, F2PolyMod};
    /// let m = F2Poly::new(0x13); // x^4 + x + 1
    /// let a = F2PolyMod::try_with(F2Poly::new(0x10), m).unwrap();
    /// assert_eq!(a.residue(), F2Poly::new(0x3)); // x^4 = x + 1 in GF(16)
    /// ```
    pub fn try_with(residue: F2Poly, modulus: F2Poly) -> Result<Self, FfringError> {
        if modulus.is_zero() {
            return Err(FfringError::InvalidModulus(
                "GF(2) polynomial modulus must be nonzero".to_string(),
            ));
        }
        Ok(Self::reduce(residue, modulus))
    }

    // modulus nonzero precondition
    fn reduce(residue: F2Poly, modulus: F2Poly) -> Self {
        let (_, r) = crate::f2poly::bit_quo_rem(residue.bits(), modulus.bits());
        F2PolyMod {
            residue: F2Poly::new(r),
            modulus,
        }
    }

    pub fn residue(&self) -> F2Poly {
        self.residue
    }

    pub fn modulus(&self) -> F2Poly {
        self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.residue.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.residue.is_one()
    }

    fn check_same_modulus(&self, other: &F2PolyMod) {
        if self.modulus != other.modulus {
            panic!(
                "F2PolyMod modulus mismatch: {} vs {}",
                self.modulus, other.modulus
            );
        }
    }

    /// The multiplicative inverse, from the extended Euclidean
    /// algorithm.
    ///
    /// # Errors
    ///
    /// `NoInverse` unless `gcd(residue, modulus) = 1`.
    pub fn recip(&self) -> Result<F2PolyMod, FfringError> {
        let (g, s, _) = self.residue.ext_gcd(&self.modulus);
        if !g.is_one() {
            return Err(FfringError::NoInverse(format!(
                "{} is not invertible mod {}",
                self.residue, self.modulus
            )));
        }
        Ok(Self::reduce(s, self.modulus))
    }

    /// `self / other`, via the inverse of `other`.
    pub fn div(&self, other: &F2PolyMod) -> Result<F2PolyMod, FfringError> {
        self.check_same_modulus(other);
        Ok(*self * other.recip()?)
    }

    /// `self**e` by square-and-multiply. A negative exponent inverts the
    /// base first.
    ///
    /// # Errors
    ///
    /// `ZeroToZero` for `0**0`; `DivisionByZero` for a negative power of
    /// zero; `NoInverse` for a negative power of a non-unit.
    pub fn pow(&self, e: i64) -> Result<F2PolyMod, FfringError> {
        if self.residue.is_zero() {
            if e == 0 {
                return Err(FfringError::ZeroToZero);
            }
            if e < 0 {
                return Err(FfringError::DivisionByZero(format!(
                    "negative power of zero mod {}",
                    self.modulus
                )));
            }
            return Ok(Self::reduce(F2Poly::new(0), self.modulus));
        }
        let mut xp = *self;
        let mut e = e;
        if e < 0 {
            xp = xp.recip()?;
            e = -e;
        }
        let mut rv = Self::reduce(F2Poly::new(1), self.modulus);
        while e != 0 {
            if e & 1 == 1 {
                rv = rv * xp;
            }
            e >>= 1;
            xp = xp * xp;
        }
        Ok(rv)
    }

    /// A uniformly random residue mod `m`.
    pub fn random<R: Rng + ?Sized>(m: F2Poly, rng: &mut R) -> Result<F2PolyMod, FfringError> {
        if m.is_zero() {
            return Err(FfringError::InvalidModulus(
                "GF(2) polynomial modulus must be nonzero".to_string(),
            ));
        }
        let limit = 1u64 << m.degree();
        Ok(Self::reduce(
            F2Poly::new(rng.random_range(0..limit.max(1))),
            m,
        ))
    }
}

impl Add for F2PolyMod {
    type Output = F2PolyMod;

    fn add(self, other: F2PolyMod) -> F2PolyMod {
        self.check_same_modulus(&other);
        Self::reduce(self.residue + other.residue, self.modulus)
    }
}

impl Sub for F2PolyMod {
    type Output = F2PolyMod;

    fn sub(self, other: F2PolyMod) -> F2PolyMod {
        self + other
    }
}

impl Neg for F2PolyMod {
    type Output = F2PolyMod;

    fn neg(self) -> F2PolyMod {
        self
    }
}

impl Mul for F2PolyMod {
    type Output = F2PolyMod;

    fn mul(self, other: F2PolyMod) -> F2PolyMod {
        self.check_same_modulus(&other);
        Self::reduce(self.residue * other.residue, self.modulus)
    }
}

impl fmt::Display for F2PolyMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.residue)
    }
}

/// All residues mod `m` (degree below `deg m`), ascending by bit
/// pattern.
pub fn elements_for_modulus(m: F2Poly) -> Result<Vec<F2PolyMod>, FfringError> {
    if m.is_zero() {
        return Err(FfringError::InvalidModulus(
            "GF(2) polynomial modulus must be nonzero".to_string(),
        ));
    }
    let limit = 1u64 << m.degree();
    Ok((0..limit.max(1))
        .map(|bits| F2PolyMod::reduce(F2Poly::new(bits), m))
        .collect())
}

/// The units mod `m`: residues coprime to `m`, ascending by bit pattern.
pub fn units_for_modulus(m: F2Poly) -> Result<Vec<F2PolyMod>, FfringError> {
    Ok(elements_for_modulus(m)?
        .into_iter()
        .filter(|a| a.residue().gcd(&m).is_one())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FfringError;

    fn gf16(bits: u64) -> F2PolyMod {
        F2PolyMod::try_with(F2Poly::new(bits), F2Poly::new(0x13)).unwrap()
    }

    #[test]
    fn test_creation_reduces() {
        assert_eq!(gf16(0x10).residue(), F2Poly::new(0x3));
        assert_eq!(gf16(0x3).residue(), F2Poly::new(0x3));
        assert!(F2PolyMod::try_with(F2Poly::new(1), F2Poly::new(0)).is_err());
    }

    #[test]
    fn test_field_ops() {
        let a = gf16(0x7);
        let b = gf16(0x5);
        assert_eq!((a + b).residue(), F2Poly::new(0x2));
        assert_eq!((a - b).residue(), F2Poly::new(0x2));
        assert_eq!((-a).residue(), a.residue());
        // (x^2+x+1)(x^2+1) = x^4+x^3+x+1 = x^3 (mod x^4+x+1)
        assert_eq!((a * b).residue(), F2Poly::new(0x8));
    }

    #[test]
    #[should_panic(expected = "modulus mismatch")]
    fn test_modulus_mismatch_panics() {
        let a = gf16(0x2);
        let b = F2PolyMod::try_with(F2Poly::new(0x2), F2Poly::new(0x7)).unwrap();
        let _ = a * b;
    }

    #[test]
    fn test_recip_every_nonzero_element() {
        // 0x13 is irreducible, so GF(16) is a field
        for bits in 1..16u64 {
            let a = gf16(bits);
            assert!((a * a.recip().unwrap()).is_one(), "recip failed at {:x}", bits);
        }
        assert!(gf16(0).recip().is_err());
    }

    #[test]
    fn test_recip_non_unit_in_non_field() {
        // x is a zero divisor mod x^2 + x
        let a = F2PolyMod::try_with(F2Poly::new(0x2), F2Poly::new(0x6)).unwrap();
        assert!(matches!(a.recip(), Err(FfringError::NoInverse(_))));
    }

    #[test]
    fn test_div() {
        let a = gf16(0x8);
        let b = gf16(0x5);
        assert_eq!(a.div(&b).unwrap(), gf16(0x7));
    }

    #[test]
    fn test_pow() {
        let x = gf16(0x2);
        // multiplicative group of GF(16) has order 15
        assert!(x.pow(15).unwrap().is_one());
        assert!(!x.pow(5).unwrap().is_one());
        assert_eq!(x.pow(-1).unwrap(), x.recip().unwrap());
        assert!(matches!(gf16(0).pow(0), Err(FfringError::ZeroToZero)));
        assert!(gf16(0).pow(-1).is_err());
        assert!(gf16(0).pow(2).unwrap().is_zero());
    }

    #[test]
    fn test_element_and_unit_enumeration() {
        let m = F2Poly::new(0x13);
        assert_eq!(elements_for_modulus(m).unwrap().len(), 16);
        assert_eq!(units_for_modulus(m).unwrap().len(), 15);

        // x^2 + x = x(x+1): four residues, one unit
        let m = F2Poly::new(0x6);
        assert_eq!(elements_for_modulus(m).unwrap().len(), 4);
        let units = units_for_modulus(m).unwrap();
        assert_eq!(units.len(), 1);
        assert!(units[0].is_one());
        assert!(elements_for_modulus(F2Poly::new(0)).is_err());
    }
}
