//! # The residue ring Z/mZ
//!
//! [`IntMod`] is an immutable value type: a residue held in
//! `[0, modulus)` together with its fixed positive modulus. Every
//! operation re-normalizes its result into range.

use crate::errors::FfringError;
use crate::intmath;

use rand::Rng;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntMod {
    residue: i64,
    modulus: i64,
}

impl IntMod {
    /// Create a residue class mod `modulus`.
    ///
    /// The modulus must be positive; the residue may be any integer and
    /// is normalized into `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ffring::IntMod;
    /// let a = IntMod::try_with(-3, 10).unwrap();
    /// assert_eq!(a.residue(), 7);
    /// assert!(IntMod::try_with(1, 0).is_err());
    /// ```
    pub fn try_with(residue: i64, modulus: i64) -> Result<Self, FfringError> {
        if modulus <= 0 {
            return Err(FfringError::InvalidModulus(format!(
                "modulus must be positive, got {}",
                modulus
            )));
        }
        Ok(Self::reduce(residue, modulus))
    }

    fn reduce(residue: i64, modulus: i64) -> Self {
        IntMod {
            residue: residue.rem_euclid(modulus),
            modulus,
        }
    }

    pub fn residue(&self) -> i64 {
        self.residue
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.residue == 0
    }

    pub fn is_one(&self) -> bool {
        self.residue == 1
    }

    fn check_same_modulus(&self, other: &IntMod) {
        if self.modulus != other.modulus {
            panic!(
                "IntMod modulus mismatch: {} vs {}",
                self.modulus, other.modulus
            );
        }
    }

    /// The multiplicative inverse, along the Fermat/Euler path
    /// (`a**(phi(m)-1) mod m`).
    ///
    /// # Errors
    ///
    /// `NoInverse` unless `gcd(residue, modulus) == 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ffring::IntMod;
    /// let a = IntMod::try_with(3, 11).unwrap();
    /// assert_eq!((a * a.recip().unwrap()).residue(), 1);
    /// ```
    pub fn recip(&self) -> Result<IntMod, FfringError> {
        let r = intmath::mod_recip(self.residue, self.modulus)?;
        Ok(Self::reduce(r, self.modulus))
    }

    /// `self / other`, via the inverse of `other`.
    pub fn div(&self, other: &IntMod) -> Result<IntMod, FfringError> {
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
    pub fn pow(&self, e: i64) -> Result<IntMod, FfringError> {
        if self.residue == 0 {
            if e == 0 {
                return Err(FfringError::ZeroToZero);
            }
            if e < 0 {
                return Err(FfringError::DivisionByZero(format!(
                    "negative power of zero mod {}",
                    self.modulus
                )));
            }
            return Ok(Self::reduce(0, self.modulus));
        }
        let mut xp = *self;
        let mut e = e;
        if e < 0 {
            xp = xp.recip()?;
            e = -e;
        }
        let mut rv = Self::reduce(1, self.modulus);
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
    pub fn random<R: Rng + ?Sized>(m: i64, rng: &mut R) -> Result<IntMod, FfringError> {
        if m <= 0 {
            return Err(FfringError::InvalidModulus(format!(
                "modulus must be positive, got {}",
                m
            )));
        }
        Ok(Self::reduce(rng.random_range(0..m), m))
    }
}

impl Add for IntMod {
    type Output = IntMod;

    fn add(self, other: IntMod) -> IntMod {
        self.check_same_modulus(&other);
        // i128 intermediate so residues near 2^63 cannot overflow
        let r = (self.residue as i128 + other.residue as i128).rem_euclid(self.modulus as i128);
        Self::reduce(r as i64, self.modulus)
    }
}

impl Sub for IntMod {
    type Output = IntMod;

    fn sub(self, other: IntMod) -> IntMod {
        self.check_same_modulus(&other);
        let r = (self.residue as i128 - other.residue as i128).rem_euclid(self.modulus as i128);
        Self::reduce(r as i64, self.modulus)
    }
}

impl Mul for IntMod {
    type Output = IntMod;

    fn mul(self, other: IntMod) -> IntMod {
        self.check_same_modulus(&other);
        // i128 intermediate so residues near 2^63 cannot overflow
        let r = (self.residue as i128 * other.residue as i128).rem_euclid(self.modulus as i128);
        Self::reduce(r as i64, self.modulus)
    }
}

impl Neg for IntMod {
    type Output = IntMod;

    fn neg(self) -> IntMod {
        Self::reduce(-self.residue, self.modulus)
    }
}

impl fmt::Display for IntMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.residue)
    }
}

/// All residues mod `m`, ascending.
pub fn elements_for_modulus(m: i64) -> Result<Vec<IntMod>, FfringError> {
    if m <= 0 {
        return Err(FfringError::InvalidModulus(format!(
            "modulus must be positive, got {}",
            m
        )));
    }
    Ok((0..m).map(|a| IntMod::reduce(a, m)).collect())
}

/// The units mod `m`: residues coprime to `m`, ascending.
pub fn units_for_modulus(m: i64) -> Result<Vec<IntMod>, FfringError> {
    if m <= 0 {
        return Err(FfringError::InvalidModulus(format!(
            "modulus must be positive, got {}",
            m
        )));
    }
    Ok((0..m)
        .filter(|&a| intmath::gcd(a, m) == 1)
        .map(|a| IntMod::reduce(a, m))
        .collect())
}
