//! # The arithmetic capability contract
//!
//! [`Numeric`] is the seam between this crate and an expression
//! evaluator: a ring instance plus the handful of operations an
//! evaluator needs, parameterized by a value type and an exponent type.
//! The exponent type differs from the value type for the modular rings,
//! where exponents are plain integers while values are residues.
//!
//! Five backends implement the contract: plain integers
//! ([`IntNumeric`]), two takes on Z/nZ ([`ResidueNumeric`] on raw `i64`
//! residues with an extended-Euclid inverse, [`IntModNumeric`] wrapping
//! [`crate::IntMod`] with its Fermat/Euler inverse), GF(2) polynomials
//! ([`F2PolyNumeric`]), and F2[x]/(m) ([`F2PolyModNumeric`]). An
//! evaluator drives whichever instance it is handed and never learns
//! the concrete ring.

pub mod f2_poly;
pub mod f2_poly_mod;
pub mod int;
pub mod int_mod;
pub mod residue;

pub use f2_poly::F2PolyNumeric;
pub use f2_poly_mod::F2PolyModNumeric;
pub use int::IntNumeric;
pub use int_mod::IntModNumeric;
pub use residue::ResidueNumeric;

use crate::errors::FfringError;

use std::fmt;

pub trait Numeric {
    type Value: Copy + PartialEq + fmt::Debug;
    type Exponent: Copy;

    /// Parse a literal in the ring's radix convention.
    fn from_string(&self, lexeme: &str) -> Result<Self::Value, FfringError>;

    /// Parse a literal exponent directly, without a round trip through
    /// [`Numeric::to_exponent`].
    fn parse_exponent(&self, lexeme: &str) -> Result<Self::Exponent, FfringError>;

    fn render(&self, a: &Self::Value) -> String;

    fn add(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

    fn subtract(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

    fn multiply(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

    /// Fails on division by zero or a non-invertible divisor.
    fn divide(&self, a: &Self::Value, b: &Self::Value) -> Result<Self::Value, FfringError>;

    /// Fails on modulo by zero, and unconditionally for quotient-ring
    /// backends where a remainder is not independently meaningful.
    fn modulo(&self, a: &Self::Value, b: &Self::Value) -> Result<Self::Value, FfringError>;

    /// Fails on disallowed base/exponent combinations (`0**0`,
    /// unsupported negative exponents).
    fn exponentiate(
        &self,
        a: &Self::Value,
        e: &Self::Exponent,
    ) -> Result<Self::Value, FfringError>;

    /// Convert a computed value into an exponent; fails if out of range.
    fn to_exponent(&self, a: &Self::Value) -> Result<Self::Exponent, FfringError>;

    fn negate(&self, a: &Self::Value) -> Self::Value;
}

/// Parse a signed integer literal with the usual radix prefixes:
/// `0x`/`0X` hex, `0b`/`0B` binary, `0o`/`0O` octal, decimal otherwise.
pub(crate) fn parse_int_auto(lexeme: &str) -> Result<i64, FfringError> {
    let bad = |s: &str| FfringError::Parse(format!("bad integer literal {:?}", s));

    let (negative, body) = match lexeme.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, lexeme.strip_prefix('+').unwrap_or(lexeme)),
    };
    let (radix, digits) = if let Some(d) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (16, d)
    } else if let Some(d) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (2, d)
    } else if let Some(d) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        (8, d)
    } else {
        (10, body)
    };
    let magnitude = i64::from_str_radix(digits, radix).map_err(|_| bad(lexeme))?;
    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_auto() {
        assert_eq!(parse_int_auto("42").unwrap(), 42);
        assert_eq!(parse_int_auto("-42").unwrap(), -42);
        assert_eq!(parse_int_auto("+7").unwrap(), 7);
        assert_eq!(parse_int_auto("0x1f").unwrap(), 31);
        assert_eq!(parse_int_auto("0X1F").unwrap(), 31);
        assert_eq!(parse_int_auto("-0b101").unwrap(), -5);
        assert_eq!(parse_int_auto("0o17").unwrap(), 15);
        assert!(parse_int_auto("").is_err());
        assert!(parse_int_auto("0x").is_err());
        assert!(parse_int_auto("12three").is_err());
    }
}
