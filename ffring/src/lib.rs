//! # ffring
//!
//! Exact arithmetic over the residue rings Z/nZ and the GF(2)-coefficient
//! polynomial ring F2[x], optionally reduced modulo a fixed polynomial m(x).
//! Includes Berlekamp's factorization algorithm for GF(2) polynomials,
//! multiplicative-order computation, and primitive-element search.
//!
//! Integers are `i64`; polynomials are bit-packed in a `u64` (degree <= 63).
//! Arbitrary precision is out of scope.

pub mod bits;
pub mod errors;
pub mod f2poly;
pub mod f2polymod;
pub mod factorization;
pub mod intmath;
pub mod intmod;
pub mod numeric;
pub mod order;

pub use bits::{BitMatrix, BitVector};
pub use errors::FfringError;
pub use f2poly::F2Poly;
pub use f2polymod::F2PolyMod;
pub use factorization::Factorization;
pub use intmod::IntMod;
pub use numeric::Numeric;
