//! # GF(2) linear algebra
//!
//! Fixed-width bit vectors and bit matrices with row reduction and
//! nullspace (kernel) extraction over GF(2). These back Berlekamp's
//! factorization algorithm in [`crate::f2poly::factor`].

pub mod bit_matrix;
pub mod bit_vector;

pub use bit_matrix::BitMatrix;
pub use bit_vector::BitVector;
