//! # Polynomials over GF(2)
//!
//! [`F2Poly`] packs coefficients into a `u64`: bit `j` is the
//! coefficient of `x^j`, so the maximum degree is 63. Addition is XOR
//! (characteristic 2), multiplication and division are shift-and-XOR.
//!
//! By convention the zero polynomial has degree 0, not -1/undefined.
//! This is load-bearing: the square-root recursion base case in
//! [`factor`] depends on it.

pub mod factor;

use crate::errors::FfringError;

use rand::Rng;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct F2Poly {
    bits: u64,
}

fn bit_degree(bits: u64) -> usize {
    if bits == 0 {
        0
    } else {
        63 - bits.leading_zeros() as usize
    }
}

fn bit_mul(this: u64, that: u64) -> u64 {
    let mut c = 0u64;
    let mut ashift = this;
    for j in 0..=bit_degree(that) {
        if (that >> j) & 1 == 1 {
            c ^= ashift;
        }
        ashift <<= 1;
    }
    c
}

// Binary long division. The divisor must be nonzero.
pub(crate) fn bit_quo_rem(this: u64, that: u64) -> (u64, u64) {
    let divisor_l1_pos = bit_degree(that);
    if this == 0 {
        return (0, 0);
    }
    let dividend_l1_pos = bit_degree(this);
    if dividend_l1_pos < divisor_l1_pos {
        return (0, this);
    }
    let l1_diff = dividend_l1_pos - divisor_l1_pos;
    let mut shift_divisor = that << l1_diff;
    let mut quot = 0u64;
    let mut rem = this;
    let mut check_pos = dividend_l1_pos as i64;
    let mut quot_pos = l1_diff as i64;
    while check_pos >= divisor_l1_pos as i64 {
        if (rem >> check_pos) & 1 == 1 {
            rem ^= shift_divisor;
            quot |= 1 << quot_pos;
        }
        shift_divisor >>= 1;
        check_pos -= 1;
        quot_pos -= 1;
    }
    (quot, rem)
}

impl F2Poly {
    pub fn new(bits: u64) -> Self {
        F2Poly { bits }
    }

    /// Parse from bare hex digits, the literal convention for GF(2)
    /// polynomials. A `0x` prefix is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// # use ffring::F2Poly;
    /// let f = F2Poly::from_hex("13").unwrap();
    /// assert_eq!(f.degree(), 4); // x^4 + x + 1
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, FfringError> {
        let bits = u64::from_str_radix(s, 16)
            .map_err(|e| FfringError::Parse(format!("bad GF(2) polynomial literal {:?}: {}", s, e)))?;
        Ok(F2Poly { bits })
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn is_zero(&self) -> bool {
        self.bits == 0
    }

    pub fn is_one(&self) -> bool {
        self.bits == 1
    }

    /// The index of the most-significant set bit. The zero polynomial
    /// has degree 0 by convention.
    pub fn degree(&self) -> usize {
        bit_degree(self.bits)
    }

    /// The coefficient of `x^j`, as 0 or 1.
    pub fn coeff(&self, j: usize) -> u64 {
        if j > 63 { 0 } else { (self.bits >> j) & 1 }
    }

    /// Quotient and remainder of division by `other`.
    ///
    /// Returns `(0, self)` unchanged when the dividend's degree is below
    /// the divisor's.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` on a zero divisor.
    ///
    /// # Example
    ///
    /// ```
    /// # use ffring::F2Poly;
    /// let a = F2Poly::new(0x13);
    /// let b = F2Poly::new(0x3);
    /// let (q, r) = a.quo_rem(&b).unwrap();
    /// assert_eq!(q * b + r, a);
    /// ```
    pub fn quo_rem(&self, other: &F2Poly) -> Result<(F2Poly, F2Poly), FfringError> {
        if other.bits == 0 {
            return Err(FfringError::DivisionByZero(
                "GF(2) polynomial division by zero".to_string(),
            ));
        }
        let (q, r) = bit_quo_rem(self.bits, other.bits);
        Ok((F2Poly { bits: q }, F2Poly { bits: r }))
    }

    pub fn quo(&self, other: &F2Poly) -> Result<F2Poly, FfringError> {
        Ok(self.quo_rem(other)?.0)
    }

    pub fn rem(&self, other: &F2Poly) -> Result<F2Poly, FfringError> {
        Ok(self.quo_rem(other)?.1)
    }

    /// `self**e` by square-and-multiply, O(log e) multiplications.
    ///
    /// # Errors
    ///
    /// `ZeroToZero` for `0**0`; `DivisionByZero` for a negative power of
    /// zero; `NegativeExponent` otherwise for `e < 0`.
    pub fn pow(&self, e: i64) -> Result<F2Poly, FfringError> {
        if self.bits == 0 {
            if e == 0 {
                return Err(FfringError::ZeroToZero);
            }
            if e < 0 {
                return Err(FfringError::DivisionByZero(
                    "negative power of the zero polynomial".to_string(),
                ));
            }
            return Ok(F2Poly { bits: 0 });
        }
        if e < 0 {
            return Err(FfringError::NegativeExponent(format!(
                "negative exponent {} disallowed for GF(2) polynomials",
                e
            )));
        }
        let mut e = e;
        let mut rv = F2Poly { bits: 1 };
        let mut xp = *self;
        while e != 0 {
            if e & 1 == 1 {
                rv = rv * xp;
            }
            e >>= 1;
            xp = xp * xp;
        }
        Ok(rv)
    }

    /// Polynomial gcd by the Euclidean algorithm.
    pub fn gcd(&self, other: &F2Poly) -> F2Poly {
        if self.bits == 0 {
            return *other;
        }
        if other.bits == 0 {
            return *self;
        }
        let (mut c, mut d) = (self.bits, other.bits);
        loop {
            let (_, r) = bit_quo_rem(c, d);
            if r == 0 {
                break;
            }
            c = d;
            d = r;
        }
        F2Poly { bits: d }
    }

    pub fn lcm(&self, other: &F2Poly) -> Result<F2Poly, FfringError> {
        (*self * *other).quo(&self.gcd(other))
    }

    /// Extended Euclidean algorithm (Blankinship form).
    ///
    /// Returns `(g, s, t)` with `g = s*self + t*other` (the ring sum is
    /// XOR).
    pub fn ext_gcd(&self, other: &F2Poly) -> (F2Poly, F2Poly, F2Poly) {
        if self.bits == 0 {
            return (*other, F2Poly { bits: 0 }, F2Poly { bits: 1 });
        }
        if other.bits == 0 {
            return (*self, F2Poly { bits: 1 }, F2Poly { bits: 0 });
        }
        let (mut sprime, mut t) = (1u64, 1u64);
        let (mut s, mut tprime) = (0u64, 0u64);
        let (mut c, mut d) = (self.bits, other.bits);
        loop {
            let (q, r) = bit_quo_rem(c, d);
            if r == 0 {
                break;
            }
            c = d;
            d = r;

            let tmp = sprime;
            sprime = s;
            s = tmp ^ bit_mul(q, s);

            let tmp = tprime;
            tprime = t;
            t = tmp ^ bit_mul(q, t);
        }
        (F2Poly { bits: d }, F2Poly { bits: s }, F2Poly { bits: t })
    }

    /// The formal derivative: `d/dx x^j = j*x^(j-1)`, which mod 2 keeps
    /// exactly the odd-position coefficients, shifted down one.
    pub fn deriv(&self) -> F2Poly {
        F2Poly {
            bits: (self.bits >> 1) & 0x5555_5555_5555_5555,
        }
    }

    /// The square root, when `self` is a perfect square.
    ///
    /// In characteristic 2 a polynomial is a square exactly when every
    /// odd-position coefficient is zero (it is a polynomial in `x^2`);
    /// the root keeps each even-position bit at half its position.
    /// Returns `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use ffring::F2Poly;
    /// // (x^2 + x + 1)^2 = x^4 + x^2 + 1
    /// assert_eq!(F2Poly::new(0x15).square_root(), Some(F2Poly::new(0x7)));
    /// assert_eq!(F2Poly::new(0x2).square_root(), None);
    /// ```
    pub fn square_root(&self) -> Option<F2Poly> {
        let deg = self.degree();
        let mut sqroot_bits = 0u64;
        let mut inbit = 1u64;
        let mut outbit = 1u64;
        let mut si = 0;
        while si <= deg {
            if self.bits & inbit != 0 {
                sqroot_bits |= outbit;
            }
            inbit <<= 1;
            if self.bits & inbit != 0 {
                return None;
            }
            inbit <<= 1;
            outbit <<= 1;
            si += 2;
        }
        Some(F2Poly { bits: sqroot_bits })
    }

    /// A uniformly random monic polynomial of exactly the given degree.
    pub fn random<R: Rng + ?Sized>(degree: usize, rng: &mut R) -> Result<F2Poly, FfringError> {
        if degree > 63 {
            return Err(FfringError::InvalidArgument(format!(
                "random polynomial degree must be at most 63, got {}",
                degree
            )));
        }
        let msb = 1u64 << degree;
        Ok(F2Poly {
            bits: msb | rng.random_range(0..msb.max(1)),
        })
    }
}

impl Add for F2Poly {
    type Output = F2Poly;

    fn add(self, other: F2Poly) -> F2Poly {
        F2Poly {
            bits: self.bits ^ other.bits,
        }
    }
}

impl Sub for F2Poly {
    type Output = F2Poly;

    // identical to addition in characteristic 2
    fn sub(self, other: F2Poly) -> F2Poly {
        self + other
    }
}

impl Neg for F2Poly {
    type Output = F2Poly;

    fn neg(self) -> F2Poly {
        self
    }
}

impl Mul for F2Poly {
    type Output = F2Poly;

    fn mul(self, other: F2Poly) -> F2Poly {
        F2Poly {
            bits: bit_mul(self.bits, other.bits),
        }
    }
}

impl num_traits::One for F2Poly {
    fn one() -> Self {
        F2Poly { bits: 1 }
    }

    fn is_one(&self) -> bool {
        self.bits == 1
    }
}

impl FromStr for F2Poly {
    type Err = FfringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        F2Poly::from_hex(s)
    }
}

impl fmt::Display for F2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.bits)
    }
}

impl fmt::Binary for F2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.bits)
    }
}
