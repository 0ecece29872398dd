//! # Integer arithmetic helpers
//!
//! gcd / extended gcd / lcm, Euler's totient (with an explicit memo
//! cache), integer and modular exponentiation, and factorials, all over
//! `i64`. Trial-division factorization lives in [`factor`].

pub mod factor;

use crate::errors::FfringError;

use std::collections::HashMap;

/// Greatest common divisor. Always non-negative.
///
/// # Example
///
/// ```
/// # use ffring::intmath::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-4, 6), 2);
/// assert_eq!(gcd(0, 5), 5);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    if a == 0 {
        return b.abs();
    }
    if b == 0 {
        return a.abs();
    }
    let (mut a, mut b) = (a, b);
    loop {
        let r = a % b;
        if r == 0 {
            break;
        }
        a = b;
        b = r;
    }
    b.abs()
}

/// Extended gcd (Blankinship's algorithm).
///
/// Returns `(d, m, n)` with `d = a*m + b*n`.
///
/// # Example
///
/// ```
/// # use ffring::intmath::ext_gcd;
/// let (d, m, n) = ext_gcd(4, 6);
/// assert_eq!(d, 2);
/// assert_eq!(4 * m + 6 * n, 2);
/// ```
pub fn ext_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }
    if a == 0 {
        return (b, 0, 1);
    }
    let (mut mprime, mut n) = (1i64, 1i64);
    let (mut m, mut nprime) = (0i64, 0i64);
    let (mut c, mut d) = (a, b);
    loop {
        let q = c / d;
        let r = c % d;
        if r == 0 {
            break;
        }
        c = d;
        d = r;

        let t = mprime;
        mprime = m;
        m = t - q * m;

        let t = nprime;
        nprime = n;
        n = t - q * n;
    }
    (d, m, n)
}

/// Least common multiple.
pub fn lcm(a: i64, b: i64) -> i64 {
    a * b / gcd(a, b)
}

/// Euler's totient by brute-force coprimality counting: the number of
/// `i` in `1..n` with `gcd(n, i) == 1`. Returns 0 for `n <= 1`.
///
/// O(n log n); see [`EulerPhiCache`] for memoized repeat queries and
/// [`factor::totient`] for the factorization-based fast path.
pub fn euler_phi(n: i64) -> i64 {
    if n <= 1 {
        return 0;
    }
    let mut phi = 0;
    for i in 1..n {
        if gcd(n, i) == 1 {
            phi += 1;
        }
    }
    phi
}

/// Memo cache for [`euler_phi`].
///
/// Growth is unbounded for the cache's lifetime; the caller owns the
/// cache and decides when to drop it. Suitable for bounded calculator
/// workloads, not for a long-running service without eviction.
#[derive(Debug, Default, Clone)]
pub struct EulerPhiCache {
    cache: HashMap<i64, i64>,
}

impl EulerPhiCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phi(&mut self, n: i64) -> i64 {
        *self.cache.entry(n).or_insert_with(|| euler_phi(n))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// `x**e` over the integers by square-and-multiply.
///
/// # Errors
///
/// Negative exponents are disallowed; overflow of `i64` is reported
/// rather than wrapped.
pub fn int_exp(x: i64, e: i64) -> Result<i64, FfringError> {
    if e < 0 {
        return Err(FfringError::NegativeExponent(format!(
            "int_exp: negative exponent {} disallowed",
            e
        )));
    }
    let mut e = e;
    let mut xp = x;
    let mut rv = 1i64;
    while e != 0 {
        if e & 1 == 1 {
            rv = rv.checked_mul(xp).ok_or(FfringError::CalculationOverflow)?;
        }
        e >>= 1;
        if e != 0 {
            xp = xp.checked_mul(xp).ok_or(FfringError::CalculationOverflow)?;
        }
    }
    Ok(rv)
}

/// `x**e mod m` by square-and-multiply, `i128` intermediates.
///
/// A negative exponent inverts `x` first via [`mod_recip`].
pub fn mod_exp(x: i64, e: i64, m: i64) -> Result<i64, FfringError> {
    let (mut x, mut e) = (x, e);
    if e < 0 {
        x = mod_recip(x, m)?;
        e = -e;
    }
    let m128 = m as i128;
    let mut xp = (x as i128).rem_euclid(m128);
    let mut rv = 1i128.rem_euclid(m128);
    while e != 0 {
        if e & 1 == 1 {
            rv = (rv * xp) % m128;
        }
        e >>= 1;
        xp = (xp * xp) % m128;
    }
    Ok(rv as i64)
}

/// Multiplicative inverse of `x` mod `m` along the Fermat/Euler path:
/// `x**(phi(m)-1) mod m`.
///
/// This costs an O(m) totient plus O(log m) multiplications, materially
/// more than an extended-Euclid inverse, and is kept deliberately. The
/// cheap path is the `ext_gcd`-based inverse in
/// [`crate::numeric::residue`].
///
/// # Errors
///
/// `NoInverse` when `gcd(x, m) != 1`.
pub fn mod_recip(x: i64, m: i64) -> Result<i64, FfringError> {
    let g = gcd(x, m);
    if g != 1 {
        return Err(FfringError::NoInverse(format!(
            "impossible inverse: gcd({}, {}) = {}",
            x, m, g
        )));
    }
    if m == 1 {
        return Ok(0);
    }
    let phi = euler_phi(m);
    mod_exp(x, phi - 1, m)
}

/// `n!`.
///
/// # Errors
///
/// Negative inputs are disallowed; overflow of `i64` is reported.
pub fn factorial(n: i64) -> Result<i64, FfringError> {
    if n < 0 {
        return Err(FfringError::InvalidArgument(format!(
            "factorial: negative input {} disallowed",
            n
        )));
    }
    let mut rv = 1i64;
    for k in 2..=n {
        rv = rv.checked_mul(k).ok_or(FfringError::CalculationOverflow)?;
    }
    Ok(rv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(13, 7), 1);
    }

    #[quickcheck]
    fn prop_ext_gcd_bezout(a: i32, b: i32) -> bool {
        let (a, b) = (a as i64, b as i64);
        let (d, m, n) = ext_gcd(a, b);
        d == a * m + b * n && d.abs() == gcd(a, b)
    }

    #[quickcheck]
    fn prop_gcd_divides(a: i32, b: i32) -> bool {
        let (a, b) = (a as i64, b as i64);
        let g = gcd(a, b);
        if g == 0 {
            a == 0 && b == 0
        } else {
            a % g == 0 && b % g == 0
        }
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(5, 7), 35);
    }

    #[test]
    fn test_euler_phi() {
        // phi(n) for n = 0..=12, with the n <= 1 convention of 0
        let expected = [0, 0, 1, 2, 2, 4, 2, 6, 4, 6, 4, 10, 4];
        for (n, &e) in expected.iter().enumerate() {
            assert_eq!(euler_phi(n as i64), e, "phi({})", n);
        }
    }

    #[test]
    fn test_phi_cache() {
        let mut cache = EulerPhiCache::new();
        assert_eq!(cache.phi(12), 4);
        assert_eq!(cache.phi(12), 4);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.phi(7), 6);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_int_exp() {
        assert_eq!(int_exp(2, 10).unwrap(), 1024);
        assert_eq!(int_exp(7, 0).unwrap(), 1);
        assert_eq!(int_exp(0, 5).unwrap(), 0);
        assert_eq!(int_exp(-3, 3).unwrap(), -27);
        assert!(int_exp(2, -1).is_err());
        assert!(int_exp(2, 64).is_err());
    }

    #[test]
    fn test_mod_exp() {
        assert_eq!(mod_exp(2, 10, 1000).unwrap(), 24);
        assert_eq!(mod_exp(3, 0, 7).unwrap(), 1);
        assert_eq!(mod_exp(10, 2, 7).unwrap(), 2);
        // negative exponent goes through the inverse
        assert_eq!(mod_exp(3, -1, 7).unwrap(), 5);
    }

    #[test]
    fn test_mod_recip() {
        for a in 1..11 {
            let r = mod_recip(a, 11).unwrap();
            assert_eq!((a * r) % 11, 1);
        }
        assert!(mod_recip(2, 10).is_err());
        assert!(mod_recip(0, 7).is_err());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2432902008176640000);
        assert!(factorial(-1).is_err());
        assert!(factorial(21).is_err());
    }
}
