//! Integer factorization by trial division, and the factorization-based
//! totient.

use crate::factorization::Factorization;

/// Factor `n` by trial division: 2 first, then odd candidates against
/// the shrinking remainder. The sign (or the whole value, for
/// `|n| <= 1`) is recorded as a trivial factor.
///
/// # Example
///
/// ```
/// # use ffring::intmath::factor::factor;
/// let f = factor(72);
/// assert_eq!(f.get(0), (2, 3));
/// assert_eq!(f.get(1), (3, 2));
/// assert_eq!(f.unfactor(), 72);
/// ```
pub fn factor(n: i64) -> Factorization<i64> {
    let mut finfo = Factorization::new();
    if (-1..=1).contains(&n) {
        finfo.insert_trivial_factor(n);
        return finfo;
    }
    let mut n = n;
    if n < 0 {
        finfo.insert_trivial_factor(-1);
        n = -n;
    }
    let mut p = 2i64;
    while n > 1 {
        let mut multiplicity = 0;
        while n % p == 0 {
            multiplicity += 1;
            n /= p;
        }
        if multiplicity > 0 {
            finfo.insert_factor(p, multiplicity);
        }
        p = if p > 2 { p + 2 } else { 3 };
    }
    finfo
}

/// Euler's totient from the factor list: `n * prod(1 - 1/p)` over the
/// distinct primes `p` of `n`.
///
/// # Example
///
/// ```
/// # use ffring::intmath::factor::totient;
/// assert_eq!(totient(72), 24);
/// assert_eq!(totient(11), 10);
/// ```
pub fn totient(n: i64) -> i64 {
    let finfo = factor(n);
    let mut rv = n;
    for &(p, _) in finfo.iter() {
        rv = rv / p * (p - 1);
    }
    rv
}
