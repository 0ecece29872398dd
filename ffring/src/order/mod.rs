//! # Multiplicative orders, orbits, and generators
//!
//! Free functions over [`IntMod`] and [`F2PolyMod`] units: the order of
//! an element, the maximum order in the unit group, cyclic orbits,
//! generator search, and the period/primitivity notions for GF(2)
//! polynomials.
//!
//! Order search runs over the divisors of the group order in ascending
//! order; by Lagrange the element order is among them, so exhaustion is
//! an internal-consistency failure and panics.

use crate::errors::FfringError;
use crate::f2poly::{self, F2Poly};
use crate::f2polymod::{self, F2PolyMod};
use crate::intmath;
use crate::intmod::{self, IntMod};

/// The multiplicative order of a unit mod `m`.
///
/// # Errors
///
/// `ZeroDivisor` when the residue is not coprime to the modulus.
///
/// # Example
///
/// ```
/// # use ffring::IntMod;
/// # use ffring::order::int_mod_order;
/// let a = IntMod::try_with(2, 11).unwrap();
/// assert_eq!(int_mod_order(&a).unwrap(), 10);
/// ```
pub fn int_mod_order(a: &IntMod) -> Result<i64, FfringError> {
    let m = a.modulus();
    if intmath::gcd(a.residue(), m) != 1 {
        return Err(FfringError::ZeroDivisor(format!(
            "{} is a zero divisor mod {}",
            a.residue(),
            m
        )));
    }
    if m == 1 {
        // the trivial group
        return Ok(1);
    }
    let phi = intmath::factor::totient(m);
    for d in intmath::factor::factor(phi).all_divisors() {
        if a.pow(d)?.is_one() {
            return Ok(d);
        }
    }
    panic!("coding error detected: int_mod_order");
}

/// The maximum multiplicative order attained by any unit mod `m`
/// (the Carmichael function at `m`).
pub fn int_mod_max_order(m: i64) -> Result<i64, FfringError> {
    let mut max = 1;
    for u in intmod::units_for_modulus(m)? {
        let d = int_mod_order(&u)?;
        if d > max {
            max = d;
        }
    }
    Ok(max)
}

/// The orbit of `a`: the cycle `a*b, a^2*b, ...` around to `b` itself,
/// which closes the list. The fixed multiplier `b` defaults to 1.
///
/// # Errors
///
/// `ZeroDivisor` when `a` is not a unit (its powers would never cycle
/// back).
pub fn int_mod_orbit(a: &IntMod, b: Option<&IntMod>) -> Result<Vec<IntMod>, FfringError> {
    let m = a.modulus();
    if intmath::gcd(a.residue(), m) != 1 {
        return Err(FfringError::ZeroDivisor(format!(
            "{} is a zero divisor mod {}",
            a.residue(),
            m
        )));
    }
    let base = match b {
        Some(b) => *b,
        None => IntMod::try_with(1, m)?,
    };
    let mut orbit = Vec::new();
    let mut cur = *a * base;
    loop {
        orbit.push(cur);
        if cur == base {
            break;
        }
        cur = cur * *a;
    }
    Ok(orbit)
}

/// The smallest generator of the unit group mod `m`, or `None` when the
/// group is not cyclic.
///
/// A unit `u` generates exactly when `u**(phi/p)` is not 1 for every
/// prime `p` dividing `phi(m)`.
///
/// # Example
///
/// ```
/// # use ffring::IntMod;
/// # use ffring::order::int_mod_generator;
/// let g = int_mod_generator(7).unwrap();
/// assert_eq!(g.map(|u| u.residue()), Some(3));
/// assert!(int_mod_generator(8).unwrap().is_none());
/// ```
pub fn int_mod_generator(m: i64) -> Result<Option<IntMod>, FfringError> {
    let units = intmod::units_for_modulus(m)?;
    let phi = units.len() as i64;
    let checks = intmath::factor::factor(phi).maximal_proper_divisors();
    for u in units {
        let mut generates = true;
        for &d in &checks {
            if u.pow(d)?.is_one() {
                generates = false;
                break;
            }
        }
        if generates {
            return Ok(Some(u));
        }
    }
    Ok(None)
}

/// The multiplicative order of a unit in F2[x]/(m).
///
/// # Errors
///
/// `ZeroDivisor` when the residue is not coprime to the modulus.
pub fn f2_poly_mod_order(a: &F2PolyMod) -> Result<i64, FfringError> {
    let m = a.modulus();
    if !a.residue().gcd(&m).is_one() {
        return Err(FfringError::ZeroDivisor(format!(
            "{} is a zero divisor mod {}",
            a.residue(),
            m
        )));
    }
    if m.is_one() {
        return Ok(1);
    }
    let phi = f2poly::factor::totient(&m);
    for d in intmath::factor::factor(phi).all_divisors() {
        if a.pow(d)?.is_one() {
            return Ok(d);
        }
    }
    panic!("coding error detected: f2_poly_mod_order");
}

/// The maximum multiplicative order attained by any unit of F2[x]/(m).
pub fn f2_poly_max_order(m: F2Poly) -> Result<i64, FfringError> {
    let mut max = 1;
    for u in f2polymod::units_for_modulus(m)? {
        let d = f2_poly_mod_order(&u)?;
        if d > max {
            max = d;
        }
    }
    Ok(max)
}

/// The orbit of `a` in F2[x]/(m): the cycle `a*b, a^2*b, ...` around to
/// `b` itself, which closes the list. The fixed multiplier `b` defaults
/// to 1.
pub fn f2_poly_mod_orbit(
    a: &F2PolyMod,
    b: Option<&F2PolyMod>,
) -> Result<Vec<F2PolyMod>, FfringError> {
    let m = a.modulus();
    if !a.residue().gcd(&m).is_one() {
        return Err(FfringError::ZeroDivisor(format!(
            "{} is a zero divisor mod {}",
            a.residue(),
            m
        )));
    }
    let base = match b {
        Some(b) => *b,
        None => F2PolyMod::try_with(F2Poly::new(1), m)?,
    };
    let mut orbit = Vec::new();
    let mut cur = *a * base;
    loop {
        orbit.push(cur);
        if cur == base {
            break;
        }
        cur = cur * *a;
    }
    Ok(orbit)
}

/// The smallest (by bit pattern) generator of the unit group of
/// F2[x]/(m), or `None` when the group is not cyclic.
pub fn f2_poly_mod_generator(m: F2Poly) -> Result<Option<F2PolyMod>, FfringError> {
    let units = f2polymod::units_for_modulus(m)?;
    let phi = units.len() as i64;
    let checks = intmath::factor::factor(phi).maximal_proper_divisors();
    for u in units {
        let mut generates = true;
        for &d in &checks {
            if u.pow(d)?.is_one() {
                generates = false;
                break;
            }
        }
        if generates {
            return Ok(Some(u));
        }
    }
    Ok(None)
}

/// The period of `f`: the least `n >= 1` with `f` dividing `x^n + 1`,
/// which is the order of `x` mod `f`. Zero when no such `n` exists
/// (zero constant term, where `x` is a zero divisor) or `f` is
/// constant.
///
/// # Example
///
/// ```
/// # use ffring::F2Poly;
/// # use ffring::order::f2_poly_period;
/// assert_eq!(f2_poly_period(&F2Poly::new(0x13)), 15);
/// assert_eq!(f2_poly_period(&F2Poly::new(0x1f)), 5);
/// assert_eq!(f2_poly_period(&F2Poly::new(0x6)), 0);
/// ```
pub fn f2_poly_period(f: &F2Poly) -> i64 {
    if f.degree() == 0 || f.coeff(0) == 0 {
        return 0;
    }
    let x = match F2PolyMod::try_with(F2Poly::new(0x2), *f) {
        Ok(x) => x,
        Err(_) => return 0,
    };
    match f2_poly_mod_order(&x) {
        Ok(d) => d,
        Err(_) => 0,
    }
}

/// Primitivity: `x` must be coprime to `f`, satisfy `x**(phi/p)` not 1
/// for every prime `p` dividing `phi(f)`, and `x**phi = 1`. That is,
/// `x` generates the unit group of F2[x]/(f). The modulus need not be
/// irreducible.
///
/// # Example
///
/// ```
/// # use ffring::F2Poly;
/// # use ffring::order::f2_poly_primitive;
/// assert!(f2_poly_primitive(&F2Poly::new(0x13)));
/// assert!(!f2_poly_primitive(&F2Poly::new(0x1f))); // irreducible, period 5
/// assert!(f2_poly_primitive(&F2Poly::new(0x9))); // reducible, x generates
/// ```
pub fn f2_poly_primitive(f: &F2Poly) -> bool {
    let x = F2Poly::new(0x2);
    if !x.gcd(f).is_one() {
        return false;
    }
    let xm = match F2PolyMod::try_with(x, *f) {
        Ok(xm) => xm,
        Err(_) => return false,
    };
    let phi = f2poly::factor::totient(f);
    for d in intmath::factor::factor(phi).maximal_proper_divisors() {
        match xm.pow(d) {
            Ok(p) if !p.is_one() => {}
            _ => return false,
        }
    }
    matches!(xm.pow(phi), Ok(p) if p.is_one())
}
