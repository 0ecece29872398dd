//! Factorization of GF(2) polynomials: square-free decomposition plus
//! Berlekamp subspace splitting, the irreducibility test, searches for
//! irreducible polynomials, and the polynomial totient.
//!
//! The panics in here assert properties that are mathematically
//! guaranteed for valid inputs (kernel dimensions, `h^2 = h` membership
//! in the Berlekamp subalgebra). They are invariant violations, kept
//! deliberately out of the recoverable error channel: reaching one means
//! the linear-algebra core is wrong, and masking that as an ordinary
//! error would hide a correctness bug.

use crate::bits::BitMatrix;
use crate::errors::FfringError;
use crate::f2poly::F2Poly;
use crate::factorization::Factorization;

use rand::Rng;

/// Factor `f` into irreducibles with multiplicity.
///
/// Degree-0 inputs (0 and 1) are their own trivial factor.
///
/// # Example
///
/// ```
/// # use ffring::f2poly::factor::factor;
/// # use ffring::F2Poly;
/// let f = factor(&F2Poly::new(0x4)); // x^2
/// assert_eq!(f.get(0), (F2Poly::new(0x2), 2));
/// ```
pub fn factor(f: &F2Poly) -> Factorization<F2Poly> {
    let mut finfo = Factorization::new();
    if f.degree() == 0 {
        finfo.insert_trivial_factor(*f);
        return finfo;
    }
    pre_berlekamp(f, &mut finfo, true);
    finfo
}

// Square-free reduction wrapped around the Berlekamp core. Splits off
// gcd(f, f') until the remaining piece is square-free, taking square
// roots (doubling multiplicities) when the derivative vanishes.
fn pre_berlekamp(f: &F2Poly, finfo: &mut Factorization<F2Poly>, recurse: bool) {
    let d = f.deriv();
    let g = f.gcd(&d);

    if g.is_zero() {
        // gcd(f, f') = 0 forces f = 0
        if !f.is_zero() {
            panic!("coding error detected: pre_berlekamp");
        }
        finfo.insert_factor(*f, 1);
        return;
    }
    if g.is_one() {
        berlekamp(f, finfo, recurse);
        return;
    }
    if d.is_zero() {
        // f is a perfect square in characteristic 2
        let Some(sqroot) = f.square_root() else {
            panic!("coding error detected: pre_berlekamp");
        };
        let mut sfinfo = Factorization::new();
        pre_berlekamp(&sqroot, &mut sfinfo, recurse);
        sfinfo.exp_all(2);
        finfo.merge(&sfinfo);
        return;
    }
    let q = f.quo(&g).expect("coding error detected: pre_berlekamp");
    pre_berlekamp(&g, finfo, recurse);
    pre_berlekamp(&q, finfo, recurse);
}

// Berlekamp subspace splitting for square-free f of degree n >= 2.
//
// Builds the n x n matrix whose column c holds the coefficients of
// x^(2c) mod f (row i = coefficient of x^i), XORs the identity onto the
// diagonal, and reads the kernel: its dimension counts the distinct
// irreducible factors, and any kernel polynomial h beyond the constants
// splits f as gcd(f, h) * gcd(f, h+1).
fn berlekamp(f: &F2Poly, finfo: &mut Factorization<F2Poly>, recurse: bool) {
    let n = f.degree();
    if n < 2 {
        finfo.insert_factor(*f, 1);
        return;
    }

    let x2modf = F2Poly::new(0x4)
        .rem(f)
        .expect("coding error detected: berlekamp");
    let mut x2i = F2Poly::new(1);

    let mut bi = BitMatrix::try_with(n, n).expect("coding error detected: berlekamp");
    for c in 0..n {
        // indices are in range by construction
        for i in 0..n {
            if x2i.coeff(i) == 1 {
                bi.set(i, c, true).expect("coding error detected: berlekamp");
            }
        }
        x2i = (x2i * x2modf)
            .rem(f)
            .expect("coding error detected: berlekamp");
    }
    for i in 0..n {
        bi.toggle(i, i).expect("coding error detected: berlekamp");
    }

    bi.row_echelon_form();
    let rank = bi.rank_rr();
    let dimker = n - rank;

    if dimker == 1 {
        finfo.insert_factor(*f, 1);
        return;
    }

    let Some(basis) = bi.kernel_basis() else {
        panic!("coding error detected: berlekamp");
    };
    if basis.num_rows() != dimker {
        panic!("coding error detected: berlekamp");
    }

    let one = F2Poly::new(1);
    for row in basis.rows() {
        // kernel columns line up with coefficient positions
        let h = F2Poly::new(row.value());
        let hc = h + one;

        let check1 = (h * h).rem(f).expect("coding error detected: berlekamp");
        let check2 = (hc * hc).rem(f).expect("coding error detected: berlekamp");
        if check1 != h || check2 != hc {
            panic!("coding error detected: berlekamp");
        }

        let f1 = f.gcd(&h);
        let f2 = f.gcd(&hc);
        if f1.is_one() || f2.is_one() {
            continue;
        }

        if dimker == 2 || !recurse {
            finfo.insert_factor(f1, 1);
            finfo.insert_factor(f2, 1);
        } else {
            pre_berlekamp(&f1, finfo, recurse);
            pre_berlekamp(&f2, finfo, recurse);
        }
        return;
    }
    // a square-free composite always yields a nontrivial split
    panic!("coding error detected: berlekamp");
}

/// Irreducibility test: degree 0 is never irreducible, degree 1 always
/// is, and otherwise a single shallow (non-recursive) factor pass must
/// find exactly one factor.
///
/// # Example
///
/// ```
/// # use ffring::f2poly::factor::irr;
/// # use ffring::F2Poly;
/// assert!(irr(&F2Poly::new(0x3)));  // x + 1
/// assert!(!irr(&F2Poly::new(0x4))); // x^2
/// ```
pub fn irr(f: &F2Poly) -> bool {
    if f.degree() == 0 {
        return false;
    }
    if f.degree() == 1 {
        return true;
    }
    let mut finfo = Factorization::new();
    pre_berlekamp(f, &mut finfo, false);
    finfo.num_factors() == 1
}

/// The lexically lowest irreducible polynomial of the given degree, by
/// linear search over candidates with nonzero constant and leading term.
pub fn lowest_irr(degree: usize) -> Result<F2Poly, FfringError> {
    if degree < 1 || degree > 63 {
        return Err(FfringError::InvalidArgument(format!(
            "lowest_irr: degree must be in 1..=63, got {}",
            degree
        )));
    }
    let mut rv = F2Poly::new((1 << degree) | 1);
    while rv.degree() == degree {
        if irr(&rv) {
            return Ok(rv);
        }
        rv = F2Poly::new(rv.bits() + 2);
    }
    panic!("coding error detected: lowest_irr");
}

/// A random irreducible polynomial of the given degree, by rejection
/// sampling with the constant term forced on.
///
/// Best-effort and unbounded: the expected number of trials is about
/// `degree` (density of irreducibles), but there is no iteration cap.
pub fn random_irr<R: Rng + ?Sized>(degree: usize, rng: &mut R) -> Result<F2Poly, FfringError> {
    if degree < 1 {
        return Err(FfringError::InvalidArgument(format!(
            "random_irr: degree must be positive, got {}",
            degree
        )));
    }
    loop {
        let rv = F2Poly::new(F2Poly::random(degree, rng)?.bits() | 1);
        if irr(&rv) {
            return Ok(rv);
        }
    }
}

/// The polynomial totient: the number of units in F2[x]/(f), computed
/// as `prod (2^deg(p))^(e-1) * (2^deg(p) - 1)` over the distinct
/// irreducible factors `p^e` of `f`.
///
/// # Example
///
/// ```
/// # use ffring::f2poly::factor::totient;
/// # use ffring::F2Poly;
/// assert_eq!(totient(&F2Poly::new(0x13)), 15); // GF(16): 2^4 - 1 units
/// ```
pub fn totient(f: &F2Poly) -> i64 {
    let finfo = factor(f);
    let mut rv = 1i64;
    for &(fi, ei) in finfo.iter() {
        let di = fi.degree();
        rv *= (1i64 << (di * (ei - 1))) * ((1i64 << di) - 1);
    }
    rv
}
