//! # Factorizations
//!
//! A factorization is an optional trivial factor (a sign or unit
//! component) together with an ordered list of unique
//! `(base, multiplicity)` pairs. The same container serves the integer
//! branch (`Factorization<i64>`) and the GF(2)-polynomial branch
//! (`Factorization<F2Poly>`); divisor enumeration only needs `Mul` and
//! `One`.

use itertools::Itertools;

use num_traits::One;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::Mul;

/// Invariant: `trivial_factor * prod(base^multiplicity)` reconstructs the
/// factored value, bases are unique and kept in ascending order, and
/// every multiplicity is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factorization<T> {
    trivial: Option<T>,
    factors: Vec<(T, usize)>,
}

impl<T> Default for Factorization<T> {
    fn default() -> Self {
        Factorization {
            trivial: None,
            factors: Vec::new(),
        }
    }
}

impl<T: Ord + Copy + Mul<Output = T> + One> Factorization<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trivial_factor(&self) -> Option<T> {
        self.trivial
    }

    pub fn num_distinct_factors(&self) -> usize {
        self.factors.len()
    }

    /// Total factor count with multiplicity.
    pub fn num_factors(&self) -> usize {
        self.factors.iter().map(|&(_, m)| m).sum()
    }

    pub fn get(&self, i: usize) -> (T, usize) {
        self.factors[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &(T, usize)> {
        self.factors.iter()
    }

    /// Multiply a unit/sign component into the trivial factor.
    pub fn insert_trivial_factor(&mut self, t: T) {
        self.trivial = Some(match self.trivial {
            Some(existing) => existing * t,
            None => t,
        });
    }

    /// Insert a factor, merging with an equal base if present and
    /// keeping bases in ascending order. Non-positive multiplicities are
    /// ignored.
    pub fn insert_factor(&mut self, new_factor: T, new_mult: usize) {
        if new_mult == 0 {
            return;
        }
        for i in 0..self.factors.len() {
            if self.factors[i].0 == new_factor {
                self.factors[i].1 += new_mult;
                return;
            }
            if new_factor < self.factors[i].0 {
                self.factors.insert(i, (new_factor, new_mult));
                return;
            }
        }
        self.factors.push((new_factor, new_mult));
    }

    /// Fold another factorization into this one (used by recursive
    /// splitting).
    pub fn merge(&mut self, other: &Factorization<T>) {
        if let Some(t) = other.trivial {
            self.insert_trivial_factor(t);
        }
        for &(f, m) in &other.factors {
            self.insert_factor(f, m);
        }
    }

    /// Raise the whole factorization to the `e`-th power: the trivial
    /// factor is exponentiated, every multiplicity is scaled.
    pub fn exp_all(&mut self, e: usize) {
        if let Some(t) = self.trivial {
            let mut p = T::one();
            for _ in 0..e {
                p = p * t;
            }
            self.trivial = Some(p);
        }
        for pair in &mut self.factors {
            pair.1 *= e;
        }
    }

    /// The number of divisors, `prod(multiplicity + 1)`.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been inserted.
    pub fn num_divisors(&self) -> usize {
        if self.factors.is_empty() && self.trivial.is_none() {
            panic!("num_divisors: no factors have been inserted");
        }
        self.factors.iter().map(|&(_, m)| m + 1).product()
    }

    /// The `k`-th divisor in mixed-radix order over the multiplicities.
    pub fn kth_divisor(&self, k: usize) -> T {
        if self.factors.is_empty() {
            if self.trivial.is_some() {
                return T::one();
            }
            panic!("kth_divisor: no factors have been inserted");
        }
        let mut k = k;
        let mut rv = T::one();
        for &(p, m) in &self.factors {
            let base = m + 1;
            let power = k % base;
            k /= base;
            for _ in 0..power {
                rv = rv * p;
            }
        }
        rv
    }

    /// All divisors, ascending.
    pub fn all_divisors(&self) -> Vec<T> {
        let nd = self.num_divisors();
        (0..nd).map(|k| self.kth_divisor(k)).sorted().collect()
    }

    /// For each distinct prime factor `p`, the divisor `n/p`, ascending.
    /// These are exactly the maximal proper divisors of `n`.
    pub fn maximal_proper_divisors(&self) -> Vec<T> {
        if self.factors.is_empty() {
            if self.trivial.is_none() {
                panic!("maximal_proper_divisors: no factors have been inserted");
            }
            return Vec::new();
        }
        self.factors
            .iter()
            .map(|&(p, _)| {
                let mut rv = if let Some(t) = self.trivial { t } else { T::one() };
                for &(q, m) in &self.factors {
                    let reps = if q == p { m - 1 } else { m };
                    for _ in 0..reps {
                        rv = rv * q;
                    }
                }
                rv
            })
            .sorted()
            .collect()
    }

    /// Multiply the factorization back out.
    pub fn unfactor(&self) -> T {
        if self.factors.is_empty() && self.trivial.is_none() {
            panic!("unfactor: no factors have been inserted");
        }
        let mut rv = if let Some(t) = self.trivial { t } else { T::one() };
        for &(p, m) in &self.factors {
            for _ in 0..m {
                rv = rv * p;
            }
        }
        rv
    }
}

impl<T: fmt::Display> fmt::Display for Factorization<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(t) = &self.trivial {
            parts.push(t.to_string());
        }
        for (p, m) in &self.factors {
            if *m == 1 {
                parts.push(p.to_string());
            } else {
                parts.push(format!("{}^{}", p, m));
            }
        }
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_merges() {
        let mut f: Factorization<i64> = Factorization::new();
        f.insert_factor(5, 1);
        f.insert_factor(2, 2);
        f.insert_factor(3, 1);
        f.insert_factor(2, 1);
        assert_eq!(f.num_distinct_factors(), 3);
        assert_eq!(f.get(0), (2, 3));
        assert_eq!(f.get(1), (3, 1));
        assert_eq!(f.get(2), (5, 1));
        assert_eq!(f.num_factors(), 5);
        assert_eq!(f.unfactor(), 120);
    }

    #[test]
    fn test_trivial_factor_accumulates() {
        let mut f: Factorization<i64> = Factorization::new();
        f.insert_trivial_factor(-1);
        f.insert_trivial_factor(-1);
        assert_eq!(f.trivial_factor(), Some(1));
        f.insert_factor(7, 1);
        assert_eq!(f.unfactor(), 7);
    }

    #[test]
    fn test_merge_and_exp_all() {
        let mut a: Factorization<i64> = Factorization::new();
        a.insert_factor(2, 1);
        a.insert_factor(3, 1);
        let mut b: Factorization<i64> = Factorization::new();
        b.insert_trivial_factor(-1);
        b.insert_factor(2, 1);
        a.merge(&b);
        assert_eq!(a.unfactor(), -12);

        a.exp_all(2);
        assert_eq!(a.get(0), (2, 4));
        assert_eq!(a.get(1), (3, 2));
        assert_eq!(a.trivial_factor(), Some(1));
        assert_eq!(a.unfactor(), 144);
    }

    #[test]
    fn test_divisors() {
        let mut f: Factorization<i64> = Factorization::new();
        f.insert_factor(2, 2);
        f.insert_factor(3, 1);
        assert_eq!(f.num_divisors(), 6);
        assert_eq!(f.all_divisors(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(f.maximal_proper_divisors(), vec![4, 6]);
    }

    #[test]
    fn test_trivial_only_divisors() {
        let mut f: Factorization<i64> = Factorization::new();
        f.insert_trivial_factor(1);
        assert_eq!(f.num_divisors(), 1);
        assert_eq!(f.all_divisors(), vec![1]);
        assert_eq!(f.maximal_proper_divisors(), Vec::<i64>::new());
        assert_eq!(f.unfactor(), 1);
    }

    #[test]
    #[should_panic(expected = "no factors have been inserted")]
    fn test_empty_unfactor_panics() {
        let f: Factorization<i64> = Factorization::new();
        let _ = f.unfactor();
    }

    #[test]
    fn test_display() {
        let mut f: Factorization<i64> = Factorization::new();
        f.insert_trivial_factor(-1);
        f.insert_factor(2, 3);
        f.insert_factor(3, 1);
        assert_eq!(f.to_string(), "-1 2^3 3");
    }
}
