use crate::bits::BitVector;
use crate::errors::FfringError;

use itertools::Itertools;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A matrix over GF(2), stored as one [`BitVector`] per row.
///
/// Supports destructive row echelon reduction plus rank and kernel-basis
/// extraction (the latter two clone internally and leave `self` intact).
/// Pivoting follows the bit-vector leader convention: lowest set bit
/// first, so echelon leaders increase with the row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitMatrix {
    num_rows: usize,
    num_cols: usize,
    rows: Vec<BitVector>,
}

impl BitMatrix {
    /// Create an all-zero matrix. Both dimensions must be positive and
    /// `num_cols` at most 64.
    pub fn try_with(num_rows: usize, num_cols: usize) -> Result<Self, FfringError> {
        if num_rows == 0 {
            return Err(FfringError::InvalidDimension(format!(
                "BitMatrix dimensions must be > 0, got {} x {}",
                num_rows, num_cols
            )));
        }
        let row = BitVector::try_with(num_cols)?;
        Ok(BitMatrix {
            num_rows,
            num_cols,
            rows: vec![row; num_rows],
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn rows(&self) -> &[BitVector] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &BitVector {
        &self.rows[i]
    }

    pub fn get(&self, i: usize, j: usize) -> Result<bool, FfringError> {
        self.check_row(i)?;
        self.rows[i].get(j)
    }

    pub fn set(&mut self, i: usize, j: usize, val: bool) -> Result<(), FfringError> {
        self.check_row(i)?;
        self.rows[i].set(j, val)
    }

    pub fn toggle(&mut self, i: usize, j: usize) -> Result<(), FfringError> {
        self.check_row(i)?;
        self.rows[i].toggle(j)
    }

    fn check_row(&self, i: usize) -> Result<(), FfringError> {
        if i >= self.num_rows {
            return Err(FfringError::IndexOutOfBounds {
                index: i,
                limit: self.num_rows,
            });
        }
        Ok(())
    }

    fn bit(&self, i: usize, j: usize) -> bool {
        (self.rows[i].bits >> j) & 1 == 1
    }

    /// Reduce to row echelon form, in place (destructive).
    ///
    /// Phase 1 clears entries below each pivot; phase 2 folds later rows
    /// into earlier ones wherever an earlier row still has a 1 at a later
    /// row's leader column. Afterwards leader positions strictly increase
    /// with the row index and each is its column's only nonzero entry
    /// among the nonzero rows.
    pub fn row_echelon_form(&mut self) {
        self.row_reduce_below();
        for row in 0..self.num_rows {
            for row2 in row + 1..self.num_rows {
                let Some(lp2) = self.rows[row2].find_leader_pos() else {
                    // echelon form sorts zero rows last
                    break;
                };
                if self.bit(row, lp2) {
                    let b = self.rows[row2].bits;
                    self.rows[row].bits ^= b;
                }
            }
        }
    }

    fn row_reduce_below(&mut self) {
        let mut top_row = 0;
        let mut left_column = 0;

        while top_row < self.num_rows && left_column < self.num_cols {
            if top_row < self.num_rows - 1 {
                let mut pivot_row = top_row;
                let mut pivot_successful = false;
                while !pivot_successful && pivot_row < self.num_rows {
                    if self.bit(pivot_row, left_column) {
                        if top_row != pivot_row {
                            self.rows.swap(top_row, pivot_row);
                        }
                        pivot_successful = true;
                    } else {
                        pivot_row += 1;
                    }
                }
                if !pivot_successful {
                    left_column += 1;
                    continue;
                }
            }

            if self.bit(top_row, left_column) {
                let top_bits = self.rows[top_row].bits;
                for row in top_row + 1..self.num_rows {
                    if self.bit(row, left_column) {
                        self.rows[row].bits ^= top_bits;
                    }
                }
            }
            left_column += 1;
            top_row += 1;
        }
    }

    /// The rank of the matrix. Clones internally; `self` is untouched.
    pub fn rank(&self) -> usize {
        let mut rr = self.clone();
        rr.row_reduce_below();
        rr.rank_rr()
    }

    /// The rank of an already row-reduced matrix: the number of rows
    /// before the first all-zero row.
    pub fn rank_rr(&self) -> usize {
        for (i, row) in self.rows.iter().enumerate() {
            if row.is_zero() {
                return i;
            }
        }
        self.num_rows
    }

    /// A basis for the nullspace `{v : M v = 0}`, one basis vector per
    /// row, or `None` when the kernel is trivial (rank == num_cols).
    ///
    /// Clones internally; `self` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if the free-column count disagrees with `num_cols - rank`.
    /// That is an internal-consistency failure, not a recoverable
    /// condition.
    pub fn kernel_basis(&self) -> Option<BitMatrix> {
        let mut rr = self.clone();
        rr.row_echelon_form();
        let rank = rr.rank_rr();
        let dimker = self.num_cols - rank;
        if dimker == 0 {
            return None;
        }

        // Columns holding no row's leader are free: one basis vector each.
        let mut free_flags = vec![true; self.num_cols];
        for i in 0..rank {
            if let Some(dep_pos) = rr.rows[i].find_leader_pos() {
                free_flags[dep_pos] = false;
            }
        }
        let free_indices: Vec<usize> = free_flags.iter().positions(|&flag| flag).collect();
        if free_indices.len() != dimker {
            panic!("coding error detected: kernel_basis");
        }

        let mut zero_row = rr.rows[0];
        zero_row.bits = 0;
        let mut basis = BitMatrix {
            num_rows: dimker,
            num_cols: self.num_cols,
            rows: vec![zero_row; dimker],
        };
        for (i, row) in basis.rows.iter_mut().enumerate() {
            let free_col = free_indices[i];
            row.bits |= 1 << free_col;
            for j in 0..rank {
                if !rr.bit(j, free_col) {
                    continue;
                }
                let Some(dep_pos) = rr.rows[j].find_leader_pos() else {
                    panic!("coding error detected: kernel_basis");
                };
                row.bits |= 1 << dep_pos;
            }
        }
        Some(basis)
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.iter().map(|r| r.to_string()).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_rows(num_cols: usize, rows: &[u64]) -> BitMatrix {
        let mut m = BitMatrix::try_with(rows.len(), num_cols).unwrap();
        for (i, &bits) in rows.iter().enumerate() {
            for j in 0..num_cols {
                m.set(i, j, (bits >> j) & 1 == 1).unwrap();
            }
        }
        m
    }

    // Parity of the AND of a row with a vector: one GF(2) dot product.
    fn dot(row: &BitVector, v: &BitVector) -> bool {
        (row.value() & v.value()).count_ones() & 1 == 1
    }

    #[test]
    fn test_creation() {
        assert!(BitMatrix::try_with(3, 4).is_ok());
        assert!(BitMatrix::try_with(0, 4).is_err());
        assert!(BitMatrix::try_with(3, 0).is_err());
        assert!(BitMatrix::try_with(3, 65).is_err());
    }

    #[test]
    fn test_rank() {
        // rows: 110, 011, 101 -- third is the sum of the first two
        let m = from_rows(3, &[0b011, 0b110, 0b101]);
        assert_eq!(m.rank(), 2);

        let id = from_rows(3, &[0b001, 0b010, 0b100]);
        assert_eq!(id.rank(), 3);

        let zero = BitMatrix::try_with(2, 5).unwrap();
        assert_eq!(zero.rank(), 0);
    }

    #[test]
    fn test_rank_leaves_matrix_intact() {
        let m = from_rows(3, &[0b011, 0b110, 0b101]);
        let before = m.clone();
        let _ = m.rank();
        assert_eq!(m, before);
    }

    #[test]
    fn test_echelon_leaders_increase() {
        let mut m = from_rows(4, &[0b1100, 0b0110, 0b1010, 0b0001]);
        m.row_echelon_form();
        let rank = m.rank_rr();
        let leaders: Vec<usize> = (0..rank)
            .map(|i| m.row(i).find_leader_pos().unwrap())
            .collect();
        for w in leaders.windows(2) {
            assert!(w[0] < w[1]);
        }
        // each leader column is its row's exclusive nonzero entry
        for (i, &lp) in leaders.iter().enumerate() {
            for j in 0..rank {
                assert_eq!(m.get(j, lp).unwrap(), i == j);
            }
        }
    }

    #[test]
    fn test_kernel_basis_annihilates() {
        let m = from_rows(3, &[0b011, 0b110, 0b101]);
        let basis = m.kernel_basis().unwrap();
        assert_eq!(basis.num_rows(), 1);
        assert_eq!(m.rank() + basis.num_rows(), 3);
        for v in basis.rows() {
            assert!(!v.is_zero());
            for row in m.rows() {
                assert!(!dot(row, v));
            }
        }
        // (1,1,1) is the only kernel vector here
        assert_eq!(basis.row(0).value(), 0b111);
    }

    #[test]
    fn test_kernel_basis_trivial() {
        let id = from_rows(3, &[0b001, 0b010, 0b100]);
        assert!(id.kernel_basis().is_none());
    }

    #[test]
    fn test_kernel_rank_nullity() {
        let m = from_rows(5, &[0b00011, 0b00110, 0b01100, 0b11000]);
        let rank = m.rank();
        let basis = m.kernel_basis().unwrap();
        assert_eq!(rank + basis.num_rows(), 5);
        for v in basis.rows() {
            for row in m.rows() {
                assert!(!dot(row, v));
            }
        }
        // basis rows are linearly independent: reduce them as a matrix
        assert_eq!(basis.rank(), basis.num_rows());
    }
}
