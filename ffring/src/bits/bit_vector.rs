use crate::errors::FfringError;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A fixed-length bit vector over GF(2), at most 64 bits wide.
///
/// Bit position 0 is the LSB (rightmost when printed). Bits at positions
/// at or above `num_bits` are don't-care internally and are masked off by
/// every output path.
///
/// Rendering is chosen by the caller via the format specifier: `{}` prints
/// binary zero-padded to `num_bits`, `{:x}` prints hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVector {
    num_bits: usize,
    pub(crate) bits: u64,
}

impl BitVector {
    /// Create an all-zero bit vector of the given width.
    ///
    /// The width must be in `1..=64`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ffring::bits::BitVector;
    /// let v = BitVector::try_with(8).unwrap();
    /// assert_eq!(v.num_bits(), 8);
    /// assert!(BitVector::try_with(0).is_err());
    /// assert!(BitVector::try_with(65).is_err());
    /// ```
    pub fn try_with(num_bits: usize) -> Result<Self, FfringError> {
        if num_bits == 0 || num_bits > 64 {
            return Err(FfringError::InvalidDimension(format!(
                "BitVector width must be in 1..=64, got {}",
                num_bits
            )));
        }
        Ok(BitVector { num_bits, bits: 0 })
    }

    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// The packed bits, masked to the vector width.
    pub fn value(&self) -> u64 {
        self.bits & self.mask()
    }

    fn mask(&self) -> u64 {
        if self.num_bits == 64 {
            u64::MAX
        } else {
            (1u64 << self.num_bits) - 1
        }
    }

    fn check_index(&self, j: usize) -> Result<(), FfringError> {
        if j >= self.num_bits {
            return Err(FfringError::IndexOutOfBounds {
                index: j,
                limit: self.num_bits,
            });
        }
        Ok(())
    }

    /// Get bit `j`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ffring::bits::BitVector;
    /// let mut v = BitVector::try_with(4).unwrap();
    /// v.set(2, true).unwrap();
    /// assert!(v.get(2).unwrap());
    /// assert!(!v.get(3).unwrap());
    /// assert!(v.get(4).is_err());
    /// ```
    pub fn get(&self, j: usize) -> Result<bool, FfringError> {
        self.check_index(j)?;
        Ok((self.bits >> j) & 1 == 1)
    }

    /// Set bit `j` to the given value, in place.
    pub fn set(&mut self, j: usize, val: bool) -> Result<(), FfringError> {
        self.check_index(j)?;
        if val {
            self.bits |= 1 << j;
        } else {
            self.bits &= !(1 << j);
        }
        Ok(())
    }

    /// Flip bit `j`, in place.
    pub fn toggle(&mut self, j: usize) -> Result<(), FfringError> {
        self.check_index(j)?;
        self.bits ^= 1 << j;
        Ok(())
    }

    /// Position of the lowest set bit, or `None` if the vector is zero.
    ///
    /// Row reduction pivots on the lowest set bit, so elimination proceeds
    /// low-bit-to-high-bit rather than the conventional high-to-low.
    pub fn find_leader_pos(&self) -> Option<usize> {
        let v = self.value();
        if v == 0 {
            None
        } else {
            Some(v.trailing_zeros() as usize)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value() == 0
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value(), width = self.num_bits)
    }
}

impl fmt::LowerHex for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.num_bits + 3) >> 2;
        write!(f, "{:0width$x}", self.value(), width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_bounds() {
        assert!(BitVector::try_with(1).is_ok());
        assert!(BitVector::try_with(64).is_ok());
        assert!(BitVector::try_with(0).is_err());
        assert!(BitVector::try_with(65).is_err());
    }

    #[test]
    fn test_get_set_toggle() -> Result<(), FfringError> {
        let mut v = BitVector::try_with(6)?;
        v.set(0, true)?;
        v.set(5, true)?;
        assert_eq!(v.value(), 0b100001);
        v.toggle(0)?;
        assert_eq!(v.value(), 0b100000);
        v.set(5, false)?;
        assert!(v.is_zero());
        assert!(v.get(6).is_err());
        assert!(v.set(6, true).is_err());
        assert!(v.toggle(6).is_err());
        Ok(())
    }

    #[test]
    fn test_leader_pos() -> Result<(), FfringError> {
        let mut v = BitVector::try_with(8)?;
        assert_eq!(v.find_leader_pos(), None);
        v.set(3, true)?;
        v.set(6, true)?;
        assert_eq!(v.find_leader_pos(), Some(3));
        Ok(())
    }

    #[test]
    fn test_rendering() -> Result<(), FfringError> {
        let mut v = BitVector::try_with(8)?;
        v.set(0, true)?;
        v.set(4, true)?;
        assert_eq!(format!("{}", v), "00010001");
        assert_eq!(format!("{:x}", v), "11");
        let mut w = BitVector::try_with(5)?;
        w.set(4, true)?;
        assert_eq!(format!("{}", w), "10000");
        assert_eq!(format!("{:x}", w), "10");
        Ok(())
    }

    #[test]
    fn test_full_width_mask() -> Result<(), FfringError> {
        let mut v = BitVector::try_with(64)?;
        v.set(63, true)?;
        assert_eq!(v.value(), 1u64 << 63);
        assert_eq!(v.find_leader_pos(), Some(63));
        Ok(())
    }
}
