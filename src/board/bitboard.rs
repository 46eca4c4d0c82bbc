//! Bitboard of burned squares

use super::MAX_CELLS;

/// One bit per cell, indexed row-major by the owning board.
/// A single u64 covers every board up to 8x8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits |= 1u64 << idx;
    }

    /// Clear a bit at cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits &= !(1u64 << idx);
    }

    /// Check if bit is set at cell index
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < MAX_CELLS);
        (self.bits >> idx) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { current: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    current: u64,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }
        let idx = self.current.trailing_zeros() as usize;
        // Clear the bit we just found
        self.current &= self.current - 1;
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        assert!(bb.is_empty());

        bb.set(0);
        bb.set(48);
        bb.set(63);
        assert!(bb.get(0));
        assert!(bb.get(48));
        assert!(bb.get(63));
        assert!(!bb.get(1));
        assert_eq!(bb.count(), 3);

        bb.clear(48);
        assert!(!bb.get(48));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_iter_ones_ascending() {
        let mut bb = Bitboard::new();
        for idx in [40, 3, 17] {
            bb.set(idx);
        }
        let ones: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(ones, vec![3, 17, 40]);
    }
}
