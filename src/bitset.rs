//! Occupancy bitset: one bit per pool slot, packed into `u64` words.

use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Bits stored in each word.
pub const BITS_PER_WORD: usize = u64::BITS as usize;

/// Fixed-capacity bitset marking occupied slots.
///
/// Bit `i` lives in word `i / 64` at position `i % 64`. Bits at or past
/// `capacity` in the last word are never set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityBits {
    words: AllocVec<u64>,
    capacity: usize,
}

impl ActivityBits {
    /// All-clear bitset for `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        ActivityBits {
            words: vec![0; capacity.div_ceil(BITS_PER_WORD)],
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    fn locate(index: usize) -> (usize, u32) {
        (index / BITS_PER_WORD, (index % BITS_PER_WORD) as u32)
    }

    pub fn is_set(&self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (word, bit) = Self::locate(index);
        (self.words[word] >> bit) & 1 == 1
    }

    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.capacity, "slot {} past capacity {}", index, self.capacity);
        let (word, bit) = Self::locate(index);
        self.words[word] |= 1u64 << bit;
    }

    pub fn clear(&mut self, index: usize) {
        let (word, bit) = Self::locate(index);
        self.words[word] &= !(1u64 << bit);
    }

    /// Zero every word.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Lowest clear bit, scanning word by word.
    ///
    /// Inverting a word turns its first free slot into its lowest set bit,
    /// which `trailing_zeros` finds directly. A fully occupied word inverts
    /// to zero and reports 64 trailing zeros.
    pub fn first_free(&self) -> Option<usize> {
        for (i, &word) in self.words.iter().enumerate() {
            let offset = (!word).trailing_zeros() as usize;
            if offset == BITS_PER_WORD {
                continue;
            }
            let index = i * BITS_PER_WORD + offset;
            // Only the last word can have padding bits past capacity.
            return (index < self.capacity).then_some(index);
        }
        None
    }

    /// Number of set bits.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Indices of set bits in ascending order.
    pub fn iter_set(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut bits = word;
            core::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let offset = bits.trailing_zeros() as usize;
                // Drop the lowest set bit.
                bits &= bits - 1;
                Some(i * BITS_PER_WORD + offset)
            })
        })
    }
}
