//! Shuffle permutation over queue indices
//!
//! The queue itself is never reordered. While shuffle is active, playback
//! walks a permutation of `0..len` whose values index into the queue.

use rand::seq::SliceRandom;
use rand::Rng;

/// Randomized playback order for a queue of `len` tracks
///
/// Always holds each index in `0..len` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleOrder {
    indices: Vec<usize>,
}

impl ShuffleOrder {
    /// Build a uniformly random permutation of `0..len` (Fisher-Yates)
    pub fn new<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(rng);
        Self { indices }
    }

    /// Random permutation of `0..len` that starts with `head`
    ///
    /// The remaining indices are uniformly shuffled. Falls back to
    /// [`new`](Self::new) when `head` is out of range.
    pub fn with_head<R: Rng + ?Sized>(len: usize, head: usize, rng: &mut R) -> Self {
        let mut order = Self::new(len, rng);
        if let Some(position) = order.position_of(head) {
            order.indices.swap(0, position);
        }
        order
    }

    /// Re-randomize in place for a fresh lap
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.indices.shuffle(rng);
    }

    /// Queue index at shuffle position `position`
    pub fn get(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    /// Shuffle position holding queue index `index`
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.indices.iter().position(|&i| i == index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    #[cfg(test)]
    pub(crate) fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Check that this is a permutation of `0..len`
    pub fn covers(&self, len: usize) -> bool {
        if self.indices.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        for &i in &self.indices {
            match seen.get_mut(i) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}
