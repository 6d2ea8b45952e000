//! Button sequence the player has to repeat
//!
//! The pattern is conceptually infinite: reading past the generated prefix
//! grows the buffer and fills the new tail with fresh random buttons.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::INITIAL_PATTERN_LEN;

/// Lazily extended sequence of button indices in `0..button_count`
#[derive(Debug, Clone)]
pub struct Pattern {
    values: Vec<usize>,
    button_count: usize,
    rng: Pcg32,
}

impl Pattern {
    /// Create a pattern with `INITIAL_PATTERN_LEN` random entries
    pub fn new(button_count: usize, seed: u64) -> Self {
        let mut pattern = Self {
            values: Vec::with_capacity(INITIAL_PATTERN_LEN),
            button_count: button_count.max(1),
            rng: Pcg32::seed_from_u64(seed),
        };
        pattern.fill_to(INITIAL_PATTERN_LEN);
        pattern
    }

    /// Create a pattern starting with fixed entries.
    ///
    /// Entries are wrapped into range; growth past the prefix is random.
    pub fn from_values(values: Vec<usize>, button_count: usize, seed: u64) -> Self {
        let button_count = button_count.max(1);
        Self {
            values: values.into_iter().map(|v| v % button_count).collect(),
            button_count,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Button at `index`, generating entries up to it if needed
    pub fn get(&mut self, index: usize) -> usize {
        if index >= self.values.len() {
            let doubled = (self.values.len() * 2).max(INITIAL_PATTERN_LEN);
            self.fill_to(doubled.max(index + 1));
        }
        self.values[index]
    }

    /// Button at `index` if it has already been generated
    pub fn peek(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied()
    }

    /// Redraw every generated entry
    pub fn randomize(&mut self) {
        for value in &mut self.values {
            *value = self.rng.random_range(0..self.button_count);
        }
        log::debug!("Pattern randomized ({} entries)", self.values.len());
    }

    /// Number of generated entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn fill_to(&mut self, len: usize) {
        while self.values.len() < len {
            let value = self.rng.random_range(0..self.button_count);
            self.values.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_pattern_prefills() {
        let pattern = Pattern::new(4, 7);
        assert_eq!(pattern.len(), INITIAL_PATTERN_LEN);
        for i in 0..INITIAL_PATTERN_LEN {
            assert!(pattern.peek(i).unwrap() < 4);
        }
        assert_eq!(pattern.peek(INITIAL_PATTERN_LEN), None);
    }

    #[test]
    fn test_get_grows_by_doubling() {
        let mut pattern = Pattern::new(4, 7);
        pattern.get(INITIAL_PATTERN_LEN);
        assert_eq!(pattern.len(), INITIAL_PATTERN_LEN * 2);

        // Far reads grow past the doubled length
        pattern.get(100);
        assert_eq!(pattern.len(), 101);
    }

    #[test]
    fn test_prefix_is_kept() {
        let mut pattern = Pattern::from_values(vec![2, 0, 3, 1], 4, 1);
        assert_eq!(pattern.get(0), 2);
        assert_eq!(pattern.get(1), 0);
        assert_eq!(pattern.get(2), 3);
        assert_eq!(pattern.get(3), 1);
        assert!(pattern.get(4) < 4);
    }

    #[test]
    fn test_from_values_wraps_out_of_range() {
        let pattern = Pattern::from_values(vec![5, 9], 4, 1);
        assert_eq!(pattern.peek(0), Some(1));
        assert_eq!(pattern.peek(1), Some(1));
    }

    #[test]
    fn test_randomize_keeps_length_and_range() {
        let mut pattern = Pattern::new(4, 3);
        pattern.get(40);
        let len = pattern.len();
        pattern.randomize();
        assert_eq!(pattern.len(), len);
        assert!((0..len).all(|i| pattern.peek(i).unwrap() < 4));
    }

    #[test]
    fn test_randomize_redraws_entries() {
        // 64 entries from 4 buttons: identical redraw is vanishingly unlikely,
        // and the seed makes it deterministic anyway
        let mut pattern = Pattern::new(4, 11);
        pattern.get(63);
        let before: Vec<usize> = (0..64).map(|i| pattern.get(i)).collect();
        pattern.randomize();
        let after: Vec<usize> = (0..64).map(|i| pattern.get(i)).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Pattern::new(4, 99);
        let mut b = Pattern::new(4, 99);
        for i in 0..50 {
            assert_eq!(a.get(i), b.get(i));
        }
    }

    #[test]
    fn test_single_button_pattern() {
        let mut pattern = Pattern::new(1, 5);
        assert!((0..20).all(|i| pattern.get(i) == 0));
    }

    proptest! {
        #[test]
        fn prop_get_in_range_and_stable(
            seed in any::<u64>(),
            buttons in 1usize..9,
            index in 0usize..500,
        ) {
            let mut pattern = Pattern::new(buttons, seed);
            let first = pattern.get(index);
            prop_assert!(first < buttons);
            prop_assert!(pattern.len() > index);
            // Growing further must not disturb earlier entries
            pattern.get(index * 2 + 1);
            prop_assert_eq!(pattern.get(index), first);
        }
    }
}
