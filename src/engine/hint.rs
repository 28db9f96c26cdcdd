//! Hint index selection
//!
//! The engine decides *that* a hint reveals one hidden letter; a `HintPicker`
//! decides *which*. Swap in [`FirstHiddenPicker`] or a seeded
//! [`RandomPicker`] for reproducible rounds.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Chooses which hidden position a hint reveals
pub trait HintPicker {
    /// Pick one element of `hidden` (ascending hidden indices)
    ///
    /// Returns `None` only when `hidden` is empty.
    fn pick(&mut self, hidden: &[usize]) -> Option<usize>;
}

/// Uniform choice among hidden positions
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> HintPicker for RandomPicker<R> {
    fn pick(&mut self, hidden: &[usize]) -> Option<usize> {
        hidden.choose(&mut self.rng).copied()
    }
}

/// Always reveals the leftmost hidden letter
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstHiddenPicker;

impl HintPicker for FirstHiddenPicker {
    fn pick(&mut self, hidden: &[usize]) -> Option<usize> {
        hidden.first().copied()
    }
}

impl<P: HintPicker + ?Sized> HintPicker for &mut P {
    fn pick(&mut self, hidden: &[usize]) -> Option<usize> {
        (**self).pick(hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn first_hidden_picks_leftmost() {
        assert_eq!(FirstHiddenPicker.pick(&[2, 4, 5]), Some(2));
        assert_eq!(FirstHiddenPicker.pick(&[]), None);
    }

    #[test]
    fn random_picker_stays_within_hidden_set() {
        let mut picker = RandomPicker::new(StdRng::seed_from_u64(7));
        let hidden = [1, 3, 8];
        for _ in 0..100 {
            let index = picker.pick(&hidden).unwrap();
            assert!(hidden.contains(&index));
        }
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn random_picker_is_reproducible_with_seed() {
        let hidden: Vec<usize> = (0..20).collect();
        let mut a = RandomPicker::new(StdRng::seed_from_u64(42));
        let mut b = RandomPicker::new(StdRng::seed_from_u64(42));
        for _ in 0..10 {
            assert_eq!(a.pick(&hidden), b.pick(&hidden));
        }
    }
}
