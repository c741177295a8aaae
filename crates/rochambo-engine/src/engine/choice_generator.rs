use rand::{Rng as _, SeedableRng as _, prelude::StdRng};

use crate::Choice;

/// Supplies random computer choices.
///
/// Samples a uniform value in `[0, 1)` and maps it through
/// [`Choice::from_unit`], so the partition matches the documented
/// (approximate) three-way split.
#[derive(Debug, Clone)]
pub struct ChoiceGenerator {
    rng: StdRng,
}

impl Default for ChoiceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceGenerator {
    /// Creates a new [`ChoiceGenerator`].
    ///
    /// The random seed is initialized from the OS's random data source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic generator from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws the next computer choice.
    pub fn next_choice(&mut self) -> Choice {
        Choice::from_unit(self.rng.random::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut a = ChoiceGenerator::from_seed(42);
        let mut b = ChoiceGenerator::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_choice(), b.next_choice());
        }
    }

    #[test]
    fn test_all_choices_eventually_appear() {
        let mut generator = ChoiceGenerator::from_seed(7);
        let mut seen = [false; Choice::LEN];
        for _ in 0..1000 {
            seen[generator.next_choice() as usize] = true;
        }
        assert_eq!(seen, [true; Choice::LEN]);
    }
}
