use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Weighted category sampler: each value is picked with probability
/// `weight / total`. Zero-weight entries are legal and never selected; entry
/// order does not affect the probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedTable<T> {
    entries: Vec<(T, u32)>,
    total: u32,
}

impl<T: Copy> WeightedTable<T> {
    /// Fails with `InvalidDistribution` when the table is empty or all
    /// weights sum to zero.
    pub fn new(entries: impl IntoIterator<Item = (T, u32)>) -> Result<Self> {
        let entries: Vec<_> = entries.into_iter().collect();
        let total = entries.iter().map(|&(_, weight)| weight).sum();
        if total == 0 {
            return Err(GameError::InvalidDistribution);
        }
        Ok(Self { entries, total })
    }

    pub fn total_weight(&self) -> u32 {
        self.total
    }

    /// Draws uniformly in `[0, total)` and returns the first entry whose
    /// cumulative weight boundary exceeds the draw.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let mut draw = rng.random_range(0..self.total);
        for &(value, weight) in &self.entries {
            if draw < weight {
                return value;
            }
            draw -= weight;
        }
        unreachable!("draw is below the total weight");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn empirical_frequency_tracks_the_weights() {
        let table = WeightedTable::new([('a', 1), ('b', 3)]).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);

        let hits = (0..10_000).filter(|_| table.pick(&mut rng) == 'a').count();

        // expected 2500, generous tolerance
        assert!((2200..=2800).contains(&hits), "a drawn {hits} times");
    }

    #[test]
    fn zero_weight_entries_are_never_selected() {
        let table = WeightedTable::new([('a', 0), ('b', 5)]).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);

        assert!((0..1_000).all(|_| table.pick(&mut rng) == 'b'));
    }

    #[test]
    fn zero_sum_tables_are_rejected() {
        assert_eq!(
            WeightedTable::new([('a', 0), ('b', 0)]).unwrap_err(),
            GameError::InvalidDistribution
        );
    }

    #[test]
    fn empty_tables_are_rejected() {
        let entries: [(char, u32); 0] = [];

        assert_eq!(
            WeightedTable::new(entries).unwrap_err(),
            GameError::InvalidDistribution
        );
    }
}
