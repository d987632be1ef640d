use super::*;
use rand::prelude::*;

/// Uniformly random positions from a seeded [`SmallRng`].
#[derive(Clone, Debug)]
pub struct RandomIndexSource {
    rng: SmallRng,
}

impl RandomIndexSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for RandomIndexSource {
    fn next_index(&mut self, bound: CellIndex) -> CellIndex {
        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bound() {
        let mut source = RandomIndexSource::from_seed(7);
        for _ in 0..1000 {
            assert!(source.next_index(64) < 64);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomIndexSource::from_seed(42);
        let mut b = RandomIndexSource::from_seed(42);
        for _ in 0..32 {
            assert_eq!(a.next_index(720), b.next_index(720));
        }
    }
}
