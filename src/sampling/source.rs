use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic pseudo-random source owned by exactly one sampler.
///
/// Two sources built from the same seed produce identical sequences for
/// identical call sequences. When no seed is supplied one is drawn from the
/// thread RNG and kept, so an unseeded run can still be replayed.
#[derive(Debug, Clone)]
pub struct SeededRandomSource {
    seed: u64,
    rng: SmallRng,
}

impl SeededRandomSource {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// The seed this stream was initialized from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform integer in `[0, bound)`. A zero bound yields 0.
    pub fn next_int(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandomSource::from_seed(42);
        let mut b = SeededRandomSource::from_seed(42);
        let va: Vec<f64> = (0..20).map(|_| a.next_uniform()).collect();
        let vb: Vec<f64> = (0..20).map(|_| b.next_uniform()).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn different_seed_different_sequence() {
        let mut a = SeededRandomSource::from_seed(1);
        let mut b = SeededRandomSource::from_seed(2);
        let va: Vec<u64> = (0..10).map(|_| a.next_int(1_000_000)).collect();
        let vb: Vec<u64> = (0..10).map(|_| b.next_int(1_000_000)).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut src = SeededRandomSource::from_seed(7);
        for _ in 0..10_000 {
            let u = src.next_uniform();
            assert!((0.0..1.0).contains(&u), "uniform out of range: {u}");
        }
    }

    #[test]
    fn next_int_below_bound() {
        let mut src = SeededRandomSource::from_seed(7);
        for _ in 0..1_000 {
            assert!(src.next_int(6) < 6);
        }
        assert_eq!(src.next_int(0), 0);
        assert_eq!(src.next_int(1), 0);
    }

    #[test]
    fn unseeded_source_records_replayable_seed() {
        let mut a = SeededRandomSource::new(None);
        let mut b = SeededRandomSource::from_seed(a.seed());
        assert_eq!(a.next_uniform(), b.next_uniform());
    }
}
