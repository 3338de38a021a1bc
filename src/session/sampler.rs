use rand::{
    rngs::{
        StdRng,
        ThreadRng,
    },
    Rng,
    SeedableRng,
};

/// Chooses a position in a non-empty candidate list.
pub trait Sampler {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform sampling backed by any `rand` generator.
pub struct RandomSampler<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomSampler<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomSampler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSampler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_stay_in_range() {
        let mut sampler = RandomSampler::new();
        for len in 1..20 {
            assert!(sampler.pick(len) < len);
        }
        assert_eq!(sampler.pick(1), 0);
    }

    #[test]
    fn test_seeded_samplers_repeat_their_sequence() {
        let mut first = RandomSampler::seeded(42);
        let mut second = RandomSampler::seeded(42);
        let a: Vec<usize> = (0..32).map(|_| first.pick(10)).collect();
        let b: Vec<usize> = (0..32).map(|_| second.pick(10)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distribution_is_roughly_uniform() {
        let mut sampler = RandomSampler::seeded(7);
        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            hits[sampler.pick(4)] += 1;
        }
        assert!(hits.iter().all(|&count| count > 800 && count < 1200), "{hits:?}");
    }
}
