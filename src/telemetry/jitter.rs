use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the random noise applied to speed and engine temperature.
pub trait JitterSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Jitter drawn from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible jitter when a seed is given, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(StdRng::seed_from_u64(seed)),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Always returns the same sample, clamped to `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(f64);

impl FixedJitter {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0., 1. - f64::EPSILON))
    }
}

impl JitterSource for FixedJitter {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
