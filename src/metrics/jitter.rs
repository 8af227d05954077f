//! Random factor applied to the average-days figure on filtered recomputes.
//!
//! The factor is drawn uniformly from [0.8, 1.2]. Sources are swappable so
//! the draw can be disabled, seeded for reproducible runs, or left to the
//! thread RNG.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

pub const JITTER_MIN: f64 = 0.8;
pub const JITTER_MAX: f64 = 1.2;

/// Supplies the multiplier for avgDays.
pub trait AvgDaysJitter {
    fn factor(&mut self) -> f64;
}

/// Always 1.0: avgDays stays at its baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl AvgDaysJitter for NoJitter {
    fn factor(&mut self) -> f64 {
        1.0
    }
}

/// Fresh thread RNG per draw. Non-reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadJitter;

impl AvgDaysJitter for ThreadJitter {
    fn factor(&mut self) -> f64 {
        match Uniform::new_inclusive(JITTER_MIN, JITTER_MAX) {
            Ok(dist) => {
                let mut rng = rand::rng();
                dist.sample(&mut rng)
            }
            Err(_) => 1.0,
        }
    }
}

/// Seeded RNG; the same seed yields the same sequence of factors.
#[derive(Debug)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl AvgDaysJitter for SeededJitter {
    fn factor(&mut self) -> f64 {
        match Uniform::new_inclusive(JITTER_MIN, JITTER_MAX) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => 1.0,
        }
    }
}

/// Pick a source from config: off, seeded, or thread RNG.
pub fn from_config(enabled: bool, seed: Option<u64>) -> Box<dyn AvgDaysJitter> {
    match (enabled, seed) {
        (false, _) => Box::new(NoJitter),
        (true, Some(seed)) => Box::new(SeededJitter::new(seed)),
        (true, None) => Box::new(ThreadJitter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_jitter_is_identity() {
        assert_eq!(NoJitter.factor(), 1.0);
    }

    #[test]
    fn test_thread_jitter_in_bounds() {
        let mut jitter = ThreadJitter;
        for _ in 0..200 {
            let f = jitter.factor();
            assert!((JITTER_MIN..=JITTER_MAX).contains(&f), "factor {} out of bounds", f);
        }
    }

    #[test]
    fn test_seeded_jitter_reproducible() {
        let mut a = SeededJitter::new(42);
        let mut b = SeededJitter::new(42);
        let xs: Vec<f64> = (0..10).map(|_| a.factor()).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.factor()).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|f| (JITTER_MIN..=JITTER_MAX).contains(f)));
    }

    #[test]
    fn test_from_config_disabled_ignores_seed() {
        let mut jitter = from_config(false, Some(9));
        assert_eq!(jitter.factor(), 1.0);
    }
}
