//! Learning speed generation

use classroom_common::{DistributionError, SpeedDistribution};
use rand::Rng;
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use super::results::{recompute, StudentResult};

/// Ordered learning speeds, one per student
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    speeds: Vec<f64>,
}

impl Population {
    /// Draw `class_size` speeds from `distribution`, flooring each at `min_speed`.
    ///
    /// Samples are drawn by inverse transform from a caller-supplied RNG, so a
    /// seeded generator reproduces the same class.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        class_size: u32,
        distribution: &SpeedDistribution,
    ) -> Result<Self, DistributionError> {
        distribution.validate()?;
        let normal = Normal::new(distribution.mean, distribution.std_dev)
            .map_err(|_| DistributionError::InvalidStdDev(distribution.std_dev))?;

        let speeds: Vec<f64> = (0..class_size)
            .map(|_| {
                let u: f64 = rng.gen();
                normal.inverse_cdf(u).max(distribution.min_speed)
            })
            .collect();

        debug!(class_size, mean = distribution.mean, std_dev = distribution.std_dev, "Generated population");
        Ok(Self { speeds })
    }

    pub fn from_speeds(speeds: Vec<f64>) -> Self {
        Self { speeds }
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// Capacity ratio and pass/fail label for every student, in order
    pub fn recompute(&self, demand: f64, threshold: f64, sharpness: f64) -> Vec<StudentResult> {
        recompute(&self.speeds, demand, threshold, sharpness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let pop = Population::generate(&mut rng, 25, &SpeedDistribution::default()).unwrap();
        assert_eq!(pop.len(), 25);
    }

    #[test]
    fn test_regeneration_replaces_speeds() {
        let mut rng = StdRng::seed_from_u64(7);
        let dist = SpeedDistribution::default();
        let first = Population::generate(&mut rng, 25, &dist).unwrap();
        let second = Population::generate(&mut rng, 10, &dist).unwrap();
        assert_eq!(first.len(), 25);
        assert_eq!(second.len(), 10);
    }

    #[test]
    fn test_min_speed_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::generate(&mut rng, 1000, &SpeedDistribution::default()).unwrap();
        assert_eq!(pop.len(), 1000);
        assert!(pop.speeds().iter().all(|&s| s >= 0.3));
    }

    #[test]
    fn test_floor_clamps_rather_than_resamples() {
        // Mean well below the floor: nearly every draw lands on it
        let dist = SpeedDistribution::new(0.0, 0.1, 0.3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let pop = Population::generate(&mut rng, 200, &dist).unwrap();
        let at_floor = pop.speeds().iter().filter(|&&s| s == 0.3).count();
        assert!(at_floor > 190);
    }

    #[test]
    fn test_sample_moments() {
        let mut rng = StdRng::seed_from_u64(2024);
        let pop = Population::generate(&mut rng, 20_000, &SpeedDistribution::default()).unwrap();
        let n = pop.len() as f64;
        let mean = pop.speeds().iter().sum::<f64>() / n;
        let var = pop.speeds().iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert!((mean - 1.1).abs() < 0.01, "mean = {mean}");
        assert!((var.sqrt() - 0.25).abs() < 0.01, "std = {}", var.sqrt());
    }

    #[test]
    fn test_same_seed_same_population() {
        let dist = SpeedDistribution::default();
        let a = Population::generate(&mut StdRng::seed_from_u64(99), 30, &dist).unwrap();
        let b = Population::generate(&mut StdRng::seed_from_u64(99), 30, &dist).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_population() {
        let mut rng = StdRng::seed_from_u64(3);
        let pop = Population::generate(&mut rng, 0, &SpeedDistribution::default()).unwrap();
        assert!(pop.is_empty());
    }

    #[test]
    fn test_invalid_distribution_rejected() {
        let dist = SpeedDistribution {
            std_dev: -1.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert!(Population::generate(&mut rng, 5, &dist).is_err());
    }
}
