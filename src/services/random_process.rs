use rand::Rng;
use rand_distr::{Distribution, Gamma, Uniform};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SamplingError {
    #[error("erlang shape must be positive and finite, got {0}")]
    InvalidShape(f64),
    #[error("erlang mean must be positive and finite, got {0}")]
    InvalidMean(f64),
    #[error("duration bounds must be positive and finite, got [{low}, {high}]")]
    InvalidDurationBound { low: f64, high: f64 },
    #[error("duration low bound {low} is greater than high bound {high}")]
    InvertedDurationBounds { low: f64, high: f64 },
    #[error("invalid gamma parameters: {0}")]
    Gamma(String),
}

/// Source of interarrival gaps and durations for the advertisement stream.
pub trait AdSampler {
    fn next_interarrival(&mut self) -> f64;
    fn next_duration(&mut self) -> f64;
}

/// Erlang interarrival gaps and uniform durations drawn from one owned
/// random source.
pub struct RandomProcessGenerator<R: Rng> {
    rng: R,
    interarrival: Gamma<f64>,
    duration: Uniform<f64>,
}

impl<R: Rng> RandomProcessGenerator<R> {
    pub fn new(
        rng: R,
        erlang_shape: f64,
        erlang_mean: f64,
        duration_low: f64,
        duration_high: f64,
    ) -> Result<Self, SamplingError> {
        Ok(Self {
            rng,
            interarrival: erlang_distribution(erlang_shape, erlang_mean)?,
            duration: duration_distribution(duration_low, duration_high)?,
        })
    }

    pub fn erlang_interarrival(&mut self, size: usize) -> Vec<f64> {
        (0..size)
            .map(|_| self.interarrival.sample(&mut self.rng))
            .collect()
    }

    pub fn uniform_duration(&mut self, size: usize) -> Vec<f64> {
        (0..size)
            .map(|_| self.duration.sample(&mut self.rng))
            .collect()
    }
}

impl<R: Rng> AdSampler for RandomProcessGenerator<R> {
    fn next_interarrival(&mut self) -> f64 {
        self.interarrival.sample(&mut self.rng)
    }

    fn next_duration(&mut self) -> f64 {
        self.duration.sample(&mut self.rng)
    }
}

/// Gamma distribution with the given shape and `scale = mean / shape`.
pub fn erlang_distribution(shape: f64, mean: f64) -> Result<Gamma<f64>, SamplingError> {
    if !(shape.is_finite() && shape > 0.0) {
        return Err(SamplingError::InvalidShape(shape));
    }
    if !(mean.is_finite() && mean > 0.0) {
        return Err(SamplingError::InvalidMean(mean));
    }
    Gamma::new(shape, mean / shape).map_err(|e| SamplingError::Gamma(e.to_string()))
}

/// Uniform distribution over `[low, high]`; equal bounds give a constant.
pub fn duration_distribution(low: f64, high: f64) -> Result<Uniform<f64>, SamplingError> {
    if !(low.is_finite() && high.is_finite() && low > 0.0) {
        return Err(SamplingError::InvalidDurationBound { low, high });
    }
    if low > high {
        return Err(SamplingError::InvertedDurationBounds { low, high });
    }
    Ok(Uniform::new_inclusive(low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(seed: u64) -> RandomProcessGenerator<StdRng> {
        RandomProcessGenerator::new(StdRng::seed_from_u64(seed), 2.0, 20.0, 2.5, 3.5).unwrap()
    }

    #[test]
    fn interarrival_mean_is_close_to_configured_mean() {
        let mut generator = generator(7);
        let samples = generator.erlang_interarrival(20_000);

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!(samples.iter().all(|gap| *gap > 0.0));
        assert!((mean - 20.0).abs() < 1.0, "mean {mean} too far from 20");
    }

    #[test]
    fn durations_stay_within_bounds() {
        let mut generator = generator(11);
        let samples = generator.uniform_duration(5_000);

        assert_eq!(samples.len(), 5_000);
        assert!(samples.iter().all(|d| (2.5..=3.5).contains(d)));
    }

    #[test]
    fn equal_bounds_yield_a_constant_duration() {
        let mut generator =
            RandomProcessGenerator::new(StdRng::seed_from_u64(1), 2.0, 20.0, 3.0, 3.0).unwrap();
        assert_eq!(generator.uniform_duration(3), vec![3.0, 3.0, 3.0]);
    }

    #[test]
    fn same_seed_gives_same_samples() {
        let mut first = generator(42);
        let mut second = generator(42);

        assert_eq!(first.erlang_interarrival(10), second.erlang_interarrival(10));
        assert_eq!(first.next_duration(), second.next_duration());
    }

    #[test]
    fn invalid_parameters_fail_fast() {
        assert_eq!(
            erlang_distribution(0.0, 20.0).unwrap_err(),
            SamplingError::InvalidShape(0.0)
        );
        assert_eq!(
            erlang_distribution(2.0, -1.0).unwrap_err(),
            SamplingError::InvalidMean(-1.0)
        );
        assert_eq!(
            duration_distribution(3.5, 2.5).unwrap_err(),
            SamplingError::InvertedDurationBounds { low: 3.5, high: 2.5 }
        );
        assert!(matches!(
            duration_distribution(0.0, 2.5),
            Err(SamplingError::InvalidDurationBound { .. })
        ));
        assert!(matches!(
            duration_distribution(1.0, f64::NAN),
            Err(SamplingError::InvalidDurationBound { .. })
        ));
    }
}
