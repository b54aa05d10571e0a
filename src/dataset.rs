use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fraction of generated samples that lands in the training partition.
pub const TRAIN_FRACTION: f64 = 0.7;

/// A single `(x, y)` sample. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

/// Input domain of the generated samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// `x = 0, 1, …, sample_count - 1`.
    Integers,

    /// `x = i / sample_count`, so every x falls in `[0, 1)`.
    Unit,
}

/// Ground truth of the synthetic generator: the line the learner is meant
/// to recover, plus how many samples to draw and over which domain.
#[derive(Debug, Clone)]
pub struct LineSpec {
    pub slope: f64,
    pub intercept: f64,
    pub sample_count: usize,
    pub domain: Domain,
}

impl Default for LineSpec {
    fn default() -> Self {
        Self {
            slope: 2.0,
            intercept: 5.0,
            sample_count: 20,
            domain: Domain::Integers,
        }
    }
}

impl LineSpec {
    /// The unit-domain variant: `x` in `[0, 1)` with a small intercept.
    /// Callers typically scale `noise_level` down to match the shrunken
    /// y range.
    pub fn unit() -> Self {
        Self {
            slope: 2.0,
            intercept: 0.5,
            sample_count: 20,
            domain: Domain::Unit,
        }
    }

    /// Draws `sample_count` points along the line, each offset by
    /// `uniform(-0.5, 0.5) * noise_level`.
    ///
    /// Randomness is used for the noise only; the split into partitions is
    /// purely positional. Always succeeds for `sample_count >= 1`.
    ///
    /// # Arguments
    /// * `noise_level` - Amplitude of the uniform noise.
    /// * `rng` - A random number generator.
    pub fn generate<R: Rng + ?Sized>(&self, noise_level: f64, rng: &mut R) -> Dataset {
        let n = self.sample_count;

        let points = (0..n)
            .map(|i| {
                let x = match self.domain {
                    Domain::Integers => i as f64,
                    Domain::Unit => i as f64 / n as f64,
                };
                let noise = rng.random_range(-0.5..0.5) * noise_level;
                DataPoint {
                    x,
                    y: self.slope * x + self.intercept + noise,
                }
            })
            .collect();

        Dataset::new(points)
    }
}

/// An ordered sample set with a positional train/test split.
///
/// The first `floor(0.7 * len)` points form the training partition, the
/// rest the test partition. Regeneration replaces the whole dataset; there
/// is no incremental mutation.
#[derive(Debug, Clone)]
pub struct Dataset {
    points: Vec<DataPoint>,
    split: usize,
}

impl Dataset {
    /// Wraps an ordered point set, computing the partition boundary.
    pub fn new(points: Vec<DataPoint>) -> Self {
        let split = (points.len() as f64 * TRAIN_FRACTION).floor() as usize;
        Self { points, split }
    }

    /// All points in generation order.
    #[inline]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// The training partition (first 70 % by position).
    #[inline]
    pub fn train(&self) -> &[DataPoint] {
        &self.points[..self.split]
    }

    /// The test partition (remaining 30 %).
    #[inline]
    pub fn test(&self) -> &[DataPoint] {
        &self.points[self.split..]
    }

    /// Index of the first test point.
    #[inline]
    pub fn split_index(&self) -> usize {
        self.split
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn twenty_points_split_fourteen_six() {
        let mut rng = StdRng::seed_from_u64(1);
        let ds = LineSpec::default().generate(5.0, &mut rng);

        assert_eq!(ds.len(), 20);
        assert_eq!(ds.train().len(), 14);
        assert_eq!(ds.test().len(), 6);
        assert_eq!(ds.train().len() + ds.test().len(), ds.points().len());
    }

    #[test]
    fn zero_noise_recovers_the_line_exactly() {
        let mut rng = StdRng::seed_from_u64(7);
        let ds = LineSpec::default().generate(0.0, &mut rng);

        for (i, p) in ds.points().iter().enumerate() {
            assert_eq!(p.x, i as f64);
            assert_eq!(p.y, 2.0 * p.x + 5.0);
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = LineSpec::default().generate(5.0, &mut StdRng::seed_from_u64(42));
        let b = LineSpec::default().generate(5.0, &mut StdRng::seed_from_u64(42));

        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn unit_domain_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        let ds = LineSpec::unit().generate(0.0, &mut rng);

        for p in ds.points() {
            assert!((0.0..1.0).contains(&p.x));
        }
        assert_eq!(ds.points()[0].y, 0.5);
    }

    #[test]
    fn noise_is_bounded_by_level() {
        let mut rng = StdRng::seed_from_u64(9);
        let level = 4.0;
        let ds = LineSpec::default().generate(level, &mut rng);

        for p in ds.points() {
            let residual = p.y - (2.0 * p.x + 5.0);
            assert!(residual.abs() <= level * 0.5);
        }
    }
}
