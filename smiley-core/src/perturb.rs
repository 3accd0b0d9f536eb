//! Gaussian perturbation followed by subsampling without replacement.

use rand::{Rng, seq::index};
use rand_distr::StandardNormal;

use crate::error::{Result, SmileyError};
use crate::point_set::{Point, PointSet};

/// Number of points kept when sampling `fraction` of `count` points.
///
/// Rounds down, so a fraction too small to keep a whole point yields zero.
///
/// # Examples
/// ```
/// use smiley_core::sample_size;
///
/// assert_eq!(sample_size(100, 0.7), 70);
/// assert_eq!(sample_size(50, 0.7), 35);
/// assert_eq!(sample_size(50, 0.001), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the retained count is a scaled floating-point product"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "point counts are far below 2^52"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the product is floored, non-negative, and at most `count`"
)]
pub fn sample_size(count: usize, fraction: f64) -> usize {
    let scaled = (count as f64 * fraction).floor();
    if scaled <= 0.0 {
        0
    } else {
        (scaled as usize).min(count)
    }
}

/// Noise level and sample fraction applied to a single shape.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smiley_core::{Perturbation, Point, Shape};
///
/// let outline = Shape::circle(5.0, Point::ORIGIN, 100).expect("valid circle").trace();
/// let perturbation = Perturbation::new(0.1, 0.7).expect("valid parameters");
/// let mut rng = SmallRng::seed_from_u64(7);
/// let sampled = perturbation.apply(&outline, &mut rng);
/// assert_eq!(sampled.len(), 70);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perturbation {
    noise_level: f64,
    sample_fraction: f64,
}

impl Perturbation {
    /// Validates and captures the transform parameters.
    ///
    /// # Errors
    /// Returns [`SmileyError::InvalidNoiseLevel`] when `noise_level` is
    /// negative or not finite, and [`SmileyError::InvalidSampleFraction`]
    /// when `sample_fraction` lies outside `(0, 1]`.
    pub fn new(noise_level: f64, sample_fraction: f64) -> Result<Self> {
        if !noise_level.is_finite() || noise_level < 0.0 {
            return Err(SmileyError::InvalidNoiseLevel);
        }
        if !sample_fraction.is_finite() || sample_fraction <= 0.0 || sample_fraction > 1.0 {
            return Err(SmileyError::InvalidSampleFraction);
        }
        Ok(Self {
            noise_level,
            sample_fraction,
        })
    }

    /// Standard deviation of the per-axis noise.
    #[must_use]
    pub const fn noise_level(&self) -> f64 {
        self.noise_level
    }

    /// Fraction of points retained.
    #[must_use]
    pub const fn sample_fraction(&self) -> f64 {
        self.sample_fraction
    }

    /// Perturbs every point and keeps a random subset.
    ///
    /// All x offsets are drawn first, then all y offsets, then the retained
    /// indices, so a seeded `rng` reproduces the same output. The result
    /// holds exactly [`sample_size`] points drawn from distinct source
    /// indices in random order.
    pub fn apply<R: Rng + ?Sized>(&self, points: &PointSet, rng: &mut R) -> PointSet {
        let noisy_xs = self.jitter(points.xs(), rng);
        let noisy_ys = self.jitter(points.ys(), rng);

        let count = points.len();
        let keep = sample_size(count, self.sample_fraction);
        index::sample(rng, count, keep)
            .into_iter()
            .filter_map(|idx| {
                let x = noisy_xs.get(idx)?;
                let y = noisy_ys.get(idx)?;
                Some(Point::new(*x, *y))
            })
            .collect()
    }

    /// Adds an independent `N(0, σ²)` draw to each value.
    #[expect(
        clippy::float_arithmetic,
        reason = "additive noise is floating-point arithmetic"
    )]
    fn jitter<R: Rng + ?Sized>(&self, values: &[f64], rng: &mut R) -> Vec<f64> {
        values
            .iter()
            .map(|value| {
                let draw: f64 = rng.sample(StandardNormal);
                value + self.noise_level * draw
            })
            .collect()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
#[expect(
    clippy::float_arithmetic,
    reason = "statistical assertions require floating-point arithmetic"
)]
mod tests {
    use super::*;
    use crate::shape::Shape;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::{fixture, rstest};

    #[fixture]
    fn outline() -> PointSet {
        Shape::circle(5.0, Point::ORIGIN, 100)
            .expect("valid circle")
            .trace()
    }

    fn contains_point(points: &PointSet, target: Point) -> bool {
        points.iter().any(|point| point == target)
    }

    #[rstest]
    #[case::fraction_zero(0.1, 0.0)]
    #[case::fraction_above_one(0.1, 1.5)]
    #[case::fraction_nan(0.1, f64::NAN)]
    fn rejects_invalid_fraction(#[case] noise: f64, #[case] fraction: f64) {
        let err = Perturbation::new(noise, fraction).expect_err("fraction must be rejected");
        assert_eq!(err, SmileyError::InvalidSampleFraction);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_noise(#[case] noise: f64) {
        let err = Perturbation::new(noise, 0.5).expect_err("noise must be rejected");
        assert_eq!(err, SmileyError::InvalidNoiseLevel);
    }

    #[rstest]
    fn zero_noise_full_fraction_permutes_the_input(outline: PointSet) {
        let perturbation = Perturbation::new(0.0, 1.0).expect("valid");
        let mut rng = SmallRng::seed_from_u64(11);
        let sampled = perturbation.apply(&outline, &mut rng);
        assert_eq!(sampled.len(), outline.len());
        for point in sampled.iter() {
            assert!((point.x * point.x + point.y * point.y - 25.0).abs() < 1e-9);
            assert!(contains_point(&outline, point));
        }
    }

    #[rstest]
    fn zero_noise_output_is_a_subset_of_the_input(outline: PointSet) {
        let perturbation = Perturbation::new(0.0, 0.3).expect("valid");
        let mut rng = SmallRng::seed_from_u64(3);
        let sampled = perturbation.apply(&outline, &mut rng);
        assert_eq!(sampled.len(), 30);
        assert!(sampled.iter().all(|point| contains_point(&outline, point)));
    }

    #[rstest]
    fn noisy_points_stay_near_the_circle(outline: PointSet) {
        let sigma = 0.1;
        let perturbation = Perturbation::new(sigma, 0.7).expect("valid");
        let mut rng = SmallRng::seed_from_u64(42);
        let sampled = perturbation.apply(&outline, &mut rng);
        assert_eq!(sampled.len(), 70);
        let bound = 4.0 * sigma * std::f64::consts::SQRT_2;
        for point in sampled.iter() {
            let distance = (point.x.hypot(point.y) - 5.0).abs();
            assert!(distance <= bound, "{point:?} is {distance} from the circle");
        }
    }

    #[rstest]
    fn tiny_fraction_yields_an_empty_set() {
        let arc = Shape::circle(3.0, Point::ORIGIN, 50)
            .expect("valid")
            .trace();
        let perturbation = Perturbation::new(0.1, 0.001).expect("valid");
        let mut rng = SmallRng::seed_from_u64(5);
        assert!(perturbation.apply(&arc, &mut rng).is_empty());
    }

    #[rstest]
    fn same_seed_reproduces_output(outline: PointSet) {
        let perturbation = Perturbation::new(0.1, 0.7).expect("valid");
        let first = perturbation.apply(&outline, &mut SmallRng::seed_from_u64(9));
        let second = perturbation.apply(&outline, &mut SmallRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_diverge(outline: PointSet) {
        let perturbation = Perturbation::new(0.1, 0.7).expect("valid");
        let first = perturbation.apply(&outline, &mut SmallRng::seed_from_u64(1));
        let second = perturbation.apply(&outline, &mut SmallRng::seed_from_u64(2));
        assert_ne!(first, second);
    }

    proptest! {
        #[test]
        fn retains_floor_of_scaled_count_from_distinct_sources(
            count in 1_usize..400,
            fraction in 0.0001_f64..=1.0,
            seed in any::<u64>(),
        ) {
            let xs: Vec<f64> = (0..count)
                .map(|idx| f64::from(u32::try_from(idx).unwrap_or(u32::MAX)))
                .collect();
            let ys = xs.iter().map(|x| -x).collect();
            let points = PointSet::new(xs, ys).expect("equal lengths");
            let perturbation = Perturbation::new(0.0, fraction).expect("valid");
            let sampled = perturbation.apply(&points, &mut SmallRng::seed_from_u64(seed));

            prop_assert_eq!(sampled.len(), sample_size(count, fraction));
            let mut seen = std::collections::HashSet::new();
            for point in sampled.iter() {
                prop_assert!((point.x + point.y).abs() < f64::EPSILON, "pairing must be preserved");
                prop_assert!(seen.insert(point.x.to_bits()), "index {} repeated", point.x);
            }
        }
    }
}
