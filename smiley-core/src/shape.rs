//! Parametric curve generation.
//!
//! Every shape is a circle or circular arc traced over an [`AngularRange`]
//! with evenly spaced angles that include both endpoints. The sign of the
//! sine term is controlled by [`ArcOrientation`], which is how the mouth arc
//! is mirrored below its centre.

use std::f64::consts::TAU;

use crate::error::{Result, SmileyError};
use crate::point_set::{Point, PointSet};

/// Evenly spaced angles between `start` and `end`, both inclusive.
///
/// # Examples
/// ```
/// use smiley_core::AngularRange;
///
/// let range = AngularRange::new(0.0, 1.0, 5).expect("valid range");
/// let angles: Vec<f64> = range.angles().collect();
/// assert_eq!(angles, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularRange {
    start: f64,
    end: f64,
    samples: usize,
}

impl AngularRange {
    /// Creates a range of `samples` angles from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`SmileyError::ZeroSamples`] when `samples` is zero,
    /// [`SmileyError::InvalidAngle`] when a bound is not finite, and
    /// [`SmileyError::EmptyAngularRange`] when `start == end`.
    #[expect(
        clippy::float_cmp,
        reason = "only exactly coincident bounds describe an empty range"
    )]
    pub fn new(start: f64, end: f64, samples: usize) -> Result<Self> {
        if samples == 0 {
            return Err(SmileyError::ZeroSamples);
        }
        if !start.is_finite() {
            return Err(SmileyError::InvalidAngle { parameter: "start" });
        }
        if !end.is_finite() {
            return Err(SmileyError::InvalidAngle { parameter: "end" });
        }
        if start == end {
            return Err(SmileyError::EmptyAngularRange);
        }
        Ok(Self {
            start,
            end,
            samples,
        })
    }

    /// A complete turn `[0, 2π]`.
    ///
    /// # Errors
    /// Returns [`SmileyError::ZeroSamples`] when `samples` is zero.
    pub fn full_turn(samples: usize) -> Result<Self> {
        Self::new(0.0, TAU, samples)
    }

    /// First angle of the range.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Last angle of the range.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Number of angles produced.
    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Iterates over the sampled angles.
    ///
    /// The final angle is exactly `end`; a single-sample range yields only
    /// `start`.
    #[expect(
        clippy::float_arithmetic,
        reason = "angle interpolation is floating-point arithmetic"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sample indices are far below 2^52"
    )]
    pub fn angles(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let last = self.samples.saturating_sub(1);
        let step = if last == 0 {
            0.0
        } else {
            (self.end - self.start) / last as f64
        };
        (0..self.samples).map(move |index| {
            if index == last && last > 0 {
                self.end
            } else {
                self.start + step * index as f64
            }
        })
    }
}

/// Sign applied to the sine term of a traced curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArcOrientation {
    /// `y = r·sin θ + cy`; angles in `(0, π)` land above the centre.
    Upper,
    /// `y = -r·sin θ + cy`; angles in `(0, π)` land below the centre.
    Lower,
}

impl ArcOrientation {
    const fn sign(self) -> f64 {
        match self {
            Self::Upper => 1.0,
            Self::Lower => -1.0,
        }
    }
}

/// A circle or arc described by closed-form parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    radius: f64,
    center: Point,
    range: AngularRange,
    orientation: ArcOrientation,
}

impl Shape {
    /// A full circle of `samples` points.
    ///
    /// # Errors
    /// Returns [`SmileyError`] when the radius is negative or not finite,
    /// the centre is not finite, or `samples` is zero.
    ///
    /// # Examples
    /// ```
    /// use smiley_core::{Point, Shape};
    ///
    /// let circle = Shape::circle(5.0, Point::ORIGIN, 100).expect("valid circle");
    /// assert_eq!(circle.trace().len(), 100);
    /// ```
    pub fn circle(radius: f64, center: Point, samples: usize) -> Result<Self> {
        Self::arc(
            radius,
            center,
            AngularRange::full_turn(samples)?,
            ArcOrientation::Upper,
        )
    }

    /// An arc over `range` with the given orientation.
    ///
    /// # Errors
    /// Returns [`SmileyError`] when the radius is negative or not finite or
    /// the centre is not finite.
    pub fn arc(
        radius: f64,
        center: Point,
        range: AngularRange,
        orientation: ArcOrientation,
    ) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SmileyError::InvalidRadius {
                parameter: "radius",
            });
        }
        Ok(Self {
            radius,
            center: center.validate("center")?,
            range,
            orientation,
        })
    }

    /// Radius of the curve.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Centre of the curve.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Angular domain of the curve.
    #[must_use]
    pub const fn range(&self) -> AngularRange {
        self.range
    }

    /// Orientation of the sine term.
    #[must_use]
    pub const fn orientation(&self) -> ArcOrientation {
        self.orientation
    }

    /// Traces the ideal, noise-free points of the curve.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "parametric curves are trigonometric expressions"
    )]
    pub fn trace(&self) -> PointSet {
        let sign = self.orientation.sign();
        self.range
            .angles()
            .map(|theta| {
                Point::new(
                    self.radius * theta.cos() + self.center.x,
                    sign * self.radius * theta.sin() + self.center.y,
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
#[expect(clippy::indexing_slicing, reason = "angle checks index known positions")]
#[expect(
    clippy::float_arithmetic,
    reason = "geometric assertions require floating-point arithmetic"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_4, PI};

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    #[case::zero_samples(0.0, 1.0, 0, SmileyError::ZeroSamples)]
    #[case::empty(1.0, 1.0, 10, SmileyError::EmptyAngularRange)]
    #[case::nan_start(f64::NAN, 1.0, 10, SmileyError::InvalidAngle { parameter: "start" })]
    #[case::infinite_end(0.0, f64::INFINITY, 10, SmileyError::InvalidAngle { parameter: "end" })]
    fn angular_range_rejects_malformed_input(
        #[case] start: f64,
        #[case] end: f64,
        #[case] samples: usize,
        #[case] expected: SmileyError,
    ) {
        let err = AngularRange::new(start, end, samples).expect_err("range must be rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn angles_include_both_endpoints() {
        let range = AngularRange::new(FRAC_PI_4, 3.0 * FRAC_PI_4, 50).expect("valid range");
        let angles: Vec<f64> = range.angles().collect();
        assert_eq!(angles.len(), 50);
        assert_eq!(angles.first().copied(), Some(FRAC_PI_4));
        assert_eq!(angles.last().copied(), Some(3.0 * FRAC_PI_4));
        assert!(angles.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[rstest]
    fn single_sample_range_yields_start() {
        let range = AngularRange::new(0.5, 2.0, 1).expect("valid range");
        assert_eq!(range.angles().collect::<Vec<_>>(), vec![0.5]);
    }

    #[rstest]
    fn descending_range_is_allowed() {
        let range = AngularRange::new(PI, 0.0, 3).expect("valid range");
        let angles: Vec<f64> = range.angles().collect();
        assert!((angles[1] - PI / 2.0).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(5.0, Point::ORIGIN)]
    #[case(0.5, Point::new(-2.0, 2.0))]
    #[case(0.5, Point::new(2.0, 2.0))]
    fn circle_points_lie_on_the_circle(#[case] radius: f64, #[case] center: Point) {
        let circle = Shape::circle(radius, center, 100).expect("valid circle");
        let points = circle.trace();
        assert_eq!(points.len(), 100);
        for point in points.iter() {
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            assert!(
                (dx * dx + dy * dy - radius * radius).abs() < TOLERANCE,
                "point {point:?} is off the circle"
            );
        }
    }

    #[rstest]
    fn circle_closes_on_its_starting_point() {
        let points = Shape::circle(5.0, Point::ORIGIN, 100)
            .expect("valid circle")
            .trace();
        let first = points.get(0).expect("first point");
        let last = points.get(99).expect("last point");
        assert!((first.x - last.x).abs() < TOLERANCE);
        assert!((first.y - last.y).abs() < TOLERANCE);
    }

    #[rstest]
    fn lower_arc_bends_below_its_centre() {
        let range = AngularRange::new(FRAC_PI_4, 3.0 * FRAC_PI_4, 50).expect("valid range");
        let mouth = Shape::arc(3.0, Point::ORIGIN, range, ArcOrientation::Lower).expect("valid");
        let points = mouth.trace();
        assert!(points.ys().iter().all(|y| *y < 0.0));
        let lowest = points.ys().iter().copied().fold(f64::INFINITY, f64::min);
        assert!((lowest + 3.0).abs() < 1e-3, "arc bottoms out near -r");
    }

    #[rstest]
    fn zero_radius_collapses_onto_centre() {
        let center = Point::new(1.5, -0.5);
        let points = Shape::circle(0.0, center, 4).expect("valid").trace();
        assert!(points.iter().all(|point| point == center));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn rejects_invalid_radius(#[case] radius: f64) {
        let err = Shape::circle(radius, Point::ORIGIN, 10).expect_err("radius must be rejected");
        assert_eq!(err, SmileyError::InvalidRadius { parameter: "radius" });
    }
}
