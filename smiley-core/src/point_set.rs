//! Paired coordinate sequences.

use crate::error::{Result, SmileyError};

/// A single 2-D coordinate.
///
/// # Examples
/// ```
/// use smiley_core::Point;
///
/// let origin = Point::ORIGIN;
/// assert_eq!(origin, Point::new(0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by `offset`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "translation is coordinate addition"
    )]
    pub fn offset_by(self, offset: Self) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) const fn validate(self, parameter: &'static str) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(SmileyError::InvalidCenter { parameter })
        }
    }
}

/// An ordered pair of equal-length x and y sequences.
///
/// The index pairing is the only identity a point has: the same index in
/// both sequences describes one point.
///
/// # Examples
/// ```
/// use smiley_core::PointSet;
///
/// let points = PointSet::new(vec![0.0, 1.0], vec![2.0, 3.0]).expect("equal lengths");
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.get(1).map(|p| p.y), Some(3.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PointSet {
    /// Builds a point set from its coordinate sequences.
    ///
    /// # Errors
    /// Returns [`SmileyError::LengthMismatch`] when the sequences differ in
    /// length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(SmileyError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(Self { xs, ys })
    }

    /// Returns an empty point set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// Returns an empty point set with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Appends a single point.
    pub fn push(&mut self, point: Point) {
        self.xs.push(point.x);
        self.ys.push(point.y);
    }

    /// Appends every point of `other`, preserving its order.
    pub fn extend_from(&mut self, other: &Self) {
        self.xs.extend_from_slice(&other.xs);
        self.ys.extend_from_slice(&other.ys);
    }

    /// Number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` when the set holds no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The x coordinates.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y coordinates.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        let x = self.xs.get(index)?;
        let y = self.ys.get(index)?;
        Some(Point::new(*x, *y))
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(x, y)| Point::new(*x, *y))
    }

    /// Splits the set back into its coordinate sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let (xs, ys) = iter.into_iter().map(|point| (point.x, point.y)).unzip();
        Self { xs, ys }
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_rejects_mismatched_lengths() {
        let err = PointSet::new(vec![1.0, 2.0], vec![1.0]).expect_err("lengths differ");
        assert_eq!(err, SmileyError::LengthMismatch { xs: 2, ys: 1 });
    }

    #[rstest]
    fn collects_points_in_order() {
        let points: PointSet = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
            .into_iter()
            .collect();
        assert_eq!(points.xs(), &[1.0, 3.0]);
        assert_eq!(points.ys(), &[2.0, 4.0]);
        assert_eq!(points.get(2), None);
    }

    #[rstest]
    fn extend_from_appends_after_existing_points() {
        let mut points = PointSet::new(vec![0.0], vec![0.0]).expect("valid");
        let tail = PointSet::new(vec![1.0, 2.0], vec![-1.0, -2.0]).expect("valid");
        points.extend_from(&tail);
        let collected: Vec<Point> = points.iter().collect();
        assert_eq!(
            collected,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, -1.0),
                Point::new(2.0, -2.0)
            ]
        );
    }

    #[rstest]
    #[case(Point::new(f64::NAN, 0.0))]
    #[case(Point::new(0.0, f64::INFINITY))]
    fn validate_rejects_non_finite_points(#[case] point: Point) {
        let err = point.validate("center").expect_err("non-finite point");
        assert_eq!(err, SmileyError::InvalidCenter { parameter: "center" });
    }
}
