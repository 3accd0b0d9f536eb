//! Smiley face assembly.
//!
//! A face is four shape instances traced, perturbed, and sampled in a fixed
//! order against one random source: the outline, the left eye, the right
//! eye, and the mouth. The per-shape results are kept alongside the combined
//! cloud so callers can report on each group.

use std::f64::consts::FRAC_PI_4;
use std::fmt;

use rand::Rng;
use tracing::{debug, instrument};

use crate::aggregate::concatenate;
use crate::error::{Result, SmileyError};
use crate::perturb::Perturbation;
use crate::point_set::{Point, PointSet};
use crate::shape::{AngularRange, ArcOrientation, Shape};

/// Radius of the face outline.
pub const DEFAULT_FACE_RADIUS: f64 = 5.0;
/// Radius of each eye.
pub const DEFAULT_EYE_RADIUS: f64 = 0.5;
/// Radius of the mouth arc.
pub const DEFAULT_MOUTH_RADIUS: f64 = 3.0;
/// Standard deviation of the per-axis noise.
pub const DEFAULT_NOISE_LEVEL: f64 = 0.1;
/// Fraction of each shape's points retained.
pub const DEFAULT_SAMPLE_FRACTION: f64 = 0.7;
/// Samples traced for the outline and each eye.
pub const DEFAULT_OUTLINE_SAMPLES: usize = 100;
/// Samples traced for the mouth arc.
pub const DEFAULT_MOUTH_SAMPLES: usize = 50;

/// Which part of the face a shape instance draws.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShapeKind {
    /// The large enclosing circle.
    Outline,
    /// The eye left of the centre.
    LeftEye,
    /// The eye right of the centre.
    RightEye,
    /// The arc below the eyes.
    Mouth,
}

impl ShapeKind {
    /// Generation order of the face parts.
    pub const ALL: [Self; 4] = [Self::Outline, Self::LeftEye, Self::RightEye, Self::Mouth];

    /// Stable lowercase label used in logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::Mouth => "mouth",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named shape ready to be traced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeInstance {
    /// Face part drawn by the shape.
    pub kind: ShapeKind,
    /// Geometry of the part.
    pub shape: Shape,
}

/// Parameters controlling face geometry, noise, and sampling.
///
/// The defaults draw a face of radius 5 centred on the origin with eyes at
/// `(∓2, 2)`, a mouth of radius 3, noise `σ = 0.1`, and 70% of each shape's
/// points retained.
///
/// # Examples
/// ```
/// use smiley_core::{FaceConfig, Point};
///
/// let config = FaceConfig {
///     center: Point::new(1.0, -1.0),
///     noise_level: 0.0,
///     ..FaceConfig::default()
/// };
/// config.validate().expect("configuration is valid");
/// assert_eq!(config.shapes().expect("valid shapes").len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FaceConfig {
    /// Radius of the face outline.
    pub face_radius: f64,
    /// Radius of each eye.
    pub eye_radius: f64,
    /// Radius of the mouth arc.
    pub mouth_radius: f64,
    /// Centre of the face; the outline and mouth share it.
    pub center: Point,
    /// Offset of the right eye from the centre; the left eye mirrors it
    /// horizontally.
    pub eye_offset: Point,
    /// Standard deviation of the per-axis noise.
    pub noise_level: f64,
    /// Fraction of each shape's points retained, in `(0, 1]`.
    pub sample_fraction: f64,
    /// Samples traced for the outline and each eye.
    pub outline_samples: usize,
    /// Samples traced for the mouth arc.
    pub mouth_samples: usize,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            face_radius: DEFAULT_FACE_RADIUS,
            eye_radius: DEFAULT_EYE_RADIUS,
            mouth_radius: DEFAULT_MOUTH_RADIUS,
            center: Point::ORIGIN,
            eye_offset: Point::new(2.0, 2.0),
            noise_level: DEFAULT_NOISE_LEVEL,
            sample_fraction: DEFAULT_SAMPLE_FRACTION,
            outline_samples: DEFAULT_OUTLINE_SAMPLES,
            mouth_samples: DEFAULT_MOUTH_SAMPLES,
        }
    }
}

impl FaceConfig {
    /// Checks every parameter without drawing any points.
    ///
    /// # Errors
    /// Returns the first [`SmileyError`] found.
    pub fn validate(&self) -> Result<()> {
        self.shapes()?;
        self.perturbation()?;
        Ok(())
    }

    /// The noise-and-sample transform shared by every shape.
    ///
    /// # Errors
    /// Returns [`SmileyError`] when the noise level or sample fraction is
    /// invalid.
    pub fn perturbation(&self) -> Result<Perturbation> {
        Perturbation::new(self.noise_level, self.sample_fraction)
    }

    /// Builds the face parts in generation order.
    ///
    /// # Errors
    /// Returns [`SmileyError`] when a radius, centre, offset, or sample count
    /// is invalid.
    #[expect(
        clippy::float_arithmetic,
        reason = "eye placement and the mouth range are derived arithmetically"
    )]
    pub fn shapes(&self) -> Result<Vec<ShapeInstance>> {
        let center = self.center.validate("center")?;
        let offset = self.eye_offset.validate("eye_offset")?;
        let left_center = center.offset_by(Point::new(-offset.x, offset.y));
        let right_center = center.offset_by(offset);
        let mouth_range = AngularRange::new(FRAC_PI_4, 3.0 * FRAC_PI_4, self.mouth_samples)?;

        Ok(vec![
            ShapeInstance {
                kind: ShapeKind::Outline,
                shape: named_circle(self.face_radius, "face_radius", center, self.outline_samples)?,
            },
            ShapeInstance {
                kind: ShapeKind::LeftEye,
                shape: named_circle(
                    self.eye_radius,
                    "eye_radius",
                    left_center,
                    self.outline_samples,
                )?,
            },
            ShapeInstance {
                kind: ShapeKind::RightEye,
                shape: named_circle(
                    self.eye_radius,
                    "eye_radius",
                    right_center,
                    self.outline_samples,
                )?,
            },
            ShapeInstance {
                kind: ShapeKind::Mouth,
                shape: Shape::arc(self.mouth_radius, center, mouth_range, ArcOrientation::Lower)
                    .map_err(|err| rename_radius(err, "mouth_radius"))?,
            },
        ])
    }
}

fn named_circle(
    radius: f64,
    parameter: &'static str,
    center: Point,
    samples: usize,
) -> Result<Shape> {
    Shape::circle(radius, center, samples).map_err(|err| rename_radius(err, parameter))
}

fn rename_radius(err: SmileyError, parameter: &'static str) -> SmileyError {
    match err {
        SmileyError::InvalidRadius { .. } => SmileyError::InvalidRadius { parameter },
        other => other,
    }
}

/// Sampled points of one face part.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeGroup {
    /// Face part the points belong to.
    pub kind: ShapeKind,
    /// Number of ideal points traced before sampling.
    pub traced: usize,
    /// Perturbed and sampled points.
    pub points: PointSet,
}

/// The generated face: per-part groups plus their concatenation.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceCloud {
    groups: Vec<ShapeGroup>,
    combined: PointSet,
}

impl FaceCloud {
    /// Per-part results in generation order.
    #[must_use]
    pub fn groups(&self) -> &[ShapeGroup] {
        &self.groups
    }

    /// Every sampled point, grouped by part in generation order.
    #[must_use]
    pub const fn points(&self) -> &PointSet {
        &self.combined
    }

    /// Consumes the cloud, returning the combined point set.
    #[must_use]
    pub fn into_points(self) -> PointSet {
        self.combined
    }
}

/// Generates a noisy, subsampled smiley face.
///
/// Parameters are validated before any random draws, so an invalid
/// configuration produces no output at all.
///
/// # Errors
/// Returns [`SmileyError`] when `config` is invalid.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smiley_core::{FaceConfig, generate_face};
///
/// let mut rng = SmallRng::seed_from_u64(2024);
/// let face = generate_face(&FaceConfig::default(), &mut rng).expect("defaults are valid");
/// assert_eq!(face.points().len(), 70 + 70 + 70 + 35);
/// ```
#[instrument(
    name = "face.generate",
    err,
    skip(config, rng),
    fields(
        face_radius = config.face_radius,
        eye_radius = config.eye_radius,
        mouth_radius = config.mouth_radius,
        noise_level = config.noise_level,
        sample_fraction = config.sample_fraction,
    ),
)]
pub fn generate_face<R: Rng + ?Sized>(config: &FaceConfig, rng: &mut R) -> Result<FaceCloud> {
    let shapes = config.shapes()?;
    let perturbation = config.perturbation()?;

    let groups: Vec<ShapeGroup> = shapes
        .iter()
        .map(|instance| {
            let ideal = instance.shape.trace();
            let points = perturbation.apply(&ideal, rng);
            debug!(
                shape = %instance.kind,
                traced = ideal.len(),
                sampled = points.len(),
                "shape sampled"
            );
            ShapeGroup {
                kind: instance.kind,
                traced: ideal.len(),
                points,
            }
        })
        .collect();

    let combined = concatenate(groups.iter().map(|group| &group.points));
    debug!(points = combined.len(), "face assembled");
    Ok(FaceCloud { groups, combined })
}
