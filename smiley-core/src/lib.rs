//! Smiley point-cloud core library.
//!
//! Traces the parts of a smiley face as parametric curves, perturbs each
//! part with Gaussian noise, subsamples it without replacement, and
//! concatenates the results into one cloud that can be written as CSV or
//! rendered as an SVG scatter plot.
//!
//! Every random draw goes through a caller-supplied [`rand::Rng`], so a
//! seeded generator reproduces the same cloud.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod error;
mod face;
mod perturb;
mod point_set;
mod shape;
pub mod sink;

pub use crate::{
    aggregate::concatenate,
    error::{ErrorKind, Result, SinkError, SinkErrorCode, SmileyError, SmileyErrorCode},
    face::{
        DEFAULT_EYE_RADIUS, DEFAULT_FACE_RADIUS, DEFAULT_MOUTH_RADIUS, DEFAULT_MOUTH_SAMPLES,
        DEFAULT_NOISE_LEVEL, DEFAULT_OUTLINE_SAMPLES, DEFAULT_SAMPLE_FRACTION, FaceCloud,
        FaceConfig, ShapeGroup, ShapeInstance, ShapeKind, generate_face,
    },
    perturb::{Perturbation, sample_size},
    point_set::{Point, PointSet},
    shape::{AngularRange, ArcOrientation, Shape},
    sink::{write_csv, write_csv_to},
};

#[cfg(feature = "plot")]
#[cfg_attr(docsrs, doc(cfg(feature = "plot")))]
pub use crate::sink::{PlotStyle, render_scatter};
