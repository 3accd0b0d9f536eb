//! Error types for the smiley core library.
//!
//! Parameter validation failures are reported through [`SmileyError`] before
//! any output is produced; sink failures are reported through [`SinkError`].
//! Both map onto the coarse [`ErrorKind`] categories and expose stable
//! machine-readable codes.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Coarse failure categories shared by every error in the crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A caller-supplied parameter was rejected before any output was produced.
    InvalidParameter,
    /// Writing an artefact to its destination failed.
    IoFailure,
}

/// Errors raised while validating shape, noise, or sampling parameters.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SmileyError {
    /// A radius was negative or not finite.
    #[error("radius `{parameter}` must be finite and non-negative")]
    InvalidRadius {
        /// Name of the offending radius.
        parameter: &'static str,
    },
    /// A centre or offset coordinate was not finite.
    #[error("point `{parameter}` must have finite coordinates")]
    InvalidCenter {
        /// Name of the offending point.
        parameter: &'static str,
    },
    /// An angular bound was not finite.
    #[error("angle `{parameter}` must be finite")]
    InvalidAngle {
        /// Name of the offending bound.
        parameter: &'static str,
    },
    /// The angular range had identical start and end angles.
    #[error("angular range start and end must differ")]
    EmptyAngularRange,
    /// A shape was asked for zero samples.
    #[error("sample count must be at least 1")]
    ZeroSamples,
    /// The noise standard deviation was negative or not finite.
    #[error("noise level must be finite and non-negative")]
    InvalidNoiseLevel,
    /// The sample fraction fell outside `(0, 1]`.
    #[error("sample fraction must lie in (0, 1]")]
    InvalidSampleFraction,
    /// The x and y sequences of a point set had different lengths.
    #[error("point set axes differ in length: x={xs}, y={ys}")]
    LengthMismatch {
        /// Length of the x sequence.
        xs: usize,
        /// Length of the y sequence.
        ys: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SmileyError`] variants.
    enum SmileyErrorCode for SmileyError {
        /// A radius was negative or not finite.
        InvalidRadius => InvalidRadius { .. } => "SMILEY_INVALID_RADIUS",
        /// A centre or offset coordinate was not finite.
        InvalidCenter => InvalidCenter { .. } => "SMILEY_INVALID_CENTER",
        /// An angular bound was not finite.
        InvalidAngle => InvalidAngle { .. } => "SMILEY_INVALID_ANGLE",
        /// The angular range had identical start and end angles.
        EmptyAngularRange => EmptyAngularRange => "SMILEY_EMPTY_ANGULAR_RANGE",
        /// A shape was asked for zero samples.
        ZeroSamples => ZeroSamples => "SMILEY_ZERO_SAMPLES",
        /// The noise standard deviation was invalid.
        InvalidNoiseLevel => InvalidNoiseLevel => "SMILEY_INVALID_NOISE_LEVEL",
        /// The sample fraction was invalid.
        InvalidSampleFraction => InvalidSampleFraction => "SMILEY_INVALID_SAMPLE_FRACTION",
        /// The axes of a point set differed in length.
        LengthMismatch => LengthMismatch { .. } => "SMILEY_LENGTH_MISMATCH",
    }
}

impl SmileyError {
    /// Every parameter error is fatal and reported before output is written.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidParameter
    }
}

/// Errors raised while persisting or rendering a point cloud.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SinkError {
    /// Creating or writing the destination failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The plotting back-end rejected the drawing.
    #[error("failed to render scatter plot `{path}`: {message}")]
    Render {
        /// Destination of the plot.
        path: PathBuf,
        /// Back-end failure description.
        message: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`SinkError`] variants.
    enum SinkErrorCode for SinkError {
        /// Creating or writing the destination failed.
        Io => Io { .. } => "SINK_IO",
        /// The plotting back-end rejected the drawing.
        Render => Render { .. } => "SINK_RENDER",
    }
}

impl SinkError {
    /// Sink failures surface to the caller without retry.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::IoFailure
    }
}

/// Convenient result alias for parameter-validated operations.
pub type Result<T, E = SmileyError> = std::result::Result<T, E>;
