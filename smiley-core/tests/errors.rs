//! Error code and category mapping tests.

use std::io;
use std::path::PathBuf;

use rstest::rstest;
use smiley_core::{ErrorKind, SinkError, SinkErrorCode, SmileyError, SmileyErrorCode};

#[rstest]
#[case(SmileyError::InvalidRadius { parameter: "face_radius" }, SmileyErrorCode::InvalidRadius)]
#[case(SmileyError::InvalidCenter { parameter: "center" }, SmileyErrorCode::InvalidCenter)]
#[case(SmileyError::InvalidAngle { parameter: "start" }, SmileyErrorCode::InvalidAngle)]
#[case(SmileyError::EmptyAngularRange, SmileyErrorCode::EmptyAngularRange)]
#[case(SmileyError::ZeroSamples, SmileyErrorCode::ZeroSamples)]
#[case(SmileyError::InvalidNoiseLevel, SmileyErrorCode::InvalidNoiseLevel)]
#[case(SmileyError::InvalidSampleFraction, SmileyErrorCode::InvalidSampleFraction)]
#[case(SmileyError::LengthMismatch { xs: 1, ys: 2 }, SmileyErrorCode::LengthMismatch)]
fn parameter_errors_map_to_stable_codes(
    #[case] error: SmileyError,
    #[case] expected: SmileyErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
    assert_eq!(error.kind(), ErrorKind::InvalidParameter);
    assert!(expected.as_str().starts_with("SMILEY_"));
}

#[rstest]
fn sink_errors_are_io_failures() {
    let io_err = SinkError::Io {
        path: PathBuf::from("out.csv"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(io_err.code(), SinkErrorCode::Io);
    assert_eq!(io_err.kind(), ErrorKind::IoFailure);
    assert!(io_err.to_string().contains("out.csv"));

    let render_err = SinkError::Render {
        path: PathBuf::from("out.svg"),
        message: "backend failed".to_owned(),
    };
    assert_eq!(render_err.code().as_str(), "SINK_RENDER");
    assert_eq!(render_err.kind(), ErrorKind::IoFailure);
}
