//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests generate into temporary directories and assert error
//! handling behaviour. These helpers keep the test cases concise.

use std::path::Path;

use smiley_core::{
    DEFAULT_EYE_RADIUS, DEFAULT_FACE_RADIUS, DEFAULT_MOUTH_RADIUS, DEFAULT_NOISE_LEVEL,
    DEFAULT_SAMPLE_FRACTION,
};
use tempfile::TempDir;

use super::commands::run_generate;
use super::{CliError, FaceArgs, GenerateCommand, PlotArgs};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn default_face() -> FaceArgs {
    FaceArgs {
        face_radius: DEFAULT_FACE_RADIUS,
        eye_radius: DEFAULT_EYE_RADIUS,
        mouth_radius: DEFAULT_MOUTH_RADIUS,
        center_x: 0.0,
        center_y: 0.0,
        noise_level: DEFAULT_NOISE_LEVEL,
        sample_fraction: DEFAULT_SAMPLE_FRACTION,
    }
}

pub(super) fn generate_into(dir: &Path, face: FaceArgs, no_plot: bool) -> GenerateCommand {
    GenerateCommand {
        face,
        seed: Some(42),
        output: dir.join("how_are_you_feeling.csv"),
        plot: PlotArgs {
            path: dir.join("how_are_you_feeling.svg"),
            no_plot,
        },
    }
}

pub(super) fn run_generate_expecting_error(cmd: GenerateCommand, panic_msg: &str) -> CliError {
    match run_generate(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
