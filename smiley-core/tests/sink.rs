//! End-to-end tests from generation through the sinks.

#![expect(clippy::expect_used, reason = "tests require contextual panics")]

use std::fs;

use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use smiley_core::{FaceConfig, Perturbation, Point, Shape, generate_face, write_csv};
use tempfile::TempDir;

fn read_rows(contents: &str) -> Vec<(f64, f64)> {
    contents
        .lines()
        .skip(1)
        .map(|line| {
            let (x, y) = line.split_once(',').expect("two columns");
            (x.parse().expect("x parses"), y.parse().expect("y parses"))
        })
        .collect()
}

#[rstest]
fn written_table_matches_the_combined_cloud() {
    let dir = TempDir::new().expect("temp dir");
    let mut rng = SmallRng::seed_from_u64(31);
    let face = generate_face(&FaceConfig::default(), &mut rng).expect("valid");

    let path = write_csv(dir.path().join("how_are_you_feeling.csv"), face.points())
        .expect("write must succeed");
    let contents = fs::read_to_string(path).expect("read back");

    assert!(contents.starts_with("x,y\n"));
    let rows = read_rows(&contents);
    let expected: Vec<(f64, f64)> = face.points().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(rows, expected);
}

#[rstest]
fn degenerate_sampling_still_writes_a_header() {
    let dir = TempDir::new().expect("temp dir");
    let arc = Shape::circle(3.0, Point::ORIGIN, 50).expect("valid").trace();
    let sampled = Perturbation::new(0.1, 0.001)
        .expect("valid")
        .apply(&arc, &mut SmallRng::seed_from_u64(6));
    assert!(sampled.is_empty());

    let path = write_csv(dir.path().join("empty.csv"), &sampled).expect("write must succeed");
    assert_eq!(fs::read_to_string(path).expect("read back"), "x,y\n");
}

#[cfg(feature = "plot")]
#[rstest]
fn renders_the_default_face() {
    use smiley_core::{PlotStyle, render_scatter};

    let dir = TempDir::new().expect("temp dir");
    let mut rng = SmallRng::seed_from_u64(31);
    let face = generate_face(&FaceConfig::default(), &mut rng).expect("valid");
    let path = render_scatter(
        dir.path().join("plots").join("face.svg"),
        face.points(),
        &PlotStyle::default(),
    )
    .expect("render must succeed");
    let svg = fs::read_to_string(path).expect("read back");
    assert_eq!(svg.matches("<circle").count(), face.points().len());
}
