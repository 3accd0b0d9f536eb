//! Integration tests for face generation.

#![expect(clippy::expect_used, reason = "tests require contextual panics")]

mod common;

use common::CaptureLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use smiley_core::{FaceConfig, Point, ShapeKind, SmileyError, generate_face};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn noiseless() -> FaceConfig {
    FaceConfig {
        noise_level: 0.0,
        sample_fraction: 1.0,
        ..FaceConfig::default()
    }
}

#[rstest]
fn defaults_produce_the_expected_point_count() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let face = generate_face(&FaceConfig::default(), &mut rng).expect("defaults are valid");
    assert_eq!(face.points().len(), 245);
    assert_eq!(face.points().xs().len(), face.points().ys().len());
}

#[rstest]
fn fixed_seed_reproduces_the_cloud() {
    let config = FaceConfig::default();
    let first = generate_face(&config, &mut SmallRng::seed_from_u64(99)).expect("valid");
    let second = generate_face(&config, &mut SmallRng::seed_from_u64(99)).expect("valid");
    assert_eq!(first, second);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "radius checks compare squared distances"
)]
fn noiseless_outline_lies_on_its_circle(noiseless: FaceConfig) {
    let mut rng = SmallRng::seed_from_u64(0);
    let face = generate_face(&noiseless, &mut rng).expect("valid");
    let outline = face
        .groups()
        .iter()
        .find(|group| group.kind == ShapeKind::Outline)
        .expect("outline group");
    assert_eq!(outline.points.len(), 100);
    for point in outline.points.iter() {
        let radius_sq = point.x.mul_add(point.x, point.y * point.y);
        assert!((radius_sq - 25.0).abs() < 1e-9, "{point:?} is off the outline");
    }
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "eye checks measure distances from each centre"
)]
fn noiseless_eyes_circle_their_offsets(noiseless: FaceConfig) {
    let mut rng = SmallRng::seed_from_u64(0);
    let face = generate_face(&noiseless, &mut rng).expect("valid");
    for (kind, center) in [
        (ShapeKind::LeftEye, Point::new(-2.0, 2.0)),
        (ShapeKind::RightEye, Point::new(2.0, 2.0)),
    ] {
        let group = face
            .groups()
            .iter()
            .find(|group| group.kind == kind)
            .expect("eye group");
        for point in group.points.iter() {
            let distance = (point.x - center.x).hypot(point.y - center.y);
            assert!((distance - 0.5).abs() < 1e-9, "{kind} point {point:?} is off its circle");
        }
    }
}

#[rstest]
fn tiny_fraction_empties_every_group() {
    let config = FaceConfig {
        sample_fraction: 0.001,
        ..FaceConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(4);
    let face = generate_face(&config, &mut rng).expect("valid");
    assert!(face.points().is_empty());
    assert!(face.groups().iter().all(|group| group.points.is_empty()));
}

#[rstest]
fn generation_records_its_span_and_per_shape_events() {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let mut rng = SmallRng::seed_from_u64(12);

    let face = tracing::subscriber::with_default(subscriber, || {
        generate_face(&FaceConfig::default(), &mut rng)
    })
    .expect("valid");

    let span = layer.span_named("face.generate").expect("face.generate span");
    assert_eq!(span.fields.get("face_radius"), Some(&"5.0".to_owned()));
    assert_eq!(span.fields.get("sample_fraction"), Some(&"0.7".to_owned()));

    let sampled = layer.events_with_message("shape sampled");
    assert_eq!(sampled.len(), face.groups().len());
    assert!(sampled.iter().all(|event| event.level == Level::DEBUG));
    let shapes: Vec<&str> = sampled
        .iter()
        .filter_map(|event| event.fields.get("shape").map(String::as_str))
        .collect();
    assert_eq!(shapes, vec!["outline", "left_eye", "right_eye", "mouth"]);
}

#[rstest]
fn invalid_configuration_draws_nothing() {
    let config = FaceConfig {
        mouth_radius: -3.0,
        ..FaceConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(5);
    let mut untouched = SmallRng::seed_from_u64(5);
    let err = generate_face(&config, &mut rng).expect_err("negative radius must be rejected");
    assert_eq!(
        err,
        SmileyError::InvalidRadius {
            parameter: "mouth_radius"
        }
    );
    use rand::Rng;
    assert_eq!(rng.r#gen::<u64>(), untouched.r#gen::<u64>());
}
