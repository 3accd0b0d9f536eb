//! SVG scatter rendering with equal axis scaling.

use std::fmt::Display;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::error::SinkError;
use crate::point_set::PointSet;

const MARGIN: u32 = 20;
const LABEL_AREA: u32 = 40;
const PADDING_RATIO: f64 = 0.05;

/// Appearance of a rendered scatter plot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotStyle {
    /// Side length of the square canvas in pixels.
    pub size: u32,
    /// Radius of each plotted point in pixels.
    pub point_radius: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            size: 640,
            point_radius: 3,
        }
    }
}

/// A square data window centred on the plotted points.
#[derive(Clone, Debug, PartialEq)]
struct SquareWindow {
    x: Range<f64>,
    y: Range<f64>,
}

impl SquareWindow {
    #[expect(
        clippy::float_arithmetic,
        reason = "window extents are derived from coordinate bounds"
    )]
    fn enclosing(points: &PointSet) -> Self {
        let Some((x_min, x_max)) = extent(points.xs()) else {
            return Self {
                x: -1.0..1.0,
                y: -1.0..1.0,
            };
        };
        let Some((y_min, y_max)) = extent(points.ys()) else {
            return Self {
                x: -1.0..1.0,
                y: -1.0..1.0,
            };
        };
        let span = (x_max - x_min).max(y_max - y_min);
        let half = if span > 0.0 {
            span * (0.5 + PADDING_RATIO)
        } else {
            1.0
        };
        let x_mid = (x_min + x_max) / 2.0;
        let y_mid = (y_min + y_max) / 2.0;
        Self {
            x: (x_mid - half)..(x_mid + half),
            y: (y_mid - half)..(y_mid + half),
        }
    }
}

fn extent(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, value| match acc {
        None => Some((*value, *value)),
        Some((low, high)) => Some((low.min(*value), high.max(*value))),
    })
}

fn render_error<E: Display>(path: &Path) -> impl Fn(E) -> SinkError + '_ {
    move |err| SinkError::Render {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn draw_scatter(path: &Path, points: &PointSet, style: &PlotStyle) -> Result<(), SinkError> {
    let window = SquareWindow::enclosing(points);
    let root = SVGBackend::new(path, (style.size, style.size)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error(path))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(window.x, window.y)
        .map_err(render_error(path))?;
    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(render_error(path))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new((point.x, point.y), style.point_radius, BLUE.filled())),
        )
        .map_err(render_error(path))?;
    root.present().map_err(render_error(path))
}

/// Renders `points` as an SVG scatter plot at `path`.
///
/// The canvas and plotting area are square and both axes cover the same
/// data span, so one unit is the same length horizontally and vertically.
/// An empty point set renders bare axes around the unit square.
///
/// # Errors
/// Returns [`SinkError::Io`] if the parent directory cannot be created and
/// [`SinkError::Render`] if the back-end fails to draw or save the plot.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use smiley_core::{PlotStyle, PointSet, render_scatter};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let points = PointSet::new(vec![0.0, 1.0], vec![0.0, 1.0])?;
/// let path = render_scatter(dir.path().join("plot.svg"), &points, &PlotStyle::default())?;
/// assert!(std::fs::read_to_string(path)?.contains("<svg"));
/// # Ok(())
/// # }
/// ```
pub fn render_scatter(
    path: impl AsRef<Path>,
    points: &PointSet,
    style: &PlotStyle,
) -> Result<PathBuf, SinkError> {
    let plot_path = path.as_ref().to_path_buf();
    if let Some(parent) = plot_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SinkError::Io {
            path: plot_path.clone(),
            source,
        })?;
    }

    draw_scatter(&plot_path, points, style)?;

    info!(path = %plot_path.display(), points = points.len(), "scatter plot rendered");
    Ok(plot_path)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
#[expect(
    clippy::float_arithmetic,
    reason = "window assertions compare floating-point extents"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn width(range: &Range<f64>) -> f64 {
        range.end - range.start
    }

    #[rstest]
    fn window_is_square_and_covers_every_point() {
        let points = PointSet::new(vec![-5.0, 5.0, 0.0], vec![-1.0, 0.5, 2.0]).expect("valid");
        let window = SquareWindow::enclosing(&points);
        assert!((width(&window.x) - width(&window.y)).abs() < 1e-12);
        for point in points.iter() {
            assert!(window.x.contains(&point.x));
            assert!(window.y.contains(&point.y));
        }
    }

    #[rstest]
    fn degenerate_windows_fall_back_to_unit_extent() {
        let single = PointSet::new(vec![3.0], vec![4.0]).expect("valid");
        let window = SquareWindow::enclosing(&single);
        assert_eq!(window.x, 2.0..4.0);
        assert_eq!(window.y, 3.0..5.0);
        assert_eq!(
            SquareWindow::enclosing(&PointSet::empty()),
            SquareWindow {
                x: -1.0..1.0,
                y: -1.0..1.0,
            }
        );
    }

    #[rstest]
    fn renders_one_marker_per_point() {
        let dir = TempDir::new().expect("temp dir");
        let points = PointSet::new(vec![0.0, 1.0, 2.0], vec![0.0, -1.0, 1.0]).expect("valid");
        let path = render_scatter(dir.path().join("scatter.svg"), &points, &PlotStyle::default())
            .expect("render must succeed");
        let svg = fs::read_to_string(path).expect("read back");
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<circle").count(), points.len());
    }

    #[rstest]
    fn renders_axes_for_an_empty_cloud() {
        let dir = TempDir::new().expect("temp dir");
        let path = render_scatter(
            dir.path().join("empty.svg"),
            &PointSet::empty(),
            &PlotStyle::default(),
        )
        .expect("render must succeed");
        let svg = fs::read_to_string(path).expect("read back");
        assert_eq!(svg.matches("<circle").count(), 0);
    }
}
