//! Two-column CSV serialisation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::SinkError;
use crate::point_set::{Point, PointSet};

const CSV_HEADER: &str = "x,y\n";

fn to_csv_row(point: Point) -> String {
    format!("{},{}\n", point.x, point.y)
}

fn render_csv(points: &PointSet) -> String {
    let mut output = String::from(CSV_HEADER);
    for point in points.iter() {
        output.push_str(&to_csv_row(point));
    }
    output
}

/// Writes `points` as CSV to `writer`.
///
/// The table has the header `x,y` and one row per point; an empty set
/// produces the header alone.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use smiley_core::{PointSet, write_csv_to};
///
/// let points = PointSet::new(vec![1.5, -2.0], vec![0.25, 3.0]).expect("valid");
/// let mut buffer = Vec::new();
/// write_csv_to(&mut buffer, &points).expect("writing to a Vec succeeds");
/// assert_eq!(String::from_utf8(buffer).expect("utf-8"), "x,y\n1.5,0.25\n-2,3\n");
/// ```
pub fn write_csv_to(mut writer: impl Write, points: &PointSet) -> io::Result<()> {
    writer.write_all(render_csv(points).as_bytes())?;
    writer.flush()
}

/// Writes `points` as CSV to `path`, creating parent directories as needed.
///
/// Returns the path of the written file.
///
/// # Errors
/// Returns [`SinkError::Io`] if directory creation or the write fails.
pub fn write_csv(path: impl AsRef<Path>, points: &PointSet) -> Result<PathBuf, SinkError> {
    let csv_path = path.as_ref().to_path_buf();
    let io_error = |source| SinkError::Io {
        path: csv_path.clone(),
        source,
    };
    if let Some(parent) = csv_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(&csv_path, render_csv(points)).map_err(io_error)?;
    info!(path = %csv_path.display(), rows = points.len(), "point cloud written");
    Ok(csv_path)
}
