//! Output sinks for generated point clouds.
//!
//! The CSV writer is always available; the SVG scatter renderer is compiled
//! with the `plot` feature.

mod csv;
#[cfg(feature = "plot")]
#[cfg_attr(docsrs, doc(cfg(feature = "plot")))]
mod plot;

pub use csv::{write_csv, write_csv_to};
#[cfg(feature = "plot")]
#[cfg_attr(docsrs, doc(cfg(feature = "plot")))]
pub use plot::{PlotStyle, render_scatter};
