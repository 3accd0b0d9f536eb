//! Command-line interface orchestration for the smiley generator.
//!
//! The CLI offers a single `generate` command that builds a face
//! configuration from flags, generates the point cloud, writes the CSV
//! table, and optionally renders the scatter plot.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, FaceArgs, GenerateCommand, GroupSummary, PlotArgs,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
