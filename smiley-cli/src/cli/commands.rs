//! Command implementations and argument parsing for the smiley CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use smiley_core::{
    DEFAULT_EYE_RADIUS, DEFAULT_FACE_RADIUS, DEFAULT_MOUTH_RADIUS, DEFAULT_NOISE_LEVEL,
    DEFAULT_SAMPLE_FRACTION, FaceConfig, PlotStyle, Point, ShapeKind, SinkError, SmileyError,
    generate_face, render_scatter, write_csv,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_OUTPUT: &str = "how_are_you_feeling.csv";
const DEFAULT_PLOT: &str = "how_are_you_feeling.svg";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "smiley", about = "Generate a noisy smiley-face point cloud.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate the point cloud, write it as CSV, and plot it.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Face geometry, noise, and sampling.
    #[command(flatten)]
    pub face: FaceArgs,

    /// Seed for the random source; a fresh seed is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Destination of the CSV table.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Scatter plot options.
    #[command(flatten)]
    pub plot: PlotArgs,
}

/// Face configuration flags.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct FaceArgs {
    /// Radius of the face outline.
    #[arg(long, default_value_t = DEFAULT_FACE_RADIUS, allow_negative_numbers = true)]
    pub face_radius: f64,

    /// Radius of each eye.
    #[arg(long, default_value_t = DEFAULT_EYE_RADIUS, allow_negative_numbers = true)]
    pub eye_radius: f64,

    /// Radius of the mouth arc.
    #[arg(long, default_value_t = DEFAULT_MOUTH_RADIUS, allow_negative_numbers = true)]
    pub mouth_radius: f64,

    /// Horizontal coordinate of the face centre.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_x: f64,

    /// Vertical coordinate of the face centre.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_y: f64,

    /// Standard deviation of the Gaussian noise on each axis.
    #[arg(long, default_value_t = DEFAULT_NOISE_LEVEL, allow_negative_numbers = true)]
    pub noise_level: f64,

    /// Fraction of each shape's points to keep, in (0, 1].
    #[arg(long, default_value_t = DEFAULT_SAMPLE_FRACTION, allow_negative_numbers = true)]
    pub sample_fraction: f64,
}

impl From<&FaceArgs> for FaceConfig {
    fn from(args: &FaceArgs) -> Self {
        Self {
            face_radius: args.face_radius,
            eye_radius: args.eye_radius,
            mouth_radius: args.mouth_radius,
            center: Point::new(args.center_x, args.center_y),
            noise_level: args.noise_level,
            sample_fraction: args.sample_fraction,
            ..Self::default()
        }
    }
}

/// Scatter plot flags.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct PlotArgs {
    /// Destination of the SVG scatter plot.
    #[arg(long = "plot", default_value = DEFAULT_PLOT)]
    pub path: PathBuf,

    /// Skip rendering the scatter plot.
    #[arg(long)]
    pub no_plot: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The face configuration was rejected.
    #[error(transparent)]
    Core(#[from] SmileyError),
    /// Writing the table or plot failed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl CliError {
    /// Stable machine-readable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Core(err) => err.code().as_str(),
            Self::Sink(err) => err.code().as_str(),
        }
    }
}

/// Point counts for one face part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSummary {
    /// Face part.
    pub kind: ShapeKind,
    /// Ideal points traced before sampling.
    pub traced: usize,
    /// Points retained after sampling.
    pub sampled: usize,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Seed the random source was created from.
    pub seed: u64,
    /// Per-part counts in generation order.
    pub groups: Vec<GroupSummary>,
    /// Total number of points written.
    pub points: usize,
    /// Path of the written CSV table.
    pub csv_path: PathBuf,
    /// Path of the rendered plot, if one was drawn.
    pub plot_path: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the configuration is invalid or an output
/// cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use smiley_cli::cli::{Cli, Command, FaceArgs, GenerateCommand, PlotArgs, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         face: FaceArgs {
///             face_radius: 5.0,
///             eye_radius: 0.5,
///             mouth_radius: 3.0,
///             center_x: 0.0,
///             center_y: 0.0,
///             noise_level: 0.1,
///             sample_fraction: 0.7,
///         },
///         seed: Some(7),
///         output: dir.path().join("face.csv"),
///         plot: PlotArgs { path: dir.path().join("face.svg"), no_plot: true },
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.points, 245);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => run_generate(generate),
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(seed = field::Empty, output = %command.output.display()),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let config = FaceConfig::from(&command.face);
    config.validate()?;

    let seed = command.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let face = generate_face(&config, &mut rng)?;
    let groups = face
        .groups()
        .iter()
        .map(|group| GroupSummary {
            kind: group.kind,
            traced: group.traced,
            sampled: group.points.len(),
        })
        .collect();
    let points = face.into_points();

    let csv_path = write_csv(&command.output, &points)?;
    let plot_path = if command.plot.no_plot {
        info!("scatter plot skipped");
        None
    } else {
        Some(render_scatter(&command.plot.path, &points, &PlotStyle::default())?)
    };

    Ok(ExecutionSummary {
        seed,
        groups,
        points: points.len(),
        csv_path,
        plot_path,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use smiley_cli::cli::{ExecutionSummary, GroupSummary, render_summary};
/// # use smiley_core::ShapeKind;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     seed: 3,
///     groups: vec![GroupSummary { kind: ShapeKind::Mouth, traced: 50, sampled: 35 }],
///     points: 35,
///     csv_path: PathBuf::from("face.csv"),
///     plot_path: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "seed: 3\nmouth: 35 of 50\npoints: 35\ncsv: face.csv\nplot: skipped\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "seed: {}", summary.seed)?;
    for group in &summary.groups {
        writeln!(writer, "{}: {} of {}", group.kind, group.sampled, group.traced)?;
    }
    writeln!(writer, "points: {}", summary.points)?;
    writeln!(writer, "csv: {}", summary.csv_path.display())?;
    match &summary.plot_path {
        Some(path) => writeln!(writer, "plot: {}", path.display()),
        None => writeln!(writer, "plot: skipped"),
    }
}
