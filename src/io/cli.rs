//! Command-line interface: one-shot analyses or the interactive menu

use crate::dataset::Dataset;
use crate::io::configuration::{
    DEFAULT_BAR_WIDTH, DEFAULT_BINS, DEFAULT_DATASET_NAME, DEFAULT_LINE_HEIGHT, DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter, io_error};
use crate::io::input::parse_values;
use crate::io::samples::{SampleKind, SeededSource, ValueSource};
use crate::io::shell::{ChartSettings, Session};
use crate::report::{Analysis, run_analysis};
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing::Level;

#[derive(Parser)]
#[command(name = "datalyzer")]
#[command(
    author,
    version,
    about = "Descriptive statistics and text charts for a numeric series"
)]
/// Command-line arguments for the analyzer
pub struct Cli {
    /// Random seed for sample data generation
    #[arg(short, long, default_value_t = DEFAULT_SEED, global = true)]
    pub seed: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Analysis to run; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// One-shot analyses and the interactive shell
#[derive(Subcommand)]
pub enum Command {
    /// Print descriptive statistics
    Stats(DataArgs),

    /// Draw a horizontal bar chart
    Bar {
        /// Data to chart
        #[command(flatten)]
        data: DataArgs,

        /// Length of the longest bar
        #[arg(short, long, default_value_t = DEFAULT_BAR_WIDTH)]
        width: usize,
    },

    /// Draw a histogram
    Histogram {
        /// Data to bin
        #[command(flatten)]
        data: DataArgs,

        /// Number of equal-width bins
        #[arg(short, long, default_value_t = DEFAULT_BINS)]
        bins: usize,
    },

    /// Draw a line chart
    Line {
        /// Data to plot
        #[command(flatten)]
        data: DataArgs,

        /// Number of plot rows
        #[arg(short = 'H', long, default_value_t = DEFAULT_LINE_HEIGHT)]
        height: usize,
    },

    /// Count increases and decreases between consecutive values
    Trend(DataArgs),

    /// Pearson correlation against a second series
    Correlate {
        /// First series
        #[command(flatten)]
        data: DataArgs,

        /// Second series as comma-separated numbers
        #[arg(long = "with", value_name = "CSV")]
        other: String,
    },

    /// Start the interactive menu
    Shell,
}

/// Where a one-shot command takes its data from
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct DataArgs {
    /// Comma-separated numbers, e.g. "3,1.5,4"
    #[arg(short, long, value_name = "CSV")]
    pub data: Option<String>,

    /// Built-in sample dataset
    #[arg(long, value_enum)]
    pub sample: Option<SampleKind>,
}

impl DataArgs {
    /// Build the dataset these arguments describe
    ///
    /// # Errors
    ///
    /// Returns an error if the numbers cannot be parsed or no source was given
    pub fn load(&self, source: &mut impl ValueSource) -> Result<Dataset> {
        match (&self.data, self.sample) {
            (Some(text), _) => Ok(Dataset::from_values(
                DEFAULT_DATASET_NAME,
                parse_values(text)?,
            )),
            (None, Some(kind)) => kind.generate(source),
            (None, None) => Err(invalid_parameter(
                "data",
                &"",
                &"pass --data or --sample",
            )),
        }
    }
}

/// Executes the parsed command line
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command, reading from `input` only for the interactive shell
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be loaded, the analysis rejects it,
    /// or terminal I/O fails
    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut source = SeededSource::new(self.cli.seed);

        let Some(command) = &self.cli.command else {
            return Self::interactive(source, input, output);
        };

        let (data, analysis) = match command {
            Command::Stats(data) => (data, Analysis::Statistics),
            Command::Bar { data, width } => (data, Analysis::BarChart { width: *width }),
            Command::Histogram { data, bins } => (data, Analysis::Histogram { bins: *bins }),
            Command::Line { data, height } => (data, Analysis::LineChart { height: *height }),
            Command::Trend(data) => (data, Analysis::Trend),
            Command::Correlate { data, other } => (
                data,
                Analysis::Correlation {
                    other: parse_values(other)?,
                },
            ),
            Command::Shell => return Self::interactive(source, input, output),
        };

        let dataset = data.load(&mut source)?;
        let text = run_analysis(&dataset, &analysis)?;
        writeln!(output, "{text}").map_err(|err| io_error("writing report", err))
    }

    fn interactive(source: SeededSource, input: impl BufRead, output: impl Write) -> Result<()> {
        tracing::info!("starting interactive session");
        Session::new(source, ChartSettings::default()).run(input, output)
    }
}
