//! Dispatch of a single analysis request against a dataset

use crate::analysis::correlation::{analyze_correlation, render_correlation};
use crate::analysis::statistics::{compute_statistics, render_statistics};
use crate::analysis::trend::{analyze_trend, render_trend};
use crate::chart::bar::render_bar_chart;
use crate::chart::histogram::render_histogram;
use crate::chart::line::render_line_chart;
use crate::dataset::Dataset;
use crate::io::error::Result;

/// One analysis or chart the user can ask for
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// Descriptive statistics
    Statistics,
    /// Bar chart with the given maximum bar width
    BarChart {
        /// Longest bar in characters
        width: usize,
    },
    /// Histogram with the given number of bins
    Histogram {
        /// Number of equal-width bins
        bins: usize,
    },
    /// Line chart with the given number of rows
    LineChart {
        /// Plot height in rows
        height: usize,
    },
    /// Trend of consecutive changes
    Trend,
    /// Correlation against a second series
    Correlation {
        /// Series paired element-wise with the dataset values
        other: Vec<f64>,
    },
}

/// Run `analysis` on `dataset` and return the rendered text
///
/// # Errors
///
/// Propagates the engine's error for degenerate input (empty data, too few
/// points, mismatched lengths, zero variance, invalid chart parameters)
pub fn run_analysis(dataset: &Dataset, analysis: &Analysis) -> Result<String> {
    tracing::info!(dataset = %dataset.name, ?analysis, "running analysis");

    let values = dataset.values.as_slice();
    match analysis {
        Analysis::Statistics => Ok(render_statistics(
            &dataset.name,
            &compute_statistics(values),
        )),
        Analysis::BarChart { width } => render_bar_chart(values, dataset.labels(), *width),
        Analysis::Histogram { bins } => render_histogram(values, *bins),
        Analysis::LineChart { height } => render_line_chart(values, dataset.labels(), *height),
        Analysis::Trend => analyze_trend(values).map(|report| render_trend(&report)),
        Analysis::Correlation { other } => {
            analyze_correlation(values, other).map(|report| render_correlation(&report))
        }
    }
}
