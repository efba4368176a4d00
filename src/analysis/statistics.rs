//! Descriptive statistics over a one-dimensional numeric series

use crate::io::configuration::STATISTICS_RULE_WIDTH;
use crate::math::scaling::extent;
use std::collections::HashMap;
use std::fmt;

/// Most frequent value of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// The value that repeats most often (earliest occurrence wins ties)
    Value(f64),
    /// Every value occurs exactly once
    NoMode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::NoMode => write!(f, "No mode"),
        }
    }
}

/// Summary statistics of a non-empty series
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Sum of all values
    pub sum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value, or the average of the two middle values for even counts
    pub median: f64,
    /// Most frequent value
    pub mode: Mode,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// `max - min`
    pub range: f64,
    /// Sample standard deviation (n - 1 denominator), zero for a single value
    pub std_dev: f64,
}

/// Result of [`compute_statistics`]
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsReport {
    /// The series was empty; nothing was computed
    Empty,
    /// Statistics of a non-empty series
    Summary(Summary),
}

impl StatisticsReport {
    /// The computed summary, if the series was non-empty
    pub const fn summary(&self) -> Option<&Summary> {
        match self {
            Self::Empty => None,
            Self::Summary(summary) => Some(summary),
        }
    }
}

/// Compute descriptive statistics for `values`
///
/// Empty input yields [`StatisticsReport::Empty`] instead of an error so the
/// function stays callable on whatever the caller currently holds.
pub fn compute_statistics(values: &[f64]) -> StatisticsReport {
    let Some((min, max)) = extent(values) else {
        tracing::debug!("statistics requested for an empty series");
        return StatisticsReport::Empty;
    };

    let count = values.len();
    let sum: f64 = values.iter().sum();
    // Rounding in the running sum can land the quotient just outside the observed extent
    let mean = (sum / count as f64).max(min).min(max);

    tracing::trace!(count, sum, mean, "computed series moments");

    StatisticsReport::Summary(Summary {
        count,
        sum,
        mean,
        median: median(values).max(min).min(max),
        mode: mode(values),
        min,
        max,
        range: max - min,
        std_dev: sample_std_dev(values, mean),
    })
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    let upper = sorted.get(mid).copied().unwrap_or(0.0);
    if sorted.len() % 2 == 0 {
        let lower = sorted.get(mid.wrapping_sub(1)).copied().unwrap_or(upper);
        (lower + upper) / 2.0
    } else {
        upper
    }
}

fn mode(values: &[f64]) -> Mode {
    // Keyed on bit patterns; adding zero folds -0.0 into 0.0
    let mut tallies: HashMap<u64, (usize, usize)> = HashMap::new();
    for (index, &value) in values.iter().enumerate() {
        let entry = tallies.entry((value + 0.0).to_bits()).or_insert((0, index));
        entry.0 += 1;
    }

    tallies
        .iter()
        .filter(|(_, (count, _))| *count > 1)
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map_or(Mode::NoMode, |(&bits, _)| Mode::Value(f64::from_bits(bits)))
}

fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let squared_deviations: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    (squared_deviations / (values.len() - 1) as f64).sqrt()
}

/// Format a statistics report for display under the dataset name
pub fn render_statistics(name: &str, report: &StatisticsReport) -> String {
    let Some(summary) = report.summary() else {
        return "No data to analyze".to_string();
    };

    [
        format!("STATISTICS - {name}"),
        "=".repeat(STATISTICS_RULE_WIDTH),
        format!("Count: {}", summary.count),
        format!("Sum: {:.2}", summary.sum),
        format!("Mean: {:.2}", summary.mean),
        format!("Median: {:.2}", summary.median),
        format!("Mode: {}", summary.mode),
        format!("Min: {:.2}", summary.min),
        format!("Max: {:.2}", summary.max),
        format!("Range: {:.2}", summary.range),
        format!("Std Dev: {:.2}", summary.std_dev),
    ]
    .join("\n")
}
