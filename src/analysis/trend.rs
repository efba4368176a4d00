//! Classification of a series by the direction of its consecutive changes

use crate::io::configuration::REPORT_RULE_WIDTH;
use crate::io::error::{AnalysisError, Result};
use std::fmt;

/// Overall direction of a series that changes at least once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// More increases than decreases
    Upward,
    /// More decreases than increases
    Downward,
    /// As many increases as decreases
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Upward => "UPWARD",
            Self::Downward => "DOWNWARD",
            Self::Stable => "STABLE",
        };
        f.write_str(label)
    }
}

/// Outcome of [`analyze_trend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendReport {
    /// Every consecutive pair is equal
    Constant,
    /// At least one consecutive pair differs
    Changes {
        /// Number of strict increases
        increases: usize,
        /// Number of strict decreases
        decreases: usize,
        /// Classification by comparing the two counts
        direction: TrendDirection,
    },
}

impl TrendReport {
    /// Share of increases among all changes, in percent
    pub fn increase_percentage(&self) -> f64 {
        match *self {
            Self::Constant => 0.0,
            Self::Changes {
                increases,
                decreases,
                ..
            } => percentage(increases, increases + decreases),
        }
    }

    /// Share of decreases among all changes, in percent
    pub fn decrease_percentage(&self) -> f64 {
        match *self {
            Self::Constant => 0.0,
            Self::Changes {
                increases,
                decreases,
                ..
            } => percentage(decreases, increases + decreases),
        }
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Count strict increases and decreases between consecutive values
///
/// Ties count as neither and are left out of the percentages.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] for fewer than two values
pub fn analyze_trend(values: &[f64]) -> Result<TrendReport> {
    if values.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            operation: "trend analysis",
            required: 2,
            actual: values.len(),
        });
    }

    let (increases, decreases) =
        values
            .windows(2)
            .fold((0, 0), |(up, down), pair| match pair {
                [previous, current] if current > previous => (up + 1, down),
                [previous, current] if current < previous => (up, down + 1),
                _ => (up, down),
            });

    tracing::debug!(increases, decreases, "trend changes counted");

    if increases + decreases == 0 {
        return Ok(TrendReport::Constant);
    }

    let direction = match increases.cmp(&decreases) {
        std::cmp::Ordering::Greater => TrendDirection::Upward,
        std::cmp::Ordering::Less => TrendDirection::Downward,
        std::cmp::Ordering::Equal => TrendDirection::Stable,
    };

    Ok(TrendReport::Changes {
        increases,
        decreases,
        direction,
    })
}

/// Format a trend report for display
pub fn render_trend(report: &TrendReport) -> String {
    let mut lines = vec!["TREND ANALYSIS".to_string(), "=".repeat(REPORT_RULE_WIDTH)];

    match *report {
        TrendReport::Constant => lines.push("Data remains constant".to_string()),
        TrendReport::Changes {
            increases,
            decreases,
            direction,
        } => {
            lines.push(format!(
                "Increases: {increases} ({:.1}%)",
                report.increase_percentage()
            ));
            lines.push(format!(
                "Decreases: {decreases} ({:.1}%)",
                report.decrease_percentage()
            ));
            lines.push(format!("Overall trend: {direction}"));
        }
    }

    lines.join("\n")
}
