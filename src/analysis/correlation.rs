//! Pearson correlation between two paired series

use crate::io::configuration::{
    MODERATE_CORRELATION_LIMIT, REPORT_RULE_WIDTH, WEAK_CORRELATION_LIMIT,
};
use crate::io::error::{AnalysisError, Result};
use std::fmt;

/// Strength of a linear association, judged on `|r|`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// `|r| < 0.3`
    Weak,
    /// `0.3 <= |r| < 0.7`
    Moderate,
    /// `|r| >= 0.7`
    Strong,
}

impl Strength {
    /// Classify a correlation coefficient by magnitude
    pub fn classify(coefficient: f64) -> Self {
        let magnitude = coefficient.abs();
        if magnitude < WEAK_CORRELATION_LIMIT {
            Self::Weak
        } else if magnitude < MODERATE_CORRELATION_LIMIT {
            Self::Moderate
        } else {
            Self::Strong
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Sign of a linear association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `r >= 0`; a coefficient of exactly zero is reported as positive
    Positive,
    /// `r < 0`
    Negative,
}

impl Direction {
    /// Classify a correlation coefficient by sign
    pub fn classify(coefficient: f64) -> Self {
        if coefficient < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("Positive"),
            Self::Negative => f.write_str("Negative"),
        }
    }
}

/// Outcome of [`analyze_correlation`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationReport {
    /// Pearson product-moment correlation coefficient
    pub coefficient: f64,
    /// Magnitude classification
    pub strength: Strength,
    /// Sign classification
    pub direction: Direction,
}

/// Compute the Pearson correlation coefficient of two equal-length series
///
/// Uses the sum-based formula
/// `r = (nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))`.
///
/// # Errors
///
/// - [`AnalysisError::LengthMismatch`] if the series differ in length
/// - [`AnalysisError::InsufficientData`] if they hold fewer than two points
/// - [`AnalysisError::ZeroVariance`] if either series is constant
pub fn analyze_correlation(first: &[f64], second: &[f64]) -> Result<CorrelationReport> {
    if first.len() != second.len() {
        return Err(AnalysisError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }
    if first.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            operation: "correlation analysis",
            required: 2,
            actual: first.len(),
        });
    }

    let mut terms = PearsonTerms::accumulate(first, second, 1.0, 1.0);
    if !terms.is_finite() {
        // r does not depend on scale, so divide out magnitudes whose squares overflow
        terms = PearsonTerms::accumulate(
            first,
            second,
            largest_magnitude(first),
            largest_magnitude(second),
        );
    }

    let PearsonTerms {
        numerator,
        variance_x,
        variance_y,
    } = terms;
    let denominator = variance_x.sqrt() * variance_y.sqrt();

    // Zero, or NaN when rounding leaves a variance term slightly negative
    if !(denominator.is_finite() && denominator > 0.0) {
        tracing::debug!(variance_x, variance_y, "correlation denominator vanished");
        return Err(AnalysisError::ZeroVariance);
    }

    // Guard against |r| creeping past 1 from rounding
    let coefficient = (numerator / denominator).clamp(-1.0, 1.0);

    Ok(CorrelationReport {
        coefficient,
        strength: Strength::classify(coefficient),
        direction: Direction::classify(coefficient),
    })
}

/// Numerator and variance terms of the sum-based Pearson formula
struct PearsonTerms {
    numerator: f64,
    variance_x: f64,
    variance_y: f64,
}

impl PearsonTerms {
    /// Accumulate the terms over `first / scale_x` and `second / scale_y`
    fn accumulate(first: &[f64], second: &[f64], scale_x: f64, scale_y: f64) -> Self {
        let n = first.len() as f64;
        let xs = || first.iter().map(move |x| x / scale_x);
        let ys = || second.iter().map(move |y| y / scale_y);

        let sum_x: f64 = xs().sum();
        let sum_y: f64 = ys().sum();
        let sum_x_sq: f64 = xs().map(|x| x * x).sum();
        let sum_y_sq: f64 = ys().map(|y| y * y).sum();
        let sum_products: f64 = xs().zip(ys()).map(|(x, y)| x * y).sum();

        Self {
            numerator: n.mul_add(sum_products, -(sum_x * sum_y)),
            variance_x: n.mul_add(sum_x_sq, -(sum_x * sum_x)),
            variance_y: n.mul_add(sum_y_sq, -(sum_y * sum_y)),
        }
    }

    fn is_finite(&self) -> bool {
        self.numerator.is_finite() && self.variance_x.is_finite() && self.variance_y.is_finite()
    }
}

/// Largest absolute value, or 1 for an all-zero series
fn largest_magnitude(values: &[f64]) -> f64 {
    let largest = values.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()));
    if largest > 0.0 { largest } else { 1.0 }
}

/// Format a correlation report for display
pub fn render_correlation(report: &CorrelationReport) -> String {
    [
        "CORRELATION ANALYSIS".to_string(),
        "=".repeat(REPORT_RULE_WIDTH),
        format!("Correlation coefficient: {:.3}", report.coefficient),
        format!("Strength: {}", report.strength),
        format!("Direction: {}", report.direction),
    ]
    .join("\n")
}
