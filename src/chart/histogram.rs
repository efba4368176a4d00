//! Histogram rendering over equal-width bins

use crate::io::configuration::{
    HISTOGRAM_BAR_WIDTH, HISTOGRAM_FILL, HISTOGRAM_RANGE_WIDTH, HISTOGRAM_RULE_WIDTH, MAX_BINS,
};
use crate::io::error::{Result, empty_input, invalid_parameter};
use crate::math::scaling::extent;

/// A contiguous slice of the value domain and how many values fall inside it
///
/// Every bin is half-open `[lower, upper)` except the last, which is closed
/// so the series maximum is always counted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Inclusive lower bound
    pub lower: f64,
    /// Upper bound, exclusive except for the last bin
    pub upper: f64,
    /// Number of values inside the bounds
    pub count: usize,
}

impl Bin {
    /// Whether `value` lies inside this bin
    pub fn contains(&self, value: f64, is_last: bool) -> bool {
        if is_last {
            self.lower <= value && value <= self.upper
        } else {
            self.lower <= value && value < self.upper
        }
    }
}

/// Split the extent of `values` into `bins` equal-width bins and count membership
///
/// # Errors
///
/// - [`crate::AnalysisError::InvalidParameter`] when `bins` is zero or above [`MAX_BINS`]
/// - [`crate::AnalysisError::EmptyInput`] when `values` is empty
pub fn compute_bins(values: &[f64], bins: usize) -> Result<Vec<Bin>> {
    if bins == 0 {
        return Err(invalid_parameter("bins", &bins, &"must be at least 1"));
    }
    if bins > MAX_BINS {
        return Err(invalid_parameter(
            "bins",
            &bins,
            &format!("must be at most {MAX_BINS}"),
        ));
    }
    let (min, max) = extent(values).ok_or_else(|| empty_input("histogram"))?;
    let span = max - min;
    let bin_width = if span.is_finite() {
        span / bins as f64
    } else {
        max / bins as f64 - min / bins as f64
    };

    let mut result: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: (i as f64).mul_add(bin_width, min),
            upper: ((i + 1) as f64).mul_add(bin_width, min),
            count: 0,
        })
        .collect();

    // Pin the closing bound so rounding in the width cannot leave the maximum uncounted
    if let Some(last) = result.last_mut() {
        last.upper = max;
    }

    let last_index = bins - 1;
    for (index, bin) in result.iter_mut().enumerate() {
        let is_last = index == last_index;
        bin.count = values
            .iter()
            .filter(|&&value| bin.contains(value, is_last))
            .count();
    }

    tracing::trace!(bins, bin_width, "histogram bins counted");
    Ok(result)
}

/// Render a histogram of `values` with `bins` equal-width bins
///
/// # Errors
///
/// - [`crate::AnalysisError::InvalidParameter`] when `bins` is zero or above [`MAX_BINS`]
/// - [`crate::AnalysisError::EmptyInput`] when `values` is empty
pub fn render_histogram(values: &[f64], bins: usize) -> Result<String> {
    let counted = compute_bins(values, bins)?;
    tracing::debug!(points = values.len(), bins, "rendering histogram");

    let max_count = counted.iter().map(|bin| bin.count).max().unwrap_or(0);
    let rule = "=".repeat(HISTOGRAM_RULE_WIDTH);

    let mut lines = Vec::with_capacity(bins + 3);
    lines.push("HISTOGRAM".to_string());
    lines.push(rule.clone());

    for bin in &counted {
        let length = if max_count > 0 {
            bin.count * HISTOGRAM_BAR_WIDTH / max_count
        } else {
            0
        };
        let bar: String = std::iter::repeat_n(HISTOGRAM_FILL, length).collect();
        let range = format!("{:.1}-{:.1}", bin.lower, bin.upper);
        lines.push(format!(
            "{range:>width$}: {bar} ({})",
            bin.count,
            width = HISTOGRAM_RANGE_WIDTH
        ));
    }

    lines.push(rule);
    Ok(lines.join("\n"))
}
