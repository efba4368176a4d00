//! Bar chart rendering with min-max scaled bar lengths

use crate::chart::default_label;
use crate::io::configuration::{BAR_FILL, BAR_RULE_PADDING, LABEL_WIDTH, MAX_BAR_WIDTH};
use crate::io::error::{Result, empty_input, invalid_parameter};
use crate::math::scaling::{extent, rescale};

/// Bar length for every value, scaled so the minimum is empty and the maximum spans `width`
///
/// A flat series (all values equal) gets bars of length one.
///
/// # Errors
///
/// - [`crate::AnalysisError::InvalidParameter`] when `width` exceeds [`MAX_BAR_WIDTH`]
/// - [`crate::AnalysisError::EmptyInput`] when `values` is empty
pub fn bar_lengths(values: &[f64], width: usize) -> Result<Vec<usize>> {
    if width > MAX_BAR_WIDTH {
        return Err(invalid_parameter(
            "width",
            &width,
            &format!("must be at most {MAX_BAR_WIDTH}"),
        ));
    }
    let (min, max) = extent(values).ok_or_else(|| empty_input("bar chart"))?;

    Ok(values
        .iter()
        .map(|&value| rescale(value, min, max, width).unwrap_or(1))
        .collect())
}

/// Render `values` as one labelled horizontal bar per line
///
/// Labels beyond the supplied ones default to `Item <n>`.
///
/// # Errors
///
/// - [`crate::AnalysisError::InvalidParameter`] when `width` exceeds [`MAX_BAR_WIDTH`]
/// - [`crate::AnalysisError::EmptyInput`] when `values` is empty
pub fn render_bar_chart(values: &[f64], labels: Option<&[String]>, width: usize) -> Result<String> {
    let lengths = bar_lengths(values, width)?;
    tracing::debug!(points = values.len(), width, "rendering bar chart");

    let rule = "=".repeat(width + BAR_RULE_PADDING);
    let mut lines = Vec::with_capacity(values.len() + 3);
    lines.push("BAR CHART".to_string());
    lines.push(rule.clone());

    for (index, (value, length)) in values.iter().zip(lengths).enumerate() {
        let label = labels
            .and_then(|labels| labels.get(index))
            .cloned()
            .unwrap_or_else(|| default_label(index));
        let bar: String = std::iter::repeat_n(BAR_FILL, length).collect();
        lines.push(format!(
            "{label:>label_width$}: {bar} ({value})",
            label_width = LABEL_WIDTH
        ));
    }

    lines.push(rule);
    Ok(lines.join("\n"))
}
