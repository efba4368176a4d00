//! Line chart rendering by scanning quantized point rows from top to bottom

use crate::io::configuration::{LINE_CELL_WIDTH, LINE_RULE_PADDING, MAX_LINE_HEIGHT};
use crate::io::error::{Result, empty_input, invalid_parameter};
use crate::math::scaling::{extent, interpolate, rescale};

const POINT_CELL: &str = " ● ";
const SEGMENT_CELL: &str = " │ ";
const BLANK_CELL: &str = "   ";

/// Row index in `[0, height - 1]` for every value; a flat series sits on row `height / 2`
///
/// # Errors
///
/// - [`crate::AnalysisError::InvalidParameter`] when `height` is below 2 or above
///   [`MAX_LINE_HEIGHT`]
/// - [`crate::AnalysisError::EmptyInput`] when `values` is empty
pub fn row_positions(values: &[f64], height: usize) -> Result<Vec<usize>> {
    if height < 2 {
        return Err(invalid_parameter(
            "height",
            &height,
            &"line charts need at least 2 rows",
        ));
    }
    if height > MAX_LINE_HEIGHT {
        return Err(invalid_parameter(
            "height",
            &height,
            &format!("must be at most {MAX_LINE_HEIGHT}"),
        ));
    }
    let (min, max) = extent(values).ok_or_else(|| empty_input("line chart"))?;

    Ok(values
        .iter()
        .map(|&value| rescale(value, min, max, height - 1).unwrap_or(height / 2))
        .collect())
}

fn cell(rows: &[usize], index: usize, row: usize) -> &'static str {
    let Some(&current) = rows.get(index) else {
        return BLANK_CELL;
    };
    if current == row {
        return POINT_CELL;
    }

    let previous = index.checked_sub(1).and_then(|i| rows.get(i));
    match previous {
        Some(&previous) if previous.min(current) <= row && row <= previous.max(current) => {
            SEGMENT_CELL
        }
        _ => BLANK_CELL,
    }
}

/// Render `values` as a point plot joined by vertical segments
///
/// Each row carries its axis value on the left. Beneath the x axis every
/// column shows the first two characters of its label, or its 1-based index
/// when no labels are given.
///
/// # Errors
///
/// - [`crate::AnalysisError::InvalidParameter`] when `height` is below 2 or above
///   [`MAX_LINE_HEIGHT`]
/// - [`crate::AnalysisError::EmptyInput`] when `values` is empty
pub fn render_line_chart(
    values: &[f64],
    labels: Option<&[String]>,
    height: usize,
) -> Result<String> {
    let rows = row_positions(values, height)?;
    let (min, max) = extent(values).ok_or_else(|| empty_input("line chart"))?;
    tracing::debug!(points = values.len(), height, "rendering line chart");

    let plot_width = values.len() * LINE_CELL_WIDTH;
    let rule = "=".repeat(plot_width + LINE_RULE_PADDING);

    let mut lines = Vec::with_capacity(height + 5);
    lines.push("LINE CHART".to_string());
    lines.push(rule.clone());

    for row in (0..height).rev() {
        let axis_value = interpolate(min, max, row, height - 1);
        let mut line = format!("{axis_value:6.1} │");
        for index in 0..rows.len() {
            line.push_str(cell(&rows, index, row));
        }
        lines.push(line);
    }

    lines.push(format!("      └{}", "─".repeat(plot_width)));

    let mut axis_labels = String::from("       ");
    for index in 0..values.len() {
        let tick = labels
            .filter(|labels| !labels.is_empty())
            .and_then(|labels| labels.get(index))
            .map_or_else(
                || (index + 1).to_string(),
                |label| label.chars().take(2).collect(),
            );
        axis_labels.push_str(&format!(" {tick:>2}"));
    }
    lines.push(axis_labels);

    lines.push(rule);
    Ok(lines.join("\n"))
}
