//! Tests for line chart row quantization and the scanned plot layout

#[cfg(test)]
mod tests {
    use datalyzer::AnalysisError;
    use datalyzer::chart::line::{render_line_chart, row_positions};
    use datalyzer::io::configuration::MAX_LINE_HEIGHT;

    #[test]
    fn test_row_positions() {
        assert_eq!(row_positions(&[1.0, 3.0, 2.0], 3).ok(), Some(vec![0, 2, 1]));
        assert_eq!(
            row_positions(&[0.0, 4.5, 9.0, 10.0], 10).ok(),
            Some(vec![0, 4, 8, 9])
        );
    }

    // Tests a flat series sits on the middle row
    // Verified by placing flat series on the bottom row
    #[test]
    fn test_flat_series_on_middle_row() {
        assert_eq!(row_positions(&[5.0, 5.0, 5.0], 10).ok(), Some(vec![5, 5, 5]));
        assert_eq!(row_positions(&[5.0], 7).ok(), Some(vec![3]));
    }

    #[test]
    fn test_rows_invariant_to_offset() {
        let base = [3.0, 9.0, 1.0, 4.0, 7.0];
        let shifted: Vec<f64> = base.iter().map(|value| value - 250.0).collect();

        assert_eq!(row_positions(&base, 10).ok(), row_positions(&shifted, 10).ok());
    }

    // Tests the scanned plot: points, connecting segments and both axes
    // Verified by drawing segments only strictly between neighbouring rows
    #[test]
    fn test_render_layout() {
        let chart = render_line_chart(&[1.0, 3.0, 2.0], None, 3).unwrap_or_default();
        let rule = "=".repeat(19);

        assert_eq!(
            chart,
            [
                "LINE CHART",
                rule.as_str(),
                "   3.0 │    ●  │ ",
                "   2.0 │    │  ● ",
                "   1.0 │ ●  │    ",
                "      └─────────",
                "         1  2  3",
                rule.as_str(),
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_labels_truncated_to_two_characters() {
        let labels: Vec<String> = ["Jan", "Feb", "Mar"].map(String::from).to_vec();
        let chart = render_line_chart(&[1.0, 2.0, 3.0], Some(&labels), 4).unwrap_or_default();

        assert!(chart.lines().any(|line| line == "        Ja Fe Ma"));
    }

    #[test]
    fn test_row_count() {
        let chart = render_line_chart(&[2.0, 8.0, 5.0, 1.0], None, 10).unwrap_or_default();

        // title, two rules, ten plot rows, x axis and tick labels
        assert_eq!(chart.lines().count(), 15);
    }

    // Tests heights that leave no room for interpolation and empty input are rejected
    // Verified by allowing a single-row chart
    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            render_line_chart(&[1.0, 2.0], None, 1),
            Err(AnalysisError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
        assert!(matches!(
            render_line_chart(&[], None, 10),
            Err(AnalysisError::EmptyInput { .. })
        ));
    }

    // Tests heights past the configured bound are rejected
    // Verified by removing the upper height check
    #[test]
    fn test_oversized_height_is_rejected() {
        assert!(matches!(
            render_line_chart(&[1.0, 2.0], None, usize::MAX),
            Err(AnalysisError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
        assert!(row_positions(&[1.0, 2.0], MAX_LINE_HEIGHT + 1).is_err());
        assert_eq!(
            row_positions(&[1.0, 2.0], MAX_LINE_HEIGHT).ok(),
            Some(vec![0, MAX_LINE_HEIGHT - 1])
        );
    }

    #[test]
    fn test_extreme_magnitudes_plot() {
        assert_eq!(
            row_positions(&[-1e308, 0.0, 1e308], 3).ok(),
            Some(vec![0, 1, 2])
        );
        let chart = render_line_chart(&[-1e308, 1e308], None, 3).unwrap_or_default();
        assert!(chart.starts_with("LINE CHART"));
        assert!(!chart.contains("inf"));
        assert!(!chart.contains("NaN"));
    }
}
