//! Tests for descriptive statistics and the statistics report

#[cfg(test)]
mod tests {
    use datalyzer::analysis::statistics::{
        Mode, StatisticsReport, Summary, compute_statistics, render_statistics,
    };
    use datalyzer::io::samples::{SampleKind, SeededSource};

    fn summary_of(values: &[f64]) -> Summary {
        match compute_statistics(values) {
            StatisticsReport::Summary(summary) => summary,
            StatisticsReport::Empty => unreachable!("non-empty input must produce a summary"),
        }
    }

    // Tests every field for a single value, including the zero standard deviation convention
    // Verified by dividing by n - 1 without the single-value guard
    #[test]
    fn test_single_value_summary() {
        let summary = summary_of(&[5.0]);

        assert_eq!(
            summary,
            Summary {
                count: 1,
                sum: 5.0,
                mean: 5.0,
                median: 5.0,
                mode: Mode::Value(5.0),
                min: 5.0,
                max: 5.0,
                range: 0.0,
                std_dev: 0.0,
            }
        );
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        assert_eq!(compute_statistics(&[]), StatisticsReport::Empty);
        assert!(compute_statistics(&[]).summary().is_none());
    }

    // Tests mode reports the repeated value and the sentinel when all values are distinct
    // Verified by returning the first value when nothing repeats
    #[test]
    fn test_mode_and_no_mode() {
        assert_eq!(summary_of(&[1.0, 2.0, 2.0, 3.0]).mode, Mode::Value(2.0));
        assert_eq!(summary_of(&[1.0, 2.0, 3.0]).mode, Mode::NoMode);
    }

    // Tests ties between equally frequent values go to the earliest occurrence
    // Verified by preferring the smallest value on ties
    #[test]
    fn test_mode_tie_prefers_first_occurrence() {
        assert_eq!(summary_of(&[3.0, 1.0, 1.0, 3.0]).mode, Mode::Value(3.0));
        assert_eq!(
            summary_of(&[7.0, 2.0, 2.0, 9.0, 7.0, 9.0, 9.0]).mode,
            Mode::Value(9.0)
        );
    }

    #[test]
    fn test_mode_treats_signed_zeros_as_equal() {
        assert_eq!(summary_of(&[-0.0, 0.0, 4.0]).mode, Mode::Value(0.0));
    }

    // Tests even-length median averages the two middle values and std dev uses n - 1
    // Verified by using the population formula
    #[test]
    fn test_median_and_sample_standard_deviation() {
        let summary = summary_of(&[4.0, 1.0, 3.0, 2.0]);

        assert!((summary.median - 2.5).abs() < f64::EPSILON);
        assert!((summary.mean - 2.5).abs() < f64::EPSILON);
        assert!((summary.std_dev - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((summary.range - 3.0).abs() < f64::EPSILON);
        assert!((summary.sum - 10.0).abs() < f64::EPSILON);

        let odd = summary_of(&[9.0, 1.0, 5.0]);
        assert!((odd.median - 5.0).abs() < f64::EPSILON);
    }

    // Tests mean and median stay inside the observed extent across generated samples
    // Verified by removing the extent bound on the mean
    #[test]
    fn test_central_values_within_extent() {
        let mut source = SeededSource::new(7);
        let mut series: Vec<Vec<f64>> = SampleKind::ALL
            .iter()
            .filter_map(|kind| kind.generate(&mut source).ok())
            .map(|dataset| dataset.values)
            .collect();
        series.push(vec![0.1, 0.1, 0.1]);
        series.push(vec![-3.5, 1e6, 42.0, 0.25]);

        for values in &series {
            let summary = summary_of(values);
            assert!(summary.min <= summary.mean && summary.mean <= summary.max);
            assert!(summary.min <= summary.median && summary.median <= summary.max);
        }
    }

    #[test]
    fn test_render_statistics() {
        let report = compute_statistics(&[1.0, 2.0, 2.0, 3.0]);
        let text = render_statistics("Scores", &report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.first(), Some(&"STATISTICS - Scores"));
        assert_eq!(lines.get(1), Some(&"=".repeat(40).as_str()));
        assert!(text.contains("Count: 4"));
        assert!(text.contains("Sum: 8.00"));
        assert!(text.contains("Mean: 2.00"));
        assert!(text.contains("Mode: 2"));
        assert!(text.contains("Std Dev: 0.82"));
        assert_eq!(lines.len(), 11);

        let distinct = render_statistics("Distinct", &compute_statistics(&[1.0, 2.0]));
        assert!(distinct.contains("Mode: No mode"));

        assert_eq!(
            render_statistics("Nothing", &StatisticsReport::Empty),
            "No data to analyze"
        );
    }
}
