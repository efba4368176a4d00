//! Tests for sample dataset generation and value sources

#[cfg(test)]
mod tests {
    use datalyzer::dataset::Dataset;
    use datalyzer::io::samples::{FixedSource, SampleKind, SeededSource, ValueSource};

    fn generate(kind: SampleKind, source: &mut impl ValueSource) -> Dataset {
        match kind.generate(source) {
            Ok(dataset) => dataset,
            Err(err) => unreachable!("sample generation should succeed: {err}"),
        }
    }

    // Tests the fixed source drives generation deterministically
    // Verified by ignoring the source and drawing from a fresh RNG
    #[test]
    fn test_fixed_source_sales() {
        let mut source = FixedSource::new(vec![100, 150]);
        let dataset = generate(SampleKind::Sales, &mut source);

        assert_eq!(dataset.name, "Monthly Sales");
        assert_eq!(dataset.len(), 12);
        assert_eq!(dataset.values.first(), Some(&100.0));
        assert_eq!(dataset.values.get(1), Some(&150.0));
        assert_eq!(dataset.values.get(2), Some(&100.0));

        let labels = dataset.labels().unwrap_or_default();
        assert_eq!(labels.first().map(String::as_str), Some("Jan"));
        assert_eq!(labels.last().map(String::as_str), Some("Dec"));
    }

    #[test]
    fn test_fixed_source_clamps_into_range() {
        let mut source = FixedSource::new(vec![500, -5]);

        assert_eq!(source.draw(60, 100), 100);
        assert_eq!(source.draw(60, 100), 60);

        let mut empty = FixedSource::new(Vec::new());
        assert_eq!(empty.draw(20, 35), 20);
    }

    // Tests each sample kind has its documented size, range and labels
    // Verified by widening the temperature range
    #[test]
    fn test_seeded_samples_respect_shape() {
        let mut source = SeededSource::new(42);
        let expectations = [
            (SampleKind::Sales, 12, 50.0, 200.0, "Dec"),
            (SampleKind::Temperature, 30, 20.0, 35.0, "Day 30"),
            (SampleKind::Grades, 25, 60.0, 100.0, "Student 25"),
        ];

        for (kind, count, low, high, last_label) in expectations {
            let dataset = generate(kind, &mut source);
            assert_eq!(dataset.len(), count);
            assert_eq!(dataset.labels().map(<[String]>::len), Some(count));
            assert!(
                dataset
                    .values
                    .iter()
                    .all(|value| (low..=high).contains(value))
            );
            assert_eq!(
                dataset
                    .labels()
                    .and_then(|labels| labels.last())
                    .map(String::as_str),
                Some(last_label)
            );
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let first = generate(SampleKind::Grades, &mut SeededSource::new(9));
        let second = generate(SampleKind::Grades, &mut SeededSource::new(9));

        assert_eq!(first, second);
    }

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(SampleKind::from_menu_choice("1"), Some(SampleKind::Sales));
        assert_eq!(
            SampleKind::from_menu_choice(" 2 "),
            Some(SampleKind::Temperature)
        );
        assert_eq!(SampleKind::from_menu_choice("3"), Some(SampleKind::Grades));
        assert_eq!(SampleKind::from_menu_choice("4"), None);
        assert_eq!(SampleKind::Temperature.title(), "Daily Temperature (°C)");
    }
}
