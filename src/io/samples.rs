//! Built-in sample datasets drawn from an injectable value source

use crate::dataset::Dataset;
use crate::io::error::Result;
use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Supplies integers for sample generation
pub trait ValueSource {
    /// Draw an integer in the inclusive range `[low, high]`
    fn draw(&mut self, low: i64, high: i64) -> i64;
}

/// Seeded random source for reproducible sample data
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a deterministic source from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ValueSource for SeededSource {
    fn draw(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed list of integers, cycling when exhausted
///
/// Each value is clamped into the requested range.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<i64>,
    cursor: usize,
}

impl FixedSource {
    /// Create a source that yields `values` in order
    pub const fn new(values: Vec<i64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl ValueSource for FixedSource {
    fn draw(&mut self, low: i64, high: i64) -> i64 {
        let Some(&value) = self.values.get(self.cursor % self.values.len().max(1)) else {
            return low;
        };
        self.cursor += 1;
        value.clamp(low, high.max(low))
    }
}

/// The built-in sample datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Twelve months of sales figures
    Sales,
    /// Thirty days of temperatures
    Temperature,
    /// Twenty-five exam scores
    Grades,
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl SampleKind {
    /// Every sample kind, in menu order
    pub const ALL: [Self; 3] = [Self::Sales, Self::Temperature, Self::Grades];

    /// Map a submenu entry (`"1"` to `"3"`) to its sample kind
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Sales),
            "2" => Some(Self::Temperature),
            "3" => Some(Self::Grades),
            _ => None,
        }
    }

    /// Display name of the generated dataset
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sales => "Monthly Sales",
            Self::Temperature => "Daily Temperature (°C)",
            Self::Grades => "Student Exam Scores",
        }
    }

    /// Number of values, inclusive value range
    const fn shape(self) -> (usize, i64, i64) {
        match self {
            Self::Sales => (12, 50, 200),
            Self::Temperature => (30, 20, 35),
            Self::Grades => (25, 60, 100),
        }
    }

    fn label(self, index: usize) -> String {
        match self {
            Self::Sales => MONTHS
                .get(index)
                .map_or_else(|| format!("Month {}", index + 1), ToString::to_string),
            Self::Temperature => format!("Day {}", index + 1),
            Self::Grades => format!("Student {}", index + 1),
        }
    }

    /// Generate this sample dataset, drawing every value from `source`
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::InvalidParameter`] if the generated labels
    /// do not match the values one to one
    pub fn generate(self, source: &mut impl ValueSource) -> Result<Dataset> {
        let (count, low, high) = self.shape();
        let values = (0..count).map(|_| source.draw(low, high) as f64).collect();
        let labels = (0..count).map(|index| self.label(index)).collect();

        tracing::debug!(kind = ?self, count, "generated sample dataset");

        Dataset::new(self.title(), values, Some(labels))
    }
}
