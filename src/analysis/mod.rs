//! Numeric analyses that produce reports rather than charts

/// Pearson correlation between two paired series
pub mod correlation;
/// Descriptive statistics of a single series
pub mod statistics;
/// Direction of change between consecutive values
pub mod trend;
