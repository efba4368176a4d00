//! Descriptive statistics and text-mode charts for one-dimensional numeric data
//!
//! The engine is a set of pure functions over `&[f64]`: statistics, trend and
//! correlation reports, and bar, histogram and line chart renderers. The `io`
//! modules wrap it in a command line and an interactive menu session.

#![forbid(unsafe_code)]

/// Statistics, trend and correlation analyses
pub mod analysis;
/// Bar, histogram and line chart renderers
pub mod chart;
/// The named series a session works on
pub mod dataset;
/// Command line, interactive shell, data entry and error handling
pub mod io;
/// Scaling helpers shared by the renderers
pub mod math;
/// Dispatch of one analysis request to the engine
pub mod report;

pub use io::error::{AnalysisError, Result};
