//! Error types for analysis, rendering and data entry

use std::fmt;

/// Main error type for all analysis and rendering operations
#[derive(Debug)]
pub enum AnalysisError {
    /// No values were supplied to an operation that needs at least one
    EmptyInput {
        /// Name of the operation that received no data
        operation: &'static str,
    },

    /// Too few values for a pairwise or statistical computation
    InsufficientData {
        /// Name of the operation that rejected the input
        operation: &'static str,
        /// Minimum number of values required
        required: usize,
        /// Number of values actually supplied
        actual: usize,
    },

    /// Two series that must be paired have different lengths
    LengthMismatch {
        /// Length of the first series
        left: usize,
        /// Length of the second series
        right: usize,
    },

    /// Correlation is undefined because one series does not vary
    ZeroVariance,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Text entered by the user could not be read as numbers
    Parse {
        /// The offending piece of input
        input: String,
        /// Description of the failure
        reason: String,
    },

    /// Reading from or writing to the terminal failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { .. } => write!(f, "No data to display"),
            Self::InsufficientData {
                operation,
                required,
                actual,
            } => {
                write!(
                    f,
                    "Not enough data for {operation}: need at least {required} values, got {actual}"
                )
            }
            Self::LengthMismatch { left, right } => {
                write!(
                    f,
                    "Cannot calculate correlation: series lengths differ ({left} vs {right})"
                )
            }
            Self::ZeroVariance => {
                write!(f, "Cannot calculate correlation (zero variance)")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Parse { input, reason } => {
                write!(f, "Invalid number '{input}': {reason}")
            }
            Self::Io { operation, source } => {
                write!(f, "Terminal I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an empty input error for the named operation
pub const fn empty_input(operation: &'static str) -> AnalysisError {
    AnalysisError::EmptyInput { operation }
}

/// Attach the failed operation name to an I/O error
pub fn io_error(operation: &'static str, source: std::io::Error) -> AnalysisError {
    AnalysisError::Io { operation, source }
}
