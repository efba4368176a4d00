//! Parsing of numbers typed at the prompt or passed on the command line

use crate::io::configuration::{DEFAULT_BINS, MAX_BINS};
use crate::io::error::{AnalysisError, Result, invalid_parameter};

/// Parse comma-separated numbers such as `"3, 1.5, -2"`
///
/// Every piece must be a finite number; blank pieces are rejected.
///
/// # Errors
///
/// Returns [`AnalysisError::Parse`] naming the first piece that is not a finite number
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .map(|piece| {
            let value = piece.parse::<f64>().map_err(|err| AnalysisError::Parse {
                input: piece.to_string(),
                reason: err.to_string(),
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(AnalysisError::Parse {
                    input: piece.to_string(),
                    reason: "value must be finite".to_string(),
                })
            }
        })
        .collect()
}

/// Parse a histogram bin count, where blank input selects the default
///
/// # Errors
///
/// - [`AnalysisError::Parse`] when the text is not a whole number
/// - [`AnalysisError::InvalidParameter`] when it is zero or above [`MAX_BINS`]
pub fn parse_bin_count(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_BINS);
    }

    let bins = trimmed.parse::<usize>().map_err(|err| AnalysisError::Parse {
        input: trimmed.to_string(),
        reason: err.to_string(),
    })?;
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
    Ok(bins)
}
