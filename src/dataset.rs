//! The named series a session analyzes

use crate::chart::default_label;
use crate::io::error::{Result, invalid_parameter};

/// A named numeric series with optional per-value labels
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Display name
    pub name: String,
    /// Values in entry order
    pub values: Vec<f64>,
    /// One label per value, when the data came with labels
    pub labels: Option<Vec<String>>,
}

impl Dataset {
    /// Create a dataset, checking that labels (if any) match the values one to one
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::InvalidParameter`] when the label count differs
    /// from the value count
    pub fn new(
        name: impl Into<String>,
        values: Vec<f64>,
        labels: Option<Vec<String>>,
    ) -> Result<Self> {
        if let Some(labels) = &labels
            && labels.len() != values.len()
        {
            return Err(invalid_parameter(
                "labels",
                &labels.len(),
                &format!("expected one label per value ({})", values.len()),
            ));
        }

        Ok(Self {
            name: name.into(),
            values,
            labels,
        })
    }

    /// Create a dataset labelled `Item 1`, `Item 2`, ...
    pub fn from_values(name: impl Into<String>, values: Vec<f64>) -> Self {
        let labels = (0..values.len()).map(default_label).collect();
        Self {
            name: name.into(),
            values,
            labels: Some(labels),
        }
    }

    /// Labels as a slice, for passing to the renderers
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// The first `limit` values
    pub fn preview(&self, limit: usize) -> &[f64] {
        self.values.get(..limit).unwrap_or(self.values.as_slice())
    }

    /// Number of values
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dataset holds no values
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
