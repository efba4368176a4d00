//! Fixed-width text renderers for a single numeric series

/// Horizontal bar per value, scaled between the series extremes
pub mod bar;
/// Equal-width bins rendered as horizontal bars of their counts
pub mod histogram;
/// Connected point plot scanned row by row
pub mod line;

/// Label for the value at `index` when the caller supplied none
pub(crate) fn default_label(index: usize) -> String {
    format!("Item {}", index + 1)
}
