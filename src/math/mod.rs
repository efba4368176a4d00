//! Mathematical utilities shared by the renderers

/// Min-max extent and linear rescaling onto character grids
pub mod scaling;
