//! Rendering constants and runtime configuration defaults

// Bar chart layout
/// Default maximum bar length in characters
pub const DEFAULT_BAR_WIDTH: usize = 50;
/// Extra characters added to the bar width for the framing rules
pub const BAR_RULE_PADDING: usize = 20;
/// Width of the right-aligned label column
pub const LABEL_WIDTH: usize = 8;
/// Fill character for bar chart bars
pub const BAR_FILL: char = '█';

// Upper bounds keep user-supplied sizes from exhausting memory or overflowing layout arithmetic
/// Maximum allowed bar chart width
pub const MAX_BAR_WIDTH: usize = 1_000;
/// Maximum allowed number of histogram bins
pub const MAX_BINS: usize = 1_000;
/// Maximum allowed number of line chart rows
pub const MAX_LINE_HEIGHT: usize = 200;

// Histogram layout
/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 10;
/// Length of the bar for the most populated bin
pub const HISTOGRAM_BAR_WIDTH: usize = 30;
/// Width of the histogram framing rules
pub const HISTOGRAM_RULE_WIDTH: usize = 60;
/// Width of the right-aligned bin range column
pub const HISTOGRAM_RANGE_WIDTH: usize = 12;
/// Fill character for histogram bars
pub const HISTOGRAM_FILL: char = '▓';

// Line chart layout
/// Default number of plot rows
pub const DEFAULT_LINE_HEIGHT: usize = 10;
/// Characters occupied by each data point column
pub const LINE_CELL_WIDTH: usize = 3;
/// Extra characters added to the plot width for the framing rules
pub const LINE_RULE_PADDING: usize = 10;

// Report layout
/// Width of the statistics report rule
pub const STATISTICS_RULE_WIDTH: usize = 40;
/// Width of the trend and correlation report rules
pub const REPORT_RULE_WIDTH: usize = 30;

// Correlation strength thresholds on |r|
/// Below this the correlation is weak
pub const WEAK_CORRELATION_LIMIT: f64 = 0.3;
/// Below this (and not weak) the correlation is moderate
pub const MODERATE_CORRELATION_LIMIT: f64 = 0.7;

// Session settings
/// Fixed seed for reproducible sample data
pub const DEFAULT_SEED: u64 = 42;
/// Number of values shown when previewing the current dataset
pub const PREVIEW_ITEMS: usize = 10;
/// Name given to data entered by hand when none is provided
pub const DEFAULT_DATASET_NAME: &str = "Custom Data";
