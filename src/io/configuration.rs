//! Algorithm constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default output width in pixels
pub const DEFAULT_WIDTH: usize = 100;

/// Default output height in pixels
pub const DEFAULT_HEIGHT: usize = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Worklist tuning
/// Initial capacity of the propagation queue
pub const QUEUE_INITIAL_CAPACITY: usize = 100;

/// Consumed items required before the queue considers compacting
pub const QUEUE_COMPACTION_MIN: usize = 64;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Collapse steps between progress bar refreshes
pub const PROGRESS_REFRESH_STEPS: usize = 256;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
