//! Engine constants and runtime configuration defaults

// Placement driver safeguards
/// Rows scanned past the cursor before a run is declared out of space
pub const MAX_SCAN_ROWS: usize = 100;

// Default values for configurable parameters
/// Fixed seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 42;

/// Column count assumed when the caller supplies neither columns nor a width
pub const DEFAULT_COLUMNS: usize = 4;

/// Container width assumed for dimension reports when none is supplied
pub const DEFAULT_CONTAINER_WIDTH_PX: f64 = 1280.0;

/// Number of sample layouts for distribution statistics
pub const DEFAULT_STATS_RUNS: usize = 200;

// Responsive breakpoints
/// Containers narrower than this use the mobile column count
pub const MOBILE_BREAKPOINT_PX: f64 = 640.0;

/// Containers narrower than this, at mobile width or above, use the tablet column count
pub const TABLET_BREAKPOINT_PX: f64 = 1024.0;

/// Narrowest column width that keeps headline text readable
pub const MIN_READABLE_TILE_PX: f64 = 140.0;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
