//! Default board dimensions and search parameters.
//!
//! These are the values used by the command line front end when no
//! explicit option is given.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 3;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 3;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default depth limit in plies.
pub const DEFAULT_DEPTH: usize = 4;

/// Number of random plies played before a self-play game hands over to the engines.
pub const DEFAULT_OPENING_PLIES: usize = 0;

/// Seed for the random opening when none is given.
pub const DEFAULT_SEED: u64 = 1;

// =============================================================================
// Text Form
// =============================================================================

/// Empty cell.
pub const EMPTY: char = '.';

/// Occupied cell.
pub const OCCUPIED: char = '#';
