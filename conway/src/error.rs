//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised while building a board or a session.
///
/// Once a board exists nothing in the core can fail; stepping, seeding and
/// querying are total over their preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Board must have at least one interior row and column.
    #[error("invalid board dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested interior width.
        width: usize,
        /// Requested interior height.
        height: usize,
    },

    /// Seed width must lie in `1..=width`.
    #[error("live seed width {live_seed_width} outside 1..={width}")]
    InvalidSeedWidth {
        /// Requested seed width.
        live_seed_width: usize,
        /// Interior width of the board.
        width: usize,
    },

    /// Grid storage could not be reserved.
    #[error("out of memory allocating {cells} cells")]
    Allocation {
        /// Padded cell count that was requested.
        cells: usize,
    },
}
