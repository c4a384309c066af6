//! Error types for rerate-core.

use thiserror::Error;

/// Error type for rerate-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid filter table: {0}")]
    InvalidFilter(String),

    /// A window read outside the retained range `[left, right)`.
    ///
    /// The resampler bounds every read by the window padding, so seeing this
    /// from inside a kernel loop means a bound computation is wrong.
    #[error("Position {position} outside window [{left}, {right})")]
    OutOfRange { position: u64, left: u64, right: u64 },

    /// A bounded window cannot take the supplied chunk. Nothing was pushed.
    #[error("Window capacity exceeded: {requested} samples supplied, {available} available")]
    CapacityExceeded { requested: usize, available: usize },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
