//! Centralized error type for the rerate umbrella crate.
//!
//! Wraps the kernel error so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] rerate_core::Error),

    /// Multi-channel input that does not split into equal channels.
    #[error("Channel mismatch: {0}")]
    ChannelMismatch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
