//! Resampler configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Quality, Result};

/// Configuration for one resampling stream.
///
/// Deserializes from partial documents; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResamplerConfig {
    pub quality: Quality,
    /// Input sample rate.
    pub from: u32,
    /// Output sample rate.
    pub to: u32,
    /// Upper bound on buffered input samples. `None` lets the window grow.
    pub max_buffered: Option<usize>,
}

impl Default for ResamplerConfig {
    fn default() -> Self {
        Self {
            quality: Quality::High,
            from: 44100,
            to: 48000,
            max_buffered: None,
        }
    }
}

impl ResamplerConfig {
    pub fn new(quality: Quality, from: u32, to: u32) -> Self {
        Self {
            quality,
            from,
            to,
            max_buffered: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.from == 0 || self.to == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "sample rates must be positive (from={}, to={})",
                self.from, self.to
            )));
        }
        if self.max_buffered == Some(0) {
            return Err(Error::InvalidConfiguration(
                "max_buffered must be > 0".into(),
            ));
        }
        Ok(())
    }
}
