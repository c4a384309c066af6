//! Builder for configuring and constructing a [`Resampler`].

use std::sync::Arc;

use crate::{FilterTable, Quality, Resampler, ResamplerConfig, Result};

/// # Example
///
/// ```
/// use rerate_core::{Quality, Resampler};
///
/// let resampler = Resampler::builder()
///     .quality(Quality::Fast)
///     .rates(48000, 16000)
///     .max_buffered(8192)
///     .build()?;
///
/// assert_eq!(resampler.ratio(), 1.0 / 3.0);
/// # Ok::<(), rerate_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResamplerBuilder {
    config: ResamplerConfig,
    table: Option<Arc<FilterTable>>,
}

impl ResamplerBuilder {
    /// Start from an existing configuration.
    pub fn from_config(config: ResamplerConfig) -> Self {
        Self {
            config,
            table: None,
        }
    }

    /// Default: [`Quality::High`]
    pub fn quality(mut self, quality: Quality) -> Self {
        self.config.quality = quality;
        self
    }

    /// Default: 44100 -> 48000
    pub fn rates(mut self, from: u32, to: u32) -> Self {
        self.config.from = from;
        self.config.to = to;
        self
    }

    /// Bound the input window. Default: unbounded.
    pub fn max_buffered(mut self, samples: usize) -> Self {
        self.config.max_buffered = Some(samples);
        self
    }

    /// Use a custom kernel instead of the quality preset.
    pub fn table(mut self, table: Arc<FilterTable>) -> Self {
        self.table = Some(table);
        self
    }

    pub fn build(self) -> Result<Resampler> {
        self.config.validate()?;
        let (table, quality) = match self.table {
            Some(table) => (table, None),
            None => (self.config.quality.table(), Some(self.config.quality)),
        };
        Resampler::build(
            table,
            quality,
            self.config.from,
            self.config.to,
            self.config.max_buffered,
        )
    }
}
