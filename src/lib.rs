//! # rerate - Streaming Sample Rate Conversion
//!
//! Band-limited, arbitrary-ratio resampling of sampled signals, processed
//! incrementally in caller-sized chunks.
//!
//! ## Architecture
//!
//! rerate is an umbrella crate over:
//! - **rerate-core** - Conversion kernel (filter tables, sample window, exact cursor, resampler)
//!
//! and adds multi-channel handling and whole-buffer helpers on top.
//!
//! ## Quick Start
//!
//! ```
//! use rerate::prelude::*;
//!
//! let mut resampler = Resampler::builder()
//!     .quality(Quality::High)
//!     .rates(44100, 48000)
//!     .build()?;
//!
//! let mut output = Vec::new();
//! for block in vec![0.0f32; 44100].chunks(512) {
//!     output.extend(resampler.process(block)?);
//! }
//! output.extend(resampler.flush());
//!
//! assert_eq!(output.len(), 48000);
//! # Ok::<(), rerate::Error>(())
//! ```

/// Re-export of rerate-core for direct access
pub use rerate_core as core;

pub use rerate_core::{
    Cursor, FilterTable, Quality, Resampler, ResamplerBuilder, ResamplerConfig, Timestamp, Window,
};

mod error;
pub use error::{Error, Result};

mod multichannel;
pub use multichannel::MultiChannelResampler;

mod oneshot;
pub use oneshot::resample;

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{
        resample, MultiChannelResampler, Quality, Resampler, ResamplerBuilder, ResamplerConfig,
    };
}
