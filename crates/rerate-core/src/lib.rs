//! Streaming arbitrary-ratio sample rate conversion.
//!
//! # Primary API
//!
//! - [`Resampler`] / [`ResamplerBuilder`]: Main entry point
//! - [`Quality`]: Kernel preset selection (`High`, `Fast`)
//! - [`FilterTable`]: Band-limited interpolation kernel
//! - [`Window`]: Input buffer addressed by absolute sample position
//! - [`ResamplerConfig`]: Serializable configuration
//!
//! # Example
//!
//! ```
//! use rerate_core::{Quality, Resampler};
//!
//! let mut resampler = Resampler::new(Quality::High, 1, 2)?;
//!
//! let mut output = resampler.process(&[1.0, 0.0, 0.0, 0.0])?;
//! output.extend(resampler.flush());
//!
//! assert_eq!(output.len(), 8);
//! # Ok::<(), rerate_core::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

mod filter;
pub use filter::{FilterTable, Quality};

mod cursor;
pub use cursor::{Cursor, Timestamp};

mod window;
pub use window::Window;

mod config;
pub use config::ResamplerConfig;

mod builder;
pub use builder::ResamplerBuilder;

mod resampler;
pub use resampler::Resampler;
