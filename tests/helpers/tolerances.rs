//! Tolerance constants for resampler testing.
//!
//! Different checks require different precision levels.

/// Floating point rounding errors (passthrough, exact kernel grid points).
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Band-limited reconstruction of in-band tones when upsampling.
pub const DSP_EPSILON: f32 = 1e-3;

/// Reconstruction when downsampling; tap spacing is rounded to the kernel grid.
pub const DOWNSAMPLE_EPSILON: f32 = 0.01;

/// Audio perceptual tolerance (~-60dB).
pub const PERCEPTUAL_EPSILON: f32 = 0.001;
