//! Whole-buffer conversion.

use rerate_core::{Quality, Resampler};

use crate::Result;

/// Resample a complete signal in one call.
///
/// Equivalent to streaming `input` through a fresh [`Resampler`] and flushing
/// at the end; the result has `ceil(input.len() * to / from)` samples.
///
/// # Example
///
/// ```
/// use rerate::{resample, Quality};
///
/// let output = resample(Quality::Fast, 2, 1, &[1.0; 8])?;
/// assert_eq!(output.len(), 4);
/// # Ok::<(), rerate::Error>(())
/// ```
pub fn resample(quality: Quality, from: u32, to: u32, input: &[f32]) -> Result<Vec<f32>> {
    let mut resampler = Resampler::new(quality, from, to)?;
    let mut output = resampler.process(input)?;
    output.extend(resampler.flush());
    Ok(output)
}
