//! Test helpers and fixtures for rerate integration tests.
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact operations (passthrough, grid-aligned taps)
//! - `DSP_EPSILON` (1e-3): Upsampled tone reconstruction
//! - `DOWNSAMPLE_EPSILON` (0.01): Downsampled tone reconstruction
//! - `PERCEPTUAL_EPSILON` (0.001): Perceptual equivalence (-60dB)

#![allow(dead_code)]

pub mod tolerances;

use rerate::Resampler;

/// Route library logs to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Generate a sine wave at `frequency` for `num_samples` samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| sine_at(frequency, sample_rate, i as f64))
        .collect()
}

/// Value of the reference sine at fractional sample time `t`.
pub fn sine_at(frequency: f64, sample_rate: f64, t: f64) -> f32 {
    (2.0 * std::f64::consts::PI * frequency * t / sample_rate).sin() as f32
}

/// Generate an impulse signal (single sample at 1.0, rest zeros).
pub fn generate_impulse(num_samples: usize, position: usize) -> Vec<f32> {
    let mut samples = vec![0.0; num_samples];
    if position < num_samples {
        samples[position] = 1.0;
    }
    samples
}

/// Generate a DC offset signal (constant value).
pub fn generate_dc(value: f32, num_samples: usize) -> Vec<f32> {
    vec![value; num_samples]
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f32 / u32::MAX as f32) * 4.0 - 1.0
        })
        .collect()
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// Feed `input` in chunks of the given sizes (cycling), then flush.
pub fn run_chunks(resampler: &mut Resampler, input: &[f32], chunk_sizes: &[usize]) -> Vec<f32> {
    let mut output = Vec::new();
    let mut pos = 0;
    for &size in chunk_sizes.iter().cycle() {
        if pos >= input.len() {
            break;
        }
        let end = (pos + size.max(1)).min(input.len());
        output.extend(resampler.process(&input[pos..end]).expect("process failed"));
        pos = end;
    }
    output.extend(resampler.flush());
    output
}
