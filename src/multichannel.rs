//! Multi-channel adaptor around the mono kernel.
//!
//! Every channel gets its own [`Resampler`] with identical settings, so all
//! channels advance in lockstep and always produce the same number of frames.
//! Channels are never mixed.

use rerate_core::{Quality, Resampler, ResamplerConfig};

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct MultiChannelResampler {
    channels: Vec<Resampler>,
    /// De-interleave buffer reused across calls.
    scratch: Vec<f32>,
}

impl MultiChannelResampler {
    pub fn new(quality: Quality, from: u32, to: u32, channels: usize) -> Result<Self> {
        Self::replicate(Resampler::new(quality, from, to)?, channels)
    }

    pub fn from_config(config: &ResamplerConfig, channels: usize) -> Result<Self> {
        Self::replicate(Resampler::from_config(config)?, channels)
    }

    fn replicate(resampler: Resampler, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(channel_mismatch("channel count must be > 0".into()));
        }
        tracing::debug!(
            "Created {}-channel resampler {} -> {} Hz",
            channels,
            resampler.from(),
            resampler.to()
        );
        Ok(Self {
            channels: vec![resampler; channels],
            scratch: Vec::new(),
        })
    }

    pub fn channels(&self) -> usize {
        self.channels.len()
    }

    /// Input samples of look-ahead per channel.
    pub fn latency(&self) -> u64 {
        self.channels[0].latency()
    }

    /// Resample interleaved frames; returns interleaved frames.
    pub fn process_interleaved(&mut self, input: &[f32]) -> Result<Vec<f32>> {
        let channels = self.channels.len();
        if input.len() % channels != 0 {
            return Err(channel_mismatch(format!(
                "{} samples is not a whole number of {}-channel frames",
                input.len(),
                channels
            )));
        }

        // Windows fill identically, so a capacity error hits channel 0 first
        // and leaves every channel untouched.
        for (ch, resampler) in self.channels.iter_mut().enumerate() {
            self.scratch.clear();
            self.scratch
                .extend(input.iter().skip(ch).step_by(channels).copied());
            resampler.supply(&self.scratch)?;
        }

        let planar: Vec<Vec<f32>> = self.channels.iter_mut().map(Resampler::read).collect();
        Ok(interleave(&planar))
    }

    /// Resample one slice per channel; all slices must have the same length.
    pub fn process_planar(&mut self, input: &[&[f32]]) -> Result<Vec<Vec<f32>>> {
        if input.len() != self.channels.len() {
            return Err(channel_mismatch(format!(
                "expected {} channels, got {}",
                self.channels.len(),
                input.len()
            )));
        }
        if input.windows(2).any(|pair| pair[0].len() != pair[1].len()) {
            return Err(channel_mismatch("channels have different lengths".into()));
        }

        for (resampler, samples) in self.channels.iter_mut().zip(input) {
            resampler.supply(samples)?;
        }
        Ok(self.channels.iter_mut().map(Resampler::read).collect())
    }

    /// End of stream for every channel, interleaved.
    pub fn flush_interleaved(&mut self) -> Vec<f32> {
        interleave(&self.flush_planar())
    }

    pub fn flush_planar(&mut self) -> Vec<Vec<f32>> {
        self.channels.iter_mut().map(Resampler::flush).collect()
    }

    pub fn reset(&mut self) {
        self.channels.iter_mut().for_each(Resampler::reset);
    }
}

fn channel_mismatch(message: String) -> Error {
    let err = Error::ChannelMismatch(message);
    tracing::debug!("Rejected multi-channel input: {}", err);
    err
}

fn interleave(planar: &[Vec<f32>]) -> Vec<f32> {
    let frames = planar.first().map_or(0, Vec::len);
    debug_assert!(planar.iter().all(|ch| ch.len() == frames));

    let mut output = Vec::with_capacity(frames * planar.len());
    for i in 0..frames {
        output.extend(planar.iter().map(|ch| ch[i]));
    }
    output
}
