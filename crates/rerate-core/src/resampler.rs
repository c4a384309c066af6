//! Streaming band-limited resampler.
//!
//! Input is pushed into a [`Window`] addressed by absolute sample position.
//! Output sample `n` sits at input time `n * from / to` and is evaluated by
//! convolving the surrounding input with the interpolated kernel of a
//! [`FilterTable`]. A sample is only emitted once the window holds every
//! forward tap it needs, so the split of the input into chunks changes when
//! an output appears, never its value.
//!
//! # Example
//!
//! ```
//! use rerate_core::{Quality, Resampler};
//!
//! let mut resampler = Resampler::new(Quality::Fast, 44100, 48000)?;
//!
//! let mut output = Vec::new();
//! for chunk in vec![0.0f32; 4410].chunks(441) {
//!     output.extend(resampler.process(chunk)?);
//! }
//! output.extend(resampler.flush());
//!
//! assert_eq!(output.len(), 4800);
//! # Ok::<(), rerate_core::Error>(())
//! ```

use std::sync::Arc;

use crate::cursor::{Cursor, Timestamp};
use crate::{Error, FilterTable, Quality, ResamplerBuilder, ResamplerConfig, Result, Window};

/// Arbitrary-ratio streaming sample rate converter for one mono stream.
///
/// Not shareable across threads while in use; create one per stream.
#[derive(Debug, Clone)]
pub struct Resampler {
    table: Arc<FilterTable>,
    /// `None` when built from a custom table.
    quality: Option<Quality>,
    from: u32,
    to: u32,
    cursor: Cursor,
    window: Window,
    /// `min(to / from, 1)`: kernel stretch when downsampling.
    scale: f64,
    /// `to / from` when downsampling, otherwise 1.
    gain: f64,
    /// Grid points between consecutive taps, `floor(scale * precision)`.
    index_step: usize,
    /// Most taps either kernel half can use, `N / index_step`.
    half_len: u64,
    passthrough: bool,
}

impl Resampler {
    /// Resampler using one of the preset kernels.
    pub fn new(quality: Quality, from: u32, to: u32) -> Result<Self> {
        Self::build(quality.table(), Some(quality), from, to, None)
    }

    /// Resampler using a caller-supplied kernel.
    pub fn with_table(table: Arc<FilterTable>, from: u32, to: u32) -> Result<Self> {
        Self::build(table, None, from, to, None)
    }

    pub fn from_config(config: &ResamplerConfig) -> Result<Self> {
        config.validate()?;
        Self::build(
            config.quality.table(),
            Some(config.quality),
            config.from,
            config.to,
            config.max_buffered,
        )
    }

    pub fn builder() -> ResamplerBuilder {
        ResamplerBuilder::default()
    }

    pub(crate) fn build(
        table: Arc<FilterTable>,
        quality: Option<Quality>,
        from: u32,
        to: u32,
        max_buffered: Option<usize>,
    ) -> Result<Self> {
        if from == 0 || to == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "sample rates must be positive (from={}, to={})",
                from, to
            )));
        }

        let cursor = Cursor::new(from, to);
        let passthrough = cursor.is_unity();

        let ratio = to as f64 / from as f64;
        let scale = ratio.min(1.0);
        let index_step = (scale * table.precision() as f64) as usize;
        if index_step == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "ratio {}/{} is below the kernel resolution (precision {})",
                to,
                from,
                table.precision()
            )));
        }
        let half_len = (table.len() / index_step) as u64;

        let window = match max_buffered {
            Some(limit) => {
                // Room for the look-back, the output position and the look-ahead
                let needed = if passthrough {
                    1
                } else {
                    2 * half_len as usize + 1
                };
                if limit < needed {
                    return Err(Error::InvalidConfiguration(format!(
                        "max_buffered {} cannot hold a full kernel ({} samples)",
                        limit, needed
                    )));
                }
                Window::with_capacity_limit(limit)
            }
            None => Window::new(),
        };

        tracing::debug!(
            "Created resampler {} -> {} Hz ({}, {} taps per side, passthrough={})",
            from,
            to,
            quality.map_or("custom", Quality::name),
            half_len,
            passthrough
        );

        Ok(Self {
            table,
            quality,
            from,
            to,
            cursor,
            window,
            scale,
            gain: scale,
            index_step,
            half_len,
            passthrough,
        })
    }

    /// Append input samples. Never produces output.
    ///
    /// With a bounded window the whole chunk is rejected if it does not fit;
    /// drain with [`read`](Self::read) and retry with a smaller chunk.
    pub fn supply(&mut self, chunk: &[f32]) -> Result<()> {
        if let Err(e) = self.window.extend(chunk) {
            tracing::debug!("Rejected input chunk: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Emit every output sample the buffered input fully determines.
    pub fn read(&mut self) -> Vec<f32> {
        let mut output = Vec::new();
        self.read_into(&mut output);
        output
    }

    /// Like [`read`](Self::read) but appends into `output`. Returns the number
    /// of samples appended.
    pub fn read_into(&mut self, output: &mut Vec<f32>) -> usize {
        self.emit(output, false)
    }

    /// `supply` followed by `read`.
    pub fn process(&mut self, chunk: &[f32]) -> Result<Vec<f32>> {
        self.supply(chunk)?;
        Ok(self.read())
    }

    /// End of stream: emit the remaining output samples whose timestamps fall
    /// inside the supplied input, treating missing future input as absent.
    ///
    /// Over a whole session this brings the output length to exactly
    /// `ceil(input_len * to / from)`. Samples supplied afterwards continue the
    /// same timeline.
    pub fn flush(&mut self) -> Vec<f32> {
        let mut output = Vec::new();
        let count = self.emit(&mut output, true);
        debug_assert_eq!(
            self.cursor.index(),
            self.cursor.outputs_before(self.window.right())
        );
        tracing::trace!("Flushed {} samples", count);
        output
    }

    /// Forget all input and restart the timeline at zero.
    pub fn reset(&mut self) {
        self.window.clear();
        self.cursor.reset();
        tracing::debug!("Reset resampler {} -> {} Hz", self.from, self.to);
    }

    fn emit(&mut self, output: &mut Vec<f32>, flushing: bool) -> usize {
        let start = output.len();
        let required = if self.passthrough { 0 } else { self.half_len };

        loop {
            let t = self.cursor.current();
            let ready = if flushing {
                t.whole() < self.window.right()
            } else {
                self.window.has_enough_padding(t.whole(), required)
            };
            if !ready {
                break;
            }

            let sample = if self.passthrough {
                self.window[t.whole()]
            } else {
                self.interpolate(t)
            };
            output.push(sample);
            self.cursor.advance();
        }

        // Keep `required` samples of history behind the next output position
        let next = self.cursor.current().whole();
        self.window.discard_before(next.saturating_sub(required));

        output.len() - start
    }

    fn interpolate(&self, t: Timestamp) -> f32 {
        let t0 = t.whole();
        let frac = t.frac();
        let n = self.table.len();
        let step = self.index_step;
        let precision = self.table.precision() as f64;
        let mut acc = 0.0f64;

        // Out-of-window reads panic through `Index`; every bound below comes
        // from the window padding, so one would mean a broken bound.

        // Backward half: t0, t0 - 1, ...
        let (offset, eta) = split_index(self.scale * frac * precision);
        let taps = (n.saturating_sub(offset) / step) as u64;
        let i_max = (self.window.left_padding(t0) + 1).min(taps);
        for i in 0..i_max {
            let idx = offset + i as usize * step;
            acc += self.table.weight(idx, eta) * self.window[t0 - i] as f64;
        }

        // Forward half: t0 + 1, t0 + 2, ... at the complementary phase
        let (offset, eta) = split_index(self.scale * (1.0 - frac) * precision);
        let taps = (n.saturating_sub(offset) / step) as u64;
        let k_max = self.window.right_padding(t0).min(taps);
        for k in 0..k_max {
            let idx = offset + k as usize * step;
            acc += self.table.weight(idx, eta) * self.window[t0 + k + 1] as f64;
        }

        (acc * self.gain) as f32
    }

    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    /// Preset in use, `None` for a custom table.
    pub fn quality(&self) -> Option<Quality> {
        self.quality
    }

    pub fn table(&self) -> &Arc<FilterTable> {
        &self.table
    }

    pub fn from(&self) -> u32 {
        self.from
    }

    pub fn to(&self) -> u32 {
        self.to
    }

    /// `to / from`.
    pub fn ratio(&self) -> f64 {
        self.to as f64 / self.from as f64
    }

    /// Input samples of look-ahead an output sample waits for.
    pub fn latency(&self) -> u64 {
        if self.passthrough {
            0
        } else {
            self.half_len
        }
    }

    /// Index of the next output sample.
    pub fn output_index(&self) -> u64 {
        self.cursor.index()
    }

    /// Exact input-domain time of output sample `n`.
    pub fn timestamp(&self, n: u64) -> Timestamp {
        self.cursor.at(n)
    }

    /// Total input samples supplied so far.
    pub fn input_len(&self) -> u64 {
        self.window.right()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

/// Split a fractional table index into grid point and interpolation weight.
#[inline]
fn split_index(index_frac: f64) -> (usize, f64) {
    let offset = index_frac as usize;
    (offset, index_frac - offset as f64)
}
