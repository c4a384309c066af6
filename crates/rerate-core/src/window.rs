//! Sample window addressed by absolute stream position.
//!
//! Position 0 is the first sample ever pushed. The window retains the range
//! `[left, right)`; `right` is the total number of samples pushed so far and
//! `left` only moves forward when the owner discards history it no longer
//! needs. Storage is a ring (`VecDeque`) so pushes and front discards are O(1).

use std::collections::VecDeque;
use std::ops::Index;

use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Window {
    samples: VecDeque<f32>,
    /// Absolute position of `samples[0]`.
    left: u64,
    /// Maximum number of retained samples, `None` for unbounded.
    limit: Option<usize>,
}

impl Window {
    /// Unbounded window; grows as needed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed-size window holding at most `limit` samples. `push` beyond the
    /// limit is rejected with [`Error::CapacityExceeded`].
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(limit),
            left: 0,
            limit: Some(limit),
        }
    }

    /// Absolute position of the oldest retained sample.
    #[inline]
    pub fn left(&self) -> u64 {
        self.left
    }

    /// One past the newest sample; equals the number of samples ever pushed.
    #[inline]
    pub fn right(&self) -> u64 {
        self.left + self.samples.len() as u64
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Samples that can still be pushed before the limit is hit.
    pub fn remaining_capacity(&self) -> usize {
        match self.limit {
            Some(limit) => limit.saturating_sub(self.samples.len()),
            None => usize::MAX,
        }
    }

    /// Append one sample at position `right`.
    pub fn push(&mut self, sample: f32) -> Result<()> {
        if self.remaining_capacity() == 0 {
            return Err(Error::CapacityExceeded {
                requested: 1,
                available: 0,
            });
        }
        self.samples.push_back(sample);
        Ok(())
    }

    /// Append a whole chunk, all or nothing.
    pub fn extend(&mut self, chunk: &[f32]) -> Result<()> {
        let available = self.remaining_capacity();
        if chunk.len() > available {
            return Err(Error::CapacityExceeded {
                requested: chunk.len(),
                available,
            });
        }
        self.samples.extend(chunk.iter().copied());
        Ok(())
    }

    /// Sample at absolute `position`.
    #[inline]
    pub fn get(&self, position: u64) -> Result<f32> {
        if position < self.left || position >= self.right() {
            return Err(Error::OutOfRange {
                position,
                left: self.left,
                right: self.right(),
            });
        }
        Ok(self.samples[(position - self.left) as usize])
    }

    /// Retrievable samples strictly before `position`.
    #[inline]
    pub fn left_padding(&self, position: u64) -> u64 {
        position.saturating_sub(self.left)
    }

    /// Retrievable samples strictly after `position`.
    #[inline]
    pub fn right_padding(&self, position: u64) -> u64 {
        self.right().saturating_sub(position).saturating_sub(1)
    }

    #[inline]
    pub fn has_enough_padding(&self, position: u64, required: u64) -> bool {
        position < self.right() && self.right_padding(position) >= required
    }

    /// Drop every sample before `position`. Never moves `left` past `right`.
    pub fn discard_before(&mut self, position: u64) {
        let target = position.min(self.right());
        if target <= self.left {
            return;
        }
        let count = (target - self.left) as usize;
        self.samples.drain(..count);
        self.left = target;
    }

    /// Back to the empty state at position 0. The capacity limit is kept.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.left = 0;
    }
}

impl Index<u64> for Window {
    type Output = f32;

    /// Panics when `position` is outside `[left, right)`.
    fn index(&self, position: u64) -> &f32 {
        match self.get(position) {
            Ok(_) => &self.samples[(position - self.left) as usize],
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_with(samples: &[f32]) -> Window {
        let mut w = Window::new();
        w.extend(samples).unwrap();
        w
    }

    #[test]
    fn test_empty_window() {
        let w = Window::new();
        assert!(w.is_empty());
        assert_eq!(w.left(), 0);
        assert_eq!(w.right(), 0);
        assert!(w.get(0).is_err());
        assert!(!w.has_enough_padding(0, 0));
    }

    #[test]
    fn test_push_and_get_by_absolute_position() {
        let mut w = Window::new();
        for i in 0..10 {
            w.push(i as f32).unwrap();
        }
        assert_eq!(w.right(), 10);
        assert_eq!(w.get(0), Ok(0.0));
        assert_eq!(w.get(9), Ok(9.0));
        assert_eq!(w[5], 5.0);
        assert_eq!(
            w.get(10),
            Err(Error::OutOfRange {
                position: 10,
                left: 0,
                right: 10
            })
        );
    }

    #[test]
    fn test_positions_survive_discard() {
        let mut w = window_with(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        w.discard_before(4);
        assert_eq!(w.left(), 4);
        assert_eq!(w.right(), 6);
        assert_eq!(w.len(), 2);
        assert_eq!(w.get(4), Ok(4.0));
        assert_eq!(w.get(5), Ok(5.0));
        assert!(matches!(w.get(3), Err(Error::OutOfRange { left: 4, .. })));

        // Positions keep counting from where they left off
        w.push(6.0).unwrap();
        assert_eq!(w.get(6), Ok(6.0));
    }

    #[test]
    fn test_discard_never_passes_right() {
        let mut w = window_with(&[1.0, 2.0, 3.0]);
        w.discard_before(100);
        assert_eq!(w.left(), 3);
        assert_eq!(w.right(), 3);
        assert!(w.is_empty());

        // Going backwards is a no-op
        w.discard_before(1);
        assert_eq!(w.left(), 3);
    }

    #[test]
    fn test_padding_queries() {
        let mut w = window_with(&[0.0; 10]);
        w.discard_before(2);

        assert_eq!(w.left_padding(2), 0);
        assert_eq!(w.left_padding(5), 3);
        assert_eq!(w.left_padding(0), 0);

        assert_eq!(w.right_padding(5), 4);
        assert_eq!(w.right_padding(9), 0);
        assert_eq!(w.right_padding(20), 0);

        assert!(w.has_enough_padding(5, 4));
        assert!(!w.has_enough_padding(5, 5));
        assert!(w.has_enough_padding(9, 0));
        assert!(!w.has_enough_padding(10, 0));
    }

    #[test]
    fn test_capacity_limit() {
        let mut w = Window::with_capacity_limit(4);
        assert_eq!(w.remaining_capacity(), 4);
        w.extend(&[1.0, 2.0, 3.0]).unwrap();

        let err = w.extend(&[4.0, 5.0]).unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                requested: 2,
                available: 1
            }
        );
        // Rejected chunk left no trace
        assert_eq!(w.right(), 3);

        w.push(4.0).unwrap();
        assert!(w.push(5.0).is_err());

        w.discard_before(2);
        assert_eq!(w.remaining_capacity(), 2);
        w.extend(&[5.0, 6.0]).unwrap();
        assert_eq!(w.get(5), Ok(6.0));
    }

    #[test]
    fn test_clear_resets_positions() {
        let mut w = Window::with_capacity_limit(8);
        w.extend(&[1.0, 2.0, 3.0]).unwrap();
        w.discard_before(2);
        w.clear();
        assert_eq!(w.left(), 0);
        assert_eq!(w.right(), 0);
        assert_eq!(w.limit(), Some(8));
    }

    #[test]
    #[should_panic(expected = "outside window")]
    fn test_index_out_of_range_panics() {
        let w = window_with(&[1.0]);
        let _ = w[1];
    }
}
