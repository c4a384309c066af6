//! Exact mapping from output sample index to input-domain time.
//!
//! The cursor never accumulates a floating increment. The timestamp of output
//! sample `n` is re-derived from `n * from / to` in integer arithmetic every
//! time, so it is exact for any stream length.

/// Input-domain time of one output sample: `whole + remainder / denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
///
/// Only a [`Cursor`] creates timestamps, so `denominator` is never zero and
/// `remainder < denominator` always holds.
pub struct Timestamp {
    whole: u64,
    remainder: u64,
    denominator: u64,
}

impl Timestamp {
    /// Input sample at or before this instant.
    #[inline]
    pub fn whole(&self) -> u64 {
        self.whole
    }

    pub fn remainder(&self) -> u64 {
        self.remainder
    }

    /// Reduced output rate.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Fractional offset past `whole`, in `[0, 1)`.
    #[inline]
    pub fn frac(&self) -> f64 {
        self.remainder as f64 / self.denominator as f64
    }
}

/// Output sample counter with a fixed, reduced `from / to` ratio.
#[derive(Debug, Clone)]
pub struct Cursor {
    from: u64,
    to: u64,
    index: u64,
}

impl Cursor {
    /// Both rates must be non-zero; callers validate before constructing.
    pub fn new(from: u32, to: u32) -> Self {
        debug_assert!(from > 0 && to > 0, "rates must be non-zero");
        let g = gcd(from as u64, to as u64).max(1);
        Self {
            from: from as u64 / g,
            to: to as u64 / g,
            index: 0,
        }
    }

    /// Timestamp of output sample `n`.
    #[inline]
    pub fn at(&self, n: u64) -> Timestamp {
        let scaled = n as u128 * self.from as u128;
        let to = self.to as u128;
        Timestamp {
            whole: (scaled / to) as u64,
            remainder: (scaled % to) as u64,
            denominator: self.to,
        }
    }

    #[inline]
    pub fn current(&self) -> Timestamp {
        self.at(self.index)
    }

    /// Index of the next output sample to be produced.
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    #[inline]
    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Reduced input rate.
    pub fn from(&self) -> u64 {
        self.from
    }

    /// Reduced output rate.
    pub fn to(&self) -> u64 {
        self.to
    }

    pub fn is_unity(&self) -> bool {
        self.from == self.to
    }

    /// Number of output samples whose timestamp falls before input position
    /// `input_len`, i.e. `ceil(input_len * to / from)`.
    pub fn outputs_before(&self, input_len: u64) -> u64 {
        let scaled = input_len as u128 * self.to as u128;
        scaled.div_ceil(self.from as u128) as u64
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_reduced() {
        let cursor = Cursor::new(44100, 48000);
        assert_eq!(cursor.from(), 147);
        assert_eq!(cursor.to(), 160);
        assert!(!cursor.is_unity());
        assert!(Cursor::new(48000, 48000).is_unity());
    }

    #[test]
    fn test_unity_ratio_has_zero_drift() {
        let mut cursor = Cursor::new(1, 1);
        for _ in 0..10_000 {
            cursor.advance();
        }
        assert_eq!(cursor.current().whole(), 10_000);

        for n in [0u64, 1, 9_999_999, 10_000_000, u32::MAX as u64 * 7] {
            let t = cursor.at(n);
            assert_eq!(t.whole(), n);
            assert_eq!(t.remainder(), 0);
        }
    }

    #[test]
    fn test_non_trivial_ratio_is_exact() {
        let cursor = Cursor::new(44100, 48000);

        // 10^8 * 44100 / 48000 = 91_875_000 exactly
        let t = cursor.at(100_000_000);
        assert_eq!(t.whole(), 91_875_000);
        assert_eq!(t.remainder(), 0);

        let t = cursor.at(1);
        assert_eq!((t.whole(), t.remainder(), t.denominator()), (0, 147, 160));

        // Every sampled index reconstructs n * from exactly
        let mut n = 1u64;
        while n <= 100_000_000 {
            let t = cursor.at(n);
            assert_eq!(t.whole() * 160 + t.remainder(), n * 147);
            assert!(t.remainder() < 160);
            n = n * 3 + 7;
        }
    }

    #[test]
    fn test_naive_accumulation_drifts_but_cursor_does_not() {
        let cursor = Cursor::new(44100, 48000);
        let step = 44100.0f32 / 48000.0;
        let mut naive = 0.0f32;
        for _ in 0..1_000_000 {
            naive += step;
        }
        let exact = cursor.at(1_000_000);
        assert_eq!((exact.whole(), exact.remainder()), (918_750, 0));
        assert!((naive as f64 - exact.whole() as f64).abs() > 1.0);
    }

    #[test]
    fn test_frac_in_unit_interval() {
        let cursor = Cursor::new(3, 7);
        for n in 0..100 {
            let f = cursor.at(n).frac();
            assert!((0.0..1.0).contains(&f));
        }
        assert_eq!(cursor.at(7).frac(), 0.0);
        assert_eq!(cursor.at(7).whole(), 3);
    }

    #[test]
    fn test_timestamps_are_well_formed() {
        let cursor = Cursor::new(48000, 44100);
        for n in [0u64, 1, 146, 147, 12_345, u32::MAX as u64] {
            let t = cursor.at(n);
            assert_eq!(t.denominator(), 147);
            assert!(t.remainder() < t.denominator());
            assert!(t.frac().is_finite());
        }
    }

    #[test]
    fn test_outputs_before() {
        assert_eq!(Cursor::new(2, 1).outputs_before(8), 4);
        assert_eq!(Cursor::new(2, 1).outputs_before(9), 5);
        assert_eq!(Cursor::new(1, 2).outputs_before(8), 16);
        assert_eq!(Cursor::new(44100, 48000).outputs_before(44100), 48000);
        assert_eq!(Cursor::new(1, 1).outputs_before(0), 0);
    }

    #[test]
    fn test_reset() {
        let mut cursor = Cursor::new(2, 3);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.index(), 2);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }
}
