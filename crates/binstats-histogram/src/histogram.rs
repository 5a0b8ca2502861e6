//! Resumable per-bin event counter

use binstats_core::{BinCell, Binned, Error, Result};

/// Histogram over left-inclusive bins with a catch-all `less` bin
///
/// # Example
///
/// ```rust
/// use binstats_histogram::{BinIdentity, Histogram};
///
/// let mut hist = Histogram::with_bins(&[0.0, 1.0, 2.0]).unwrap();
/// hist.add_data(&[-0.5, 0.0, 0.5, 1.0, 7.0]).unwrap();
///
/// let result = hist.result();
/// assert_eq!(result.get("less"), Some(&1));
/// assert_eq!(result.get("0"), Some(&2));
/// assert_eq!(result.get("1"), Some(&1));
/// assert_eq!(result.get("2"), Some(&1));
/// assert_eq!(hist.summary(BinIdentity::Index(0)), Some(2));
/// ```
pub type Histogram = Binned<Counter>;

/// Event count of one bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counter(u64);

impl Counter {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl BinCell for Counter {
    type Input = f64;
    type Summary = u64;
    const NAME: &'static str = "Histogram";

    #[inline]
    fn position(value: &f64) -> Option<f64> {
        (!value.is_nan()).then_some(*value)
    }

    fn n(&self) -> u64 {
        self.0
    }

    #[inline]
    fn push(&mut self, _value: &f64) -> Result<()> {
        self.0 = self.0.checked_add(1).ok_or_else(|| Error::count_overflow("cell"))?;
        Ok(())
    }

    fn summary(&self) -> u64 {
        self.0
    }

    fn from_summary(count: &u64) -> Result<Self> {
        Ok(Counter(*count))
    }
}
