//! Per-bin running mean and variance
//!
//! Uses Welford's one-pass update, which avoids the catastrophic
//! cancellation of the naive `sum(y^2) - n * mean^2` formula.

use serde::{Deserialize, Serialize};

use binstats_core::{BinCell, Error, Result};

/// Running statistics of one bin
///
/// `s` is the sum of squared deviations from the running mean (`M2`).
/// `mean` and `s` are `None` exactly when `n == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateCell {
    n: u64,
    mean: Option<f64>,
    s: Option<f64>,
}

impl AggregateCell {
    /// Create an empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation
    ///
    /// Fails without changing the cell if `n` is already `u64::MAX`.
    #[inline]
    pub fn add(&mut self, y: f64) -> Result<()> {
        let n = self.n.checked_add(1).ok_or_else(|| Error::count_overflow("cell"))?;
        match (self.mean, self.s) {
            (Some(mean), Some(s)) => {
                let new_mean = mean + (y - mean) / n as f64;
                // (y - old mean) * (y - new mean)
                self.s = Some(s + (y - mean) * (y - new_mean));
                self.mean = Some(new_mean);
            }
            _ => {
                self.mean = Some(y);
                self.s = Some(0.0);
            }
        }
        self.n = n;
        Ok(())
    }

    /// Number of observations
    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Sum of squared deviations from the mean
    pub fn s(&self) -> Option<f64> {
        self.s
    }

    /// Sample variance, `S / (n - 1)`
    ///
    /// A single observation has variance `0`; an empty cell has none.
    pub fn variance(&self) -> Option<f64> {
        let s = self.s?;
        Some(if self.n > 1 { s / (self.n - 1) as f64 } else { s })
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Exported view of the cell
    pub fn summary(&self) -> CellSummary {
        CellSummary {
            mean: self.mean,
            n: self.n,
            var: self.variance(),
        }
    }

    /// Restore a cell from its exported view
    ///
    /// Inverts [`variance`](Self::variance): `S = var * (n - 1)`. Entries
    /// with `n == 0` restore as empty cells regardless of `mean`/`var`.
    pub fn from_summary(summary: &CellSummary) -> Result<Self> {
        if summary.n == 0 {
            return Ok(Self::default());
        }

        let mean = match summary.mean {
            Some(m) if !m.is_nan() => m,
            _ => {
                return Err(Error::InvalidConfiguration(format!(
                    "bin with n={} needs a numeric mean",
                    summary.n
                )))
            }
        };
        let var = match summary.var {
            Some(v) if v >= 0.0 => v,
            _ => {
                return Err(Error::InvalidConfiguration(format!(
                    "bin with n={} needs a non-negative variance",
                    summary.n
                )))
            }
        };

        Ok(Self {
            n: summary.n,
            mean: Some(mean),
            s: Some(var * (summary.n - 1) as f64),
        })
    }
}

impl BinCell for AggregateCell {
    type Input = (f64, f64);
    type Summary = CellSummary;
    const NAME: &'static str = "PairedAggregator";

    /// Pairs are binned by `x`
    #[inline]
    fn position(&(x, y): &(f64, f64)) -> Option<f64> {
        (!x.is_nan() && !y.is_nan()).then_some(x)
    }

    fn n(&self) -> u64 {
        self.n
    }

    #[inline]
    fn push(&mut self, &(_, y): &(f64, f64)) -> Result<()> {
        self.add(y)
    }

    fn summary(&self) -> CellSummary {
        AggregateCell::summary(self)
    }

    fn from_summary(summary: &CellSummary) -> Result<Self> {
        AggregateCell::from_summary(summary)
    }
}

/// Exported statistics of one bin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellSummary {
    /// Mean of the observations, `None` for an empty bin
    pub mean: Option<f64>,
    /// Number of observations
    pub n: u64,
    /// Sample variance, `None` for an empty bin
    pub var: Option<f64>,
}

impl CellSummary {
    /// Sample standard deviation
    pub fn std_dev(&self) -> Option<f64> {
        self.var.map(f64::sqrt)
    }
}
