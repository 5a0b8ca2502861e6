//! Binned running mean/variance of paired observations

use binstats_core::Binned;

use crate::cell::AggregateCell;

/// Bins `(x, y)` pairs by `x` and keeps running statistics of `y` per bin
///
/// A NaN in either coordinate fails the whole `add_data` call.
///
/// # Example
///
/// ```rust
/// use binstats_aggregate::PairedAggregator;
///
/// let mut agg = PairedAggregator::with_bins(&[0.0, 5.0]).unwrap();
/// agg.add_data(&[(5.0, 5.0), (5.5, 5.5), (6.0, 6.0), (-1.0, -1.0)]).unwrap();
///
/// let result = agg.result();
/// let last = result.get("5").unwrap();
/// assert_eq!(last.n, 3);
/// assert!((last.mean.unwrap() - 5.5).abs() < 1e-10);
/// assert!((last.var.unwrap() - 0.25).abs() < 1e-10);
///
/// let less = result.less().unwrap();
/// assert_eq!((less.n, less.var), (1, Some(0.0)));
/// ```
pub type PairedAggregator = Binned<AggregateCell>;
