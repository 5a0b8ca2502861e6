//! Binned running mean and variance
//!
//! A [`PairedAggregator`] bins `(x, y)` pairs by `x` and keeps, per bin,
//! the count, mean and sum of squared deviations of `y`, updated with
//! Welford's numerically stable one-pass method. Results export as
//! `{mean, n, var}` per bin and can be preloaded into a fresh instance to
//! continue an interrupted aggregation.
//!
//! # Example
//!
//! ```rust
//! use binstats_aggregate::{BinTable, CellSummary, PairedAggregator};
//!
//! let data: Vec<(f64, f64)> = (0..100).map(|i| (i as f64 / 10.0, i as f64)).collect();
//! let (head, tail) = data.split_at(60);
//!
//! let saved = PairedAggregator::from_data(&[0.0, 5.0], head).unwrap().result();
//! let json = saved.to_json().unwrap();
//!
//! let mut resumed = PairedAggregator::default();
//! resumed.preload(&BinTable::<CellSummary>::from_json(&json).unwrap()).unwrap();
//! resumed.add_data(tail).unwrap();
//!
//! let batch = PairedAggregator::from_data(&[0.0, 5.0], &data).unwrap();
//! let (a, b) = (resumed.result(), batch.result());
//! assert_eq!(a.get("5").unwrap().n, b.get("5").unwrap().n);
//! ```

pub mod aggregator;
pub mod cell;

pub use aggregator::PairedAggregator;
pub use cell::{AggregateCell, CellSummary};

pub use binstats_core::{
    resume, BinCell, BinIdentity, BinSpec, BinTable, Binned, Binner, BinningConfig, KeyStrategy,
};
pub use binstats_core::{Error, Result};
