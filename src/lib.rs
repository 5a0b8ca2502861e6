//! # binstats
//!
//! Left-inclusive binning with resumable per-bin statistics.
//!
//! - [`Histogram`]: count of values per bin
//! - [`PairedAggregator`]: running mean and variance of `y` per bin of `x`,
//!   using Welford's method
//!
//! Both share one lifecycle ([`Binner`]): configure bins, add data any
//! number of times, export a [`BinTable`], and preload that table later to
//! continue accumulating without reprocessing earlier data.
//!
//! ## Bins
//!
//! For edges `e0 < e1 < ... < e(N-1)`:
//!
//! ```text
//! less      x < e0
//! e_i       e_i <= x < e(i+1)
//! e(N-1)    e(N-1) <= x
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use binstats::prelude::*;
//!
//! let bins = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let data = [(-1.0, -1.0), (5.0, 5.0), (5.5, 5.5), (6.0, 6.0)];
//!
//! let agg = PairedAggregator::from_data(&bins, &data).unwrap();
//! let result = agg.result();
//!
//! let last = result.get("5").unwrap();
//! assert_eq!(last.n, 3);
//! assert!((last.var.unwrap() - 0.25).abs() < 1e-10);
//! ```
//!
//! ## Key strategies
//!
//! Results are keyed by `"less"` plus one key per bin. With the default
//! [`KeyStrategy::EdgeValue`] the keys are the bin edges: preloading into
//! an unconfigured instance derives the bins from them, and a configured
//! instance rejects keys that name other edges. With [`KeyStrategy::Ordinal`] the keys are
//! bin ordinals and preloading requires matching bins to be configured
//! first.

// Re-export workspace crates
pub use binstats_aggregate as aggregate;
pub use binstats_histogram as histogram;

pub use binstats_aggregate::{AggregateCell, CellSummary, PairedAggregator};
pub use binstats_core::{
    resume, BinCell, BinIdentity, BinSpec, BinTable, Binned, Binner, BinningConfig, Error,
    KeyStrategy, Result,
};
pub use binstats_histogram::{Counter, Histogram};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BinIdentity, BinSpec, BinTable, Binner, BinningConfig, CellSummary, Error, Histogram,
        KeyStrategy, PairedAggregator, Result,
    };
}
