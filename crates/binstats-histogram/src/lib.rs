//! Resumable histograms over left-inclusive bins
//!
//! A [`Histogram`] counts values per bin; it is a [`Binned`] accumulator
//! whose per-bin cell is a [`Counter`]. Bins are given by their left
//! edges; the last bin is unbounded above and values below the first edge
//! are counted in a separate `less` bin.
//!
//! # Modes
//!
//! - **Batch**: [`Histogram::from_data`] configures and bins in one call.
//! - **Online**: call [`Histogram::add_data`] repeatedly; counts accumulate.
//! - **Resume**: export with [`Histogram::result`], store it anywhere, and
//!   [`Histogram::preload`] it into a fresh instance later.
//!
//! # Example
//!
//! ```rust
//! use binstats_histogram::Histogram;
//!
//! let mut first = Histogram::with_bins(&[0.0, 10.0, 20.0]).unwrap();
//! first.add_data(&[1.0, 12.0, 25.0]).unwrap();
//! let saved = first.result().to_json().unwrap();
//!
//! // Later, possibly in another process
//! let mut resumed = Histogram::default();
//! resumed.preload(&binstats_histogram::BinTable::from_json(&saved).unwrap()).unwrap();
//! resumed.add_data(&[-5.0, 15.0]).unwrap();
//!
//! assert_eq!(resumed.result().get("10"), Some(&2));
//! assert_eq!(resumed.total(), 5);
//! ```

pub mod histogram;

pub use histogram::{Counter, Histogram};

pub use binstats_core::{
    resume, BinCell, BinIdentity, BinSpec, BinTable, Binned, Binner, BinningConfig, KeyStrategy,
};
pub use binstats_core::{Error, Result};
