//! Core types for binned statistics
//!
//! This crate provides the pieces every binner shares:
//!
//! - [`BinSpec`]: sorted, de-duplicated left-inclusive bin edges and the
//!   assignment of values to [`BinIdentity`]s
//! - [`KeyStrategy`]: how bins are keyed in exported results
//! - [`BinTable`]: the exported/preloaded result shape
//! - [`Binner`]: the configure / add / export / preload lifecycle
//! - [`Binned`]: that lifecycle over any [`BinCell`] per-bin state
//! - [`Error`]: the error type used across all binstats crates
//!
//! # Example
//!
//! ```rust
//! use binstats_core::{BinIdentity, BinSpec};
//!
//! let bins = BinSpec::new(&[3.0, 0.0, 1.0, 2.0]).unwrap();
//!
//! assert_eq!(bins.assign(-1.0), BinIdentity::Less);
//! assert_eq!(bins.assign(1.0), BinIdentity::Index(1));
//! assert_eq!(bins.assign(100.0), BinIdentity::Index(3));
//! ```

pub mod binned;
pub mod bins;
pub mod config;
pub mod error;
pub mod keys;
pub mod preload;
pub mod table;
pub mod traits;

// Re-export core types
pub use binned::{BinCell, Binned};
pub use bins::{BinIdentity, BinSpec};
pub use config::BinningConfig;
pub use error::{Error, Result};
pub use keys::{KeyStrategy, ParsedKey, LESS_KEY};
pub use preload::{resolve_preload, ResolvedPreload};
pub use table::BinTable;
pub use traits::{resume, Binner};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BinCell, BinIdentity, BinSpec, BinTable, Binned, Binner, BinningConfig, Error,
        KeyStrategy, Result,
    };
}
