//! Lifecycle shared by every binner
//!
//! Binners follow the same sequence: configure bins, add data any number of
//! times, then export the result. An exported result can be preloaded into
//! a fresh instance to continue accumulating where the previous one stopped.

use crate::bins::BinSpec;
use crate::table::BinTable;
use crate::Result;

/// A bin-partitioned accumulator
pub trait Binner {
    /// One observation
    type Input;

    /// Exported per-bin value
    type Summary;

    /// Replace the bin space, discarding all accumulated state
    fn configure(&mut self, edges: &[f64]) -> Result<()>;

    /// Route each observation to its bin and update that bin
    ///
    /// Fails with [`Error::NotConfigured`](crate::Error::NotConfigured)
    /// before bins exist. A failed call leaves the state untouched.
    fn add_data(&mut self, data: &[Self::Input]) -> Result<()>;

    /// Replace the state wholesale with a previously exported result
    fn preload(&mut self, result: &BinTable<Self::Summary>) -> Result<()>;

    /// Export the current state
    fn result(&self) -> BinTable<Self::Summary>;

    /// Current bin space, if configured
    fn spec(&self) -> Option<&BinSpec>;

    /// Whether bins have been established
    fn is_configured(&self) -> bool {
        self.spec().is_some()
    }
}

/// Restore `previous` into `binner` and continue with `data`
///
/// Equivalent to having added the data behind `previous` and then `data`
/// to a single uninterrupted instance.
pub fn resume<B: Binner>(
    binner: &mut B,
    previous: &BinTable<B::Summary>,
    data: &[B::Input],
) -> Result<()> {
    binner.preload(previous)?;
    binner.add_data(data)
}
