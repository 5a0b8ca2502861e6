//! Generic bin-partitioned accumulator
//!
//! [`Binned`] owns the bin space, the configuration and one cell per bin.
//! What a cell accumulates is defined by its [`BinCell`] implementation;
//! the histogram and the paired aggregator are both `Binned` over
//! different cells.

use std::fmt;

use crate::bins::{BinIdentity, BinSpec};
use crate::config::BinningConfig;
use crate::preload::resolve_preload;
use crate::table::BinTable;
use crate::traits::Binner;
use crate::{Error, Result};

/// Per-bin state of a [`Binned`] accumulator
pub trait BinCell: Clone + Default {
    /// One observation
    type Input;

    /// Exported per-bin value
    type Summary;

    /// Type name used by `Display`
    const NAME: &'static str;

    /// Coordinate that selects the bin, `None` if the observation has a NaN
    fn position(input: &Self::Input) -> Option<f64>;

    /// Number of observations folded into the cell
    fn n(&self) -> u64;

    /// Fold one observation into the cell
    fn push(&mut self, input: &Self::Input) -> Result<()>;

    /// Exported view of the cell
    fn summary(&self) -> Self::Summary;

    /// Rebuild a cell from its exported view
    fn from_summary(summary: &Self::Summary) -> Result<Self>;
}

/// Cells of type `C` over left-inclusive bins with a catch-all `less` bin
///
/// Cells live in a dense array indexed by [`BinSpec::slot`].
#[derive(Debug, Clone, Default)]
pub struct Binned<C> {
    config: BinningConfig,
    spec: Option<BinSpec>,
    cells: Vec<C>,
}

impl<C: BinCell> Binned<C> {
    /// Create an unconfigured accumulator
    pub fn new(config: BinningConfig) -> Self {
        Self {
            config,
            spec: None,
            cells: Vec::new(),
        }
    }

    /// Create an accumulator with the default configuration and the given bins
    pub fn with_bins(edges: &[f64]) -> Result<Self> {
        let mut binned = Self::default();
        binned.configure(edges)?;
        Ok(binned)
    }

    /// Accumulate `data` in one shot
    pub fn from_data(edges: &[f64], data: &[C::Input]) -> Result<Self> {
        let mut binned = Self::with_bins(edges)?;
        binned.add_data(data)?;
        Ok(binned)
    }

    /// Replace the bin space; all cells are reset to empty
    pub fn configure(&mut self, edges: &[f64]) -> Result<()> {
        let spec = BinSpec::new(edges)?;
        log::debug!("{} configured with {spec}", C::NAME);
        self.cells = vec![C::default(); spec.slots()];
        self.spec = Some(spec);
        Ok(())
    }

    /// Route each observation to its bin and fold it into that cell
    ///
    /// Can be called repeatedly to accumulate in online mode. A NaN
    /// observation, or a bin whose count would pass `u64::MAX`, fails the
    /// whole call before any cell changes.
    pub fn add_data(&mut self, data: &[C::Input]) -> Result<()> {
        let spec = self.spec.as_ref().ok_or(Error::NotConfigured)?;

        let mut slots = Vec::with_capacity(data.len());
        let mut added = vec![0u64; spec.slots()];
        for (pos, input) in data.iter().enumerate() {
            let x = C::position(input).ok_or_else(|| Error::nan_input("observation", pos))?;
            let slot = spec.slot(spec.assign(x));
            added[slot] += 1;
            slots.push(slot);
        }

        for (id, (cell, &extra)) in spec.identities().zip(self.cells.iter().zip(&added)) {
            if cell.n().checked_add(extra).is_none() {
                return Err(Error::count_overflow(id));
            }
        }

        for (input, slot) in data.iter().zip(slots) {
            self.cells[slot].push(input)?;
        }
        log::trace!("{} added {} observations", C::NAME, data.len());
        Ok(())
    }

    /// Replace every cell with a previously exported result
    ///
    /// Cells are rebuilt directly from their summaries; nothing is
    /// replayed. Keys are interpreted per the configured
    /// [`KeyStrategy`](crate::KeyStrategy). Subsequent
    /// [`add_data`](Self::add_data) calls accumulate on top.
    pub fn preload(&mut self, result: &BinTable<C::Summary>) -> Result<()> {
        let resolved = resolve_preload(self.config.key_strategy, self.spec.as_ref(), result)?;
        let cells = resolved
            .values
            .into_iter()
            .map(C::from_summary)
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "{} preloaded {} bins ({:?} keys)",
            C::NAME,
            resolved.spec.len(),
            self.config.key_strategy
        );
        self.cells = cells;
        self.spec = Some(resolved.spec);
        Ok(())
    }

    /// Export one summary per bin, `"less"` first then bins in ascending order
    ///
    /// An unconfigured accumulator exports an empty table.
    pub fn result(&self) -> BinTable<C::Summary> {
        let Some(spec) = &self.spec else {
            return BinTable::new();
        };
        let strategy = self.config.key_strategy;
        spec.identities()
            .zip(&self.cells)
            .filter_map(|(id, cell)| strategy.key_for(spec, id).map(|k| (k, cell.summary())))
            .collect()
    }

    /// Empty every cell, keeping the bins
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = C::default());
    }

    /// Cell of a single bin
    pub fn cell(&self, bin: BinIdentity) -> Option<&C> {
        let spec = self.spec.as_ref()?;
        if spec.contains(bin) {
            self.cells.get(spec.slot(bin))
        } else {
            None
        }
    }

    /// Exported view of a single bin
    pub fn summary(&self, bin: BinIdentity) -> Option<C::Summary> {
        self.cell(bin).map(C::summary)
    }

    /// Cells in storage order (`less` first)
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Total number of observations, including preloaded ones
    ///
    /// Widened to `u128`: every bin may individually hold up to `u64::MAX`.
    pub fn total(&self) -> u128 {
        self.cells.iter().map(|c| u128::from(c.n())).sum()
    }

    pub fn spec(&self) -> Option<&BinSpec> {
        self.spec.as_ref()
    }

    pub fn config(&self) -> &BinningConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.spec.is_some()
    }
}

impl<C: BinCell> Binner for Binned<C> {
    type Input = C::Input;
    type Summary = C::Summary;

    fn configure(&mut self, edges: &[f64]) -> Result<()> {
        Binned::configure(self, edges)
    }

    fn add_data(&mut self, data: &[C::Input]) -> Result<()> {
        Binned::add_data(self, data)
    }

    fn preload(&mut self, result: &BinTable<C::Summary>) -> Result<()> {
        Binned::preload(self, result)
    }

    fn result(&self) -> BinTable<C::Summary> {
        Binned::result(self)
    }

    fn spec(&self) -> Option<&BinSpec> {
        Binned::spec(self)
    }
}

impl<C: BinCell> fmt::Display for Binned<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            Some(spec) => write!(f, "{}({} bins, n={})", C::NAME, spec.len(), self.total()),
            None => write!(f, "{}(unconfigured)", C::NAME),
        }
    }
}
