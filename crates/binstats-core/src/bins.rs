//! Bin specification and left-inclusive bin assignment
//!
//! A [`BinSpec`] holds `N` strictly increasing edges. Edge `i` is the left
//! (inclusive) boundary of bin `i`. The region below the first edge is the
//! [`BinIdentity::Less`] bin and the last bin has no upper bound:
//!
//! ```text
//! Less      x < e0
//! 0         e0 <= x < e1
//! i         ei <= x < e(i+1)
//! N-1       e(N-1) <= x
//! ```

use std::fmt;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// In-memory identity of a bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BinIdentity {
    /// Catch-all bin for values below the smallest edge
    Less,
    /// Ordinal of a configured bin
    Index(u32),
}

impl fmt::Display for BinIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinIdentity::Less => write!(f, "less"),
            BinIdentity::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Sorted, de-duplicated set of left-inclusive bin edges
#[derive(Debug, Clone, PartialEq)]
pub struct BinSpec {
    edges: Vec<f64>,
}

impl BinSpec {
    /// Build a bin specification from edges in any order
    ///
    /// Edges are sorted ascending and duplicates collapse into one edge.
    /// Fails with [`Error::InvalidConfiguration`] when `edges` is empty or
    /// contains NaN.
    pub fn new(edges: &[f64]) -> Result<Self> {
        if edges.is_empty() {
            return Err(Error::empty_edges());
        }

        let mut sorted = edges
            .iter()
            .enumerate()
            .map(|(i, &e)| NotNan::new(e).map_err(|_| Error::nan_edge(i)))
            .collect::<Result<Vec<_>>>()?;
        sorted.sort();
        sorted.dedup();

        if sorted.len() > u32::MAX as usize {
            return Err(Error::InvalidConfiguration(format!(
                "{} edges exceed the supported bin count",
                sorted.len()
            )));
        }

        Ok(Self {
            edges: sorted.into_iter().map(NotNan::into_inner).collect(),
        })
    }

    /// Map a value to the bin that owns it
    ///
    /// A value equal to an edge belongs to the bin starting at that edge.
    /// NaN compares as below every edge and lands in `Less`; callers reject
    /// NaN before assignment.
    #[inline]
    pub fn assign(&self, x: f64) -> BinIdentity {
        // Number of edges at or below x
        match self.edges.partition_point(|&e| e <= x) {
            0 => BinIdentity::Less,
            k => BinIdentity::Index((k - 1) as u32),
        }
    }

    /// Edge values in ascending order
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of configured bins, not counting `Less`
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false for a constructed spec; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of storage slots needed for all identities including `Less`
    pub fn slots(&self) -> usize {
        self.edges.len() + 1
    }

    /// Dense storage index for an identity (`Less` is slot 0)
    #[inline]
    pub fn slot(&self, bin: BinIdentity) -> usize {
        match bin {
            BinIdentity::Less => 0,
            BinIdentity::Index(i) => i as usize + 1,
        }
    }

    /// Whether the identity exists in this bin space
    pub fn contains(&self, bin: BinIdentity) -> bool {
        match bin {
            BinIdentity::Less => true,
            BinIdentity::Index(i) => (i as usize) < self.edges.len(),
        }
    }

    /// Left edge of a bin; `None` for `Less` or an out-of-range ordinal
    pub fn edge(&self, bin: BinIdentity) -> Option<f64> {
        match bin {
            BinIdentity::Less => None,
            BinIdentity::Index(i) => self.edges.get(i as usize).copied(),
        }
    }

    /// Bin whose left edge is exactly `edge`
    pub fn index_of_edge(&self, edge: f64) -> Option<BinIdentity> {
        self.edges
            .binary_search_by(|e| e.total_cmp(&edge))
            .ok()
            // -0.0 and 0.0 sort apart under total_cmp but are one edge
            .or_else(|| self.edges.iter().position(|&e| e == edge))
            .map(|i| BinIdentity::Index(i as u32))
    }

    /// All identities in storage order: `Less`, then `Index(0..N)`
    pub fn identities(&self) -> impl Iterator<Item = BinIdentity> + '_ {
        std::iter::once(BinIdentity::Less)
            .chain((0..self.edges.len() as u32).map(BinIdentity::Index))
    }
}

impl fmt::Display for BinSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinSpec({} bins, edges=[", self.len())?;
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(edges: &[f64]) -> BinSpec {
        BinSpec::new(edges).unwrap()
    }

    #[test]
    fn test_boundary_placement() {
        let bins = spec(&[0.0, 1.0, 2.0, 3.0]);

        assert_eq!(bins.assign(1.0), BinIdentity::Index(1));
        assert_eq!(bins.assign(0.999), BinIdentity::Index(0));
        assert_eq!(bins.assign(-1.0), BinIdentity::Less);
        assert_eq!(bins.assign(0.0), BinIdentity::Index(0));
        assert_eq!(bins.assign(3.0), BinIdentity::Index(3));
        assert_eq!(bins.assign(100.0), BinIdentity::Index(3));
    }

    #[test]
    fn test_sorts_and_dedups() {
        let bins = spec(&[3.0, 1.0, 2.0, 1.0, 0.0]);
        assert_eq!(bins.edges(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins.slots(), 5);

        let zeros = spec(&[0.0, -0.0]);
        assert_eq!(zeros.len(), 1);
    }

    #[test]
    fn test_single_edge() {
        let bins = spec(&[10.0]);
        assert_eq!(bins.assign(9.99), BinIdentity::Less);
        assert_eq!(bins.assign(10.0), BinIdentity::Index(0));
        assert_eq!(bins.assign(f64::INFINITY), BinIdentity::Index(0));
    }

    #[test]
    fn test_invalid_edges() {
        assert!(matches!(
            BinSpec::new(&[]),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BinSpec::new(&[1.0, f64::NAN]),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_infinite_edges() {
        let bins = spec(&[f64::NEG_INFINITY, 0.0]);
        assert_eq!(bins.assign(-1e300), BinIdentity::Index(0));
        assert_eq!(bins.assign(f64::NEG_INFINITY), BinIdentity::Index(0));
        assert_eq!(bins.assign(0.0), BinIdentity::Index(1));
    }

    #[test]
    fn test_edge_mapping() {
        let bins = spec(&[0.5, -1.0, 2.0]);

        assert_eq!(bins.edge(BinIdentity::Less), None);
        assert_eq!(bins.edge(BinIdentity::Index(0)), Some(-1.0));
        assert_eq!(bins.edge(BinIdentity::Index(2)), Some(2.0));
        assert_eq!(bins.edge(BinIdentity::Index(3)), None);

        assert_eq!(bins.index_of_edge(0.5), Some(BinIdentity::Index(1)));
        assert_eq!(bins.index_of_edge(0.6), None);

        for id in bins.identities() {
            if let Some(e) = bins.edge(id) {
                assert_eq!(bins.index_of_edge(e), Some(id));
            }
        }
    }

    #[test]
    fn test_negative_zero_lookup() {
        let bins = spec(&[0.0, 1.0]);
        assert_eq!(bins.index_of_edge(-0.0), Some(BinIdentity::Index(0)));
    }

    #[test]
    fn test_slots_and_identities() {
        let bins = spec(&[0.0, 1.0, 2.0]);
        let ids: Vec<_> = bins.identities().collect();
        assert_eq!(
            ids,
            vec![
                BinIdentity::Less,
                BinIdentity::Index(0),
                BinIdentity::Index(1),
                BinIdentity::Index(2)
            ]
        );
        for (slot, id) in ids.iter().enumerate() {
            assert_eq!(bins.slot(*id), slot);
            assert!(bins.contains(*id));
        }
        assert!(!bins.contains(BinIdentity::Index(3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(spec(&[1.0, 0.5]).to_string(), "BinSpec(2 bins, edges=[0.5, 1])");
        assert_eq!(BinIdentity::Less.to_string(), "less");
        assert_eq!(BinIdentity::Index(4).to_string(), "4");
    }
}
