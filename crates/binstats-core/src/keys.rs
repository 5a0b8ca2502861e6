//! Result keying strategies
//!
//! Exported results are keyed by strings: the reserved `"less"` key plus
//! one key per configured bin. The [`KeyStrategy`] decides what the bin
//! keys look like and how a preload interprets them.

use serde::{Deserialize, Serialize};

use crate::bins::{BinIdentity, BinSpec};
use crate::{Error, Result};

/// Reserved key of the bin below the smallest edge
pub const LESS_KEY: &str = "less";

/// How bins are keyed in exported results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStrategy {
    /// Keys are the bins' left edges, e.g. `"0.5"`, `"-1"`, `"5"`.
    ///
    /// Preload into an unconfigured instance derives the bins from the
    /// keys; a configured instance only accepts keys naming its own edges.
    #[default]
    EdgeValue,
    /// Keys are bin ordinals, `"0"` through `"N-1"`.
    ///
    /// Preload requires bins to be configured already and the keys to
    /// match them exactly.
    Ordinal,
}

/// A result key decoded under a [`KeyStrategy`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedKey {
    Less,
    Edge(f64),
    Index(u32),
}

impl KeyStrategy {
    /// External key for a bin
    ///
    /// Returns `None` when `bin` is outside `spec`.
    pub fn key_for(&self, spec: &BinSpec, bin: BinIdentity) -> Option<String> {
        match (self, bin) {
            (_, BinIdentity::Less) => Some(LESS_KEY.to_string()),
            (KeyStrategy::EdgeValue, id) => spec.edge(id).map(|e| e.to_string()),
            (KeyStrategy::Ordinal, BinIdentity::Index(i)) => {
                spec.contains(bin).then(|| i.to_string())
            }
        }
    }

    /// Decode an external key
    pub fn parse_key(&self, key: &str) -> Result<ParsedKey> {
        if key == LESS_KEY {
            return Ok(ParsedKey::Less);
        }
        match self {
            KeyStrategy::EdgeValue => match key.trim().parse::<f64>() {
                Ok(edge) if !edge.is_nan() => Ok(ParsedKey::Edge(edge)),
                _ => Err(Error::key_mismatch(key, "is not a numeric bin edge")),
            },
            KeyStrategy::Ordinal => key
                .trim()
                .parse::<u32>()
                .map(ParsedKey::Index)
                .map_err(|_| Error::key_mismatch(key, "is not a bin ordinal")),
        }
    }

    /// Whether preloading under this strategy can establish bins on an
    /// unconfigured instance
    pub fn preload_defines_bins(&self) -> bool {
        matches!(self, KeyStrategy::EdgeValue)
    }
}
