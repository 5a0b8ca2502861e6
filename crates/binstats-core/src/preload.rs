//! Mapping an exported result back onto a bin space

use crate::bins::{BinIdentity, BinSpec};
use crate::keys::{KeyStrategy, ParsedKey, LESS_KEY};
use crate::table::BinTable;
use crate::{Error, Result};

/// A preload result resolved against a bin space
///
/// `values[slot]` is the table entry for the identity stored at `slot`
/// (see [`BinSpec::slot`]). Every slot is filled.
#[derive(Debug)]
pub struct ResolvedPreload<'a, V> {
    pub spec: BinSpec,
    pub values: Vec<&'a V>,
}

/// Resolve `table` under `strategy`
///
/// With [`KeyStrategy::EdgeValue`] the keys define the bin space when
/// `current` is `None`; otherwise they must name exactly the edges of
/// `current`. With [`KeyStrategy::Ordinal`] the keys must cover `current`
/// exactly. Nothing is mutated; callers swap in the
/// resolved state only on success.
pub fn resolve_preload<'a, V>(
    strategy: KeyStrategy,
    current: Option<&BinSpec>,
    table: &'a BinTable<V>,
) -> Result<ResolvedPreload<'a, V>> {
    if !table.contains_key(LESS_KEY) {
        return Err(Error::InvalidConfiguration(format!(
            "preloaded result has no {LESS_KEY:?} entry"
        )));
    }

    let parsed = table
        .iter()
        .map(|(key, value)| Ok((key, strategy.parse_key(key)?, value)))
        .collect::<Result<Vec<_>>>()?;

    let spec = match strategy {
        KeyStrategy::EdgeValue => {
            let edges: Vec<f64> = parsed
                .iter()
                .filter_map(|(_, k, _)| match k {
                    ParsedKey::Edge(e) => Some(*e),
                    _ => None,
                })
                .collect();
            let spec = BinSpec::new(&edges)?;
            match current {
                Some(current) if current != &spec => {
                    return Err(Error::InvalidConfiguration(format!(
                        "preloaded result describes {spec}, but {current} is configured"
                    )))
                }
                _ => spec,
            }
        }
        KeyStrategy::Ordinal => current.cloned().ok_or(Error::NotConfigured)?,
    };

    let mut values: Vec<Option<&V>> = vec![None; spec.slots()];
    for (key, parsed_key, value) in parsed {
        let bin = match parsed_key {
            ParsedKey::Less => Some(BinIdentity::Less),
            ParsedKey::Edge(e) => spec.index_of_edge(e),
            ParsedKey::Index(i) => {
                let id = BinIdentity::Index(i);
                spec.contains(id).then_some(id)
            }
        }
        .ok_or_else(|| Error::key_mismatch(key, "is not a configured bin"))?;

        let slot = &mut values[spec.slot(bin)];
        if slot.is_some() {
            return Err(Error::key_mismatch(key, "duplicates another bin key"));
        }
        *slot = Some(value);
    }

    let values = values
        .into_iter()
        .zip(spec.identities())
        .map(|(value, id)| {
            value.ok_or_else(|| {
                Error::InvalidConfiguration(format!("preloaded result is missing bin {id}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ResolvedPreload { spec, values })
}
