//! Property-based tests for histogram counting

use binstats_histogram::{BinTable, Histogram};
use proptest::prelude::*;

fn edges_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 1..12)
}

fn data_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-150.0f64..150.0, 0..200)
}

proptest! {
    // Property: every value lands in exactly one bin
    #[test]
    fn prop_count_conservation(edges in edges_strategy(), data in data_strategy()) {
        let hist = Histogram::from_data(&edges, &data).unwrap();
        let total: u64 = hist.result().values().sum();
        prop_assert_eq!(total, data.len() as u64);
    }

    // Property: final counts do not depend on submission order
    #[test]
    fn prop_order_independence(
        edges in edges_strategy(),
        a in data_strategy(),
        b in data_strategy()
    ) {
        let mut ab = Histogram::with_bins(&edges).unwrap();
        ab.add_data(&a).unwrap();
        ab.add_data(&b).unwrap();

        let mut ba = Histogram::with_bins(&edges).unwrap();
        ba.add_data(&b).unwrap();
        ba.add_data(&a).unwrap();

        prop_assert_eq!(ab.result(), ba.result());
    }

    // Property: preloading an export reproduces it exactly
    #[test]
    fn prop_round_trip(edges in edges_strategy(), data in data_strategy()) {
        let hist = Histogram::from_data(&edges, &data).unwrap();
        let exported = hist.result();

        let mut restored = Histogram::default();
        restored.preload(&exported).unwrap();
        prop_assert_eq!(restored.result(), exported.clone());

        let json = exported.to_json().unwrap();
        let mut from_text = Histogram::default();
        from_text.preload(&BinTable::from_json(&json).unwrap()).unwrap();
        prop_assert_eq!(from_text.result(), exported);
    }
}
