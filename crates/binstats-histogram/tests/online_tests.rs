//! Online accumulation and resume behaviour of histograms

use binstats_histogram::{BinTable, Binner, BinningConfig, Error, Histogram, KeyStrategy};
use rand::prelude::*;
use rand_distr::Normal;

fn normal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(5.0, 3.0).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

const EDGES: [f64; 6] = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];

#[test]
fn test_online_equals_batch() {
    let data = normal_data(1000, 7);
    let batch = Histogram::from_data(&EDGES, &data).unwrap();

    let mut online = Histogram::with_bins(&EDGES).unwrap();
    for chunk in data.chunks(37) {
        online.add_data(chunk).unwrap();
    }

    assert_eq!(online.result(), batch.result());
    assert_eq!(online.total(), 1000);
}

#[test]
fn test_resume_through_json() {
    let data = normal_data(500, 11);
    let (head, tail) = data.split_at(200);

    let mut first = Histogram::with_bins(&EDGES).unwrap();
    first.add_data(head).unwrap();
    let saved = first.result().to_json().unwrap();

    let mut resumed = Histogram::default();
    resumed.preload(&BinTable::from_json(&saved).unwrap()).unwrap();
    resumed.add_data(tail).unwrap();

    let batch = Histogram::from_data(&EDGES, &data).unwrap();
    assert_eq!(resumed.result(), batch.result());
}

#[test]
fn test_preload_derives_bins_from_keys() {
    let saved: BinTable<u64> = [("less", 3), ("5", 1), ("0.5", 4), ("2", 0)]
        .into_iter()
        .collect();

    let mut hist = Histogram::default();
    hist.preload(&saved).unwrap();

    assert_eq!(hist.spec().unwrap().edges(), &[0.5, 2.0, 5.0]);
    assert_eq!(hist.total(), 8);

    let result = hist.result();
    let entries: Vec<(&str, u64)> = result.iter().map(|(k, &v)| (k, v)).collect();
    assert_eq!(entries, vec![("less", 3), ("0.5", 4), ("2", 0), ("5", 1)]);
}

#[test]
fn test_ordinal_preload_requires_matching_bins() {
    let config = BinningConfig::new(KeyStrategy::Ordinal);

    let mut source = Histogram::new(config);
    source.configure(&EDGES).unwrap();
    source.add_data(&normal_data(100, 3)).unwrap();
    let saved = source.result();

    // No bins yet
    let mut unconfigured = Histogram::new(config);
    assert!(matches!(unconfigured.preload(&saved), Err(Error::NotConfigured)));

    // Different bin space
    let mut mismatched = Histogram::new(config);
    mismatched.configure(&[0.0, 1.0]).unwrap();
    mismatched.add_data(&[0.5]).unwrap();
    assert!(matches!(
        mismatched.preload(&saved),
        Err(Error::InvalidConfiguration(_))
    ));
    assert_eq!(mismatched.total(), 1);

    // Same bin space
    let mut matching = Histogram::new(config);
    matching.configure(&EDGES).unwrap();
    matching.preload(&saved).unwrap();
    assert_eq!(matching.result(), saved);
}

#[test]
fn test_failed_preload_leaves_state() {
    let mut hist = Histogram::from_data(&EDGES, &[1.0, 3.0]).unwrap();
    let before = hist.result();

    let broken: BinTable<u64> = [("less", 1), ("abc", 2)].into_iter().collect();
    assert!(matches!(
        hist.preload(&broken),
        Err(Error::InvalidConfiguration(_))
    ));
    assert_eq!(hist.result(), before);
}

#[test]
fn test_generic_resume() {
    let data = normal_data(300, 5);
    let (head, tail) = data.split_at(120);

    let saved = Histogram::from_data(&EDGES, head).unwrap().result();
    let mut resumed = Histogram::default();
    binstats_histogram::resume(&mut resumed, &saved, tail).unwrap();

    assert!(Binner::is_configured(&resumed));
    assert_eq!(
        Binner::result(&resumed),
        Histogram::from_data(&EDGES, &data).unwrap().result()
    );
}
