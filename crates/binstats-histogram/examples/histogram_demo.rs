//! Histogram demo: batch, online and resumed accumulation
//!
//! Run with: cargo run -p binstats-histogram --example histogram_demo

use binstats_histogram::{BinTable, Histogram};
use rand::prelude::*;
use rand_distr::Normal;

fn main() -> binstats_histogram::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let data: Vec<f64> = (0..10_000).map(|_| normal.sample(&mut rng)).collect();

    let edges: Vec<f64> = (-6..=6).map(|i| i as f64 * 0.5).collect();

    println!("=== Batch ===");
    let batch = Histogram::from_data(&edges, &data)?;
    print_histogram(&batch.result());

    println!("\n=== Online (10 chunks) ===");
    let mut online = Histogram::with_bins(&edges)?;
    for chunk in data.chunks(1_000) {
        online.add_data(chunk)?;
    }
    println!("{online}, identical to batch: {}", online.result() == batch.result());

    println!("\n=== Resume from JSON ===");
    let (head, tail) = data.split_at(4_000);
    let saved = Histogram::from_data(&edges, head)?.result().to_json()?;
    println!("saved: {saved}");

    let mut resumed = Histogram::default();
    resumed.preload(&BinTable::from_json(&saved)?)?;
    resumed.add_data(tail)?;
    println!("{resumed}, identical to batch: {}", resumed.result() == batch.result());

    Ok(())
}

fn print_histogram(result: &BinTable<u64>) {
    let max = result.values().copied().max().unwrap_or(0).max(1);
    for (key, &count) in result.iter() {
        let bar = "#".repeat((count * 50 / max) as usize);
        println!("{key:>6} | {count:>6} {bar}");
    }
}
