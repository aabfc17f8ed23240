// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Quick single-run benchmark for development iteration.
//!
//! Pass `--verbose` to run one round with per-reduction debug events.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use distinct_max::batch::{generate, BatchConfig, Sample};
use distinct_max::reduce::{reduce_max_by, ReduceConfig, Strategy};

fn time_strategy(strategy: Strategy, batches: &[Vec<Sample>], rounds: u32) -> (Duration, usize) {
    let mut kept = 0;
    let start = Instant::now();
    for _ in 0..rounds {
        for batch in batches {
            let best = reduce_max_by(
                strategy,
                Some(batch.as_slice()),
                Sample::key,
                Sample::stamp,
                ReduceConfig::new(),
            )
            .expect("batch is present");
            kept += best.len();
        }
    }
    return (start.elapsed(), kept);
}

fn main() {
    let verbose = std::env::args().any(|arg| arg == "--verbose");
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = BatchConfig::default();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let batches = generate(&config, &mut rng);
    let rounds = if verbose { 1 } else { 20 };

    println!(
        "{} batches x {} records, {} possible keys, {} rounds",
        config.batches,
        config.batch_size,
        config.key_space(),
        rounds
    );

    let mut baseline: Option<usize> = None;
    for strategy in Strategy::ALL {
        let (elapsed, kept) = time_strategy(strategy, &batches, rounds);
        println!("\n=== {} ===", strategy);
        println!("  total: {:?}", elapsed);
        println!("  per batch: {:?}", elapsed / (rounds * config.batches as u32));
        println!("  kept: {}", kept);

        match baseline {
            None => baseline = Some(kept),
            Some(expected) if expected != kept => {
                tracing::warn!(%strategy, expected, kept, "strategies disagree on output size");
            }
            Some(_) => {}
        }
    }
}
