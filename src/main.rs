//! Compares insertion into a [`SplayTree`] against [`BTreeSet`],
//! for shuffled values and for sorted values.

use std::collections::BTreeSet;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use spica::SplayTree;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Pattern {
    Random,
    Sorted,
    Both,
}

#[derive(Debug, Parser)]
#[command(about = "Time inserts into a splay tree and a BTreeSet")]
struct Args {
    /// How many values to insert.
    #[arg(long, default_value_t = 1_000_000)]
    count: u32,

    /// Which input orders to run.
    #[arg(long, value_enum, default_value_t = Pattern::Both)]
    pattern: Pattern,

    /// Seed for the shuffle. Random if not given.
    #[arg(long)]
    seed: Option<u64>,
}

trait Container: Default {
    const NAME: &'static str;
    fn add(&mut self, value: u32);
}

impl Container for BTreeSet<u32> {
    const NAME: &'static str = "BTreeSet";
    fn add(&mut self, value: u32) {
        self.insert(value);
    }
}

impl Container for SplayTree<u32> {
    const NAME: &'static str = "SplayTree";
    fn add(&mut self, value: u32) {
        self.insert(value);
    }
}

fn insert_test<C: Container>(values: &[u32]) {
    let mut container = C::default();
    let start = Instant::now();
    for &value in values {
        container.add(value);
    }
    let elapsed = start.elapsed();
    tracing::info!(
        container = C::NAME,
        total_seconds = elapsed.as_secs_f64(),
        micros_per_insert = elapsed.as_secs_f64() * 1.0e6 / values.len().max(1) as f64,
        "insert test done"
    );
}

fn run(label: &str, values: &[u32]) {
    tracing::info!(pattern = label, count = values.len(), "running");
    insert_test::<BTreeSet<u32>>(values);
    insert_test::<SplayTree<u32>>(values);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    if args.pattern != Pattern::Sorted {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut values: Vec<u32> = (0..args.count).collect();
        values.shuffle(&mut rng);
        run("random", &values);
    }

    if args.pattern != Pattern::Random {
        let values: Vec<u32> = (0..args.count).collect();
        run("sorted", &values);
    }
}
