mod benchmark;
mod integers;
mod workload;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use union_find::{Connectivity, DeepestLeafUnion, WeightedQuickUnion};

use workload::Measurement;

const DEFAULT_SEED: u64 = 20250906;

#[derive(Parser, Debug)]
#[command(name = "uf-bench")]
#[command(about = "Exercise and time the union-find variants", long_about = None)]
struct Cli {
    /// Random seed (defaults to UF_SEED, then a fixed value)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time connecting n, 2n, 4n, ... sites with random unions
    Bench {
        #[arg(long, value_enum, default_value = "weighted")]
        variant: Variant,

        /// Sites in the first measurement
        #[arg(short, long, default_value_t = 1000)]
        sites: usize,

        /// Timed repetitions per measurement
        #[arg(short, long, default_value_t = 10)]
        runs: usize,

        /// Number of measurements, doubling the sites each time
        #[arg(short, long, default_value_t = 5)]
        doublings: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Perform n random unions on n sites and dump the result
    Demo {
        #[arg(long, value_enum, default_value = "weighted")]
        variant: Variant,

        #[arg(allow_negative_numbers = true)]
        sites: i64,
    },
    /// Print an integer array in the given ordering
    Generate {
        #[arg(value_enum)]
        ordering: integers::Ordering,

        #[arg(default_value_t = 20)]
        len: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// Union by size with path halving
    Weighted,
    /// Union by deepest leaf, no compression
    DeepestLeaf,
}

impl Variant {
    fn label(self) -> &'static str {
        match self {
            Variant::Weighted => "weighted",
            Variant::DeepestLeaf => "deepest-leaf",
        }
    }
}

fn resolve_seed(arg: Option<u64>) -> Result<u64> {
    if let Some(seed) = arg {
        return Ok(seed);
    }
    match std::env::var("UF_SEED") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("UF_SEED is not a valid seed: {raw}")),
        Err(_) => Ok(DEFAULT_SEED),
    }
}

fn bench(
    variant: Variant,
    base: usize,
    runs: usize,
    doublings: u32,
    rng: &mut StdRng,
) -> Result<Vec<Measurement>> {
    let mut report = Vec::new();
    for n in workload::doubling_sizes(base, doublings)? {
        let pairs = workload::connecting_pairs(n, rng);
        let label = variant.label();
        let measurement = match variant {
            Variant::Weighted => workload::measure::<WeightedQuickUnion>(label, n, &pairs, runs),
            Variant::DeepestLeaf => workload::measure::<DeepestLeafUnion>(label, n, &pairs, runs),
        }?;
        report.push(measurement);
    }
    Ok(report)
}

fn demo<U: Connectivity>(mut uf: U, rng: &mut StdRng) -> Result<()> {
    let n = uf.len();
    println!("{n}");
    for _ in 0..n {
        let p = rng.gen_range(0..n);
        let q = rng.gen_range(0..n);
        println!("union ({p}, {q})");
        uf.union(p, q)?;
    }
    println!("{}", uf.dump());
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let seed = resolve_seed(cli.seed)?;
    tracing::debug!(seed, "seeded rng");
    let mut rng = StdRng::seed_from_u64(seed);

    match cli.command {
        Commands::Bench {
            variant,
            sites,
            runs,
            doublings,
            json,
        } => {
            let report = bench(variant, sites, runs, doublings, &mut rng)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for m in &report {
                    println!(
                        "Average time to connect {} sites by {} union ({} pairs) is {:.4} ms",
                        m.sites, m.variant, m.pairs, m.mean_ms
                    );
                }
            }
        }
        Commands::Demo { variant, sites } => match variant {
            Variant::Weighted => demo(WeightedQuickUnion::try_new(sites)?, &mut rng)?,
            Variant::DeepestLeaf => demo(DeepestLeafUnion::try_new(sites)?, &mut rng)?,
        },
        Commands::Generate { ordering, len } => {
            let values = integers::generate(ordering, len, &mut rng);
            println!("{values:?}");
        }
    }

    Ok(())
}
