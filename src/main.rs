use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use oxikd::{squared_distance, Bounds, KdTree, KdTreeBuilder, KdTreeConfig, Neighbour};

#[derive(Parser)]
#[command(name = "oxikd", about = "KD-tree nearest-neighbour search")]
struct Cli {
    /// Log build and query details (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML file with tree configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cross-check tree queries against a linear scan on random points.
    Verify {
        /// Number of indexed points, drawn from [0, 1)^D.
        #[arg(long, default_value = "1000")]
        points: usize,

        /// Number of random query targets, drawn from [-1, 2)^D.
        #[arg(long, default_value = "1000")]
        queries: usize,

        /// Neighbours per k-nearest query.
        #[arg(short, long, default_value = "5")]
        k: usize,

        /// Dimensionality of the points.
        #[arg(short, long, default_value = "2")]
        dimension: usize,

        /// Seed for the random generator.
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Find the nearest points of a file to a target.
    Query {
        /// Point file: one point per line, coordinates separated by commas or
        /// whitespace, `#` starts a comment.
        #[arg(short, long)]
        input: PathBuf,

        /// Target coordinates, e.g. "0.5,0.25".
        #[arg(short, long)]
        target: String,

        /// Number of neighbours to report.
        #[arg(short, long, default_value = "1")]
        k: usize,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = KdTreeConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match &cli.command {
        Commands::Verify {
            points,
            queries,
            k,
            dimension,
            seed,
        } => cmd_verify(*points, *queries, *k, *dimension, *seed, config),
        Commands::Query {
            input,
            target,
            k,
            json,
        } => cmd_query(input, target, *k, *json, config),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_tree(points: Vec<Vec<f64>>, config: KdTreeConfig) -> anyhow::Result<KdTree<Vec<f64>>> {
    let tree = KdTreeBuilder::new()
        .config(config)
        .build(points)
        .context("Failed to build KD-tree")?;
    Ok(tree)
}

fn cmd_verify(
    n_points: usize,
    n_queries: usize,
    k: usize,
    dimension: usize,
    seed: u64,
    config: KdTreeConfig,
) -> anyhow::Result<()> {
    if dimension == 0 {
        bail!("dimension must be at least 1");
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<Vec<f64>> = (0..n_points)
        .map(|_| (0..dimension).map(|_| rng.gen::<f64>()).collect())
        .collect();

    let t0 = Instant::now();
    let tree = build_tree(points.clone(), config)?;
    eprintln!(
        "Built tree: {} points, dimension {}, depth {} in {:.2?}",
        tree.len(),
        dimension,
        tree.depth(),
        t0.elapsed()
    );

    let bounds = Bounds::new(vec![-2.0; dimension], vec![2.0; dimension])?;
    let mut tree_time = Duration::ZERO;
    let mut scan_time = Duration::ZERO;
    let mut mismatches = 0usize;

    for _ in 0..n_queries {
        let target: Vec<f64> = (0..dimension).map(|_| rng.gen_range(-1.0..2.0)).collect();

        let t = Instant::now();
        let nearest = tree.nearest_neighbour(&target, &bounds)?;
        let k_best = tree.nearest_neighbours(k, &target, &bounds)?;
        tree_time += t.elapsed();

        let t = Instant::now();
        let expected = linear_scan(&points, &target, k);
        scan_time += t.elapsed();

        let nearest_ok = match (&nearest, expected.first()) {
            (Some(found), Some(best)) => found.distance_sq == best.distance_sq,
            (None, None) => true,
            _ => false,
        };
        let k_best_ok = k_best.len() == expected.len()
            && k_best
                .iter()
                .zip(&expected)
                .all(|(a, b)| a.distance_sq == b.distance_sq);

        if !(nearest_ok && k_best_ok) {
            mismatches += 1;
            eprintln!("Mismatch for target {:?}", target);
        }
    }

    eprintln!(
        "{} queries: tree {:.2?}, linear scan {:.2?}",
        n_queries, tree_time, scan_time
    );
    if mismatches > 0 {
        bail!("{} of {} queries disagreed with the linear scan", mismatches, n_queries);
    }
    println!("OK: {} queries matched the linear scan", n_queries);
    Ok(())
}

/// The `k` nearest points by exhaustive search, ascending.
fn linear_scan(points: &[Vec<f64>], target: &Vec<f64>, k: usize) -> Vec<Neighbour<Vec<f64>>> {
    let mut all: Vec<Neighbour<Vec<f64>>> = points
        .iter()
        .map(|p| Neighbour {
            point: p.clone(),
            distance_sq: squared_distance(p, target),
        })
        .collect();
    all.sort_by(|a, b| a.distance_sq.total_cmp(&b.distance_sq));
    all.truncate(k);
    all
}

fn cmd_query(
    input: &Path,
    target: &str,
    k: usize,
    json: bool,
    config: KdTreeConfig,
) -> anyhow::Result<()> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read point file {}", input.display()))?;
    let points = parse_points(&contents)?;
    let target = parse_coords(target).context("Invalid target")?;

    let tree = build_tree(points, config)?;
    let found = tree.k_nearest(k, &target)?;

    if json {
        let rows: Vec<serde_json::Value> = found
            .iter()
            .map(|n| {
                serde_json::json!({
                    "point": n.point,
                    "distance_sq": n.distance_sq,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if found.is_empty() {
        eprintln!("No points in {}", input.display());
    } else {
        for (rank, n) in found.iter().enumerate() {
            println!("{:3}  {:?}  dist_sq={:.6}", rank + 1, n.point, n.distance_sq);
        }
    }
    Ok(())
}

fn parse_points(contents: &str) -> anyhow::Result<Vec<Vec<f64>>> {
    let mut points = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let point = parse_coords(line).with_context(|| format!("Line {}", line_no + 1))?;
        points.push(point);
    }
    Ok(points)
}

fn parse_coords(text: &str) -> anyhow::Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("Invalid coordinate '{}'", s))
        })
        .collect()
}
