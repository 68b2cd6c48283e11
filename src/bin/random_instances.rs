use std::path::PathBuf;

use ::log::{LevelFilter, info};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use scoala::{log::build_pace_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

/// Writes a random batch of cases in the solver's input format
#[derive(Debug, StructOpt)]
struct Opt {
    /// Number of cases
    #[structopt(short = "k", long, default_value = "10")]
    cases: usize,

    /// Number of cities per case
    #[structopt(short, long, default_value = "100")]
    nodes: NumNodes,

    /// Expected degree of each city
    #[structopt(short = "d", long, default_value = "1.0")]
    avg_deg: f64,

    /// Largest road and school cost drawn
    #[structopt(short = "c", long, default_value = "100")]
    max_cost: Cost,

    #[structopt(short, long, default_value = "1234")]
    seed: u64,

    /// Output file; defaults to stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    build_pace_logger_for_verbosity(LevelFilter::Warn, opt.verbose);
    anyhow::ensure!(opt.max_cost >= 0, "costs must be non-negative");
    anyhow::ensure!(
        opt.nodes <= MAX_GNP_NODES,
        "at most {MAX_GNP_NODES} cities supported"
    );

    let mut rng = Pcg64Mcg::seed_from_u64(opt.seed);

    let graphs = (0..opt.cases)
        .map(|_| AdjArray::random_gnp_with_avg_deg(&mut rng, opt.nodes, opt.avg_deg))
        .collect_vec();
    let costs = graphs
        .iter()
        .map(|_| {
            CostModel::new(
                rng.gen_range(0..=opt.max_cost),
                rng.gen_range(0..=opt.max_cost),
            )
        })
        .collect_vec();

    info!(
        "Generated {} cases with {} roads in total",
        graphs.len(),
        graphs.iter().map(|g| g.number_of_edges()).sum::<NumEdges>()
    );

    let cases = graphs.iter().zip(costs.iter().copied());
    if let Some(path) = &opt.output {
        AdjArray::try_write_batch_file(cases, path)?;
    } else {
        AdjArray::try_write_batch(cases, std::io::stdout().lock())?;
    }

    Ok(())
}
