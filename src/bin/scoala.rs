use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use ::log::{LevelFilter, info};
use scoala::{
    batch::{BatchSummary, run_batch},
    log::build_pace_logger_for_verbosity,
};
use structopt::StructOpt;

const LEGACY_INPUT: &str = "scoala.in";
const LEGACY_OUTPUT: &str = "scoala.out";

/// Minimum cost to give every city access to a school
#[derive(Debug, Default, StructOpt)]
struct Opts {
    /// Batch to read; defaults to stdin
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// File receiving one cost per line; defaults to stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Read `scoala.in` and write `scoala.out` in the working directory
    #[structopt(long, conflicts_with_all = &["instance", "output"])]
    legacy_files: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

impl Opts {
    fn paths(&self) -> (Option<PathBuf>, Option<PathBuf>) {
        if self.legacy_files {
            (Some(LEGACY_INPUT.into()), Some(LEGACY_OUTPUT.into()))
        } else {
            (self.instance.clone(), self.output.clone())
        }
    }
}

/// Opens the selected input and output, relative paths resolved against `workdir`,
/// and runs the batch
fn run(opts: &Opts, workdir: &Path) -> anyhow::Result<BatchSummary> {
    let (input, output) = opts.paths();
    let input = input.map(|p| workdir.join(p));
    let output = output.map(|p| workdir.join(p));
    info!("Input: {input:?}, output: {output:?}");

    let summary = match (input, output) {
        (Some(input), Some(output)) => run_batch(
            BufReader::new(File::open(input)?),
            BufWriter::new(File::create(output)?),
        )?,
        (Some(input), None) => run_batch(
            BufReader::new(File::open(input)?),
            std::io::stdout().lock(),
        )?,
        (None, Some(output)) => run_batch(
            std::io::stdin().lock(),
            BufWriter::new(File::create(output)?),
        )?,
        (None, None) => run_batch(std::io::stdin().lock(), std::io::stdout().lock())?,
    };

    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_pace_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let summary = run(&opts, Path::new("."))?;
    info!("Solved {} cases", summary.cases);

    Ok(())
}
