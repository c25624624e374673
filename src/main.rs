#[macro_use]
extern crate clap;
#[macro_use]
extern crate slog;
extern crate pagerank;
extern crate rand;

use clap::{Arg, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use slog::Logger;

use pagerank::rank::{by_title, log_summary};
use pagerank::{crawl, iterate_rank, new_logger, sample_rank, write_csv};
use pagerank::{LinkGraph, RankConfig, RankError, RankMap};

use std::path::{Path, PathBuf};
use std::process;

fn argv() -> ArgMatches {
    command().get_matches()
}

fn command() -> Command {
    Command::new(crate_name!()).about(crate_description!())
        .author(crate_authors!()).version(crate_version!())

        .arg(Arg::new("corpus")
             .required(true)
             .value_parser(value_parser!(PathBuf))
             .help("Directory of .html pages to rank"))

        .arg(Arg::new("config")
             .long("config")
             .value_parser(value_parser!(PathBuf))
             .help("JSON file of tunables; flags below override it"))
        .arg(Arg::new("damping")
             .long("damping")
             .value_parser(value_parser!(f64))
             .help("Probability of following a link instead of teleporting [0.85]"))
        .arg(Arg::new("samples")
             .long("samples")
             .value_parser(value_parser!(usize))
             .help("Steps of the random surfer [10000]"))
        .arg(Arg::new("epsilon")
             .long("epsilon")
             .value_parser(value_parser!(f64))
             .help("Stop iterating once no rank moves more than this [0.001]"))
        .arg(Arg::new("max_sweeps")
             .long("max-sweeps")
             .value_parser(value_parser!(usize))
             .help("Give up iterating after this many sweeps [1000]"))
        .arg(Arg::new("seed")
             .long("seed")
             .value_parser(value_parser!(u64))
             .help("Seed the sampler for reproducible results"))

        .arg(Arg::new("csv")
             .long("csv")
             .value_parser(value_parser!(PathBuf))
             .help("Also write both rank tables to <FILE>-sampled.csv and <FILE>-iterated.csv"))
}

/// File values first, then flags on top; validated only once everything is applied
fn config_from_args(args: &ArgMatches) -> Result<RankConfig, RankError> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => RankConfig::from_file(path)?,
        None => RankConfig::default(),
    };
    if let Some(&d) = args.get_one::<f64>("damping") {
        config.damping = d;
    }
    if let Some(&n) = args.get_one::<usize>("samples") {
        config.samples = n;
    }
    if let Some(&e) = args.get_one::<f64>("epsilon") {
        config.epsilon = e;
    }
    if let Some(&m) = args.get_one::<usize>("max_sweeps") {
        config.max_sweeps = m;
    }
    if let Some(&s) = args.get_one::<u64>("seed") {
        config.seed = Some(s);
    }
    config.validate()?;
    Ok(config)
}

fn format_ranks(header: &str, ranks: &RankMap) -> String {
    let mut out = format!("{}\n", header);
    for (page, rank) in by_title(ranks) {
        out.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
    out
}

fn print_ranks(header: &str, ranks: &RankMap) {
    print!("{}", format_ranks(header, ranks));
}

/// A run that hit the sweep cap still reports its best-effort ranks
fn iterated_or_best_effort(result: Result<RankMap, RankError>, log: &Logger)
    -> Result<RankMap, RankError>
{
    match result {
        Ok(ranks) => Ok(ranks),
        Err(e) => {
            let summary = e.to_string();
            let ranks = e.into_best_effort()?;
            warn!(log, "Iteration: {}; reporting best effort", summary);
            Ok(ranks)
        }
    }
}

fn csv_path(base: &Path, suffix: &str) -> PathBuf {
    let stem = base.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    base.with_file_name(format!("{}-{}.csv", stem, suffix))
}

fn run(args: &ArgMatches, log: &Logger) -> Result<(), RankError> {
    let config = config_from_args(args)?;
    let corpus = args.get_one::<PathBuf>("corpus").expect("corpus is a required argument");
    let graph: LinkGraph = crawl(corpus, log)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sampled = sample_rank(&graph, config.damping, config.samples, &mut rng, log)?;
    print_ranks(&format!("PageRank Results from Sampling (n = {})", config.samples), &sampled);

    let iterated = iterated_or_best_effort(
        iterate_rank(&graph, config.damping, config.epsilon, config.max_sweeps, log), log)?;
    print_ranks("PageRank Results from Iteration", &iterated);
    log_summary(log, &iterated);

    if let Some(base) = args.get_one::<PathBuf>("csv") {
        write_csv(&sampled, &csv_path(base, "sampled"))?;
        write_csv(&iterated, &csv_path(base, "iterated"))?;
        info!(log, "Wrote rank tables next to {}", base.display());
    }
    Ok(())
}

fn main() {
    let args = argv();
    let log = new_logger();
    if let Err(e) = run(&args, &log) {
        crit!(log, "{}", e);
        process::exit(1);
    }
}
