//! Times Prim's algorithm on a set of bases with each priority-queue backend
//!
//! ```bash
//! bases --random 1000 --seed 42
//! bases --input bases.txt --strategy fibonacci --strategy binary
//! bases --interactive
//! ```

use anyhow::{bail, Context};
use base_mst::input::{prompt_bases, random_bases, read_bases};
use base_mst::mst::Point;
use base_mst::strategy::{sized_limit, QueueKind};
use clap::{ArgGroup, Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(
    name = "bases",
    about = "Minimum spanning tree cost over 2-D bases, timed per priority queue",
    version
)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "random", "interactive"])))]
struct Cli {
    /// File with one `x y` pair per line (`-` for stdin)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Generate this many bases at random
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Prompt for the base count and coordinates
    #[arg(long)]
    interactive: bool,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Coordinates for --random are drawn from [-RANGE, RANGE]
    #[arg(long, default_value_t = 1_000)]
    range: i32,

    /// Backends to run, in order (default: all three)
    #[arg(long, short, value_enum)]
    strategy: Vec<StrategyArg>,

    /// Node ceiling for the Fibonacci heap (default: one million, raised to
    /// fit the input when that is too small)
    #[arg(long)]
    fib_capacity: Option<usize>,

    /// More log output (repeatable)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum StrategyArg {
    Array,
    Binary,
    Fibonacci,
}

impl From<StrategyArg> for QueueKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Array => QueueKind::Array,
            StrategyArg::Binary => QueueKind::BinaryHeap,
            StrategyArg::Fibonacci => QueueKind::Fibonacci,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => log::LevelFilter::Error,
        (false, 0) => log::LevelFilter::Warn,
        (false, 1) => log::LevelFilter::Info,
        (false, 2) => log::LevelFilter::Debug,
        (false, _) => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_bases(cli: &Cli) -> anyhow::Result<Vec<Point>> {
    if let Some(count) = cli.random {
        log::info!("generating {count} bases (seed {}, range {})", cli.seed, cli.range);
        return Ok(random_bases(count, cli.range, cli.seed));
    }
    if cli.interactive {
        return prompt_bases(io::stdin().lock(), io::stdout())
            .context("reading bases interactively");
    }

    let path = cli.input.as_ref().context("no input source given")?;
    let bases = if path.as_os_str() == "-" {
        read_bases(io::stdin().lock()).context("reading bases from stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        read_bases(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))?
    };
    log::info!("read {} bases", bases.len());
    Ok(bases)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let bases = load_bases(cli)?;
    if bases.is_empty() {
        bail!("no bases to connect");
    }

    let strategies: Vec<QueueKind> = if cli.strategy.is_empty() {
        QueueKind::ALL.to_vec()
    } else {
        cli.strategy.iter().copied().map(QueueKind::from).collect()
    };

    let fib_capacity = cli
        .fib_capacity
        .unwrap_or_else(|| sized_limit(bases.len()));
    log::debug!("fibonacci node ceiling {fib_capacity}");

    println!("{} bases", bases.len());
    let mut costs = Vec::with_capacity(strategies.len());
    for kind in strategies {
        let start = Instant::now();
        let report = kind
            .run_with_limit(&bases, fib_capacity)
            .with_context(|| format!("{kind} queue"))?;
        let elapsed = start.elapsed();

        log::debug!(
            "{kind}: {} pushes, {} stale pops",
            report.pushes,
            report.stale_pops
        );
        println!(
            "{:<10} cost {:>12}   {}",
            kind.name(),
            report.total_cost,
            format_duration(elapsed)
        );
        costs.push((kind, report.total_cost));
    }

    if let Some(&(first_kind, first_cost)) = costs.first() {
        if let Some(&(kind, cost)) = costs.iter().find(|(_, cost)| *cost != first_cost) {
            bail!("backends disagree: {first_kind} found {first_cost}, {kind} found {cost}");
        }
    }
    Ok(())
}

fn format_duration(elapsed: Duration) -> String {
    format!("{:.6} s", elapsed.as_secs_f64())
}
