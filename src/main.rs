//! variate-histogram CLI
//!
//! Every input can be given as a flag. The missing ones are asked
//! interactively, in the order: distribution, sample size, parameters and
//! number of intervals.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use VariateHistogram::{
    Samples::Samples,
    configuration::{DEFAULT_SEED, plot::DEFAULT_BAR_WIDTH},
    distribution_trait::Distribution,
    distributions::distribution_spec::{DistributionKind, DistributionSpec},
    generator,
    histogram::{FrequencyTable, HistogramSpec},
    plot::BarChart,
    prompt::Prompter,
    validation,
};

#[derive(Parser)]
#[command(name = "variate-histogram")]
#[command(about = "Generate a random sample of a distribution and show its histogram")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Seed of the random number generator. The same seed gives the same sample.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Distribution to sample (uniform, exponential, normal)
    #[arg(short, long, value_parser = validation::parse_distribution)]
    distribution: Option<DistributionKind>,

    /// Sample size, between 1 and 1 000 000
    #[arg(short = 'n', long, value_parser = validation::parse_sample_size)]
    size: Option<usize>,

    /// Distribution parameter. Repeat it in order:
    /// uniform `a b`, exponential `lambda`, normal `mean std_dev`.
    #[arg(short, long = "param", value_parser = validation::parse_number, allow_hyphen_values = true)]
    params: Vec<f64>,

    /// Number of intervals of the histogram (10, 15, 20, 30)
    #[arg(short, long, value_parser = validation::parse_interval_count)]
    intervals: Option<usize>,

    /// Lower bound of the histogram. Defaults to a value that depends on the distribution.
    #[arg(long, requires = "upper_bound", value_parser = validation::parse_number, allow_hyphen_values = true)]
    lower_bound: Option<f64>,

    /// Upper bound of the histogram. Defaults to a value that depends on the distribution.
    #[arg(long, requires = "lower_bound", value_parser = validation::parse_number, allow_hyphen_values = true)]
    upper_bound: Option<f64>,

    /// Length (in characters) of the longest bar of the chart
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    width: usize,

    /// Only print the frequency table
    #[arg(long)]
    no_chart: bool,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if !cli.params.is_empty() && cli.distribution.is_none() {
        bail!("--param requires --distribution");
    }

    let mut rng: SmallRng = SmallRng::seed_from_u64(cli.seed);
    info!(seed = cli.seed, "seeded random number generator");

    let stdin: io::Stdin = io::stdin();
    let mut prompter: Prompter<io::StdinLock<'_>, io::Stdout> =
        Prompter::new(stdin.lock(), io::stdout());

    let kind: DistributionKind = match cli.distribution {
        Some(k) => k,
        None => prompter.ask_distribution()?,
    };

    let n: usize = match cli.size {
        Some(n) => n,
        None => prompter.ask_sample_size()?,
    };

    let spec: DistributionSpec = if cli.params.is_empty() {
        prompter.ask_parameters(kind)?
    } else {
        DistributionSpec::from_parameters(kind, &cli.params).context("invalid --param values")?
    };

    let mut sample: Samples =
        generator::generate(&spec, n, &mut rng).context("could not generate the sample")?;

    let (lower, upper): (f64, f64) = match (cli.lower_bound, cli.upper_bound) {
        (Some(a), Some(b)) => (a, b),
        _ => spec
            .display_bounds(&mut sample)
            .context("could not derive the bounds of the histogram")?,
    };

    let interval_count: usize = match cli.intervals {
        Some(k) => k,
        None => prompter.ask_interval_count()?,
    };

    let histogram: HistogramSpec =
        HistogramSpec::new(interval_count, lower, upper).context("invalid histogram")?;
    let table: FrequencyTable = histogram.build(sample.peek_data())?;

    let (_, mut out): (_, io::Stdout) = prompter.into_inner();

    writeln!(out)?;
    writeln!(
        out,
        "{} values of {spec} (seed {})",
        sample.count(),
        cli.seed
    )?;
    if let Some(mean) = sample.mean() {
        writeln!(
            out,
            "Sample mean: {mean:.4} \t(expected: {:.4})",
            spec.expected_value()
        )?;
    }
    writeln!(out)?;
    write!(out, "{table}")?;

    if !cli.no_chart {
        writeln!(out)?;
        write!(out, "{}", BarChart::new(&table).with_width(cli.width))?;
    }

    out.flush()?;
    return Ok(());
}
