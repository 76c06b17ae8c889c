use std::io::{BufReader, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use ps_interview::catalog::{self, Problem, Topic};

#[derive(Parser)]
#[command(about = "Run and check interview problem solutions")]
struct Cli {
    /// Raise the log level (-v debug, -vv trace). PS_LOG overrides it.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List problems and their variants
    List {
        #[arg(long)]
        topic: Option<Topic>,
    },
    /// Solve one input, read from --input or stdin
    Run {
        problem: String,
        #[arg(long, conflicts_with = "all")]
        variant: Option<String>,
        /// Run every variant on the same input
        #[arg(long)]
        all: bool,
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Run every variant against the worked samples
    Check { problems: Vec<String> },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("PS_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("could not read input file {}", path.display()));
    }
    let mut buf = String::new();
    BufReader::new(std::io::stdin().lock())
        .read_to_string(&mut buf)
        .context("could not read stdin")?;
    Ok(buf)
}

fn list(topic: Option<Topic>) {
    for problem in catalog::problems() {
        if topic.map_or(false, |t| t != problem.topic) {
            continue;
        }
        println!(
            "{:<36} {:<15} {} [{}]",
            problem.name,
            problem.topic.as_str(),
            problem.summary,
            problem.variants.iter().map(|v| v.name).join(", ")
        );
    }
}

fn run(problem: &Problem, variant: Option<&str>, all: bool, input: &str) -> Result<()> {
    let variants = match (variant, all) {
        (_, true) => problem.variants.iter().collect(),
        (Some(name), false) => vec![problem.find_variant(name)?],
        (None, false) => vec![problem.default_variant()?],
    };
    let mut answers = vec![];
    for v in variants {
        let answer = v
            .run(input)
            .with_context(|| format!("{}/{} failed", problem.name, v.name))?;
        tracing::debug!("{}/{}: {}", problem.name, v.name, answer);
        if all {
            println!("{}: {}", v.name, answer);
        } else {
            println!("{}", answer);
        }
        answers.push(answer);
    }
    // Problems with several valid answers may legitimately differ
    if !answers.iter().all_equal() {
        tracing::warn!("variants of {} gave different answers", problem.name);
    }
    Ok(())
}

fn check(names: &[String]) -> Result<()> {
    let selected: Vec<&Problem> = if names.is_empty() {
        catalog::problems().iter().collect()
    } else {
        names
            .iter()
            .map(|name| catalog::find(name))
            .collect::<Result<_, _>>()?
    };

    let (mut passed, mut failed) = (0, 0);
    for problem in selected {
        for outcome in catalog::check(problem) {
            if outcome.passed() {
                passed += 1;
            } else {
                failed += 1;
                println!(
                    "FAIL {}/{} sample #{}: expected {}, got {:?}",
                    outcome.problem, outcome.variant, outcome.sample, outcome.expected, outcome.actual
                );
            }
        }
    }
    tracing::info!("{} passed, {} failed", passed, failed);
    if failed > 0 {
        bail!("{} sample runs failed", failed);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List { topic } => list(topic),
        Command::Run {
            problem,
            variant,
            all,
            input,
        } => {
            let problem = catalog::find(&problem)?;
            let input = read_input(input.as_ref())?;
            run(problem, variant.as_deref(), all, &input)?;
        }
        Command::Check { problems } => check(&problems)?,
    }
    Ok(())
}
