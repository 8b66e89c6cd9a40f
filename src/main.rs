//! Stable Marriage - Binary Entry Point
//!
//! `demo` replays the built-in regression fixtures; `solve` reads an instance
//! file (see [`stable_marriage::instance`]) and prints the matching.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use stable_marriage::fixtures::regression_fixtures;
use stable_marriage::logging::init_logger;
use stable_marriage::{Instance, QueueDiscipline, SolverConfig, StableMatcher};

#[derive(Parser)]
#[command(name = "stable-marriage")]
#[command(about = "Gale-Shapley stable matching for two equally sized markets", long_about = None)]
struct Cli {
    /// Log solver progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Take unmatched proposers most-recent-first instead of oldest-first
    #[arg(long, global = true)]
    lifo: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the built-in regression fixtures and check the results
    Demo,

    /// Solve an instance file and print the matching
    Solve {
        /// Instance file: N, then N proposer rows, then N receiver rows
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let discipline = if cli.lifo {
        QueueDiscipline::Lifo
    } else {
        QueueDiscipline::Fifo
    };
    let matcher = StableMatcher::with_config(SolverConfig::new().with_discipline(discipline));

    match cli.command {
        Commands::Demo => run_demo(&matcher),
        Commands::Solve { file } => run_solve(&matcher, file),
    }
}

fn run_demo(matcher: &StableMatcher) -> ExitCode {
    let mut failures = 0;

    for (idx, fixture) in regression_fixtures().iter().enumerate() {
        let result = matcher.solve(fixture.size(), &fixture.proposer_prefs, &fixture.receiver_prefs);
        match result {
            Ok(outcome) if outcome.matching.as_slice() == fixture.expected.as_slice() => {
                println!(
                    "Test {} ({}): Pass [{} proposals]",
                    idx + 1,
                    fixture.name,
                    outcome.receipt.proposals
                );
            }
            Ok(outcome) => {
                failures += 1;
                println!(
                    "Test {} ({}): Failed, got {:?}, expected {:?}",
                    idx + 1,
                    fixture.name,
                    outcome.matching.as_slice(),
                    fixture.expected
                );
            }
            Err(e) => {
                failures += 1;
                println!("Test {} ({}): Failed, {}", idx + 1, fixture.name, e);
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_solve(matcher: &StableMatcher, file: PathBuf) -> ExitCode {
    let instance = match Instance::from_file(&file) {
        Ok(instance) => instance,
        Err(e) => {
            error!("{}: {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match instance.solve(matcher) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{}: {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("receiver\tproposer");
    for (receiver, proposer) in outcome.matching.pairs() {
        println!("{}\t{}", receiver, proposer);
    }

    let receipt = &outcome.receipt;
    println!();
    println!("discipline:     {:?}", matcher.config().discipline);
    println!("proposals:      {}", receipt.proposals);
    println!("contested:      {}", receipt.contested_proposals());
    println!("rejections:     {}", receipt.rejections);
    println!("displacements:  {}", receipt.displacements);
    if let Some(rate) = receipt.rejection_rate() {
        println!("rejection rate: {:.1}%", rate * 100.0);
    }
    println!("matching root:  {}", receipt.matching_root_hex());

    ExitCode::SUCCESS
}
