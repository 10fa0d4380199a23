//! CLI entrypoint for the printfc conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use printfc_harness::error::HarnessError;
use printfc_harness::fixtures::FixtureSet;
use printfc_harness::runner::{builtin_set, run_set, CaseOutcome};
use printfc_harness::structured_log::LogEntry;

/// Conformance tooling for printfc.
#[derive(Debug, Parser)]
#[command(name = "printfc-harness")]
#[command(about = "Conformance testing harness for the printfc format engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against fixture JSON files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixtures: PathBuf,
        /// Optional JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Run the built-in smoke fixture set.
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Verify { fixtures, log } => verify(&fixtures, log.as_deref()),
        Command::Demo => {
            let outcomes = run_set(&builtin_set());
            report(&outcomes, None)
        }
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn verify(
    fixtures: &std::path::Path,
    log: Option<&std::path::Path>,
) -> Result<bool, HarnessError> {
    let mut outcomes = Vec::new();
    let mut entries: Vec<_> = std::fs::read_dir(fixtures)?
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.path());
    for entry in entries {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let set = FixtureSet::from_file(&path)?;
        outcomes.extend(run_set(&set));
    }
    report(&outcomes, log)
}

fn report(
    outcomes: &[CaseOutcome],
    log: Option<&std::path::Path>,
) -> Result<bool, HarnessError> {
    let failed = outcomes.iter().filter(|o| !o.passed).count();
    for outcome in outcomes {
        if outcome.passed {
            println!("PASS {}", outcome.name);
        } else {
            println!(
                "FAIL {}: got {:?}, expected {:?}",
                outcome.name, outcome.got, outcome.expected
            );
        }
    }
    println!("{}/{} cases passed", outcomes.len() - failed, outcomes.len());
    if let Some(path) = log {
        let mut file = std::fs::File::create(path)?;
        for outcome in outcomes {
            LogEntry::for_case(outcome).emit(&mut file)?;
        }
        LogEntry::summary(outcomes.len(), failed).emit(&mut file)?;
    }
    Ok(failed == 0)
}
