use std::process::ExitCode;

use clap::Parser;
use rextract_cli::args::Arguments;
use rextract_cli::exit_status::ExitStatus;
use rextract_cli::runner;

fn main() -> ExitCode {
    let arguments = Arguments::parse();
    rextract_core::tracing::init_tracing();

    match runner::run(&arguments.paths, &arguments.to_config()) {
        Ok(outcome) => {
            for line in &outcome.reports {
                println!("{line}");
            }
            for (path, message) in &outcome.failures {
                eprintln!("rextract: {}: {}", path.display(), message);
            }
            if outcome.all_succeeded() {
                ExitStatus::Success.into()
            } else {
                ExitStatus::UnitFailure.into()
            }
        }
        Err(err) => {
            eprintln!("rextract: {err}");
            ExitStatus::Error.into()
        }
    }
}
