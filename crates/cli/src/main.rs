use std::process::ExitCode;

use clap::Parser;
use job_insights_cli::{app, args::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    logging::init(config.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match app::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
