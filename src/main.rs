use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use llh2ecef::cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the coordinates only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match cli::run(std::env::args_os()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            debug!(?err, "no coordinates computed");
            ExitCode::from(err.exit_code())
        }
    }
}
