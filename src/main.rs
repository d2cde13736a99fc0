//! spectral-demo - add two integers or print the magnitudes of a two-tone FFT

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;

use spectral_demo::cli::Args;
use spectral_demo::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match args.command.execute(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
