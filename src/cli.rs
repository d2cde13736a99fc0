//! Command-line argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;
use tracing::info;

use crate::arith::add;
use crate::error::Result;
use crate::spectral::write_spectral_demo;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "spectral-demo", version)]
#[command(about = "Integer addition and a two-tone FFT demo", long_about = None)]
pub struct Args {
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed to the caller
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add two numbers together
    Add {
        #[arg(allow_negative_numbers = true)]
        i: i32,

        #[arg(allow_negative_numbers = true)]
        j: i32,
    },

    /// Tests a Fast Fourier Transform
    HelloFft,
}

impl Command {
    /// Run the command, writing its result to `out`
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            Command::Add { i, j } => {
                info!(i, j, "add");
                writeln!(out, "{}", add(*i, *j))?;
                out.flush()?;
            }
            Command::HelloFft => {
                info!("hello-fft");
                write_spectral_demo(out)?;
            }
        }
        Ok(())
    }
}
