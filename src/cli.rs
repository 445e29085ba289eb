//! `hamming-toolbox` CLI application
//!
//! The CLI application is organized in several subcommands. The
//! supported subcommands can be seen by running `hamming-toolbox`.
//! See the modules below for examples and more information about
//! how to use each subcommand.
//!
//! Log messages are written to `stderr`. Their verbosity is controlled with
//! the `RUST_LOG` environment variable (the default level is `warn`).

use crate::code::CodeParams;
use clap::Parser;
use std::error::Error;
use tracing_subscriber::EnvFilter;

pub mod bounds;
pub mod decode;
pub mod encode;
pub mod matrices;
pub mod simulate;

/// Trait to run a CLI subcommand
pub trait Run {
    /// Run the CLI subcommand
    fn run(&self) -> Result<(), Box<dyn Error>>;
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(author, version, name = "hamming-toolbox", about = "Single error correcting codes toolbox")]
pub enum Args {
    /// bounds subcommand
    Bounds(bounds::Args),
    /// decode subcommand
    Decode(decode::Args),
    /// encode subcommand
    Encode(encode::Args),
    /// matrices subcommand
    Matrices(matrices::Args),
    /// simulate subcommand
    Simulate(simulate::Args),
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Args::Bounds(x) => x.run(),
            Args::Decode(x) => x.run(),
            Args::Encode(x) => x.run(),
            Args::Matrices(x) => x.run(),
            Args::Simulate(x) => x.run(),
        }
    }
}

/// Code parameters given in the command line.
#[derive(Debug, Clone, Parser)]
pub struct CodeArgs {
    /// Codeword length (n)
    pub n: usize,
    /// Information word length (k)
    pub k: usize,
}

impl CodeArgs {
    /// Validates the parameters, which must satisfy `n > k > 0`.
    pub fn params(&self) -> Result<CodeParams, String> {
        if self.k == 0 || self.n <= self.k {
            return Err(format!(
                "invalid parameters n = {}, k = {} (n > k > 0 is required)",
                self.n, self.k
            ));
        }
        Ok(CodeParams {
            n: self.n,
            k: self.k,
        })
    }
}

/// Installs the `tracing` subscriber used by the CLI application.
///
/// The filter is taken from the `RUST_LOG` environment variable, defaulting
/// to `warn`.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // try_init fails if a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
