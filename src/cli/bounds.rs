//! Bounds CLI subcommand.
//!
//! This subcommand checks whether a single error correcting (n, k) code can
//! exist by testing the Hamming, Singleton and Varshamov–Gilbert bounds.
//!
//! # Examples
//! ```shell
//! $ hamming-toolbox bounds 7 4
//! Hamming bound (2^k <= 2^n / (1 + n)): ✓
//! Singleton bound (d <= n - k + 1): ✓
//! Varshamov-Gilbert bound (n < 2^(n - k)): ✓
//! ```

use crate::{
    bounds::Bounds,
    cli::{CodeArgs, Run},
};
use clap::Parser;
use std::{error::Error, io::Write};

/// Bounds CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Checks the bounds for a single error correcting code")]
pub struct Args {
    #[command(flatten)]
    code: CodeArgs,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let bounds = self.code.params()?.bounds();
        write_bounds(std::io::stdout(), &bounds)?;
        if !bounds.all() {
            return Err("a single error correcting code cannot be built with these parameters".into());
        }
        Ok(())
    }
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

/// Writes a report of the bound check results.
pub fn write_bounds<W: Write>(mut f: W, bounds: &Bounds) -> std::io::Result<()> {
    writeln!(f, "Hamming bound (2^k <= 2^n / (1 + n)): {}", mark(bounds.hamming))?;
    writeln!(f, "Singleton bound (d <= n - k + 1): {}", mark(bounds.singleton))?;
    writeln!(
        f,
        "Varshamov-Gilbert bound (n < 2^(n - k)): {}",
        mark(bounds.varshamov_gilbert)
    )?;
    Ok(())
}
