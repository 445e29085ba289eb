//! Simulate CLI subcommand.
//!
//! This subcommand injects a fixed number of random bit errors in random
//! codewords and reports how the decoder handles them. The words are
//! simulated in parallel.
//!
//! # Examples
//! Double errors in the (6, 3) shortened Hamming code can be simulated with
//! ```shell
//! $ hamming-toolbox simulate 6 3 --errors 2 --words 100000
//! ```

use crate::{
    cli::{matrices::build_code, CodeArgs, Run},
    simulation::ber::{BerTest, Statistics},
};
use clap::Parser;
use std::{error::Error, io::Write};

/// Simulate CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Performs an error injection simulation")]
pub struct Args {
    #[command(flatten)]
    code: CodeArgs,
    /// Number of bit errors injected in each word
    #[arg(long, default_value = "1")]
    errors: usize,
    /// Number of words to simulate
    #[arg(long, default_value = "100000")]
    words: u64,
    /// Seed
    #[arg(long, default_value = "0")]
    seed: u64,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let code = build_code(&self.code)?;
        let test = BerTest::new(&code, self.errors, self.words, self.seed)?;
        let stats = test.run()?;
        write_statistics(std::io::stdout(), &stats)?;
        Ok(())
    }
}

fn write_statistics<W: Write>(mut f: W, stats: &Statistics) -> std::io::Result<()> {
    writeln!(f, "Bit errors per word: {}", stats.num_errors)?;
    writeln!(f, "Words: {}", stats.num_words)?;
    writeln!(f, " - Decoded: {}", stats.decoded)?;
    writeln!(f, " - Detected: {}", stats.detected)?;
    writeln!(f, " - Miscorrected: {}", stats.miscorrected)?;
    writeln!(f, " - Undetected: {}", stats.undetected)?;
    writeln!(f, "Information BER: {:.3e}", stats.ber)?;
    writeln!(f, "WER: {:.3e}", stats.wer)?;
    writeln!(f, "Elapsed: {:.3} s", stats.elapsed.as_secs_f64())?;
    Ok(())
}
