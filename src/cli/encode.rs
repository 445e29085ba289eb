//! Encode CLI subcommand.
//!
//! This command encodes an information word given as a string of `0` and `1`
//! characters and prints the codeword.
//!
//! # Examples
//! ```shell
//! $ hamming-toolbox encode 7 4 1011
//! 1011010
//! ```

use crate::{
    bits::{format_bits, parse_bits},
    cli::{matrices::build_code, CodeArgs, Run},
};
use clap::Parser;
use std::error::Error;

/// Encode CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Encodes an information word")]
pub struct Args {
    #[command(flatten)]
    code: CodeArgs,
    /// Information word (k bits, for instance 1011)
    word: String,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let code = build_code(&self.code)?;
        let u = parse_bits(&self.word, Some(code.params().k))?;
        let codeword = code.encode(&u)?;
        println!("{}", format_bits(&codeword));
        Ok(())
    }
}
