//! Decode CLI subcommand.
//!
//! This command decodes a received word given as a string of `0` and `1`
//! characters. It prints the syndrome, whether an error was found (error
//! positions are counted starting by one) and the decoded information word.
//!
//! # Examples
//! ```shell
//! $ hamming-toolbox decode 7 4 1010010
//! Syndrome: 111
//! Corrected an error in position 4
//! Information word: 1011
//! ```

use crate::{
    bits::{format_bits, parse_bits},
    cli::{matrices::build_code, CodeArgs, Run},
    decoder::DecodeStatus,
};
use clap::Parser;
use std::error::Error;

/// Decode CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Decodes a received word")]
pub struct Args {
    #[command(flatten)]
    code: CodeArgs,
    /// Received word (n bits, for instance 1010010)
    word: String,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let code = build_code(&self.code)?;
        let received = parse_bits(&self.word, Some(code.params().n))?;
        let output = code.decode(&received)?;
        println!("Syndrome: {}", format_bits(&output.syndrome));
        println!("{}", status_message(output.status()));
        println!("Information word: {}", format_bits(&output.info_bits));
        Ok(())
    }
}

fn status_message(status: DecodeStatus) -> String {
    match status {
        DecodeStatus::NoError => "No errors detected".to_string(),
        DecodeStatus::Corrected(position) => {
            format!("Corrected an error in position {}", position + 1)
        }
        DecodeStatus::Detected => {
            "Errors detected but not located (more than one error)".to_string()
        }
    }
}
