use clap::Parser;
use hamming_toolbox::cli::{setup_logging, Args, Run};
use std::error::Error;

#[termination::display]
fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();
    Args::parse().run()
}
