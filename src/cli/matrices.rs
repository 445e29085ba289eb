//! Matrices CLI subcommand.
//!
//! This subcommand builds an (n, k) single error correcting code and prints
//! the bounds report, its generator matrix `G = [I | A]` and parity check
//! matrix `H = [A^T | I]`.
//!
//! # Examples
//! ```shell
//! $ hamming-toolbox matrices 7 4
//! Hamming bound (2^k <= 2^n / (1 + n)): ✓
//! Singleton bound (d <= n - k + 1): ✓
//! Varshamov-Gilbert bound (n < 2^(n - k)): ✓
//!
//! Generator matrix (G = [I | A]):
//! 1 0 0 0 0 1 1
//! 0 1 0 0 1 0 1
//! 0 0 1 0 1 1 0
//! 0 0 0 1 1 1 1
//!
//! Parity check matrix (H = [A^T | I]):
//! 0 1 1 1 1 0 0
//! 1 0 1 1 0 1 0
//! 1 1 0 1 0 0 1
//!
//! The code corrects 1 error.
//! ```

use crate::{
    bits::MatrixDisplay,
    cli::{bounds::write_bounds, CodeArgs, Run},
    code::{self, LinearCode, CORRECTABLE_ERRORS},
};
use clap::Parser;
use std::{error::Error, io::Write};

/// Matrices CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Prints the generator and parity check matrices")]
pub struct Args {
    #[command(flatten)]
    code: CodeArgs,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let code = build_code(&self.code)?;
        write_matrices(std::io::stdout(), &code)?;
        Ok(())
    }
}

/// Writes the bounds report and the matrices of a code.
pub fn write_matrices<W: Write>(mut f: W, code: &LinearCode) -> std::io::Result<()> {
    write_bounds(&mut f, &code.params().bounds())?;
    writeln!(f)?;
    writeln!(f, "Generator matrix (G = [I | A]):")?;
    write!(f, "{}", MatrixDisplay(code.generator_matrix()))?;
    writeln!(f)?;
    writeln!(f, "Parity check matrix (H = [A^T | I]):")?;
    write!(f, "{}", MatrixDisplay(code.parity_check_matrix()))?;
    writeln!(f)?;
    writeln!(f, "The code corrects {CORRECTABLE_ERRORS} error.")?;
    Ok(())
}

/// Builds the code given in the command line.
///
/// If the parameters are infeasible, the bound check report is written to
/// `stderr` before returning the error.
pub fn build_code(args: &CodeArgs) -> Result<LinearCode, Box<dyn Error>> {
    let params = args.params()?;
    match LinearCode::new(params.n, params.k) {
        Ok(code) => Ok(code),
        Err(e @ code::Error::Infeasible(bounds)) => {
            write_bounds(std::io::stderr(), &bounds)?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn report_7_4() {
        let code = LinearCode::new(7, 4).unwrap();
        let mut out = Vec::new();
        write_matrices(&mut out, &code).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Hamming bound (2^k <= 2^n / (1 + n)): ✓
Singleton bound (d <= n - k + 1): ✓
Varshamov-Gilbert bound (n < 2^(n - k)): ✓

Generator matrix (G = [I | A]):
1 0 0 0 0 1 1
0 1 0 0 1 0 1
0 0 1 0 1 1 0
0 0 0 1 1 1 1

Parity check matrix (H = [A^T | I]):
0 1 1 1 1 0 0
1 0 1 1 0 1 0
1 1 0 1 0 0 1

The code corrects 1 error.
"
        );
    }
}
