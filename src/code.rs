//! Single error correcting linear codes.
//!
//! This module contains [`LinearCode`], which gathers the generator and parity
//! check matrices of an (n, k) code. Building a [`LinearCode`] runs the whole
//! construction pipeline: the parameters are first checked against the
//! Hamming, Singleton and Varshamov–Gilbert bounds (see [`bounds`]), then the
//! generator matrix is built and the parity check matrix is derived from it.
//!
//! A [`LinearCode`] is immutable, so it can be shared between threads to
//! encode and decode concurrently.

use crate::{
    bounds::{self, Bounds, SINGLE_ERROR_DISTANCE},
    decoder::{self, DecoderOutput},
    encoder,
    generator::{self, generator_matrix},
    gf2::GF2,
    parity::{self, parity_check_matrix},
};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};
use thiserror::Error;

/// Number of errors corrected by the codes built by this crate.
pub const CORRECTABLE_ERRORS: usize = 1;

/// Code construction error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The parameters do not satisfy some of the bounds.
    #[error("a single error correcting code cannot be built with these parameters ({0:?})")]
    Infeasible(Bounds),
    /// Generator matrix construction error.
    #[error(transparent)]
    Generator(#[from] generator::Error),
    /// Parity check matrix construction error.
    #[error(transparent)]
    Parity(#[from] parity::Error),
}

/// Code parameters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CodeParams {
    /// Codeword length.
    pub n: usize,
    /// Information length.
    pub k: usize,
}

impl CodeParams {
    /// Number of parity bits `n - k`.
    pub fn redundancy(&self) -> usize {
        self.n.saturating_sub(self.k)
    }

    /// Code rate `k / n`.
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }

    /// Checks the parameters against the bounds for a single error correcting
    /// code.
    pub fn bounds(&self) -> Bounds {
        bounds::check_bounds(self.n, self.k, CORRECTABLE_ERRORS, SINGLE_ERROR_DISTANCE)
    }
}

/// Systematic single error correcting binary linear code.
///
/// # Examples
/// ```
/// # use hamming_toolbox::code::LinearCode;
/// # use hamming_toolbox::bits::{format_bits, parse_bits};
/// let code = LinearCode::new(7, 4).unwrap();
/// let u = parse_bits("1011", Some(4)).unwrap();
/// let mut received = code.encode(&u).unwrap();
/// received[5].flip();
/// let output = code.decode(&received).unwrap();
/// assert_eq!(output.error_position, Some(5));
/// assert_eq!(output.info_bits, u);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCode {
    params: CodeParams,
    g: Array2<GF2>,
    h: Array2<GF2>,
}

impl LinearCode {
    /// Builds the (n, k) code.
    ///
    /// # Errors
    /// An error is returned if the parameters do not satisfy all the bounds
    /// or if the generator matrix cannot be built.
    pub fn new(n: usize, k: usize) -> Result<LinearCode, Error> {
        let params = CodeParams { n, k };
        let bounds = params.bounds();
        if !bounds.all() {
            tracing::warn!(n, k, ?bounds, "infeasible code parameters");
            return Err(Error::Infeasible(bounds));
        }
        let g = generator_matrix(n, k)?;
        let h = parity_check_matrix(&g, n, k)?;
        tracing::info!(n, k, "built ({}, {}) code", n, k);
        Ok(LinearCode { params, g, h })
    }

    /// Returns the code parameters.
    pub fn params(&self) -> CodeParams {
        self.params
    }

    /// Returns the generator matrix `G = [I_k | A]`.
    pub fn generator_matrix(&self) -> &Array2<GF2> {
        &self.g
    }

    /// Returns the parity check matrix `H = [Aᵗ | I_r]`.
    pub fn parity_check_matrix(&self) -> &Array2<GF2> {
        &self.h
    }

    /// Encodes an information word of length `k`.
    pub fn encode<S>(&self, u: &ArrayBase<S, Ix1>) -> Result<Array1<GF2>, encoder::Error>
    where
        S: Data<Elem = GF2>,
    {
        encoder::encode(u, &self.g, self.params.n, self.params.k)
    }

    /// Decodes a received word of length `n`.
    pub fn decode<S>(&self, received: &ArrayBase<S, Ix1>) -> Result<DecoderOutput, decoder::Error>
    where
        S: Data<Elem = GF2>,
    {
        decoder::decode(received, &self.h, self.params.n, self.params.k)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decoder::DecodeStatus;

    #[test]
    fn hamming_7_4() {
        let code = LinearCode::new(7, 4).unwrap();
        assert_eq!(code.params().redundancy(), 3);
        assert_eq!(code.generator_matrix().dim(), (4, 7));
        assert_eq!(code.parity_check_matrix().dim(), (3, 7));
        assert!((code.params().rate() - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn infeasible() {
        assert_eq!(
            LinearCode::new(8, 5),
            Err(Error::Infeasible(Bounds {
                hamming: false,
                singleton: true,
                varshamov_gilbert: false,
            }))
        );
        assert!(matches!(
            LinearCode::new(5, 4),
            Err(Error::Infeasible(_))
        ));
        assert!(matches!(
            LinearCode::new(4, 6),
            Err(Error::Infeasible(_))
        ));
    }

    #[test]
    fn shared_between_threads() {
        let code = LinearCode::new(15, 11).unwrap();
        std::thread::scope(|s| {
            for position in 0..15 {
                let code = &code;
                s.spawn(move || {
                    let mut received = Array1::<GF2>::zeros(15);
                    received[position].flip();
                    let output = code.decode(&received).unwrap();
                    assert_eq!(output.status(), DecodeStatus::Corrected(position));
                });
            }
        });
    }
}
