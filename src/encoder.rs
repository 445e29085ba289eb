//! Systematic encoder.
//!
//! The codeword corresponding to an information word `u` is the GF(2) linear
//! combination of the rows of the generator matrix selected by the ones in
//! `u`, that is, `c = u · G`. Since `G = [I_k | A]` is systematic, the first `k`
//! symbols of the codeword are equal to `u`.

use crate::gf2::GF2;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};
use thiserror::Error;

/// Encoder error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The information word does not have length `k`.
    #[error("the information word has length {len} but {k} was expected")]
    LengthMismatch {
        /// Length of the information word.
        len: usize,
        /// Information length of the code.
        k: usize,
    },
    /// The generator matrix does not have size `k x n`.
    #[error("the generator matrix has size {rows} x {cols} but {k} x {n} was expected")]
    ShapeMismatch {
        /// Number of rows of the generator matrix.
        rows: usize,
        /// Number of columns of the generator matrix.
        cols: usize,
        /// Expected codeword length.
        n: usize,
        /// Expected information length.
        k: usize,
    },
}

/// Encodes an information word into a codeword.
///
/// The information word `u` must have length `k` and the generator matrix `g`
/// must have size `k x n`. The codeword has length `n`.
///
/// # Examples
/// ```
/// # use hamming_toolbox::{encoder::encode, generator::generator_matrix};
/// # use hamming_toolbox::bits::{format_bits, parse_bits};
/// let g = generator_matrix(7, 4).unwrap();
/// let u = parse_bits("1011", Some(4)).unwrap();
/// let codeword = encode(&u, &g, 7, 4).unwrap();
/// assert_eq!(format_bits(&codeword), "1011010");
/// ```
pub fn encode<S>(
    u: &ArrayBase<S, Ix1>,
    g: &Array2<GF2>,
    n: usize,
    k: usize,
) -> Result<Array1<GF2>, Error>
where
    S: Data<Elem = GF2>,
{
    let (rows, cols) = g.dim();
    if rows != k || cols != n {
        return Err(Error::ShapeMismatch { rows, cols, n, k });
    }
    if u.len() != k {
        return Err(Error::LengthMismatch { len: u.len(), k });
    }
    Ok(u.dot(g))
}
