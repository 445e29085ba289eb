//! Parity check matrix derivation.
//!
//! For a systematic generator matrix `G = [I_k | A]`, the matrix `H = [Aᵗ |
//! I_r]` satisfies `G · Hᵗ = A + A = 0`, so every codeword has a zero syndrome.

use crate::gf2::GF2;
use ndarray::{s, Array2};
use num_traits::One;
use thiserror::Error;

/// Parity check matrix derivation error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
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

/// Computes the parity check matrix corresponding to a systematic generator
/// matrix.
///
/// The generator matrix `g` must have size `k x n` and be in systematic form
/// `[I_k | A]`. The returned matrix has size `(n - k) x n` and is equal to
/// `[Aᵗ | I_r]`.
///
/// # Examples
/// ```
/// # use hamming_toolbox::{generator::generator_matrix, parity::parity_check_matrix};
/// # use hamming_toolbox::bits::format_bits;
/// let g = generator_matrix(7, 4).unwrap();
/// let h = parity_check_matrix(&g, 7, 4).unwrap();
/// let rows: Vec<String> = h.rows().into_iter().map(|row| format_bits(&row)).collect();
/// assert_eq!(rows, ["0111100", "1011010", "1101001"]);
/// ```
pub fn parity_check_matrix(g: &Array2<GF2>, n: usize, k: usize) -> Result<Array2<GF2>, Error> {
    let (rows, cols) = g.dim();
    if rows != k || cols != n || k > n {
        return Err(Error::ShapeMismatch { rows, cols, n, k });
    }
    let r = n - k;
    let mut h = Array2::zeros((r, n));
    h.slice_mut(s![.., ..k]).assign(&g.slice(s![.., k..]).reversed_axes());
    for j in 0..r {
        h[[j, k + j]] = GF2::one();
    }
    tracing::debug!(n, k, "derived parity check matrix");
    Ok(h)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::generator_matrix;
    use num_traits::Zero;

    #[test]
    fn orthogonal() {
        for (n, k) in [(5, 2), (6, 3), (7, 4), (10, 6), (15, 11)] {
            let g = generator_matrix(n, k).unwrap();
            let h = parity_check_matrix(&g, n, k).unwrap();
            assert_eq!(h.dim(), (n - k, n));
            assert!(g.dot(&h.t()).iter().all(|x| x.is_zero()));
        }
    }

    #[test]
    fn identity_part() {
        let g = generator_matrix(10, 6).unwrap();
        let h = parity_check_matrix(&g, 10, 6).unwrap();
        assert_eq!(
            h.slice(s![.., 6..]),
            Array2::<GF2>::from_shape_fn((4, 4), |(j, k)| GF2::from(j == k))
        );
    }

    #[test]
    fn distinct_columns() {
        let g = generator_matrix(15, 11).unwrap();
        let h = parity_check_matrix(&g, 15, 11).unwrap();
        let columns: Vec<_> = h.columns().into_iter().collect();
        for (j, a) in columns.iter().enumerate() {
            assert!(a.iter().any(|x| x.is_one()));
            for b in &columns[j + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn shape_mismatch() {
        let g = generator_matrix(7, 4).unwrap();
        assert_eq!(
            parity_check_matrix(&g, 8, 4),
            Err(Error::ShapeMismatch {
                rows: 4,
                cols: 7,
                n: 8,
                k: 4
            })
        );
    }
}
