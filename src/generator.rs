//! Systematic generator matrix construction.
//!
//! This module builds the generator matrix `G = [I_k | A]` of an (n, k) single
//! error correcting binary code. The `k` rows of `A` (each of length `r = n -
//! k`) are taken from the non-zero binary vectors of length `r` which are not
//! unit vectors, enumerated in ascending numeric order. See
//! [`NonBasisVectors`].
//!
//! The rows of `A` become the first `k` columns of the parity check matrix `H
//! = [Aᵗ | I_r]` (see [`parity`](crate::parity)), while the unit vectors are
//! the last `r` columns. Excluding the unit vectors from `A` therefore makes all
//! the columns of `H` pairwise distinct and non-zero, which is the condition
//! for every single bit error to produce a different syndrome.

use crate::gf2::GF2;
use ndarray::{s, Array1, Array2};
use num_traits::One;
use thiserror::Error;

/// Generator matrix construction error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The code parameters do not satisfy `0 < k < n`.
    #[error("invalid code parameters n = {n}, k = {k} (0 < k < n is required)")]
    InvalidParameters {
        /// Codeword length.
        n: usize,
        /// Information length.
        k: usize,
    },
    /// There are less than 2 parity bits.
    #[error("a single error correcting code needs at least 2 parity bits (got {redundancy})")]
    InsufficientRedundancy {
        /// Number of parity bits `n - k`.
        redundancy: usize,
    },
    /// There are not enough non-basis vectors to fill the matrix `A`.
    #[error("only {available} non-basis vectors are available but {required} are required")]
    InsufficientNonBasisVectors {
        /// Number of non-basis vectors of length `n - k`.
        available: usize,
        /// Number of rows of `A` (equal to `k`).
        required: usize,
    },
}

/// Iterator over the non-basis binary vectors of a given length.
///
/// The iterator yields the binary representation (most significant bit first)
/// of the integers `1, 2, ..., 2^r - 1`, skipping those with a single one.
/// The iterator is lazy and finite, and it can be restarted by cloning it
/// before consuming it.
///
/// # Examples
/// ```
/// # use hamming_toolbox::generator::NonBasisVectors;
/// # use hamming_toolbox::bits::format_bits;
/// let vectors: Vec<String> = NonBasisVectors::new(3).map(|v| format_bits(&v)).collect();
/// assert_eq!(vectors, ["011", "101", "110", "111"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonBasisVectors {
    width: usize,
    next: usize,
    // None if 2^width does not fit in a usize
    end: Option<usize>,
}

impl NonBasisVectors {
    /// Creates an iterator over the non-basis vectors of length `width`.
    pub fn new(width: usize) -> NonBasisVectors {
        NonBasisVectors {
            width,
            next: 1,
            end: 1usize.checked_shl(width.try_into().unwrap_or(u32::MAX)),
        }
    }

    fn to_vector(&self, value: usize) -> Array1<GF2> {
        Array1::from_iter((0..self.width).map(|j| {
            let shift = u32::try_from(self.width - 1 - j).unwrap_or(u32::MAX);
            GF2::from(value.checked_shr(shift).map_or(false, |v| v & 1 == 1))
        }))
    }
}

impl Iterator for NonBasisVectors {
    type Item = Array1<GF2>;

    fn next(&mut self) -> Option<Array1<GF2>> {
        loop {
            if self.end.map_or(false, |end| self.next >= end) {
                return None;
            }
            let value = self.next;
            self.next = self.next.checked_add(1)?;
            if !value.is_power_of_two() {
                return Some(self.to_vector(value));
            }
        }
    }
}

/// Returns the number of non-basis vectors of length `width`.
///
/// This is `2^width - 1 - width`, or `None` if it does not fit in a `usize`.
pub fn num_non_basis_vectors(width: usize) -> Option<usize> {
    1usize
        .checked_shl(width.try_into().ok()?)?
        .checked_sub(1 + width)
}

/// Builds the systematic generator matrix of an (n, k) single error correcting
/// code.
///
/// The returned matrix has size `k x n`. Its first `k` columns form the
/// identity matrix and its last `n - k` columns contain the first `k`
/// non-basis vectors as given by [`NonBasisVectors`]. The construction is
/// deterministic.
///
/// # Errors
/// An error is returned if `0 < k < n` does not hold, if `n - k < 2`, or if
/// `k` is larger than the number of non-basis vectors of length `n - k`.
///
/// # Examples
/// ```
/// # use hamming_toolbox::generator::generator_matrix;
/// # use hamming_toolbox::bits::format_bits;
/// let g = generator_matrix(7, 4).unwrap();
/// let rows: Vec<String> = g.rows().into_iter().map(|row| format_bits(&row)).collect();
/// assert_eq!(rows, ["1000011", "0100101", "0010110", "0001111"]);
/// ```
pub fn generator_matrix(n: usize, k: usize) -> Result<Array2<GF2>, Error> {
    if k == 0 || k >= n {
        return Err(Error::InvalidParameters { n, k });
    }
    let r = n - k;
    if r < 2 {
        return Err(Error::InsufficientRedundancy { redundancy: r });
    }
    if let Some(available) = num_non_basis_vectors(r) {
        if available < k {
            return Err(Error::InsufficientNonBasisVectors {
                available,
                required: k,
            });
        }
    }
    let mut g = Array2::zeros((k, n));
    for (j, vector) in NonBasisVectors::new(r).take(k).enumerate() {
        g[[j, j]] = GF2::one();
        g.slice_mut(s![j, k..]).assign(&vector);
    }
    tracing::debug!(n, k, "built generator matrix");
    Ok(g)
}
