//! Single error correcting syndrome decoder.
//!
//! The decoder computes the syndrome `s = H · y` of a received word `y`. If the
//! syndrome is non-zero, the columns of `H` are searched for one equal to `s`.
//! A single bit error in position `j` produces a syndrome equal to column `j`
//! of `H`, so the error is corrected by flipping that bit. Since the code is
//! systematic, the information bits are the first `k` bits of the corrected
//! word.
//!
//! Only single bit errors are corrected. An error pattern with more than one
//! bit error either produces a syndrome that does not match any column (it is
//! then reported as [`DecodeStatus::Detected`]), or is mistaken for a single
//! error or for no error at all. This is a limitation of the code and not of
//! the decoder.

use crate::gf2::GF2;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};
use num_traits::Zero;
use thiserror::Error;

/// Decoder error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The received word does not have length `n`.
    #[error("the received word has length {len} but {n} was expected")]
    LengthMismatch {
        /// Length of the received word.
        len: usize,
        /// Codeword length.
        n: usize,
    },
    /// The parity check matrix does not have size `(n - k) x n`.
    #[error("the parity check matrix has size {rows} x {cols} but {r} x {n} was expected")]
    ShapeMismatch {
        /// Number of rows of the parity check matrix.
        rows: usize,
        /// Number of columns of the parity check matrix.
        cols: usize,
        /// Expected codeword length.
        n: usize,
        /// Expected number of parity bits.
        r: usize,
    },
}

/// Decoder output.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DecoderOutput {
    /// Decoded information bits.
    ///
    /// These are the first `k` bits of the corrected codeword.
    pub info_bits: Array1<GF2>,
    /// Syndrome of the received word.
    pub syndrome: Array1<GF2>,
    /// Position of the corrected error.
    ///
    /// This is `None` if no error was corrected, either because the syndrome
    /// is zero or because it does not match any column of the parity check
    /// matrix. Use [`DecoderOutput::status`] to distinguish these cases.
    pub error_position: Option<usize>,
    /// Corrected word.
    pub codeword: Array1<GF2>,
}

/// Outcome of decoding a received word.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DecodeStatus {
    /// The syndrome is zero.
    NoError,
    /// A single bit error was corrected in the given position.
    Corrected(usize),
    /// The syndrome is non-zero but does not correspond to a single bit error.
    Detected,
}

impl DecoderOutput {
    /// Returns the outcome of the decoding.
    pub fn status(&self) -> DecodeStatus {
        match self.error_position {
            Some(position) => DecodeStatus::Corrected(position),
            None if self.syndrome.iter().all(|x| x.is_zero()) => DecodeStatus::NoError,
            None => DecodeStatus::Detected,
        }
    }
}

/// Computes the syndrome `H · y` of a received word `y`.
pub fn syndrome<S>(received: &ArrayBase<S, Ix1>, h: &Array2<GF2>) -> Array1<GF2>
where
    S: Data<Elem = GF2>,
{
    h.dot(received)
}

/// Returns the index of the first column of `h` that is equal to `syndrome`.
///
/// A zero syndrome never matches, since it does not correspond to any error.
pub fn locate_error<S>(syndrome: &ArrayBase<S, Ix1>, h: &Array2<GF2>) -> Option<usize>
where
    S: Data<Elem = GF2>,
{
    if syndrome.iter().all(|x| x.is_zero()) {
        return None;
    }
    h.columns()
        .into_iter()
        .position(|column| column == *syndrome)
}

/// Decodes a received word.
///
/// The received word must have length `n` and the parity check matrix `h` must
/// have size `(n - k) x n` and correspond to a systematic generator matrix.
///
/// # Examples
/// ```
/// # use hamming_toolbox::{decoder::{decode, DecodeStatus}, generator::generator_matrix};
/// # use hamming_toolbox::{bits::{format_bits, parse_bits}, parity::parity_check_matrix};
/// let g = generator_matrix(7, 4).unwrap();
/// let h = parity_check_matrix(&g, 7, 4).unwrap();
/// // the codeword 1011010 with an error in bit 3
/// let received = parse_bits("1010010", Some(7)).unwrap();
/// let output = decode(&received, &h, 7, 4).unwrap();
/// assert_eq!(output.status(), DecodeStatus::Corrected(3));
/// assert_eq!(format_bits(&output.info_bits), "1011");
/// assert_eq!(format_bits(&output.syndrome), "111");
/// ```
pub fn decode<S>(
    received: &ArrayBase<S, Ix1>,
    h: &Array2<GF2>,
    n: usize,
    k: usize,
) -> Result<DecoderOutput, Error>
where
    S: Data<Elem = GF2>,
{
    let r = n.saturating_sub(k);
    let (rows, cols) = h.dim();
    if k > n || rows != r || cols != n {
        return Err(Error::ShapeMismatch { rows, cols, n, r });
    }
    if received.len() != n {
        return Err(Error::LengthMismatch {
            len: received.len(),
            n,
        });
    }
    let syndrome = syndrome(received, h);
    let error_position = locate_error(&syndrome, h);
    let mut codeword = received.to_owned();
    if let Some(position) = error_position {
        codeword[position].flip();
    }
    tracing::trace!(?error_position, "decoded word");
    Ok(DecoderOutput {
        info_bits: codeword.slice(ndarray::s![..k]).to_owned(),
        syndrome,
        error_position,
        codeword,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        bits::{format_bits, parse_bits},
        encoder::encode,
        generator::generator_matrix,
        parity::parity_check_matrix,
    };

    fn code(n: usize, k: usize) -> (Array2<GF2>, Array2<GF2>) {
        let g = generator_matrix(n, k).unwrap();
        let h = parity_check_matrix(&g, n, k).unwrap();
        (g, h)
    }

    #[test]
    fn no_error() {
        let (g, h) = code(7, 4);
        let u = parse_bits("1011", Some(4)).unwrap();
        let c = encode(&u, &g, 7, 4).unwrap();
        let output = decode(&c, &h, 7, 4).unwrap();
        assert_eq!(output.status(), DecodeStatus::NoError);
        assert_eq!(output.error_position, None);
        assert_eq!(output.info_bits, u);
        assert_eq!(output.codeword, c);
        assert_eq!(format_bits(&output.syndrome), "000");
    }

    #[test]
    fn single_errors() {
        let (g, h) = code(7, 4);
        let u = parse_bits("1011", Some(4)).unwrap();
        let c = encode(&u, &g, 7, 4).unwrap();
        for position in 0..7 {
            let mut received = c.clone();
            received[position].flip();
            let output = decode(&received, &h, 7, 4).unwrap();
            assert_eq!(output.error_position, Some(position));
            assert_eq!(output.status(), DecodeStatus::Corrected(position));
            assert_eq!(output.codeword, c);
            assert_eq!(output.info_bits, u);
            assert_eq!(output.syndrome, h.column(position));
        }
    }

    #[test]
    fn double_error_detected() {
        // The (5, 2) code is not perfect, so some syndromes are not columns of H
        let (_, h) = code(5, 2);
        // columns of H are 011, 101, 100, 010, 001
        let received = parse_bits("00110", Some(5)).unwrap();
        let output = decode(&received, &h, 5, 2).unwrap();
        assert_eq!(format_bits(&output.syndrome), "110");
        assert_eq!(output.status(), DecodeStatus::Detected);
        assert_eq!(output.error_position, None);
        assert_eq!(output.codeword, received);
    }

    #[test]
    fn double_error_miscorrected() {
        // Hamming (7, 4) is perfect: every non-zero syndrome is a column of H
        let (_, h) = code(7, 4);
        let received = parse_bits("1100000", Some(7)).unwrap();
        let output = decode(&received, &h, 7, 4).unwrap();
        assert!(matches!(output.status(), DecodeStatus::Corrected(p) if p > 1));
    }

    #[test]
    fn malformed_input() {
        let (_, h) = code(7, 4);
        let received = parse_bits("101", Some(3)).unwrap();
        assert_eq!(
            decode(&received, &h, 7, 4),
            Err(Error::LengthMismatch { len: 3, n: 7 })
        );
        assert!(matches!(
            decode(&received, &h, 7, 3),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
