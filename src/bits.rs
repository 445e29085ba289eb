//! Text representation of binary vectors and matrices.
//!
//! Binary vectors are written as strings of `0` and `1` characters without
//! separators (for instance `1011`). Matrices are displayed one row per line,
//! with the elements separated by spaces.

use crate::gf2::GF2;
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};
use std::fmt;
use thiserror::Error;

/// Bit string parsing error.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The string does not have the expected number of bits.
    #[error("expected {expected} bits but got {len}")]
    WrongLength {
        /// Expected number of bits.
        expected: usize,
        /// Number of characters in the string.
        len: usize,
    },
    /// The string contains a character other than `0` or `1`.
    #[error("invalid character {character:?} at position {position} (only 0 and 1 are allowed)")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Position of the character (starting by zero).
        position: usize,
    },
}

/// Parses a string of `0` and `1` characters into a binary vector.
///
/// Leading and trailing whitespace is ignored. If `expected_len` is `Some`,
/// the string must contain exactly that number of bits.
///
/// # Examples
/// ```
/// # use hamming_toolbox::bits::{parse_bits, format_bits};
/// let u = parse_bits("1011", Some(4)).unwrap();
/// assert_eq!(format_bits(&u), "1011");
/// assert!(parse_bits("10a1", Some(4)).is_err());
/// assert!(parse_bits("101", Some(4)).is_err());
/// ```
pub fn parse_bits(s: &str, expected_len: Option<usize>) -> Result<Array1<GF2>, Error> {
    let s = s.trim();
    let len = s.chars().count();
    if let Some(expected) = expected_len {
        if len != expected {
            return Err(Error::WrongLength { expected, len });
        }
    }
    s.chars()
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(2)
                .and_then(|bit| GF2::from_bit(bit as u8))
                .ok_or(Error::InvalidCharacter {
                    character,
                    position,
                })
        })
        .collect()
}

/// Formats a binary vector as a string of `0` and `1` characters.
pub fn format_bits<S>(v: &ArrayBase<S, Ix1>) -> String
where
    S: Data<Elem = GF2>,
{
    v.iter().map(|x| x.to_string()).collect()
}

/// Wrapper that implements [`Display`](fmt::Display) for a binary matrix.
///
/// # Examples
/// ```
/// # use hamming_toolbox::{bits::MatrixDisplay, generator::generator_matrix};
/// let g = generator_matrix(5, 2).unwrap();
/// assert_eq!(MatrixDisplay(&g).to_string(), "1 0 0 1 1\n0 1 1 0 1\n");
/// ```
#[derive(Debug)]
pub struct MatrixDisplay<'a, S: Data<Elem = GF2>>(pub &'a ArrayBase<S, Ix2>);

impl<S: Data<Elem = GF2>> fmt::Display for MatrixDisplay<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.rows() {
            let mut first = true;
            for x in row.iter() {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{x}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn parse() {
        let i = GF2::one();
        let o = GF2::zero();
        assert_eq!(
            parse_bits(" 0110\n", None).unwrap(),
            ndarray::arr1(&[o, i, i, o])
        );
        assert_eq!(parse_bits("", Some(0)).unwrap().len(), 0);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_bits("10", Some(3)),
            Err(Error::WrongLength {
                expected: 3,
                len: 2
            })
        );
        assert_eq!(
            parse_bits("1021", None),
            Err(Error::InvalidCharacter {
                character: '2',
                position: 2
            })
        );
        assert!(parse_bits("1 0", Some(3)).is_err());
        // only ASCII binary digits are bits
        for bad in ['b', 'a', '１', '٠'] {
            assert_eq!(
                parse_bits(&format!("0{bad}"), None),
                Err(Error::InvalidCharacter {
                    character: bad,
                    position: 1
                })
            );
        }
    }

    #[test]
    fn format() {
        let v = parse_bits("1100101", Some(7)).unwrap();
        assert_eq!(format_bits(&v), "1100101");
        assert_eq!(format_bits(&v.slice(ndarray::s![..3])), "110");
    }
}
