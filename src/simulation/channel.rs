//! Channel simulation.
//!
//! This module contains a binary channel that flips a fixed number of bits in
//! each word.

use crate::gf2::GF2;
use ndarray::{ArrayBase, DataMut, Ix1};
use rand::{seq::index, Rng};
use thiserror::Error;

/// Channel construction error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// More bit errors than bits in a word were requested.
    #[error("cannot flip {num_errors} bits of a {word_len} bit word")]
    TooManyErrors {
        /// Number of bit errors per word.
        num_errors: usize,
        /// Word length.
        word_len: usize,
    },
}

/// Fixed weight bit flip channel.
///
/// This struct is used to add exactly `num_errors` bit errors to each word, in
/// positions chosen uniformly at random.
#[derive(Debug, Clone)]
pub struct BitFlipChannel {
    num_errors: usize,
    word_len: usize,
}

impl BitFlipChannel {
    /// Creates a new bit flip channel for words of length `word_len`.
    ///
    /// # Errors
    /// An error is returned if `num_errors` is larger than `word_len`.
    pub fn new(num_errors: usize, word_len: usize) -> Result<BitFlipChannel, Error> {
        if num_errors > word_len {
            return Err(Error::TooManyErrors {
                num_errors,
                word_len,
            });
        }
        Ok(BitFlipChannel {
            num_errors,
            word_len,
        })
    }

    /// Returns the number of bit errors added to each word.
    pub fn num_errors(&self) -> usize {
        self.num_errors
    }

    /// Adds errors to a word.
    ///
    /// The errors are added in-place to `word`, which must have the length
    /// given to [`BitFlipChannel::new`]. An [Rng] is used as source of
    /// randomness.
    ///
    /// # Panics
    ///
    /// This function panics if `word` does not have the expected length.
    pub fn add_errors<R, S>(&self, rng: &mut R, word: &mut ArrayBase<S, Ix1>)
    where
        R: Rng,
        S: DataMut<Elem = GF2>,
    {
        assert_eq!(word.len(), self.word_len);
        for position in index::sample(rng, self.word_len, self.num_errors) {
            word[position].flip();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gf2::weight, rand::stream_rng};
    use ndarray::Array1;

    #[test]
    fn too_many_errors() {
        assert_eq!(
            BitFlipChannel::new(8, 7).unwrap_err(),
            Error::TooManyErrors {
                num_errors: 8,
                word_len: 7
            }
        );
    }

    #[test]
    fn exact_weight() {
        let channel = BitFlipChannel::new(3, 15).unwrap();
        let mut rng = stream_rng(0, 0);
        for _ in 0..100 {
            let mut word = Array1::<GF2>::zeros(15);
            channel.add_errors(&mut rng, &mut word);
            assert_eq!(weight(&word), 3);
        }
    }

    #[test]
    fn non_contiguous_word() {
        // every other element of a strided view
        let channel = BitFlipChannel::new(4, 4).unwrap();
        let mut storage = Array1::<GF2>::zeros(8);
        let mut word = storage.slice_mut(ndarray::s![..;2]);
        channel.add_errors(&mut stream_rng(2, 0), &mut word);
        assert_eq!(weight(&storage), 4);
        assert!(storage.iter().step_by(2).all(|x| u8::from(*x) == 1));
    }

    #[test]
    fn zero_errors() {
        let channel = BitFlipChannel::new(0, 7).unwrap();
        let mut word = Array1::from_elem(7, GF2::from(true));
        let orig = word.clone();
        channel.add_errors(&mut rand::thread_rng(), &mut word);
        assert_eq!(word, orig);
    }
}
