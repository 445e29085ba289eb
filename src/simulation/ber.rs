//! Error injection simulation
//!
//! This module contains utilities to measure the decoder performance when a
//! fixed number of bit errors is injected in each codeword.

use super::channel::{self, BitFlipChannel};
use crate::{
    code::LinearCode,
    decoder::{self, DecodeStatus},
    encoder,
    gf2::GF2,
    rand::stream_rng,
};
use ndarray::Array1;
use rand::{distributions::Standard, Rng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Number of words simulated by each parallel task.
const WORDS_PER_TASK: u64 = 4096;

/// Error injection simulation error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The test does not simulate any word.
    #[error("the number of words to simulate must be positive")]
    NoWords,
    /// Channel construction error.
    #[error(transparent)]
    Channel(#[from] channel::Error),
    /// Encoder error.
    #[error(transparent)]
    Encoder(#[from] encoder::Error),
    /// Decoder error.
    #[error(transparent)]
    Decoder(#[from] decoder::Error),
}

/// Error injection test.
///
/// This struct is used to configure and run an error injection test. Random
/// information words are encoded, exactly `num_errors` bits of each codeword
/// are flipped, and the decoder output is compared with the transmitted
/// codeword.
#[derive(Debug)]
pub struct BerTest<'a> {
    code: &'a LinearCode,
    channel: BitFlipChannel,
    num_words: u64,
    seed: u64,
}

/// Error injection test statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Number of bit errors injected in each word.
    pub num_errors: usize,
    /// Number of words tested.
    pub num_words: u64,
    /// Number of words decoded to the transmitted codeword.
    pub decoded: u64,
    /// Number of words with a non-zero syndrome that was not corrected.
    pub detected: u64,
    /// Number of words for which a wrong bit was corrected.
    pub miscorrected: u64,
    /// Number of words with errors and a zero syndrome.
    pub undetected: u64,
    /// Number of information bit errors after decoding.
    pub bit_errors: u64,
    /// Information bit error rate after decoding.
    pub ber: f64,
    /// Word error rate after decoding.
    pub wer: f64,
    /// Elapsed time.
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Counts {
    num_words: u64,
    decoded: u64,
    detected: u64,
    miscorrected: u64,
    undetected: u64,
    bit_errors: u64,
}

impl<'a> BerTest<'a> {
    /// Creates a new error injection test.
    ///
    /// The test uses `code`, injects `num_errors` bit errors in each of
    /// `num_words` codewords and uses `seed` for reproducible random
    /// generation.
    ///
    /// This function only defines the test. To run it it is necessary to call
    /// the [`run`](BerTest::run) method.
    ///
    /// # Errors
    /// An error is returned if `num_words` is zero or if `num_errors` is larger
    /// than the codeword length.
    pub fn new(
        code: &'a LinearCode,
        num_errors: usize,
        num_words: u64,
        seed: u64,
    ) -> Result<BerTest<'a>, Error> {
        if num_words == 0 {
            return Err(Error::NoWords);
        }
        Ok(BerTest {
            code,
            channel: BitFlipChannel::new(num_errors, code.params().n)?,
            num_words,
            seed,
        })
    }

    /// Runs the test.
    ///
    /// The words are split into tasks that run in parallel. Each task uses its
    /// own RNG stream, so the results only depend on the seed.
    pub fn run(&self) -> Result<Statistics, Error> {
        let start = Instant::now();
        let num_tasks = self.num_words.div_ceil(WORDS_PER_TASK);
        let counts = (0..num_tasks)
            .into_par_iter()
            .map(|task| {
                let words = WORDS_PER_TASK.min(self.num_words - task * WORDS_PER_TASK);
                self.run_task(task, words)
            })
            .try_reduce(Counts::default, |a, b| Ok(a.merge(&b)))?;
        let stats = Statistics::from_counts(
            &counts,
            self.channel.num_errors(),
            self.code.params().k,
            start.elapsed(),
        );
        tracing::info!(
            num_words = stats.num_words,
            decoded = stats.decoded,
            detected = stats.detected,
            "error injection test finished"
        );
        Ok(stats)
    }

    fn run_task(&self, task: u64, words: u64) -> Result<Counts, Error> {
        let mut rng = stream_rng(self.seed, task);
        let k = self.code.params().k;
        let mut counts = Counts::default();
        for _ in 0..words {
            let message = Self::random_message(&mut rng, k);
            let codeword = self.code.encode(&message)?;
            let mut received = codeword.clone();
            self.channel.add_errors(&mut rng, &mut received);
            let output = self.code.decode(&received)?;
            counts.num_words += 1;
            counts.bit_errors += message
                .iter()
                .zip(output.info_bits.iter())
                .filter(|(a, b)| a != b)
                .count() as u64;
            if output.codeword == codeword {
                counts.decoded += 1;
            } else {
                match output.status() {
                    DecodeStatus::Detected => counts.detected += 1,
                    DecodeStatus::Corrected(_) => counts.miscorrected += 1,
                    DecodeStatus::NoError => counts.undetected += 1,
                }
            }
        }
        Ok(counts)
    }

    fn random_message<R: Rng>(rng: &mut R, size: usize) -> Array1<GF2> {
        rng.sample_iter(Standard)
            .map(<GF2 as From<bool>>::from)
            .take(size)
            .collect()
    }
}

impl Counts {
    fn merge(mut self, other: &Counts) -> Counts {
        self.num_words += other.num_words;
        self.decoded += other.decoded;
        self.detected += other.detected;
        self.miscorrected += other.miscorrected;
        self.undetected += other.undetected;
        self.bit_errors += other.bit_errors;
        self
    }
}

impl Statistics {
    fn from_counts(counts: &Counts, num_errors: usize, k: usize, elapsed: Duration) -> Statistics {
        let num_words = counts.num_words as f64;
        Statistics {
            num_errors,
            num_words: counts.num_words,
            decoded: counts.decoded,
            detected: counts.detected,
            miscorrected: counts.miscorrected,
            undetected: counts.undetected,
            bit_errors: counts.bit_errors,
            ber: counts.bit_errors as f64 / (k as f64 * num_words),
            wer: (counts.num_words - counts.decoded) as f64 / num_words,
            elapsed,
        }
    }
}
