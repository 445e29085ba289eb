//! # Reproducible random functions
//!
//! This module uses the [`ChaCha8Rng`] RNG from the [rand_chacha] crate
//! to achieve reproducible error injection. Parallel simulations give each
//! worker its own stream of the same seed with [`ChaCha8Rng::set_stream`], so
//! the results do not depend on how the work is scheduled.
//!
//! # Examples
//! ```
//! # use hamming_toolbox::rand::Rng;
//! # use hamming_toolbox::rand::*;
//! let seed = 42;
//! let mut rng = Rng::seed_from_u64(seed);
//! assert_eq!(rng.next_u64(), 12578764544318200737);
//! ```
use rand_chacha::ChaCha8Rng;
pub use rand_chacha::rand_core::SeedableRng;
pub use rand_core::RngCore;

/// The RNG used in throughout this crate for error injection.
pub type Rng = ChaCha8Rng;

/// Returns the RNG for stream `stream` of the seed `seed`.
pub fn stream_rng(seed: u64, stream: u64) -> Rng {
    let mut rng = Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn streams() {
        let a = stream_rng(1, 0).next_u64();
        let b = stream_rng(1, 1).next_u64();
        assert_ne!(a, b);
        assert_eq!(a, stream_rng(1, 0).next_u64());
    }
}
