//! Existence bounds for binary linear codes.
//!
//! This module contains the function [`check_bounds`], which tests a set of
//! `(n, k, t, d)` code parameters against three classical bounds:
//!
//! - The Hamming (sphere packing) bound for single error correction,
//!   `2^k ≤ 2^n / (1 + n)`. The `2^k` disjoint Hamming balls of radius one must
//!   fit in the space of `2^n` words. It is evaluated as `2^k (1 + n) ≤ 2^n`.
//! - The Singleton bound, `n - k ≥ d - 1`.
//! - The Varshamov–Gilbert bound, `Σ_{i=0}^{d-2} C(n-1, i) < 2^(n-k)`. When it
//!   holds, a linear code with minimum distance `d` is guaranteed to exist.
//!
//! All the computations use arbitrary precision integers, so the results are
//! exact for any `n`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Minimum distance of a single error correcting code.
pub const SINGLE_ERROR_DISTANCE: usize = 3;

/// Bound check results.
///
/// Each field is `true` if the corresponding bound is satisfied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Bounds {
    /// Hamming (sphere packing) bound.
    pub hamming: bool,
    /// Singleton bound.
    pub singleton: bool,
    /// Varshamov–Gilbert bound.
    pub varshamov_gilbert: bool,
}

impl Bounds {
    /// Returns `true` if the three bounds are satisfied.
    pub fn all(&self) -> bool {
        self.hamming && self.singleton && self.varshamov_gilbert
    }
}

/// Checks the code parameters against the Hamming, Singleton and
/// Varshamov–Gilbert bounds.
///
/// The parameters are the codeword length `n`, the information length `k`, the
/// number of correctable errors `t` and the minimum distance `d`. The Hamming
/// bound is always the radius one sphere packing bound, so `t` does not change
/// the result. If the redundancy `n - k` is not positive, all the bounds are
/// reported as not satisfied.
///
/// # Examples
/// ```
/// # use hamming_toolbox::bounds::check_bounds;
/// let bounds = check_bounds(7, 4, 1, 3);
/// assert!(bounds.hamming && bounds.singleton && bounds.varshamov_gilbert);
///
/// // The (8, 5) code does not satisfy the Hamming bound
/// assert!(!check_bounds(8, 5, 1, 3).hamming);
/// ```
pub fn check_bounds(n: usize, k: usize, t: usize, d: usize) -> Bounds {
    if n <= k {
        return Bounds::default();
    }
    let r = n - k;
    let hamming = pow2(k) * BigUint::from(n + 1) <= pow2(n);
    let singleton = r + 1 >= d;
    let varshamov_gilbert = match d.checked_sub(2) {
        Some(max) => binomial_sum(n - 1, max) < pow2(r),
        // For d < 2 the sum is empty
        None => BigUint::zero() < pow2(r),
    };
    tracing::debug!(n, k, t, d, hamming, singleton, varshamov_gilbert, "checked bounds");
    Bounds {
        hamming,
        singleton,
        varshamov_gilbert,
    }
}

fn pow2(exponent: usize) -> BigUint {
    BigUint::one() << exponent
}

// Returns the sum of C(n, i) for i in 0..=max.
fn binomial_sum(n: usize, max: usize) -> BigUint {
    (0..=max.min(n))
        .map(|i| num_integer::binomial(BigUint::from(n), BigUint::from(i)))
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hamming_7_4() {
        assert_eq!(
            check_bounds(7, 4, 1, SINGLE_ERROR_DISTANCE),
            Bounds {
                hamming: true,
                singleton: true,
                varshamov_gilbert: true,
            }
        );
    }

    #[test]
    fn no_redundancy() {
        assert_eq!(check_bounds(4, 4, 1, 3), Bounds::default());
        assert_eq!(check_bounds(3, 5, 1, 3), Bounds::default());
        assert!(!check_bounds(4, 4, 1, 3).all());
    }

    #[test]
    fn single_parity_bit() {
        let bounds = check_bounds(5, 4, 1, 3);
        assert!(!bounds.hamming);
        assert!(!bounds.singleton);
        assert!(!bounds.varshamov_gilbert);
    }

    #[test]
    fn hamming_bound_limit() {
        // r = 3 allows n + 1 <= 8
        assert!(check_bounds(7, 4, 1, 3).hamming);
        assert!(!check_bounds(8, 5, 1, 3).hamming);
        // shortened codes are fine
        assert!(check_bounds(6, 3, 1, 3).all());
        // r = 4 allows n up to 15
        assert!(check_bounds(15, 11, 1, 3).all());
        assert!(!check_bounds(16, 12, 1, 3).hamming);
    }

    #[test]
    fn varshamov_gilbert_limit() {
        // 1 + (n - 1) < 2^r, so n < 2^r
        assert!(check_bounds(7, 4, 1, 3).varshamov_gilbert);
        assert!(!check_bounds(8, 5, 1, 3).varshamov_gilbert);
    }

    #[test]
    fn hamming_bound_ignores_t() {
        // 2^13 · 24 <= 2^23
        assert!(check_bounds(23, 13, 3, 7).hamming);
        assert!(check_bounds(23, 13, 0, 7).hamming);
        // 2^4 · 6 > 2^5
        assert!(!check_bounds(5, 4, 0, 3).hamming);
        for t in 0..4 {
            assert_eq!(check_bounds(7, 4, t, 3), check_bounds(7, 4, 1, 3));
        }
    }

    #[test]
    fn large_parameters() {
        assert!(check_bounds(1023, 1013, 1, 3).all());
        assert!(!check_bounds(1025, 1015, 1, 3).all());
    }
}
