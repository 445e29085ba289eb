//! Finite field GF(2) arithmetic.
//!
//! This module contains the struct [GF2], which implements the finite field
//! arithmetic in GF(2): addition is XOR and multiplication is AND. Binary
//! vectors and matrices throughout the crate are `ndarray` arrays of [GF2]
//! elements, so that products such as `u · G` and `H · y` are computed with
//! [`ndarray`]'s `dot`.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use ndarray::{ArrayBase, Data, Ix1, ScalarOperand};
use num_traits::{One, Zero};

/// Finite field GF(2) element.
///
/// This struct represents an element of the finite field GF(2).
///
/// # Examples
/// ```
/// # use hamming_toolbox::gf2::GF2;
/// let one = GF2::from(true);
/// assert_eq!(one + one, GF2::from(false));
/// assert_eq!(u8::from(one * one), 1);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct GF2(u8);

impl GF2 {
    /// Builds an element from a bit value.
    ///
    /// Returns `None` if `bit` is neither 0 nor 1.
    pub fn from_bit(bit: u8) -> Option<GF2> {
        match bit {
            0 | 1 => Some(GF2(bit)),
            _ => None,
        }
    }

    /// Flips the element in place (adds one).
    pub fn flip(&mut self) {
        self.0 ^= 1;
    }
}

impl From<bool> for GF2 {
    fn from(bit: bool) -> GF2 {
        GF2(u8::from(bit))
    }
}

impl From<GF2> for u8 {
    fn from(x: GF2) -> u8 {
        x.0
    }
}

impl fmt::Display for GF2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Zero for GF2 {
    fn zero() -> GF2 {
        GF2(0)
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn set_zero(&mut self) {
        *self = Self::zero()
    }
}

impl One for GF2 {
    fn one() -> GF2 {
        GF2(1)
    }

    fn set_one(&mut self) {
        *self = Self::one()
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

impl Add for GF2 {
    type Output = GF2;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: GF2) -> GF2 {
        GF2(self.0 ^ rhs.0)
    }
}

impl Sub for GF2 {
    type Output = GF2;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: GF2) -> GF2 {
        self + rhs
    }
}

impl Mul for GF2 {
    type Output = GF2;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn mul(self, rhs: GF2) -> GF2 {
        GF2(self.0 & rhs.0)
    }
}

impl Div for GF2 {
    type Output = GF2;

    fn div(self, rhs: GF2) -> GF2 {
        if rhs.is_zero() {
            panic!("division by zero");
        }
        self
    }
}

macro_rules! impl_ops {
    ($op:ident, $opmethod:ident, $opassign:ident, $opassign_method:ident) => {
        impl $op<&GF2> for GF2 {
            type Output = GF2;
            fn $opmethod(self, rhs: &GF2) -> GF2 {
                self.$opmethod(*rhs)
            }
        }

        impl $opassign for GF2 {
            fn $opassign_method(&mut self, rhs: GF2) {
                *self = self.$opmethod(rhs);
            }
        }

        impl $opassign<&GF2> for GF2 {
            fn $opassign_method(&mut self, rhs: &GF2) {
                *self = self.$opmethod(*rhs);
            }
        }
    };
}

impl_ops!(Add, add, AddAssign, add_assign);
impl_ops!(Sub, sub, SubAssign, sub_assign);
impl_ops!(Mul, mul, MulAssign, mul_assign);
impl_ops!(Div, div, DivAssign, div_assign);

impl ScalarOperand for GF2 {}

/// Returns the Hamming weight (number of ones) of a binary vector.
pub fn weight<S>(v: &ArrayBase<S, Ix1>) -> usize
where
    S: Data<Elem = GF2>,
{
    v.iter().filter(|x| x.is_one()).count()
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn ops() {
        assert_eq!(GF2(0) + GF2(0), GF2(0));
        assert_eq!(GF2(0) + GF2(1), GF2(1));
        assert_eq!(GF2(1) + GF2(0), GF2(1));
        assert_eq!(GF2(1) + GF2(1), GF2(0));
        assert_eq!(GF2(0) - GF2(1), GF2(1));
        assert_eq!(GF2(1) - GF2(1), GF2(0));
        assert_eq!(GF2(0) * GF2(1), GF2(0));
        assert_eq!(GF2(1) * GF2(1), GF2(1));
        assert_eq!(GF2(0) / GF2(1), GF2(0));
        assert_eq!(GF2(1) / GF2(1), GF2(1));
    }

    #[test]
    #[should_panic]
    fn div_one_by_zero() {
        let _a = GF2(1) / GF2(0);
    }

    #[test]
    fn bits() {
        assert_eq!(GF2::from_bit(0), Some(GF2::zero()));
        assert_eq!(GF2::from_bit(1), Some(GF2::one()));
        assert_eq!(GF2::from_bit(2), None);
        assert_eq!(u8::from(GF2::from(true)), 1);
        let mut x = GF2::zero();
        x.flip();
        assert!(x.is_one());
        assert_eq!(x.to_string(), "1");
    }

    #[test]
    fn weight_and_dot() {
        let i = GF2::one();
        let o = GF2::zero();
        let v = arr1(&[i, o, i, i, o]);
        assert_eq!(weight(&v), 3);
        let dot = arr1(&[i, i, o]).dot(&arr1(&[i, i, i]));
        assert_eq!(dot, o);
    }
}
