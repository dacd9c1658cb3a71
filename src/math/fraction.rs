//! Exact rational numbers.
//!
//! See [`Fraction`]

use super::modular::ModInt;
use super::{Integer, One, Zero};

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An exact rational number over a signed integer type.
///
/// Always stored reduced, with a positive denominator, so two equal
/// fractions are structurally equal. No overflow protection beyond what the
/// element type gives: use a wider type if the cross products can get big.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Fraction<T> {
    numerator: T,
    denominator: T,
}

fn positive_gcd<T: Integer>(mut a: T, mut b: T) -> T {
    a = a.abs();
    b = b.abs();
    while b != T::ZERO {
        (a, b) = (b, a % b);
    }
    a
}

impl<T: Integer> Fraction<T> {
    /// Creates `numerator / denominator`, reduced.
    ///
    /// Panics if `denominator` is zero.
    pub fn new(numerator: T, denominator: T) -> Self {
        assert!(denominator != T::ZERO, "Fraction with denominator zero");
        Self {
            numerator,
            denominator,
        }
        .reduced()
    }

    pub fn numerator(self) -> T {
        self.numerator
    }

    pub fn denominator(self) -> T {
        self.denominator
    }

    /// `denominator / numerator`. Panics if the fraction is zero.
    pub fn reciprocal(self) -> Self {
        assert!(self.numerator != T::ZERO, "Reciprocal of the zero fraction");
        Self::new(self.denominator, self.numerator)
    }

    pub fn is_zero(self) -> bool {
        self.numerator == T::ZERO
    }

    /// The nearest `f64` to the exact value.
    pub fn to_f64(self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }

    /// The value as a residue: `numerator * denominator⁻¹` modulo `M`.
    ///
    /// Panics if the denominator is not coprime with `M`.
    pub fn to_mod<const M: u64>(self) -> ModInt<M> {
        ModInt::from(self.numerator.to_i128()) * ModInt::from(self.denominator.to_i128()).inverse()
    }

    fn reduced(mut self) -> Self {
        let gcd = positive_gcd(self.numerator, self.denominator);
        self.numerator = self.numerator / gcd;
        self.denominator = self.denominator / gcd;
        if self.denominator < T::ZERO {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }
        self
    }
}

impl<T: Integer> From<T> for Fraction<T> {
    fn from(value: T) -> Self {
        Self {
            numerator: value,
            denominator: T::ONE,
        }
    }
}

impl<T: Integer> Zero for Fraction<T> {
    const ZERO: Self = Self {
        numerator: T::ZERO,
        denominator: T::ONE,
    };
}

impl<T: Integer> One for Fraction<T> {
    const ONE: Self = Self {
        numerator: T::ONE,
        denominator: T::ONE,
    };
}

impl<T: Integer> Add for Fraction<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl<T: Integer> Sub for Fraction<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self + -other
    }
}

impl<T: Integer> Mul for Fraction<T> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
        )
    }
}

impl<T: Integer> Div for Fraction<T> {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        self * other.reciprocal()
    }
}

impl<T: Integer> Neg for Fraction<T> {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.numerator = -self.numerator;
        self
    }
}

macro_rules! impl_assign {
    ($($op_assign:ident $assign_fn:ident $fn:ident),*) => {$(
        impl<T: Integer> $op_assign for Fraction<T> {
            fn $assign_fn(&mut self, other: Self) {
                *self = self.$fn(other);
            }
        }
    )*};
}

impl_assign!(
    AddAssign add_assign add,
    SubAssign sub_assign sub,
    MulAssign mul_assign mul,
    DivAssign div_assign div
);

impl<T: Integer> PartialOrd for Fraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integer> Ord for Fraction<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross multiplication keeps the order.
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl<T: Integer + fmt::Display> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == T::ONE {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
