use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::units::Quantity;

/// Element types a [`Vector`](crate::math::Vector) can hold: raw `f64` numbers
/// and dimensioned quantities.
pub trait Scalar:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// The additive identity
    fn zero() -> Self;

    /// Wraps a raw value in base units
    fn from_value(value: f64) -> Self;

    /// Returns the raw value in base units
    fn value(self) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn from_value(value: f64) -> Self {
        value
    }

    #[inline]
    fn value(self) -> f64 {
        self
    }
}

impl<T, L, M> Scalar for Quantity<T, L, M> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn from_value(value: f64) -> Self {
        Self::new(value)
    }

    #[inline]
    fn value(self) -> f64 {
        self.value
    }
}

/// Strips the dimension from a number or quantity
#[inline]
pub fn scalar_value<S: Scalar>(x: S) -> f64 {
    x.value()
}
