use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use typenum::{Diff, Integer, PartialDiv, PartialQuot, Prod, Sum as DimSum, P2};

/// A scalar value tagged with the exponents of its physical dimension.
///
/// `T`, `L` and `M` are type-level integers (`typenum::Z0`, `P1`, `N2`, ...)
/// holding the exponents of time, length and mass. The exponents only exist
/// in the type: a `Quantity` is a plain `f64` at runtime.
///
/// Adding or subtracting two quantities requires identical exponents, so a
/// mismatched expression is rejected by the compiler:
///
/// ```compile_fail
/// use point_mechanics::units::{Length, Mass};
///
/// let nonsense = Length::new(1.0) + Mass::new(2.0);
/// ```
///
/// Multiplication and division are always defined and combine the exponents:
///
/// ```
/// use point_mechanics::units::{Length, Speed, Time};
///
/// let speed: Speed = Length::new(10.0) / Time::new(2.0);
/// assert_eq!(speed.value, 5.0);
/// ```
pub struct Quantity<T, L, M> {
    /// The raw magnitude in base units (s, m, kg)
    pub value: f64,

    dimension: PhantomData<(T, L, M)>,
}

impl<T, L, M> Quantity<T, L, M> {
    /// The zero quantity of this dimension
    pub const ZERO: Self = Self::new(0.0);

    /// Creates a new quantity from a raw value in base units
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// Replaces the raw value
    #[inline]
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Returns the absolute value, keeping the dimension
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Returns true if the raw value is finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    /// Raises the quantity to the integer power `P`, scaling every exponent by `P`
    #[inline]
    pub fn powi<P>(self) -> Quantity<Prod<T, P>, Prod<L, P>, Prod<M, P>>
    where
        P: Integer,
        T: Mul<P>,
        L: Mul<P>,
        M: Mul<P>,
    {
        Quantity::new(self.value.powi(P::to_i32()))
    }

    /// Square root. Only available when every exponent is even.
    #[inline]
    pub fn sqrt(self) -> Quantity<PartialQuot<T, P2>, PartialQuot<L, P2>, PartialQuot<M, P2>>
    where
        T: PartialDiv<P2>,
        L: PartialDiv<P2>,
        M: PartialDiv<P2>,
    {
        Quantity::new(self.value.sqrt())
    }
}

impl<T, L, M> Clone for Quantity<T, L, M> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, L, M> Copy for Quantity<T, L, M> {}

impl<T, L, M> Default for Quantity<T, L, M> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, L, M> PartialEq for Quantity<T, L, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T, L, M> PartialOrd for Quantity<T, L, M> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Integer, L: Integer, M: Integer> fmt::Debug for Quantity<T, L, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("time", &T::to_i64())
            .field("length", &L::to_i64())
            .field("mass", &M::to_i64())
            .finish()
    }
}

impl<T: Integer, L: Integer, M: Integer> fmt::Display for Quantity<T, L, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)?;

        let mut separator = " ";
        for (symbol, exponent) in [("kg", M::to_i64()), ("m", L::to_i64()), ("s", T::to_i64())] {
            match exponent {
                0 => continue,
                1 => write!(f, "{}{}", separator, symbol)?,
                _ => write!(f, "{}{}^{}", separator, symbol, exponent)?,
            }
            separator = "·";
        }

        Ok(())
    }
}

// === Same-dimension arithmetic ===

impl<T, L, M> Add for Quantity<T, L, M> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value)
    }
}

impl<T, L, M> Sub for Quantity<T, L, M> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value)
    }
}

impl<T, L, M> AddAssign for Quantity<T, L, M> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<T, L, M> SubAssign for Quantity<T, L, M> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<T, L, M> Neg for Quantity<T, L, M> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}

impl<T, L, M> Sum for Quantity<T, L, M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

// === Raw scalar arithmetic ===
//
// Only `quantity op f64` exists. `f64 op quantity` is left undefined.

impl<T, L, M> Add<f64> for Quantity<T, L, M> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        Self::new(self.value + rhs)
    }
}

impl<T, L, M> Sub<f64> for Quantity<T, L, M> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        Self::new(self.value - rhs)
    }
}

impl<T, L, M> Mul<f64> for Quantity<T, L, M> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.value * rhs)
    }
}

impl<T, L, M> Div<f64> for Quantity<T, L, M> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.value / rhs)
    }
}

impl<T, L, M> MulAssign<f64> for Quantity<T, L, M> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl<T, L, M> DivAssign<f64> for Quantity<T, L, M> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}

// === Dimension-combining arithmetic ===

impl<T1, L1, M1, T2, L2, M2> Mul<Quantity<T2, L2, M2>> for Quantity<T1, L1, M1>
where
    T1: Add<T2>,
    L1: Add<L2>,
    M1: Add<M2>,
{
    type Output = Quantity<DimSum<T1, T2>, DimSum<L1, L2>, DimSum<M1, M2>>;
    #[inline]
    fn mul(self, rhs: Quantity<T2, L2, M2>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<T1, L1, M1, T2, L2, M2> Div<Quantity<T2, L2, M2>> for Quantity<T1, L1, M1>
where
    T1: Sub<T2>,
    L1: Sub<L2>,
    M1: Sub<M2>,
{
    type Output = Quantity<Diff<T1, T2>, Diff<L1, L2>, Diff<M1, M2>>;
    #[inline]
    fn div(self, rhs: Quantity<T2, L2, M2>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

// === Tolerant comparison ===

impl<T, L, M> AbsDiffEq for Quantity<T, L, M> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl<T, L, M> RelativeEq for Quantity<T, L, M> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

#[cfg(feature = "serialize")]
mod serialize {
    use super::Quantity;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, L, M> Serialize for Quantity<T, L, M> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.value.serialize(serializer)
        }
    }

    impl<'de, T, L, M> Deserialize<'de> for Quantity<T, L, M> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            f64::deserialize(deserializer).map(Self::new)
        }
    }
}
