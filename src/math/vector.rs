use nalgebra as na;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::PhysicsError;
use crate::math::Scalar;
use crate::units::{Acceleration, Dimensionless, Force, Length, Speed};
use crate::Result;

/// A fixed-size vector of numbers or dimensioned quantities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

/// The three-component vector used for all kinematic state
pub type Vector3<T> = Vector<T, 3>;

/// A position in space
pub type Position = Vector3<Length>;

/// A linear velocity
pub type Velocity = Vector3<Speed>;

/// A linear acceleration
pub type AccelerationVector = Vector3<Acceleration>;

/// A force
pub type ForceVector = Vector3<Force>;

/// A dimensionless direction, usually of unit length
pub type Direction = Vector3<Dimensionless>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    // Evaluated at compile time for every `N` that reaches `first`/`last`
    const NON_EMPTY: () = assert!(N > 0, "vector has no components");

    /// Creates a vector from its components
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Creates a vector with all components set to zero
    #[inline]
    pub fn zero() -> Self {
        Self::filled(T::zero())
    }

    /// Creates a vector with all components set to `value`
    #[inline]
    pub fn filled(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Creates a vector from a slice that must hold exactly `N` elements
    pub fn from_slice(values: &[T]) -> Result<Self> {
        <[T; N]>::try_from(values)
            .map(Self::new)
            .map_err(|_| length_mismatch::<N>(values.len()))
    }

    /// Returns the number of components
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns a reference to the component at `index`, if any
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns a mutable reference to the component at `index`, if any
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Returns the first component.
    ///
    /// Only available for non-empty vectors:
    ///
    /// ```compile_fail
    /// use point_mechanics::Vector;
    ///
    /// let empty = Vector::<f64, 0>::new([]);
    /// let _ = empty.first();
    /// ```
    #[inline]
    pub fn first(&self) -> &T {
        let () = Self::NON_EMPTY;
        &self.data[0]
    }

    /// Returns the first component mutably
    #[inline]
    pub fn first_mut(&mut self) -> &mut T {
        let () = Self::NON_EMPTY;
        &mut self.data[0]
    }

    /// Returns the last component
    #[inline]
    pub fn last(&self) -> &T {
        let () = Self::NON_EMPTY;
        &self.data[N - 1]
    }

    /// Returns the last component mutably
    #[inline]
    pub fn last_mut(&mut self) -> &mut T {
        let () = Self::NON_EMPTY;
        &mut self.data[N - 1]
    }

    /// Sets every component to `value`
    pub fn fill(&mut self, value: T) {
        self.data = [value; N];
    }

    /// Iterates over the components
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the components
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns the components as an array
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Consumes the vector and returns its components
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Returns the raw values of the components, dropping the dimension
    #[inline]
    pub fn values(&self) -> [f64; N] {
        self.data.map(T::value)
    }

    /// Returns true if every component is approximately zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| crate::math::approx_zero(x.value()))
    }

    /// Multiplies every component by a number or quantity, combining dimensions
    #[inline]
    pub fn scaled_by<S>(&self, factor: S) -> Vector<<T as Mul<S>>::Output, N>
    where
        S: Copy,
        T: Mul<S>,
        <T as Mul<S>>::Output: Scalar,
    {
        Vector::new(self.data.map(|x| x * factor))
    }

    /// Divides every component by a number or quantity, combining dimensions
    #[inline]
    pub fn divided_by<S>(&self, divisor: S) -> Vector<<T as Div<S>>::Output, N>
    where
        S: Copy,
        T: Div<S>,
        <T as Div<S>>::Output: Scalar,
    {
        Vector::new(self.data.map(|x| x / divisor))
    }

    /// Computes the dot product with another vector, see [`dot`]
    #[inline]
    pub fn dot<U>(&self, other: &Vector<U, N>) -> <T as Mul<U>>::Output
    where
        U: Scalar,
        T: Mul<U>,
        <T as Mul<U>>::Output: Scalar,
    {
        dot(self, other)
    }

    /// Returns the Euclidean length in the components' dimension, see [`norm`]
    #[inline]
    pub fn norm(&self) -> T
    where
        T: Mul<T>,
        <T as Mul<T>>::Output: Scalar,
    {
        norm(self)
    }

    /// Returns a dimensionless unit vector, see [`normalize`]
    #[inline]
    pub fn normalize(&self) -> Vector<Dimensionless, N>
    where
        T: Mul<T>,
        <T as Mul<T>>::Output: Scalar,
    {
        normalize(self)
    }

    /// Convert the raw values to a nalgebra vector
    pub fn to_nalgebra(&self) -> na::SVector<f64, N> {
        na::SVector::from(self.values())
    }

    /// Convert from a nalgebra vector of raw values
    pub fn from_nalgebra(v: &na::SVector<f64, N>) -> Self {
        Self::new(std::array::from_fn(|i| T::from_value(v[i])))
    }
}

fn length_mismatch<const N: usize>(actual: usize) -> PhysicsError {
    PhysicsError::InvalidParameter(format!(
        "vector length must be exactly {}, got {}",
        N, actual
    ))
}

/// Sums the elementwise products of two vectors.
///
/// The result carries the product dimension: the dot product of two length
/// vectors is an area.
pub fn dot<A, B, const N: usize>(a: &Vector<A, N>, b: &Vector<B, N>) -> <A as Mul<B>>::Output
where
    A: Scalar + Mul<B>,
    B: Scalar,
    <A as Mul<B>>::Output: Scalar,
{
    a.data
        .iter()
        .zip(b.data.iter())
        .fold(<<A as Mul<B>>::Output as Scalar>::zero(), |sum, (&x, &y)| {
            sum + x * y
        })
}

/// Euclidean length of a vector, expressed in the dimension of its components.
///
/// The square root of the squared dimension collapses back to the component
/// dimension, so the raw value is rewrapped rather than computed through
/// [`Quantity::sqrt`](crate::units::Quantity::sqrt).
pub fn norm<T, const N: usize>(v: &Vector<T, N>) -> T
where
    T: Scalar + Mul<T>,
    <T as Mul<T>>::Output: Scalar,
{
    T::from_value(dot(v, v).value().sqrt())
}

/// Divides each component's raw value by the norm's raw value.
///
/// The result is always dimensionless. A zero vector normalizes to a zero
/// vector instead of dividing by zero.
pub fn normalize<T, const N: usize>(v: &Vector<T, N>) -> Vector<Dimensionless, N>
where
    T: Scalar + Mul<T>,
    <T as Mul<T>>::Output: Scalar,
{
    let length = norm(v).value();

    Vector::new(v.data.map(|x| {
        if length != 0.0 {
            Dimensionless::new(x.value() / length)
        } else {
            Dimensionless::ZERO
        }
    }))
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.data
    }
}

impl<'a, T: Scalar, const N: usize> TryFrom<&'a [T]> for Vector<T, N> {
    type Error = PhysicsError;

    fn try_from(values: &'a [T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = PhysicsError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        let len = values.len();
        <[T; N]>::try_from(values)
            .map(Self::new)
            .map_err(|_| length_mismatch::<N>(len))
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

// Operator implementations

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self;
        result += rhs;
        result
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self;
        result -= rhs;
        result
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (x, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x = *x + y;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (x, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x = *x - y;
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(self.data.map(|x| -x))
    }
}

impl<T: Scalar, const N: usize> Mul<f64> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.data.map(|x| x * rhs))
    }
}

impl<T: Scalar, const N: usize> Div<f64> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.data.map(|x| x / rhs))
    }
}

impl<T: Scalar, const N: usize> MulAssign<f64> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign<f64> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "serialize")]
mod serialize {
    use super::Vector;
    use crate::math::Scalar;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Scalar + Serialize, const N: usize> Serialize for Vector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let values = Vec::<T>::deserialize(deserializer)?;
            Self::try_from(values).map_err(D::Error::custom)
        }
    }
}
