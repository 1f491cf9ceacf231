mod scalar;
mod vector;

pub use scalar::{scalar_value, Scalar};
pub use vector::{
    dot, norm, normalize, AccelerationVector, Direction, ForceVector, Position, Vector, Vector3,
    Velocity,
};

/// Constant for a very small number, used for comparisons
pub const EPSILON: f64 = 1.0e-12;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f64) -> bool {
    a.abs() < EPSILON
}
