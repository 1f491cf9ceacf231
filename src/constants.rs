//! Process-wide physical constants.

use crate::units::{Acceleration, GravitationalParameter};

/// Newtonian gravitational constant, m³·kg⁻¹·s⁻²
pub const G: GravitationalParameter = GravitationalParameter::new(6.67430e-11);

/// Standard acceleration due to gravity at the Earth's surface, m·s⁻²
pub const STANDARD_GRAVITY: Acceleration = Acceleration::new(9.80665);
