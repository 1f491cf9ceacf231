//! Dimensioned scalar quantities over three base dimensions: time, length and mass.

mod quantity;

pub use self::quantity::Quantity;

use typenum::{N1, N2, P1, P2, P3, Z0};

/// A pure number (all exponents zero)
pub type Dimensionless = Quantity<Z0, Z0, Z0>;

/// Seconds
pub type Time = Quantity<P1, Z0, Z0>;

/// Meters
pub type Length = Quantity<Z0, P1, Z0>;

/// Square meters
pub type Area = Quantity<Z0, P2, Z0>;

/// Kilograms
pub type Mass = Quantity<Z0, Z0, P1>;

/// Reciprocal kilograms, used when combining bodies by inverse mass
pub type InverseMass = Quantity<Z0, Z0, N1>;

/// Meters per second
pub type Speed = Quantity<N1, P1, Z0>;

/// Meters per second squared
pub type Acceleration = Quantity<N2, P1, Z0>;

/// Newtons
pub type Force = Quantity<N2, P1, P1>;

/// Joules
pub type Energy = Quantity<N2, P2, P1>;

/// Kilogram meters per second (also the dimension of an impulse)
pub type Momentum = Quantity<N1, P1, P1>;

/// Dimension of the gravitational constant, m³·kg⁻¹·s⁻²
pub type GravitationalParameter = Quantity<N2, P3, N1>;

/// Creates a [`Time`] in seconds
#[inline]
pub const fn seconds(value: f64) -> Time {
    Time::new(value)
}

/// Creates a [`Length`] in meters
#[inline]
pub const fn meters(value: f64) -> Length {
    Length::new(value)
}

/// Creates a [`Mass`] in kilograms
#[inline]
pub const fn kilograms(value: f64) -> Mass {
    Mass::new(value)
}

/// Creates a [`Speed`] in meters per second
#[inline]
pub const fn meters_per_second(value: f64) -> Speed {
    Speed::new(value)
}

/// Creates an [`Acceleration`] in meters per second squared
#[inline]
pub const fn meters_per_second_squared(value: f64) -> Acceleration {
    Acceleration::new(value)
}

/// Creates a [`Force`] in newtons
#[inline]
pub const fn newtons(value: f64) -> Force {
    Force::new(value)
}

/// Creates an [`Energy`] in joules
#[inline]
pub const fn joules(value: f64) -> Energy {
    Energy::new(value)
}
