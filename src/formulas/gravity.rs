use crate::constants::G;
use crate::units::{Acceleration, Energy, Force, Length, Mass, Speed};

/// Newtonian attraction between two masses, `G·m1·m2/r²`
pub fn gravitational_force(m1: Mass, m2: Mass, distance: Length) -> Force {
    G * m1 * m2 / (distance * distance)
}

/// Acceleration produced by a mass at a given radius, `G·M/r²`
pub fn gravitational_acceleration(mass: Mass, radius: Length) -> Acceleration {
    G * mass / (radius * radius)
}

/// Gravitational potential energy of a pair, `−G·m1·m2/r`
pub fn gravitational_potential_energy(m1: Mass, m2: Mass, distance: Length) -> Energy {
    -(G * m1 * m2 / distance)
}

/// Speed needed to escape from radius `r` of a body, `√(2·G·M/r)`
pub fn escape_velocity(planet: Mass, radius: Length) -> Speed {
    (G * planet / radius * 2.0).sqrt()
}

/// Speed of a circular orbit at radius `r`, `√(G·M/r)`
pub fn orbital_velocity(planet: Mass, radius: Length) -> Speed {
    (G * planet / radius).sqrt()
}
