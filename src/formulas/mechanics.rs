use crate::units::{Acceleration, Dimensionless, Energy, Force, Length, Mass, Momentum, Speed, Time};

/// Kinetic energy, `m·v²/2`
pub fn kinetic_energy(mass: Mass, speed: Speed) -> Energy {
    mass * speed * speed / 2.0
}

/// Potential energy in a uniform field, `m·g·h`
pub fn potential_energy(mass: Mass, g: Acceleration, height: Length) -> Energy {
    mass * g * height
}

/// Newton's second law, `F = m·a`
pub fn newton_second_law(mass: Mass, acceleration: Acceleration) -> Force {
    mass * acceleration
}

/// Average speed over a distance, `d/t`
pub fn average_speed(distance: Length, time: Time) -> Speed {
    distance / time
}

/// Position after moving at constant speed, `x0 + v·t`
pub fn uniform_motion(initial: Length, speed: Speed, time: Time) -> Length {
    initial + speed * time
}

/// Position under constant acceleration, `x0 + v0·t + a·t²/2`
pub fn accelerated_motion(
    initial: Length,
    initial_speed: Speed,
    acceleration: Acceleration,
    time: Time,
) -> Length {
    initial + initial_speed * time + acceleration * time * time / 2.0
}

/// Linear momentum, `m·v`
pub fn momentum(mass: Mass, speed: Speed) -> Momentum {
    mass * speed
}

/// Work done by a force along a displacement, using magnitudes only
pub fn work(force: Force, displacement: Length) -> Energy {
    force * displacement
}

/// Kinetic friction force, `μ·N`
pub fn friction(coefficient: Dimensionless, normal_force: Force) -> Force {
    coefficient * normal_force
}

/// Maximum static friction before sliding starts, `μs·N`
pub fn static_friction_max(coefficient: Dimensionless, normal_force: Force) -> Force {
    coefficient * normal_force
}
