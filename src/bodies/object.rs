use crate::bodies::Surface;
use crate::constants::STANDARD_GRAVITY;
use crate::formulas::{gravity, mechanics};
use crate::math::{AccelerationVector, Direction, ForceVector, Position, Vector, Velocity};
use crate::units::{Dimensionless, Energy, Force, InverseMass, Length, Mass, Momentum, Speed, Time};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A point mass with translational kinematic state.
///
/// Objects assume they rest on a horizontal surface under standard gravity
/// when computing support and friction forces. The mass is never validated:
/// a zero or negative mass propagates non-finite values through
/// [`apply_force`](Object::apply_force) and collision resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Object {
    /// The object's mass
    mass: Mass,

    /// Position in world space
    position: Position,

    /// Linear velocity
    velocity: Velocity,

    /// Linear acceleration accumulated for the current step
    acceleration: AccelerationVector,
}

impl Object {
    /// Creates an object at rest at the origin
    pub fn new(mass: Mass) -> Self {
        Self::with_state(mass, Position::zero(), Velocity::zero(), AccelerationVector::zero())
    }

    /// Creates an object with a full kinematic state
    pub fn with_state(
        mass: Mass,
        position: Position,
        velocity: Velocity,
        acceleration: AccelerationVector,
    ) -> Self {
        Self {
            mass,
            position,
            velocity,
            acceleration,
        }
    }

    /// Returns the object moved to `position`
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Returns the object with velocity `velocity`
    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns the object with acceleration `acceleration`
    pub fn with_acceleration(mut self, acceleration: AccelerationVector) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Returns the object's mass
    pub fn get_mass(&self) -> Mass {
        self.mass
    }

    /// Sets the object's mass
    pub fn set_mass(&mut self, mass: Mass) {
        self.mass = mass;
    }

    /// Returns `1 / mass`
    pub fn get_inverse_mass(&self) -> InverseMass {
        Dimensionless::new(1.0) / self.mass
    }

    /// Returns the object's position
    pub fn get_position(&self) -> Position {
        self.position
    }

    /// Returns a mutable reference to the object's position
    pub fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    /// Sets the object's position
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Returns the object's velocity
    pub fn get_velocity(&self) -> Velocity {
        self.velocity
    }

    /// Returns a mutable reference to the object's velocity
    pub fn velocity_mut(&mut self) -> &mut Velocity {
        &mut self.velocity
    }

    /// Sets the object's velocity
    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Returns the object's acceleration
    pub fn get_acceleration(&self) -> AccelerationVector {
        self.acceleration
    }

    /// Returns a mutable reference to the object's acceleration
    pub fn acceleration_mut(&mut self) -> &mut AccelerationVector {
        &mut self.acceleration
    }

    /// Sets the object's acceleration
    pub fn set_acceleration(&mut self, acceleration: AccelerationVector) {
        self.acceleration = acceleration;
    }

    /// Zeroes the accumulated acceleration
    pub fn reset_acceleration(&mut self) {
        self.acceleration = AccelerationVector::zero();
    }

    /// Vertical support (normal) force from the surface the object rests on.
    ///
    /// The effective downward acceleration is standard gravity minus the
    /// object's own vertical acceleration. When the object accelerates upward
    /// at least as fast as gravity pulls it down, nothing presses it into the
    /// surface and the force is zero.
    pub fn support_force(&self) -> ForceVector {
        let effective = STANDARD_GRAVITY - self.acceleration[2];

        if effective.value <= 0.0 {
            return ForceVector::zero();
        }

        Vector::new([Force::ZERO, Force::ZERO, self.mass * effective])
    }

    /// Friction from `surface` opposing the horizontal velocity.
    ///
    /// The vertical component is always zero.
    pub fn friction_force(&self, surface: &Surface) -> ForceVector {
        let horizontal = Velocity::new([self.velocity[0], self.velocity[1], Speed::ZERO]);

        if horizontal.norm().value == 0.0 {
            return ForceVector::zero();
        }

        let normal = self.support_force()[2];
        if normal.value <= 0.0 {
            return ForceVector::zero();
        }

        let magnitude = mechanics::static_friction_max(surface.get_mu(), normal);
        let direction = horizontal.normalize();

        Vector::new([
            -magnitude * direction[0].value,
            -magnitude * direction[1].value,
            Force::ZERO,
        ])
    }

    /// Euclidean distance to another object
    pub fn distance_to(&self, other: &Object) -> Length {
        (other.position - self.position).norm()
    }

    /// Unit vector pointing from this object towards `other`
    pub fn direction_to(&self, other: &Object) -> Direction {
        (other.position - self.position).normalize()
    }

    /// Magnitude of the gravitational attraction between the two objects
    pub fn gravitational_force_magnitude(&self, other: &Object) -> Force {
        gravity::gravitational_force(self.mass, other.mass, self.distance_to(other))
    }

    /// Gravitational force `other` exerts on this object
    pub fn gravitational_force_vector(&self, other: &Object) -> ForceVector {
        self.direction_to(other)
            .scaled_by(self.gravitational_force_magnitude(other))
    }

    /// Adds `force / mass` to the accumulated acceleration
    pub fn apply_force(&mut self, force: ForceVector) {
        self.acceleration += force.divided_by(self.mass);
    }

    /// Integrates acceleration into velocity over `dt`
    pub fn integrate_acceleration(&mut self, dt: Time) {
        self.velocity += self.acceleration.scaled_by(dt);
    }

    /// Integrates velocity into position over `dt`
    pub fn integrate_velocity(&mut self, dt: Time) {
        self.position += self.velocity.scaled_by(dt);
    }

    /// Advances the object by `dt` with semi-implicit Euler: velocity first,
    /// then position from the updated velocity
    pub fn update(&mut self, dt: Time) {
        self.integrate_acceleration(dt);
        self.integrate_velocity(dt);
    }

    /// Kinetic energy of the object
    pub fn kinetic_energy(&self) -> Energy {
        self.mass * self.velocity.dot(&self.velocity) / 2.0
    }

    /// Linear momentum vector of the object
    pub fn momentum(&self) -> Vector<Momentum, 3> {
        self.velocity.scaled_by(self.mass)
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new(Mass::new(1.0))
    }
}
