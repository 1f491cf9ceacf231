use tracing::trace;

use crate::bodies::Object;
use crate::math::dot;
use crate::units::{Length, Momentum};

/// Coefficient of restitution used for every collision (perfectly elastic)
pub const RESTITUTION: f64 = 1.0;

/// Separations below this are clamped before computing the overlap
pub const SEPARATION_EPSILON: f64 = 1e-9;

/// Resolves a collision between `a` and `b` with a normal impulse.
///
/// Nothing happens when the objects are separating or at rest relative to
/// each other along the contact normal. Otherwise equal and opposite
/// impulses are applied along the normal, and when the objects are closer
/// than `collision_distance` they are pushed apart along it, the lighter
/// object moving further.
///
/// Returns the impulse magnitude, or `None` if no impulse was applied.
pub fn resolve_elastic_collision(
    a: &mut Object,
    b: &mut Object,
    collision_distance: Length,
) -> Option<Momentum> {
    let delta = b.get_position() - a.get_position();
    let distance = Length::new(delta.norm().value.max(SEPARATION_EPSILON));
    let normal = delta.normalize();

    let closing_speed = dot(&(b.get_velocity() - a.get_velocity()), &normal);
    if closing_speed.value >= 0.0 {
        return None;
    }

    let inv_mass_a = a.get_inverse_mass();
    let inv_mass_b = b.get_inverse_mass();
    let impulse: Momentum = closing_speed * -(1.0 + RESTITUTION) / (inv_mass_a + inv_mass_b);

    *a.velocity_mut() -= normal.scaled_by(impulse * inv_mass_a);
    *b.velocity_mut() += normal.scaled_by(impulse * inv_mass_b);

    let overlap = collision_distance - distance;
    if overlap.value > 0.0 {
        let total_mass = a.get_mass() + b.get_mass();
        let share_a = b.get_mass() / total_mass;
        let share_b = a.get_mass() / total_mass;

        *a.position_mut() -= normal.scaled_by(overlap * share_a);
        *b.position_mut() += normal.scaled_by(overlap * share_b);
    }

    trace!(
        impulse = impulse.value,
        overlap = overlap.value,
        "resolved elastic collision"
    );

    Some(impulse)
}
