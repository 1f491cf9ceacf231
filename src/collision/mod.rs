//! Close-range collision handling between point masses.

mod collision_pair;
mod detection;
mod resolution;

pub use self::collision_pair::CollisionPair;
pub use self::detection::detect_collisions;
pub use self::resolution::{resolve_elastic_collision, RESTITUTION, SEPARATION_EPSILON};
