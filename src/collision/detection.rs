use crate::bodies::Object;
use crate::collision::CollisionPair;
use crate::units::Length;

/// Finds every pair of objects whose centers are within `collision_distance`.
///
/// All pairs are tested. Pairs come out in ascending `(a, b)` order, the same
/// order the simulator resolves them in.
pub fn detect_collisions(objects: &[Object], collision_distance: Length) -> Vec<CollisionPair> {
    let mut pairs = Vec::new();

    for i in 0..objects.len() {
        for j in (i + 1)..objects.len() {
            if objects[i].distance_to(&objects[j]) <= collision_distance {
                pairs.push(CollisionPair::new(i, j));
            }
        }
    }

    pairs
}
