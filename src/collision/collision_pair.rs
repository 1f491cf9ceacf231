/// A pair of objects, identified by their index in the simulator's collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The lower index
    pub a: usize,

    /// The higher index
    pub b: usize,
}

impl CollisionPair {
    /// Creates a new collision pair
    pub fn new(a: usize, b: usize) -> Self {
        // Always sort the indices to ensure consistent ordering
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }
}
