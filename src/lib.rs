//! Dimensioned physical quantities, fixed-size vectors over them, point-mass
//! objects and an N-body simulator with pairwise gravity and elastic collisions.

pub mod units;
pub mod math;
pub mod constants;
pub mod formulas;
pub mod bodies;
pub mod collision;
pub mod core;

/// Re-export common types for easier usage
pub use crate::core::{Simulator, SimulatorConfig};
pub use crate::bodies::{Object, Surface};
pub use crate::math::{dot, norm, normalize, Vector, Vector3};
pub use crate::units::Quantity;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
