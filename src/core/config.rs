use crate::units::Length;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the simulator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulatorConfig {
    /// Whether objects attract each other gravitationally
    pub gravity_enabled: bool,

    /// Center distance at or below which two objects collide
    pub collision_distance: Length,
}

impl SimulatorConfig {
    /// Creates a configuration with gravity enabled and the given collision distance
    pub fn with_collision_distance(collision_distance: Length) -> Self {
        Self {
            collision_distance,
            ..Self::default()
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            gravity_enabled: true,
            collision_distance: Length::ZERO,
        }
    }
}
