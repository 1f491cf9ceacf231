use crate::units::Dimensionless;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A horizontal surface objects can slide on
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Surface {
    /// Combined static/kinetic friction coefficient
    mu: Dimensionless,
}

impl Surface {
    /// Creates a surface with the given friction coefficient
    pub const fn new(mu: Dimensionless) -> Self {
        Self { mu }
    }

    /// Returns the friction coefficient
    pub fn get_mu(&self) -> Dimensionless {
        self.mu
    }

    /// Creates an ice surface (very low friction)
    pub const fn ice() -> Self {
        Self::new(Dimensionless::new(0.05))
    }

    /// Creates a rubber surface (high friction)
    pub const fn rubber() -> Self {
        Self::new(Dimensionless::new(0.8))
    }

    /// Creates a wooden surface (medium friction)
    pub const fn wood() -> Self {
        Self::new(Dimensionless::new(0.6))
    }

    /// Creates a metal surface (medium friction)
    pub const fn metal() -> Self {
        Self::new(Dimensionless::new(0.4))
    }

    /// Creates a concrete surface (high friction)
    pub const fn concrete() -> Self {
        Self::new(Dimensionless::new(0.9))
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(Dimensionless::new(1.0))
    }
}
