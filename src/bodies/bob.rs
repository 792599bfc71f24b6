#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A point mass hanging at the end of an arm
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Bob {
    /// Mass of the bob
    pub mass: f64,

    /// Display radius; plays no part in the dynamics
    pub radius: f64,
}

impl Bob {
    /// Creates a new bob with the specified mass and display radius
    pub fn new(mass: f64, radius: f64) -> Self {
        Self { mass, radius }
    }

    /// Creates a bob with the given mass and no display radius
    pub fn point(mass: f64) -> Self {
        Self { mass, radius: 0.0 }
    }
}

impl Default for Bob {
    fn default() -> Self {
        Self {
            mass: 1.0,
            radius: 20.0,
        }
    }
}
