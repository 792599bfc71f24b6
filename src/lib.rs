//! Deterministic double pendulum integrator.
//!
//! [`PendulumState`] holds the parameters and the four dynamical scalars and
//! is advanced with [`PendulumState::step`]. Everything a renderer needs comes
//! from [`PendulumState::joint_positions`]. [`Simulation`] is an optional
//! fixed-step driver that keeps time, a trace of the second bob and events.

pub mod math;
pub mod core;
pub mod bodies;
pub mod dynamics;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::bodies::{Bob, PendulumBuilder, PendulumState};
pub use crate::core::{IntegratorKind, Simulation, SimulationConfig, StepFlags, StepReport};
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use crate::bodies::Joint;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("{joint} bob mass must be positive, got {value}")]
        NonPositiveMass { joint: Joint, value: f64 },

        #[error("{joint} arm length must be positive, got {value}")]
        NonPositiveLength { joint: Joint, value: f64 },

        #[error("gravity must not be negative, got {0}")]
        NegativeGravity(f64),

        #[error("parameter `{name}` must be finite, got {value}")]
        NonFiniteParameter { name: &'static str, value: f64 },

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error(
            "pendulum state is not finite (theta1 = {theta1}, theta2 = {theta2}, omega1 = {omega1}, omega2 = {omega2})"
        )]
        NonFiniteState {
            theta1: f64,
            theta2: f64,
            omega1: f64,
            omega2: f64,
        },
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
