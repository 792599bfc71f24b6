use crate::bodies::PendulumState;
use crate::core::{StepReport, DEFAULT_DEGENERACY_THRESHOLD};
use crate::dynamics::angular_accelerations;
use crate::integration::Integrator;

/// Symplectic Euler integrator (semi-implicit Euler)
/// More stable than explicit Euler for physics simulations
#[derive(Debug, Clone, Copy)]
pub struct SymplecticEulerIntegrator {
    degeneracy_threshold: f64,
}

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self::with_degeneracy_threshold(DEFAULT_DEGENERACY_THRESHOLD)
    }

    /// Creates an integrator that flags steps whose relative denominator falls below `threshold`
    pub fn with_degeneracy_threshold(threshold: f64) -> Self {
        Self {
            degeneracy_threshold: threshold,
        }
    }
}

impl Default for SymplecticEulerIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&mut self, state: &mut PendulumState, dt: f64) -> StepReport {
        // Accelerations come from the angles before this step
        let accel = angular_accelerations(state);

        state.omega1 += accel.alpha1 * dt;
        state.omega2 += accel.alpha2 * dt;

        // Angles move with the *new* velocities
        state.theta1 += state.omega1 * dt;
        state.theta2 += state.omega2 * dt;

        StepReport::evaluate(state, &accel, self.degeneracy_threshold)
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}
