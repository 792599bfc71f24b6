use crate::bodies::PendulumState;
use crate::core::{StepReport, DEFAULT_DEGENERACY_THRESHOLD};
use crate::dynamics::angular_accelerations;
use crate::integration::Integrator;

/// Simple forward Euler integrator.
///
/// Angles advance with the velocities from *before* the step, which makes the
/// energy of a pendulum grow steadily. Kept for comparison runs.
#[derive(Debug, Clone, Copy)]
pub struct EulerIntegrator {
    degeneracy_threshold: f64,
}

impl EulerIntegrator {
    /// Creates a new Euler integrator
    pub fn new() -> Self {
        Self::with_degeneracy_threshold(DEFAULT_DEGENERACY_THRESHOLD)
    }

    pub fn with_degeneracy_threshold(threshold: f64) -> Self {
        Self {
            degeneracy_threshold: threshold,
        }
    }
}

impl Default for EulerIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for EulerIntegrator {
    fn integrate(&mut self, state: &mut PendulumState, dt: f64) -> StepReport {
        let accel = angular_accelerations(state);

        state.theta1 += state.omega1 * dt;
        state.theta2 += state.omega2 * dt;

        state.omega1 += accel.alpha1 * dt;
        state.omega2 += accel.alpha2 * dt;

        StepReport::evaluate(state, &accel, self.degeneracy_threshold)
    }

    fn name(&self) -> &str {
        "Euler"
    }
}
