use crate::bodies::PendulumState;
use crate::core::{StepReport, DEFAULT_DEGENERACY_THRESHOLD};
use crate::dynamics::{angular_accelerations, Accelerations};
use crate::integration::Integrator;

use nalgebra::Vector4;

/// Fourth-order Runge-Kutta integrator over `[theta1, theta2, omega1, omega2]`
#[derive(Debug, Clone, Copy)]
pub struct RungeKuttaIntegrator {
    degeneracy_threshold: f64,
}

impl RungeKuttaIntegrator {
    /// Creates a new Runge-Kutta integrator
    pub fn new() -> Self {
        Self::with_degeneracy_threshold(DEFAULT_DEGENERACY_THRESHOLD)
    }

    pub fn with_degeneracy_threshold(threshold: f64) -> Self {
        Self {
            degeneracy_threshold: threshold,
        }
    }

    /// Evaluates the time derivative of `y` with the parameters of `template`
    fn derivative(template: &PendulumState, y: &Vector4<f64>) -> (Vector4<f64>, Accelerations) {
        let mut probe = *template;
        probe.theta1 = y[0];
        probe.theta2 = y[1];
        probe.omega1 = y[2];
        probe.omega2 = y[3];

        let accel = angular_accelerations(&probe);
        (Vector4::new(y[2], y[3], accel.alpha1, accel.alpha2), accel)
    }
}

impl Default for RungeKuttaIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for RungeKuttaIntegrator {
    fn integrate(&mut self, state: &mut PendulumState, dt: f64) -> StepReport {
        let y = Vector4::new(state.theta1, state.theta2, state.omega1, state.omega2);

        let (k1, a1) = Self::derivative(state, &y);
        let (k2, a2) = Self::derivative(state, &(y + k1 * (dt * 0.5)));
        let (k3, a3) = Self::derivative(state, &(y + k2 * (dt * 0.5)));
        let (k4, a4) = Self::derivative(state, &(y + k3 * dt));

        let next = y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);
        state.theta1 = next[0];
        state.theta2 = next[1];
        state.omega1 = next[2];
        state.omega2 = next[3];

        // Report the stage closest to the singularity
        let worst = [a2, a3, a4]
            .into_iter()
            .fold(a1, |worst, stage| {
                if stage.denominator_factor < worst.denominator_factor {
                    stage
                } else {
                    worst
                }
            });

        StepReport::evaluate(state, &worst, self.degeneracy_threshold)
    }

    fn name(&self) -> &str {
        "RungeKutta4"
    }
}
