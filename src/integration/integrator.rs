use crate::bodies::PendulumState;
use crate::core::StepReport;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Advances the pendulum state over a time step
    fn integrate(&mut self, state: &mut PendulumState, dt: f64) -> StepReport;

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
