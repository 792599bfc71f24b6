use crate::error::PhysicsError;
use crate::integration::{EulerIntegrator, Integrator, RungeKuttaIntegrator, SymplecticEulerIntegrator};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Relative denominator below which a step is flagged as degenerate
pub const DEFAULT_DEGENERACY_THRESHOLD: f64 = 1.0e-6;

/// Which integration scheme the simulation driver uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum IntegratorKind {
    /// Semi-implicit Euler, the reference scheme
    #[default]
    SymplecticEuler,

    /// Explicit forward Euler
    Euler,

    /// Classical fourth-order Runge-Kutta
    RungeKutta4,
}

impl IntegratorKind {
    /// Creates the integrator for this kind
    pub fn build(self, degeneracy_threshold: f64) -> Box<dyn Integrator> {
        match self {
            IntegratorKind::SymplecticEuler => {
                Box::new(SymplecticEulerIntegrator::with_degeneracy_threshold(degeneracy_threshold))
            }
            IntegratorKind::Euler => Box::new(EulerIntegrator::with_degeneracy_threshold(degeneracy_threshold)),
            IntegratorKind::RungeKutta4 => {
                Box::new(RungeKuttaIntegrator::with_degeneracy_threshold(degeneracy_threshold))
            }
        }
    }
}

/// Configuration parameters for the simulation driver
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The fixed time step for the simulation
    pub time_step: f64,

    /// The maximum number of fixed steps taken for one frame
    pub max_substeps: u32,

    /// Scale from physical arm lengths to display units
    pub display_scale: f64,

    /// How many positions of the second bob the trace keeps
    pub trace_capacity: usize,

    /// Relative denominator below which a step is reported as degenerate
    pub degeneracy_threshold: f64,

    /// The integration scheme
    pub integrator: IntegratorKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 500.0,
            max_substeps: 64,
            display_scale: 2.0,
            trace_capacity: 2500,
            degeneracy_threshold: DEFAULT_DEGENERACY_THRESHOLD,
            integrator: IntegratorKind::default(),
        }
    }
}

impl SimulationConfig {
    /// Sets the fixed time step
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Sets the fixed time step from a refresh rate in steps per second
    pub fn with_refresh_rate(mut self, hz: f64) -> Self {
        self.time_step = 1.0 / hz;
        self
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    pub fn with_display_scale(mut self, display_scale: f64) -> Self {
        self.display_scale = display_scale;
        self
    }

    pub fn with_trace_capacity(mut self, trace_capacity: usize) -> Self {
        self.trace_capacity = trace_capacity;
        self
    }

    pub fn with_degeneracy_threshold(mut self, threshold: f64) -> Self {
        self.degeneracy_threshold = threshold;
        self
    }

    pub fn with_integrator(mut self, integrator: IntegratorKind) -> Self {
        self.integrator = integrator;
        self
    }

    /// Checks that the configuration can drive a simulation
    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "time step must be positive and finite, got {}",
                self.time_step
            )));
        }
        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidParameter(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        if !(self.display_scale.is_finite() && self.display_scale > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "display scale must be positive and finite, got {}",
                self.display_scale
            )));
        }
        if !(self.degeneracy_threshold.is_finite() && self.degeneracy_threshold >= 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "degeneracy threshold must be non-negative and finite, got {}",
                self.degeneracy_threshold
            )));
        }
        Ok(())
    }
}
