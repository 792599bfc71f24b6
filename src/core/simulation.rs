use crate::bodies::PendulumState;
use crate::core::{EventQueue, IntegratorKind, SimulationConfig, SimulationEvent, StepReport, Trace};
use crate::dynamics::{energy, Energy};
use crate::error::PhysicsError;
use crate::integration::Integrator;
use crate::math::Vector2;
use crate::Result;

/// Fixed-step driver around a [`PendulumState`].
///
/// A front-end feeds it wall-clock frame deltas through [`Simulation::advance`];
/// the driver turns them into whole steps of `config.time_step`, keeps the
/// elapsed time, a bounded trace of the second bob and a queue of events.
/// Pausing only stops the driver from stepping; the state has no notion of it.
pub struct Simulation {
    /// The pendulum being simulated
    state: PendulumState,

    /// The scheme used to advance the state
    integrator: Box<dyn Integrator>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Queue of simulation events
    events: EventQueue,

    /// Recent positions of the second bob in display units
    trace: Trace,

    /// The total elapsed simulation time
    time: f64,

    /// Frame time not yet consumed by a fixed step
    accumulator: f64,

    /// Number of fixed steps taken since the last reset
    steps: u64,

    playing: bool,
}

impl Simulation {
    /// Creates a paused simulation with default settings
    pub fn new(state: PendulumState) -> Self {
        let config = SimulationConfig::default();
        Self::assemble(state, config)
    }

    /// Creates a paused simulation with the given configuration
    pub fn with_config(state: PendulumState, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(state, config))
    }

    fn assemble(state: PendulumState, config: SimulationConfig) -> Self {
        let integrator = config.integrator.build(config.degeneracy_threshold);
        let trace = Trace::new(config.trace_capacity);
        log::info!(
            "simulation created: integrator {}, time step {}",
            integrator.name(),
            config.time_step
        );

        Self {
            state,
            integrator,
            config,
            events: EventQueue::new(),
            trace,
            time: 0.0,
            accumulator: 0.0,
            steps: 0,
            playing: false,
        }
    }

    /// Consumes a frame delta and takes as many fixed steps as fit.
    ///
    /// Returns the number of steps taken. Nothing happens while paused. At most
    /// `config.max_substeps` steps run per call; any backlog beyond that is
    /// dropped so a slow frame cannot snowball.
    pub fn advance(&mut self, frame_dt: f64) -> Result<usize> {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "frame delta must be non-negative and finite, got {}",
                frame_dt
            )));
        }

        if !self.playing {
            return Ok(0);
        }

        self.accumulator += frame_dt;

        let time_step = self.config.time_step;
        let max_substeps = self.config.max_substeps as usize;
        let mut taken = 0;

        while self.accumulator >= time_step && taken < max_substeps {
            self.accumulator -= time_step;
            self.step_once();
            taken += 1;
        }

        if self.accumulator >= time_step {
            log::trace!(
                "dropping {:.6} of frame time after {} substeps",
                self.accumulator,
                taken
            );
            self.accumulator = 0.0;
        }

        if taken > 0 {
            self.record_trace();
        }

        Ok(taken)
    }

    /// Takes exactly one fixed step, whether or not the simulation is playing
    pub fn tick(&mut self) -> StepReport {
        let report = self.step_once();
        self.record_trace();
        report
    }

    fn step_once(&mut self) -> StepReport {
        let was_finite = self.state.is_finite();
        let dt = self.config.time_step;

        let report = self.integrator.integrate(&mut self.state, dt);
        self.time += dt;
        self.steps += 1;

        if report.is_degenerate() {
            self.events.add_event(SimulationEvent::Degenerate {
                time: self.time,
                denominator_factor: report.denominator_factor,
            });
        }

        if was_finite && report.is_non_finite() {
            log::warn!(
                "pendulum state became non-finite at T = {:.6} after {} steps",
                self.time,
                self.steps
            );
            self.events.add_event(SimulationEvent::NonFinite { time: self.time });
        }

        report
    }

    fn record_trace(&mut self) {
        let (_, p2) = self.joint_positions();
        self.trace.push(p2);
    }

    /// Starts advancing on subsequent calls to [`Simulation::advance`]
    pub fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            self.accumulator = 0.0;
            log::info!("resumed at T = {:.6}", self.time);
            self.events.add_event(SimulationEvent::Resumed { time: self.time });
        }
    }

    /// Stops advancing
    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            log::info!("paused at T = {:.6}", self.time);
            self.events.add_event(SimulationEvent::Paused { time: self.time });
        }
    }

    /// Flips between playing and paused, returning the new playing state
    pub fn toggle_playing(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
        self.playing
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Restarts from new initial conditions, keeping configuration and play state
    pub fn reset(&mut self, state: PendulumState) {
        self.state = state;
        self.time = 0.0;
        self.accumulator = 0.0;
        self.steps = 0;
        self.trace.clear();
        self.events.clear();
    }

    /// Switches the integration scheme; the state is kept
    pub fn set_integrator(&mut self, kind: IntegratorKind) {
        self.config.integrator = kind;
        self.integrator = kind.build(self.config.degeneracy_threshold);
    }

    /// Returns the current simulation time
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the number of fixed steps since the last reset
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    /// Copy of the current state, safe to hand to another thread
    pub fn snapshot(&self) -> PendulumState {
        self.state
    }

    /// Bob positions in display units, using the configured display scale
    pub fn joint_positions(&self) -> (Vector2, Vector2) {
        self.state.joint_positions(self.config.display_scale)
    }

    pub fn energy(&self) -> Energy {
        energy(&self.state)
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Returns a reference to the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Returns a reference to the event queue
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Removes and returns all queued events
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        self.events.drain()
    }
}
