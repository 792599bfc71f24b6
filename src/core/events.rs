use crate::bodies::PendulumState;
use crate::dynamics::Accelerations;
use std::collections::VecDeque;

use bitflags::bitflags;

bitflags! {
    /// Conditions observed while taking a single step
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StepFlags: u32 {
        /// The shared denominator of the accelerations was close to zero
        const DEGENERATE_DENOMINATOR = 0x01;

        /// The state holds an infinity or NaN after the step
        const NON_FINITE = 0x02;
    }
}

/// Outcome of one integration step.
///
/// The step itself is never altered; the report only describes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Conditions raised by the step
    pub flags: StepFlags,

    /// Denominator factor `2*m1 + m2 - m2*cos(2θ1 - 2θ2)` used by the step
    pub denominator_factor: f64,

    /// The denominator factor relative to its maximum `2*m1 + 2*m2`
    pub relative_denominator: f64,
}

impl StepReport {
    /// Builds the report for a state that has just been advanced with `accel`
    pub(crate) fn evaluate(state: &PendulumState, accel: &Accelerations, degeneracy_threshold: f64) -> Self {
        let relative_denominator = accel.relative_denominator(state.m1(), state.m2());
        let mut flags = StepFlags::empty();

        if relative_denominator < degeneracy_threshold {
            flags |= StepFlags::DEGENERATE_DENOMINATOR;
            log::debug!(
                "near-singular step: denominator factor {:e} (relative {:e})",
                accel.denominator_factor,
                relative_denominator
            );
        }

        if !state.is_finite() {
            flags |= StepFlags::NON_FINITE;
        }

        Self {
            flags,
            denominator_factor: accel.denominator_factor,
            relative_denominator,
        }
    }

    /// Returns true if the step raised no condition
    pub fn is_clean(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        self.flags.contains(StepFlags::DEGENERATE_DENOMINATOR)
    }

    pub fn is_non_finite(&self) -> bool {
        self.flags.contains(StepFlags::NON_FINITE)
    }
}

/// Something the simulation driver noticed while running
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationEvent {
    /// A step passed close to the singular configuration
    Degenerate {
        /// Simulation time after the step
        time: f64,

        /// Denominator factor observed during the step
        denominator_factor: f64,
    },

    /// The state stopped being finite
    NonFinite {
        /// Simulation time after the offending step
        time: f64,
    },

    /// The driver stopped advancing
    Paused { time: f64 },

    /// The driver started advancing again
    Resumed { time: f64 },
}

/// Types of simulation events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEventType {
    Degenerate,
    NonFinite,
    Paused,
    Resumed,
}

impl SimulationEvent {
    /// Returns the kind of this event
    pub fn event_type(&self) -> SimulationEventType {
        match self {
            SimulationEvent::Degenerate { .. } => SimulationEventType::Degenerate,
            SimulationEvent::NonFinite { .. } => SimulationEventType::NonFinite,
            SimulationEvent::Paused { .. } => SimulationEventType::Paused,
            SimulationEvent::Resumed { .. } => SimulationEventType::Resumed,
        }
    }

    /// Simulation time at which the event happened
    pub fn time(&self) -> f64 {
        match *self {
            SimulationEvent::Degenerate { time, .. }
            | SimulationEvent::NonFinite { time }
            | SimulationEvent::Paused { time }
            | SimulationEvent::Resumed { time } => time,
        }
    }
}

/// A queue of simulation events
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SimulationEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue
    pub fn add_event(&mut self, event: SimulationEvent) {
        self.events.push_back(event);
    }

    /// Gets the next event from the queue
    pub fn next_event(&mut self) -> Option<SimulationEvent> {
        self.events.pop_front()
    }

    /// Removes and returns every queued event, oldest first
    pub fn drain(&mut self) -> Vec<SimulationEvent> {
        self.events.drain(..).collect()
    }

    /// Returns the number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Gets all events of a specific type
    pub fn get_events_of_type(&self, event_type: SimulationEventType) -> Vec<&SimulationEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }
}
