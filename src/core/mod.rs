pub mod config;
pub mod events;
pub mod scheduler;
mod simulation;
mod trace;

pub use self::config::{IntegratorKind, SimulationConfig, DEFAULT_DEGENERACY_THRESHOLD};
pub use self::events::{EventQueue, SimulationEvent, SimulationEventType, StepFlags, StepReport};
pub use self::scheduler::{step_all, SequentialScheduler, SimulationScheduler};
pub use self::simulation::Simulation;
pub use self::trace::Trace;
