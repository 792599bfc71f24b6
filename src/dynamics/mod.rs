//! Equations of motion and energy bookkeeping for the double pendulum

mod energy;
mod equations;

pub use self::energy::{energy, Energy};
pub use self::equations::{angular_accelerations, denominator_factor, Accelerations};
