mod bob;
mod pendulum;

pub use self::bob::Bob;
pub use self::pendulum::{PendulumBuilder, PendulumState};

/// Identifies one of the two bobs (or the arm ending at it) in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    /// The bob at the end of the arm attached to the pivot
    First,

    /// The bob at the end of the arm attached to the first bob
    Second,
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Joint::First => write!(f, "first"),
            Joint::Second => write!(f, "second"),
        }
    }
}
