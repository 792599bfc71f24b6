use crate::bodies::PendulumState;

/// Mechanical energy of the pendulum, with the pivot at zero height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
}

impl Energy {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Computes the energy of two point masses on rigid massless arms
pub fn energy(state: &PendulumState) -> Energy {
    let m1 = state.bob1.mass;
    let m2 = state.bob2.mass;
    let (l1, l2, g) = (state.l1, state.l2, state.g);
    let (theta1, theta2) = (state.theta1, state.theta2);
    let (omega1, omega2) = (state.omega1, state.omega2);

    let v1_sq = l1 * l1 * omega1 * omega1;
    let v2_sq = v1_sq
        + l2 * l2 * omega2 * omega2
        + 2.0 * l1 * l2 * omega1 * omega2 * (theta1 - theta2).cos();
    let kinetic = 0.5 * m1 * v1_sq + 0.5 * m2 * v2_sq;

    let y1 = -l1 * theta1.cos();
    let y2 = y1 - l2 * theta2.cos();
    let potential = m1 * g * y1 + m2 * g * y2;

    Energy { kinetic, potential }
}
