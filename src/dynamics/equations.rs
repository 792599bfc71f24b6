use crate::bodies::PendulumState;

/// Angular accelerations of both arms at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accelerations {
    /// Angular acceleration of the first arm
    pub alpha1: f64,

    /// Angular acceleration of the second arm
    pub alpha2: f64,

    /// Shared factor `2*m1 + m2 - m2*cos(2θ1 - 2θ2)` of both denominators
    pub denominator_factor: f64,
}

impl Accelerations {
    /// The denominator factor relative to its largest possible value `2*m1 + 2*m2`.
    ///
    /// It never drops below `m1 / (m1 + m2)`, so it only approaches zero when
    /// the first mass is negligible next to the second.
    pub fn relative_denominator(&self, m1: f64, m2: f64) -> f64 {
        self.denominator_factor / (2.0 * m1 + 2.0 * m2)
    }
}

/// Shared denominator factor of both accelerations.
///
/// Bounded below by `2*m1`, so it is strictly positive whenever `m1 > 0`.
#[inline]
pub fn denominator_factor(m1: f64, m2: f64, theta1: f64, theta2: f64) -> f64 {
    2.0 * m1 + m2 - m2 * (2.0 * theta1 - 2.0 * theta2).cos()
}

/// Evaluates the Lagrangian equations of motion at the current state.
///
/// The grouping of terms is kept exactly: `(n1 + n2 + n3 * n4) / den` for the
/// first arm and `n1 * (n2 + n3 + n4) / den` for the second. Regrouping changes
/// rounding, and a chaotic trajectory amplifies any such change.
pub fn angular_accelerations(state: &PendulumState) -> Accelerations {
    let m1 = state.bob1.mass;
    let m2 = state.bob2.mass;
    let (l1, l2, g) = (state.l1, state.l2, state.g);
    let (theta1, theta2) = (state.theta1, state.theta2);
    let (omega1, omega2) = (state.omega1, state.omega2);

    let delta = theta1 - theta2;
    let factor = denominator_factor(m1, m2, theta1, theta2);

    let num1 = -g * (2.0 * m1 + m2) * theta1.sin();
    let num2 = -m2 * g * (theta1 - 2.0 * theta2).sin();
    let num3 = -2.0 * delta.sin() * m2;
    let num4 = omega2 * omega2 * l2 + omega1 * omega1 * l1 * delta.cos();
    let alpha1 = (num1 + num2 + num3 * num4) / (l1 * factor);

    let num1 = 2.0 * delta.sin();
    let num2 = omega1 * omega1 * l1 * (m1 + m2);
    let num3 = g * (m1 + m2) * theta1.cos();
    let num4 = omega2 * omega2 * l2 * m2 * delta.cos();
    let alpha2 = (num1 * (num2 + num3 + num4)) / (l2 * factor);

    Accelerations {
        alpha1,
        alpha2,
        denominator_factor: factor,
    }
}
