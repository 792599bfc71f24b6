use crate::bodies::{Bob, Joint};
use crate::core::StepReport;
use crate::error::PhysicsError;
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::math::Vector2;
use crate::Result;

use std::f64::consts::PI;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Physical state of a double pendulum.
///
/// Angles are measured from the downward vertical: `theta1` at the pivot,
/// `theta2` at the first bob. They are never wrapped, so they grow without
/// bound as the arms spin over. The struct is `Copy`; a copy is a snapshot.
///
/// The only way to change the dynamical scalars after construction is to
/// step the state with an [`Integrator`].
///
/// Deserialization goes through [`PendulumBuilder::build`], so a stored state
/// is validated exactly like a freshly built one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "PendulumBuilder")
)]
pub struct PendulumState {
    pub(crate) bob1: Bob,
    pub(crate) bob2: Bob,
    pub(crate) l1: f64,
    pub(crate) l2: f64,
    pub(crate) g: f64,
    pub(crate) pivot: Vector2,
    pub(crate) theta1: f64,
    pub(crate) theta2: f64,
    pub(crate) omega1: f64,
    pub(crate) omega2: f64,
}

impl PendulumState {
    /// Creates a pendulum at rest with the default starting angles (π/4, π/3)
    pub fn new(bob1: Bob, bob2: Bob, l1: f64, l2: f64, g: f64) -> Result<Self> {
        Self::builder()
            .bob1(bob1)
            .bob2(bob2)
            .lengths(l1, l2)
            .gravity(g)
            .build()
    }

    /// Starts a builder preloaded with the reference configuration
    pub fn builder() -> PendulumBuilder {
        PendulumBuilder::default()
    }

    /// Advances the state by `dt` with semi-implicit Euler.
    ///
    /// Velocities are updated from accelerations at the current angles, then
    /// the angles are updated from the new velocities. The numeric result is
    /// never corrected; inspect the report for degeneracy or a non-finite state.
    pub fn step(&mut self, dt: f64) -> StepReport {
        SymplecticEulerIntegrator::new().integrate(self, dt)
    }

    /// Returns the state one step of `dt` ahead, leaving `self` untouched
    pub fn stepped(mut self, dt: f64) -> (Self, StepReport) {
        let report = self.step(dt);
        (self, report)
    }

    /// Positions of the first and second bob.
    ///
    /// `display_scale` converts arm lengths into the caller's units; pass 1.0
    /// for physical coordinates relative to the pivot.
    pub fn joint_positions(&self, display_scale: f64) -> (Vector2, Vector2) {
        let p1 = self.pivot + Vector2::from_hanging_angle(self.theta1) * (self.l1 * display_scale);
        let p2 = p1 + Vector2::from_hanging_angle(self.theta2) * (self.l2 * display_scale);
        (p1, p2)
    }

    /// Returns true if every angle and angular velocity is finite
    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite()
            && self.theta2.is_finite()
            && self.omega1.is_finite()
            && self.omega2.is_finite()
    }

    /// Fails with [`PhysicsError::NonFiniteState`] if the state has run away
    pub fn check_finite(&self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(PhysicsError::NonFiniteState {
                theta1: self.theta1,
                theta2: self.theta2,
                omega1: self.omega1,
                omega2: self.omega2,
            })
        }
    }

    pub fn theta1(&self) -> f64 {
        self.theta1
    }

    pub fn theta2(&self) -> f64 {
        self.theta2
    }

    pub fn omega1(&self) -> f64 {
        self.omega1
    }

    pub fn omega2(&self) -> f64 {
        self.omega2
    }

    /// Both angles as `(theta1, theta2)`
    pub fn angles(&self) -> (f64, f64) {
        (self.theta1, self.theta2)
    }

    /// Both angular velocities as `(omega1, omega2)`
    pub fn angular_velocities(&self) -> (f64, f64) {
        (self.omega1, self.omega2)
    }

    pub fn m1(&self) -> f64 {
        self.bob1.mass
    }

    pub fn m2(&self) -> f64 {
        self.bob2.mass
    }

    pub fn l1(&self) -> f64 {
        self.l1
    }

    pub fn l2(&self) -> f64 {
        self.l2
    }

    pub fn r1(&self) -> f64 {
        self.bob1.radius
    }

    pub fn r2(&self) -> f64 {
        self.bob2.radius
    }

    pub fn bob1(&self) -> Bob {
        self.bob1
    }

    pub fn bob2(&self) -> Bob {
        self.bob2
    }

    /// Gravitational acceleration
    pub fn gravity(&self) -> f64 {
        self.g
    }

    /// Fixed anchor of the first arm
    pub fn pivot(&self) -> Vector2 {
        self.pivot
    }
}

/// Builder for [`PendulumState`].
///
/// Defaults: both masses 1, both arms 100, radii 20, g = 980, angles π/4 and
/// π/3, at rest, pivot at the origin.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Deserialize))]
pub struct PendulumBuilder {
    bob1: Bob,
    bob2: Bob,
    l1: f64,
    l2: f64,
    g: f64,
    pivot: Vector2,
    theta1: f64,
    theta2: f64,
    omega1: f64,
    omega2: f64,
}

impl Default for PendulumBuilder {
    fn default() -> Self {
        Self {
            bob1: Bob::default(),
            bob2: Bob::default(),
            l1: 100.0,
            l2: 100.0,
            g: 980.0,
            pivot: Vector2::zero(),
            theta1: PI / 4.0,
            theta2: PI / 3.0,
            omega1: 0.0,
            omega2: 0.0,
        }
    }
}

impl PendulumBuilder {
    pub fn bob1(mut self, bob: Bob) -> Self {
        self.bob1 = bob;
        self
    }

    pub fn bob2(mut self, bob: Bob) -> Self {
        self.bob2 = bob;
        self
    }

    /// Sets both masses, keeping the radii
    pub fn masses(mut self, m1: f64, m2: f64) -> Self {
        self.bob1.mass = m1;
        self.bob2.mass = m2;
        self
    }

    /// Sets both display radii, keeping the masses
    pub fn radii(mut self, r1: f64, r2: f64) -> Self {
        self.bob1.radius = r1;
        self.bob2.radius = r2;
        self
    }

    /// Sets the arm lengths (pivot to first bob, first bob to second bob)
    pub fn lengths(mut self, l1: f64, l2: f64) -> Self {
        self.l1 = l1;
        self.l2 = l2;
        self
    }

    pub fn gravity(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    pub fn pivot(mut self, pivot: impl Into<Vector2>) -> Self {
        self.pivot = pivot.into();
        self
    }

    /// Sets the starting angles in radians from the downward vertical
    pub fn angles(mut self, theta1: f64, theta2: f64) -> Self {
        self.theta1 = theta1;
        self.theta2 = theta2;
        self
    }

    /// Sets the starting angular velocities
    pub fn angular_velocities(mut self, omega1: f64, omega2: f64) -> Self {
        self.omega1 = omega1;
        self.omega2 = omega2;
        self
    }

    /// Validates the parameters and creates the state
    pub fn build(self) -> Result<PendulumState> {
        let finite_checks = [
            ("m1", self.bob1.mass),
            ("m2", self.bob2.mass),
            ("r1", self.bob1.radius),
            ("r2", self.bob2.radius),
            ("l1", self.l1),
            ("l2", self.l2),
            ("g", self.g),
            ("pivot.x", self.pivot.x),
            ("pivot.y", self.pivot.y),
            ("theta1", self.theta1),
            ("theta2", self.theta2),
            ("omega1", self.omega1),
            ("omega2", self.omega2),
        ];
        for (name, value) in finite_checks {
            if !value.is_finite() {
                return Err(PhysicsError::NonFiniteParameter { name, value });
            }
        }

        for (joint, bob) in [(Joint::First, self.bob1), (Joint::Second, self.bob2)] {
            if bob.mass <= 0.0 {
                return Err(PhysicsError::NonPositiveMass { joint, value: bob.mass });
            }
            if bob.radius < 0.0 {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} bob radius must not be negative, got {}",
                    joint, bob.radius
                )));
            }
        }

        for (joint, length) in [(Joint::First, self.l1), (Joint::Second, self.l2)] {
            if length <= 0.0 {
                return Err(PhysicsError::NonPositiveLength { joint, value: length });
            }
        }

        if self.g < 0.0 {
            return Err(PhysicsError::NegativeGravity(self.g));
        }

        Ok(PendulumState {
            bob1: self.bob1,
            bob2: self.bob2,
            l1: self.l1,
            l2: self.l2,
            g: self.g,
            pivot: self.pivot,
            theta1: self.theta1,
            theta2: self.theta2,
            omega1: self.omega1,
            omega2: self.omega2,
        })
    }
}

impl TryFrom<PendulumBuilder> for PendulumState {
    type Error = PhysicsError;

    fn try_from(builder: PendulumBuilder) -> Result<Self> {
        builder.build()
    }
}
