mod integrator;
mod euler;
mod runge_kutta;
mod symplectic_euler;

pub use self::integrator::Integrator;
pub use self::euler::EulerIntegrator;
pub use self::runge_kutta::RungeKuttaIntegrator;
pub use self::symplectic_euler::SymplecticEulerIntegrator;
