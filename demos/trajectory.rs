//! Runs the reference double pendulum headless and logs where the bobs go.
//!
//! `RUST_LOG=debug cargo run --example trajectory` also shows near-singular steps.

use pendulum_engine::{PendulumState, Simulation, SimulationConfig};

fn main() -> pendulum_engine::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = PendulumState::builder().masses(5.0, 1.0).build()?;
    let mut sim = Simulation::with_config(state, SimulationConfig::default())?;
    sim.play();

    let initial_energy = sim.energy().total();
    let frame_dt = 1.0 / 60.0;

    for frame in 0..600 {
        sim.advance(frame_dt)?;

        if frame % 60 == 0 {
            let (p1, p2) = sim.joint_positions();
            let (theta1, theta2) = sim.state().angles();
            log::info!(
                "T = {:.6}  theta = ({:.4}, {:.4})  bob1 = {}  bob2 = {}",
                sim.time(),
                theta1,
                theta2,
                p1,
                p2
            );
        }
    }

    let drift = (sim.energy().total() - initial_energy) / initial_energy.abs();
    log::info!(
        "{} steps, {} trace points, relative energy drift {:.3e}",
        sim.step_count(),
        sim.trace().len(),
        drift
    );

    for event in sim.drain_events() {
        log::debug!("{:?}", event);
    }

    sim.state().check_finite()
}
