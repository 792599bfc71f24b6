use pendulum_engine::{
    core::{
        step_all, SequentialScheduler, SimulationEvent, SimulationEventType, SimulationScheduler, Trace,
        DEFAULT_DEGENERACY_THRESHOLD,
    },
    error::PhysicsError,
    IntegratorKind, PendulumState, Simulation, SimulationConfig, Vector2,
};
use approx::assert_relative_eq;

fn binary_step_config() -> SimulationConfig {
    // Power-of-two steps keep the accumulator arithmetic exact
    SimulationConfig::default().with_time_step(0.125)
}

fn pendulum() -> PendulumState {
    PendulumState::builder().masses(5.0, 1.0).build().unwrap()
}

#[test]
fn test_default_config() {
    let config = SimulationConfig::default();

    assert_eq!(config.time_step, 1.0 / 500.0);
    assert_eq!(config.max_substeps, 64);
    assert_eq!(config.display_scale, 2.0);
    assert_eq!(config.trace_capacity, 2500);
    assert_eq!(config.degeneracy_threshold, DEFAULT_DEGENERACY_THRESHOLD);
    assert_eq!(config.integrator, IntegratorKind::SymplecticEuler);
    assert!(config.validate().is_ok());
    assert_eq!(SimulationConfig::default().with_refresh_rate(250.0).time_step, 1.0 / 250.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let zero_step = SimulationConfig::default().with_time_step(0.0);
    assert!(matches!(zero_step.validate(), Err(PhysicsError::InvalidParameter(_))));

    let no_substeps = SimulationConfig::default().with_max_substeps(0);
    assert!(Simulation::with_config(pendulum(), no_substeps).is_err());

    let bad_scale = SimulationConfig::default().with_display_scale(f64::NAN);
    assert!(bad_scale.validate().is_err());
}

#[test]
fn test_paused_simulation_does_not_advance() {
    let mut sim = Simulation::new(pendulum());

    assert!(!sim.is_playing());
    assert_eq!(sim.advance(1.0).unwrap(), 0);
    assert_eq!(sim.time(), 0.0);
    assert_eq!(*sim.state(), pendulum());
    assert!(sim.trace().is_empty());
}

#[test]
fn test_fixed_step_accumulator() {
    let mut sim = Simulation::with_config(pendulum(), binary_step_config()).unwrap();
    sim.play();

    assert_eq!(sim.advance(1.0).unwrap(), 8);
    assert_eq!(sim.time(), 1.0);
    assert_eq!(sim.step_count(), 8);

    // Half a step carries over to the next frame
    assert_eq!(sim.advance(0.0625).unwrap(), 0);
    assert_eq!(sim.advance(0.0625).unwrap(), 1);
    assert_eq!(sim.time(), 1.125);
}

#[test]
fn test_advance_records_one_trace_point_per_frame() {
    let mut sim = Simulation::with_config(pendulum(), binary_step_config()).unwrap();
    sim.play();

    assert_eq!(sim.advance(1.0).unwrap(), 8);
    assert_eq!(sim.trace().len(), 1);
    assert_eq!(sim.trace().latest(), Some(sim.joint_positions().1));

    // A frame too short for a whole step leaves the trace alone
    assert_eq!(sim.advance(0.0625).unwrap(), 0);
    assert_eq!(sim.trace().len(), 1);

    assert_eq!(sim.advance(0.0625).unwrap(), 1);
    assert_eq!(sim.trace().len(), 2);
    assert_eq!(sim.trace().latest(), Some(sim.joint_positions().1));
}

#[test]
fn test_accumulator_tracks_elapsed_time_over_many_frames() {
    let mut sim = Simulation::new(pendulum());
    sim.play();

    for _ in 0..1000 {
        let taken = sim.advance(1.0 / 60.0).unwrap();
        // 500 Hz over 60 Hz frames: 8 or 9 steps depending on carry
        assert!((8..=9).contains(&taken), "{} steps in one frame", taken);
    }

    let ideal = (1000.0 / 60.0 * 500.0f64).floor() as i64;
    assert!((sim.step_count() as i64 - ideal).abs() <= 1);
}

#[test]
fn test_max_substeps_drops_backlog() {
    let config = binary_step_config().with_max_substeps(4);
    let mut sim = Simulation::with_config(pendulum(), config).unwrap();
    sim.play();

    assert_eq!(sim.advance(2.0).unwrap(), 4);
    assert_eq!(sim.time(), 0.5);
    assert_eq!(sim.advance(0.0).unwrap(), 0);
}

#[test]
fn test_invalid_frame_delta_is_rejected() {
    let mut sim = Simulation::new(pendulum());
    sim.play();

    assert!(matches!(sim.advance(-0.1), Err(PhysicsError::InvalidParameter(_))));
    assert!(sim.advance(f64::NAN).is_err());
    assert_eq!(sim.time(), 0.0);
}

#[test]
fn test_simulation_matches_manual_stepping() {
    let mut sim = Simulation::new(pendulum());
    let mut manual = pendulum();

    for _ in 0..500 {
        sim.tick();
        manual.step(1.0 / 500.0);
    }

    assert_eq!(sim.snapshot(), manual);
    assert_relative_eq!(sim.time(), 1.0, max_relative = 1.0e-12);
}

#[test]
fn test_trace_is_bounded() {
    let config = SimulationConfig::default().with_trace_capacity(3);
    let mut sim = Simulation::with_config(pendulum(), config).unwrap();

    for _ in 0..10 {
        sim.tick();
    }

    assert_eq!(sim.trace().len(), 3);
    assert_eq!(sim.trace().capacity(), 3);
    assert_eq!(sim.trace().latest(), Some(sim.joint_positions().1));
    assert_eq!(sim.trace().to_flat_vertices().len(), 6);
}

#[test]
fn test_trace_evicts_oldest() {
    let mut trace = Trace::new(2);
    trace.push(Vector2::new(1.0, 1.0));
    trace.push(Vector2::new(2.0, 2.0));
    trace.push(Vector2::new(3.0, 3.0));

    let points: Vec<Vector2> = trace.iter().copied().collect();
    assert_eq!(points, vec![Vector2::new(2.0, 2.0), Vector2::new(3.0, 3.0)]);

    let mut empty = Trace::new(0);
    empty.push(Vector2::zero());
    assert!(empty.is_empty());
}

#[test]
fn test_toggle_records_events() {
    let mut sim = Simulation::new(pendulum());

    assert!(sim.toggle_playing());
    assert!(!sim.toggle_playing());

    let events = sim.drain_events();
    assert_eq!(
        events,
        vec![
            SimulationEvent::Resumed { time: 0.0 },
            SimulationEvent::Paused { time: 0.0 },
        ]
    );
    assert!(sim.events().is_empty());
}

#[test]
fn test_degenerate_steps_are_recorded() {
    let fragile = PendulumState::builder()
        .masses(1.0e-12, 1.0)
        .lengths(1.0, 1.0)
        .gravity(9.8)
        .angles(0.5, 0.5 - 1.0e-6)
        .build()
        .unwrap();
    let config = SimulationConfig::default().with_time_step(1.0e-6);
    let mut sim = Simulation::with_config(fragile, config).unwrap();

    let report = sim.tick();
    assert!(report.is_degenerate());
    assert_eq!(sim.events().get_events_of_type(SimulationEventType::Degenerate).len(), 1);
}

#[test]
fn test_non_finite_state_is_reported_once() {
    let runaway = PendulumState::builder()
        .angles(0.5, 0.3)
        .angular_velocities(1.0e200, 1.0e200)
        .build()
        .unwrap();
    let mut sim = Simulation::new(runaway);

    for _ in 0..3 {
        sim.tick();
    }

    assert!(!sim.state().is_finite());
    assert_eq!(sim.events().get_events_of_type(SimulationEventType::NonFinite).len(), 1);
}

#[test]
fn test_reset_restarts_clock_and_trace() {
    let mut sim = Simulation::new(pendulum());
    sim.play();
    sim.advance(0.1).unwrap();
    assert!(sim.time() > 0.0);

    let fresh = PendulumState::builder().angles(0.1, 0.2).build().unwrap();
    sim.reset(fresh);

    assert_eq!(sim.time(), 0.0);
    assert_eq!(sim.step_count(), 0);
    assert!(sim.trace().is_empty());
    assert_eq!(*sim.state(), fresh);
    assert!(sim.is_playing());
}

#[test]
fn test_switching_integrator() {
    let mut sim = Simulation::new(pendulum());
    assert_eq!(sim.integrator_name(), "SymplecticEuler");

    sim.set_integrator(IntegratorKind::RungeKutta4);
    assert_eq!(sim.integrator_name(), "RungeKutta4");
    assert_eq!(sim.config().integrator, IntegratorKind::RungeKutta4);

    let before = sim.energy().total();
    for _ in 0..500 {
        sim.tick();
    }
    assert_relative_eq!(sim.energy().total(), before, max_relative = 1.0e-6);
}

#[test]
fn test_batch_stepping_matches_individual_steps() {
    let mut batch: Vec<PendulumState> = (0..16)
        .map(|i| {
            PendulumState::builder()
                .angles(0.1 * i as f64, -0.05 * i as f64)
                .build()
                .unwrap()
        })
        .collect();
    let mut individual = batch.clone();
    let mut sequential = batch.clone();

    for _ in 0..200 {
        let reports = step_all(&mut batch, 1.0e-3);
        assert_eq!(reports.len(), 16);
        SequentialScheduler.step_all(&mut sequential, 1.0e-3);
        for state in individual.iter_mut() {
            state.step(1.0e-3);
        }
    }

    assert_eq!(batch, individual);
    assert_eq!(sequential, individual);
    assert!(step_all(&mut [], 1.0e-3).is_empty());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_scheduler_with_uneven_chunks() {
    use pendulum_engine::core::scheduler::parallel::ParallelScheduler;

    let mut parallel: Vec<PendulumState> = (0..7)
        .map(|i| PendulumState::builder().angles(0.3 * i as f64, 0.2).build().unwrap())
        .collect();
    let mut sequential = parallel.clone();

    ParallelScheduler::new(3).step_all(&mut parallel, 1.0e-3);
    SequentialScheduler.step_all(&mut sequential, 1.0e-3);

    assert_eq!(parallel, sequential);
}
