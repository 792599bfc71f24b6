use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pendulum_engine::core::step_all;
use pendulum_engine::integration::{Integrator, RungeKuttaIntegrator};
use pendulum_engine::PendulumState;

fn reference() -> PendulumState {
    PendulumState::builder().masses(5.0, 1.0).build().unwrap()
}

fn bench_single_step(c: &mut Criterion) {
    c.bench_function("symplectic_step_1000", |b| {
        b.iter(|| {
            let mut state = reference();
            for _ in 0..1000 {
                state.step(black_box(1.0e-3));
            }
            state
        })
    });

    c.bench_function("rk4_step_1000", |b| {
        let mut integrator = RungeKuttaIntegrator::new();
        b.iter(|| {
            let mut state = reference();
            for _ in 0..1000 {
                integrator.integrate(&mut state, black_box(1.0e-3));
            }
            state
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let states: Vec<PendulumState> = (0..1024)
        .map(|i| PendulumState::builder().angles(1.0e-3 * i as f64, 0.5).build().unwrap())
        .collect();

    c.bench_function("batch_1024", |b| {
        b.iter(|| {
            let mut batch = states.clone();
            step_all(&mut batch, black_box(1.0e-3))
        })
    });
}

criterion_group!(benches, bench_single_step, bench_batch);
criterion_main!(benches);
