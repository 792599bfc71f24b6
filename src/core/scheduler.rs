use crate::bodies::PendulumState;
use crate::core::StepReport;

/// Trait for advancing many independent pendulums by the same time step
pub trait SimulationScheduler: Send + Sync {
    /// Steps every state once with semi-implicit Euler, returning one report per state
    fn step_all(&self, states: &mut [PendulumState], dt: f64) -> Vec<StepReport>;
}

/// A single-threaded simulation scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialScheduler;

impl SimulationScheduler for SequentialScheduler {
    fn step_all(&self, states: &mut [PendulumState], dt: f64) -> Vec<StepReport> {
        states.iter_mut().map(|state| state.step(dt)).collect()
    }
}

/// Steps every state once using the default scheduler for the enabled features.
///
/// States share nothing, so the result is identical with or without `parallel`.
pub fn step_all(states: &mut [PendulumState], dt: f64) -> Vec<StepReport> {
    #[cfg(feature = "parallel")]
    {
        parallel::ParallelScheduler::default().step_all(states, dt)
    }

    #[cfg(not(feature = "parallel"))]
    {
        SequentialScheduler.step_all(states, dt)
    }
}

#[cfg(feature = "parallel")]
pub mod parallel {
    use super::*;
    use std::thread;

    /// Splits the states into contiguous chunks, one scoped thread per chunk
    #[derive(Debug, Clone, Copy)]
    pub struct ParallelScheduler {
        thread_count: usize,
    }

    impl ParallelScheduler {
        /// Creates a new parallel scheduler with the specified number of threads
        pub fn new(thread_count: usize) -> Self {
            Self {
                thread_count: thread_count.max(1),
            }
        }
    }

    impl Default for ParallelScheduler {
        fn default() -> Self {
            let threads = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
            Self::new(threads)
        }
    }

    impl SimulationScheduler for ParallelScheduler {
        fn step_all(&self, states: &mut [PendulumState], dt: f64) -> Vec<StepReport> {
            if states.is_empty() {
                return Vec::new();
            }

            let chunk_size = states.len().div_ceil(self.thread_count);

            thread::scope(|scope| {
                let handles: Vec<_> = states
                    .chunks_mut(chunk_size)
                    .map(|chunk| scope.spawn(move || SequentialScheduler.step_all(chunk, dt)))
                    .collect();

                handles
                    .into_iter()
                    .flat_map(|handle| match handle.join() {
                        Ok(reports) => reports,
                        Err(panic) => std::panic::resume_unwind(panic),
                    })
                    .collect()
            })
        }
    }
}
