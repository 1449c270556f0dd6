//! Per-step and per-run performance metrics.
//!
//! [`StepMetrics`] captures timing for a single generation;
//! [`RunSummary`] is the throughput report for a whole run.

use std::fmt;
use std::time::Duration;

use conway_core::Generation;

/// Timing and memory metrics collected during a single generation.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent in the dispatcher (the per-cell fan-out), in microseconds.
    pub kernel_us: u64,
    /// Time spent publishing (role swap), in microseconds.
    pub publish_us: u64,
    /// Heap bytes held by both boards after the step.
    pub memory_bytes: usize,
}

/// Outcome of [`LifeWorld::run`](crate::LifeWorld::run).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of generations computed by this run.
    pub generations: u64,
    /// Wall-clock time across all generations.
    pub elapsed: Duration,
    /// Generation counter after the run.
    pub final_generation: Generation,
    /// Live cells on the final board.
    pub final_population: usize,
}

impl RunSummary {
    /// Elapsed wall-clock time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Throughput, or 0 for an instantaneous run.
    pub fn generations_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.generations as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} generations in {} ms",
            self.generations,
            self.elapsed_ms()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.kernel_us, 0);
        assert_eq!(m.publish_us, 0);
        assert_eq!(m.memory_bytes, 0);
    }

    #[test]
    fn summary_line() {
        let s = RunSummary {
            generations: 1000,
            elapsed: Duration::from_millis(250),
            final_generation: Generation(1000),
            final_population: 12,
        };
        assert_eq!(s.to_string(), "1000 generations in 250 ms");
        assert!((s.generations_per_second() - 4000.0).abs() < 1e-6);
    }

    #[test]
    fn zero_elapsed_throughput_is_zero() {
        let s = RunSummary {
            generations: 5,
            elapsed: Duration::ZERO,
            final_generation: Generation(5),
            final_population: 0,
        };
        assert_eq!(s.generations_per_second(), 0.0);
    }
}
