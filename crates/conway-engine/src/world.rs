//! The generation loop.
//!
//! [`LifeWorld`] owns a [`PingPongBoards`] pair and a [`Dispatcher`].
//! Each [`step()`](LifeWorld::step) borrows current and next from the
//! pair, fans the rules out over every cell, and publishes: the single
//! barrier between generations is the dispatcher returning.
//!
//! # Ownership model
//!
//! `LifeWorld` is [`Send`]. All mutating methods take `&mut self`, and
//! [`step()`](LifeWorld::step) returns a [`StepResult`] that borrows the
//! published board from `self`, so the board cannot be observed while
//! the next generation is being written.

use std::time::Instant;

use conway_arena::{ArenaConfig, ArenaError, Board, PingPongBoards};
use conway_core::{Generation, StepError};

use crate::config::{ConfigError, LifeConfig};
use crate::dispatch::{self, Dispatcher};
use crate::metrics::{RunSummary, StepMetrics};
use crate::seed;

// Compile-time assertion: LifeWorld can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LifeWorld>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`LifeWorld::step()`] call.
pub struct StepResult<'w> {
    /// The newly published board.
    pub board: &'w Board,
    /// Its generation number.
    pub generation: Generation,
    /// Timing for this step.
    pub metrics: StepMetrics,
}

// ── LifeWorld ───────────────────────────────────────────────────

/// A board pair plus the strategy that advances it.
pub struct LifeWorld {
    boards: PingPongBoards,
    dispatcher: Box<dyn Dispatcher>,
    last_metrics: StepMetrics,
    seed: Option<u64>,
}

impl LifeWorld {
    /// Create a world from a validated config and an explicit initial board.
    ///
    /// Returns `Err(ConfigError::Arena(ArenaError::DimensionMismatch))`
    /// if `initial` does not match `config.width x config.height`.
    pub fn new(config: &LifeConfig, initial: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = config.space()?;
        if initial.space() != space {
            let s = initial.space();
            return Err(ConfigError::Arena(ArenaError::DimensionMismatch {
                expected: (space.width(), space.height()),
                actual: (s.width(), s.height()),
            }));
        }
        let dispatcher = dispatch::from_config(config)?;
        Ok(Self::with_dispatcher(initial, dispatcher, config.arena.clone())?)
    }

    /// Create a world with a randomly seeded initial board.
    ///
    /// Uses `config.seed`, or a clock-derived seed when it is `None`.
    /// The seed in use is available from [`seed()`](Self::seed).
    pub fn seeded(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(seed::clock_seed);
        let initial =
            seed::random_board(config.space()?, config.alive_probability, seed, &config.arena)?;
        log::debug!(
            "seeded {}x{} board with seed {seed} (p = {}): {} live cells",
            config.width,
            config.height,
            config.alive_probability,
            initial.population()
        );
        let mut world = Self::new(config, initial)?;
        world.seed = Some(seed);
        Ok(world)
    }

    /// Create a world around any dispatcher, bypassing [`LifeConfig`].
    pub fn with_dispatcher(
        initial: Board,
        dispatcher: Box<dyn Dispatcher>,
        arena: ArenaConfig,
    ) -> Result<Self, ArenaError> {
        let space = initial.space();
        let boards = PingPongBoards::new(initial, arena)?;
        log::debug!(
            "world ready: {}x{} board, {} dispatch, {} bytes",
            space.width(),
            space.height(),
            dispatcher.name(),
            boards.memory_bytes()
        );
        Ok(Self {
            boards,
            dispatcher,
            last_metrics: StepMetrics::default(),
            seed: None,
        })
    }

    /// Advance one generation.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] if the generation counter is exhausted or
    /// the dispatcher rejects the boards. On error nothing is published
    /// and the current board is unchanged.
    pub fn step(&mut self) -> Result<StepResult<'_>, StepError> {
        let step_start = Instant::now();

        let guard = self.boards.begin_step()?;
        self.dispatcher.step(guard.current, guard.next)?;
        let kernel_us = step_start.elapsed().as_micros() as u64;

        let publish_start = Instant::now();
        let generation = self.boards.publish()?;
        let publish_us = publish_start.elapsed().as_micros() as u64;

        self.last_metrics = StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            kernel_us,
            publish_us,
            memory_bytes: self.boards.memory_bytes(),
        };
        log::trace!(
            "generation {generation} published in {}us",
            self.last_metrics.total_us
        );

        Ok(StepResult {
            board: self.boards.current(),
            generation,
            metrics: self.last_metrics.clone(),
        })
    }

    /// Advance `generations` steps, calling `observer` after each one.
    ///
    /// Elapsed time covers every step (and the observer). Stops at the
    /// first error; generations already published stay published.
    pub fn run<F>(&mut self, generations: u64, mut observer: F) -> Result<RunSummary, StepError>
    where
        F: FnMut(Generation, &Board),
    {
        log::debug!(
            "running {generations} generations from generation {} ({} dispatch)",
            self.generation(),
            self.dispatcher.name()
        );
        let start = Instant::now();
        for _ in 0..generations {
            let result = self.step()?;
            observer(result.generation, result.board);
        }
        let elapsed = start.elapsed();

        let summary = RunSummary {
            generations,
            elapsed,
            final_generation: self.generation(),
            final_population: self.current().population(),
        };
        log::debug!(
            "{summary} ({:.0} generations/s), {} live cells",
            summary.generations_per_second(),
            summary.final_population
        );
        Ok(summary)
    }

    /// [`run`](Self::run) without an observer.
    pub fn run_silent(&mut self, generations: u64) -> Result<RunSummary, StepError> {
        self.run(generations, |_, _| {})
    }

    /// Replace the board and return to generation 0.
    ///
    /// Both buffers are reused in place.
    pub fn reset(&mut self, initial: &Board) -> Result<(), ArenaError> {
        self.boards.reset(initial)?;
        self.last_metrics = StepMetrics::default();
        Ok(())
    }

    /// The current (last published) board.
    pub fn current(&self) -> &Board {
        self.boards.current()
    }

    /// Last published generation (0 after construction or reset).
    pub fn generation(&self) -> Generation {
        self.boards.generation()
    }

    /// Metrics from the most recent successful step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Seed used for the initial board, if it was randomly seeded.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Name of the active dispatcher.
    pub fn dispatcher_name(&self) -> &str {
        self.dispatcher.name()
    }

    /// The underlying board pair.
    pub fn boards(&self) -> &PingPongBoards {
        &self.boards
    }
}

impl std::fmt::Debug for LifeWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifeWorld")
            .field("generation", &self.generation())
            .field("dispatcher", &self.dispatcher.name())
            .field("seed", &self.seed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DispatchMode;
    use crate::dispatch::SerialDispatch;
    use conway_arena::BufferSlot;
    use conway_test_utils::patterns;

    fn small_config(dispatch: DispatchMode) -> LifeConfig {
        LifeConfig {
            width: 16,
            height: 12,
            tile_edge: 5,
            seed: Some(7),
            threads: Some(2),
            dispatch,
            ..LifeConfig::default()
        }
    }

    #[test]
    fn step_advances_generation_and_swaps() {
        let config = small_config(DispatchMode::Serial);
        let mut world = LifeWorld::seeded(&config).unwrap();
        assert_eq!(world.generation(), Generation::ZERO);
        assert_eq!(world.boards().current_slot(), BufferSlot::A);

        let result = world.step().unwrap();
        assert_eq!(result.generation, Generation(1));
        assert_eq!(world.boards().current_slot(), BufferSlot::B);
        world.step().unwrap();
        assert_eq!(world.boards().current_slot(), BufferSlot::A);
        assert_eq!(world.generation(), Generation(2));
    }

    #[test]
    fn seeded_records_seed() {
        let world = LifeWorld::seeded(&small_config(DispatchMode::Serial)).unwrap();
        assert_eq!(world.seed(), Some(7));
    }

    #[test]
    fn clock_seed_used_when_unset() {
        let config = LifeConfig {
            seed: None,
            ..small_config(DispatchMode::Serial)
        };
        let world = LifeWorld::seeded(&config).unwrap();
        assert!(world.seed().is_some());
    }

    #[test]
    fn new_rejects_wrong_board_size() {
        let config = small_config(DispatchMode::Serial);
        let board = patterns::block(4, 4, 1, 1).unwrap();
        assert!(matches!(
            LifeWorld::new(&config, board),
            Err(ConfigError::Arena(ArenaError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = LifeConfig {
            alive_probability: 2.0,
            ..small_config(DispatchMode::Serial)
        };
        assert!(matches!(
            LifeWorld::seeded(&config),
            Err(ConfigError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn run_reports_summary_and_observes_each_generation() {
        let board = patterns::blinker(5, 5).unwrap();
        let mut world =
            LifeWorld::with_dispatcher(board.clone(), Box::new(SerialDispatch), ArenaConfig::default())
                .unwrap();
        let mut seen = Vec::new();
        let summary = world
            .run(4, |generation, b| seen.push((generation, b.population())))
            .unwrap();
        assert_eq!(summary.generations, 4);
        assert_eq!(summary.final_generation, Generation(4));
        assert_eq!(summary.final_population, 3);
        assert_eq!(
            seen,
            vec![
                (Generation(1), 3),
                (Generation(2), 3),
                (Generation(3), 3),
                (Generation(4), 3)
            ]
        );
        assert_eq!(world.current(), &board);
    }

    #[test]
    fn zero_generations_is_a_no_op() {
        let board = patterns::blinker(5, 5).unwrap();
        let mut world =
            LifeWorld::with_dispatcher(board.clone(), Box::new(SerialDispatch), ArenaConfig::default())
                .unwrap();
        let summary = world.run_silent(0).unwrap();
        assert_eq!(summary.final_generation, Generation::ZERO);
        assert_eq!(world.current(), &board);
    }

    #[test]
    fn reset_restores_generation_zero() {
        let config = small_config(DispatchMode::Tiled);
        let mut world = LifeWorld::seeded(&config).unwrap();
        world.run_silent(3).unwrap();
        let fresh = patterns::block(16, 12, 3, 3).unwrap();
        world.reset(&fresh).unwrap();
        assert_eq!(world.generation(), Generation::ZERO);
        assert_eq!(world.current(), &fresh);
        assert_eq!(world.last_metrics(), &StepMetrics::default());
    }

    #[test]
    fn metrics_populated_after_step() {
        let mut world = LifeWorld::seeded(&small_config(DispatchMode::PerCell)).unwrap();
        world.step().unwrap();
        assert!(world.last_metrics().memory_bytes >= 2 * 16 * 12);
        assert!(world.last_metrics().total_us >= world.last_metrics().kernel_us);
    }

    #[test]
    fn dispatch_modes_agree_over_many_generations() {
        let run = |mode| {
            let mut world = LifeWorld::seeded(&small_config(mode)).unwrap();
            world.run_silent(40).unwrap();
            world.current().clone()
        };
        let serial = run(DispatchMode::Serial);
        assert_eq!(run(DispatchMode::Tiled), serial);
        assert_eq!(run(DispatchMode::PerCell), serial);
    }
}
