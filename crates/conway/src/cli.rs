//! Command-line surface of the `conway` binary.

use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::{self, Write};

use clap::Parser;
use conway_core::StepError;
use conway_engine::config::DEFAULT_GENERATIONS;
use conway_engine::hash::board_hash;
use conway_engine::render::render_to;
use conway_engine::{ConfigError, LifeConfig, LifeWorld, RunSummary};

/// Run Conway's Game of Life on a randomly seeded bounded board.
///
/// Prints the initial board, the final board, and a timing summary.
/// Set `RUST_LOG=debug` to see the seed and dispatch details.
#[derive(Parser, Debug)]
#[command(name = "conway", version, about, long_about = None)]
pub struct Cli {
    /// Number of generations to run. Malformed values fall back to the
    /// default with a warning.
    #[arg(
        value_name = "GENERATIONS",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub generations: Option<OsString>,
}

impl Cli {
    /// Generation count requested on the command line.
    pub fn generations(&self) -> u64 {
        resolve_generations(self.generations.as_deref())
    }
}

/// Parse a generation count, falling back to [`DEFAULT_GENERATIONS`].
///
/// A missing argument is not an error. Anything that is not a
/// non-negative integer (including non-UTF-8 bytes) logs a warning and
/// uses the default.
pub fn resolve_generations(raw: Option<&OsStr>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_GENERATIONS;
    };
    let Some(text) = raw.to_str() else {
        log::warn!("ignoring non-UTF-8 generation count {raw:?}; using default {DEFAULT_GENERATIONS}");
        return DEFAULT_GENERATIONS;
    };
    match text.trim().parse::<u64>() {
        Ok(n) => n,
        Err(e) => {
            log::warn!(
                "ignoring generation count {text:?} ({e}); using default {DEFAULT_GENERATIONS}"
            );
            DEFAULT_GENERATIONS
        }
    }
}

// ── RunError ───────────────────────────────────────────────────────

/// Fatal errors that abort a command-line run.
#[derive(Debug)]
pub enum RunError {
    /// The configuration was rejected or the boards could not be allocated.
    Config(ConfigError),
    /// A generation step failed.
    Step(StepError),
    /// Writing to the output failed.
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Step(e) => write!(f, "step failed: {e}"),
            Self::Io(e) => write!(f, "output failed: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Step(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for RunError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Process exit status for a run: 0 on success, 1 on any fatal error.
pub fn exit_status<T>(result: &Result<T, RunError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

// ── run ────────────────────────────────────────────────────────────

/// Seed a world from `config`, run it, and write the boards to `out`.
///
/// Output is the initial board, optionally every intermediate
/// generation, the final board, then one `N generations in M ms` line.
pub fn run<W: Write>(config: &LifeConfig, out: &mut W) -> Result<RunSummary, RunError> {
    let mut world = LifeWorld::seeded(config)?;
    if let Some(seed) = world.seed() {
        log::info!(
            "seed {seed}, {} dispatch (initial hash {:016x})",
            world.dispatcher_name(),
            board_hash(world.current())
        );
    }

    writeln!(out, "initial:")?;
    render_to(world.current(), out)?;

    // The observer cannot return an error, so the first write failure is
    // held and reported after the run.
    let mut render_error: Option<io::Error> = None;
    let summary = if config.render_each_generation {
        world.run(config.generations, |generation, board| {
            if render_error.is_some() {
                return;
            }
            let written = writeln!(out, "generation {generation}:")
                .and_then(|()| render_to(board, out));
            if let Err(e) = written {
                render_error = Some(e);
            }
        })?
    } else {
        world.run_silent(config.generations)?
    };
    if let Some(e) = render_error {
        return Err(e.into());
    }

    writeln!(out, "final:")?;
    render_to(world.current(), out)?;
    writeln!(out, "{summary}")?;
    out.flush()?;

    log::info!(
        "final generation {} with {} live cells (hash {:016x})",
        summary.final_generation,
        summary.final_population,
        board_hash(world.current())
    );
    Ok(summary)
}
