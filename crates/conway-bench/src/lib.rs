//! Benchmark profiles for the Conway generation engine.
//!
//! - [`reference_profile`]: 256x256 board (64K cells), tiled dispatch
//! - [`stress_profile`]: 1024x1024 board (~1M cells), tiled dispatch
//! - [`profile_board`]: the seeded initial board for a profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use conway_arena::Board;
use conway_engine::seed::random_board;
use conway_engine::{ConfigError, DispatchMode, LifeConfig};

/// Reference profile: 256x256 board at the default density.
pub fn reference_profile(seed: u64, dispatch: DispatchMode) -> LifeConfig {
    LifeConfig {
        width: 256,
        height: 256,
        seed: Some(seed),
        dispatch,
        ..LifeConfig::default()
    }
}

/// Stress profile: 1024x1024 board, same density as [`reference_profile`].
pub fn stress_profile(seed: u64, dispatch: DispatchMode) -> LifeConfig {
    LifeConfig {
        width: 1024,
        height: 1024,
        ..reference_profile(seed, dispatch)
    }
}

/// Build the seeded initial board for `config`.
///
/// Uses seed 0 when the config carries none so benches stay repeatable.
pub fn profile_board(config: &LifeConfig) -> Result<Board, ConfigError> {
    let space = config.space()?;
    Ok(random_board(
        space,
        config.alive_probability,
        config.seed.unwrap_or(0),
        &config.arena,
    )?)
}
