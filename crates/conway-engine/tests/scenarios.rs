//! End-to-end generation scenarios through `LifeWorld`.
//!
//! Each scenario runs under every dispatch strategy; the boards must
//! match exactly regardless of how the step was decomposed.

use conway_arena::{ArenaConfig, Board};
use conway_core::{CellState, Generation};
use conway_engine::hash::board_hash;
use conway_engine::{
    Dispatcher, DispatchMode, LifeConfig, LifeWorld, PerCellDispatch, SerialDispatch,
    TiledDispatch,
};
use conway_space::Square8;
use conway_test_utils::{live_cells, parse_board, patterns};

// ── Helpers ─────────────────────────────────────────────────────

fn dispatchers() -> Vec<Box<dyn Dispatcher>> {
    vec![
        Box::new(SerialDispatch),
        Box::new(TiledDispatch::new(2, Some(4)).unwrap()),
        Box::new(TiledDispatch::new(7, Some(2)).unwrap()),
        Box::new(PerCellDispatch::new(Some(3)).unwrap()),
    ]
}

fn world(board: &Board, dispatcher: Box<dyn Dispatcher>) -> LifeWorld {
    LifeWorld::with_dispatcher(board.clone(), dispatcher, ArenaConfig::default()).unwrap()
}

// ── Still lifes and oscillators ─────────────────────────────────

#[test]
fn block_on_4x4_is_unchanged() {
    let block = patterns::block(4, 4, 1, 1).unwrap();
    assert_eq!(live_cells(&block), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    for d in dispatchers() {
        let mut w = world(&block, d);
        let result = w.step().unwrap();
        assert_eq!(result.board, &block);
    }
}

#[test]
fn beehive_is_still_life() {
    let hive = patterns::beehive(8, 7, 2, 2).unwrap();
    for d in dispatchers() {
        let mut w = world(&hive, d);
        w.run_silent(5).unwrap();
        assert_eq!(w.current(), &hive);
    }
}

#[test]
fn blinker_has_period_two() {
    let horizontal = patterns::blinker(7, 7).unwrap();
    let vertical = patterns::blinker_vertical(7, 7).unwrap();
    for d in dispatchers() {
        let mut w = world(&horizontal, d);
        assert_eq!(w.step().unwrap().board, &vertical);
        assert_eq!(w.step().unwrap().board, &horizontal);
    }
}

#[test]
fn toad_has_period_two() {
    let toad = patterns::toad(8, 8, 2, 3).unwrap();
    for d in dispatchers() {
        let mut w = world(&toad, d);
        let first = w.step().unwrap().board.clone();
        assert_ne!(first, toad);
        assert_eq!(w.step().unwrap().board, &toad);
    }
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let start = patterns::glider(12, 12, 1, 1).unwrap();
    let expected = patterns::glider(12, 12, 2, 2).unwrap();
    for d in dispatchers() {
        let mut w = world(&start, d);
        w.run_silent(4).unwrap();
        assert_eq!(w.current(), &expected);
    }
}

#[test]
fn glider_dies_into_the_dead_boundary() {
    // With no wraparound the glider hits the corner and settles into a
    // block instead of reappearing on the opposite edge.
    let start = patterns::glider(8, 8, 3, 3).unwrap();
    let mut w = world(&start, Box::new(SerialDispatch));
    w.run_silent(40).unwrap();
    assert_eq!(live_cells(w.current()), vec![(6, 6), (7, 6), (6, 7), (7, 7)]);
}

// ── Boundary policy ─────────────────────────────────────────────

#[test]
fn corner_cell_sees_only_in_bounds_neighbours() {
    // (0,0) has exactly three in-bounds neighbours, all alive: birth.
    let b = parse_board(&[
        ".#..", //
        "##..", //
        "....", //
        "....",
    ])
    .unwrap();
    for d in dispatchers() {
        let mut w = world(&b, d);
        let next = w.step().unwrap().board;
        assert_eq!(next.get(0, 0), CellState::Alive);
        assert_eq!(next.population(), 4);
    }
}

#[test]
fn line_along_edge_does_not_wrap() {
    let b = parse_board(&[
        "#####", //
        ".....", //
        ".....", //
        ".....",
    ])
    .unwrap();
    let mut w = world(&b, Box::new(SerialDispatch));
    let next = w.step().unwrap().board;
    // Ends die (one neighbour), the middle three survive, row 1 gets
    // births under x = 1..=3. Nothing appears on the bottom row.
    assert_eq!(
        live_cells(next),
        vec![(1, 0), (2, 0), (3, 0), (1, 1), (2, 1), (3, 1)]
    );
}

// ── Idempotence and determinism ─────────────────────────────────

#[test]
fn all_dead_board_stays_dead() {
    let empty = Board::zeroed(Square8::new(13, 9).unwrap()).unwrap();
    for d in dispatchers() {
        let mut w = world(&empty, d);
        let summary = w.run_silent(25).unwrap();
        assert_eq!(summary.final_population, 0);
        assert_eq!(summary.final_generation, Generation(25));
    }
}

#[test]
fn same_seed_same_final_board_for_every_decomposition() {
    let base = LifeConfig {
        width: 37,
        height: 29,
        seed: Some(0xC0FFEE),
        ..LifeConfig::default()
    };
    let variants = [
        (DispatchMode::Serial, 16, None),
        (DispatchMode::Tiled, 1, Some(1)),
        (DispatchMode::Tiled, 8, Some(4)),
        (DispatchMode::Tiled, 16, None),
        (DispatchMode::Tiled, 64, Some(2)),
        (DispatchMode::PerCell, 16, Some(3)),
    ];
    let hashes: Vec<u64> = variants
        .iter()
        .map(|&(dispatch, tile_edge, threads)| {
            let config = LifeConfig {
                dispatch,
                tile_edge,
                threads,
                ..base.clone()
            };
            let mut w = LifeWorld::seeded(&config).unwrap();
            w.run_silent(60).unwrap();
            board_hash(w.current())
        })
        .collect();
    assert!(
        hashes.windows(2).all(|p| p[0] == p[1]),
        "decompositions diverged: {hashes:x?}"
    );
}

#[test]
fn repeated_runs_are_reproducible() {
    let config = LifeConfig {
        width: 32,
        height: 32,
        seed: Some(11),
        ..LifeConfig::default()
    };
    let run = || {
        let mut w = LifeWorld::seeded(&config).unwrap();
        w.run_silent(100).unwrap();
        w.current().clone()
    };
    assert_eq!(run(), run());
}
