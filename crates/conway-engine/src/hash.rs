//! Board fingerprints for determinism checks.
//!
//! Uses FNV-1a for fast, deterministic hashing. Not cryptographically
//! secure; used to compare runs and to log a compact identity for the
//! final board.

use conway_arena::Board;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a board's dimensions and every cell, row-major.
///
/// Dimensions are folded in first so that boards with the same cells
/// in a different shape hash differently.
pub fn board_hash(board: &Board) -> u64 {
    let space = board.space();
    let mut hash = fnv1a_u32(FNV_OFFSET, space.width());
    hash = fnv1a_u32(hash, space.height());
    for cell in board.cells() {
        hash = fnv1a_byte(hash, cell.as_u8());
    }
    hash
}
