//! Plain-text board rendering.

use std::io::{self, Write};

use conway_core::CellReader;

/// Character for a live cell.
pub const ALIVE_CHAR: char = '#';
/// Character for a dead cell.
pub const DEAD_CHAR: char = '.';

/// Render a board as one line per row, `#` alive and `.` dead.
pub fn render<R: CellReader + ?Sized>(board: &R) -> String {
    let (w, h) = board.dimensions();
    let mut out = String::with_capacity((w as usize + 1) * h as usize);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            out.push(if board.get(x, y).is_alive() {
                ALIVE_CHAR
            } else {
                DEAD_CHAR
            });
        }
        out.push('\n');
    }
    out
}

/// Write [`render`]'s output to `out`.
pub fn render_to<R: CellReader + ?Sized, W: Write>(board: &R, out: &mut W) -> io::Result<()> {
    out.write_all(render(board).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway_test_utils::parse_board;

    #[test]
    fn render_matches_layout() {
        let b = parse_board(&["#..", ".#.", "..#", "###"]).unwrap();
        assert_eq!(render(&b), "#..\n.#.\n..#\n###\n");
    }

    #[test]
    fn render_to_writer() {
        let b = parse_board(&["##", ".."]).unwrap();
        let mut buf = Vec::new();
        render_to(&b, &mut buf).unwrap();
        assert_eq!(buf, b"##\n..\n");
    }
}
