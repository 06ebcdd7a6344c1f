//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Cell, Mark};
use tracing::instrument;

const fn pos(index: usize) -> Position {
    Position::ALL[index]
}

/// The eight winning lines.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [pos(0), pos(1), pos(2)],
    [pos(3), pos(4), pos(5)],
    [pos(6), pos(7), pos(8)],
    // Columns
    [pos(0), pos(3), pos(6)],
    [pos(1), pos(4), pos(7)],
    [pos(2), pos(5), pos(8)],
    // Diagonals
    [pos(0), pos(4), pos(8)],
    [pos(2), pos(4), pos(6)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line (in [`LINES`] order) whose three
/// cells share a mark.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.cell(a);
        if cell != Cell::Empty && cell == board.cell(b) && cell == board.cell(c) {
            return cell.mark();
        }
    }

    None
}
