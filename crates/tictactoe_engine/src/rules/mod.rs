//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here is cached: callers
//! re-evaluate after every move.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner};

use crate::board::Board;
use crate::types::Outcome;
use tracing::instrument;

/// Evaluates the board.
///
/// Returns `None` while the game can still continue.
#[instrument]
pub fn detect_outcome(board: &Board) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        return Some(Outcome::Winner(winner));
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Cell, Mark};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Occupied(Mark::X),
                    'O' => Cell::Occupied(Mark::O),
                    _ => Cell::Empty,
                };
                board = board.set(row, col, cell).expect("in range");
            }
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_outcome() {
        assert_eq!(detect_outcome(&Board::empty()), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        assert_eq!(detect_outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert_eq!(detect_outcome(&board), Some(Outcome::Winner(Mark::X)));
    }

    #[test]
    fn test_line_order_does_not_matter() {
        // Filling a line's cells in any order yields the same winner.
        for [a, b, c] in LINES {
            for order in [[a, b, c], [c, b, a], [b, c, a]] {
                let board = order.iter().fold(Board::empty(), |board, pos| {
                    board.with_cell(*pos, Cell::Occupied(Mark::O))
                });
                assert_eq!(detect_outcome(&board), Some(Outcome::Winner(Mark::O)));
            }
        }
    }

    #[test]
    fn test_partial_board_continues() {
        let board = Board::empty()
            .with_cell(Position::ALL[0], Cell::Occupied(Mark::X))
            .with_cell(Position::ALL[1], Cell::Occupied(Mark::X));
        assert_eq!(detect_outcome(&board), None);
    }
}
