//! Win and draw detection, and placement legality.
//!
//! All functions here are total over any board value. Note that
//! [`is_draw`] only reports a full board; use [`outcome`] when the
//! win-before-draw precedence matters.

use crate::board::{Board, Cell, Player};
use crate::constants::LINES;

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// True if `player` holds any full row, column, or diagonal.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Cell::from(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.at(i) == mark))
}

/// True if the board is full. Does not look at lines.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

/// True if a mark may be placed at `(row, col)`.
pub fn is_legal_placement(board: &Board, row: usize, col: usize) -> bool {
    board.get(row, col).is_empty()
}

/// The player holding a completed line, if any. O is checked first.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::O, Player::X]
        .into_iter()
        .find(|&p| has_won(board, p))
}

/// Terminal status of the board: a win takes precedence over a full board.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(p) = winner(board) {
        Some(Outcome::Win(p))
    } else if is_draw(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_all(board: &mut Board, cells: &[(usize, usize)], player: Player) {
        for &(r, c) in cells {
            board.set(r, c, player.into());
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for i in line {
                board.set(i / 3, i % 3, Cell::MarkO);
            }
            assert!(has_won(&board, Player::O), "line {line:?} should win");
            assert!(!has_won(&board, Player::X));
            assert_eq!(outcome(&board), Some(Outcome::Win(Player::O)));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        mark_all(&mut board, &[(0, 0), (1, 1)], Player::X);
        assert!(!has_won(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        mark_all(&mut board, &[(0, 0), (0, 1)], Player::X);
        mark_all(&mut board, &[(0, 2)], Player::O);
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_is_draw_ignores_winner() {
        // x x x / o o x / x o o : full, and X has the top row
        let mut board = Board::new();
        mark_all(&mut board, &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 0)], Player::X);
        mark_all(&mut board, &[(1, 0), (1, 1), (2, 1), (2, 2)], Player::O);
        assert!(is_draw(&board));
        assert!(has_won(&board, Player::X));
        assert_eq!(outcome(&board), Some(Outcome::Win(Player::X)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // x o x / x o o / o x x
        let mut board = Board::new();
        mark_all(&mut board, &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)], Player::X);
        mark_all(&mut board, &[(0, 1), (1, 1), (1, 2), (2, 0)], Player::O);
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_legal_placement() {
        let mut board = Board::new();
        assert!(is_legal_placement(&board, 2, 2));
        board.set(2, 2, Cell::MarkX);
        assert!(!is_legal_placement(&board, 2, 2));
        assert!(is_legal_placement(&board, 2, 1));
    }
}
