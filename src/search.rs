//! Exhaustive minimax search for the computer player.
//!
//! The computer always plays O (the maximizing side) against X. The search
//! visits the full game tree below the current position with no pruning and
//! no transposition table; a 3x3 board is small enough for that to finish at
//! interactive speed.
//!
//! Terminal positions are scored relative to the ply depth `d` at which they
//! are reached, counting from the position just after the candidate move:
//!
//! - O has won: `WIN_SCORE - d` (a faster win is worth more)
//! - X has won: `d - WIN_SCORE` (a slower loss is worth more)
//! - full board with no line: `DRAW_SCORE`
//!
//! Every child is explored on a copy of the board, so the caller's board is
//! never touched.

use tracing::debug;

use crate::board::{Board, Player};
use crate::constants::{DRAW_SCORE, WIN_SCORE};
use crate::moves::Move;
use crate::rules::{has_won, is_draw};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions evaluated, terminal or not
    pub nodes: u64,
    /// Terminal positions reached
    pub leaves: u64,
}

/// Scores for every candidate move at the root.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    /// `(move, score)` for each empty cell, row-major
    pub scores: Vec<(Move, i32)>,
    pub stats: SearchStats,
}

impl Analysis {
    /// The first candidate with the strictly greatest score.
    pub fn best(&self) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;
        for &(mv, score) in &self.scores {
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        best
    }
}

/// Minimax value of `board` for O, `depth` plies below the root.
///
/// `maximizing` is true when O is to move.
pub fn minimax(board: &Board, depth: i32, maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    search(board, depth, maximizing, &mut stats)
}

fn search(board: &Board, depth: i32, maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if let Some(score) = terminal_score(board, depth) {
        stats.leaves += 1;
        return score;
    }

    let (player, init) = if maximizing {
        (Player::O, i32::MIN)
    } else {
        (Player::X, i32::MAX)
    };

    let mut best = init;
    for (row, col) in board.empty_cells() {
        let mut child = *board;
        child.set(row, col, player.into());
        let score = search(&child, depth + 1, !maximizing, stats);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Score of a finished position, or `None` if play continues.
fn terminal_score(board: &Board, depth: i32) -> Option<i32> {
    if has_won(board, Player::O) {
        Some(WIN_SCORE - depth)
    } else if has_won(board, Player::X) {
        Some(depth - WIN_SCORE)
    } else if is_draw(board) {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Evaluate every empty cell as O's next move.
pub fn analyze(board: &Board) -> Analysis {
    let mut analysis = Analysis::default();
    for (row, col) in board.empty_cells() {
        let mut child = *board;
        child.set(row, col, Player::O.into());
        let score = search(&child, 0, false, &mut analysis.stats);
        let mv = Move::from_cell(row, col);
        debug!(%mv, score, "candidate");
        analysis.scores.push((mv, score));
    }
    analysis
}

/// Best move for O, or `None` if the board has no empty cell.
///
/// Ties go to the lowest move number.
pub fn best_move(board: &Board) -> Option<Move> {
    let analysis = analyze(board);
    let best = analysis.best();
    debug!(
        best = ?best,
        nodes = analysis.stats.nodes,
        leaves = analysis.stats.leaves,
        "search finished"
    );
    best.map(|(mv, _)| mv)
}
