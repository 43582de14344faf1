//! Random play, used as a sparring partner for the search engine.
//!
//! A [`RandomMover`] picks uniformly among the empty cells. Seeded movers
//! are reproducible, which the `demo` subcommand and the tests rely on.

use std::io;

use anyhow::Result;
use tracing::info;

use crate::board::{Board, Player};
use crate::game::{Game, Participant};
use crate::moves::Move;
use crate::rules::Outcome;

/// Chooses a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomMover {
    rng: fastrand::Rng,
}

impl RandomMover {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Pick an empty cell, or `None` on a full board.
    pub fn choose(&mut self, board: &Board) -> Option<Move> {
        let empty: Vec<_> = board.empty_cells().collect();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.rng.usize(..empty.len())];
        Some(Move::from_cell(row, col))
    }
}

/// Results of a batch of games, from O's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::O) => self.wins += 1,
            Outcome::Win(Player::X) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

/// Play `games` games of a random X against the search engine.
///
/// Game `i` uses seed `seed + i`, so a batch is reproducible from one seed.
pub fn self_play(games: usize, seed: u64) -> Result<Tally> {
    let mut tally = Tally::default();
    for i in 0..games {
        let x = Participant::Random(RandomMover::with_seed(seed.wrapping_add(i as u64)));
        let mut game = Game::new(x, Participant::Computer)?;
        let outcome = game.run(&mut io::empty(), &mut io::sink())?;
        tally.record(outcome);
    }
    info!(?tally, seed, "self-play finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_choose_returns_empty_cell() {
        let mut board = Board::new();
        board.set(0, 0, Cell::MarkX);
        board.set(1, 1, Cell::MarkO);
        let mut mover = RandomMover::with_seed(7);
        for _ in 0..50 {
            let mv = mover.choose(&board).unwrap();
            assert!(board.get(mv.row(), mv.col()).is_empty());
        }
    }

    #[test]
    fn test_choose_on_full_board() {
        let mut board = Board::new();
        for mv in Move::all() {
            board.set(mv.row(), mv.col(), Cell::MarkX);
        }
        assert_eq!(RandomMover::with_seed(1).choose(&board), None);
    }

    #[test]
    fn test_seeded_movers_agree() {
        let board = Board::new();
        let mut a = RandomMover::with_seed(42);
        let mut b = RandomMover::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.choose(&board), b.choose(&board));
        }
    }

    #[test]
    fn test_self_play_never_loses() {
        let tally = self_play(20, 1234).unwrap();
        assert_eq!(tally.games(), 20);
        assert_eq!(tally.losses, 0);
    }
}
