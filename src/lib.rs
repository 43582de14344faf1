//! Tic-tac-toe with an unbeatable computer opponent.
//!
//! The computer plays O and picks its moves by exhaustive minimax search
//! over the whole remaining game tree. X always moves first.
//!
//! ## Modules
//!
//! - [`constants`] - Grid geometry, winning lines, and scoring constants
//! - [`board`] - Cells, players, and the 3x3 grid
//! - [`rules`] - Win, draw, and legality checks
//! - [`moves`] - Move numbers 1-9, input parsing, and move execution
//! - [`search`] - Minimax move selection for O
//! - [`playout`] - Random opponent and self-play
//! - [`game`] - The turn loop over any input and output
//!
//! ## Example
//!
//! ```
//! use tictactoe_minimax::board::{Board, Player};
//! use tictactoe_minimax::moves::{Move, play_move};
//! use tictactoe_minimax::search::best_move;
//!
//! let mut board = Board::new();
//! play_move(&mut board, Move::new(1).unwrap(), Player::X).unwrap();
//!
//! // The only reply to a corner opening that does not lose is the centre.
//! assert_eq!(best_move(&board), Move::new(5));
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod moves;
pub mod playout;
pub mod rules;
pub mod search;
