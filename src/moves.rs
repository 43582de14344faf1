//! Move numbers, input parsing, and move execution.
//!
//! A move is the 1-based position of a cell, counted row-major:
//!
//! ```text
//!  1 | 2 | 3
//!  4 | 5 | 6
//!  7 | 8 | 9
//! ```

use std::fmt;

use crate::board::{Board, Player};
use crate::constants::{MAX_MOVE, MIN_MOVE, SIZE};
use crate::rules::is_legal_placement;

/// A validated move number in `1..=9`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u8);

impl Move {
    /// Returns `None` if `number` is outside `1..=9`.
    pub fn new(number: u8) -> Option<Self> {
        (MIN_MOVE..=MAX_MOVE).contains(&number).then_some(Move(number))
    }

    /// The move that targets `(row, col)`.
    pub fn from_cell(row: usize, col: usize) -> Self {
        assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) is off the board");
        Move((row * SIZE + col) as u8 + 1)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Row-major cell index in `0..9`.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn row(self) -> usize {
        self.index() / SIZE
    }

    pub fn col(self) -> usize {
        self.index() % SIZE
    }

    /// Every move in ascending order.
    pub fn all() -> impl Iterator<Item = Move> {
        (MIN_MOVE..=MAX_MOVE).map(Move)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No token was given
    Empty,
    /// Token is not a plain decimal number
    NotANumber(String),
    /// Number is outside 1-9; holds the token as typed
    OutOfRange(String),
    /// Target cell already holds a mark
    Occupied(Move),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Empty => write!(f, "no move given"),
            MoveError::NotANumber(token) => write!(f, "'{token}' is not a move number"),
            MoveError::OutOfRange(token) => {
                write!(f, "move {token} is outside {MIN_MOVE}-{MAX_MOVE}")
            }
            MoveError::Occupied(mv) => write!(f, "spot {mv} is already taken"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Parse a move token such as `"5"`.
///
/// Only ASCII digits are accepted; signs, whitespace inside the token, and
/// anything that does not fit in a `u32` are `NotANumber`.
pub fn parse_move(token: &str) -> Result<Move, MoveError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(MoveError::Empty);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoveError::NotANumber(token.to_string()));
    }
    let n: u32 = token
        .parse()
        .map_err(|_| MoveError::NotANumber(token.to_string()))?;
    u8::try_from(n)
        .ok()
        .and_then(Move::new)
        .ok_or_else(|| MoveError::OutOfRange(token.to_string()))
}

/// Place `player`'s mark for `mv`. Leaves the board untouched on failure.
pub fn play_move(board: &mut Board, mv: Move, player: Player) -> Result<(), MoveError> {
    if !is_legal_placement(board, mv.row(), mv.col()) {
        return Err(MoveError::Occupied(mv));
    }
    board.set(mv.row(), mv.col(), player.into());
    Ok(())
}
