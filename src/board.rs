//! The 3x3 grid and the values that live on it.

use std::fmt;

use crate::constants::{CELLS, DIVIDER, SIZE};

/// One of the two participants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first.
    X,
    /// Played by the search engine.
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Glyph used on the grid and in messages.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// State of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    MarkX,
    MarkO,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkX => Some(Player::X),
            Cell::MarkO => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::MarkX,
            Player::O => Cell::MarkO,
        }
    }
}

/// A 3x3 grid of cells in row-major order.
///
/// The board is small enough to be `Copy`; the search engine explores
/// positions by copying the board rather than undoing moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create an all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn idx(row: usize, col: usize) -> usize {
        assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) is off the board");
        row * SIZE + col
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::idx(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::idx(row, col)] = cell;
    }

    /// Cell at a row-major index in `0..CELLS`.
    pub fn at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (i / SIZE, i % SIZE, c))
    }

    /// Iterate over the `(row, col)` of every empty cell in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(|(_, _, c)| c.is_empty())
            .map(|(r, c, _)| (r, c))
    }

    /// Number of marks placed so far.
    pub fn marks(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl fmt::Display for Board {
    /// Renders the grid with empty cells shown as their move number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let ch = match self.get(row, col).player() {
                    Some(p) => p.mark(),
                    None => char::from(b'1' + (row * SIZE + col) as u8),
                };
                write!(f, " {ch} ")?;
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row < SIZE - 1 {
                writeln!(f, "{DIVIDER}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().all(|(_, _, c)| c == Cell::Empty));
        assert_eq!(board.empty_cells().count(), CELLS);
        assert_eq!(board.marks(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(1, 2, Cell::MarkO);
        assert_eq!(board.get(1, 2), Cell::MarkO);
        assert_eq!(board.at(5), Cell::MarkO);
        assert_eq!(board.get(2, 1), Cell::Empty);
    }

    #[test]
    #[should_panic]
    fn test_get_off_board_panics() {
        Board::new().get(3, 0);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                board.set(row, col, Cell::MarkX);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_cells_row_major() {
        let order: Vec<_> = Board::new().cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order[0], (0, 0));
        assert_eq!(order[1], (0, 1));
        assert_eq!(order[3], (1, 0));
        assert_eq!(order[8], (2, 2));
    }

    #[test]
    fn test_display_empty_board() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_display_marks() {
        let mut board = Board::new();
        board.set(0, 0, Cell::MarkX);
        board.set(1, 1, Cell::MarkO);
        let rendered = board.to_string();
        let first_row = rendered.lines().next().unwrap();
        assert_eq!(first_row, " x | 2 | 3 ");
        assert_eq!(rendered.lines().nth(2).unwrap(), " 4 | o | 6 ");
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Cell::from(Player::O).player(), Some(Player::O));
    }
}
