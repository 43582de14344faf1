//! Constants for grid geometry, search scoring, and rendering.
//!
//! The board is a fixed 3x3 grid stored row-major, so a cell index is
//! `row * SIZE + col` and a move number is that index plus one.

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length of the grid.
pub const SIZE: usize = 3;

/// Total number of cells on the grid.
pub const CELLS: usize = SIZE * SIZE;

/// Lowest valid move number.
pub const MIN_MOVE: u8 = 1;

/// Highest valid move number.
pub const MAX_MOVE: u8 = CELLS as u8;

/// Every line that wins the game, as row-major cell indices.
/// Order: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Base score of a won position. A win found `d` plies deep scores
/// `WIN_SCORE - d`, a loss scores `d - WIN_SCORE`.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn (full, winnerless) position.
pub const DRAW_SCORE: i32 = 0;

// =============================================================================
// Rendering
// =============================================================================

/// Separator printed between rendered rows.
pub const DIVIDER: &str = "---+---+---";

// =============================================================================
// Demo Defaults
// =============================================================================

/// Number of games the demo plays when none is given.
pub const DEMO_GAMES: usize = 100;
