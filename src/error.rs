//! This module defines the error types used throughout the crate.

use thiserror::Error;

use crate::fifteen::moves::SlideMove;

/// Error for converting a character into a [`SlideMove`] using TryFrom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryFromCharToMoveError {
    /// attempted to convert a character into a move, but it was not one of `u`, `d`, `l` or `r`
    #[error("'{0}' is not a move, expected one of u, d, l or r")]
    InvalidChar(char),
}

/// The ways a set of tiles can fail to describe a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridDefect {
    /// Both dimensions must be at least 2, and the tiles must be numbered by `u32`.
    #[error(
        "a {height}x{width} grid is not supported, both dimensions must be at least 2 and the tile count must fit in a u32"
    )]
    Dimensions {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
    /// The number of tiles does not match the dimensions.
    #[error("expected {expected} tiles but found {found}")]
    TileCount {
        /// `height * width`
        expected: usize,
        /// Number of tiles supplied.
        found: usize,
    },
    /// A row is shorter or longer than the first row.
    #[error("row {row} has {found} tiles but the first row has {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A tile is out of range or duplicated, so the tiles are not a permutation of `0..h*w`.
    #[error("tile {0} is out of range or appears more than once")]
    NotPermutation(u32),
    /// A token in a textual grid was not a tile number.
    #[error("'{0}' is not a tile number")]
    Unparsable(String),
}

/// Error type for every fallible operation on a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The supplied tiles do not form a valid grid.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridDefect),
    /// A move would push the blank off the grid. The grid is left untouched.
    #[error("move {index} ({mv}) would push the blank off the grid")]
    OutOfBoundsMove {
        /// Position of the move within the applied sequence.
        index: usize,
        /// The offending move.
        mv: SlideMove,
    },
    /// A move string contained something other than a move.
    #[error(transparent)]
    InvalidMove(#[from] TryFromCharToMoveError),
    /// A tile that must exist in a valid grid could not be found.
    #[error("tile {0} is missing from the grid")]
    UnreachableTile(u32),
    /// The solver failed to re-establish one of its invariants.
    #[error("solver invariant violated: {0}")]
    SolveInvariantViolation(String),
    /// The permutation parity makes the grid impossible to solve.
    #[error("the grid cannot be solved, its permutation parity does not match the solved state")]
    UnsolvableConfiguration,
}
