//! The decision table used by every reduction step.
//!
//! A step looks at where the target tile is relative to its destination (its heading) and which
//! side of the tile the blank is on. Each combination maps to one fixed fragment that either
//! carries the tile one cell closer to its destination or, once it has arrived, parks the blank on
//! the destination's left. Fragments only use cells above the destination row, or on the
//! destination row left of the destination, so already solved cells are never disturbed.

use crate::error::PuzzleError;
use crate::fifteen::moves::SlideMove::{self, Down as D, Left as L, Right as R, Up as U};
use crate::fifteen::Position;

/// Takes the target tile from `(i - 1, 1)` to `(i, 0)` using the 3x2 block at rows `i-2..=i`,
/// columns `0..=1`, starting with the blank at `(i - 1, 0)`. The solved cell `(i, 1)` is restored
/// and the blank finishes at `(i - 1, 1)`.
pub(super) const COLUMN_ZERO_ROTATION: &[SlideMove] = &[
    R, U, L, D, R, D, L, U, R, D, L, U, U, R, D, D, L, U, R,
];

/// Takes the target tile from `(1, j - 1)` to `(0, j)` using the 2x3 block at rows `0..=1`,
/// columns `j-2..=j`, starting with the blank at `(1, j - 2)`. The solved cell `(1, j)` is
/// restored and the blank finishes at `(1, j - 1)`.
pub(super) const ROW_ZERO_ROTATION: &[SlideMove] =
    &[U, R, D, L, U, R, R, D, L, U, L, D, R, R, U, L, D];

/// Rotates the three tiles of the top left 2x2 block, starting and ending with the blank at
/// `(0, 0)`.
pub(super) const CORNER_CYCLE: &[SlideMove] = &[R, D, L, U];

/// Which way the target tile still has to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Heading {
    East,
    West,
    South,
    Arrived,
}

/// Which neighbour of the target tile the blank occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
    Above,
    Below,
}

/// The outcome of consulting the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Maneuver {
    /// The tile is in place with the blank on its left.
    Done,
    /// Moves the tile one cell closer to its destination.
    Shift(&'static [SlideMove]),
    /// The tile is in place, this parks the blank on its left.
    Settle(&'static [SlideMove]),
}

impl Heading {
    fn of(tile: Position, dest: Position) -> Result<Heading, PuzzleError> {
        Ok(if tile.col < dest.col {
            Heading::East
        } else if tile.col > dest.col {
            Heading::West
        } else if tile.row < dest.row {
            Heading::South
        } else if tile.row == dest.row {
            Heading::Arrived
        } else {
            return Err(PuzzleError::SolveInvariantViolation(format!(
                "tile at {tile} is below its destination {dest}"
            )));
        })
    }
}

impl Side {
    fn of(tile: Position, blank: Position) -> Result<Side, PuzzleError> {
        let Position { row, col } = tile;
        Ok(match (blank.row, blank.col) {
            (r, c) if r == row && c + 1 == col => Side::Left,
            (r, c) if r == row && c == col + 1 => Side::Right,
            (r, c) if r + 1 == row && c == col => Side::Above,
            (r, c) if r == row + 1 && c == col => Side::Below,
            _ => {
                return Err(PuzzleError::SolveInvariantViolation(format!(
                    "blank at {blank} is not next to the tile at {tile}"
                )))
            }
        })
    }
}

/// Look up the fragment for the current tile and blank positions.
pub(super) fn lookup(
    tile: Position,
    blank: Position,
    dest: Position,
) -> Result<Maneuver, PuzzleError> {
    let heading = Heading::of(tile, dest)?;
    let side = Side::of(tile, blank)?;
    // Cycling around the tile goes through the row above it, unless there is none.
    let top_edge = tile.row == 0;

    use Heading as H;
    use Maneuver::*;
    Ok(match (heading, side) {
        (H::East, Side::Right) => Shift(&[L]),
        (H::East, Side::Left) if top_edge => Shift(&[D, R, R, U, L]),
        (H::East, Side::Left) => Shift(&[U, R, R, D, L]),
        (H::East, Side::Above) => Shift(&[R, D, L]),
        (H::East, Side::Below) => Shift(&[R, U, L]),

        (H::West, Side::Left) => Shift(&[R]),
        (H::West, Side::Right) if top_edge => Shift(&[D, L, L, U, R]),
        (H::West, Side::Right) => Shift(&[U, L, L, D, R]),
        (H::West, Side::Above) => Shift(&[L, D, R]),
        (H::West, Side::Below) => Shift(&[L, U, R]),

        (H::South, Side::Below) => Shift(&[U]),
        (H::South, Side::Above) => Shift(&[L, D, D, R, U]),
        (H::South, Side::Left) => Shift(&[D, R, U]),
        (H::South, Side::Right) if top_edge => Shift(&[D, L, U]),
        (H::South, Side::Right) => Shift(&[U, L, L, D, D, R, U]),

        (H::Arrived, Side::Left) => Done,
        (H::Arrived, Side::Above) => Settle(&[L, D]),
        (H::Arrived, Side::Right) => Settle(&[U, L, L, D]),
        (H::Arrived, Side::Below) => {
            return Err(PuzzleError::SolveInvariantViolation(format!(
                "blank at {blank} is below the placed tile at {tile}"
            )))
        }
    })
}

/// The opening path from the blank to the target tile: straight up to the tile's row, then across
/// to it. The last move swaps the blank with the tile, so the blank finishes next to it.
pub(super) fn approach(tile: Position, blank: Position) -> Result<Vec<SlideMove>, PuzzleError> {
    if tile.row > blank.row || tile == blank {
        return Err(PuzzleError::SolveInvariantViolation(format!(
            "cannot approach the tile at {tile} from the blank at {blank}"
        )));
    }

    let mut path = vec![U; blank.row - tile.row];
    if tile.col < blank.col {
        path.extend(std::iter::repeat(L).take(blank.col - tile.col));
    } else {
        path.extend(std::iter::repeat(R).take(tile.col - blank.col));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fifteen::Grid;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn table_lookups() {
        use Maneuver::*;
        let dest = pos(2, 2);
        let cases = [
            (pos(2, 1), pos(2, 0), Shift(&[U, R, R, D, L])),
            (pos(0, 1), pos(0, 0), Shift(&[D, R, R, U, L])),
            (pos(1, 2), pos(1, 3), Shift(&[U, L, L, D, D, R, U])),
            (pos(0, 2), pos(0, 3), Shift(&[D, L, U])),
            (pos(1, 2), pos(2, 2), Shift(&[U])),
            (pos(2, 2), pos(2, 1), Done),
            (pos(2, 2), pos(1, 2), Settle(&[L, D])),
        ];
        for (tile, blank, expected) in cases {
            assert_eq!(lookup(tile, blank, dest), Ok(expected), "{tile}/{blank}");
        }
    }

    #[test]
    fn table_rejects_bad_geometry() {
        assert!(matches!(
            lookup(pos(1, 1), pos(0, 0), pos(2, 2)),
            Err(PuzzleError::SolveInvariantViolation(_))
        ));
        assert!(matches!(
            lookup(pos(3, 2), pos(3, 1), pos(2, 2)),
            Err(PuzzleError::SolveInvariantViolation(_))
        ));
        assert!(matches!(
            lookup(pos(2, 2), pos(3, 2), pos(2, 2)),
            Err(PuzzleError::SolveInvariantViolation(_))
        ));
    }

    #[test]
    fn approach_paths() {
        assert_eq!(approach(pos(0, 3), pos(2, 1)), Ok(vec![U, U, R, R]));
        assert_eq!(approach(pos(2, 0), pos(2, 2)), Ok(vec![L, L]));
        assert_eq!(approach(pos(0, 2), pos(3, 2)), Ok(vec![U, U, U]));
        assert!(approach(pos(3, 0), pos(2, 0)).is_err());
        assert!(approach(pos(2, 0), pos(2, 0)).is_err());
    }

    /// Every shift carries the tile exactly one cell towards its destination, leaves the blank
    /// next to it, and only uses cells the reduction is allowed to disturb.
    #[test]
    fn shifts_make_progress() {
        let (height, width) = (5, 5);
        let dest = pos(3, 2);
        let free = |p: Position| p.row < dest.row || (p.row == dest.row && p.col <= dest.col);
        let distance = |p: Position| dest.row.abs_diff(p.row) + dest.col.abs_diff(p.col);
        let target = 99;
        let grid = Grid::solved(height, width).unwrap();

        for tr in 0..height {
            for tc in 0..width {
                let tile = pos(tr, tc);
                if !free(tile) {
                    continue;
                }
                for blank in [
                    pos(tr, tc.wrapping_sub(1)),
                    pos(tr, tc + 1),
                    pos(tr.wrapping_sub(1), tc),
                    pos(tr + 1, tc),
                ] {
                    if blank.row >= height || blank.col >= width || !free(blank) {
                        continue;
                    }
                    let Ok(Maneuver::Shift(fragment)) = lookup(tile, blank, dest) else {
                        continue;
                    };

                    // Track only the tile and the blank; mark every other cell with its index.
                    let mut cells: Vec<u32> = (100..100 + (height * width) as u32).collect();
                    cells[tile.row * width + tile.col] = target;
                    cells[blank.row * width + blank.col] = 0;
                    let mut at = blank;
                    for &mv in fragment {
                        let next = grid.neighbour(at, mv).expect("fragment leaves the grid");
                        assert!(free(next), "{fragment:?} disturbs {next} from {tile}/{blank}");
                        cells.swap(at.row * width + at.col, next.row * width + next.col);
                        at = next;
                    }

                    let idx = cells.iter().position(|&c| c == target).unwrap();
                    let moved = pos(idx / width, idx % width);
                    assert_eq!(distance(moved) + 1, distance(tile), "{tile}/{blank}");
                    assert!(Side::of(moved, at).is_ok(), "{tile}/{blank}");
                }
            }
        }
    }
}
