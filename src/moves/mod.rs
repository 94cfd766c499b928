//! Module for puzzle move generics and related functionality

use std::fmt;

/// A move, for use in writing expressions or algorithms. It is intended that a term of this trait
/// is a generator of some puzzle group, so every move can be undone by its inverse.
///
/// Sliding puzzle moves do not commute with each other (moving the blank up then left does not
/// leave it where left then up would), so the only relation assumed when cancelling a sequence is
/// `X X^{-1} = e`.
pub trait Move: Eq + Copy {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// The empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel every adjacent pair of a move and its inverse, repeatedly, so that no such pair is
    /// left. Since no two distinct moves commute this is the shortest equivalent sequence that can
    /// be obtained from cancellation alone.
    ///
    /// ```rust
    /// use fifteen_lib::fifteen::moves::SlideMove;
    /// use fifteen_lib::moves::MoveSequence;
    ///
    /// let mvs: MoveSequence<SlideMove> = "ulrdr".parse().unwrap();
    /// assert_eq!(mvs.cancel().to_string(), "r");
    /// ```
    pub fn cancel(self) -> Self {
        let mut cancellation: Vec<M> = Vec::with_capacity(self.0.len());

        for next_mv in self.0 {
            // The kept prefix is already fully reduced, so only its last move can cancel.
            if cancellation.last() == Some(&next_mv.inverse()) {
                cancellation.pop();
            } else {
                cancellation.push(next_mv);
            }
        }

        Self(cancellation)
    }

    /// Concatenate another sequence onto the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence contains no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.0.iter()
    }
}

impl<M: Move> Default for MoveSequence<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Move> From<Vec<M>> for MoveSequence<M> {
    fn from(mvs: Vec<M>) -> Self {
        Self(mvs)
    }
}

impl<M: Move> FromIterator<M> for MoveSequence<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<M: Move> IntoIterator for MoveSequence<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, M: Move> IntoIterator for &'a MoveSequence<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Moves are written back to back with no separator, so a sequence of single character moves
/// prints as a compact move string.
impl<M: Move + fmt::Display> fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{m}"))
    }
}
