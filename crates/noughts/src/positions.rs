//! Compact set of board positions.

use crate::types::Position;
use std::fmt;
use std::ops::Sub;

/// A 9-bit set of board positions. Bit `i` corresponds to position index `i`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PositionSet(u16);

impl PositionSet {
    /// Empty set.
    pub const EMPTY: PositionSet = PositionSet(0);

    /// Every position on the board.
    pub const ALL: PositionSet = PositionSet(0x1FF);

    /// Builds a set from three positions. Used for the constant win patterns.
    pub const fn triple(a: Position, b: Position, c: Position) -> Self {
        PositionSet((1 << a.to_index()) | (1 << b.to_index()) | (1 << c.to_index()))
    }

    /// Returns true if no positions are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of positions in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the position is in the set.
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        (self.0 >> pos.to_index()) & 1 == 1
    }

    /// Adds a position.
    #[inline]
    pub fn insert(&mut self, pos: Position) {
        self.0 |= 1 << pos.to_index();
    }

    /// Returns true if every position of `self` is also in `other`.
    #[inline]
    pub const fn is_subset(self, other: PositionSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Positions in `self` that are not in `other`.
    #[inline]
    pub const fn difference(self, other: PositionSet) -> Self {
        PositionSet(self.0 & !other.0)
    }

    /// Positions on the board not in this set.
    #[inline]
    pub const fn complement(self) -> Self {
        PositionSet(!self.0 & Self::ALL.0)
    }

    /// The only member, if the set holds exactly one position.
    pub fn single(self) -> Option<Position> {
        if self.len() == 1 {
            Position::from_index(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// The `n`th member in index order.
    pub fn nth(self, n: usize) -> Option<Position> {
        self.iter().nth(n)
    }

    /// Iterates members in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |pos| self.contains(*pos))
    }
}

impl Sub for PositionSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = PositionSet::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(Position::to_index))
            .finish()
    }
}
