//! Ordered move sequences.

use std::fmt;
use std::ops::{Deref, DerefMut};

use itertools::Itertools;

use crate::moves::Move;

/// Ordered list of primitive moves.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MoveSequence(pub Vec<Move>);

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveSequence {
    /// Constructs a new empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the sequence with all moves inverted, in reverse order.
    ///
    /// Applying a sequence and then its inverse is a no-op.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|m| m.inverse()).collect()
    }
}
