//! Notation tokens.
//!
//! A token is one move as written: a base letter plus an optional `'` or `2`
//! modifier. Tokens are the display and parse unit; `R2` is one token of
//! weight 2 that expands to two primitive quarter turns.

use std::fmt;
use std::str::FromStr;

use cubik_core::{Direction, Face, Move, Slice};
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

/// Error produced when parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Unrecognized move token
    #[error("unknown move token {token:?}")]
    UnknownMoveToken {
        /// The offending token.
        token: String,
    },
}

/// Base letter of a notation token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Uppercase face letter: single-layer face turn.
    Face(Face),
    /// Lowercase face letter: wide turn.
    Wide(Face),
    /// Slice letter (`M`, `E`, `S`; always uppercase).
    Slice(Slice),
}

impl Family {
    /// Returns the family for a base letter, or `None` if the letter is not
    /// part of the vocabulary. Case-sensitive: lowercase means wide.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::Face(Face::U)),
            'D' => Some(Self::Face(Face::D)),
            'L' => Some(Self::Face(Face::L)),
            'R' => Some(Self::Face(Face::R)),
            'F' => Some(Self::Face(Face::F)),
            'B' => Some(Self::Face(Face::B)),
            'u' => Some(Self::Wide(Face::U)),
            'd' => Some(Self::Wide(Face::D)),
            'l' => Some(Self::Wide(Face::L)),
            'r' => Some(Self::Wide(Face::R)),
            'f' => Some(Self::Wide(Face::F)),
            'b' => Some(Self::Wide(Face::B)),
            'M' => Some(Self::Slice(Slice::M)),
            'E' => Some(Self::Slice(Slice::E)),
            'S' => Some(Self::Slice(Slice::S)),
            _ => None,
        }
    }

    /// Returns the base letter of the family.
    pub fn letter(self) -> char {
        match self {
            Self::Face(face) => face.letter(),
            Self::Wide(face) => face.letter().to_ascii_lowercase(),
            Self::Slice(slice) => slice.letter(),
        }
    }

    /// Returns the clockwise primitive move for the family.
    pub fn base_move(self) -> Move {
        match self {
            Self::Face(face) => Move::Face(face, Direction::Cw),
            Self::Wide(face) => Move::Wide(face, Direction::Cw),
            Self::Slice(slice) => Move::Slice(slice, Direction::Cw),
        }
    }
}

/// Modifier suffix of a notation token.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// No suffix: one clockwise quarter turn.
    #[default]
    Plain,
    /// `'` suffix: one counterclockwise quarter turn.
    Prime,
    /// `2` suffix: the clockwise quarter turn applied twice.
    Double,
}

impl Modifier {
    /// Returns the notation suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::Plain => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }

    /// Returns the modifier that undoes this one. `Double` is its own
    /// inverse.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Modifier::Plain => Modifier::Prime,
            Modifier::Prime => Modifier::Plain,
            Modifier::Double => Modifier::Double,
        }
    }
}

/// One move as written in notation: base letter plus optional modifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveToken {
    /// Base letter.
    pub family: Family,
    /// Modifier suffix.
    pub modifier: Modifier,
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family.letter(), self.modifier.suffix())
    }
}

impl FromStr for MoveToken {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError::UnknownMoveToken {
            token: s.to_string(),
        };
        let mut chars = s.chars();
        let family = chars
            .next()
            .and_then(Family::from_letter)
            .ok_or_else(err)?;
        let modifier = match chars.as_str() {
            "" => Modifier::Plain,
            "'" => Modifier::Prime,
            "2" => Modifier::Double,
            _ => return Err(err()),
        };
        Ok(Self { family, modifier })
    }
}

impl MoveToken {
    /// Constructs a token from its parts.
    pub fn new(family: Family, modifier: Modifier) -> Self {
        Self { family, modifier }
    }

    /// Returns the token that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            family: self.family,
            modifier: self.modifier.inverse(),
        }
    }

    /// Returns the display weight of the token: 2 for a double turn, 1
    /// otherwise. Used for chunking long sequences into readable groups.
    pub fn weight(self) -> u32 {
        match self.modifier {
            Modifier::Double => 2,
            _ => 1,
        }
    }

    /// Expands the token into primitive moves. A double turn expands to the
    /// same quarter turn twice, never a single 180° move, so move counting
    /// and per-quarter-turn animation stay consistent.
    pub fn moves(self) -> SmallVec<[Move; 2]> {
        let base = self.family.base_move();
        match self.modifier {
            Modifier::Plain => smallvec![base],
            Modifier::Prime => smallvec![base.inverse()],
            Modifier::Double => smallvec![base, base],
        }
    }
}
