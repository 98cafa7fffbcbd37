//! Move notation for the 3×3×3 cube: parsing, inversion, display chunking,
//! and scramble generation.
//!
//! Token grammar: a base letter (`U D L R F B` for faces, lowercase for wide
//! turns, `M E S` for slices) optionally followed by `'` (prime) or `2`
//! (double). A sequence is whitespace-separated tokens. Parsing fails fast
//! with [`ParseMoveError`] before any cube state is touched.

use cubik_core::MoveSequence;
use itertools::Itertools;

pub mod scramble;
mod token;

pub use token::{Family, Modifier, MoveToken, ParseMoveError};

/// Parses a whitespace-separated move sequence into tokens.
///
/// Empty tokens are ignored, so extra spaces are harmless and the empty
/// string parses to an empty sequence.
pub fn parse_moves(s: &str) -> Result<Vec<MoveToken>, ParseMoveError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Expands tokens into primitive moves, concatenated in order.
pub fn expand(tokens: &[MoveToken]) -> MoveSequence {
    tokens.iter().flat_map(|t| t.moves()).collect()
}

/// Parses a sequence string directly into primitive moves.
pub fn parse_sequence(s: &str) -> Result<MoveSequence, ParseMoveError> {
    Ok(expand(&parse_moves(s)?))
}

/// Returns the inverse token sequence: reversed, each token inverted.
///
/// The inverse of `U R2 F' L` is `L' F R2 U'`.
#[must_use]
pub fn invert(tokens: &[MoveToken]) -> Vec<MoveToken> {
    tokens.iter().rev().map(|t| t.inverse()).collect()
}

/// Renders tokens as a space-separated notation string.
pub fn notation_string(tokens: &[MoveToken]) -> String {
    tokens.iter().join(" ")
}

/// Partitions tokens into display groups whose total weight (2 per double
/// turn, 1 per other token) does not exceed `max_weight`.
///
/// A group is closed as soon as adding the next token would exceed the
/// limit. A single token heavier than the limit still forms its own group;
/// tokens are never split.
pub fn chunk_by_weight(tokens: &[MoveToken], max_weight: u32) -> Vec<Vec<MoveToken>> {
    let mut groups: Vec<Vec<MoveToken>> = Vec::new();
    let mut group: Vec<MoveToken> = Vec::new();
    let mut weight = 0;
    for &token in tokens {
        if !group.is_empty() && weight + token.weight() > max_weight {
            groups.push(std::mem::take(&mut group));
            weight = 0;
        }
        weight += token.weight();
        group.push(token);
    }
    if !group.is_empty() {
        groups.push(group);
    }
    groups
}

/// Counts the moves in a token sequence, with double turns counting twice.
pub fn move_count(tokens: &[MoveToken]) -> u32 {
    tokens.iter().map(|t| t.weight()).sum()
}
