//! Random scramble generation.

use cubik_core::{Face, Slice};
use rand::Rng;
use rand::seq::IndexedRandom;
use strum::IntoEnumIterator;

use crate::{Family, Modifier, MoveToken};

/// Returns the token pool scrambles draw from: every face and the M slice
/// with plain, prime, and double modifiers, plus every wide turn with plain
/// and prime.
pub fn scramble_pool() -> Vec<MoveToken> {
    let singles = Face::iter()
        .map(Family::Face)
        .chain([Family::Slice(Slice::M)]);
    let wides = Face::iter().map(Family::Wide);

    let mut pool = Vec::new();
    for family in singles {
        for modifier in [Modifier::Plain, Modifier::Prime, Modifier::Double] {
            pool.push(MoveToken::new(family, modifier));
        }
    }
    for family in wides {
        for modifier in [Modifier::Plain, Modifier::Prime] {
            pool.push(MoveToken::new(family, modifier));
        }
    }
    pool
}

/// Generates a random scramble of `len` tokens.
pub fn random_scramble(len: usize, rng: &mut impl Rng) -> Vec<MoveToken> {
    let pool = scramble_pool();
    (0..len).filter_map(|_| pool.choose(rng).copied()).collect()
}

/// Prepends the cube-flip prefix `L M R L M R`, used to present a scramble
/// from the opposite vantage.
pub fn with_cube_flip(tokens: &[MoveToken]) -> Vec<MoveToken> {
    let flip = [
        Family::Face(Face::L),
        Family::Slice(Slice::M),
        Family::Face(Face::R),
    ];
    let mut ret: Vec<MoveToken> = flip
        .iter()
        .cycle()
        .take(flip.len() * 2)
        .map(|&family| MoveToken::new(family, Modifier::Plain))
        .collect();
    ret.extend_from_slice(tokens);
    ret
}
