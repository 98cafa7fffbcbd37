//! Cube state: the 27-cubie arena.

use std::fmt;

use crate::coord::CubieCoord;
use crate::moves::Move;
use crate::sequence::MoveSequence;
use crate::{Float, ORIENTATION_TOLERANCE, Quat};

/// Number of cubies in a 3×3×3 cube.
pub const CUBIE_COUNT: usize = 27;

/// Stable identifier of a cubie: its index in the arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubieId(pub u8);

impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the 27 unit pieces of the cube.
///
/// Cubies are identity-stable: all 27 are built once with the cube and are
/// never created or destroyed afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cubie {
    /// Arena index.
    pub id: CubieId,
    /// Coordinate in the solved configuration.
    pub initial: CubieCoord,
    /// Current logical coordinate.
    pub coord: CubieCoord,
    /// Cumulative rotation relative to the solved orientation.
    pub orientation: Quat,
}

impl Cubie {
    fn new(id: CubieId, coord: CubieCoord) -> Self {
        Self {
            id,
            initial: coord,
            coord,
            orientation: Quat::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    fn is_home(&self, tolerance: Float) -> bool {
        self.coord == self.initial && is_identity(self.orientation, tolerance)
    }
}

/// Returns whether `q` is the identity rotation, within `tolerance` per
/// component.
///
/// `q` and `−q` represent the same rotation (quaternion double cover), so the
/// negated identity also counts; without this, four quarter turns of one face
/// would compose to `(0, 0, 0, −1)` and report the cube unsolved.
fn is_identity(q: Quat, tolerance: Float) -> bool {
    q.v.x.abs() <= tolerance
        && q.v.y.abs() <= tolerance
        && q.v.z.abs() <= tolerance
        && (q.s.abs() - 1.0).abs() <= tolerance
}

/// Logical state of a 3×3×3 cube.
///
/// Created once at the solved configuration and mutated only through
/// [`CubeState::apply`]. Each apply is atomic across the whole affected layer
/// group: every cubie's update reads only its own pre-move coordinate.
#[derive(Debug, Clone)]
pub struct CubeState {
    cubies: [Cubie; CUBIE_COUNT],
    history: Vec<Move>,
    tolerance: Float,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Returns a solved cube: identity permutation, identity orientations.
    pub fn new() -> Self {
        let coords: Vec<CubieCoord> = CubieCoord::all().collect();
        Self {
            cubies: std::array::from_fn(|i| Cubie::new(CubieId(i as u8), coords[i])),
            history: Vec::new(),
            tolerance: ORIENTATION_TOLERANCE,
        }
    }

    /// Overrides the orientation tolerance used by [`CubeState::is_solved`].
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Float) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Applies a move and records it in the history.
    pub fn apply(&mut self, mv: Move) {
        self.apply_unrecorded(mv);
        self.history.push(mv);
    }

    /// Applies a move without recording it in the history.
    pub fn apply_unrecorded(&mut self, mv: Move) {
        let rotation = mv.rotation();
        let mut affected = 0;
        for cubie in &mut self.cubies {
            if mv.affects(cubie.coord) {
                cubie.coord = mv.rotate_coord(cubie.coord);
                cubie.orientation = rotation * cubie.orientation;
                affected += 1;
            }
        }
        // Layer selectors always match 9 cubies each; anything else is an
        // internal bug.
        let expected = 9 * mv.layers().len();
        if affected != expected {
            debug_panic!("move {mv} affected {affected} cubies, expected {expected}");
        }
    }

    /// Applies each move in order, recording all of them.
    pub fn apply_sequence(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Applies each move in order without recording any of them.
    pub fn apply_sequence_unrecorded(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply_unrecorded(mv);
        }
    }

    /// Returns whether every cubie is at its initial coordinate with an
    /// orientation within tolerance of identity.
    pub fn is_solved(&self) -> bool {
        self.cubies.iter().all(|c| c.is_home(self.tolerance))
    }

    /// Returns the recorded move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Clears the recorded move history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns the sequence that undoes the recorded history: reversed, each
    /// move inverted. Applying it returns the cube to the state it had when
    /// the history was last cleared.
    pub fn invert_history(&self) -> MoveSequence {
        MoveSequence(self.history.iter().rev().map(|m| m.inverse()).collect())
    }

    /// Returns all 27 cubies. This is the renderer boundary: per-cubie
    /// coordinate and orientation after each apply.
    pub fn cubies(&self) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter()
    }

    /// Returns the cubie with the given id.
    pub fn cubie(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::moves::{Direction, Face};

    fn assert_permutation_closure(state: &CubeState) {
        let coords: HashSet<CubieCoord> = state.cubies().map(|c| c.coord).collect();
        assert_eq!(27, coords.len());
        assert!(CubieCoord::all().all(|c| coords.contains(&c)));
    }

    #[test]
    fn test_new_cube_is_solved() {
        assert!(CubeState::new().is_solved());
    }

    #[test]
    fn test_single_move_round_trip() {
        for mv in Move::all() {
            let mut state = CubeState::new();
            state.apply(mv);
            assert!(!state.is_solved(), "{mv} did nothing");
            state.apply(mv.inverse());
            assert!(state.is_solved(), "{mv} then {} is not solved", mv.inverse());
            // coordinates must be exact, not merely within tolerance
            assert!(state.cubies().all(|c| c.coord == c.initial));
        }
    }

    #[test]
    fn test_four_quarter_turns_solve() {
        // The net orientation is the negated identity quaternion here, which
        // still counts as solved.
        let mut state = CubeState::new();
        for _ in 0..4 {
            state.apply(Move::Face(Face::U, Direction::Cw));
        }
        assert!(state.is_solved());
    }

    #[test]
    fn test_affected_cubie_counts() {
        let mut state = CubeState::new();
        state.apply(Move::Face(Face::U, Direction::Cw));
        let moved_by_u = state.cubies().filter(|c| !c.is_home(1e-9)).count();
        assert_eq!(9, moved_by_u);

        let mut state = CubeState::new();
        state.apply(Move::Wide(Face::U, Direction::Cw));
        let moved_by_wide_u = state.cubies().filter(|c| !c.is_home(1e-9)).count();
        assert_eq!(18, moved_by_wide_u);
    }

    #[test]
    fn test_invert_history() {
        let scramble = [
            Move::Face(Face::U, Direction::Cw),
            Move::Face(Face::R, Direction::Cw),
            Move::Face(Face::R, Direction::Cw),
            Move::Face(Face::F, Direction::Ccw),
            Move::Face(Face::L, Direction::Cw),
        ];
        let mut state = CubeState::new();
        state.apply_sequence(scramble);
        assert!(!state.is_solved());
        assert_permutation_closure(&state);
        assert_eq!("L' F R' R' U'", state.invert_history().to_string());

        let solution = state.invert_history();
        state.apply_sequence(solution);
        assert!(state.is_solved());
    }

    #[test]
    fn test_unrecorded_moves_stay_out_of_history() {
        let mut state = CubeState::new();
        state.apply_unrecorded(Move::Face(Face::R, Direction::Cw));
        state.apply_sequence_unrecorded([
            Move::Slice(crate::Slice::M, Direction::Cw),
            Move::Wide(Face::D, Direction::Ccw),
        ]);
        assert!(state.history().is_empty());
        assert!(!state.is_solved());
    }

    fn arbitrary_move() -> impl Strategy<Value = Move> {
        proptest::sample::select(Move::all().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn proptest_sequence_inversion(moves in prop::collection::vec(arbitrary_move(), 0..50)) {
            let mut state = CubeState::new();
            state.apply_sequence(moves);
            assert_permutation_closure(&state);

            let solution = state.invert_history();
            state.apply_sequence(solution);
            prop_assert!(state.is_solved());
        }
    }
}
