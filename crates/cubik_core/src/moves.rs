//! Move vocabulary and its static geometry.
//!
//! Every primitive move is a quarter turn of one or two layers about a
//! principal axis. Face and slice moves turn one layer (9 cubies); wide moves
//! turn the face layer together with the adjacent middle layer (18 cubies) as
//! one rigid body.
//!
//! Sign convention: angles follow the right-hand rule about the *positive*
//! axis, so a clockwise turn as viewed facing the face is `−π/2` for U, R,
//! F and `+π/2` for D, L, B. Slices follow the face they sit behind: M
//! follows L, E follows D, S follows F. [`Move::rotate_coord`] and
//! [`Move::rotation`] derive from the same convention, so the integer
//! permutation and the orientation quaternion can never disagree.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use cgmath::{Rad, Rotation3};
use smallvec::{SmallVec, smallvec};
use strum::{EnumIter, IntoEnumIterator};

use crate::axis::{Axis, Layer};
use crate::coord::CubieCoord;
use crate::{Float, Quat};

/// Face of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// Up face (y = 1).
    U,
    /// Down face (y = −1).
    D,
    /// Left face (x = −1).
    L,
    /// Right face (x = 1).
    R,
    /// Front face (z = 1).
    F,
    /// Back face (z = −1).
    B,
}

impl Face {
    /// Returns the rotation axis for turns of this face.
    pub fn axis(self) -> Axis {
        match self {
            Face::U | Face::D => Axis::Y,
            Face::L | Face::R => Axis::X,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Returns the coordinate of the face layer along its axis.
    pub fn layer_value(self) -> i8 {
        match self {
            Face::U | Face::R | Face::F => 1,
            Face::D | Face::L | Face::B => -1,
        }
    }

    /// Returns the angle sign of a clockwise turn (as viewed facing the
    /// face), about the positive axis.
    fn cw_sign(self) -> i8 {
        // Faces on the positive side of their axis turn negative, and vice
        // versa.
        -self.layer_value()
    }

    /// Returns the face letter used in notation.
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
        }
    }
}

/// Middle-layer slice of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slice {
    /// Middle slice between L and R; turns with L.
    M,
    /// Equatorial slice between U and D; turns with D.
    E,
    /// Standing slice between F and B; turns with F.
    S,
}

impl Slice {
    /// Returns the rotation axis of the slice.
    pub fn axis(self) -> Axis {
        match self {
            Slice::M => Axis::X,
            Slice::E => Axis::Y,
            Slice::S => Axis::Z,
        }
    }

    /// Returns the face whose clockwise direction the slice follows.
    pub fn following(self) -> Face {
        match self {
            Slice::M => Face::L,
            Slice::E => Face::D,
            Slice::S => Face::F,
        }
    }

    /// Returns the slice letter used in notation.
    pub fn letter(self) -> char {
        match self {
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }
}

/// Direction of a quarter turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Clockwise, as viewed facing the turned face.
    Cw,
    /// Counterclockwise ("prime").
    Ccw,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
        }
    }

    /// Returns the angle sign multiplier: `1` for clockwise, `−1` for
    /// counterclockwise.
    fn sign(self) -> i8 {
        match self {
            Direction::Cw => 1,
            Direction::Ccw => -1,
        }
    }

    /// Returns the notation suffix: empty for clockwise, `'` for
    /// counterclockwise.
    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Cw => "",
            Direction::Ccw => "'",
        }
    }
}

/// Primitive cube move: a quarter turn of one or two layers.
///
/// Every move knows its own geometry: rotation axis, signed angle, affected
/// layer selectors, inverse, and the induced coordinate permutation. Double
/// turns are not primitive; notation like `R2` expands to two quarter turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Turn of a single face layer, e.g. `R`.
    Face(Face, Direction),
    /// Wide turn of a face layer plus the adjacent middle layer, e.g. `r`.
    Wide(Face, Direction),
    /// Turn of a middle layer only, e.g. `M`.
    Slice(Slice, Direction),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Face(face, dir) => write!(f, "{}{}", face.letter(), dir.suffix()),
            Move::Wide(face, dir) => {
                write!(f, "{}{}", face.letter().to_ascii_lowercase(), dir.suffix())
            }
            Move::Slice(slice, dir) => write!(f, "{}{}", slice.letter(), dir.suffix()),
        }
    }
}

impl Move {
    /// Returns an iterator over all 30 primitive moves.
    pub fn all() -> impl Iterator<Item = Self> {
        let faces = Face::iter().flat_map(|f| Direction::iter().map(move |d| Move::Face(f, d)));
        let wides = Face::iter().flat_map(|f| Direction::iter().map(move |d| Move::Wide(f, d)));
        let slices = Slice::iter().flat_map(|s| Direction::iter().map(move |d| Move::Slice(s, d)));
        faces.chain(wides).chain(slices)
    }

    /// Returns the rotation axis of the move.
    pub fn axis(self) -> Axis {
        match self {
            Move::Face(face, _) | Move::Wide(face, _) => face.axis(),
            Move::Slice(slice, _) => slice.axis(),
        }
    }

    /// Returns the angle sign, in units of 90° about the positive axis.
    fn sign(self) -> i8 {
        match self {
            Move::Face(face, dir) | Move::Wide(face, dir) => face.cw_sign() * dir.sign(),
            Move::Slice(slice, dir) => slice.following().cw_sign() * dir.sign(),
        }
    }

    /// Returns the signed rotation angle in radians: `±π/2`.
    pub fn angle(self) -> Float {
        Float::from(self.sign()) * FRAC_PI_2
    }

    /// Returns the affected layer selectors: one for face and slice moves,
    /// two for wide moves.
    pub fn layers(self) -> SmallVec<[Layer; 2]> {
        let axis = self.axis();
        match self {
            Move::Face(face, _) => smallvec![Layer {
                axis,
                value: face.layer_value(),
            }],
            Move::Wide(face, _) => smallvec![
                Layer {
                    axis,
                    value: face.layer_value(),
                },
                Layer { axis, value: 0 },
            ],
            Move::Slice(_, _) => smallvec![Layer { axis, value: 0 }],
        }
    }

    /// Returns whether the move affects the layer containing `coord`.
    pub fn affects(self, coord: CubieCoord) -> bool {
        self.layers().iter().any(|layer| layer.contains(coord))
    }

    /// Returns the move that exactly undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Move::Face(face, dir) => Move::Face(face, dir.inverse()),
            Move::Wide(face, dir) => Move::Wide(face, dir.inverse()),
            Move::Slice(slice, dir) => Move::Slice(slice, dir.inverse()),
        }
    }

    /// Returns the rotation quaternion of the move.
    pub fn rotation(self) -> Quat {
        Quat::from_axis_angle(self.axis().unit_vector(), Rad(self.angle()))
    }

    /// Maps `coord` to its position after the move.
    ///
    /// Coordinates outside the affected layers map to themselves. This is a
    /// bijection on the 27-point coordinate space.
    #[must_use]
    pub fn rotate_coord(self, coord: CubieCoord) -> CubieCoord {
        if self.affects(coord) {
            coord.rotated(self.axis(), self.sign())
        } else {
            coord
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_inverse_involution() {
        for mv in Move::all() {
            assert_eq!(mv, mv.inverse().inverse());
            assert_ne!(mv, mv.inverse());
        }
    }

    #[test]
    fn test_vocabulary_size() {
        let all: HashSet<Move> = Move::all().collect();
        assert_eq!(30, all.len());
    }

    #[test]
    fn test_display_notation() {
        assert_eq!("R", Move::Face(Face::R, Direction::Cw).to_string());
        assert_eq!("R'", Move::Face(Face::R, Direction::Ccw).to_string());
        assert_eq!("u", Move::Wide(Face::U, Direction::Cw).to_string());
        assert_eq!("b'", Move::Wide(Face::B, Direction::Ccw).to_string());
        assert_eq!("M'", Move::Slice(Slice::M, Direction::Ccw).to_string());
    }

    #[test]
    fn test_layer_counts() {
        for mv in Move::all() {
            let expected = match mv {
                Move::Wide(_, _) => 18,
                _ => 9,
            };
            let count = CubieCoord::all().filter(|&c| mv.affects(c)).count();
            assert_eq!(expected, count, "wrong layer count for {mv}");
        }
    }

    #[test]
    fn test_rotate_coord_round_trip() {
        for mv in Move::all() {
            for coord in CubieCoord::all() {
                assert_eq!(coord, mv.inverse().rotate_coord(mv.rotate_coord(coord)));
            }
        }
    }

    #[test]
    fn test_rotate_coord_fixes_unaffected() {
        let r = Move::Face(Face::R, Direction::Cw);
        for coord in CubieCoord::all().filter(|c| c.x != 1) {
            assert_eq!(coord, r.rotate_coord(coord));
        }
    }

    /// The integer permutation and the orientation quaternion must describe
    /// the same rotation.
    #[test]
    fn test_rotation_matches_rotate_coord() {
        for mv in Move::all() {
            let q = mv.rotation();
            for coord in CubieCoord::all().filter(|&c| mv.affects(c)) {
                let expected = mv.rotate_coord(coord).to_vector();
                let actual = q * coord.to_vector();
                for (e, a) in [
                    (expected.x, actual.x),
                    (expected.y, actual.y),
                    (expected.z, actual.z),
                ] {
                    assert!((e - a).abs() < 1e-9, "{mv} moves {coord} inconsistently");
                }
            }
        }
    }

    #[test]
    fn test_clockwise_convention() {
        // U clockwise (viewed from above) carries the front-top edge to the
        // left-top edge.
        let u = Move::Face(Face::U, Direction::Cw);
        assert_eq!(
            CubieCoord::new(-1, 1, 0),
            u.rotate_coord(CubieCoord::new(0, 1, 1)),
        );
        // R clockwise (viewed from the right) carries the front-right edge up.
        let r = Move::Face(Face::R, Direction::Cw);
        assert_eq!(
            CubieCoord::new(1, 1, 0),
            r.rotate_coord(CubieCoord::new(1, 0, 1)),
        );
    }
}
