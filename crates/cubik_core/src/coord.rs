//! Integer cubie coordinates.

use std::fmt;

use cgmath::Vector3;

use crate::Float;
use crate::axis::Axis;

/// Coordinate of a cubie slot in the 3×3×3 grid.
///
/// Each component is in {−1, 0, 1}, so there are exactly 27 coordinates. A
/// valid cube state is always a bijection from the 27 initial coordinates to
/// themselves.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubieCoord {
    /// X component.
    pub x: i8,
    /// Y component.
    pub y: i8,
    /// Z component.
    pub z: i8,
}

impl fmt::Display for CubieCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl CubieCoord {
    /// Constructs a coordinate from its components.
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// Returns an iterator over all 27 coordinates, in a fixed order.
    pub fn all() -> impl Iterator<Item = Self> {
        itertools::iproduct!(-1..=1, -1..=1, -1..=1).map(|(x, y, z)| Self::new(x, y, z))
    }

    /// Returns the component along `axis`.
    pub fn get(self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Rotates the coordinate by `sign * 90°` about `axis`, using the
    /// right-hand rule about the positive axis. `sign` must be ±1.
    ///
    /// A 90° rotation about a principal axis permutes and negates components,
    /// so this is exact integer arithmetic.
    #[must_use]
    pub fn rotated(self, axis: Axis, sign: i8) -> Self {
        let Self { x, y, z } = self;
        let s = sign;
        match axis {
            Axis::X => Self::new(x, -s * z, s * y),
            Axis::Y => Self::new(s * z, y, -s * x),
            Axis::Z => Self::new(-s * y, s * x, z),
        }
    }

    /// Returns the coordinate as a float vector, for orientation math.
    pub fn to_vector(self) -> Vector3<Float> {
        Vector3::new(
            Float::from(self.x),
            Float::from(self.y),
            Float::from(self.z),
        )
    }
}
