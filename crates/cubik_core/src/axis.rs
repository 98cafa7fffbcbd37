//! Principal axes and layer selectors.

use cgmath::Vector3;
use strum::EnumIter;

use crate::Float;
use crate::coord::CubieCoord;

/// Principal axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left-right axis (R is positive).
    X,
    /// Down-up axis (U is positive).
    Y,
    /// Back-front axis (F is positive).
    Z,
}

impl Axis {
    /// Returns the unit vector along the axis.
    pub fn unit_vector(self) -> Vector3<Float> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Layer selector: all cubies whose coordinate along `axis` equals `value`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
    /// Axis along which the layer is selected.
    pub axis: Axis,
    /// Coordinate value along the axis, in {−1, 0, 1}.
    pub value: i8,
}

impl Layer {
    /// Returns whether `coord` lies in the layer.
    pub fn contains(self, coord: CubieCoord) -> bool {
        coord.get(self.axis) == self.value
    }
}
