//! Symbolic 3×3×3 cube engine: move vocabulary, coordinate permutations,
//! orientation tracking, and solved-state queries.
//!
//! The engine is pure synchronous computation. Callers own a [`CubeState`]
//! and mutate it one move at a time; each apply is atomic across the whole
//! affected layer group.

pub use cgmath;

/// Floating-point type used for orientation math.
pub type Float = f64;

/// Quaternion type used for cubie orientations.
pub type Quat = cgmath::Quaternion<Float>;

/// Default tolerance for treating a cubie orientation as identity.
pub const ORIENTATION_TOLERANCE: Float = 0.001;

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

pub mod axis;
pub mod coord;
pub mod moves;
pub mod sequence;
pub mod state;

pub use axis::{Axis, Layer};
pub use coord::CubieCoord;
pub use moves::{Direction, Face, Move, Slice};
pub use sequence::MoveSequence;
pub use state::{CubeState, Cubie, CubieId};
