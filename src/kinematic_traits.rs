//! Core types and the kinematics trait shared by the whole crate.

use bitflags::bitflags;
use nalgebra::{Point3, Unit, Vector3};

/// Cartesian position of a joint in 3D space, in the same length units
/// as the joint origins of the robot description.
pub type Position = Point3<f64>;

/// Joint angles in degrees. Index `i` always corresponds to element `i`
/// of the root-to-target path (root first, target last). Entries missing
/// from the tail are treated as zero by forward kinematics.
pub type Angles = Vec<f64>;

/// A single rotation axis in the joint's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector of this axis, for building nalgebra rotations.
    pub fn unit(&self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

bitflags! {
    /// Rotation axis flags of a joint. The robot description allows any
    /// combination of flags, but a joint rotates about a single axis only.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RotationAxis: u8 {
        const X = 0b001;
        const Y = 0b010;
        const Z = 0b100;
    }
}

impl RotationAxis {
    /// The single axis this joint rotates about. When more than one flag
    /// is set, only the first in the fixed priority x, then y, then z is
    /// honored; the remaining flags are ignored, the rotations are not
    /// composed. Returns None when no flag is set.
    pub fn primary(&self) -> Option<Axis> {
        if self.contains(RotationAxis::X) {
            Some(Axis::X)
        } else if self.contains(RotationAxis::Y) {
            Some(Axis::Y)
        } else if self.contains(RotationAxis::Z) {
            Some(Axis::Z)
        } else {
            None
        }
    }
}

/// Forward and inverse kinematics against a fixed root-to-target joint
/// chain.
pub trait Kinematics {
    /// Compute the 3D position of the target joint for the given angle
    /// vector (degrees, indexed in path order).
    fn forward(&self, angles: &[f64]) -> Position;

    /// Search an angle vector (degrees, indexed in path order) that
    /// drives the target joint toward the given position. Best effort:
    /// the result is returned even if the solver did not converge, and
    /// callers wanting a guarantee should check `forward` of the result
    /// against the target themselves.
    fn inverse(&self, target: &Position) -> Angles;
}
