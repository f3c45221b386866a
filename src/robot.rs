//! The robot aggregate: description metadata plus the joint tree root.

use crate::joints::{find_joint_by_name, JointHandle};

/// Metadata of a robot description.
#[derive(Debug, Clone, PartialEq)]
pub struct Information {
    pub name: String,
    pub version: f64,
    pub description: String,
    pub author: String,
}

/// A loaded robot: the description metadata and the root of the joint
/// tree. The tree topology is immutable once the robot is built; forward
/// and inverse kinematics only read it.
pub struct Robot {
    pub information: Information,
    pub root: JointHandle,
}

impl Robot {
    pub fn new(information: Information, root: JointHandle) -> Self {
        Robot { information, root }
    }

    /// Find a joint anywhere in the hierarchy by name (depth-first
    /// pre-order, first match).
    pub fn find_joint(&self, name: &str) -> Option<JointHandle> {
        find_joint_by_name(&self.root, name)
    }
}
