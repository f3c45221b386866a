//! The joint tree: node model, builder, and navigation.
//!
//! A robot is a strictly rooted, acyclic hierarchy of joints. Children are
//! owned by their parent in the order the description lists them; the
//! parent link is a weak back-reference, so dropping the root drops the
//! whole tree. Topology is immutable once [create_joint_tree] returns.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use nalgebra::Vector3;
use tracing::debug;

use crate::constraints::Constraint;
use crate::kinematic_traits::RotationAxis;
use crate::robot_error::RobotError;

/// Shared handle to a joint node. Cloning the handle clones the pointer,
/// not the joint.
pub type JointHandle = Rc<RefCell<JointNode>>;

/// One joint of the robot, linked into the tree.
#[derive(Debug)]
pub struct JointNode {
    /// Unique, non-empty joint name.
    pub name: String,

    /// Local position offset relative to the parent, before rotation.
    pub origin: Vector3<f64>,

    /// Current angle in degrees. Informational only; forward and inverse
    /// kinematics take explicit angle vectors and never read or write it.
    pub angle: f64,

    /// Allowed angular range in degrees.
    pub constraint: Constraint,

    /// Rotation axis flags, or None for a joint that does not rotate.
    pub rotation: Option<RotationAxis>,

    /// Weak back-reference to the parent; empty for the root.
    pub parent: Weak<RefCell<JointNode>>,

    /// Owned children, in the order the description linked them.
    pub joints: Vec<JointHandle>,
}

/// Validated description of a single joint, keyed by name in the
/// descriptor mapping handed to [create_joint_tree].
#[derive(Debug, Clone)]
pub struct JointDescriptor {
    /// Exactly one descriptor per robot carries `true` here.
    pub is_root: bool,
    pub constraint: Constraint,
    pub rotation: Option<RotationAxis>,
    pub origin: Vector3<f64>,
    /// Ordered names of the child joints.
    pub linked_to: Vec<String>,
}

impl Default for JointDescriptor {
    fn default() -> Self {
        JointDescriptor {
            is_root: false,
            constraint: Constraint::FULL_RANGE,
            rotation: None,
            origin: Vector3::zeros(),
            linked_to: Vec::new(),
        }
    }
}

/// Build the linked joint tree from a validated descriptor mapping.
///
/// Exactly one descriptor must have `is_root` set; zero or several root
/// joints, a `linked_to` name without a descriptor, a joint linked from
/// more than one parent, and a link that loops back onto an ancestor are
/// all rejected. On success the returned handle is the root and every
/// joint of the mapping is reachable from it.
pub fn create_joint_tree(
    descriptors: &HashMap<String, JointDescriptor>,
) -> Result<JointHandle, RobotError> {
    let mut root_name: Option<&str> = None;
    for (name, descriptor) in descriptors {
        if descriptor.is_root {
            if let Some(previous) = root_name {
                return Err(RobotError::Configuration(format!(
                    "more than one root joint in robot description: '{}' and '{}'",
                    previous, name
                )));
            }
            root_name = Some(name);
        }
    }
    let root_name = root_name.ok_or_else(|| {
        RobotError::Configuration("no root joint found in robot description".to_string())
    })?;

    let mut nodes: HashMap<String, JointHandle> = HashMap::with_capacity(descriptors.len());
    for (name, descriptor) in descriptors {
        let node = Rc::new(RefCell::new(JointNode {
            name: name.clone(),
            origin: descriptor.origin,
            angle: 0.0,
            constraint: descriptor.constraint,
            rotation: descriptor.rotation,
            parent: Weak::new(),
            joints: Vec::new(),
        }));
        if nodes.insert(name.clone(), node).is_some() {
            return Err(RobotError::DuplicateName(name.clone()));
        }
    }

    for (name, descriptor) in descriptors {
        let parent = &nodes[name];
        for child_name in &descriptor.linked_to {
            let child = nodes.get(child_name).ok_or_else(|| {
                RobotError::UnresolvedReference {
                    joint: name.clone(),
                    linked_to: child_name.clone(),
                }
            })?;
            attach(parent, child)?;
        }
    }

    debug!(
        joints = descriptors.len(),
        root = root_name,
        "joint tree built"
    );
    Ok(nodes[root_name].clone())
}

/// Wire `child` under `parent`, keeping the tree invariants: a joint has
/// at most one parent, and never appears among its own ancestors.
fn attach(parent: &JointHandle, child: &JointHandle) -> Result<(), RobotError> {
    // Ancestor membership check; this also rejects a joint linked to itself.
    let mut cursor = Some(parent.clone());
    while let Some(ancestor) = cursor {
        if Rc::ptr_eq(&ancestor, child) {
            return Err(RobotError::CyclicLink {
                joint: child.borrow().name.clone(),
            });
        }
        cursor = ancestor.borrow().parent.upgrade();
    }

    if child.borrow().parent.upgrade().is_some() {
        return Err(RobotError::Configuration(format!(
            "joint '{}' is linked from more than one parent",
            child.borrow().name
        )));
    }

    child.borrow_mut().parent = Rc::downgrade(parent);
    parent.borrow_mut().joints.push(child.clone());
    Ok(())
}

/// Find a joint by name, depth-first pre-order starting at `root`.
/// Child order is fixed by construction, so the first match is
/// deterministic. Absence is not an error.
pub fn find_joint_by_name(root: &JointHandle, name: &str) -> Option<JointHandle> {
    if root.borrow().name == name {
        return Some(root.clone());
    }
    for child in root.borrow().joints.iter() {
        if let Some(found) = find_joint_by_name(child, name) {
            return Some(found);
        }
    }
    None
}

/// The ordered chain of joints from the root down to `joint`, both
/// inclusive: index 0 is the root, the last index is `joint` itself.
/// This ordering is the indexing contract for angle vectors in both
/// forward and inverse kinematics.
///
/// Parent links are weak: ancestors are only reachable while a strong
/// handle to the root (or the tree's [Robot](crate::robot::Robot)) is
/// alive. If the ancestors have been dropped, the walk stops where the
/// chain was severed and the path is silently truncated, so keep the
/// root alive while extracting paths. The returned vector holds strong
/// handles and keeps the chain alive by itself afterwards.
pub fn joints_from_root(joint: &JointHandle) -> Vec<JointHandle> {
    let mut path = vec![joint.clone()];
    let mut cursor = joint.borrow().parent.upgrade();
    while let Some(node) = cursor {
        cursor = node.borrow().parent.upgrade();
        path.push(node);
    }
    path.reverse();
    path
}
