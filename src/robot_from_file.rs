//! Supports loading robot descriptions from JSON (optional)
//!
//! The description format is a JSON object with an `information` block and
//! a `joints` mapping from joint name to joint descriptor. Everything but
//! the information name and the joint names is optional and defaulted.

use std::collections::HashMap;
use std::path::Path;

use nalgebra::Vector3;
use serde::Deserialize;

use crate::constraints::Constraint;
use crate::joints::{create_joint_tree, JointDescriptor};
use crate::kinematic_traits::RotationAxis;
use crate::robot::{Information, Robot};
use crate::robot_error::RobotError;

fn default_version() -> f64 { 1.0 }
fn default_description() -> String { "Robot".to_string() }
fn default_author() -> String { "Unknown".to_string() }

#[derive(Deserialize)]
struct InformationDesc {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: f64,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_author")]
    pub author: String,
}

#[derive(Deserialize)]
struct PositionDesc {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Deserialize)]
struct RotationDesc {
    #[serde(default)]
    pub x: bool,
    #[serde(default)]
    pub y: bool,
    #[serde(default)]
    pub z: bool,
}

#[derive(Deserialize)]
struct ConstraintDesc {
    pub min: f64,
    pub max: f64,
}

#[derive(Deserialize)]
struct JointDesc {
    /// Optional numeric id; carried by some descriptions, unused here.
    #[serde(default)]
    #[allow(dead_code)]
    pub id: Option<u32>,
    #[serde(default)]
    pub is_root: bool,
    #[serde(default)]
    pub constraint: Option<ConstraintDesc>,
    #[serde(default)]
    pub rotation: Option<RotationDesc>,
    #[serde(default)]
    pub origin: Option<PositionDesc>,
    #[serde(default)]
    pub linked_to: Vec<String>,
}

#[derive(Deserialize)]
struct RobotDesc {
    pub information: InformationDesc,
    pub joints: HashMap<String, JointDesc>,
}

impl Robot {
    /// Load a robot description from a JSON string. A minimal example:
    /// ```json
    /// {
    ///   "information": { "name": "robot_arm" },
    ///   "joints": {
    ///     "base": { "is_root": true, "linked_to": ["upper_arm"] },
    ///     "upper_arm": {
    ///       "origin": { "x": 0.0, "y": 40.0, "z": 0.0 },
    ///       "rotation": { "z": true },
    ///       "constraint": { "min": -90.0, "max": 90.0 }
    ///     }
    ///   }
    /// }
    /// ```
    /// Constraints default to the full `[-180, 180]` range, origins to
    /// zero, and `linked_to` to an empty list.
    pub fn from_json_str(data: &str) -> Result<Self, RobotError> {
        let descriptor: RobotDesc = serde_json::from_str(data)
            .map_err(|e| RobotError::Parse(format!("{}", e)))?;

        validate(&descriptor)?;

        let mut descriptors = HashMap::with_capacity(descriptor.joints.len());
        for (name, joint) in &descriptor.joints {
            descriptors.insert(name.clone(), convert(joint));
        }

        let root = create_joint_tree(&descriptors)?;
        Ok(Robot::new(
            Information {
                name: descriptor.information.name,
                version: descriptor.information.version,
                description: descriptor.information.description,
                author: descriptor.information.author,
            },
            root,
        ))
    }

    /// Load a robot description from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RobotError> {
        let contents = std::fs::read_to_string(path)?;
        Robot::from_json_str(&contents)
    }
}

/// Checks everything the description format promises before the tree is
/// built: non-empty names, angular bounds within the representable range,
/// ordered constraints.
fn validate(descriptor: &RobotDesc) -> Result<(), RobotError> {
    if descriptor.information.name.is_empty() {
        return Err(RobotError::Validation(
            "information.name must not be empty".to_string(),
        ));
    }

    for (name, joint) in &descriptor.joints {
        if name.is_empty() {
            return Err(RobotError::Validation(
                "joint names must not be empty".to_string(),
            ));
        }
        if let Some(constraint) = &joint.constraint {
            for (label, value) in [("min", constraint.min), ("max", constraint.max)] {
                if !(-180.0..=180.0).contains(&value) {
                    return Err(RobotError::Validation(format!(
                        "joint '{}': constraint {} must be within [-180, 180] (got {})",
                        name, label, value
                    )));
                }
            }
            if constraint.min >= constraint.max {
                return Err(RobotError::Validation(format!(
                    "joint '{}': constraint min must be less than max ({} >= {})",
                    name, constraint.min, constraint.max
                )));
            }
        }
        if let Some(origin) = &joint.origin {
            for (label, value) in [("x", origin.x), ("y", origin.y), ("z", origin.z)] {
                if !value.is_finite() {
                    return Err(RobotError::Validation(format!(
                        "joint '{}': origin {} must be finite (got {})",
                        name, label, value
                    )));
                }
            }
        }
        for linked in &joint.linked_to {
            if linked.is_empty() {
                return Err(RobotError::Validation(format!(
                    "joint '{}': linked_to entries must not be empty",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn convert(joint: &JointDesc) -> JointDescriptor {
    JointDescriptor {
        is_root: joint.is_root,
        constraint: joint
            .constraint
            .as_ref()
            .map(|c| Constraint::new(c.min, c.max))
            .unwrap_or(Constraint::FULL_RANGE),
        rotation: joint.rotation.as_ref().map(|r| {
            let mut axis = RotationAxis::empty();
            axis.set(RotationAxis::X, r.x);
            axis.set(RotationAxis::Y, r.y);
            axis.set(RotationAxis::Z, r.z);
            axis
        }),
        origin: joint
            .origin
            .as_ref()
            .map(|o| Vector3::new(o.x, o.y, o.z))
            .unwrap_or_else(Vector3::zeros),
        linked_to: joint.linked_to.clone(),
    }
}
