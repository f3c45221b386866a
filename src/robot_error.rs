//! Error handling for robot tree construction and description loading

use std::io;

/// Unified error to report failures during joint tree construction and,
/// with the `allow_filesystem` feature, robot description loading.
/// All construction failures are fatal: no tree is produced and the
/// caller decides whether to abort loading or retry with corrected input.
#[derive(Debug)]
pub enum RobotError {
    /// The descriptor mapping has no root joint, more than one root
    /// joint, or links a joint from more than one parent.
    Configuration(String),
    /// The same joint name was encountered twice during construction.
    DuplicateName(String),
    /// A `linked_to` entry names a joint that does not exist.
    UnresolvedReference { joint: String, linked_to: String },
    /// A `linked_to` chain loops back onto one of its own ancestors.
    CyclicLink { joint: String },
    Io(io::Error),
    Parse(String),
    Validation(String),
}

impl std::fmt::Display for RobotError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            RobotError::Configuration(ref msg) =>
                write!(f, "Configuration Error: {}", msg),
            RobotError::DuplicateName(ref name) =>
                write!(f, "Duplicate Joint Name: {}", name),
            RobotError::UnresolvedReference { ref joint, ref linked_to } =>
                write!(f, "Unresolved Reference: joint '{}' links to unknown joint '{}'",
                       joint, linked_to),
            RobotError::CyclicLink { ref joint } =>
                write!(f, "Cyclic Link: joint '{}' would become its own ancestor", joint),
            RobotError::Io(ref err) =>
                write!(f, "IO Error: {}", err),
            RobotError::Parse(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            RobotError::Validation(ref msg) =>
                write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for RobotError {}

impl From<io::Error> for RobotError {
    fn from(err: io::Error) -> Self {
        RobotError::Io(err)
    }
}
