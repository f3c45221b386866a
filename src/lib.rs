//! Rust implementation of forward and inverse kinematics for articulated
//! robots modeled as rooted joint trees.
//!
//! A robot description maps joint names to joint descriptors: a local
//! origin offset, an optional single rotation axis, an angular constraint
//! and the ordered list of child joints. The tree builder wires the
//! descriptors into a linked hierarchy with exactly one root; forward
//! kinematics evaluates the 3D position of any joint for a vector of
//! joint angles in degrees, and inverse kinematics searches an angle
//! vector driving a target joint toward a desired position by
//! coordinate-descent over numerical directional derivatives.
//!
//! # Features
//!
//! - The joint tree is built once and immutable afterwards; construction
//!   rejects missing or duplicate roots, unresolved child references,
//!   joints linked from more than one parent, and cyclic links.
//! - Forward kinematics is pure and has no failure modes: angle entries
//!   missing from the vector default to zero.
//! - The inverse solver clamps every per-joint update into the joint's
//!   angular constraint, so returned angles never leave the mechanical
//!   limits, and returns best-effort angles when it does not converge.
//! - All solver tuning (iteration cap, learning rate, convergence
//!   tolerance, finite-difference step) is explicit per-call
//!   configuration.
//! - With the `allow_filesystem` feature (default), robot descriptions
//!   are loaded from JSON files or strings, with the schema defaults of
//!   the description format applied.
//!
//! Collision detection, dynamics and rendering are out of scope.

pub mod kinematic_traits;
pub mod constraints;
pub mod joints;
pub mod kinematics_impl;
pub mod robot;
pub mod robot_error;

pub mod utils;

#[cfg(feature = "allow_filesystem")]
pub mod robot_from_file;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
