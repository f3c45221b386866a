//! Forward and inverse kinematics over a root-to-target joint chain.

use nalgebra::{Rotation3, Vector3};
use tracing::{debug, trace};

use crate::joints::{joints_from_root, JointHandle};
use crate::kinematic_traits::{Angles, Kinematics, Position};

/// Spatial distance (same units as joint origins) below which the solver
/// considers the target reached.
pub const DISTANCE_TOLERANCE: f64 = 0.001;

/// Finite-difference step in degrees used to estimate the directional
/// derivative of the chain position per joint.
pub const GRADIENT_STEP_DEG: f64 = 0.5;

/// Default cap on solver iterations.
pub const MAX_ITERATIONS: usize = 100;

/// Default step size applied to the estimated derivative.
pub const LEARNING_RATE: f64 = 0.5;

/// Tuning of the inverse kinematics solver. All fields are explicit so a
/// solve is fully determined by its inputs; there are no ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub max_iterations: usize,
    pub learning_rate: f64,
    /// Convergence threshold on the Euclidean distance to the target.
    pub epsilon: f64,
    /// Perturbation in degrees for the numerical derivative.
    pub delta: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_iterations: MAX_ITERATIONS,
            learning_rate: LEARNING_RATE,
            epsilon: DISTANCE_TOLERANCE,
            delta: GRADIENT_STEP_DEG,
        }
    }
}

/// Kinematics of one joint chain, from the tree root to a chosen target
/// joint. The path is extracted once at construction; the tree topology
/// is immutable after building, so the path stays valid for the lifetime
/// of this instance.
pub struct ChainKinematics {
    path: Vec<JointHandle>,
    config: SolverConfig,
}

impl ChainKinematics {
    /// Creates the kinematics for the chain ending at `target`, with
    /// default solver tuning.
    ///
    /// The root handle of the tree must still be alive here: parent
    /// links are weak, and a `target` whose ancestors were dropped
    /// yields a truncated chain (see
    /// [joints_from_root](crate::joints::joints_from_root)). The
    /// extracted path holds strong handles, so after construction this
    /// instance keeps its chain alive on its own.
    pub fn new(target: &JointHandle) -> Self {
        Self::new_with_config(target, SolverConfig::default())
    }

    pub fn new_with_config(target: &JointHandle, config: SolverConfig) -> Self {
        ChainKinematics {
            path: joints_from_root(target),
            config,
        }
    }

    /// Number of joints on the chain, root and target included. Angle
    /// vectors are indexed 0..dof() in this order.
    pub fn dof(&self) -> usize {
        self.path.len()
    }
}

impl Kinematics for ChainKinematics {
    /// Walks the chain root-first, accumulating the contribution of each
    /// joint. A joint contributes its local origin offset rotated by its
    /// own angle about its primary axis; the offset is not composed with
    /// the rotations of the joints before it. A joint with no rotation
    /// configured contributes nothing, not even its static offset.
    fn forward(&self, angles: &[f64]) -> Position {
        let mut position = Vector3::zeros();

        for (i, handle) in self.path.iter().enumerate() {
            let joint = handle.borrow();
            let rotation = match joint.rotation {
                Some(rotation) => rotation,
                None => continue,
            };

            let theta = angles.get(i).copied().unwrap_or(0.0).to_radians();
            let offset = match rotation.primary() {
                Some(axis) => Rotation3::from_axis_angle(&axis.unit(), theta) * joint.origin,
                // Rotation configured but no axis flag set: the offset
                // still counts, unrotated.
                None => joint.origin,
            };
            position += offset;
        }

        Position::from(position)
    }

    /// Coordinate-descent search: per outer iteration, each joint angle
    /// in path order is perturbed by `delta` degrees, the directional
    /// derivative of the alignment with the error vector is estimated
    /// from the perturbed chain position, and the angle is stepped along
    /// it and clamped into the joint's constraint. The error vector stays
    /// fixed for the whole sweep while committed updates to earlier
    /// joints are visible to later perturbed evaluations.
    fn inverse(&self, target: &Position) -> Angles {
        let config = &self.config;
        let mut angles = vec![0.0; self.path.len()];

        for iteration in 0..config.max_iterations {
            let current = self.forward(&angles);
            let error = target - current;
            let distance = error.norm();

            trace!(iteration, distance, "inverse kinematics step");
            if distance < config.epsilon {
                debug!(iteration, distance, "inverse kinematics converged");
                debug_assert!(crate::utils::is_valid(&angles));
                return angles;
            }

            for i in 0..angles.len() {
                let saved = angles[i];
                angles[i] = saved + config.delta;
                let perturbed = self.forward(&angles);

                let grad = (perturbed - current).dot(&error) / config.delta;
                let proposed = saved + config.learning_rate * grad;
                angles[i] = self.path[i].borrow().constraint.clamp(proposed);
            }
        }

        debug!(
            max_iterations = config.max_iterations,
            "inverse kinematics did not converge, returning best effort"
        );
        angles
    }
}

/// Euclidean distance between the local origin offsets of two joints.
pub fn distance_between_joints(a: &JointHandle, b: &JointHandle) -> f64 {
    (b.borrow().origin - a.borrow().origin).norm()
}
