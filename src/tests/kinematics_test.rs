#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use nalgebra::Vector3;

    use crate::constraints::Constraint;
    use crate::joints::{create_joint_tree, find_joint_by_name, joints_from_root};
    use crate::kinematic_traits::{Kinematics, Position, RotationAxis};
    use crate::kinematics_impl::{distance_between_joints, ChainKinematics, SolverConfig};
    use crate::tests::test_utils::{build_arm, rotating_descriptor, root_descriptor, single_joint};

    const TOLERANCE: f64 = 1e-9;

    fn assert_position(actual: &Position, expected: (f64, f64, f64)) {
        let expected = Position::new(expected.0, expected.1, expected.2);
        let distance = (actual - expected).norm();
        assert!(
            distance < TOLERANCE,
            "expected {}, got {} (distance {})",
            expected,
            actual,
            distance
        );
    }

    #[test]
    fn test_forward_all_zero_non_rotating_chain() {
        // Joints without a rotation axis contribute nothing, not even
        // their static offsets.
        let mut descriptors = HashMap::new();
        let mut base = root_descriptor(&["link"]);
        base.origin = Vector3::new(10.0, 0.0, 0.0);
        descriptors.insert("base".to_string(), base);
        let mut link = rotating_descriptor([7.0, 8.0, 9.0], RotationAxis::Z, &[]);
        link.rotation = None;
        descriptors.insert("link".to_string(), link);

        let root = create_joint_tree(&descriptors).expect("tree must build");
        let link = find_joint_by_name(&root, "link").expect("link exists");
        let kinematics = ChainKinematics::new(&link);

        assert_position(&kinematics.forward(&[0.0, 0.0]), (0.0, 0.0, 0.0));
        assert_position(&kinematics.forward(&[45.0, 90.0]), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_forward_zero_angle_keeps_offset() {
        let pivot = single_joint([3.0, 4.0, 5.0], RotationAxis::Z, None);
        let kinematics = ChainKinematics::new(&pivot);
        assert_position(&kinematics.forward(&[0.0]), (3.0, 4.0, 5.0));
    }

    #[test]
    fn test_forward_x_axis_isolation() {
        // Rotation about x leaves an x-aligned offset unchanged
        let pivot = single_joint([1.0, 0.0, 0.0], RotationAxis::X, None);
        let kinematics = ChainKinematics::new(&pivot);
        assert_position(&kinematics.forward(&[90.0]), (1.0, 0.0, 0.0));

        // and turns a y-aligned offset into a z-aligned one
        let pivot = single_joint([0.0, 1.0, 0.0], RotationAxis::X, None);
        let kinematics = ChainKinematics::new(&pivot);
        assert_position(&kinematics.forward(&[90.0]), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_forward_y_and_z_axis() {
        let pivot = single_joint([0.0, 0.0, 1.0], RotationAxis::Y, None);
        let kinematics = ChainKinematics::new(&pivot);
        assert_position(&kinematics.forward(&[90.0]), (1.0, 0.0, 0.0));

        let pivot = single_joint([1.0, 0.0, 0.0], RotationAxis::Z, None);
        let kinematics = ChainKinematics::new(&pivot);
        assert_position(&kinematics.forward(&[90.0]), (0.0, 1.0, 0.0));
    }

    #[test]
    fn test_forward_axis_priority_x_wins() {
        // Both x and z are flagged; only x is honored, the flags are not
        // composed. A z rotation would move (0,1,0) to (-1,0,0) instead.
        let pivot = single_joint([0.0, 1.0, 0.0], RotationAxis::X | RotationAxis::Z, None);
        let kinematics = ChainKinematics::new(&pivot);
        assert_position(&kinematics.forward(&[90.0]), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_forward_empty_rotation_flags_add_unrotated_offset() {
        // A rotation entry with no axis set still contributes the offset,
        // unrotated, whatever the angle.
        let pivot = single_joint([3.0, 4.0, 5.0], RotationAxis::empty(), None);
        let kinematics = ChainKinematics::new(&pivot);
        assert_position(&kinematics.forward(&[90.0]), (3.0, 4.0, 5.0));
    }

    #[test]
    fn test_forward_missing_angles_default_to_zero() {
        let root = build_arm();
        let wrist = find_joint_by_name(&root, "wrist").expect("wrist exists");
        let kinematics = ChainKinematics::new(&wrist);
        assert_eq!(kinematics.dof(), 4);

        // a truncated vector behaves as if padded with zeros
        let full = kinematics.forward(&[0.0, 90.0, 0.0, 0.0]);
        let partial = kinematics.forward(&[0.0, 90.0]);
        assert_position(&partial, (full.x, full.y, full.z));
        // shoulder at +90 moved off the x axis, so this is not the
        // all-zero position
        assert!((full - kinematics.forward(&[])).norm() > 1.0);

        let zeros = kinematics.forward(&[0.0, 0.0, 0.0, 0.0]);
        let empty = kinematics.forward(&[]);
        assert_position(&empty, (zeros.x, zeros.y, zeros.z));

        // extra entries beyond the path are ignored
        let extra = kinematics.forward(&[0.0, 90.0, 0.0, 0.0, 77.0, -13.0]);
        assert_position(&extra, (full.x, full.y, full.z));
    }

    #[test]
    fn test_forward_accumulates_independent_rotations() {
        // Each joint rotates its own local offset by its own angle; the
        // rotations are not chained into composed frames.
        let root = build_arm();
        let wrist = find_joint_by_name(&root, "wrist").expect("wrist exists");
        let kinematics = ChainKinematics::new(&wrist);
        assert_eq!(kinematics.dof(), 4);

        let position = kinematics.forward(&[0.0, 90.0, -90.0, 0.0]);
        // shoulder (60,0,0) rotated +90 about z -> (0,60,0)
        // elbow (50,0,0) rotated -90 about z -> (0,-50,0)
        // wrist (25,0,0) rotated about x stays (25,0,0)
        assert_position(&position, (25.0, 10.0, 0.0));
    }

    #[test]
    fn test_inverse_single_joint_converges() {
        let pivot = single_joint([40.0, 0.0, 0.0], RotationAxis::Z, None);
        let kinematics = ChainKinematics::new(&pivot);

        // reachable: 30 degrees along the rotation circle
        let target = Position::new(40.0 * 30f64.to_radians().cos(), 40.0 * 30f64.to_radians().sin(), 0.0);
        let solution = kinematics.inverse(&target);

        assert_eq!(solution.len(), 1);
        let reached = kinematics.forward(&solution);
        let distance = (target - reached).norm();
        assert!(
            distance < 0.001,
            "did not converge: distance {} with angles {:?}",
            distance,
            solution
        );
    }

    #[test]
    fn test_inverse_two_joint_chain_converges() {
        // Joints on different axes: the upper sweeps the xy-plane, the
        // lower the yz-plane.
        let mut descriptors = HashMap::new();
        let mut upper = rotating_descriptor([60.0, 0.0, 0.0], RotationAxis::Z, &["lower"]);
        upper.is_root = true;
        descriptors.insert("upper".to_string(), upper);
        descriptors.insert(
            "lower".to_string(),
            rotating_descriptor([0.0, 50.0, 0.0], RotationAxis::X, &[]),
        );

        let root = create_joint_tree(&descriptors).expect("tree must build");
        let lower = find_joint_by_name(&root, "lower").expect("lower exists");
        let kinematics = ChainKinematics::new(&lower);

        // target generated by known angles, so it is exactly reachable
        let target = kinematics.forward(&[15.0, 25.0]);
        let solution = kinematics.inverse(&target);

        let reached = kinematics.forward(&solution);
        let distance = (target - reached).norm();
        assert!(
            distance < 0.001,
            "did not converge: distance {} with angles {:?}",
            distance,
            solution
        );
    }

    #[test]
    fn test_inverse_respects_constraints() {
        let pivot = single_joint(
            [40.0, 0.0, 0.0],
            RotationAxis::Z,
            Some(Constraint::new(-10.0, 10.0)),
        );
        let kinematics = ChainKinematics::new(&pivot);

        // 90 degrees away: unreachable within the constraint
        let solution = kinematics.inverse(&Position::new(0.0, 40.0, 0.0));
        for angle in &solution {
            assert!(
                (-10.0..=10.0).contains(angle),
                "angle {} escaped the [-10, 10] constraint",
                angle
            );
        }
    }

    #[test]
    fn test_inverse_unreachable_target_stays_compliant() {
        let root = build_arm();
        let wrist = find_joint_by_name(&root, "wrist").expect("wrist exists");
        let kinematics = ChainKinematics::new(&wrist);

        // far outside the arm's reach
        let solution = kinematics.inverse(&Position::new(1000.0, 1000.0, 1000.0));
        assert_eq!(solution.len(), 4);

        let path = joints_from_root(&wrist);
        for (angle, joint) in solution.iter().zip(path.iter()) {
            assert!(
                joint.borrow().constraint.compliant(*angle),
                "angle {} violates the constraint of '{}'",
                angle,
                joint.borrow().name
            );
        }
    }

    #[test]
    fn test_inverse_zero_iterations_returns_zeros() {
        let pivot = single_joint([40.0, 0.0, 0.0], RotationAxis::Z, None);
        let config = SolverConfig {
            max_iterations: 0,
            ..Default::default()
        };
        let kinematics = ChainKinematics::new_with_config(&pivot, config);

        let solution = kinematics.inverse(&Position::new(0.0, 40.0, 0.0));
        assert_eq!(solution, vec![0.0]);
    }

    #[test]
    fn test_inverse_already_at_target() {
        let pivot = single_joint([40.0, 0.0, 0.0], RotationAxis::Z, None);
        let kinematics = ChainKinematics::new(&pivot);

        let solution = kinematics.inverse(&Position::new(40.0, 0.0, 0.0));
        assert_eq!(solution, vec![0.0]);
    }

    #[test]
    fn test_distance_between_joints() {
        let root = build_arm();
        let shoulder = find_joint_by_name(&root, "shoulder").expect("shoulder exists");
        let elbow = find_joint_by_name(&root, "elbow").expect("elbow exists");

        // origins (60,0,0) and (50,0,0)
        let distance = distance_between_joints(&shoulder, &elbow);
        assert!((distance - 10.0).abs() < TOLERANCE);
    }
}
