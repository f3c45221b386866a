use std::collections::HashMap;

use anyhow::{anyhow, Result};
use nalgebra::Vector3;

use rs_tree_kinematics::constraints::Constraint;
use rs_tree_kinematics::joints::{create_joint_tree, find_joint_by_name, JointDescriptor};
use rs_tree_kinematics::kinematic_traits::{Kinematics, Position, RotationAxis};
use rs_tree_kinematics::kinematics_impl::ChainKinematics;
use rs_tree_kinematics::utils::{dump_angles, dump_position};

/// Usage example.
fn main() -> Result<()> {
    // A small arm: the base anchors the tree, two joints rotate about z,
    // the wrist rotates about x within +/- 45 degrees.
    let mut joints = HashMap::new();
    joints.insert(
        "base".to_string(),
        JointDescriptor {
            is_root: true,
            linked_to: vec!["shoulder".to_string()],
            ..Default::default()
        },
    );
    joints.insert(
        "shoulder".to_string(),
        JointDescriptor {
            origin: Vector3::new(60.0, 0.0, 0.0),
            rotation: Some(RotationAxis::Z),
            linked_to: vec!["elbow".to_string()],
            ..Default::default()
        },
    );
    joints.insert(
        "elbow".to_string(),
        JointDescriptor {
            origin: Vector3::new(50.0, 0.0, 0.0),
            rotation: Some(RotationAxis::Z),
            constraint: Constraint::new(-120.0, 120.0),
            linked_to: vec!["wrist".to_string()],
            ..Default::default()
        },
    );
    joints.insert(
        "wrist".to_string(),
        JointDescriptor {
            origin: Vector3::new(25.0, 0.0, 0.0),
            rotation: Some(RotationAxis::X),
            constraint: Constraint::new(-45.0, 45.0),
            ..Default::default()
        },
    );

    let root = create_joint_tree(&joints)?;
    let wrist =
        find_joint_by_name(&root, "wrist").ok_or_else(|| anyhow!("wrist joint not found"))?;
    let kinematics = ChainKinematics::new(&wrist);

    let angles = vec![0.0, 30.0, -20.0, 10.0]; // Degrees, base to wrist
    println!("Joint angles (base to wrist):");
    dump_angles(&angles);

    println!("Wrist position:");
    dump_position(&kinematics.forward(&angles));

    let target = Position::new(110.0, 20.0, 0.0);
    println!("Solving toward target:");
    dump_position(&target);

    let solution = kinematics.inverse(&target);
    println!("Solved angles:");
    dump_angles(&solution);

    let reached = kinematics.forward(&solution);
    println!("Reached position, distance {:.4}:", (target - reached).norm());
    dump_position(&reached);

    #[cfg(feature = "allow_filesystem")]
    {
        // This requires the JSON loader
        use rs_tree_kinematics::robot::Robot;
        let robot = Robot::from_json_file("src/tests/data/robot_arm.json")?;
        println!(
            "Loaded '{}' (version {}), root joint '{}'",
            robot.information.name,
            robot.information.version,
            robot.root.borrow().name
        );
    }

    Ok(())
}
