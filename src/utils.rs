//! Helper functions

use crate::kinematic_traits::Position;

/// Print an angle vector (degrees) for quick inspection.
#[allow(dead_code)]
pub fn dump_angles(angles: &[f64]) {
    let mut row_str = String::new();
    for angle in angles {
        row_str.push_str(&format!("{:7.2} ", angle));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print a position for quick inspection.
#[allow(dead_code)]
pub fn dump_position(position: &Position) {
    println!(
        "({:7.3}, {:7.3}, {:7.3})",
        position.x, position.y, position.z
    );
}

/// Allows to specify joint values in whole degrees.
#[allow(dead_code)]
pub fn as_degrees<const N: usize>(degrees: [i32; N]) -> Vec<f64> {
    degrees.iter().map(|&d| d as f64).collect()
}

/// Checks if all angles in the vector are finite.
pub(crate) fn is_valid(angles: &[f64]) -> bool {
    angles.iter().all(|a| a.is_finite())
}
