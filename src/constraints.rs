#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    /// Lower limit in degrees, always less than the upper limit.
    pub min: f64,

    /// Upper limit in degrees.
    pub max: f64,
}

impl Constraint {
    /// The widest range the robot description format allows.
    pub const FULL_RANGE: Constraint = Constraint {
        min: -180.0,
        max: 180.0,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Constraint { min, max }
    }

    /// Clamp the angle (degrees) into the allowed range.
    pub fn clamp(&self, angle: f64) -> f64 {
        angle.clamp(self.min, self.max)
    }

    /// Checks if the angle (degrees) lies within the allowed range,
    /// boundaries included.
    pub fn compliant(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint::FULL_RANGE
    }
}
