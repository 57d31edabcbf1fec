use crate::camera::Float;

/// Scalar range over ray parameters and color channels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {
    pub fn new(min: Float, max: Float) -> Self {
        Interval { min, max }
    }

    /// Exclusive on both ends
    pub fn surrounds(&self, x: Float) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: Float) -> Float {
        x.clamp(self.min, self.max)
    }

    /// Same lower bound, upper bound replaced by `max`
    pub fn with_max(&self, max: Float) -> Self {
        Interval { min: self.min, max }
    }
}
