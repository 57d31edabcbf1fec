use crate::{camera::Float, vec3::Point3};

/// Linear motion of a position between two keyframes.
///
/// Outside of `[start_time, end_time]` the position holds at the nearest keyframe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimatedTransform {
    start_pos: Point3,
    end_pos: Point3,
    start_time: Float,
    end_time: Float,
    is_animated: bool,
}

impl AnimatedTransform {
    pub fn new(start_pos: Point3, end_pos: Point3, start_time: Float, end_time: Float) -> Self {
        AnimatedTransform {
            start_pos,
            end_pos,
            start_time,
            end_time,
            is_animated: start_pos != end_pos,
        }
    }

    /// A transform that never moves
    pub fn stationary(position: Point3) -> Self {
        Self::new(position, position, 0.0, 0.0)
    }

    pub fn is_animated(&self) -> bool {
        self.is_animated
    }

    /// Position of the animated object at `time`
    pub fn apply_inverse(&self, time: Float) -> Point3 {
        if !self.is_animated {
            return self.start_pos;
        }
        self.interpolate(time)
    }

    fn interpolate(&self, time: Float) -> Point3 {
        let span = self.end_time - self.start_time;
        // Zero-length window: jump from start to end at the keyframe
        let t = if span <= 0.0 {
            if time < self.end_time {
                0.0
            } else {
                1.0
            }
        } else {
            ((time - self.start_time) / span).clamp(0.0, 1.0)
        };
        self.start_pos * (1.0 - t) + self.end_pos * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::Vec3;
    use approx::assert_abs_diff_eq;

    fn moving() -> AnimatedTransform {
        AnimatedTransform::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, -6.0), 1.0, 3.0)
    }

    #[test]
    fn test_stationary_is_not_animated() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let transform = AnimatedTransform::stationary(p);
        assert!(!transform.is_animated());
        assert_eq!(transform.apply_inverse(-10.0), p);
        assert_eq!(transform.apply_inverse(10.0), p);
    }

    #[test]
    fn test_equal_endpoints_are_not_animated() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(!AnimatedTransform::new(p, p, 0.0, 1.0).is_animated());
        assert!(moving().is_animated());
    }

    #[test]
    fn test_holds_start_before_window() {
        let transform = moving();
        assert_eq!(transform.apply_inverse(1.0), Vec3::zeros());
        assert_eq!(transform.apply_inverse(0.0), Vec3::zeros());
        assert_eq!(transform.apply_inverse(-100.0), Vec3::zeros());
    }

    #[test]
    fn test_holds_end_after_window() {
        let transform = moving();
        assert_eq!(transform.apply_inverse(3.0), Vec3::new(2.0, 4.0, -6.0));
        assert_eq!(transform.apply_inverse(3.5), Vec3::new(2.0, 4.0, -6.0));
        assert_eq!(transform.apply_inverse(1e9), Vec3::new(2.0, 4.0, -6.0));
    }

    #[test]
    fn test_midpoint() {
        let transform = moving();
        assert_abs_diff_eq!(
            transform.apply_inverse(2.0),
            Vec3::new(1.0, 2.0, -3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_linear_between_keyframes() {
        let transform = moving();
        assert_abs_diff_eq!(
            transform.apply_inverse(1.5),
            Vec3::new(0.5, 1.0, -1.5),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_length_window() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        let transform = AnimatedTransform::new(a, b, 2.0, 2.0);
        assert_eq!(transform.apply_inverse(1.0), a);
        assert_eq!(transform.apply_inverse(2.0), b);
        assert_eq!(transform.apply_inverse(3.0), b);
    }
}
