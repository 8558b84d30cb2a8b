use crate::general::lerp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub fn new(x: f64, y: f64) -> Point2d {
        Point2d { x, y }
    }

    /// lerp returns the point at fraction t on the segment from self to other.
    pub fn lerp(&self, other: &Point2d, t: f64) -> Point2d {
        Point2d {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }

    pub fn dist(&self, other: &Point2d) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_between_points() {
        let p = Point2d::new(0.0, 0.0).lerp(&Point2d::new(10.0, -4.0), 0.5);
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, -2.0);
    }

    #[test]
    fn dist_is_euclidean() {
        assert_relative_eq!(Point2d::new(0.0, 0.0).dist(&Point2d::new(3.0, 4.0)), 5.0);
    }
}
