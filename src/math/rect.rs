//! Axis-aligned wall region in the wall plane

use crate::core::types::{DVec2, DVec3};

/// Extents at or below this are treated as zero.
pub const EXTENT_EPSILON: f64 = 1e-9;

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Create rectangle from min and max corners
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Create rectangle at the origin with the given size
    pub fn from_size(size: DVec2) -> Self {
        Self { min: DVec2::ZERO, max: size }
    }

    /// Create rectangle from a corner and a size
    pub fn from_pos_size(pos: DVec2, size: DVec2) -> Self {
        Self { min: pos, max: pos + size }
    }

    /// Get size (max - min)
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True when the rectangle has no area to fill
    pub fn is_empty(&self) -> bool {
        self.width() <= EXTENT_EPSILON || self.height() <= EXTENT_EPSILON
    }

    /// Check if another rectangle lies entirely inside this one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x && other.max.x <= self.max.x &&
        other.min.y >= self.min.y && other.max.y <= self.max.y
    }
}

/// Lift a wall-plane point into 3D with z = 0
#[inline]
pub fn to_3d(v: DVec2) -> DVec3 {
    v.extend(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let rect = Rect::new(DVec2::new(1.0, 2.0), DVec2::new(4.0, 8.0));
        assert_eq!(rect.size(), DVec2::new(3.0, 6.0));
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 6.0);
    }

    #[test]
    fn test_from_pos_size() {
        let rect = Rect::from_pos_size(DVec2::new(10.0, 5.0), DVec2::new(2.0, 3.0));
        assert_eq!(rect.max, DVec2::new(12.0, 8.0));
        assert_eq!(Rect::from_size(DVec2::ONE).min, DVec2::ZERO);
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::from_size(DVec2::new(0.0, 5.0)).is_empty());
        assert!(Rect::from_size(DVec2::new(5.0, 0.0)).is_empty());
        assert!(!Rect::from_size(DVec2::new(5.0, 5.0)).is_empty());
    }

    #[test]
    fn test_contains_rect() {
        let wall = Rect::from_size(DVec2::new(100.0, 50.0));
        let inside = Rect::from_pos_size(DVec2::new(10.0, 10.0), DVec2::new(20.0, 20.0));
        let outside = Rect::from_pos_size(DVec2::new(90.0, 10.0), DVec2::new(20.0, 20.0));
        assert!(wall.contains_rect(&inside));
        assert!(wall.contains_rect(&wall));
        assert!(!wall.contains_rect(&outside));
    }

    #[test]
    fn test_to_3d() {
        assert_eq!(to_3d(DVec2::new(1.0, 2.0)), DVec3::new(1.0, 2.0, 0.0));
    }
}
