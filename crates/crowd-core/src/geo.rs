//! Three-dimensional point type used for markers, agents, and destinations.
//!
//! Single precision matches what the rendering side uploads per instance.

use std::ops::Sub;

/// A point (or displacement vector) in world space.  `y` is up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Point3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length of `self` treated as a vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Point3) -> f32 {
        (other - self).length()
    }

    /// Angle in radians, in `[0, π]`, between two vectors.
    ///
    /// A zero-length operand has no direction; the result is then `π/2`
    /// (cosine 0), the same as for orthogonal vectors.
    pub fn angle(a: Point3, b: Point3) -> f32 {
        let len = a.length() * b.length();
        if len == 0.0 {
            return std::f32::consts::FRAC_PI_2;
        }
        (a.dot(b) / len).clamp(-1.0, 1.0).acos()
    }
}

impl Sub for Point3 {
    type Output = Point3;
    #[inline]
    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
