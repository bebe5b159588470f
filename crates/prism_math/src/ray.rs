use crate::{Vec3, Vec4};

/// A ray in 3D space, parameterized as `origin + t * direction`.
///
/// The direction is not required to be normalized; intersection code
/// accounts for its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Origin as a homogeneous point (w = 1).
    #[inline]
    pub fn origin_homogeneous(&self) -> Vec4 {
        self.origin.extend(1.0)
    }

    /// Direction as a homogeneous vector (w = 0).
    #[inline]
    pub fn direction_homogeneous(&self) -> Vec4 {
        self.direction.extend(0.0)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }

    /// True when the direction has (numerically) no length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction.length_squared() < 1e-24
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_at_unnormalized_direction() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(ray.at(1.0), Vec3::ZERO);
    }

    #[test]
    fn test_ray_homogeneous() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(ray.origin_homogeneous().w, 1.0);
        assert_eq!(ray.direction_homogeneous().w, 0.0);
    }

    #[test]
    fn test_degenerate_ray() {
        assert!(Ray::new(Vec3::ONE, Vec3::ZERO).is_degenerate());
        assert!(!Ray::new(Vec3::ONE, Vec3::Y * 1e-3).is_degenerate());
    }
}
