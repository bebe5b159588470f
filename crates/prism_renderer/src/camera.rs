//! Cameras for primary ray generation.
//!
//! A camera maps a normalized viewport coordinate to a world-space ray. `s`
//! runs left to right and `t` top to bottom, both over [0, 1]; the render
//! driver turns pixel indices (plus any jitter) into these coordinates.

use crate::sampling::random_in_unit_disk;
use crate::Ray;
use prism_math::Vec3;
use rand::RngCore;

/// Produces primary rays.
pub trait Camera: Send + Sync {
    /// Generate the ray through viewport coordinate `(s, t)`.
    fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray;
}

/// Orthonormal camera frame and the viewport it spans at `focus_dist`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    center: Vec3,
    u: Vec3,
    v: Vec3,
    upper_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Frame {
    fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f64,
        aspect: f64,
        focus_dist: f64,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * focus_dist;
        let viewport_width = viewport_height * aspect;

        // Camera basis vectors
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let upper_left = look_from - focus_dist * w - horizontal / 2.0 + vertical / 2.0;

        Self {
            center: look_from,
            u,
            v,
            upper_left,
            horizontal,
            vertical,
        }
    }

    #[inline]
    fn viewport_point(&self, s: f64, t: f64) -> Vec3 {
        self.upper_left + s * self.horizontal - t * self.vertical
    }
}

/// Pinhole camera.
#[derive(Debug, Clone)]
pub struct SimpleCamera {
    frame: Frame,
}

impl SimpleCamera {
    /// Create a pinhole camera.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: viewport width / height
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f64, aspect: f64) -> Self {
        Self {
            frame: Frame::new(look_from, look_at, vup, vfov, aspect, 1.0),
        }
    }
}

impl Camera for SimpleCamera {
    fn get_ray(&self, s: f64, t: f64, _rng: &mut dyn RngCore) -> Ray {
        let target = self.frame.viewport_point(s, t);
        Ray::new(self.frame.center, target - self.frame.center)
    }
}

/// Thin-lens camera with depth of field.
#[derive(Debug, Clone)]
pub struct LensCamera {
    frame: Frame,
    lens_radius: f64,
}

impl LensCamera {
    /// Create a thin-lens camera.
    ///
    /// - `aperture`: lens diameter, 0 gives a pinhole
    /// - `focus_dist`: distance to the plane in perfect focus
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f64,
        aspect: f64,
        aperture: f64,
        focus_dist: f64,
    ) -> Self {
        Self {
            frame: Frame::new(look_from, look_at, vup, vfov, aspect, focus_dist),
            lens_radius: aperture.max(0.0) / 2.0,
        }
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let p = random_in_unit_disk(rng) * self.lens_radius;
        self.frame.center + p.x * self.frame.u + p.y * self.frame.v
    }
}

impl Camera for LensCamera {
    fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let target = self.frame.viewport_point(s, t);
        let origin = if self.lens_radius <= 0.0 {
            self.frame.center
        } else {
            self.defocus_disk_sample(rng)
        };
        Ray::new(origin, target - origin)
    }
}
