//! Sphere primitive for ray tracing.

use std::f64::consts::PI;
use std::sync::Arc;

use crate::hittable::{hit_window, HitRecord, Hittable};
use crate::{Material, Ray};
use prism_math::Vec3;

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Option<Arc<dyn Material>>,
}

impl Sphere {
    /// Create a new sphere with no material.
    ///
    /// Without a material the tracer shades it with the normal-based color.
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material: None,
        }
    }

    /// Create a new sphere with a shared material.
    pub fn with_material(center: Vec3, radius: f64, material: Arc<dyn Material>) -> Self {
        let mut sphere = Self::new(center, radius);
        sphere.set_material(material);
        sphere
    }

    /// Assign the material. Only meaningful before the scene is rendered.
    pub fn set_material(&mut self, material: Arc<dyn Material>) {
        self.material = Some(material);
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn get_sphere_uv(p: Vec3) -> (f64, f64) {
        // theta: angle down from +Y
        // phi: angle around Y axis from +X
        let theta = (-p.y).clamp(-1.0, 1.0).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        (phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, closest_so_far: f64) -> Option<HitRecord<'_>> {
        // O + tD against |P - C| = r, with the factor 2 folded into b
        if ray.is_degenerate() || self.radius <= 0.0 {
            return None;
        }
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let window = hit_window(closest_so_far);

        // Near root first, so the front face wins over the back face
        let mut root = (-b - sqrtd) / a;
        if !window.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !window.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        let (u, v) = Self::get_sphere_uv(outward_normal);

        Some(
            HitRecord::new(ray, root, outward_normal)
                .with_uv(u, v)
                .with_material(self.material.as_deref()),
        )
    }
}
