//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Color, Material, Ray};
use prism_math::{Interval, Vec3, Vec4};

/// Smallest ray parameter accepted as a hit.
///
/// Keeps a ray leaving a surface from re-hitting that same surface at t ~ 0.
pub const HIT_EPSILON: f64 = 1e-5;

/// Record of a ray-object intersection.
///
/// Only produced by a successful `Hittable::hit`; there is no "empty" record.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Ray parameter of the intersection
    pub t: f64,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection (always points against the ray)
    pub normal: Vec3,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Surface coordinates for texture lookup
    pub u: f64,
    pub v: f64,
    /// Provisional color from geometry alone, used when there is no material
    pub color: Color,
    /// Material of the hit object, borrowed for one trace step
    pub material: Option<&'a dyn Material>,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the ray, the hit parameter and the outward normal.
    ///
    /// The stored normal is flipped when the ray arrives from inside.
    pub fn new(ray: &Ray, t: f64, outward_normal: Vec3) -> Self {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            t,
            p: ray.at(t),
            normal,
            front_face,
            u: 0.0,
            v: 0.0,
            color: normal_color(outward_normal),
            material: None,
        }
    }

    /// Set the surface coordinates.
    pub fn with_uv(mut self, u: f64, v: f64) -> Self {
        self.u = u;
        self.v = v;
        self
    }

    /// Attach the hit object's material, if it has one.
    pub fn with_material(mut self, material: Option<&'a dyn Material>) -> Self {
        self.material = material;
        self
    }

    /// Hit point as a homogeneous point (w = 1).
    pub fn hit_point_homogeneous(&self) -> Vec4 {
        self.p.extend(1.0)
    }
}

/// Geometry-only shading: map a unit normal from [-1, 1] to [0, 1].
#[inline]
pub fn normal_color(normal: Vec3) -> Color {
    0.5 * (normal + Vec3::ONE)
}

/// Window of ray parameters a new hit must fall strictly inside.
#[inline]
pub fn hit_window(closest_so_far: f64) -> Interval {
    Interval::new(HIT_EPSILON, closest_so_far)
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object closer than `closest_so_far`.
    ///
    /// Returns the nearest hit with `HIT_EPSILON < t < closest_so_far`, or
    /// `None`. Callers pass their current best distance, so a `Some` is
    /// always strictly nearer than anything found before.
    fn hit(&self, ray: &Ray, closest_so_far: f64) -> Option<HitRecord<'_>>;
}
