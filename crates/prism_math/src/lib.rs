//! Prism math - vectors, rays and intervals shared across the workspace.
//!
//! Geometry is double precision throughout. `Vec3`/`Vec4` alias glam's
//! `DVec3`/`DVec4`, so callers write the same glam code they would for `f32`.

pub use glam;
pub use glam::{DVec2 as Vec2, DVec3 as Vec3, DVec4 as Vec4};

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;
