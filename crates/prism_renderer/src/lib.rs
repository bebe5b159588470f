//! Prism renderer - CPU ray tracing core
//!
//! A recursive ray tracer over a list of analytic objects:
//! hit testing, textures, scattering materials and the render driver.

mod camera;
mod error;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampling;
mod scene;
mod sphere;
mod texture;

pub use camera::{Camera, LensCamera, SimpleCamera};
pub use error::{RenderError, RenderResult, SceneError};
pub use hittable::{hit_window, normal_color, HitRecord, Hittable, HIT_EPSILON};
pub use material::{reflect, refract, Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{color_to_rgb8, linear_to_gamma, save_image, to_rgb_image, OutputOptions};
pub use renderer::{
    render, render_pixel, Background, ImageBuffer, NormalTracer, PathTracer, RenderConfig, Tracer,
};
pub use scene::Scene;
pub use sphere::Sphere;
pub use texture::{Checker, Constant, Texture};

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3};
