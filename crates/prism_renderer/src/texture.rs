//! Procedural textures.
//!
//! A texture is a pure function from a surface coordinate to a color. It holds
//! no per-call state, so one instance can be shared (via `Arc`) by any number
//! of materials and sampled from any number of threads.

use std::sync::Arc;

use prism_math::Vec3;

use crate::Color;

/// Maps a surface coordinate to a color.
pub trait Texture: Send + Sync {
    /// Sample the texture at surface coordinate `(u, v)` and world point `p`.
    fn sample(&self, u: f64, v: f64, p: Vec3) -> Color;
}

/// A single flat color.
#[derive(Debug, Clone, Copy)]
pub struct Constant {
    color: Color,
}

impl Constant {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Convenience for the common `Arc<dyn Texture>` form.
    pub fn shared(color: Color) -> Arc<dyn Texture> {
        Arc::new(Self::new(color))
    }
}

impl Texture for Constant {
    fn sample(&self, _u: f64, _v: f64, _p: Vec3) -> Color {
        self.color
    }
}

/// Two textures alternating in a checkerboard over surface coordinates.
///
/// `nu` cells run along `u` and `nv` along `v`. Cells where
/// `floor(u * nu) + floor(v * nv)` is even sample `even`, the rest `odd`.
pub struct Checker {
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
    nu: u32,
    nv: u32,
}

impl Checker {
    /// Create a checker texture. Zero cell counts are raised to one.
    pub fn new(even: Arc<dyn Texture>, odd: Arc<dyn Texture>, nu: u32, nv: u32) -> Self {
        Self {
            even,
            odd,
            nu: nu.max(1),
            nv: nv.max(1),
        }
    }

    /// True when `(u, v)` falls in an even cell.
    fn is_even_cell(&self, u: f64, v: f64) -> bool {
        let iu = (u * self.nu as f64).floor() as i64;
        let iv = (v * self.nv as f64).floor() as i64;
        (iu + iv).rem_euclid(2) == 0
    }
}

impl Texture for Checker {
    fn sample(&self, u: f64, v: f64, p: Vec3) -> Color {
        if self.is_even_cell(u, v) {
            self.even.sample(u, v, p)
        } else {
            self.odd.sample(u, v, p)
        }
    }
}
