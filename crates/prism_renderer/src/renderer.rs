//! Core recursive ray tracer.
//!
//! Implements:
//! - Recursive tracing with a configurable bounce limit
//! - Solid or sky-gradient background
//! - Optional multi-sampling with per-row seeded generators
//! - Row-parallel rendering via rayon

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult, SceneError};
use crate::sampling::sample_square;
use crate::{Camera, Color, Ray, Scene};

/// What a ray that escapes the scene sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// A flat color
    Solid(Color),
    /// Vertical white-to-blue gradient over the ray direction
    #[default]
    SkyGradient,
}

impl Background {
    /// Color seen along `ray`.
    pub fn color(&self, ray: &Ray) -> Color {
        match self {
            Background::Solid(color) => *color,
            Background::SkyGradient => sky_gradient(ray),
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel; 1 traces the pixel centre only
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Color for rays that hit nothing
    pub background: Background,
    /// Base seed for the per-row random generators
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 225,
            samples_per_pixel: 1,
            max_depth: 50,
            background: Background::default(),
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Width / height, for building a matching camera.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height.max(1) as f64
    }
}

/// Turns a ray into a color.
pub trait Tracer: Send + Sync {
    /// Color seen along `ray`, which has already bounced `depth` times.
    fn trace_ray(&self, ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color;
}

/// Material-driven recursive tracer.
#[derive(Debug, Clone, Copy)]
pub struct PathTracer {
    max_depth: u32,
    background: Background,
}

impl PathTracer {
    pub fn new(max_depth: u32, background: Background) -> Self {
        Self {
            max_depth,
            background,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.max_depth, config.background)
    }
}

impl Tracer for PathTracer {
    fn trace_ray(&self, ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color {
        // Bounce limit reached: no more light is gathered
        if depth >= self.max_depth {
            return Color::ZERO;
        }

        let Some(rec) = scene.nearest_hit(ray) else {
            return self.background.color(ray);
        };

        let Some(material) = rec.material else {
            return rec.color;
        };

        match material.scatter(ray, &rec, rng) {
            Some(result) => {
                let incoming = self.trace_ray(&result.scattered, scene, depth + 1, rng);
                result.attenuation * incoming
            }
            // Absorbed
            None => Color::ZERO,
        }
    }
}

/// Geometry-only tracer: the provisional hit color, no bounces.
#[derive(Debug, Clone, Copy)]
pub struct NormalTracer {
    background: Background,
}

impl NormalTracer {
    pub fn new(background: Background) -> Self {
        Self { background }
    }
}

impl Tracer for NormalTracer {
    fn trace_ray(&self, ray: &Ray, scene: &Scene, _depth: u32, _rng: &mut dyn RngCore) -> Color {
        match scene.nearest_hit(ray) {
            Some(rec) => rec.color,
            None => self.background.color(ray),
        }
    }
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize_or_zero();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel.
///
/// One sample traces the pixel centre; more samples jitter inside the
/// pixel and average.
pub fn render_pixel(
    camera: &dyn Camera,
    tracer: &dyn Tracer,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.width.max(1) as f64;
    let height = config.height.max(1) as f64;
    let samples = config.samples_per_pixel.max(1);

    if samples == 1 {
        let ray = camera.get_ray((x as f64 + 0.5) / width, (y as f64 + 0.5) / height, rng);
        return tracer.trace_ray(&ray, scene, 0, rng);
    }

    let mut pixel_color = Color::ZERO;
    for _ in 0..samples {
        let (dx, dy) = sample_square(rng);
        let s = (x as f64 + 0.5 + dx) / width;
        let t = (y as f64 + 0.5 + dy) / height;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += tracer.trace_ray(&ray, scene, 0, rng);
    }

    pixel_color / samples as f64
}

/// Seed for one row's generator, independent of which thread renders it.
fn row_seed(seed: u64, row: u32) -> u64 {
    seed ^ (row as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Linear color buffer for render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn pixel_color(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y) to a linear (pre-gamma) color.
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Panics when (x, y) is outside the image.
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene.
///
/// Rows are traced in parallel. Each row owns its generator, seeded from
/// `config.seed` and the row index, so output does not depend on the
/// thread count. Every pixel is written exactly once.
pub fn render(
    scene: &Scene,
    tracer: &dyn Tracer,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::InvalidResolution {
            width: config.width,
            height: config.height,
        });
    }
    scene.validate()?;
    let camera = scene.camera().ok_or(SceneError::MissingCamera)?;

    if config.samples_per_pixel == 0 {
        log::warn!("samples_per_pixel is 0, rendering with 1 sample");
    }

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} objects",
        config.width,
        config.height,
        config.samples_per_pixel.max(1),
        config.max_depth,
        scene.len()
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(config.width, config.height);
    let width = config.width as usize;
    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let mut rng = StdRng::seed_from_u64(row_seed(config.seed, y));
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, tracer, scene, x as u32, y, config, &mut rng);
            }
        });

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
