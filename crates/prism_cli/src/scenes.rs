//! Built-in demo scenes.

use std::sync::Arc;

use clap::ValueEnum;
use prism_math::Vec3;
use prism_renderer::{
    Checker, Color, Constant, Lambertian, Metal, Scene, SimpleCamera, Sphere, Texture,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    /// Checkered sphere on a ground sphere between two metal spheres
    Spheres,
    /// A single checkered sphere
    OneSphere,
}

/// Build the chosen scene with a camera matching `aspect`.
pub fn build(choice: SceneChoice, aspect: f64) -> Scene {
    match choice {
        SceneChoice::Spheres => spheres(aspect),
        SceneChoice::OneSphere => one_sphere(aspect),
    }
}

/// White and black checkerboard with `nu` x `nv` cells.
fn checker(nu: u32, nv: u32) -> Arc<dyn Texture> {
    Arc::new(Checker::new(
        Constant::shared(Color::ONE),
        Constant::shared(Color::ZERO),
        nu,
        nv,
    ))
}

fn one_sphere(aspect: f64) -> Scene {
    let mut scene = Scene::new();
    scene.add_object(Box::new(Sphere::with_material(
        Vec3::ZERO,
        0.5,
        Arc::new(Lambertian::new(checker(8, 4))),
    )));
    scene.set_camera(Box::new(SimpleCamera::new(
        Vec3::new(0.0, 0.0, -3.0),
        Vec3::ZERO,
        Vec3::Y,
        25.0,
        aspect,
    )));
    scene
}

fn spheres(aspect: f64) -> Scene {
    let mut scene = Scene::new();

    // Center
    scene.add_object(Box::new(Sphere::with_material(
        Vec3::ZERO,
        0.5,
        Arc::new(Lambertian::new(checker(4, 4))),
    )));

    // Ground
    scene.add_object(Box::new(Sphere::with_material(
        Vec3::new(0.0, -100.5, 0.0),
        100.0,
        Arc::new(Lambertian::from_color(Color::new(0.8, 0.8, 0.0))),
    )));

    // Right: polished
    scene.add_object(Box::new(Sphere::with_material(
        Vec3::new(1.0, 0.0, 0.0),
        0.5,
        Arc::new(Metal::new(Constant::shared(Color::new(0.8, 0.5, 0.2)))),
    )));

    // Left: brushed
    scene.add_object(Box::new(Sphere::with_material(
        Vec3::new(-1.0, 0.0, 0.0),
        0.5,
        Arc::new(Metal::with_fuzz(Constant::shared(Color::splat(0.8)), 1.0)),
    )));

    scene.set_camera(Box::new(SimpleCamera::new(
        Vec3::new(-1.15, 0.15, 3.0),
        Vec3::new(-0.15, 0.0, 0.0),
        Vec3::Y,
        30.0,
        aspect,
    )));
    scene
}
