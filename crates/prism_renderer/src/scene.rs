//! Scene: the objects to render and the camera to render them from.

use crate::error::SceneError;
use crate::{Camera, HitRecord, Hittable, Ray};

/// Ordered collection of objects plus one camera.
///
/// Built once, then read-only for the whole render; that is what lets the
/// driver trace pixels from several threads at once.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
    camera: Option<Box<dyn Camera>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object. Insertion order is kept.
    pub fn add_object(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Set (or replace) the camera.
    pub fn set_camera(&mut self, camera: Box<dyn Camera>) {
        self.camera = Some(camera);
    }

    pub fn camera(&self) -> Option<&dyn Camera> {
        self.camera.as_deref()
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Check the scene can be rendered.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.objects.is_empty() {
            return Err(SceneError::NoObjects);
        }
        if self.camera.is_none() {
            return Err(SceneError::MissingCamera);
        }
        log::debug!("Scene validated: {} objects", self.objects.len());
        Ok(())
    }

    /// Find the nearest intersection across every object.
    ///
    /// Each object only reports hits strictly closer than the best so far, so
    /// the last `Some` is the nearest over all objects and both sphere roots.
    /// On an exact tie the earlier object wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut closest_so_far = f64::INFINITY;
        let mut nearest = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, closest_so_far) {
                closest_so_far = rec.t;
                nearest = Some(rec);
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, SimpleCamera, Sphere};
    use prism_math::Vec3;
    use std::sync::Arc;

    fn ray_down_z() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z)
    }

    #[test]
    fn test_empty_scene_has_no_hit() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.nearest_hit(&ray_down_z()).is_none());
    }

    #[test]
    fn test_nearest_hit_independent_of_order() {
        let near = || Box::new(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0));
        let far = || Box::new(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0));

        let mut near_first = Scene::new();
        near_first.add_object(near());
        near_first.add_object(far());

        let mut far_first = Scene::new();
        far_first.add_object(far());
        far_first.add_object(near());

        for scene in [&near_first, &far_first] {
            let rec = scene.nearest_hit(&ray_down_z()).unwrap();
            assert!((rec.t - 7.0).abs() < 1e-12);
            assert!((rec.p - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-12);
        }
    }

    #[test]
    fn test_far_root_does_not_override_nearer_object() {
        // The ray starts inside the big sphere, so only its far root (t=30)
        // is valid; it must not replace the small sphere's hit at t=6
        let mut scene = Scene::new();
        scene.add_object(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0)));
        scene.add_object(Box::new(Sphere::new(Vec3::ZERO, 20.0)));

        let rec = scene.nearest_hit(&ray_down_z()).unwrap();
        assert!((rec.t - 6.0).abs() < 1e-12);
        assert!(rec.front_face);
    }

    #[test]
    fn test_exact_tie_keeps_first_object() {
        let mut scene = Scene::new();
        scene.add_object(Box::new(Sphere::new(Vec3::ZERO, 1.0)));
        scene.add_object(Box::new(Sphere::with_material(
            Vec3::ZERO,
            1.0,
            Arc::new(Lambertian::from_color(Vec3::ONE)),
        )));

        let rec = scene.nearest_hit(&ray_down_z()).unwrap();
        assert!(rec.material.is_none());
    }

    #[test]
    fn test_validate() {
        let mut scene = Scene::new();
        assert_eq!(scene.validate(), Err(SceneError::NoObjects));

        scene.add_object(Box::new(Sphere::new(Vec3::ZERO, 1.0)));
        assert_eq!(scene.validate(), Err(SceneError::MissingCamera));

        scene.set_camera(Box::new(SimpleCamera::new(
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::ZERO,
            Vec3::Y,
            25.0,
            1.0,
        )));
        assert_eq!(scene.validate(), Ok(()));
        assert!(scene.camera().is_some());
        assert_eq!(scene.len(), 1);
    }
}
