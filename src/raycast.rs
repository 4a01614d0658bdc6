use crate::config::DistanceBounds;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shade::shade;
use crate::vector::{black, Color};

/// The nearest valid intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub distance: f32,
    /// Index into `Scene::spheres`.
    pub sphere: usize,
}

/// Find the closest intersection whose distance lies strictly inside `bounds`.
///
/// Spheres are visited in scene order and, per sphere, the `+sqrt` root before the `-sqrt` root.
/// Only a strictly smaller distance replaces the current best, so on exact ties the earlier
/// sphere wins.
pub fn closest_hit(ray: &Ray, scene: &Scene, bounds: &DistanceBounds) -> Option<Hit> {
    let mut closest_match = bounds.far;
    let mut closest: Option<Hit> = None;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        let (r1, r2) = sphere.intersect(ray, bounds.far);
        for distance in [r1, r2].iter().copied() {
            if bounds.contains(distance) && distance < closest_match {
                closest_match = distance;
                closest = Some(Hit {
                    distance,
                    sphere: index,
                });
            }
        }
    }
    closest
}

/// Color seen along `ray`: the closest sphere's color scaled by the light reaching the hit
/// point, or black if nothing is hit.
pub fn trace(ray: &Ray, scene: &Scene, bounds: &DistanceBounds) -> Color {
    match closest_hit(ray, scene, bounds) {
        Some(Hit { distance, sphere }) => {
            let sphere = &scene.spheres[sphere];
            let point = ray.at(distance);
            sphere.color() * shade(&point, sphere, &scene.lights)
        }
        None => black(),
    }
}
