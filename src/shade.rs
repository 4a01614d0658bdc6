use crate::scene::{Light, Sphere};
use crate::vector::Vec3;

/// Light intensity reaching `point` on the surface of `sphere`.
///
/// Ambient lights add their intensity unconditionally. Point and directional lights add
/// `intensity * cos(angle)` between the surface normal and the direction to the light, and nothing
/// when the surface faces away. No shadow rays are cast and the sum is not clamped.
pub fn shade(point: &Vec3, sphere: &Sphere, lights: &[Light]) -> f32 {
    let normal = sphere.surface_normal(point);
    lights
        .iter()
        .map(|light| match *light {
            Light::Ambient { intensity } => intensity,
            Light::Point {
                intensity,
                position,
            } => diffuse(&normal, &(position - point).normalize(), intensity),
            Light::Directional {
                intensity,
                direction,
            } => diffuse(&normal, &direction, intensity),
        })
        .sum()
}

/// Lambertian term; back-facing light contributes zero rather than a negative amount.
fn diffuse(normal: &Vec3, to_light: &Vec3, intensity: f32) -> f32 {
    let n_dot_l = normal.dot(to_light);
    if n_dot_l > 0.0 {
        intensity * n_dot_l
    } else {
        0.0
    }
}
