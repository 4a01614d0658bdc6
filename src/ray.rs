use crate::scene::Sphere;
use crate::vector::Vec3;

/// A ray `origin + t * direction`. The direction need not be normalized but must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

impl Sphere {
    /// Both roots of the ray/sphere quadratic, as multiples of `ray.direction`.
    ///
    /// The first root uses `+sqrt(discriminant)`, the second `-sqrt(discriminant)`; they are not
    /// sorted and may be equal for a tangent ray. When the ray misses, both are `miss`.
    ///
    /// The ray direction must be non-zero.
    pub fn intersect(&self, ray: &Ray, miss: f32) -> (f32, f32) {
        let center_to_origin = ray.origin - self.center();
        let a = ray.direction.dot(&ray.direction);
        debug_assert!(a > 0.0, "ray direction must be non-zero");
        let b = 2.0 * center_to_origin.dot(&ray.direction);
        let c = center_to_origin.norm_squared() - self.radius() * self.radius();
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return (miss, miss);
        }
        let root = discriminant.sqrt();
        ((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec3;

    // let's be generous for now
    const EPSILON: f32 = 0.0001;
    const MISS: f32 = 100.0;

    fn sphere(x: f32, y: f32, z: f32, radius: f32) -> Sphere {
        Sphere::new(vec3(x, y, z), radius, vec3(1.0, 1.0, 1.0)).unwrap()
    }

    fn on_surface(ray: &Ray, sphere: &Sphere, distance: f32) -> bool {
        ((ray.at(distance) - sphere.center()).norm() - sphere.radius()).abs() < EPSILON
    }

    /// Ray intersecting a sphere in an easy to compute position.
    #[test]
    fn ray_intersects_sphere() {
        let sphere = sphere(0.0, 0.0, 1.0, 0.5);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        let (far, near) = sphere.intersect(&ray, MISS);
        assert!((far - 1.5).abs() < EPSILON);
        assert!((near - 0.5).abs() < EPSILON);
    }

    #[test]
    fn roots_lie_on_the_sphere() {
        let sphere = sphere(0.3, -0.2, 5.0, 1.3);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.1, 0.05, 1.0));
        let (r1, r2) = sphere.intersect(&ray, MISS);
        assert!(r1 != r2);
        assert!(on_surface(&ray, &sphere, r1));
        assert!(on_surface(&ray, &sphere, r2));
    }

    /// Distances scale with the length of the direction vector.
    #[test]
    fn unnormalized_direction() {
        let sphere = sphere(0.0, 0.0, 4.0, 1.0);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 2.0));
        let (far, near) = sphere.intersect(&ray, MISS);
        assert!((far - 2.5).abs() < EPSILON);
        assert!((near - 1.5).abs() < EPSILON);
    }

    #[test]
    fn tangent_ray_has_a_double_root() {
        let sphere = sphere(0.0, -1.0, 3.0, 1.0);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        let (r1, r2) = sphere.intersect(&ray, MISS);
        assert_eq!(r1, r2);
        assert!((r1 - 3.0).abs() < EPSILON);
        assert!(on_surface(&ray, &sphere, r1));
    }

    #[test]
    fn miss_returns_sentinel() {
        let sphere = sphere(5.0, 0.0, 3.0, 1.0);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        assert_eq!(sphere.intersect(&ray, MISS), (MISS, MISS));
    }

    /// A sphere behind the origin still yields roots; they are just negative.
    #[test]
    fn sphere_behind_origin() {
        let sphere = sphere(0.0, 0.0, -3.0, 1.0);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        let (r1, r2) = sphere.intersect(&ray, MISS);
        assert!(r1 < 0.0 && r2 < 0.0);
    }
}
