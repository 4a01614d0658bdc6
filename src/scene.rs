use crate::error::{Error, Result};
use crate::vector::{is_finite, vec3, Color, Vec3};

/// A sphere, defined by its center, its radius and its color.
///
/// Fields are private so a sphere can only be built through [`Sphere::new`], which guarantees a
/// positive, finite radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, color: Color) -> Result<Sphere> {
        if !is_finite(&center) {
            return Err(Error::NonFinite("sphere center"));
        }
        if !is_finite(&color) {
            return Err(Error::NonFinite("sphere color"));
        }
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Sphere {
            center,
            radius,
            color,
        })
    }

    pub fn center(&self) -> &Vec3 {
        &self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn surface_normal(&self, point: &Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

/// Light sources. Each kind carries only the fields it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Lights every surface equally.
    Ambient { intensity: f32 },
    /// Emits from a position in all directions.
    Point { intensity: f32, position: Vec3 },
    /// Parallel light. `direction` points towards the light and is unit length.
    Directional { intensity: f32, direction: Vec3 },
}

fn check_intensity(intensity: f32) -> Result<f32> {
    if !intensity.is_finite() {
        return Err(Error::NonFinite("light intensity"));
    }
    if intensity < 0.0 {
        return Err(Error::InvalidIntensity(intensity));
    }
    Ok(intensity)
}

impl Light {
    pub fn ambient(intensity: f32) -> Result<Light> {
        Ok(Light::Ambient {
            intensity: check_intensity(intensity)?,
        })
    }

    pub fn point(intensity: f32, position: Vec3) -> Result<Light> {
        if !is_finite(&position) {
            return Err(Error::NonFinite("light position"));
        }
        Ok(Light::Point {
            intensity: check_intensity(intensity)?,
            position,
        })
    }

    /// The direction is normalized here, so callers may pass any non-zero vector.
    pub fn directional(intensity: f32, direction: Vec3) -> Result<Light> {
        if !is_finite(&direction) {
            return Err(Error::NonFinite("light direction"));
        }
        let direction = direction
            .try_normalize(f32::EPSILON)
            .ok_or(Error::ZeroDirection)?;
        Ok(Light::Directional {
            intensity: check_intensity(intensity)?,
            direction,
        })
    }

    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

/// The world to render. Sphere order matters: on equal distances the earlier sphere wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Scene {
        Scene { spheres, lights }
    }

    /// Three unit spheres (red, blue, green) resting above a large yellow ground sphere, lit by an
    /// ambient, a point and a directional light.
    pub fn demo() -> Result<Scene> {
        let spheres = vec![
            Sphere::new(vec3(0.0, -1.0, 3.0), 1.0, vec3(1.0, 0.0, 0.0))?,
            Sphere::new(vec3(2.0, 0.0, 4.0), 1.0, vec3(0.0, 0.0, 1.0))?,
            Sphere::new(vec3(-2.0, 0.0, 4.0), 1.0, vec3(0.0, 1.0, 0.0))?,
            Sphere::new(vec3(0.0, -5001.0, 0.0), 5000.0, vec3(1.0, 1.0, 0.0))?,
        ];
        let lights = vec![
            Light::ambient(0.2)?,
            Light::point(0.6, vec3(2.0, 1.0, 0.0))?,
            Light::directional(0.2, vec3(1.0, 4.0, 4.0))?,
        ];
        Ok(Scene::new(spheres, lights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn rejects_non_positive_radius() {
        let red = vec3(1.0, 0.0, 0.0);
        assert!(matches!(
            Sphere::new(vec3(0.0, 0.0, 3.0), 0.0, red),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            Sphere::new(vec3(0.0, 0.0, 3.0), -2.0, red),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            Sphere::new(vec3(0.0, 0.0, 3.0), f32::NAN, red),
            Err(Error::InvalidRadius(_))
        ));
        assert!(Sphere::new(vec3(0.0, f32::INFINITY, 3.0), 1.0, red).is_err());
    }

    /// Trivial case of a surface normal calculation.
    #[test]
    fn sphere_surface_normal() {
        let sphere = Sphere::new(vec3(0.0, 0.0, 1.0), 0.1, vec3(1.0, 1.0, 1.0)).unwrap();
        let normal = sphere.surface_normal(&vec3(0.0, 0.0, 0.0));
        assert!((normal - vec3(0.0, 0.0, -1.0)).norm() < EPSILON);
    }

    #[test]
    fn directional_light_is_normalized() {
        match Light::directional(0.2, vec3(0.0, 3.0, 4.0)).unwrap() {
            Light::Directional { direction, .. } => {
                assert!((direction - vec3(0.0, 0.6, 0.8)).norm() < EPSILON)
            }
            other => panic!("unexpected light {:?}", other),
        }
        assert!(matches!(
            Light::directional(0.2, vec3(0.0, 0.0, 0.0)),
            Err(Error::ZeroDirection)
        ));
    }

    #[test]
    fn rejects_negative_intensity() {
        assert!(matches!(
            Light::ambient(-0.1),
            Err(Error::InvalidIntensity(_))
        ));
        assert!(Light::point(f32::NAN, vec3(0.0, 0.0, 0.0)).is_err());
        assert_eq!(Light::ambient(0.3).unwrap().intensity(), 0.3);
    }

    #[test]
    fn demo_scene_layout() {
        let scene = Scene::demo().unwrap();
        assert_eq!(scene.spheres.len(), 4);
        assert_eq!(scene.lights.len(), 3);
        assert_eq!(scene.spheres[0].center(), &vec3(0.0, -1.0, 3.0));
        assert_eq!(scene.spheres[3].radius(), 5000.0);
    }
}
