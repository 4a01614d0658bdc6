use crate::vector::{vec3, Vec3};

/// Maps pixel offsets from the image center onto the viewport plane.
///
/// The camera sits at the origin looking down +z; the viewport is the plane
/// `z = distance`, and `scale` is the size of one pixel on that plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub scale: f32,
    pub distance: f32,
}

impl Projector {
    pub fn new(scale: f32, distance: f32) -> Projector {
        Projector { scale, distance }
    }

    /// Ray direction through pixel offset `(u, v)`, with `u` growing right and `v` growing up.
    /// The result is not normalized.
    pub fn project(&self, u: i32, v: i32) -> Vec3 {
        vec3(u as f32 * self.scale, v as f32 * self.scale, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pixel_looks_down_z() {
        let projector = Projector::new(0.01, 1.0);
        assert_eq!(projector.project(0, 0), vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn offsets_scale_linearly() {
        let projector = Projector::new(0.5, 2.0);
        assert_eq!(projector.project(4, -2), vec3(2.0, -1.0, 2.0));
        assert_eq!(projector.project(-3, 1), vec3(-1.5, 0.5, 2.0));
    }
}
