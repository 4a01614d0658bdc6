use crate::error::{Error, Result};
use crate::projector::Projector;
use std::f32::consts::PI;

/// Valid hit distances along a ray lie strictly between `near` and `far`.
///
/// `far` doubles as the "no hit" sentinel returned by [`crate::Sphere::intersect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceBounds {
    pub near: f32,
    pub far: f32,
}

impl DistanceBounds {
    pub fn contains(&self, distance: f32) -> bool {
        self.near < distance && distance < self.far
    }
}

impl Default for DistanceBounds {
    fn default() -> Self {
        DistanceBounds {
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Everything the render pass needs besides the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Horizontal field of view in radians.
    pub fov: f32,
    pub viewport_distance: f32,
    pub bounds: DistanceBounds,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 2880,
            height: 1620,
            fov: PI / 2.5,
            viewport_distance: 1.0,
            bounds: DistanceBounds::default(),
        }
    }
}

impl RenderConfig {
    /// Reject parameters that would make the projection or the intersection test degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.fov.is_finite() {
            return Err(Error::NonFinite("field of view"));
        }
        if self.fov <= 0.0 || self.fov >= PI {
            return Err(Error::InvalidFieldOfView(self.fov));
        }
        if !self.viewport_distance.is_finite() {
            return Err(Error::NonFinite("viewport distance"));
        }
        if self.viewport_distance <= 0.0 {
            return Err(Error::InvalidViewportDistance(self.viewport_distance));
        }
        let DistanceBounds { near, far } = self.bounds;
        if near.is_nan() || far.is_nan() || near < 0.0 || near >= far {
            return Err(Error::InvalidDistanceBounds { near, far });
        }
        Ok(())
    }

    /// Width of the viewport plane in world units.
    pub fn viewport_width(&self) -> f32 {
        2.0 * self.viewport_distance * (self.fov / 2.0).tan()
    }

    /// World units per pixel on the viewport plane.
    pub fn viewport_scale(&self) -> f32 {
        self.viewport_width() / self.width as f32
    }

    pub fn half_width(&self) -> i32 {
        (self.width / 2) as i32
    }

    pub fn half_height(&self) -> i32 {
        (self.height / 2) as i32
    }

    pub fn projector(&self) -> Projector {
        Projector::new(self.viewport_scale(), self.viewport_distance)
    }
}
