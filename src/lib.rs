//! Ray casting of spheres under ambient, point and directional lights.
//!
//! For every pixel a ray leaves the origin through a viewport at `z = viewport_distance`, is
//! intersected with every sphere of the [`Scene`], and the closest hit is shaded by summing the
//! light reaching it. The result is an unclamped [`Framebuffer`]; mapping it to displayable
//! colors happens on export.

extern crate image;
extern crate nalgebra as na;
extern crate rayon;

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod projector;
pub mod ray;
pub mod raycast;
pub mod scene;
pub mod shade;
pub mod vector;

pub use config::{DistanceBounds, RenderConfig};
pub use error::{Error, Result};
pub use framebuffer::{render, Framebuffer, ToneMap};
pub use projector::Projector;
pub use ray::Ray;
pub use raycast::{closest_hit, trace, Hit};
pub use scene::{Light, Scene, Sphere};
pub use shade::shade;
pub use vector::{Color, Vec3};
