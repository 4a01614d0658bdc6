/// Errors raised while building a scene or a render configuration, or while writing output.
///
/// Rendering itself never fails: everything that could produce NaN distances or intensities is
/// rejected here first.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),
    #[error("light intensity must be non-negative, got {0}")]
    InvalidIntensity(f32),
    #[error("directional light needs a non-zero direction")]
    ZeroDirection,
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("field of view must lie in (0, pi) radians, got {0}")]
    InvalidFieldOfView(f32),
    #[error("viewport distance must be positive, got {0}")]
    InvalidViewportDistance(f32),
    #[error("distance bounds must satisfy 0 <= near < far, got near={near} far={far}")]
    InvalidDistanceBounds { near: f32, far: f32 },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
