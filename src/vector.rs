use na::Vector3;

/// Positions and directions in world space.
pub type Vec3 = Vector3<f32>;

/// Linear RGB, one `f32` per channel. Channels are not clamped and may exceed 1.
pub type Color = Vector3<f32>;

/// Background color for rays that hit nothing.
pub fn black() -> Color {
    Color::zeros()
}

pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector3::new(x, y, z)
}

/// Convert a normalized color to 8-bit RGBA, clamping each channel to [0, 1].
/// Alpha is always opaque.
pub fn to_rgba8(color: &Color) -> [u8; 4] {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z), 255]
}

/// True if every component is a finite number.
pub fn is_finite(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}
