use castlib::{DistanceBounds, RenderConfig, ToneMap};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ToneMapArg {
    /// Clamp channels to [0, 1]
    Clamp,
    /// Scale by the brightest channel first
    Expose,
}

impl From<ToneMapArg> for ToneMap {
    fn from(arg: ToneMapArg) -> Self {
        match arg {
            ToneMapArg::Clamp => ToneMap::Clamp,
            ToneMapArg::Expose => ToneMap::Expose,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "caster")]
#[command(about = "Ray cast the demo sphere scene to a PNG")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 2880)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1620)]
    pub height: u32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 72.0)]
    pub fov_degrees: f32,

    /// Distance from the camera to the viewport plane
    #[arg(long, default_value_t = 1.0)]
    pub viewport_distance: f32,

    /// Hits closer than this are ignored
    #[arg(long, default_value_t = 1.0)]
    pub near: f32,

    /// Hits at or beyond this distance are ignored
    #[arg(long, default_value_t = 100.0)]
    pub far: f32,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: String,

    /// Worker threads, 0 lets rayon decide
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,

    #[arg(long, value_enum, default_value = "clamp")]
    pub tone_map: ToneMapArg,

    /// off, error, warn, info, debug or trace (case-insensitive)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            fov: self.fov_degrees.to_radians(),
            viewport_distance: self.viewport_distance,
            bounds: DistanceBounds {
                near: self.near,
                far: self.far,
            },
        }
    }
}
