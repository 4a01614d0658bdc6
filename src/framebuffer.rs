use crate::config::RenderConfig;
use crate::error::Result;
use crate::ray::Ray;
use crate::raycast::trace;
use crate::scene::Scene;
use crate::vector::{black, to_rgba8, vec3, Color};
use image::{Rgba, RgbaImage};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// How unclamped colors are mapped to the displayable range when exporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneMap {
    /// Clamp every channel to [0, 1].
    Clamp,
    /// Scale the whole image so its brightest channel becomes 1, then clamp.
    Expose,
}

/// Rendered pixels in row-major order, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Framebuffer {
        Framebuffer {
            width,
            height,
            pixels: vec![black(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y` (row 0 is the top of the image).
    pub fn get(&self, x: u32, y: u32) -> Option<&Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// Brightest channel value over the whole image.
    pub fn max_channel(&self) -> f32 {
        self.pixels
            .iter()
            .map(|p| p[p.imax()])
            .fold(0.0, f32::max)
    }

    pub fn to_image(&self, tone_map: ToneMap) -> RgbaImage {
        let scale = match tone_map {
            ToneMap::Clamp => 1.0,
            ToneMap::Expose => {
                let max = self.max_channel();
                if max > 0.0 {
                    1.0 / max
                } else {
                    1.0
                }
            }
        };
        let saturated = self
            .pixels
            .iter()
            .filter(|p| p.iter().any(|&c| c * scale > 1.0))
            .count();
        if saturated > 0 {
            warn!("{} pixels exceed the displayable range and were clamped", saturated);
        }

        let mut imgbuf = RgbaImage::new(self.width, self.height);
        for (x, y, pixel) in imgbuf.enumerate_pixels_mut() {
            let array_index = x as usize + (y as usize * self.width as usize);
            *pixel = Rgba(to_rgba8(&(self.pixels[array_index] * scale)));
        }
        imgbuf
    }

    /// Save the image as PNG to `path`.
    pub fn save_png<P: AsRef<Path>>(&self, path: P, tone_map: ToneMap) -> Result<()> {
        let path = path.as_ref();
        self.to_image(tone_map).save(path)?;
        info!("Image saved as {}", path.display());
        Ok(())
    }
}

/// Render `scene` with the camera at the origin looking down +z.
///
/// Rows are computed in parallel on the current rayon pool. Row `y` sees viewport offset
/// `v = height / 2 - y` and column `x` sees `u = x - width / 2`, so `v` grows upwards while rows
/// grow downwards. Every pixel depends only on its own coordinates, so the result does not depend
/// on how many threads run. Row 0 is the `v = height / 2` scanline.
///
/// `config` is validated first; an invalid one is rejected before any pixel is traced.
pub fn render(config: &RenderConfig, scene: &Scene) -> Result<Framebuffer> {
    config.validate()?;
    let projector = config.projector();
    let origin = vec3(0.0, 0.0, 0.0);
    let half_width = config.half_width();
    let half_height = config.half_height();
    debug!(
        "rendering {}x{} px, {} spheres, {} lights, viewport scale {}",
        config.width,
        config.height,
        scene.spheres.len(),
        scene.lights.len(),
        projector.scale
    );

    let start = Instant::now();
    let mut framebuffer = Framebuffer::new(config.width, config.height);
    framebuffer
        .pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let v = half_height - y as i32;
            for (x, pixel) in row.iter_mut().enumerate() {
                let u = x as i32 - half_width;
                let ray = Ray::new(origin, projector.project(u, v));
                *pixel = trace(&ray, scene, &config.bounds);
            }
        });
    info!(
        "rendered {}x{} px in {:.2?} on {} threads",
        config.width,
        config.height,
        start.elapsed(),
        rayon::current_num_threads()
    );
    Ok(framebuffer)
}
