//! Textures for perspective-correct mapping.

use std::path::Path;

use log::info;

use crate::colors::{self, ERROR_COLOR};
use crate::error::{RenderError, Result};

/// A 2D texture stored row-major as ARGB pixels, top row first.
#[derive(Clone, Debug)]
pub struct Texture {
    data: Vec<u32>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Wraps existing pixel data. `data.len()` must equal `width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if data.len() != width as usize * height as usize {
            return Err(RenderError::TextureSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Loads a texture from an image file (PNG, JPG, etc.).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                colors::argb(a, r, g, b)
            })
            .collect();

        info!("Loaded texture {} ({}x{})", path.display(), width, height);
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at integer coordinates, `None` outside the texture.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        self.data.get(y * self.width as usize + x).copied()
    }

    /// Nearest-neighbor lookup at UV coordinates.
    ///
    /// `|u|` and `|v|` are clamped to `[0, 1]` and scaled by the texture size.
    /// A coordinate of exactly 1.0 lands one past the last texel and yields
    /// [`ERROR_COLOR`], as does any other out-of-range index.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let u = u.abs().clamp(0.0, 1.0);
        let v = v.abs().clamp(0.0, 1.0);

        let x = (u * self.width as f32) as usize;
        let y = (v * self.height as f32) as usize;

        self.texel(x, y).unwrap_or(ERROR_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        // 2x2: red, green / blue, white
        Texture::new(2, 2, vec![0xFFFF0000, 0xFF00FF00, 0xFF0000FF, 0xFFFFFFFF]).unwrap()
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let err = Texture::new(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(err, RenderError::TextureSize { len: 3, .. }));
    }

    #[test]
    fn sample_picks_nearest_texel() {
        let texture = checker();
        assert_eq!(texture.sample(0.0, 0.0), 0xFFFF0000);
        assert_eq!(texture.sample(0.75, 0.25), 0xFF00FF00);
        assert_eq!(texture.sample(0.25, 0.75), 0xFF0000FF);
        assert_eq!(texture.sample(0.99, 0.99), 0xFFFFFFFF);
    }

    #[test]
    fn negative_coordinates_use_magnitude() {
        let texture = checker();
        assert_eq!(texture.sample(-0.75, 0.25), texture.sample(0.75, 0.25));
    }

    #[test]
    fn edge_coordinate_yields_error_color() {
        let texture = checker();
        assert_eq!(texture.sample(1.0, 0.0), ERROR_COLOR);
        assert_eq!(texture.sample(0.0, 7.0), ERROR_COLOR);
    }

    #[test]
    fn texel_out_of_bounds_is_none() {
        assert_eq!(checker().texel(2, 0), None);
        assert_eq!(checker().texel(1, 1), Some(0xFFFFFFFF));
    }
}
