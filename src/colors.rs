//! Packed ARGB8888 colors.
//!
//! Every color in the crate is a `u32` laid out as `0xAARRGGBB`, the same
//! layout the color buffer is presented in.

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;

/// Default clear color.
pub const BACKGROUND: u32 = BLACK;
pub const GRID: u32 = 0xFF333333;
pub const WIREFRAME: u32 = 0xFFFFFFFF;
pub const VERTEX: u32 = 0xFFFF0000;

/// Sentinel written when a texture lookup falls outside the texture.
pub const ERROR_COLOR: u32 = 0xFFFF00FF;

/// Packs 8-bit channels into ARGB.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Packs normalized `[0, 1]` channels into ARGB. Out-of-range inputs are clamped.
#[inline]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    argb(to_u8(a), to_u8(r), to_u8(g), to_u8(b))
}

/// Unpacks the RGB channels of an ARGB color into normalized floats.
#[inline]
pub fn unpack_color(color: u32) -> (f32, f32, f32) {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    (r, g, b)
}

/// Scales the RGB channels by a light intensity, keeping alpha.
///
/// The intensity is clamped to `[0, 1]` first, so surfaces facing away from
/// the light go black instead of wrapping around.
#[inline]
pub fn apply_intensity(color: u32, intensity: f32) -> u32 {
    let intensity = intensity.clamp(0.0, 1.0);
    let scale = |shift: u32| (((color >> shift) & 0xFF) as f32 * intensity) as u32;

    (color & 0xFF000000) | (scale(16) << 16) | (scale(8) << 8) | scale(0)
}
