//! Perspective-correct textured fill with depth testing.
//!
//! Attributes are interpolated with barycentric weights taken at each pixel
//! center. Screen-space interpolation is only linear for quantities divided
//! by w, so `u/w`, `v/w` and `1/w` are interpolated and then divided back:
//!
//! ```text
//! u = lerp(u/w) / lerp(1/w)
//! ```
//!
//! NDC depth is already affine in screen space and is interpolated directly.

use log::debug;

use super::scanline::{for_each_span, ScanlineRasterizer};
use super::Triangle;
use crate::colors;
use crate::math::barycentric::barycentric_weights;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;
use crate::texture::Texture;

impl ScanlineRasterizer {
    /// Fills a triangle with texels, writing only pixels nearer than the
    /// depth buffer.
    ///
    /// Texels are modulated by the triangle's light intensity. Lookups that
    /// fall outside the texture write [`colors::ERROR_COLOR`].
    pub fn fill_textured_triangle(
        &self,
        triangle: &Triangle,
        texture: &Texture,
        buffer: &mut FrameBuffer,
    ) {
        let [a, b, c] = triangle.screen_points();
        let [p0, p1, p2] = triangle.points;
        if p0.w <= 0.0 || p1.w <= 0.0 || p2.w <= 0.0 {
            debug!("skipping textured triangle with non-positive w");
            return;
        }

        let inv_w = Vec3::new(1.0 / p0.w, 1.0 / p1.w, 1.0 / p2.w);
        let [t0, t1, t2] = triangle.texcoords;
        let u_over_w = Vec3::new(t0.x * inv_w.x, t1.x * inv_w.y, t2.x * inv_w.z);
        let v_over_w = Vec3::new(t0.y * inv_w.x, t1.y * inv_w.y, t2.y * inv_w.z);
        let depth = Vec3::new(p0.z, p1.z, p2.z);
        let intensity = triangle.intensity;

        for_each_span(triangle.screen_points(), |y, x_start, x_end| {
            for x in x_start..x_end {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let weights = barycentric_weights(a, b, c, center);
                if weights == Vec3::ZERO {
                    continue;
                }

                let interpolated_inv_w = weights.dot(inv_w);
                if interpolated_inv_w == 0.0 {
                    continue;
                }
                let u = weights.dot(u_over_w) / interpolated_inv_w;
                let v = weights.dot(v_over_w) / interpolated_inv_w;

                let texel = texture.sample(u, v);
                let color = if texel == colors::ERROR_COLOR {
                    texel
                } else {
                    colors::apply_intensity(texel, intensity)
                };
                buffer.set_pixel_with_depth(x, y, weights.dot(depth), color);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;

    const W: u32 = 32;
    const H: u32 = 32;

    fn solid(color: u32) -> Texture {
        Texture::new(1, 1, vec![color]).unwrap()
    }

    fn square_half(depth: f32) -> Triangle {
        Triangle::new(
            [
                Vec4::new(2.0, 2.0, depth, 1.0),
                Vec4::new(30.0, 2.0, depth, 1.0),
                Vec4::new(2.0, 30.0, depth, 1.0),
            ],
            [Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0), Vec2::new(0.0, 0.5)],
            colors::WHITE,
        )
    }

    fn render(draws: &[(f32, u32)]) -> (Vec<u32>, Vec<f32>) {
        let mut color = vec![0u32; (W * H) as usize];
        let mut depth = vec![1.0f32; (W * H) as usize];
        {
            let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
            let rasterizer = ScanlineRasterizer::new();
            for &(z, texel) in draws {
                rasterizer.fill_textured_triangle(&square_half(z), &solid(texel), &mut fb);
            }
        }
        (color, depth)
    }

    const NEAR: u32 = 0xFF0000FF;
    const FAR: u32 = 0xFFFF0000;

    #[test]
    fn nearer_triangle_wins_in_either_order() {
        let idx = (8 * W + 8) as usize;

        let (color, depth) = render(&[(0.8, FAR), (0.2, NEAR)]);
        assert_eq!(color[idx], NEAR);
        assert_relative_eq!(depth[idx], 0.2, epsilon = 1e-6);

        let (color, depth) = render(&[(0.2, NEAR), (0.8, FAR)]);
        assert_eq!(color[idx], NEAR);
        assert_relative_eq!(depth[idx], 0.2, epsilon = 1e-6);
    }

    #[test]
    fn pixels_outside_triangle_are_untouched() {
        let (color, depth) = render(&[(0.5, NEAR)]);
        let idx = (28 * W + 28) as usize;
        assert_eq!(color[idx], 0);
        assert_eq!(depth[idx], 1.0);
    }

    #[test]
    fn uv_interpolation_is_perspective_correct() {
        // 2x1 texture: left half red, right half green.
        let texture = Texture::new(2, 1, vec![0xFFFF0000, 0xFF00FF00]).unwrap();
        // The right edge is four times as deep, so affine interpolation would
        // put u = 0.5 at the screen midpoint. Perspective-correct u at the
        // midpoint is 0.2, still in the red half.
        let triangle = Triangle::new(
            [
                Vec4::new(1.0, 1.0, 0.1, 1.0),
                Vec4::new(31.0, 1.0, 0.9, 4.0),
                Vec4::new(1.0, 31.0, 0.1, 1.0),
            ],
            [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0)],
            colors::WHITE,
        );

        let mut color = vec![0u32; (W * H) as usize];
        let mut depth = vec![1.0f32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        ScanlineRasterizer::new().fill_textured_triangle(&triangle, &texture, &mut fb);

        assert_eq!(fb.get_pixel(16, 1), Some(0xFFFF0000));
    }

    #[test]
    fn intensity_darkens_texels() {
        let mut color = vec![0u32; (W * H) as usize];
        let mut depth = vec![1.0f32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        let triangle = square_half(0.5).with_intensity(0.0);
        ScanlineRasterizer::new().fill_textured_triangle(&triangle, &solid(colors::WHITE), &mut fb);
        assert_eq!(fb.get_pixel(8, 8), Some(colors::BLACK));
    }

    #[test]
    fn degenerate_triangle_writes_nothing() {
        let mut color = vec![0u32; (W * H) as usize];
        let mut depth = vec![1.0f32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        let triangle = Triangle::new(
            [
                Vec4::new(2.0, 2.0, 0.5, 1.0),
                Vec4::new(10.0, 10.0, 0.5, 1.0),
                Vec4::new(20.0, 20.0, 0.5, 1.0),
            ],
            [Vec2::ZERO; 3],
            colors::WHITE,
        );
        ScanlineRasterizer::new().fill_textured_triangle(&triangle, &solid(NEAR), &mut fb);
        drop(fb);
        assert!(color.iter().all(|&c| c == 0));
    }
}
