//! Owning color and depth buffers.
//!
//! Provides the [`Renderer`] struct, which allocates both buffers once at the
//! output resolution and resets them in place every frame.

use super::framebuffer::FrameBuffer;

/// Depth the z-buffer is reset to each frame (the far plane in NDC).
pub const FAR_DEPTH: f32 = 1.0;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32, clear_color: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![clear_color; size],
            depth_buffer: vec![FAR_DEPTH; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Resets every depth to [`FAR_DEPTH`].
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(FAR_DEPTH);
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Color at (x, y), `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            self.color_buffer
                .get(y as usize * self.width as usize + x as usize)
                .copied()
        } else {
            None
        }
    }

    /// Draws grid lines every `spacing` pixels along both axes.
    pub fn draw_grid(&mut self, spacing: u32, color: u32) {
        if spacing == 0 {
            return;
        }
        let (width, height) = (self.width as i32, self.height as i32);
        let spacing = spacing as i32;
        let mut fb = self.as_framebuffer();
        for y in 0..height {
            for x in 0..width {
                if x % spacing == 0 || y % spacing == 0 {
                    fb.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Fills a `width` x `height` rectangle with its top-left corner at (x, y).
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        let mut fb = self.as_framebuffer();
        for dy in 0..height {
            for dx in 0..width {
                fb.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// The color buffer as raw bytes, for handing to a display surface.
    ///
    /// Each pixel is a native-endian `u32` in ARGB8888 layout.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u8 has no alignment requirement, the length covers exactly
        // the u32 storage and the borrow of self keeps the buffer alive.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * std::mem::size_of::<u32>(),
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }
}
