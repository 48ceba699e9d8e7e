//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a view into color and depth buffers with bounds-checked access.
//! The depth buffer holds NDC depth in `[0, 1]`; smaller values are nearer.

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type. It is created temporarily when
/// buffers and dimensions need to travel together.
///
/// # Border rule
///
/// Column 0 and row 0 are never written. Every write also checks the far
/// bounds, so callers can pass any coordinate.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// Both slices must hold `width * height` entries.
    pub fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            color_buffer.len(),
            "Depth buffer size doesn't match color buffer"
        );
        Self {
            color_buffer,
            depth_buffer,
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

    /// Buffer index for a writable pixel, `None` on the border or outside.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x > 0 && y > 0 && x < self.width as i32 && y < self.height as i32 {
            let idx = y as usize * self.width as usize + x as usize;
            (idx < self.color_buffer.len()).then_some(idx)
        } else {
            None
        }
    }

    /// Set a pixel without depth testing (lines, grid, vertex markers).
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is less than the stored depth
    /// (nearer wins). Returns whether the write happened.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) -> bool {
        match self.index(x, y) {
            Some(idx) if depth < self.depth_buffer[idx] => {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
                true
            }
            _ => false,
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            self.color_buffer
                .get(y as usize * self.width as usize + x as usize)
                .copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_row_and_column_are_never_written() {
        let mut color = vec![0u32; 16];
        let mut depth = vec![1.0f32; 16];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);

        fb.set_pixel(0, 2, 7);
        fb.set_pixel(2, 0, 7);
        fb.set_pixel(2, 2, 7);
        assert!(!fb.set_pixel_with_depth(0, 0, 0.5, 9));

        assert_eq!(fb.get_pixel(0, 2), Some(0));
        assert_eq!(fb.get_pixel(2, 0), Some(0));
        assert_eq!(fb.get_pixel(2, 2), Some(7));
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut color = vec![0u32; 16];
        let mut depth = vec![1.0f32; 16];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);

        fb.set_pixel(4, 1, 7);
        fb.set_pixel(-3, 1, 7);
        fb.set_pixel(1, 100, 7);
        assert_eq!(fb.get_pixel(4, 1), None);
        assert!(color.iter().all(|&c| c == 0));
    }

    #[test]
    fn nearer_depth_wins() {
        let mut color = vec![0u32; 16];
        let mut depth = vec![1.0f32; 16];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);

        assert!(fb.set_pixel_with_depth(1, 1, 0.8, 1));
        assert!(fb.set_pixel_with_depth(1, 1, 0.2, 2));
        assert!(!fb.set_pixel_with_depth(1, 1, 0.5, 3));
        assert!(!fb.set_pixel_with_depth(1, 1, 0.2, 4));
        assert_eq!(fb.get_pixel(1, 1), Some(2));
    }
}
