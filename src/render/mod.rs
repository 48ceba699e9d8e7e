//! Pixel-level rendering: buffers, lines and triangle fills.

pub mod framebuffer;
pub mod line;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use line::LineAlgorithm;
pub use rasterizer::{ScanlineRasterizer, Triangle};
pub use renderer::Renderer;
