//! SDL2 window: presents the color buffer and turns keyboard input into
//! engine commands.

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::engine::RenderMode;
use crate::error::{RenderError, Result};

pub const WINDOW_TITLE: &str = "softraster";
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

/// Discrete commands produced by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    /// Keys 1 to 6.
    SelectMode(RenderMode),
    /// C
    ToggleCulling,
    /// B
    ToggleLineAlgorithm,
    /// L
    ToggleLighting,
    /// G
    ToggleGrid,
}

/// Movement keys currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl InputState {
    /// Movement along (right, up, forward), each in `-1..=1`.
    pub fn movement(&self) -> (f32, f32, f32) {
        let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32;
        (
            axis(self.right, self.left),
            axis(self.up, self.down),
            axis(self.forward, self.back),
        )
    }

    /// Yaw direction, positive turns right.
    pub fn turn(&self) -> f32 {
        (self.turn_right as i32 - self.turn_left as i32) as f32
    }
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = FRAME_TARGET_TIME as u64 - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    // Declared before `_texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

fn window_error(e: impl ToString) -> RenderError {
    RenderError::Window(e.to_string())
}

impl Window {
    /// Opens a fixed-size window whose streaming texture matches the
    /// engine's color buffer.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(window_error)?;
        let video_subsystem = sdl_context.video().map_err(window_error)?;
        let timer_subsystem = sdl_context.timer().map_err(window_error)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(window_error)?;

        let canvas = window.into_canvas().build().map_err(window_error)?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(window_error)?;

        // SAFETY: texture_creator is heap-allocated, never replaced, and owned
        // by the same Window. Field order drops the texture first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(window_error)?;

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains pending SDL events into commands.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(command) = key_command(key) {
                        events.push(command);
                    }
                }
                _ => {}
            }
        }
        events
    }

    /// Snapshot of the held movement keys (WASD, Q/E, arrows).
    pub fn input_state(&self) -> InputState {
        let keys = self.event_pump.keyboard_state();
        let held = |code| keys.is_scancode_pressed(code);
        InputState {
            forward: held(Scancode::W) || held(Scancode::Up),
            back: held(Scancode::S) || held(Scancode::Down),
            left: held(Scancode::A),
            right: held(Scancode::D),
            up: held(Scancode::E),
            down: held(Scancode::Q),
            turn_left: held(Scancode::Left),
            turn_right: held(Scancode::Right),
        }
    }

    /// Uploads an ARGB8888 frame and shows it.
    pub fn present(&mut self, buffer: &[u8]) -> Result<()> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(window_error)?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(window_error)?;
        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

fn key_command(key: Keycode) -> Option<WindowEvent> {
    let mode = |index: usize| Some(WindowEvent::SelectMode(RenderMode::ALL[index]));
    match key {
        Keycode::Num1 => mode(0),
        Keycode::Num2 => mode(1),
        Keycode::Num3 => mode(2),
        Keycode::Num4 => mode(3),
        Keycode::Num5 => mode(4),
        Keycode::Num6 => mode(5),
        Keycode::C => Some(WindowEvent::ToggleCulling),
        Keycode::B => Some(WindowEvent::ToggleLineAlgorithm),
        Keycode::L => Some(WindowEvent::ToggleLighting),
        Keycode::G => Some(WindowEvent::ToggleGrid),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_select_modes_in_order() {
        assert_eq!(
            key_command(Keycode::Num1),
            Some(WindowEvent::SelectMode(RenderMode::Wireframe))
        );
        assert_eq!(
            key_command(Keycode::Num6),
            Some(WindowEvent::SelectMode(RenderMode::TexturedWireframe))
        );
        assert_eq!(key_command(Keycode::X), None);
    }

    #[test]
    fn opposing_keys_cancel() {
        let input = InputState {
            left: true,
            right: true,
            forward: true,
            ..Default::default()
        };
        assert_eq!(input.movement(), (0.0, 0.0, 1.0));
        assert_eq!(input.turn(), 0.0);
    }
}
