use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use env_logger::{Builder, Env};
use log::{error, info};

use softraster::engine::{Engine, Fill};
use softraster::math::vec3::Vec3;
use softraster::mesh::Mesh;
use softraster::texture::Texture;
use softraster::window::{FrameLimiter, Window, WindowEvent, WINDOW_TITLE};
use softraster::{EngineConfig, Result};

/// Mesh spin, degrees per second around each axis.
const SPIN_SPEED: f32 = 34.0;
/// Camera speed in world units per second.
const MOVE_SPEED: f32 = 4.0;
/// Camera turn rate in radians per second.
const TURN_SPEED: f32 = 1.5;

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Interactive viewer for the software rasterizer
#[derive(Parser, Debug)]
#[command(name = "softraster")]
#[command(about = "CPU software rasterizer viewer", long_about = None)]
struct Args {
    /// Wavefront OBJ mesh to show instead of the built-in cube
    mesh: Option<PathBuf>,

    /// Image used by the textured modes (PNG, JPEG, ...)
    texture: Option<PathBuf>,
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = EngineConfig::default().with_camera_position(Vec3::new(0.0, 0.0, -5.0));
    let mut engine = Engine::new(config)?;

    if let Some(path) = args.mesh {
        engine.set_mesh(Mesh::from_obj(path)?);
    }
    if let Some(path) = args.texture {
        engine.set_texture(Some(Texture::from_file(path)?));
    }

    let mut window = Window::new(WINDOW_TITLE, engine.config().width, engine.config().height)?;
    let mut limiter = FrameLimiter::new(&window);

    'running: loop {
        for event in window.poll_events() {
            if event == WindowEvent::Quit {
                break 'running;
            }
            apply_event(&mut engine, event);
        }

        let dt = limiter.wait_and_get_delta(&window) as f32 / 1000.0;

        let input = window.input_state();
        let (right, up, forward) = input.movement();
        let camera = engine.camera_mut();
        camera.rotate(input.turn() * TURN_SPEED * dt, 0.0);
        camera.move_right(right * MOVE_SPEED * dt);
        camera.move_up(up * MOVE_SPEED * dt);
        camera.move_forward(forward * MOVE_SPEED * dt);

        let spin = SPIN_SPEED * dt;
        engine
            .mesh_mut()
            .transform_mut()
            .rotate(Vec3::new(spin, spin, spin));

        engine.update();
        engine.render();
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}

fn apply_event(engine: &mut Engine, event: WindowEvent) {
    let has_texture = engine.texture().is_some();
    let settings = engine.settings_mut();
    match event {
        WindowEvent::Quit => {}
        WindowEvent::SelectMode(mode) => {
            settings.mode = mode;
            info!("Render mode: {mode}");
            if mode.fill() == Fill::Textured && !has_texture {
                info!("No texture loaded, drawing flat fill");
            }
        }
        WindowEvent::ToggleCulling => {
            settings.backface_culling = !settings.backface_culling;
            info!("Backface culling: {}", settings.backface_culling);
        }
        WindowEvent::ToggleLineAlgorithm => {
            settings.line_algorithm = settings.line_algorithm.toggled();
            info!("Line algorithm: {}", settings.line_algorithm);
        }
        WindowEvent::ToggleLighting => {
            settings.lighting = !settings.lighting;
            info!("Lighting: {}", settings.lighting);
        }
        WindowEvent::ToggleGrid => {
            settings.draw_grid = !settings.draw_grid;
            info!("Grid: {}", settings.draw_grid);
        }
    }
}
