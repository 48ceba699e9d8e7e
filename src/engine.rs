//! Core rendering engine.
//!
//! The [`Engine`] owns everything a frame needs: the mesh instance, camera,
//! light, projection, frustum and the output buffers. [`RenderSettings`] is
//! the render context the frame driver mutates between frames; nothing in the
//! pipeline reads process-wide state.
//!
//! Each frame is [`Engine::update`] (geometry) followed by [`Engine::render`]
//! (pixels).

use std::fmt;

use log::{debug, info, trace};

use crate::camera::Camera;
use crate::clipper::{Frustum, Polygon};
use crate::colors;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::light::DirectionalLight;
use crate::math::mat4::{project_with_mat, Mat4};
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::math::EPSILON;
use crate::mesh::Mesh;
use crate::projection::{Projection, Viewport};
use crate::render::line::{draw_triangle_wireframe, LineAlgorithm};
use crate::render::{Renderer, ScanlineRasterizer, Triangle};
use crate::texture::Texture;

/// Rendering mode presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Wireframe only (key: 1)
    Wireframe,
    /// Wireframe + vertices (key: 2)
    WireframeVertices,
    /// Flat color fill (key: 3)
    Filled,
    /// Flat color fill + wireframe (key: 4)
    #[default]
    FilledWireframe,
    /// Textured, z-buffered (key: 5)
    Textured,
    /// Textured + wireframe (key: 6)
    TexturedWireframe,
}

/// How triangle interiors are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    None,
    Flat,
    Textured,
}

impl RenderMode {
    pub const ALL: [RenderMode; 6] = [
        RenderMode::Wireframe,
        RenderMode::WireframeVertices,
        RenderMode::Filled,
        RenderMode::FilledWireframe,
        RenderMode::Textured,
        RenderMode::TexturedWireframe,
    ];

    pub fn fill(self) -> Fill {
        match self {
            RenderMode::Wireframe | RenderMode::WireframeVertices => Fill::None,
            RenderMode::Filled | RenderMode::FilledWireframe => Fill::Flat,
            RenderMode::Textured | RenderMode::TexturedWireframe => Fill::Textured,
        }
    }

    pub fn draws_wireframe(self) -> bool {
        matches!(
            self,
            RenderMode::Wireframe
                | RenderMode::WireframeVertices
                | RenderMode::FilledWireframe
                | RenderMode::TexturedWireframe
        )
    }

    pub fn draws_vertices(self) -> bool {
        self == RenderMode::WireframeVertices
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderMode::Wireframe => "wireframe",
            RenderMode::WireframeVertices => "wireframe + vertices",
            RenderMode::Filled => "filled",
            RenderMode::FilledWireframe => "filled + wireframe",
            RenderMode::Textured => "textured",
            RenderMode::TexturedWireframe => "textured + wireframe",
        };
        f.write_str(name)
    }
}

/// Per-frame render context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub mode: RenderMode,
    pub backface_culling: bool,
    pub line_algorithm: LineAlgorithm,
    pub lighting: bool,
    pub draw_grid: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            backface_culling: true,
            line_algorithm: LineAlgorithm::default(),
            lighting: true,
            draw_grid: false,
        }
    }
}

/// Counters from the last [`Engine::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub faces: usize,
    pub culled: usize,
    pub degenerate: usize,
    pub clipped_away: usize,
    pub triangles: usize,
}

pub struct Engine {
    config: EngineConfig,
    settings: RenderSettings,
    renderer: Renderer,
    rasterizer: ScanlineRasterizer,
    projection: Projection,
    projection_matrix: Mat4,
    frustum: Frustum,
    viewport: Viewport,
    camera: Camera,
    light: DirectionalLight,
    mesh: Mesh,
    texture: Option<Texture>,
    triangles_to_render: Vec<Triangle>,
    stats: FrameStats,
}

impl Engine {
    /// Builds an engine with the unit cube loaded and default settings.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let projection = Projection::from_degrees(
            config.fov_y_degrees,
            config.aspect_ratio(),
            config.z_near,
            config.z_far,
        )?;

        info!(
            "Engine {}x{}, fov {}°, clip {}..{}",
            config.width, config.height, config.fov_y_degrees, config.z_near, config.z_far
        );

        Ok(Self {
            settings: RenderSettings::default(),
            renderer: Renderer::new(config.width, config.height, config.clear_color),
            rasterizer: ScanlineRasterizer::new(),
            projection_matrix: projection.matrix(),
            frustum: projection.frustum(),
            viewport: Viewport::new(config.width, config.height),
            camera: Camera::new(config.camera_position),
            light: DirectionalLight::default(),
            mesh: Mesh::cube(),
            texture: None,
            triangles_to_render: Vec::new(),
            stats: FrameStats::default(),
            projection,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    pub fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    pub fn set_texture(&mut self, texture: Option<Texture>) {
        self.texture = texture;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    /// Screen-space triangles produced by the last update, in draw order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles_to_render
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Returns the rendered frame as bytes (ARGB8888 format).
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// True when the textured path (and its z-buffer) will be used.
    fn uses_depth_buffer(&self) -> bool {
        self.settings.mode.fill() == Fill::Textured && self.texture.is_some()
    }

    /// Transforms, culls, lights, clips and projects every face of the mesh.
    pub fn update(&mut self) {
        let model_view = self.camera.view_matrix() * self.mesh.transform().to_matrix();
        let settings = self.settings;
        let mut stats = FrameStats::default();

        self.triangles_to_render.clear();

        for (index, face) in self.mesh.faces().iter().enumerate() {
            stats.faces += 1;
            let [a, b, c] = self
                .mesh
                .face_vertices(face)
                .map(|v| model_view.transform_point(v));

            let Some(normal) = (b - a).cross(c - a).try_normalize() else {
                debug!("skipping degenerate face {index}");
                stats.degenerate += 1;
                continue;
            };

            // The camera sits at the view-space origin.
            if settings.backface_culling && normal.dot(Vec3::ZERO - a) < -EPSILON {
                stats.culled += 1;
                continue;
            }

            let intensity = if settings.lighting {
                self.light.intensity(normal)
            } else {
                1.0
            };
            let color = colors::apply_intensity(face.color, intensity);

            let clipped = self
                .frustum
                .clip(&Polygon::from_triangle([a, b, c], face.texcoords));
            if clipped.len() < 3 {
                trace!("face {index} clipped away");
                stats.clipped_away += 1;
                continue;
            }
            trace!("face {index} clipped to {} vertices", clipped.len());

            for triangle in clipped.triangles() {
                let points = triangle.vertices.map(|v| {
                    let projected = project_with_mat(&self.projection_matrix, Vec4::from(v));
                    self.viewport.to_screen(projected)
                });
                self.triangles_to_render.push(
                    Triangle::new(points, triangle.texcoords, color).with_intensity(intensity),
                );
            }
        }

        if !self.uses_depth_buffer() {
            // Painter's algorithm: farthest first.
            self.triangles_to_render
                .sort_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));
        }

        stats.triangles = self.triangles_to_render.len();
        trace!("{stats:?}");
        self.stats = stats;
    }

    /// Draws the triangles from the last update into the color buffer.
    pub fn render(&mut self) {
        self.renderer.clear(self.config.clear_color);
        self.renderer.clear_depth();

        if self.settings.draw_grid {
            self.renderer
                .draw_grid(self.config.grid_spacing, colors::GRID);
        }

        let mode = self.settings.mode;
        let texture = if mode.fill() == Fill::Textured {
            self.texture.as_ref()
        } else {
            None
        };

        let mut fb = self.renderer.as_framebuffer();

        if mode.fill() != Fill::None {
            for triangle in &self.triangles_to_render {
                match texture {
                    Some(texture) => {
                        self.rasterizer
                            .fill_textured_triangle(triangle, texture, &mut fb)
                    }
                    None => self.rasterizer.fill_triangle(triangle, &mut fb),
                }
            }
        }

        if mode.draws_wireframe() {
            for triangle in &self.triangles_to_render {
                draw_triangle_wireframe(
                    &mut fb,
                    self.settings.line_algorithm,
                    triangle,
                    colors::WIREFRAME,
                );
            }
        }

        if mode.draws_vertices() {
            for triangle in &self.triangles_to_render {
                for vertex in &triangle.points {
                    self.renderer
                        .draw_rect(vertex.x as i32 - 2, vertex.y as i32 - 2, 4, 4, colors::VERTEX);
                }
            }
        }
    }
}
