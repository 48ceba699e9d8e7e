//! Triangle meshes: vertex positions, indexed faces and the model transform.
//!
//! Face indices are 0-based everywhere inside the crate. Data authored with
//! 1-based indices goes through [`Face::from_one_based`] at the boundary.

use std::io::BufRead;
use std::path::Path;

use log::info;

use crate::colors;
use crate::error::{RenderError, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::transform::Transform;

/// One triangle of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    /// 0-based indices into the mesh vertex list.
    pub indices: [usize; 3],
    /// Texture coordinates, one per index in the same order.
    pub texcoords: [Vec2; 3],
    /// Base color (ARGB).
    pub color: u32,
}

impl Face {
    pub const fn new(indices: [usize; 3], texcoords: [Vec2; 3], color: u32) -> Self {
        Self {
            indices,
            texcoords,
            color,
        }
    }

    /// Builds a face from 1-based indices.
    ///
    /// An index of 0 wraps to `usize::MAX` and is rejected by [`Mesh::new`].
    pub const fn from_one_based(indices: [usize; 3], texcoords: [Vec2; 3], color: u32) -> Self {
        let [a, b, c] = indices;
        Self::new(
            [a.wrapping_sub(1), b.wrapping_sub(1), c.wrapping_sub(1)],
            texcoords,
            color,
        )
    }
}

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

// Every quad is split the same way, so the two UV layouts repeat per side.
const UV_FIRST: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)];
const UV_SECOND: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0)];

const CUBE_FACES: [Face; 12] = [
    // front
    Face::from_one_based([1, 2, 3], UV_FIRST, colors::WHITE),
    Face::from_one_based([1, 3, 4], UV_SECOND, colors::WHITE),
    // right
    Face::from_one_based([4, 3, 5], UV_FIRST, colors::WHITE),
    Face::from_one_based([4, 5, 6], UV_SECOND, colors::WHITE),
    // back
    Face::from_one_based([6, 5, 7], UV_FIRST, colors::WHITE),
    Face::from_one_based([6, 7, 8], UV_SECOND, colors::WHITE),
    // left
    Face::from_one_based([8, 7, 2], UV_FIRST, colors::WHITE),
    Face::from_one_based([8, 2, 1], UV_SECOND, colors::WHITE),
    // top
    Face::from_one_based([2, 7, 5], UV_FIRST, colors::WHITE),
    Face::from_one_based([2, 5, 3], UV_SECOND, colors::WHITE),
    // bottom
    Face::from_one_based([6, 8, 1], UV_FIRST, colors::WHITE),
    Face::from_one_based([6, 1, 4], UV_SECOND, colors::WHITE),
];

/// A single mesh instance: geometry plus the transform applied to it each frame.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    transform: Transform,
}

impl Mesh {
    /// Creates a mesh, checking that every face index points at a vertex.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self> {
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face.indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(RenderError::InvalidFaceIndex {
                    face: face_index,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self {
            vertices,
            faces,
            transform: Transform::default(),
        })
    }

    /// The 2x2x2 cube centered on the origin, 12 white faces with per-face UVs.
    ///
    /// Faces are wound clockwise when viewed from outside the cube.
    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            faces: CUBE_FACES.to_vec(),
            transform: Transform::default(),
        }
    }

    /// Loads every object in a Wavefront OBJ file into one mesh.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &load_options())?;
        let mesh = Self::from_models(&models)?;
        info!(
            "Loaded {} ({} vertices, {} faces)",
            path.display(),
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Parses OBJ text from a reader. Material libraries are not resolved.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Self> {
        let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::from_models(&models)
    }

    fn from_models(models: &[tobj::Model]) -> Result<Self> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let mesh = &model.mesh;
            let base = vertices.len();

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );

            // OBJ texture space has V pointing up; textures are stored top row first.
            let texcoord = |slot: usize| -> Vec2 {
                mesh.texcoord_indices
                    .get(slot)
                    .and_then(|&t| {
                        let t = t as usize;
                        let u = *mesh.texcoords.get(2 * t)?;
                        let v = *mesh.texcoords.get(2 * t + 1)?;
                        Some(Vec2::new(u, 1.0 - v))
                    })
                    .unwrap_or(Vec2::ZERO)
            };

            for (tri, idx) in mesh.indices.chunks_exact(3).enumerate() {
                let slot = tri * 3;
                faces.push(Face::new(
                    [base + idx[0] as usize, base + idx[1] as usize, base + idx[2] as usize],
                    [texcoord(slot), texcoord(slot + 1), texcoord(slot + 2)],
                    colors::WHITE,
                ));
            }
        }

        Self::new(vertices, faces)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Positions of a face's three vertices, in face order.
    ///
    /// Indices were validated on construction.
    pub fn face_vertices(&self, face: &Face) -> [Vec3; 3] {
        face.indices.map(|i| self.vertices[i])
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}
