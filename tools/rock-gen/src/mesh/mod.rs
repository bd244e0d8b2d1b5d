//! Seed geometry for rocks
//!
//! Every rock starts from one of three low-poly primitives, sized and then
//! stretched along a single direction. All detail comes later from the
//! host-evaluated operation stack.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::Serialize;

use crate::error::RockError;

mod export;
mod primitives;
mod transform;

pub use export::{write_obj, write_obj_to};
pub use primitives::{generate_cube, generate_icosphere, generate_uv_sphere};
pub use transform::{MeshApply, MeshModifier, Transform};

/// Icosphere subdivision level used for the seed mesh (host numbering: 1 is the icosahedron)
pub const ICOSPHERE_SUBDIVISIONS: u32 = 1;
/// UV sphere segments (around the equator)
pub const UV_SPHERE_SEGMENTS: u32 = 5;
/// UV sphere rings (pole to pole)
pub const UV_SPHERE_RINGS: u32 = 5;

/// Triangle mesh with positions only
///
/// Normals are the host's business; the seed mesh only needs topology and
/// placement.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MeshData {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Triangle indices, three per face
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        index
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as (min, max), or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().map(|p| Vec3::from(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

/// Seed polyhedron a recipe is applied onto
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseShape {
    /// 8-vertex cube
    #[default]
    Cube,
    /// Icosahedron (host icosphere at subdivision level 1)
    Icosphere,
    /// 5x5 segment UV sphere
    UvSphere,
}

impl BaseShape {
    pub const ALL: [BaseShape; 3] = [BaseShape::Cube, BaseShape::Icosphere, BaseShape::UvSphere];

    /// Identifier accepted by [`FromStr`]
    pub fn id(&self) -> &'static str {
        match self {
            BaseShape::Cube => "cube",
            BaseShape::Icosphere => "icosphere",
            BaseShape::UvSphere => "uv_sphere",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BaseShape::Cube => "Cube",
            BaseShape::Icosphere => "Icosphere",
            BaseShape::UvSphere => "UvSphere",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BaseShape::Cube => "Use cube as base",
            BaseShape::Icosphere => "Use icosphere as base",
            BaseShape::UvSphere => "Use UV sphere as base",
        }
    }

    /// Build the unit primitive for this shape at the given size
    pub fn build(&self, size: f32) -> MeshData {
        match self {
            BaseShape::Cube => generate_cube(size),
            BaseShape::Icosphere => generate_icosphere(size, ICOSPHERE_SUBDIVISIONS),
            BaseShape::UvSphere => generate_uv_sphere(size, UV_SPHERE_SEGMENTS, UV_SPHERE_RINGS),
        }
    }
}

impl fmt::Display for BaseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BaseShape {
    type Err = RockError;

    /// Accepts the short ids (`cube`, `icosphere`, `uv_sphere`) as well as the
    /// host-side identifiers (`CubeBase`, `IcosphereBase`, `UvSphereBase`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" | "cubebase" => Ok(BaseShape::Cube),
            "icosphere" | "icospherebase" => Ok(BaseShape::Icosphere),
            "uv_sphere" | "uvsphere" | "uv-sphere" | "uvspherebase" => Ok(BaseShape::UvSphere),
            _ => Err(RockError::InvalidShapeId(s.to_string())),
        }
    }
}

/// Build a seed mesh: primitive of `shape` at `size`, stretched by
/// `scale_factor` along `scale_direction`
///
/// `size <= 0.0` is not rejected; it yields degenerate geometry, the same as
/// the host's own primitive operators.
pub fn create_base(shape: BaseShape, size: f32, scale_direction: Vec3, scale_factor: f32) -> MeshData {
    let mut mesh = shape.build(size);
    mesh.apply(Transform::scale_along(scale_direction, scale_factor));

    tracing::debug!(
        shape = shape.id(),
        size,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Built seed mesh"
    );

    mesh
}
