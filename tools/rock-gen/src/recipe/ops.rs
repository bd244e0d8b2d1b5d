//! Operations appended to a rock's modifier stack

use std::fmt;

use serde::Serialize;

use super::textures::NoiseTexture;

/// Host default displacement strength
pub const DEFAULT_STRENGTH: f32 = 1.0;
/// Host default displacement mid-level (texture value that leaves a vertex in place)
pub const DEFAULT_MID_LEVEL: f32 = 0.5;

/// One step on a rock's operation stack, evaluated by the host in order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// Subdivision-surface smoothing
    Subdivide { name: String, levels: u32 },
    /// Texture-driven displacement along vertex normals
    Displace {
        name: String,
        texture: NoiseTexture,
        strength: f32,
        mid_level: f32,
    },
    /// Polygon reduction to `ratio` of the input face count
    Decimate {
        name: String,
        ratio: f32,
        triangulate: bool,
    },
}

impl Operation {
    pub fn subdivide(name: impl Into<String>, levels: u32) -> Self {
        Operation::Subdivide {
            name: name.into(),
            levels,
        }
    }

    pub fn decimate(name: impl Into<String>, ratio: f32, triangulate: bool) -> Self {
        Operation::Decimate {
            name: name.into(),
            ratio,
            triangulate,
        }
    }

    /// Name shown on the host's modifier stack
    pub fn name(&self) -> &str {
        match self {
            Operation::Subdivide { name, .. }
            | Operation::Displace { name, .. }
            | Operation::Decimate { name, .. } => name,
        }
    }

    /// Subdivision levels, if this is a smoothing step
    pub fn subdivide_levels(&self) -> Option<u32> {
        match self {
            Operation::Subdivide { levels, .. } => Some(*levels),
            _ => None,
        }
    }

    pub fn is_displace(&self) -> bool {
        matches!(self, Operation::Displace { .. })
    }

    pub fn texture(&self) -> Option<&NoiseTexture> {
        match self {
            Operation::Displace { texture, .. } => Some(texture),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Subdivide { levels, .. } => write!(f, "Subdivide({})", levels),
            Operation::Displace {
                texture,
                strength,
                mid_level,
                ..
            } => write!(
                f,
                "Displace({}, strength={:.3}, mid={:.3})",
                texture.kind(),
                strength,
                mid_level
            ),
            Operation::Decimate { ratio, .. } => write!(f, "Decimate({})", ratio),
        }
    }
}
