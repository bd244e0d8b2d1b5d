//! Mesh modifiers applied while building the seed mesh
//!
//! Use the `MeshApply` extension trait for method chaining:
//! ```no_run
//! use rock_gen::mesh::*;
//! use glam::Vec3;
//!
//! let mut mesh = generate_cube(2.0);
//! mesh.apply(Transform::scale_along(Vec3::new(1.0, 0.0, 1.0), 1.5));
//! ```

use glam::{Mat3, Mat4, Vec3};

use super::MeshData;

/// Trait for mesh modifiers
pub trait MeshModifier {
    /// Apply this modifier to a mesh, modifying it in place
    fn apply(&self, mesh: &mut MeshData);
}

/// Extension trait for fluent modifier application
pub trait MeshApply {
    /// Apply a modifier and return `&mut Self` for chaining
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self;
}

impl MeshApply for MeshData {
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

/// Transform mesh vertices using a 4x4 matrix
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Create an identity transform (no change)
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }

    /// Scale by `factor` along `axis`, leaving perpendicular directions untouched
    ///
    /// The axis is normalized first. A zero axis has no direction to scale
    /// along and gives the identity.
    pub fn scale_along(axis: Vec3, factor: f32) -> Self {
        let n = axis.normalize_or_zero();
        if n == Vec3::ZERO {
            return Self::identity();
        }

        // I + (f - 1) * n * n^T
        let outer = Mat3::from_cols(n * n.x, n * n.y, n * n.z);
        let linear = Mat3::IDENTITY + outer * (factor - 1.0);
        Self::from_matrix(Mat4::from_mat3(linear))
    }

    /// Create a transform from a custom 4x4 matrix
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

impl MeshModifier for Transform {
    fn apply(&self, mesh: &mut MeshData) {
        for pos in &mut mesh.positions {
            *pos = self.matrix.transform_point3(Vec3::from(*pos)).to_array();
        }
    }
}
