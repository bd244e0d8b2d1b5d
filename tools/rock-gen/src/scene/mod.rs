//! Host scene seam
//!
//! [`Scene`] is the slice of a 3D host's scene graph the generator needs: an
//! object registry, per-object operation stacks, and the selection/visibility
//! flags the host's delete operator works on. Hosts implement it over their own
//! scene; [`MemoryScene`] is a self-contained implementation.
//!
//! The trait takes `&mut self` for every mutation, so one generation always
//! runs to completion before another can touch the scene.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::mesh::MeshData;
use crate::recipe::Operation;

mod memory;

pub use memory::{MemoryScene, SceneObject};

/// Opaque handle to an object in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Failure reported by the host scene
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("Object {0} not found in scene")]
    ObjectNotFound(ObjectId),

    #[error("Object {id} has no operation at index {index} (stack has {len})")]
    OperationIndex {
        id: ObjectId,
        index: usize,
        len: usize,
    },
}

/// Object registry and modifier stacks of a host scene
pub trait Scene {
    /// Create an object holding `mesh` and link it into the scene
    ///
    /// The host may rename the object to keep names unique; the returned id is
    /// the only stable handle.
    fn add_mesh_object(&mut self, name: &str, mesh: MeshData) -> Result<ObjectId, SceneError>;

    /// Copy an object together with its mesh data and operation stack
    fn duplicate(&mut self, id: ObjectId, name: &str) -> Result<ObjectId, SceneError>;

    fn contains(&self, id: ObjectId) -> bool;

    /// Every object in the scene, in creation order
    fn object_ids(&self) -> Vec<ObjectId>;

    fn object_name(&self, id: ObjectId) -> Result<&str, SceneError>;

    fn operations(&self, id: ObjectId) -> Result<&[Operation], SceneError>;

    /// Append an operation to the end of an object's stack
    fn push_operation(&mut self, id: ObjectId, op: Operation) -> Result<(), SceneError>;

    fn remove_operation(&mut self, id: ObjectId, index: usize) -> Result<Operation, SceneError>;

    fn set_hidden(&mut self, id: ObjectId, hidden: bool) -> Result<(), SceneError>;

    fn is_hidden(&self, id: ObjectId) -> Result<bool, SceneError>;

    fn set_selected(&mut self, id: ObjectId, selected: bool) -> Result<(), SceneError>;

    fn deselect_all(&mut self);

    fn set_active(&mut self, id: ObjectId) -> Result<(), SceneError>;

    fn active(&self) -> Option<ObjectId>;

    /// Delete every selected, visible object; returns how many were removed
    fn delete_selected(&mut self) -> usize;
}
