//! In-memory scene
//!
//! Behaves like a minimal host: unique object names with numeric suffixes,
//! and a delete operator that only sees selected objects that are not hidden.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ObjectId, Scene, SceneError};
use crate::mesh::MeshData;
use crate::recipe::Operation;

/// One object in a [`MemoryScene`]
#[derive(Debug, Clone, Serialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    #[serde(skip)]
    pub mesh: MeshData,
    pub operations: Vec<Operation>,
    pub hidden: bool,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct MemoryScene {
    objects: BTreeMap<ObjectId, SceneObject>,
    active: Option<ObjectId>,
    next_id: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Objects in creation order
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.values().find(|obj| obj.name == name)
    }

    /// `base` if free, otherwise `base.001`, `base.002`, ...
    fn unique_name(&self, base: &str) -> String {
        let taken = |name: &str| self.objects.values().any(|obj| obj.name == name);
        if !taken(base) {
            return base.to_string();
        }

        (1..)
            .map(|n| format!("{}.{:03}", base, n))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    fn insert(&mut self, name: &str, mesh: MeshData, operations: Vec<Operation>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let name = self.unique_name(name);
        tracing::debug!(%id, name = %name, "Linked object");

        self.objects.insert(
            id,
            SceneObject {
                id,
                name,
                mesh,
                operations,
                hidden: false,
                selected: false,
            },
        );
        id
    }

    fn get_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, SceneError> {
        self.objects.get_mut(&id).ok_or(SceneError::ObjectNotFound(id))
    }

    fn get(&self, id: ObjectId) -> Result<&SceneObject, SceneError> {
        self.objects.get(&id).ok_or(SceneError::ObjectNotFound(id))
    }
}

impl Scene for MemoryScene {
    fn add_mesh_object(&mut self, name: &str, mesh: MeshData) -> Result<ObjectId, SceneError> {
        Ok(self.insert(name, mesh, Vec::new()))
    }

    fn duplicate(&mut self, id: ObjectId, name: &str) -> Result<ObjectId, SceneError> {
        let source = self.get(id)?;
        let (mesh, operations, hidden) =
            (source.mesh.clone(), source.operations.clone(), source.hidden);

        let copy = self.insert(name, mesh, operations);
        self.get_mut(copy)?.hidden = hidden;
        Ok(copy)
    }

    fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    fn object_ids(&self) -> Vec<ObjectId> {
        self.objects.keys().copied().collect()
    }

    fn object_name(&self, id: ObjectId) -> Result<&str, SceneError> {
        Ok(&self.get(id)?.name)
    }

    fn operations(&self, id: ObjectId) -> Result<&[Operation], SceneError> {
        Ok(&self.get(id)?.operations)
    }

    fn push_operation(&mut self, id: ObjectId, op: Operation) -> Result<(), SceneError> {
        self.get_mut(id)?.operations.push(op);
        Ok(())
    }

    fn remove_operation(&mut self, id: ObjectId, index: usize) -> Result<Operation, SceneError> {
        let obj = self.get_mut(id)?;
        let len = obj.operations.len();
        if index >= len {
            return Err(SceneError::OperationIndex { id, index, len });
        }
        Ok(obj.operations.remove(index))
    }

    fn set_hidden(&mut self, id: ObjectId, hidden: bool) -> Result<(), SceneError> {
        self.get_mut(id)?.hidden = hidden;
        Ok(())
    }

    fn is_hidden(&self, id: ObjectId) -> Result<bool, SceneError> {
        Ok(self.get(id)?.hidden)
    }

    fn set_selected(&mut self, id: ObjectId, selected: bool) -> Result<(), SceneError> {
        self.get_mut(id)?.selected = selected;
        Ok(())
    }

    fn deselect_all(&mut self) {
        for obj in self.objects.values_mut() {
            obj.selected = false;
        }
    }

    fn set_active(&mut self, id: ObjectId) -> Result<(), SceneError> {
        self.get(id)?;
        self.active = Some(id);
        Ok(())
    }

    fn active(&self) -> Option<ObjectId> {
        self.active
    }

    fn delete_selected(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|_, obj| !obj.selected || obj.hidden);

        if self.active.is_some_and(|active| !self.objects.contains_key(&active)) {
            self.active = None;
        }

        before - self.objects.len()
    }
}
