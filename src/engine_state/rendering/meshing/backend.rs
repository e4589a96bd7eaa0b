//! Mesh backends: the rendering collaborator that owns GPU-side (or any other)
//! mesh storage.
//!
//! The engine never issues draw calls. It only asks a backend to create a mesh,
//! replace a mesh's contents and destroy it. [`MemoryMeshBackend`] keeps meshes in
//! host memory and is what the demo driver and the tests run against.

use crate::{core::StResource, error::MeshError};

/// Create/update/destroy capability for renderable meshes.
///
/// `vertices` and `uvs` are paired one-to-one; implementations should reject
/// sequences of different lengths.
pub trait MeshBackend {
    /// Identifies a mesh owned by the backend.
    type Handle;

    /// Creates a mesh with the given initial contents.
    fn create_mesh(
        &mut self,
        vertices: &[[f32; 3]],
        uvs: &[[f32; 2]],
    ) -> Result<Self::Handle, MeshError>;

    /// Replaces a mesh's contents. The vertex count may grow or shrink.
    fn update_mesh(
        &mut self,
        handle: &Self::Handle,
        vertices: &[[f32; 3]],
        uvs: &[[f32; 2]],
    ) -> Result<(), MeshError>;

    /// Releases a mesh. The handle is consumed.
    fn destroy_mesh(&mut self, handle: Self::Handle);
}

/// Handle to a mesh stored in a [`MemoryMeshBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// A mesh held by a [`MemoryMeshBackend`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoredMesh {
    /// Vertex positions.
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates.
    pub uvs: Vec<[f32; 2]>,
    /// Number of times the contents have been replaced since creation.
    pub update_count: usize,
}

impl StoredMesh {
    /// Number of vertices currently stored.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Every mesh a [`MemoryMeshBackend`] has created, indexed by handle.
#[derive(Debug, Default)]
pub struct MeshStore {
    meshes: Vec<Option<StoredMesh>>,
    /// Total `update_mesh` calls accepted.
    pub total_updates: usize,
    /// Total `destroy_mesh` calls.
    pub total_destroys: usize,
}

impl MeshStore {
    /// Looks up a live mesh.
    pub fn mesh(&self, handle: MeshHandle) -> Option<&StoredMesh> {
        self.meshes.get(handle.0 as usize)?.as_ref()
    }

    /// Number of meshes created and not yet destroyed.
    pub fn live_count(&self) -> usize {
        self.meshes.iter().filter(|mesh| mesh.is_some()).count()
    }

    /// Number of meshes ever created.
    pub fn created_count(&self) -> usize {
        self.meshes.len()
    }
}

/// A backend that keeps meshes in host memory.
///
/// Clones of [`MemoryMeshBackend::store`] observe the same store, so a caller can
/// keep one while the engine owns the backend.
#[derive(Clone)]
pub struct MemoryMeshBackend {
    store: StResource<MeshStore>,
}

impl Default for MemoryMeshBackend {
    fn default() -> Self {
        MemoryMeshBackend::new()
    }
}

impl MemoryMeshBackend {
    /// Creates a backend with an empty store.
    pub fn new() -> Self {
        MemoryMeshBackend {
            store: StResource::new(MeshStore::default()),
        }
    }

    /// A shared handle on the backend's mesh store.
    pub fn store(&self) -> StResource<MeshStore> {
        self.store.clone()
    }

    fn check_pairing(vertices: &[[f32; 3]], uvs: &[[f32; 2]]) -> Result<(), MeshError> {
        if vertices.len() != uvs.len() {
            return Err(MeshError::VertexUvMismatch {
                vertices: vertices.len(),
                uvs: uvs.len(),
            });
        }
        Ok(())
    }
}

impl MeshBackend for MemoryMeshBackend {
    type Handle = MeshHandle;

    fn create_mesh(
        &mut self,
        vertices: &[[f32; 3]],
        uvs: &[[f32; 2]],
    ) -> Result<Self::Handle, MeshError> {
        Self::check_pairing(vertices, uvs)?;
        let mut store = self.store.get_mut();
        let handle = MeshHandle(store.meshes.len() as u64);
        store.meshes.push(Some(StoredMesh {
            vertices: vertices.to_vec(),
            uvs: uvs.to_vec(),
            update_count: 0,
        }));
        Ok(handle)
    }

    fn update_mesh(
        &mut self,
        handle: &Self::Handle,
        vertices: &[[f32; 3]],
        uvs: &[[f32; 2]],
    ) -> Result<(), MeshError> {
        Self::check_pairing(vertices, uvs)?;
        let mut store = self.store.get_mut();
        let mesh = store
            .meshes
            .get_mut(handle.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(MeshError::UnknownHandle(handle.0))?;

        mesh.vertices.clear();
        mesh.vertices.extend_from_slice(vertices);
        mesh.uvs.clear();
        mesh.uvs.extend_from_slice(uvs);
        mesh.update_count += 1;
        store.total_updates += 1;
        Ok(())
    }

    fn destroy_mesh(&mut self, handle: Self::Handle) {
        let mut store = self.store.get_mut();
        if let Some(slot) = store.meshes.get_mut(handle.0 as usize) {
            *slot = None;
        }
        store.total_destroys += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_update_destroy() {
        let mut backend = MemoryMeshBackend::new();
        let store = backend.store();

        let handle = backend
            .create_mesh(&[[0.0; 3]; 3], &[[0.0; 2]; 3])
            .unwrap();
        assert_eq!(store.get().mesh(handle).unwrap().vertex_count(), 3);

        backend.update_mesh(&handle, &[], &[]).unwrap();
        assert_eq!(store.get().mesh(handle).unwrap().vertex_count(), 0);
        assert_eq!(store.get().mesh(handle).unwrap().update_count, 1);

        backend.destroy_mesh(handle);
        assert!(store.get().mesh(handle).is_none());
        assert_eq!(store.get().live_count(), 0);
        assert_eq!(store.get().created_count(), 1);
    }

    #[test]
    fn rejects_unpaired_data() {
        let mut backend = MemoryMeshBackend::new();
        let err = backend
            .create_mesh(&[[0.0; 3]; 2], &[[0.0; 2]; 1])
            .unwrap_err();
        assert_eq!(err, MeshError::VertexUvMismatch { vertices: 2, uvs: 1 });
    }

    #[test]
    fn update_of_destroyed_mesh_fails() {
        let mut backend = MemoryMeshBackend::new();
        let handle = backend.create_mesh(&[], &[]).unwrap();
        backend.destroy_mesh(handle);
        assert_eq!(
            backend.update_mesh(&handle, &[], &[]),
            Err(MeshError::UnknownHandle(0))
        );
    }
}
