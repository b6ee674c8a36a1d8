//! GPU-ready vertex and index buffers.
//!
//! [`MeshBuffers`] flattens a [`Dataset`] into the layout a vertex shader
//! expects: one interleaved `f32` vertex per point and a `u32` triangle list.
//! No device is touched here; the byte views are handed to whatever upload
//! path the renderer uses.

use bytemuck::{Pod, Zeroable};
use vtkscope_core::Dataset;

/// Interleaved per-point vertex data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    /// Point vector attribute, zero when the dataset has none.
    pub vector: [f32; 3],
}

/// Byte stride of one [`GpuVertex`].
pub const VERTEX_STRIDE: usize = std::mem::size_of::<GpuVertex>();

/// Flattened vertex and index data for one dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    vertices: Vec<GpuVertex>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Builds buffers from a dataset, narrowing coordinates to `f32`.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let vectors = dataset.point_vectors();
        let vertices = dataset
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| GpuVertex {
                position: to_f32(*p),
                vector: vectors.map_or([0.0; 3], |v| to_f32(v[i])),
            })
            .collect();

        let indices: Vec<u32> = dataset.triangle_indices().iter().flatten().copied().collect();

        log::debug!(
            "built mesh buffers: {} vertices, {} indices",
            dataset.num_points(),
            indices.len()
        );
        Self { vertices, indices }
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[GpuVertex] {
        &self.vertices
    }

    /// Returns the flat triangle index list.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the vertex data as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the index data as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of indices to pass to an indexed draw call.
    ///
    /// Saturates at `u32::MAX`; a single indexed draw cannot address more.
    /// Use [`indices`](Self::indices) for the exact length.
    pub fn index_count(&self) -> u32 {
        u32::try_from(self.indices.len()).unwrap_or(u32::MAX)
    }
}

fn to_f32(v: [f64; 3]) -> [f32; 3] {
    v.map(|c| c as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtkscope_core::VectorAttribute;

    fn dataset(with_vectors: bool) -> Dataset {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.5]];
        let vectors = with_vectors.then(|| VectorAttribute {
            name: "v".into(),
            values: vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        });
        Dataset::new(points, vectors, Vec::new(), 0).unwrap()
    }

    #[test]
    fn test_vertex_stride() {
        assert_eq!(VERTEX_STRIDE, 24);
    }

    #[test]
    fn test_from_dataset_with_vectors() {
        let buffers = MeshBuffers::from_dataset(&dataset(true));
        assert_eq!(buffers.vertices().len(), 3);
        assert_eq!(buffers.vertices()[2].position, [0.0, 2.0, 0.5]);
        assert_eq!(buffers.vertices()[2].vector, [0.0, 0.0, 1.0]);
        assert_eq!(buffers.vertex_bytes().len(), 3 * VERTEX_STRIDE);
    }

    #[test]
    fn test_missing_vectors_are_zero() {
        let buffers = MeshBuffers::from_dataset(&dataset(false));
        assert!(buffers.vertices().iter().all(|v| v.vector == [0.0; 3]));
    }

    #[test]
    fn test_empty_indices() {
        let buffers = MeshBuffers::from_dataset(&dataset(false));
        assert_eq!(buffers.index_count(), 0);
        assert!(buffers.index_bytes().is_empty());
    }

    #[test]
    fn test_index_count_matches_indices() {
        let points = vec![[0.0; 3]; 8];
        let triangles = vec![[0, 1, 2]; 24];
        let dataset = Dataset::new(points, None, triangles, 2).unwrap();
        let buffers = MeshBuffers::from_dataset(&dataset);
        assert_eq!(buffers.index_count() as usize, buffers.indices().len());
        assert_eq!(buffers.index_count(), 72);
    }
}
