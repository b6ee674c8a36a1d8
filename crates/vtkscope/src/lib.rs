//! vtkscope: load legacy VTK hexahedral meshes for GPU rendering.
//!
//! A legacy VTK ASCII unstructured grid is read section by section, every
//! hexahedral cell is expanded into 12 triangles, and the result is returned
//! as an immutable [`Dataset`]. The dataset can then be flattened into
//! [`MeshBuffers`] and framed with an [`OrbitCamera`].
//!
//! # Quick Start
//!
//! ```no_run
//! use vtkscope::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let dataset = load_file("mesh.vtk")?;
//!     let buffers = MeshBuffers::from_dataset(&dataset);
//!     let camera = camera_for(&dataset, 16.0 / 9.0);
//!
//!     println!("{} indices, eye at {}", buffers.index_count(), camera.position());
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every load either returns a complete dataset or a [`VtkscopeError`]; there
//! is no partial mesh.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod load;

pub use load::{load_bytes, load_bytes_with, load_file, load_file_with, load_str, load_str_with};

// Re-export core types
pub use vtkscope_core::{
    dataset::{Dataset, VectorAttribute, TRIANGLES_PER_CELL},
    error::{Result, VtkscopeError},
    options::{CellTypePolicy, LoadOptions, VTK_HEXAHEDRON},
    DVec3, Mat4, Vec3,
};

// Re-export structures
pub use vtkscope_structures::{
    triangulate_hex, HexMesh, SectionReader, UnstructuredGrid, HEX_TRIANGLE_STENCIL,
};

// Re-export render types
pub use vtkscope_render::{GpuVertex, MeshBuffers, OrbitCamera, VERTEX_STRIDE};

/// Initializes logging from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Returns a camera framing the dataset's bounding box.
///
/// An empty dataset gets the default camera.
pub fn camera_for(dataset: &Dataset, aspect_ratio: f32) -> OrbitCamera {
    match dataset.bounding_box() {
        Some((min, max)) => OrbitCamera::framing(min.as_vec3(), max.as_vec3(), aspect_ratio),
        None => OrbitCamera::new(aspect_ratio),
    }
}
