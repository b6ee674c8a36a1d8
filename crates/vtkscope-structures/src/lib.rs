//! Structure implementations for vtkscope.
//!
//! - [`vtk`] tokenizes and reads legacy VTK ASCII unstructured grid files.
//! - [`volume_mesh`] holds the hexahedral mesh and triangulates it into a
//!   [`vtkscope_core::Dataset`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod volume_mesh;
pub mod vtk;

pub use volume_mesh::{triangulate_hex, HexMesh, HEX_TRIANGLE_STENCIL};
pub use vtk::{parse_dataset, read_unstructured_grid, SectionReader, UnstructuredGrid};
