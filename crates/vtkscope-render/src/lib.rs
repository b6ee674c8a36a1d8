//! Render-side helpers for vtkscope.
//!
//! Nothing here owns a GPU device. The crate turns a loaded
//! [`vtkscope_core::Dataset`] into upload-ready buffers and provides the
//! camera a viewer drives from mouse input.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Narrowing f64 coordinates to f32 for the GPU is intended
#![allow(clippy::cast_possible_truncation)]

pub mod buffer;
pub mod camera;

pub use buffer::{GpuVertex, MeshBuffers, VERTEX_STRIDE};
pub use camera::OrbitCamera;
