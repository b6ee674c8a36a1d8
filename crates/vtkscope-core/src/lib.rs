//! Core types for vtkscope.
//!
//! This crate provides the types shared by the parser, the render helpers and
//! the public facade:
//! - [`VtkscopeError`] and the crate-wide [`Result`]
//! - [`LoadOptions`] controlling how strictly input files are read
//! - [`Dataset`], the immutable triangulated mesh produced by a load

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod dataset;
pub mod error;
pub mod options;

pub use dataset::{Dataset, VectorAttribute, TRIANGLES_PER_CELL};
pub use error::{Result, VtkscopeError};
pub use options::{CellTypePolicy, LoadOptions, VTK_HEXAHEDRON};

// Re-export glam types for convenience
pub use glam::{DVec3, Mat4, Vec3};
