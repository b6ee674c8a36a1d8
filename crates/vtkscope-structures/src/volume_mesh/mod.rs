//! Hexahedral volume mesh and its conversion into a render [`Dataset`].
//!
//! # Overview
//!
//! `HexMesh` holds the raw arrays read from a file: point coordinates,
//! 8-index hexahedral cells and an optional per-point vector field. Every
//! face of every cell is emitted, two triangles per quad, using the fixed
//! table in [`HEX_TRIANGLE_STENCIL`]. Interior faces shared between cells are
//! not removed.
//!
//! # Example
//!
//! ```rust
//! use vtkscope_structures::HexMesh;
//!
//! let points = vec![
//!     [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0],
//! ];
//! let mesh = HexMesh::new(points, vec![[0, 1, 2, 3, 4, 5, 6, 7]]);
//! let dataset = mesh.into_dataset().unwrap();
//! assert_eq!(dataset.num_triangles(), 12);
//! ```

mod triangulate;

pub use triangulate::{triangulate_cells, triangulate_hex, HEX_TRIANGLE_STENCIL};

use vtkscope_core::{Dataset, Result, VectorAttribute};

use crate::vtk::reader::{UnstructuredGrid, HEX_POINT_COUNT};

/// A hexahedral volume mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct HexMesh {
    points: Vec<[f64; 3]>,
    cells: Vec<[u32; HEX_POINT_COUNT]>,
    point_vectors: Option<VectorAttribute>,
}

impl HexMesh {
    /// Creates a mesh from points and hexahedral cells.
    pub fn new(points: Vec<[f64; 3]>, cells: Vec<[u32; HEX_POINT_COUNT]>) -> Self {
        Self {
            points,
            cells,
            point_vectors: None,
        }
    }

    /// Attaches a named per-point vector field.
    #[must_use]
    pub fn with_point_vectors(mut self, name: impl Into<String>, values: Vec<[f64; 3]>) -> Self {
        self.point_vectors = Some(VectorAttribute {
            name: name.into(),
            values,
        });
        self
    }

    /// Returns the number of points.
    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of cells.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns the points.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Returns the cells.
    pub fn cells(&self) -> &[[u32; HEX_POINT_COUNT]] {
        &self.cells
    }

    /// Returns the vector field, if any.
    pub fn point_vectors(&self) -> Option<&VectorAttribute> {
        self.point_vectors.as_ref()
    }

    /// Generates the triangle list for all cells, in cell order.
    pub fn render_triangles(&self) -> Vec<[u32; 3]> {
        triangulate_cells(&self.cells)
    }

    /// Triangulates the mesh and assembles the immutable [`Dataset`].
    ///
    /// # Errors
    ///
    /// Fails with [`vtkscope_core::VtkscopeError::OutOfRangeIndex`] if a cell
    /// references a point that does not exist, or
    /// [`vtkscope_core::VtkscopeError::MalformedInput`] if the vector field
    /// does not have one value per point.
    pub fn into_dataset(self) -> Result<Dataset> {
        let triangles = self.render_triangles();
        let num_cells = self.cells.len();
        let dataset = Dataset::new(self.points, self.point_vectors, triangles, num_cells)?;
        log::debug!(
            "assembled {} triangles from {num_cells} cells",
            dataset.num_triangles()
        );
        Ok(dataset)
    }
}

impl From<UnstructuredGrid> for HexMesh {
    fn from(grid: UnstructuredGrid) -> Self {
        Self {
            points: grid.points,
            cells: grid.cells,
            point_vectors: grid.point_vectors,
        }
    }
}
