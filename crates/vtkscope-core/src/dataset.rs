//! The immutable mesh handed to the renderer.
//!
//! A [`Dataset`] is built once from a parsed file and never mutated. It owns
//! the point coordinates, an optional per-point vector field, and the
//! triangle list produced from the volume cells. The constructor checks the
//! invariants a renderer relies on, so any `Dataset` value can be uploaded
//! without further validation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VtkscopeError};

/// Number of render triangles emitted for one hexahedral cell.
pub const TRIANGLES_PER_CELL: usize = 12;

/// A named 3-component vector field with one value per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorAttribute {
    /// Attribute name as written in the file.
    pub name: String,
    /// One vector per point, index-aligned with the points.
    pub values: Vec<[f64; 3]>,
}

/// A triangulated volume mesh ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetRepr")]
pub struct Dataset {
    points: Vec<[f64; 3]>,
    point_vectors: Option<VectorAttribute>,
    triangle_indices: Vec<[u32; 3]>,
    num_cells: usize,
}

impl Dataset {
    /// Creates a dataset, checking that the parts agree with each other.
    ///
    /// # Errors
    ///
    /// - [`VtkscopeError::MalformedInput`] if the vector attribute length
    ///   differs from the point count, or the triangle count is not
    ///   `12 * num_cells`.
    /// - [`VtkscopeError::OutOfRangeIndex`] if any triangle index is not a
    ///   valid point index.
    pub fn new(
        points: Vec<[f64; 3]>,
        point_vectors: Option<VectorAttribute>,
        triangle_indices: Vec<[u32; 3]>,
        num_cells: usize,
    ) -> Result<Self> {
        if let Some(vectors) = &point_vectors {
            if vectors.values.len() != points.len() {
                return Err(VtkscopeError::malformed(format!(
                    "vector attribute '{}' has {} values for {} points",
                    vectors.name,
                    vectors.values.len(),
                    points.len()
                )));
            }
        }

        let expected_triangles = num_cells.checked_mul(TRIANGLES_PER_CELL).ok_or_else(|| {
            VtkscopeError::malformed(format!("cell count {num_cells} is too large"))
        })?;
        if triangle_indices.len() != expected_triangles {
            return Err(VtkscopeError::malformed(format!(
                "{} triangles for {num_cells} cells, expected {expected_triangles}",
                triangle_indices.len()
            )));
        }

        let num_points = points.len();
        if let Some(&index) = triangle_indices
            .iter()
            .flatten()
            .find(|&&i| i as usize >= num_points)
        {
            return Err(VtkscopeError::OutOfRangeIndex { index, num_points });
        }

        Ok(Self {
            points,
            point_vectors,
            triangle_indices,
            num_cells,
        })
    }

    /// Returns the point coordinates.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Returns the per-point vectors, if the file carried them.
    pub fn point_vectors(&self) -> Option<&[[f64; 3]]> {
        self.point_vectors.as_ref().map(|v| v.values.as_slice())
    }

    /// Returns the full vector attribute including its name.
    pub fn vector_attribute(&self) -> Option<&VectorAttribute> {
        self.point_vectors.as_ref()
    }

    /// Returns the triangle list.
    pub fn triangle_indices(&self) -> &[[u32; 3]] {
        &self.triangle_indices
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of source cells the triangles came from.
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangle_indices.len()
    }

    /// Computes the axis-aligned bounding box of the points.
    ///
    /// Returns `None` for a dataset with no points.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut iter = self.points.iter().map(|&p| DVec3::from_array(p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

#[derive(Deserialize)]
struct DatasetRepr {
    points: Vec<[f64; 3]>,
    point_vectors: Option<VectorAttribute>,
    triangle_indices: Vec<[u32; 3]>,
    num_cells: usize,
}

impl TryFrom<DatasetRepr> for Dataset {
    type Error = VtkscopeError;

    fn try_from(repr: DatasetRepr) -> Result<Self> {
        Self::new(
            repr.points,
            repr.point_vectors,
            repr.triangle_indices,
            repr.num_cells,
        )
    }
}
