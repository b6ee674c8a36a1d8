//! Triangulation of hexahedral cells into render triangles.

use vtkscope_core::TRIANGLES_PER_CELL;

use crate::vtk::reader::HEX_POINT_COUNT;

/// Local vertex triples for the 12 triangles covering a hexahedron.
///
/// Vertices 0-3 are the bottom quad and 4-7 the top quad in the same
/// rotational order, with vertical edges 0-4, 1-5, 2-6 and 3-7. Order and
/// winding are fixed so back-face culling treats every cell alike.
#[rustfmt::skip]
pub const HEX_TRIANGLE_STENCIL: [[usize; 3]; TRIANGLES_PER_CELL] = [
    [0, 1, 2], [0, 2, 3], // Bottom
    [4, 6, 5], [4, 7, 6], // Top
    [0, 7, 4], [0, 3, 7], // Side A
    [1, 5, 6], [1, 6, 2], // Side B
    [0, 4, 5], [0, 5, 1], // Side C
    [3, 2, 6], [3, 6, 7], // Side D
];

/// Expands one hexahedral cell into its 12 triangles.
pub fn triangulate_hex(cell: &[u32; HEX_POINT_COUNT]) -> [[u32; 3]; TRIANGLES_PER_CELL] {
    HEX_TRIANGLE_STENCIL.map(|[a, b, c]| [cell[a], cell[b], cell[c]])
}

/// Triangulates every cell in order and concatenates the results.
pub fn triangulate_cells(cells: &[[u32; HEX_POINT_COUNT]]) -> Vec<[u32; 3]> {
    let mut triangles = Vec::with_capacity(cells.len() * TRIANGLES_PER_CELL);
    for cell in cells {
        triangles.extend_from_slice(&triangulate_hex(cell));
    }
    triangles
}
