//! Legacy VTK ASCII unstructured grid input.

pub mod reader;
pub mod tokenizer;

pub use reader::{Section, SectionReader, UnstructuredGrid, HEX_POINT_COUNT};
pub use tokenizer::{Token, TokenStream};

use vtkscope_core::{Dataset, LoadOptions, Result};

use crate::HexMesh;

/// Reads the raw arrays of an unstructured grid file.
pub fn read_unstructured_grid(text: &str, options: &LoadOptions) -> Result<UnstructuredGrid> {
    SectionReader::new(text, options)?.read()
}

/// Parses an unstructured grid file and triangulates it into a [`Dataset`].
pub fn parse_dataset(text: &str, options: &LoadOptions) -> Result<Dataset> {
    let grid = read_unstructured_grid(text, options)?;
    HexMesh::from(grid).into_dataset()
}
