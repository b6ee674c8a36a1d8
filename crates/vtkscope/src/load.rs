//! Entry points for loading a dataset from text, bytes or a file.

use std::path::Path;

use vtkscope_core::{Dataset, LoadOptions, Result, VtkscopeError};

/// Loads a dataset from VTK text with default options.
pub fn load_str(text: &str) -> Result<Dataset> {
    load_str_with(text, &LoadOptions::default())
}

/// Loads a dataset from VTK text.
pub fn load_str_with(text: &str, options: &LoadOptions) -> Result<Dataset> {
    let dataset = vtkscope_structures::parse_dataset(text, options)?;
    log::info!(
        "loaded {} points, {} cells, {} triangles{}",
        dataset.num_points(),
        dataset.num_cells(),
        dataset.num_triangles(),
        dataset
            .vector_attribute()
            .map(|v| format!(", vectors '{}'", v.name))
            .unwrap_or_default()
    );
    Ok(dataset)
}

/// Loads a dataset from raw bytes with default options.
pub fn load_bytes(bytes: &[u8]) -> Result<Dataset> {
    load_bytes_with(bytes, &LoadOptions::default())
}

/// Loads a dataset from raw bytes, which must be UTF-8 text.
pub fn load_bytes_with(bytes: &[u8], options: &LoadOptions) -> Result<Dataset> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        VtkscopeError::malformed(format!(
            "input is not UTF-8 text (invalid byte at offset {})",
            e.valid_up_to()
        ))
    })?;
    load_str_with(text, options)
}

/// Loads a dataset from a file with default options.
pub fn load_file(path: impl AsRef<Path>) -> Result<Dataset> {
    load_file_with(path, &LoadOptions::default())
}

/// Loads a dataset from a file.
pub fn load_file_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Dataset> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let bytes = std::fs::read(path)?;
    load_bytes_with(&bytes, options)
}
