//! Loads a legacy VTK hexahedral mesh and prints a JSON summary.
//!
//! Usage: `cargo run --example load_vtk -- mesh.vtk [options.json]`
//!
//! Set `RUST_LOG=debug` to see per-section parse progress.

use vtkscope::{camera_for, init_logging, load_file_with, LoadOptions, MeshBuffers, Result};

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: load_vtk <mesh.vtk> [options.json]");
        std::process::exit(2);
    };
    let options = match args.next() {
        Some(options_path) => LoadOptions::from_json_file(options_path)?,
        None => LoadOptions::default(),
    };

    let dataset = load_file_with(&path, &options)?;
    let buffers = MeshBuffers::from_dataset(&dataset);
    let camera = camera_for(&dataset, 16.0 / 9.0);
    let bounds = dataset
        .bounding_box()
        .map(|(min, max)| [min.to_array(), max.to_array()]);

    let summary = serde_json::json!({
        "file": path,
        "points": dataset.num_points(),
        "cells": dataset.num_cells(),
        "triangles": dataset.num_triangles(),
        "vectors": dataset.vector_attribute().map(|v| v.name.as_str()),
        "bounding_box": bounds,
        "vertex_bytes": buffers.vertex_bytes().len(),
        "index_bytes": buffers.index_bytes().len(),
        "camera_position": camera.position().to_array(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
