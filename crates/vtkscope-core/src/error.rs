//! Error types for vtkscope.

use thiserror::Error;

/// The main error type for vtkscope operations.
///
/// Every variant is fatal to a load: no partially built dataset is ever
/// returned alongside one of these.
#[derive(Error, Debug)]
pub enum VtkscopeError {
    /// The input does not follow the legacy VTK unstructured grid layout.
    ///
    /// Covers early end of input, declared-vs-actual count mismatches,
    /// unparsable numbers and unexpected section keywords.
    #[error("malformed input{}: {message}", line_suffix(.line))]
    MalformedInput {
        line: Option<usize>,
        message: String,
    },

    /// A cell declared a point count other than 8.
    #[error("unsupported cell layout: cell {cell} has {count} points, only 8-point hexahedra are supported")]
    UnsupportedCellLayout { cell: usize, count: usize },

    /// A cell type code other than the hexahedron code.
    #[error("unsupported cell type: cell {cell} has VTK type code {code}, only hexahedra (12) are supported")]
    UnsupportedCellType { cell: usize, code: u32 },

    /// A triangle references a point that does not exist.
    #[error("index {index} out of range for {num_points} points")]
    OutOfRangeIndex { index: u32, num_points: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VtkscopeError {
    /// Builds a [`VtkscopeError::MalformedInput`] pinned to a source line.
    pub fn malformed_at(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Builds a [`VtkscopeError::MalformedInput`] with no line information.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line: None,
            message: message.into(),
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// A specialized Result type for vtkscope operations.
pub type Result<T> = std::result::Result<T, VtkscopeError>;
