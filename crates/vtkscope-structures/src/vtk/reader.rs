//! Section reader for legacy VTK unstructured grids.
//!
//! The body of the file is read as a fixed sequence of sections:
//!
//! ```text
//! DATASET UNSTRUCTURED_GRID
//! POINTS <N> <type>          N coordinate triples
//! CELLS <C> <T>              C blocks of `<K> <K indices>`
//! CELL_TYPES <C>             C type codes
//! POINT_DATA <N>             optional
//! VECTORS <name> <type>      N vector triples
//! ```
//!
//! Each call to [`SectionReader::step`] consumes one section and moves to the
//! next. There is no backtracking; any error aborts the read.

use vtkscope_core::{CellTypePolicy, LoadOptions, Result, VectorAttribute, VtkscopeError, VTK_HEXAHEDRON};

use super::tokenizer::TokenStream;

/// Number of points in a hexahedral cell.
pub const HEX_POINT_COUNT: usize = 8;

/// The section the reader will consume next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    DatasetHeader,
    Points,
    Cells,
    CellTypes,
    PointData,
    Done,
}

impl Section {
    /// The section that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Section::DatasetHeader => Section::Points,
            Section::Points => Section::Cells,
            Section::Cells => Section::CellTypes,
            Section::CellTypes => Section::PointData,
            Section::PointData | Section::Done => Section::Done,
        }
    }
}

/// Raw arrays read from an unstructured grid file, before triangulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnstructuredGrid {
    pub points: Vec<[f64; 3]>,
    pub cells: Vec<[u32; HEX_POINT_COUNT]>,
    pub point_vectors: Option<VectorAttribute>,
}

/// Reads the sections of a VTK file body in order.
pub struct SectionReader<'a> {
    tokens: TokenStream<'a>,
    options: LoadOptions,
    section: Section,
    grid: UnstructuredGrid,
}

impl<'a> SectionReader<'a> {
    /// Tokenizes `text` and positions the reader at the dataset header.
    pub fn new(text: &'a str, options: &LoadOptions) -> Result<Self> {
        Ok(Self {
            tokens: TokenStream::new(text, options.strict_keywords)?,
            options: options.clone(),
            section: Section::DatasetHeader,
            grid: UnstructuredGrid::default(),
        })
    }

    /// The section the next [`step`](Self::step) will read.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Reads the current section and advances to the next one.
    ///
    /// Returns the section that is now current.
    pub fn step(&mut self) -> Result<Section> {
        match self.section {
            Section::DatasetHeader => self.read_dataset_header()?,
            Section::Points => self.read_points()?,
            Section::Cells => self.read_cells()?,
            Section::CellTypes => self.read_cell_types()?,
            Section::PointData => self.read_point_data()?,
            Section::Done => return Ok(Section::Done),
        }
        self.section = self.section.next();
        Ok(self.section)
    }

    /// Reads every remaining section and returns the collected arrays.
    pub fn read(mut self) -> Result<UnstructuredGrid> {
        while self.section != Section::Done {
            self.step()?;
        }

        if !self.tokens.is_exhausted() {
            log::warn!(
                "ignoring {} trailing tokens after line {}",
                self.tokens.remaining(),
                self.tokens.current_line()
            );
        }

        Ok(self.grid)
    }

    fn strict(&self) -> bool {
        self.options.strict_keywords
    }

    fn read_dataset_header(&mut self) -> Result<()> {
        let strict = self.strict();
        self.tokens.keyword("DATASET", strict)?;
        self.tokens.keyword("UNSTRUCTURED_GRID", strict)?;
        Ok(())
    }

    fn read_points(&mut self) -> Result<()> {
        let strict = self.strict();
        self.tokens.keyword("POINTS", strict)?;
        let count: usize = self.tokens.parse("point count")?;
        self.tokens.next_token("point data type")?;

        self.grid.points = self.tokens.triples(count, "point coordinate")?;
        log::debug!("read {count} points");
        Ok(())
    }

    fn read_cells(&mut self) -> Result<()> {
        let strict = self.strict();
        let keyword = self.tokens.keyword("CELLS", strict)?;
        let count: usize = self.tokens.parse("cell count")?;
        let declared_total: usize = self.tokens.parse("cell list size")?;

        let mut cells = Vec::with_capacity(count.min(self.tokens.remaining()));
        let mut total = 0usize;
        for cell in 0..count {
            let point_count: usize = self.tokens.parse("cell point count")?;
            if point_count != HEX_POINT_COUNT {
                return Err(VtkscopeError::UnsupportedCellLayout {
                    cell,
                    count: point_count,
                });
            }

            let mut indices = [0u32; HEX_POINT_COUNT];
            for index in &mut indices {
                *index = self.tokens.parse("cell point index")?;
            }
            cells.push(indices);
            total += 1 + point_count;
        }

        if total != declared_total {
            return Err(VtkscopeError::malformed_at(
                keyword.line,
                format!("CELLS declares {declared_total} values but the cell list holds {total}"),
            ));
        }

        log::debug!("read {count} cells");
        self.grid.cells = cells;
        Ok(())
    }

    fn read_cell_types(&mut self) -> Result<()> {
        let strict = self.strict();
        let keyword = self.tokens.keyword("CELL_TYPES", strict)?;
        let count: usize = self.tokens.parse("cell type count")?;
        let num_cells = self.grid.cells.len();
        if count != num_cells {
            return Err(VtkscopeError::malformed_at(
                keyword.line,
                format!("CELL_TYPES declares {count} entries for {num_cells} cells"),
            ));
        }

        match self.options.cell_type_policy {
            CellTypePolicy::RequireHexahedron => {
                for cell in 0..count {
                    let code: u32 = self.tokens.parse("cell type")?;
                    if code != VTK_HEXAHEDRON {
                        return Err(VtkscopeError::UnsupportedCellType { cell, code });
                    }
                }
            }
            CellTypePolicy::Ignore => {
                self.tokens.require(count, "CELL_TYPES")?;
                let mut foreign = 0usize;
                for _ in 0..count {
                    let token = self.tokens.next_token("cell type")?;
                    if token.text.parse::<u32>().ok() != Some(VTK_HEXAHEDRON) {
                        foreign += 1;
                    }
                }
                if foreign > 0 {
                    log::warn!("{foreign} cells are not hexahedra but will be triangulated as such");
                }
            }
        }

        log::debug!("read {count} cell types");
        Ok(())
    }

    fn read_point_data(&mut self) -> Result<()> {
        if self.tokens.is_exhausted() {
            log::debug!("no POINT_DATA section");
            return Ok(());
        }

        let strict = self.strict();
        let keyword = self.tokens.keyword("POINT_DATA", strict)?;
        let count: usize = self.tokens.parse("point data count")?;
        let num_points = self.grid.points.len();
        if count != num_points {
            return Err(VtkscopeError::malformed_at(
                keyword.line,
                format!("POINT_DATA declares {count} values for {num_points} points"),
            ));
        }

        let kind = self.tokens.next_token("attribute kind")?;
        if !kind.text.eq_ignore_ascii_case("VECTORS") {
            return Err(VtkscopeError::malformed_at(
                kind.line,
                format!("unsupported point data attribute '{}', expected VECTORS", kind.text),
            ));
        }
        let name = self.tokens.next_token("attribute name")?.text.to_owned();
        self.tokens.next_token("attribute data type")?;

        let values = self.tokens.triples(count, "vector component")?;
        log::debug!("read vector attribute '{name}' with {count} values");
        self.grid.point_vectors = Some(VectorAttribute { name, values });
        Ok(())
    }
}
