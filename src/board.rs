use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::error::SolverError;

/// Square grid of lowercase letters, row-major. The solver only ever reads
/// it; validation happens once at construction so the search never has to
/// deal with empty or out-of-alphabet cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Array2<char>,
}

impl Board {
    /// Builds a board from its rows. Rejects an empty grid, a non-square
    /// grid, and any cell outside `a..=z`.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, SolverError> {
        let side = rows.len();
        if side == 0 {
            return Err(SolverError::InvalidInput("board has no rows".into()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != side {
                return Err(SolverError::InvalidInput(format!(
                    "row {i} has {} cells, expected {side}",
                    row.len()
                )));
            }
            for &c in row {
                if !c.is_ascii_lowercase() {
                    return Err(SolverError::InvalidInput(format!(
                        "cell {c:?} in row {i} is not a lowercase letter"
                    )));
                }
            }
        }

        let flat: Vec<char> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((side, side), flat)
            .expect("row lengths were checked against the side length");
        Ok(Self { cells })
    }

    /// Loads a board from a JSON array of arrays of single-letter strings,
    /// e.g. `[["c","a"],["t","s"]]`. Letters are lowercased on the way in.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let data = fs::read_to_string(path.as_ref()).map_err(|source| SolverError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        let raw: Vec<Vec<String>> = serde_json::from_str(&data)?;

        let mut rows = Vec::with_capacity(raw.len());
        for raw_row in &raw {
            let mut row = Vec::with_capacity(raw_row.len());
            for cell in raw_row {
                let mut chars = cell.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => row.push(c.to_ascii_lowercase()),
                    _ => {
                        return Err(SolverError::InvalidInput(format!(
                            "cell {cell:?} must be a single letter"
                        )))
                    }
                }
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Side length of the square grid.
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }
}

impl std::ops::Index<(usize, usize)> for Board {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index]
    }
}
