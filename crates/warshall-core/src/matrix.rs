//! Adjacency matrix model
//!
//! A square grid of boolean entries describing a directed graph. The type can
//! only be built square and 0/1-valued, so callers never hand the stepper a
//! malformed matrix.
//!
//! The textual form is one row per line with cells separated by whitespace:
//!
//! ```text
//! 0 1 0
//! 0 0 1
//! 0 0 0
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StepperError, StepperResult};

/// Square boolean adjacency matrix of a directed graph.
///
/// Serialized as nested arrays of 0/1 integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct AdjacencyMatrix {
    cells: Vec<Vec<bool>>,
}

impl AdjacencyMatrix {
    /// Create an n x n matrix with no edges.
    pub fn zeros(size: usize) -> Self {
        Self {
            cells: vec![vec![false; size]; size],
        }
    }

    /// Build a matrix from 0/1 rows, checking that it is square.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> StepperResult<Self> {
        let expected = rows.len();
        let mut cells = Vec::with_capacity(expected);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(StepperError::NotSquare {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            let mut line = Vec::with_capacity(expected);
            for (col, value) in values.into_iter().enumerate() {
                match value {
                    0 => line.push(false),
                    1 => line.push(true),
                    value => return Err(StepperError::InvalidCell { row, col, value }),
                }
            }
            cells.push(line);
        }

        Ok(Self { cells })
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Whether the matrix has no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Entry at (row, col). Out-of-range positions read as no edge.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Set the entry at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.cells[row][col] = value;
    }

    /// Number of edges (set entries), self-loops included.
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|line| line.iter().filter(|&&cell| cell).count())
            .sum()
    }

    /// Rows as 0/1 integers.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|line| line.iter().map(|&cell| u8::from(cell)).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for AdjacencyMatrix {
    type Error = StepperError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<u8>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.rows()
    }
}

impl FromStr for AdjacencyMatrix {
    type Err = StepperError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<u8>().map_err(|_| StepperError::Parse {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<StepperResult<Vec<u8>>>()?;
            rows.push(row);
        }

        Self::from_rows(rows)
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let text: Vec<&str> = line
                .iter()
                .map(|&cell| if cell { "1" } else { "0" })
                .collect();
            write!(f, "{}", text.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_has_no_edges() {
        let matrix = AdjacencyMatrix::zeros(4);
        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.edge_count(), 0);
        assert!(!matrix.get(3, 3));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![0]]).unwrap_err();
        assert!(matches!(
            err,
            StepperError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_from_rows_rejects_non_binary_values() {
        let err = AdjacencyMatrix::from_rows(vec![vec![0, 2], vec![0, 0]]).unwrap_err();
        assert!(matches!(
            err,
            StepperError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            }
        ));
    }

    #[test]
    fn test_parse_and_display() {
        let text = "0 1 0\n0 0 1\n\n0 0 0\n";
        let matrix: AdjacencyMatrix = text.parse().unwrap();
        assert_eq!(matrix.size(), 3);
        assert!(matrix.get(0, 1));
        assert!(matrix.get(1, 2));
        assert_eq!(matrix.edge_count(), 2);
        assert_eq!(matrix.to_string(), "0 1 0\n0 0 1\n0 0 0");
    }

    #[test]
    fn test_parse_reports_bad_token() {
        let err = "0 1\nx 0".parse::<AdjacencyMatrix>().unwrap_err();
        match err {
            StepperError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_text_is_empty_matrix() {
        let matrix: AdjacencyMatrix = "".parse().unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.to_string(), "");
    }

    #[test]
    fn test_serde_uses_integer_rows() {
        let matrix = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[0,1],[1,0]]");

        let back: AdjacencyMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);

        assert!(serde_json::from_str::<AdjacencyMatrix>("[[0,1]]").is_err());
    }
}
