//! Step snapshots
//!
//! A [`StepState`] is both the value handed to display collaborators after
//! every control call and the unit stored in the undo history. Each snapshot
//! owns its own copy of the matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matrix::AdjacencyMatrix;

/// Why a cell is highlighted in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRole {
    /// Cell read by the update rule: (i, k) or (k, j).
    Candidate,
    /// Cell written by the update rule: (i, j).
    Target,
    /// Target cell that flipped from 0 to 1 in this step.
    Added,
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRole::Candidate => write!(f, "candidate"),
            CellRole::Target => write!(f, "target"),
            CellRole::Added => write!(f, "added"),
        }
    }
}

/// A matrix cell flagged as relevant to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvolvedCell {
    pub row: usize,
    pub col: usize,
    pub role: CellRole,
}

impl InvolvedCell {
    pub fn new(row: usize, col: usize, role: CellRole) -> Self {
        Self { row, col, role }
    }
}

/// Snapshot of the algorithm at one (k, i, j) position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepState {
    /// Matrix after the step was applied.
    pub matrix: AdjacencyMatrix,
    /// Intermediate vertex (outer loop).
    pub k: usize,
    /// Source vertex (middle loop).
    pub i: usize,
    /// Destination vertex (inner loop).
    pub j: usize,
    /// Human readable description of what happened.
    pub message: String,
    /// Highlighted cells, candidates first, then target, then added.
    pub involved: Vec<InvolvedCell>,
}

impl StepState {
    /// Whether this step set a new entry in the matrix.
    pub fn added_edge(&self) -> bool {
        self.involved.iter().any(|cell| cell.role == CellRole::Added)
    }

    /// Loop indices as a (k, i, j) triple.
    pub fn indices(&self) -> (usize, usize, usize) {
        (self.k, self.i, self.j)
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k={} i={} j={}: {}", self.k + 1, self.i + 1, self.j + 1, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_edge_detection() {
        let mut step = StepState {
            matrix: AdjacencyMatrix::zeros(2),
            k: 0,
            i: 1,
            j: 0,
            message: String::new(),
            involved: vec![
                InvolvedCell::new(1, 0, CellRole::Candidate),
                InvolvedCell::new(0, 0, CellRole::Candidate),
                InvolvedCell::new(1, 0, CellRole::Target),
            ],
        };
        assert!(!step.added_edge());

        step.involved.push(InvolvedCell::new(1, 0, CellRole::Added));
        assert!(step.added_edge());
        assert_eq!(step.indices(), (0, 1, 0));
    }

    #[test]
    fn test_role_serializes_in_snake_case() {
        let cell = InvolvedCell::new(2, 1, CellRole::Candidate);
        let json = serde_json::to_value(cell).unwrap();
        assert_eq!(json["role"], "candidate");
        assert_eq!(CellRole::Added.to_string(), "added");
    }
}
