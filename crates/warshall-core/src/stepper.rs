//! Stepwise Warshall execution with undo
//!
//! The [`Stepper`] walks the three nested loops of Warshall's algorithm one
//! (k, i, j) triple at a time. Every forward step first pushes a snapshot of
//! the pre-step state, so stepping back restores the exact prior state.
//!
//! Loop order is k outermost, i middle, j innermost. For an n x n matrix a
//! full run takes n^3 forward steps; matrices with fewer than two vertices
//! are finished from the start.

use tracing::{debug, trace};

use crate::matrix::AdjacencyMatrix;
use crate::step::{CellRole, InvolvedCell, StepState};

/// Message of a freshly constructed or reset stepper.
pub const INITIAL_MESSAGE: &str = "initial state";

/// Message once every (k, i, j) triple has been processed.
pub const FINISHED_MESSAGE: &str = "algorithm finished";

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperStatus {
    Running,
    Finished,
}

/// Executes Warshall's algorithm one micro-step at a time.
#[derive(Debug, Clone)]
pub struct Stepper {
    /// Matrix supplied at construction, kept for reset.
    initial: AdjacencyMatrix,
    /// Working copy mutated by forward steps.
    matrix: AdjacencyMatrix,
    k: usize,
    i: usize,
    j: usize,
    finished: bool,
    message: String,
    /// Pre-step snapshots, most recent last.
    history: Vec<StepState>,
}

impl Stepper {
    /// Create a stepper over a copy of `initial`.
    pub fn new(initial: &AdjacencyMatrix) -> Self {
        let n = initial.size();
        debug!(size = n, edges = initial.edge_count(), "Creating Warshall stepper");

        Self {
            initial: initial.clone(),
            matrix: initial.clone(),
            k: 0,
            i: 0,
            j: 0,
            finished: n <= 1,
            message: INITIAL_MESSAGE.to_string(),
            history: Vec::new(),
        }
    }

    /// Snapshot of the present state. Never mutates anything.
    ///
    /// While running, the involved cells describe the triple the next
    /// forward step will process. Once finished there is nothing left to
    /// highlight.
    pub fn current_step(&self) -> StepState {
        let involved = if self.finished {
            Vec::new()
        } else {
            self.cursor_cells()
        };
        self.snapshot(self.k, self.i, self.j, involved)
    }

    /// Process one (k, i, j) triple and return what happened there.
    ///
    /// The returned snapshot carries the matrix after the update and the
    /// indices of the processed triple, not the position the cursor moves to.
    /// Calling this after the run has finished is a no-op.
    pub fn step_forward(&mut self) -> StepState {
        if self.finished {
            self.message = FINISHED_MESSAGE.to_string();
            return self.current_step();
        }

        self.history.push(self.current_step());

        let (k, i, j) = (self.k, self.i, self.j);
        let mut involved = self.cursor_cells();

        let add = self.matrix.get(i, k) && self.matrix.get(k, j) && !self.matrix.get(i, j);
        if add {
            self.matrix.set(i, j, true);
            involved.push(InvolvedCell::new(i, j, CellRole::Added));
            self.message = format!("added reachability {} -> {} via {}", i + 1, j + 1, k + 1);
        } else {
            self.message = format!("no change for {} -> {} via {}", i + 1, j + 1, k + 1);
        }
        trace!(k, i, j, added = add, "Processed Warshall step");

        let step = self.snapshot(k, i, j, involved);
        self.advance();
        step
    }

    /// Undo the most recent forward step.
    ///
    /// Returns the restored snapshot, or the unchanged current state when
    /// there is nothing to undo.
    pub fn step_back(&mut self) -> StepState {
        let Some(previous) = self.history.pop() else {
            return self.current_step();
        };

        self.matrix = previous.matrix.clone();
        self.k = previous.k;
        self.i = previous.i;
        self.j = previous.j;
        self.message = previous.message.clone();
        self.finished = false;
        trace!(k = self.k, i = self.i, j = self.j, "Stepped back");

        previous
    }

    /// Return to the initial matrix and drop all history.
    pub fn reset(&mut self) {
        self.k = 0;
        self.i = 0;
        self.j = 0;
        self.finished = self.initial.size() <= 1;
        self.matrix = self.initial.clone();
        self.message = INITIAL_MESSAGE.to_string();
        self.history.clear();
        debug!(size = self.initial.size(), "Stepper reset to initial state");
    }

    /// Whether every triple has been processed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn status(&self) -> StepperStatus {
        if self.finished {
            StepperStatus::Finished
        } else {
            StepperStatus::Running
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.initial.size()
    }

    /// Next triple to be processed as (k, i, j).
    pub fn cursor(&self) -> (usize, usize, usize) {
        (self.k, self.i, self.j)
    }

    /// Number of steps that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Working matrix in its current state.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Matrix supplied at construction.
    pub fn initial_matrix(&self) -> &AdjacencyMatrix {
        &self.initial
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Candidate and target cells for the cursor triple, when in bounds.
    fn cursor_cells(&self) -> Vec<InvolvedCell> {
        let n = self.size();
        let (k, i, j) = (self.k, self.i, self.j);
        let mut cells = Vec::with_capacity(4);

        if i < n && k < n {
            cells.push(InvolvedCell::new(i, k, CellRole::Candidate));
        }
        if k < n && j < n {
            cells.push(InvolvedCell::new(k, j, CellRole::Candidate));
        }
        if i < n && j < n {
            cells.push(InvolvedCell::new(i, j, CellRole::Target));
        }
        cells
    }

    /// The only place snapshots are built; the matrix is always copied.
    fn snapshot(&self, k: usize, i: usize, j: usize, involved: Vec<InvolvedCell>) -> StepState {
        StepState {
            matrix: self.matrix.clone(),
            k,
            i,
            j,
            message: self.message.clone(),
            involved,
        }
    }

    /// Move the cursor: j first, carrying into i, then k.
    fn advance(&mut self) {
        let n = self.size();

        self.j += 1;
        if self.j >= n {
            self.j = 0;
            self.i += 1;
        }
        if self.i >= n {
            self.i = 0;
            self.k += 1;
        }
        if self.k >= n {
            self.finished = true;
            self.message = FINISHED_MESSAGE.to_string();
            debug!(size = n, "Warshall run finished");
        }
    }
}
