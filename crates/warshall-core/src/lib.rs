//! Warshall Step Engine
//!
//! This crate executes Warshall's transitive-closure algorithm on small
//! directed graphs one (k, i, j) micro-step at a time, with full undo
//! history and per-step highlighting information for display front-ends.
//!
//! ## Core Components
//!
//! - **Stepper**: state machine over the three nested loop indices with an undo stack
//! - **StepState**: deep-copied snapshot returned by every control call
//! - **StepController**: owns one run and adds row, layer and run-to-end stepping
//! - **AdjacencyMatrix**: square 0/1 matrix with a plain text format
//! - **random_adjacency_matrix**: seeded loop-free graph generation
//!
//! ## Getting Started
//!
//! ```rust
//! use warshall_core::{AdjacencyMatrix, Stepper};
//!
//! let matrix: AdjacencyMatrix = "0 1 0\n0 0 1\n0 0 0".parse().unwrap();
//! let mut stepper = Stepper::new(&matrix);
//! while !stepper.is_finished() {
//!     stepper.step_forward();
//! }
//! assert!(stepper.matrix().get(0, 2));
//! ```

pub mod closure;
pub mod config;
pub mod controller;
pub mod error;
pub mod matrix;
pub mod random;
pub mod step;
pub mod stepper;

pub use closure::transitive_closure;
pub use config::VisualizerConfig;
pub use controller::{StepController, StepSize};
pub use error::{StepperError, StepperResult};
pub use matrix::AdjacencyMatrix;
pub use random::{max_edges, random_adjacency_matrix, SeededRng};
pub use step::{CellRole, InvolvedCell, StepState};
pub use stepper::{Stepper, StepperStatus, FINISHED_MESSAGE, INITIAL_MESSAGE};
