// Purpose: Provides the controller that drives a single Warshall run.
//
// The controller owns at most one stepper. Starting a run replaces it
// wholesale; every control operation is a method call on that instance.

use tracing::info;

use crate::error::{StepperError, StepperResult};
use crate::matrix::AdjacencyMatrix;
use crate::step::StepState;
use crate::stepper::Stepper;

/// How far a forward request advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSize {
    /// One cell: a single (k, i, j) triple.
    Small,
    /// The rest of the current row (same k and i).
    Medium,
    /// The rest of the current layer (same k).
    Big,
    /// Everything up to the end of the run.
    All,
}

/// Owns the active run and offers coarse-grained stepping over it.
#[derive(Debug, Default)]
pub struct StepController {
    stepper: Option<Stepper>,
    /// Set once the finish of the current run has been reported.
    finish_reported: bool,
}

impl StepController {
    /// Create a controller with no active run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run over `matrix`, discarding any previous one.
    pub fn start(&mut self, matrix: &AdjacencyMatrix) -> StepState {
        info!(size = matrix.size(), "Starting Warshall run");
        let stepper = Stepper::new(matrix);
        let step = stepper.current_step();
        self.stepper = Some(stepper);
        self.finish_reported = false;
        step
    }

    /// Whether a run is active.
    pub fn is_started(&self) -> bool {
        self.stepper.is_some()
    }

    /// Whether the active run has finished.
    pub fn is_finished(&self) -> StepperResult<bool> {
        Ok(self.stepper()?.is_finished())
    }

    /// Snapshot of the active run.
    pub fn current(&self) -> StepperResult<StepState> {
        Ok(self.stepper()?.current_step())
    }

    /// Borrow the active stepper.
    pub fn stepper(&self) -> StepperResult<&Stepper> {
        self.stepper.as_ref().ok_or(StepperError::NotStarted)
    }

    /// Advance by `size`, returning every step processed, in order.
    ///
    /// A finished run yields an empty list.
    pub fn advance(&mut self, size: StepSize) -> StepperResult<Vec<StepState>> {
        let stepper = self.stepper.as_mut().ok_or(StepperError::NotStarted)?;
        let (start_k, start_i, _) = stepper.cursor();
        let mut steps = Vec::new();

        while !stepper.is_finished() {
            steps.push(stepper.step_forward());

            let (k, i, _) = stepper.cursor();
            let boundary = match size {
                StepSize::Small => true,
                StepSize::Medium => k != start_k || i != start_i,
                StepSize::Big => k != start_k,
                StepSize::All => false,
            };
            if boundary {
                break;
            }
        }

        self.report_finish();
        Ok(steps)
    }

    /// Process one triple. Returns `None` when the run is already finished.
    pub fn step_small(&mut self) -> StepperResult<Option<StepState>> {
        Ok(self.advance(StepSize::Small)?.pop())
    }

    /// Process the rest of the current row.
    pub fn step_medium(&mut self) -> StepperResult<Vec<StepState>> {
        self.advance(StepSize::Medium)
    }

    /// Process the rest of the current layer.
    pub fn step_big(&mut self) -> StepperResult<Vec<StepState>> {
        self.advance(StepSize::Big)
    }

    /// Process everything that is left.
    pub fn run_to_end(&mut self) -> StepperResult<Vec<StepState>> {
        self.advance(StepSize::All)
    }

    /// Undo one triple.
    pub fn step_back(&mut self) -> StepperResult<StepState> {
        let stepper = self.stepper.as_mut().ok_or(StepperError::NotStarted)?;
        let step = stepper.step_back();
        if !stepper.is_finished() {
            self.finish_reported = false;
        }
        Ok(step)
    }

    /// Return the active run to its initial matrix.
    pub fn reset(&mut self) -> StepperResult<StepState> {
        let stepper = self.stepper.as_mut().ok_or(StepperError::NotStarted)?;
        stepper.reset();
        info!(size = stepper.size(), "Warshall run reset");
        self.finish_reported = false;
        Ok(stepper.current_step())
    }

    fn report_finish(&mut self) {
        let Some(stepper) = self.stepper.as_ref() else {
            return;
        };
        if stepper.is_finished() && !self.finish_reported {
            self.finish_reported = true;
            info!(
                size = stepper.size(),
                edges = stepper.matrix().edge_count(),
                "Warshall run complete"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(n: usize) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::zeros(n);
        for v in 0..n.saturating_sub(1) {
            matrix.set(v, v + 1, true);
        }
        matrix
    }

    #[test]
    fn test_operations_require_start() {
        let mut controller = StepController::new();
        assert!(!controller.is_started());
        assert!(matches!(controller.current(), Err(StepperError::NotStarted)));
        assert!(matches!(controller.step_small(), Err(StepperError::NotStarted)));
        assert!(matches!(controller.step_back(), Err(StepperError::NotStarted)));
        assert!(matches!(controller.reset(), Err(StepperError::NotStarted)));
    }

    #[test]
    fn test_medium_step_finishes_row() {
        let mut controller = StepController::new();
        controller.start(&matrix(4));
        controller.step_small().unwrap();

        let steps = controller.step_medium().unwrap();
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.k == 0 && s.i == 0));
        assert_eq!(controller.stepper().unwrap().cursor(), (0, 1, 0));
    }

    #[test]
    fn test_big_step_finishes_layer() {
        let mut controller = StepController::new();
        controller.start(&matrix(3));

        let steps = controller.step_big().unwrap();
        assert_eq!(steps.len(), 9);
        assert_eq!(controller.stepper().unwrap().cursor(), (1, 0, 0));
    }

    #[test]
    fn test_run_to_end_and_noop_after() {
        let mut controller = StepController::new();
        controller.start(&matrix(3));

        assert_eq!(controller.run_to_end().unwrap().len(), 27);
        assert!(controller.is_finished().unwrap());
        assert!(controller.step_small().unwrap().is_none());
        assert!(controller.step_big().unwrap().is_empty());
    }

    #[test]
    fn test_start_replaces_run() {
        let mut controller = StepController::new();
        controller.start(&matrix(3));
        controller.step_big().unwrap();

        let step = controller.start(&matrix(2));
        assert_eq!(step.matrix.size(), 2);
        assert_eq!(controller.stepper().unwrap().history_len(), 0);
    }

    #[test]
    fn test_back_and_reset() {
        let mut controller = StepController::new();
        let initial = controller.start(&matrix(3));
        controller.run_to_end().unwrap();

        controller.step_back().unwrap();
        assert!(!controller.is_finished().unwrap());

        let reset = controller.reset().unwrap();
        assert_eq!(reset, initial);
    }
}
