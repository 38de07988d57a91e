//! Direct transitive closure
//!
//! Plain triple-loop Warshall over a copy of the input. Used to check the
//! stepper and to answer closure-only requests without keeping history.

use crate::matrix::AdjacencyMatrix;

/// Transitive closure of `matrix`. The input is left untouched.
pub fn transitive_closure(matrix: &AdjacencyMatrix) -> AdjacencyMatrix {
    let n = matrix.size();
    let mut closure = matrix.clone();

    for k in 0..n {
        for i in 0..n {
            if !closure.get(i, k) {
                continue;
            }
            for j in 0..n {
                if closure.get(k, j) {
                    closure.set(i, j, true);
                }
            }
        }
    }

    closure
}
