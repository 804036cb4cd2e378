//! Gauss-Jordan elimination with full pivoting
//!
//! Reduces a dense system to unit-diagonal form by scanning the remaining
//! sub-matrix for the entry of maximal magnitude at every step. Column
//! exchanges permute the unknowns, so the system carries a variable-order
//! sequence that is swapped in lockstep and used to key the final solution.

use ndarray::{Array1, Array2};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during elimination
#[derive(Error, Debug)]
pub enum EliminationError {
    /// The maximal pivot candidate was exactly zero: no unique solution.
    #[error("matrix is singular: zero pivot at elimination step {step}")]
    SingularMatrix {
        /// Elimination step at which the zero pivot was found
        step: usize,
    },
    /// Inputs do not describe a square n-by-n system.
    #[error("dimension mismatch: {context} has {got} entries, expected {expected}")]
    DimensionMismatch {
        /// Which input was inconsistent
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },
}

/// A dense square system `A x = b` prepared for in-place elimination.
///
/// Full pivoting exchanges both rows and columns, and a column exchange
/// permutes the unknowns relative to their original slots. The system
/// therefore tracks a variable-order sequence alongside the coefficients;
/// the solution is keyed through it, never through raw column indices.
///
/// Solving mutates the system in place. Clone first if the original
/// coefficients are still needed.
#[derive(Debug, Clone)]
pub struct GaussJordanSystem {
    coeffs: Array2<f64>,
    rhs: Array1<f64>,
    order: Vec<String>,
    pivots: Vec<(usize, usize)>,
}

impl GaussJordanSystem {
    /// Build a system from coefficients, right-hand side, and variable labels.
    ///
    /// The matrix must be square with one label and one right-hand-side
    /// entry per row.
    pub fn new(
        coeffs: Array2<f64>,
        rhs: Array1<f64>,
        variables: &[&str],
    ) -> Result<Self, EliminationError> {
        let n = coeffs.nrows();
        if coeffs.ncols() != n {
            return Err(EliminationError::DimensionMismatch {
                context: "coefficient matrix row",
                expected: n,
                got: coeffs.ncols(),
            });
        }
        if rhs.len() != n {
            return Err(EliminationError::DimensionMismatch {
                context: "right-hand side",
                expected: n,
                got: rhs.len(),
            });
        }
        if variables.len() != n {
            return Err(EliminationError::DimensionMismatch {
                context: "variable labels",
                expected: n,
                got: variables.len(),
            });
        }
        Ok(Self {
            coeffs,
            rhs,
            order: variables.iter().map(|v| v.to_string()).collect(),
            pivots: Vec::with_capacity(n),
        })
    }

    /// System dimension
    pub fn n(&self) -> usize {
        self.rhs.len()
    }

    /// Variable labels in their current column order
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Pivot positions chosen during the forward pass, one `(row, column)`
    /// pair per step, in the matrix indexing at the time of selection.
    pub fn pivots(&self) -> &[(usize, usize)] {
        &self.pivots
    }

    /// Run the elimination and return the solution keyed by variable label.
    ///
    /// Forward pass: for each step `k`, the maximal-magnitude entry of the
    /// `[k, n) x [k, n)` sub-matrix is swapped into `(k, k)`, the row is
    /// normalized to a leading 1, and column `k` is cleared below. Backward
    /// pass: rows are re-normalized and column `k` is cleared above. After
    /// both passes the matrix is unit-diagonal and each right-hand-side
    /// entry is the value of the variable the order sequence assigns to
    /// that row.
    pub fn solve(&mut self) -> Result<HashMap<String, f64>, EliminationError> {
        let n = self.n();
        self.pivots.clear();

        for k in 0..n {
            let (row, col, magnitude) = self.find_pivot(k);
            if magnitude == 0.0 {
                return Err(EliminationError::SingularMatrix { step: k });
            }
            log::debug!("step {k}: pivot magnitude {magnitude:.6e} at ({row}, {col})");
            self.pivots.push((row, col));

            // Row and column swaps are independent; either may be a no-op.
            if row != k {
                self.swap_rows(k, row);
            }
            if col != k {
                self.swap_columns(k, col);
            }

            let pivot = self.coeffs[[k, k]];
            self.normalize_row(k, pivot);
            self.eliminate_below(k);
        }

        for k in (0..n).rev() {
            let pivot = self.coeffs[[k, k]];
            if pivot == 0.0 {
                return Err(EliminationError::SingularMatrix { step: k });
            }
            self.normalize_row(k, pivot);
            self.eliminate_above(k);
        }

        Ok(self
            .order
            .iter()
            .enumerate()
            .map(|(row, label)| (label.clone(), self.rhs[row]))
            .collect())
    }

    /// Maximal-magnitude entry of the `[k, n) x [k, n)` window, as
    /// `(row, column, magnitude)`. Ties keep the first entry in row-major
    /// scan order.
    fn find_pivot(&self, k: usize) -> (usize, usize, f64) {
        let n = self.n();
        let mut best = (k, k, self.coeffs[[k, k]].abs());
        for row in k..n {
            for col in k..n {
                let magnitude = self.coeffs[[row, col]].abs();
                if magnitude > best.2 {
                    best = (row, col, magnitude);
                }
            }
        }
        best
    }

    /// Exchange two full rows, right-hand side included.
    fn swap_rows(&mut self, a: usize, b: usize) {
        for col in 0..self.n() {
            self.coeffs.swap([a, col], [b, col]);
        }
        self.rhs.swap(a, b);
    }

    /// Exchange two columns across all rows, and the corresponding entries
    /// of the variable-order sequence.
    fn swap_columns(&mut self, a: usize, b: usize) {
        for row in 0..self.n() {
            self.coeffs.swap([row, a], [row, b]);
        }
        self.order.swap(a, b);
    }

    /// Scale row `k` so its pivot becomes 1. Entries that are exactly zero
    /// are left untouched rather than divided.
    fn normalize_row(&mut self, k: usize, pivot: f64) {
        for col in 0..self.n() {
            if self.coeffs[[k, col]] != 0.0 {
                self.coeffs[[k, col]] /= pivot;
            }
        }
        self.rhs[k] /= pivot;
    }

    /// Subtract multiples of row `k` from every row below it, zeroing
    /// column `k` under the diagonal.
    fn eliminate_below(&mut self, k: usize) {
        let n = self.n();
        for row in (k + 1)..n {
            let factor = self.coeffs[[row, k]] / self.coeffs[[k, k]];
            for col in k..n {
                let delta = factor * self.coeffs[[k, col]];
                self.coeffs[[row, col]] -= delta;
            }
            self.rhs[row] -= factor * self.rhs[k];
        }
    }

    /// Subtract multiples of row `k` from every row above it, zeroing
    /// column `k` over the diagonal.
    fn eliminate_above(&mut self, k: usize) {
        for row in (0..k).rev() {
            let factor = self.coeffs[[row, k]] / self.coeffs[[k, k]];
            for col in (0..=k).rev() {
                let delta = factor * self.coeffs[[k, col]];
                self.coeffs[[row, col]] -= delta;
            }
            self.rhs[row] -= factor * self.rhs[k];
        }
    }
}

/// Solve `A x = b`, returning the solution keyed by variable label.
///
/// Copying convenience wrapper around [`GaussJordanSystem`]; use the
/// system type directly to keep the pivot record or avoid the copy.
pub fn gauss_jordan_solve(
    coeffs: &Array2<f64>,
    rhs: &Array1<f64>,
    variables: &[&str],
) -> Result<HashMap<String, f64>, EliminationError> {
    GaussJordanSystem::new(coeffs.clone(), rhs.clone(), variables)?.solve()
}
