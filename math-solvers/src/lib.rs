//! Dense linear-system solving
//!
//! This crate provides a direct solver for small dense systems: Gauss-Jordan
//! elimination with full pivoting. Pivot selection scans both rows and
//! columns of the remaining sub-matrix for the entry of maximal magnitude,
//! so the system tracks which variable occupies which column and keys the
//! solution by variable label rather than by position.
//!
//! # Example
//!
//! ```
//! use math_labs_solvers::gauss_jordan_solve;
//! use ndarray::array;
//!
//! // 3x - z = 7, 2x - 5y + z = -2, 2x + 2y + 5z = 1
//! let a = array![[3.0, 0.0, -1.0], [2.0, -5.0, 1.0], [2.0, 2.0, 5.0]];
//! let b = array![7.0, -2.0, 1.0];
//!
//! let solution = gauss_jordan_solve(&a, &b, &["x", "y", "z"]).unwrap();
//! assert!((solution["x"] - 2.0).abs() < 1e-9);
//! assert!((solution["z"] + 1.0).abs() < 1e-9);
//! ```

pub mod direct;

// Re-export main types
pub use direct::{EliminationError, GaussJordanSystem, gauss_jordan_solve};
