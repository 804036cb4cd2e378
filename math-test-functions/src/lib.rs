//! Scalar test integrands shared by the quadrature test suites
//!
//! Each function documents the closed-form or high-precision reference
//! value of its integral over a standard interval, so convergence tests
//! can compare against a known target.

// Import all function modules
pub mod functions;
pub use functions::*;
