//! # sparse-tsvd: truncated SVD over compressed sparse column matrices
//!
//! Provides the matrix types consumed by the SVD service (a row-major dense
//! matrix and its CSC counterpart), a pluggable truncated SVD backend, and the
//! process-wide default verbosity read by the solver.
//!
//! The default backend is built on nalgebra.

pub mod backend;
pub mod dense;
pub mod sparse;
pub mod tsvd;
pub mod validation;
pub mod verbosity;

pub use backend::{NalgebraBackend, SvdBackend};
pub use dense::DenseMatrix;
pub use sparse::{SparseMatrix, dense_to_sparse};
pub use tsvd::{RawSvdResult, SolverConfig, SolverError, truncated_svd};
pub use verbosity::{default_verbosity, set_default_verbosity};

// Re-export nalgebra types used in the public API
pub use nalgebra::{DMatrix, DVector};
