//! Pluggable truncated SVD backends
//!
//! Callers hold a `&dyn SvdBackend` and never reach into a concrete solver,
//! so a different solver (or a test double) can be swapped in without
//! touching the marshalling code.

use crate::dense::DenseMatrix;
use crate::sparse::SparseMatrix;
use crate::tsvd::{RawSvdResult, SolverConfig, SolverError, truncated_svd};

/// A truncated SVD solver operating on CSC input
pub trait SvdBackend {
    /// Backend name
    fn name(&self) -> &'static str;

    /// Convert the dense input into the solver's sparse layout
    fn dense_to_sparse(&self, dense: &DenseMatrix) -> SparseMatrix {
        SparseMatrix::from_dense(dense)
    }

    /// Compute up to `config.dimensions` singular triplets (0 = full rank)
    fn truncated_svd(
        &self,
        matrix: &SparseMatrix,
        config: &SolverConfig,
    ) -> Result<RawSvdResult, SolverError>;
}

/// Default backend built on nalgebra's SVD
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraBackend;

impl SvdBackend for NalgebraBackend {
    fn name(&self) -> &'static str {
        "nalgebra"
    }

    fn truncated_svd(
        &self,
        matrix: &SparseMatrix,
        config: &SolverConfig,
    ) -> Result<RawSvdResult, SolverError> {
        truncated_svd(matrix, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nalgebra_backend_through_trait_object() {
        let backend: &dyn SvdBackend = &NalgebraBackend;
        assert_eq!(backend.name(), "nalgebra");

        let dense = DenseMatrix::from_row_major(2, 2, vec![3.0, 0.0, 0.0, 2.0]).unwrap();
        let sparse = backend.dense_to_sparse(&dense);
        assert_eq!(sparse.nnz(), 2);

        let result = backend
            .truncated_svd(&sparse, &SolverConfig::new(0).with_verbosity(0))
            .unwrap();
        assert_eq!(result.d, 2);
        assert_abs_diff_eq!(result.s[0], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.s[1], 2.0, epsilon = 1e-12);
    }
}
