//! Truncated SVD of a CSC matrix

use nalgebra::linalg::SVD;
use nalgebra::{DMatrix, DVector};

use crate::sparse::SparseMatrix;
use crate::verbosity::default_verbosity;

/// Configuration for one truncated SVD computation
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Upper limit on the number of singular triplets (0 = as many as the rank allows)
    pub dimensions: usize,
    /// Verbosity for this computation
    pub verbosity: i64,
    /// Maximum number of SVD iterations (0 = no limit)
    pub max_iterations: usize,
    /// Relative cutoff for rank determination against the largest singular value
    ///
    /// `None` uses `max(rows, cols) * f64::EPSILON`.
    pub rank_rtol: Option<f64>,
}

impl SolverConfig {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            verbosity: default_verbosity(),
            max_iterations: 0,
            rank_rtol: None,
        }
    }

    pub fn with_verbosity(mut self, verbosity: i64) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_rank_rtol(mut self, rtol: f64) -> Self {
        self.rank_rtol = Some(rtol);
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Error types for truncated SVD computation
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Matrix is empty")]
    EmptyMatrix,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Convergence failed after {iterations} iterations")]
    ConvergenceFailed { iterations: usize },

    #[error("Numerical error: {message}")]
    NumericalError { message: String },
}

/// Solver output in its native orientation
///
/// The singular vectors are stored as rows: `ut` is `d x rows` and `vt` is
/// `d x cols` for an input of shape `rows x cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSvdResult {
    /// Achieved dimension
    pub d: usize,
    /// Transposed left singular vectors (d × rows)
    pub ut: DMatrix<f64>,
    /// Singular values (d)
    pub s: DVector<f64>,
    /// Transposed right singular vectors (d × cols)
    pub vt: DMatrix<f64>,
}

impl RawSvdResult {
    /// Assemble a result, checking that `ut`, `s` and `vt` agree on `d`
    pub fn new(ut: DMatrix<f64>, s: DVector<f64>, vt: DMatrix<f64>) -> Result<Self, SolverError> {
        let d = s.len();
        if ut.nrows() != d || vt.nrows() != d {
            return Err(SolverError::InvalidInput(format!(
                "singular vector rows ({}, {}) do not match {} singular values",
                ut.nrows(),
                vt.nrows(),
                d
            )));
        }
        Ok(Self { d, ut, s, vt })
    }

    /// Rank-`d` reconstruction `Ut^T * diag(S) * Vt`
    pub fn reconstruct(&self) -> DMatrix<f64> {
        self.ut.transpose() * DMatrix::from_diagonal(&self.s) * &self.vt
    }
}

/// Truncated SVD of a sparse matrix
///
/// Computes the singular triplets of `matrix`, orders them by descending
/// singular value, drops those below the rank cutoff and keeps at most
/// `config.dimensions` of them. The achieved dimension may be smaller than
/// requested when the numerical rank is lower.
///
/// # Errors
/// * `EmptyMatrix` / `InvalidInput` for a malformed matrix or non-finite entries
/// * `ConvergenceFailed` when `config.max_iterations` is exceeded
pub fn truncated_svd(
    matrix: &SparseMatrix,
    config: &SolverConfig,
) -> Result<RawSvdResult, SolverError> {
    matrix.check_invariants()?;
    if matrix.values().iter().any(|v| !v.is_finite()) {
        return Err(SolverError::InvalidInput(
            "matrix contains non-finite values".to_string(),
        ));
    }

    let (m, n) = (matrix.rows(), matrix.cols());
    let k = m.min(n);
    let dimensions = match config.dimensions {
        0 => k,
        d => d.min(k),
    };

    let mut a = DMatrix::<f64>::zeros(m, n);
    for j in 0..n {
        for (i, value) in matrix.column(j) {
            a[(i, j)] = value;
        }
    }

    let svd = SVD::try_new(a, true, true, f64::EPSILON, config.max_iterations).ok_or(
        SolverError::ConvergenceFailed {
            iterations: config.max_iterations,
        },
    )?;
    let u = svd.u.ok_or_else(|| SolverError::NumericalError {
        message: "left singular vectors were not computed".to_string(),
    })?;
    let v_t = svd.v_t.ok_or_else(|| SolverError::NumericalError {
        message: "right singular vectors were not computed".to_string(),
    })?;
    let sv = svd.singular_values;

    // Descending order, ties broken by original position
    let mut order: Vec<usize> = (0..sv.len()).collect();
    order.sort_by(|&a, &b| sv[b].total_cmp(&sv[a]).then(a.cmp(&b)));

    let s_max = order.first().map(|&i| sv[i]).unwrap_or(0.0);
    let rtol = config
        .rank_rtol
        .unwrap_or(m.max(n) as f64 * f64::EPSILON);
    let cutoff = s_max * rtol;
    let rank = order
        .iter()
        .take_while(|&&i| sv[i] > 0.0 && sv[i] > cutoff)
        .count();
    let d = rank.min(dimensions);

    let ut = DMatrix::from_fn(d, m, |x, y| u[(y, order[x])]);
    let vt = DMatrix::from_fn(d, n, |x, y| v_t[(order[x], y)]);
    let s = DVector::from_fn(d, |x, _| sv[order[x]]);

    if config.verbosity >= 1 {
        log::info!(
            "truncated SVD: {}x{} matrix, {} non-zeros, {} dimensions requested, rank {}, {} returned",
            m,
            n,
            matrix.nnz(),
            dimensions,
            rank,
            d
        );
    }
    if config.verbosity >= 2 {
        log::debug!("singular values: {:?}", s.as_slice());
    }

    Ok(RawSvdResult { d, ut, s, vt })
}
