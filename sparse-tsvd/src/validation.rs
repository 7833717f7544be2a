//! Result validation utilities

use nalgebra::{DMatrix, DVector};

use crate::dense::DenseMatrix;
use crate::tsvd::RawSvdResult;

/// Validate a truncated SVD result against its input
///
/// Checks shapes, that the rows of `ut` and `vt` are orthonormal, that the
/// singular values are non-negative and non-increasing, and that
/// `Ut^T * diag(S) * Vt` reproduces `original` within `tolerance`
/// (relative to its Frobenius norm).
///
/// Only a full-rank result is expected to reconstruct the input.
pub fn validate_svd(original: &DenseMatrix, result: &RawSvdResult, tolerance: f64) -> bool {
    let (m, n) = (original.rows(), original.cols());
    let d = result.d;

    if result.ut.shape() != (d, m) || result.vt.shape() != (d, n) || result.s.len() != d {
        return false;
    }

    if !has_orthonormal_rows(&result.ut, tolerance) || !has_orthonormal_rows(&result.vt, tolerance)
    {
        return false;
    }

    if !is_singular_values_valid(&result.s, tolerance) {
        return false;
    }

    is_reconstruction_valid(original, result, tolerance)
}

/// Check that `matrix * matrix^T` is the identity
pub fn has_orthonormal_rows(matrix: &DMatrix<f64>, tolerance: f64) -> bool {
    let k = matrix.nrows();
    for i in 0..k {
        for j in 0..k {
            let dot = matrix.row(i).dot(&matrix.row(j));
            let expected = if i == j { 1.0 } else { 0.0 };
            if (dot - expected).abs() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Check that singular values are non-negative and non-increasing
pub fn is_singular_values_valid(s: &DVector<f64>, tolerance: f64) -> bool {
    if s.iter().any(|&x| x < -tolerance) {
        return false;
    }
    s.as_slice().windows(2).all(|w| w[0] >= w[1] - tolerance)
}

fn is_reconstruction_valid(original: &DenseMatrix, result: &RawSvdResult, tolerance: f64) -> bool {
    let reconstructed = result.reconstruct();

    let mut diff_norm_sq = 0.0;
    let mut orig_norm_sq = 0.0;
    for i in 0..original.rows() {
        for j in 0..original.cols() {
            let diff = original.get(i, j) - reconstructed[(i, j)];
            diff_norm_sq += diff * diff;
            orig_norm_sq += original.get(i, j) * original.get(i, j);
        }
    }

    let diff_norm = diff_norm_sq.sqrt();
    let orig_norm = orig_norm_sq.sqrt();
    if orig_norm == 0.0 {
        diff_norm < tolerance
    } else {
        diff_norm < tolerance * orig_norm
    }
}
