//! Solver invocation
//!
//! Converts the dense matrix, runs the backend and hands back the raw result.
//! The dense matrix is dropped right after conversion and the sparse matrix
//! as soon as the solver returns or unwinds. A result that does not fit the
//! input shape is rejected before it reaches the shaper.

use std::panic::{AssertUnwindSafe, catch_unwind};

use sparse_tsvd::{DenseMatrix, RawSvdResult, SolverConfig, SolverError, SvdBackend};

use crate::error::ComputationError;

/// Run `backend` on `dense` with `config`
pub fn invoke(
    backend: &dyn SvdBackend,
    dense: DenseMatrix,
    config: &SolverConfig,
) -> Result<RawSvdResult, ComputationError> {
    let sparse = backend.dense_to_sparse(&dense);
    drop(dense);
    let (rows, cols) = (sparse.rows(), sparse.cols());
    log::debug!(
        "invoking {} backend: {}x{}, {} non-zeros, {} dimensions requested",
        backend.name(),
        rows,
        cols,
        sparse.nnz(),
        config.dimensions
    );

    // Catch panics so a failing solver reaches the caller as an error
    let outcome = catch_unwind(AssertUnwindSafe(|| backend.truncated_svd(&sparse, config)));
    drop(sparse);

    let raw = match outcome {
        Ok(result) => result?,
        Err(payload) => return Err(ComputationError::Panicked(panic_message(&*payload))),
    };
    check_shape(&raw, rows, cols)?;
    Ok(raw)
}

/// `ut` must be `d x rows`, `vt` must be `d x cols` and `s` must hold `d` values
fn check_shape(raw: &RawSvdResult, rows: usize, cols: usize) -> Result<(), SolverError> {
    let d = raw.d;
    if raw.s.len() != d || raw.ut.shape() != (d, rows) || raw.vt.shape() != (d, cols) {
        return Err(SolverError::InvalidInput(format!(
            "solver result does not fit a {}x{} input: d = {}, S {}, Ut {:?}, Vt {:?}",
            rows,
            cols,
            d,
            raw.s.len(),
            raw.ut.shape(),
            raw.vt.shape()
        )));
    }
    Ok(())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
