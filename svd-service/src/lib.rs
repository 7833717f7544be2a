//! # svd-service: truncated SVD calls over dynamic arguments
//!
//! Resolves a positional `svd(matrix, dimension?, settings?, debug?)` call,
//! marshals the matrix into CSC form, runs a truncated SVD backend and
//! reshapes the singular vectors into the orientation the caller asked for.
//!
//! ```
//! use serde_json::json;
//!
//! let result = svd_service::svd(&[json!([[1, 2], [3, 4], [5, 6]]), json!(0), json!({"debug": 0})]).unwrap();
//! assert_eq!(result.d, 2);
//! assert_eq!(result.u.len(), 3);    // rows × d
//! assert_eq!(result.v.len(), 2);    // d × cols
//! ```

pub mod adapter;
pub mod builder;
pub mod config;
pub mod error;
pub mod shaper;

pub use config::{MAX_ARGUMENTS, MatrixArg, SvdRequest, SvdSettings, resolve};
pub use error::{ArgumentError, ComputationError, SvdError};
pub use shaper::SvdResponse;

use serde_json::Value;
use sparse_tsvd::{NalgebraBackend, SvdBackend};

/// Compute a truncated SVD with the default backend
pub fn svd(args: &[Value]) -> Result<SvdResponse, SvdError> {
    svd_with_backend(&NalgebraBackend, args)
}

/// Compute a truncated SVD with `backend`
pub fn svd_with_backend(backend: &dyn SvdBackend, args: &[Value]) -> Result<SvdResponse, SvdError> {
    let request = config::resolve(args)?;
    let dense = builder::build_dense(&request.matrix)?;
    let (rows, cols) = (dense.rows(), dense.cols());

    let raw = adapter::invoke(backend, dense, &request.solver_config())?;
    let response = shaper::shape(&raw, rows, cols, request.use_u, request.use_v);
    log::debug!("svd finished: d = {} ({}x{} input)", response.d, rows, cols);
    Ok(response)
}

/// Compute a truncated SVD and return the `{d, U, S, V}` object
pub fn svd_value(args: &[Value]) -> Result<Value, SvdError> {
    let response = svd(args)?;
    Ok(response.to_value().map_err(ComputationError::from)?)
}
