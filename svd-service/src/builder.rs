//! Dense matrix construction from a validated matrix argument

use sparse_tsvd::DenseMatrix;

use crate::config::MatrixArg;
use crate::error::ArgumentError;

/// Copy every entry of `matrix` into a row-major [`DenseMatrix`]
///
/// Entries must be JSON numbers; strings, booleans and nulls are rejected
/// rather than coerced.
pub fn build_dense(matrix: &MatrixArg<'_>) -> Result<DenseMatrix, ArgumentError> {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    let mut values = Vec::with_capacity(rows * cols);

    for y in 0..rows {
        let row = matrix.row(y);
        debug_assert_eq!(row.len(), cols);
        for (x, entry) in row.iter().enumerate() {
            let value = entry
                .as_f64()
                .ok_or(ArgumentError::NonNumericEntry { row: y, col: x })?;
            values.push(value);
        }
    }

    DenseMatrix::from_row_major(rows, cols, values)
        .map_err(|e| ArgumentError::invalid_matrix(e.to_string()))
}
