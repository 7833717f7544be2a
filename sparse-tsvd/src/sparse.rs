//! Compressed sparse column (CSC) matrix
//!
//! Entries of column `j` live in `row_idx[col_ptr[j]..col_ptr[j + 1]]` and
//! the matching slice of `values`, with row indices strictly increasing.

use crate::dense::DenseMatrix;
use crate::tsvd::SolverError;

/// CSC sparse matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    col_ptr: Vec<usize>,
    row_idx: Vec<usize>,
    values: Vec<f64>,
}

impl SparseMatrix {
    /// Convert a dense matrix column by column, top to bottom
    ///
    /// Exact zeros (including `-0.0`) are not stored. The layout depends only
    /// on the input, so identical inputs produce identical buffers.
    pub fn from_dense(dense: &DenseMatrix) -> Self {
        let rows = dense.rows();
        let cols = dense.cols();

        let mut col_ptr = Vec::with_capacity(cols + 1);
        let mut row_idx = Vec::new();
        let mut values = Vec::new();

        col_ptr.push(0);
        for j in 0..cols {
            for i in 0..rows {
                let value = dense.get(i, j);
                if value != 0.0 {
                    row_idx.push(i);
                    values.push(value);
                }
            }
            col_ptr.push(values.len());
        }

        Self {
            rows,
            cols,
            col_ptr,
            row_idx,
            values,
        }
    }

    /// Assemble a matrix from raw CSC buffers, checking every invariant
    pub fn from_parts(
        rows: usize,
        cols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, SolverError> {
        let matrix = Self {
            rows,
            cols,
            col_ptr,
            row_idx,
            values,
        };
        matrix.check_invariants()?;
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn col_ptr(&self) -> &[usize] {
        &self.col_ptr
    }

    pub fn row_idx(&self) -> &[usize] {
        &self.row_idx
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Stored `(row, value)` pairs of column `col`
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.col_ptr[col]..self.col_ptr[col + 1];
        self.row_idx[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Value at `(row, col)`, zero when not stored
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let start = self.col_ptr[col];
        let end = self.col_ptr[col + 1];
        match self.row_idx[start..end].binary_search(&row) {
            Ok(offset) => self.values[start + offset],
            Err(_) => 0.0,
        }
    }

    /// Expand back to a row-major dense matrix
    pub fn to_dense(&self) -> Result<DenseMatrix, SolverError> {
        let mut dense = DenseMatrix::zeros(self.rows, self.cols)?;
        for j in 0..self.cols {
            for (i, value) in self.column(j) {
                dense.set(i, j, value);
            }
        }
        Ok(dense)
    }

    /// Verify the CSC layout invariants
    pub fn check_invariants(&self) -> Result<(), SolverError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SolverError::EmptyMatrix);
        }
        if self.col_ptr.len() != self.cols + 1 {
            return Err(SolverError::InvalidInput(format!(
                "column pointer length {} does not match {} columns",
                self.col_ptr.len(),
                self.cols
            )));
        }
        if self.col_ptr[0] != 0 {
            return Err(SolverError::InvalidInput(
                "column pointers must start at 0".to_string(),
            ));
        }
        if self.row_idx.len() != self.values.len() {
            return Err(SolverError::InvalidInput(format!(
                "{} row indices for {} values",
                self.row_idx.len(),
                self.values.len()
            )));
        }
        if self.col_ptr[self.cols] != self.values.len() {
            return Err(SolverError::InvalidInput(format!(
                "final column pointer {} does not match {} stored entries",
                self.col_ptr[self.cols],
                self.values.len()
            )));
        }
        for j in 0..self.cols {
            let (start, end) = (self.col_ptr[j], self.col_ptr[j + 1]);
            if start > end || end > self.row_idx.len() {
                return Err(SolverError::InvalidInput(format!(
                    "column pointers decrease at column {}",
                    j
                )));
            }
            let column = &self.row_idx[start..end];
            if column.iter().any(|&i| i >= self.rows) {
                return Err(SolverError::InvalidInput(format!(
                    "row index out of range in column {}",
                    j
                )));
            }
            if column.windows(2).any(|w| w[0] >= w[1]) {
                return Err(SolverError::InvalidInput(format!(
                    "row indices not strictly increasing in column {}",
                    j
                )));
            }
        }
        Ok(())
    }
}

/// Free-function form of [`SparseMatrix::from_dense`]
pub fn dense_to_sparse(dense: &DenseMatrix) -> SparseMatrix {
    SparseMatrix::from_dense(dense)
}
