//! Row-major dense matrix

use crate::tsvd::SolverError;

/// Dense matrix stored row by row
///
/// Both extents are always positive and `values.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DenseMatrix {
    /// Create a `rows x cols` matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, SolverError> {
        check_extents(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        })
    }

    /// Wrap a row-major buffer
    ///
    /// # Errors
    /// `InvalidInput` if an extent is zero or the buffer length is not `rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, SolverError> {
        check_extents(rows, cols)?;
        if values.len() != rows * cols {
            return Err(SolverError::InvalidInput(format!(
                "expected {} values for a {}x{} matrix, got {}",
                rows * cols,
                rows,
                cols,
                values.len()
            )));
        }
        Ok(Self { rows, cols, values })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.cols + col] = value;
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

fn check_extents(rows: usize, cols: usize) -> Result<(), SolverError> {
    if rows == 0 || cols == 0 {
        return Err(SolverError::EmptyMatrix);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let m = DenseMatrix::zeros(2, 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_row_major_indexing() {
        let mut m = DenseMatrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);

        m.set(1, 2, -1.0);
        assert_eq!(m.get(1, 2), -1.0);
    }

    #[test]
    fn test_rejects_empty_extents() {
        assert!(matches!(DenseMatrix::zeros(0, 3), Err(SolverError::EmptyMatrix)));
        assert!(matches!(
            DenseMatrix::from_row_major(2, 0, vec![]),
            Err(SolverError::EmptyMatrix)
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let result = DenseMatrix::from_row_major(2, 2, vec![1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }
}
