//! Dense to CSC conversion tests

use sparse_tsvd::{DenseMatrix, SparseMatrix, dense_to_sparse};

#[test]
fn test_conversion_is_reproducible() {
    let dense = DenseMatrix::from_row_major(
        3,
        4,
        vec![0.0, 1.5, 0.0, -2.0, 3.0, 0.0, 0.0, 1.0, 0.0, 4.0, 5.0, 0.0],
    )
    .unwrap();

    let a = dense_to_sparse(&dense);
    let b = dense_to_sparse(&dense);
    assert_eq!(a, b);
    assert_eq!(a.col_ptr(), &[0, 1, 3, 4, 6]);
    assert_eq!(a.row_idx(), &[1, 0, 2, 2, 0, 1]);
    assert_eq!(a.values(), &[3.0, 1.5, 4.0, 5.0, -2.0, 1.0]);
}

#[test]
fn test_fully_dense_input_keeps_every_entry() {
    let dense = DenseMatrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let sparse = SparseMatrix::from_dense(&dense);

    assert_eq!(sparse.nnz(), 6);
    assert_eq!(sparse.col_ptr(), &[0, 2, 4, 6]);
    let first_column: Vec<(usize, f64)> = sparse.column(0).collect();
    assert_eq!(first_column, vec![(0, 1.0), (1, 4.0)]);
}

#[test]
fn test_column_pointer_invariants_hold() {
    let dense = DenseMatrix::from_row_major(
        4,
        3,
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 3.0],
    )
    .unwrap();
    let sparse = SparseMatrix::from_dense(&dense);

    sparse.check_invariants().unwrap();
    assert!(sparse.col_ptr().windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*sparse.col_ptr().last().unwrap(), sparse.nnz());
    assert!(sparse.row_idx().iter().all(|&i| i < sparse.rows()));
}

#[test]
fn test_round_trip_through_dense() {
    let dense = DenseMatrix::from_row_major(2, 2, vec![0.0, -7.5, 1e-300, 0.0]).unwrap();
    let back = SparseMatrix::from_dense(&dense).to_dense().unwrap();
    assert_eq!(back, dense);
}
