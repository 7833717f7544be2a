//! Reshaping of raw solver output into the caller's orientation

use serde::Serialize;
use serde_json::Value;
use sparse_tsvd::{DMatrix, RawSvdResult};

/// Result of an `svd` call
///
/// Serializes as `{ "d": .., "U": .., "S": .., "V": .. }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SvdResponse {
    /// Achieved dimension
    pub d: usize,
    /// rows × d when `U` was requested untransposed, d × rows otherwise
    #[serde(rename = "U")]
    pub u: Vec<Vec<f64>>,
    /// Singular values in solver order
    #[serde(rename = "S")]
    pub s: Vec<f64>,
    /// cols × d when `V` was requested untransposed, d × cols otherwise
    #[serde(rename = "V")]
    pub v: Vec<Vec<f64>>,
}

impl SvdResponse {
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Build the response for an input of shape `rows x cols`
pub fn shape(
    raw: &RawSvdResult,
    rows: usize,
    cols: usize,
    use_u: bool,
    use_v: bool,
) -> SvdResponse {
    let d = raw.d;
    SvdResponse {
        d,
        u: orient(&raw.ut, d, rows, use_u),
        s: raw.s.iter().copied().collect(),
        v: orient(&raw.vt, d, cols, use_v),
    }
}

/// Copy a `d x extent` solver matrix
///
/// With `untranspose` the output is `extent x d` and `out[y][x] = native[x][y]`;
/// otherwise it is `d x extent`, row for row.
///
/// `native` must be `d x extent`; the adapter rejects other shapes.
fn orient(native: &DMatrix<f64>, d: usize, extent: usize, untranspose: bool) -> Vec<Vec<f64>> {
    if untranspose {
        (0..extent)
            .map(|y| (0..d).map(|x| native[(x, y)]).collect())
            .collect()
    } else {
        (0..d)
            .map(|x| (0..extent).map(|y| native[(x, y)]).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparse_tsvd::DVector;

    /// d = 2, rows = 3, cols = 4 with distinct entries everywhere
    fn raw() -> RawSvdResult {
        RawSvdResult::new(
            DMatrix::from_row_slice(2, 3, &[11.0, 12.0, 13.0, 21.0, 22.0, 23.0]),
            DVector::from_vec(vec![9.0, 4.0]),
            DMatrix::from_row_slice(
                2,
                4,
                &[-11.0, -12.0, -13.0, -14.0, -21.0, -22.0, -23.0, -24.0],
            ),
        )
        .unwrap()
    }

    #[test]
    fn test_untransposed_u_native_v() {
        let r = shape(&raw(), 3, 4, true, false);

        assert_eq!(r.d, 2);
        assert_eq!(r.u, vec![vec![11.0, 21.0], vec![12.0, 22.0], vec![13.0, 23.0]]);
        assert_eq!(
            r.v,
            vec![vec![-11.0, -12.0, -13.0, -14.0], vec![-21.0, -22.0, -23.0, -24.0]]
        );
        assert_eq!(r.s, vec![9.0, 4.0]);
    }

    #[test]
    fn test_native_u_untransposed_v() {
        let r = shape(&raw(), 3, 4, false, true);

        assert_eq!(r.u, vec![vec![11.0, 12.0, 13.0], vec![21.0, 22.0, 23.0]]);
        assert_eq!(
            r.v,
            vec![
                vec![-11.0, -21.0],
                vec![-12.0, -22.0],
                vec![-13.0, -23.0],
                vec![-14.0, -24.0]
            ]
        );
    }

    #[test]
    fn test_u_and_v_flags_are_independent() {
        let raw = raw();
        for use_u in [false, true] {
            for use_v in [false, true] {
                let r = shape(&raw, 3, 4, use_u, use_v);
                let expected_u = if use_u { (3, 2) } else { (2, 3) };
                let expected_v = if use_v { (4, 2) } else { (2, 4) };
                assert_eq!((r.u.len(), r.u[0].len()), expected_u);
                assert_eq!((r.v.len(), r.v[0].len()), expected_v);
            }
        }
    }

    #[test]
    fn test_singular_value_order_is_preserved() {
        let raw = RawSvdResult::new(
            DMatrix::identity(2, 2),
            DVector::from_vec(vec![1.0, 5.0]),
            DMatrix::identity(2, 2),
        )
        .unwrap();
        assert_eq!(shape(&raw, 2, 2, true, false).s, vec![1.0, 5.0]);
    }

    #[test]
    fn test_zero_dimension() {
        let raw = RawSvdResult::new(DMatrix::zeros(0, 2), DVector::zeros(0), DMatrix::zeros(0, 3))
            .unwrap();

        let r = shape(&raw, 2, 3, true, true);
        assert_eq!(r.u, vec![Vec::<f64>::new(), Vec::new()]);
        assert_eq!(r.v.len(), 3);
        assert!(r.s.is_empty());

        let r = shape(&raw, 2, 3, false, false);
        assert!(r.u.is_empty());
        assert!(r.v.is_empty());
    }

    #[test]
    fn test_to_value_keys() {
        let value = shape(&raw(), 3, 4, true, false).to_value().unwrap();
        assert_eq!(value.as_object().unwrap().len(), 4);
        assert_eq!(value["d"], 2);
        assert_eq!(value["S"], serde_json::json!([9.0, 4.0]));
        assert_eq!(value["U"][2][1], 23.0);
        assert_eq!(value["V"][1][3], -24.0);
    }
}
