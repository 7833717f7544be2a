//! Call argument resolution
//!
//! An `svd` call takes 1 to 4 positional arguments:
//!
//! | index | meaning                                   | default            |
//! |-------|-------------------------------------------|--------------------|
//! | 0     | matrix, array of equally long rows        | required           |
//! | 1     | dimension (0 = full rank)                 | 0                  |
//! | 2     | settings `{ debug, U, V }`                | `U: true, V: false`|
//! | 3     | legacy debug level                        | process default    |
//!
//! `null` in an optional position counts as absent. Arguments are checked from
//! the highest index down and the first failure is returned, before any
//! matrix buffer exists.

use serde::Deserialize;
use serde_json::Value;
use sparse_tsvd::{SolverConfig, default_verbosity};

use crate::error::ArgumentError;

/// Number of positional arguments accepted by `svd`
pub const MAX_ARGUMENTS: usize = 4;

/// Typed form of the settings argument
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SvdSettings {
    /// Verbosity level, truncated to an integer
    pub debug: Option<f64>,
    /// Return U as rows × d instead of d × rows
    #[serde(rename = "U")]
    pub u: Option<bool>,
    /// Return V as cols × d instead of d × cols
    #[serde(rename = "V")]
    pub v: Option<bool>,
}

/// Validated matrix argument, borrowed from the call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixArg<'a> {
    rows: &'a [Value],
    cols: usize,
}

impl<'a> MatrixArg<'a> {
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entries of row `index`, empty when out of range
    ///
    /// Every row in range has exactly `cols()` entries.
    pub(crate) fn row(&self, index: usize) -> &'a [Value] {
        let rows: &'a [Value] = self.rows;
        match rows.get(index).and_then(Value::as_array) {
            Some(row) => row.as_slice(),
            None => &[],
        }
    }
}

/// A fully resolved `svd` call
#[derive(Debug, Clone, PartialEq)]
pub struct SvdRequest<'a> {
    pub matrix: MatrixArg<'a>,
    /// Requested number of singular triplets (0 = as many as the rank allows)
    pub dimensions: usize,
    pub use_u: bool,
    pub use_v: bool,
    /// Verbosity for this call (`None` = process default)
    pub verbosity: Option<i64>,
}

impl SvdRequest<'_> {
    /// Per-call solver configuration
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.dimensions)
            .with_verbosity(self.verbosity.unwrap_or_else(default_verbosity))
    }
}

/// Resolve positional call arguments into a request
pub fn resolve(args: &[Value]) -> Result<SvdRequest<'_>, ArgumentError> {
    if args.len() > MAX_ARGUMENTS {
        return Err(ArgumentError::TooManyArguments {
            max: MAX_ARGUMENTS,
            got: args.len(),
        });
    }

    let legacy_debug = optional(args, 3).map(resolve_debug).transpose()?;
    let settings = optional(args, 2)
        .map(resolve_settings)
        .transpose()?
        .unwrap_or_default();
    let dimensions = optional(args, 1)
        .map(resolve_dimensions)
        .transpose()?
        .unwrap_or(0);
    let matrix = match optional(args, 0) {
        Some(value) => resolve_matrix(value)?,
        None => return Err(ArgumentError::MatrixRequired),
    };

    // settings.debug is applied after the legacy argument and wins
    let verbosity = settings.debug.map(truncate_level).or(legacy_debug);

    let request = SvdRequest {
        matrix,
        dimensions,
        use_u: settings.u.unwrap_or(true),
        use_v: settings.v.unwrap_or(false),
        verbosity,
    };
    log::trace!(
        "resolved svd request: {}x{}, dimensions {}, U {}, V {}, verbosity {:?}",
        request.matrix.rows(),
        request.matrix.cols(),
        request.dimensions,
        request.use_u,
        request.use_v,
        request.verbosity
    );
    Ok(request)
}

fn optional(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|value| !value.is_null())
}

fn resolve_matrix(value: &Value) -> Result<MatrixArg<'_>, ArgumentError> {
    let rows = value
        .as_array()
        .ok_or_else(|| ArgumentError::invalid_matrix("matrix is not an array"))?;
    let first = rows
        .first()
        .ok_or_else(|| ArgumentError::invalid_matrix("matrix has no rows"))?;
    let cols = first
        .as_array()
        .map(Vec::len)
        .ok_or_else(|| ArgumentError::invalid_matrix("row 0 is not an array"))?;
    if cols == 0 {
        return Err(ArgumentError::invalid_matrix("row 0 is empty"));
    }

    for (index, row) in rows.iter().enumerate().skip(1) {
        match row.as_array() {
            Some(entries) if entries.len() == cols => {}
            Some(entries) => {
                return Err(ArgumentError::invalid_matrix(format!(
                    "row {} has {} entries, expected {}",
                    index,
                    entries.len(),
                    cols
                )));
            }
            None => {
                return Err(ArgumentError::invalid_matrix(format!(
                    "row {} is not an array",
                    index
                )));
            }
        }
    }

    Ok(MatrixArg {
        rows: rows.as_slice(),
        cols,
    })
}

fn resolve_dimensions(value: &Value) -> Result<usize, ArgumentError> {
    let number = value.as_f64().ok_or(ArgumentError::DimensionNotNumber)?;
    let truncated = number.trunc();
    if truncated < 0.0 {
        return Err(ArgumentError::NegativeDimension);
    }
    Ok(truncated as usize)
}

fn resolve_settings(value: &Value) -> Result<SvdSettings, ArgumentError> {
    if !value.is_object() {
        return Err(ArgumentError::SettingsNotStructured);
    }
    SvdSettings::deserialize(value).map_err(|e| ArgumentError::InvalidSetting(e.to_string()))
}

fn resolve_debug(value: &Value) -> Result<i64, ArgumentError> {
    value
        .as_f64()
        .map(truncate_level)
        .ok_or(ArgumentError::DebugNotNumber)
}

fn truncate_level(level: f64) -> i64 {
    level.trunc() as i64
}
