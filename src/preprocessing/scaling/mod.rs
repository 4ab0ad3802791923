//! Scaling of numeric columns.
//!
//! # Available Transformers
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`StandardScaler`] | Z-score normalization (mean = 0, std = 1, ddof = 0) |
//!
//! [`standardize`] is the one-shot form with column exclusion.

pub mod standard;

pub use standard::{FittedStandardScaler, ScaleParams, StandardScaler};

use crate::error::Result;
use crate::preprocessing::selection::{drop_non_numeric_columns, require_known};
use crate::preprocessing::traits::Transformer;
use crate::table::Table;

/// Standardize every numeric column of `table` except those in `drop_columns`.
///
/// Excluded columns are removed from the output entirely. An empty
/// `drop_columns` excludes nothing. A name that exists in `table` but is not
/// numeric is accepted, since it would be removed anyway.
///
/// # Errors
/// - [`TransformError::UnknownColumn`](crate::TransformError::UnknownColumn)
///   if a name in `drop_columns` is not a column of `table`.
/// - [`TransformError::EmptyColumn`](crate::TransformError::EmptyColumn) for
///   a column with no present values.
/// - [`TransformError::DegenerateColumn`](crate::TransformError::DegenerateColumn)
///   for a constant column.
///
/// # Example
/// ```
/// use tabprep::standardize;
/// use tabprep::table::{Column, Table};
///
/// let table = Table::new(vec![
///     Column::int("A", vec![Some(1), Some(2), Some(3)]),
///     Column::int("id", vec![Some(10), Some(11), Some(12)]),
/// ])
/// .unwrap();
///
/// let scaled = standardize(&table, &["id"]).unwrap();
/// assert_eq!(scaled.column_names(), vec!["A"]);
/// ```
pub fn standardize<S: AsRef<str>>(table: &Table, drop_columns: &[S]) -> Result<Table> {
    require_known(table, drop_columns)?;
    let numeric = drop_non_numeric_columns(table);
    standardize_excluding(&numeric, drop_columns)
}

/// Scale `numeric` without `exclude`, skipping names it does not contain.
pub(crate) fn standardize_excluding<S: AsRef<str>>(numeric: &Table, exclude: &[S]) -> Result<Table> {
    let selected = numeric.retain(|c| !exclude.iter().any(|name| name.as_ref() == c.name()));
    tracing::debug!(
        rows = selected.n_rows(),
        columns = selected.n_columns(),
        excluded = numeric.n_columns() - selected.n_columns(),
        "standardizing columns"
    );
    StandardScaler::new().fit_transform(&selected)
}
