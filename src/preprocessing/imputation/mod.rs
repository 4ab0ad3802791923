//! Imputation of missing values in numeric columns.
//!
//! # Available Transformers
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`SimpleImputer`] | Impute with the column mean, median, or mode |
//!
//! [`fill_missing`] is the one-shot form: it fits a [`SimpleImputer`] on a
//! table and transforms that same table.

pub mod simple;

pub use simple::{FillStrategy, FittedSimpleImputer, ImputeStatistic, SimpleImputer};

use crate::error::Result;
use crate::preprocessing::traits::Transformer;
use crate::table::Table;

/// Reduce `table` to its numeric columns and fill every missing cell with
/// the column's mean, median, or mode.
///
/// Columns with no missing cells are returned unchanged.
///
/// # Errors
/// Returns [`TransformError::EmptyColumn`](crate::TransformError::EmptyColumn)
/// for a column whose cells are all missing.
///
/// # Example
/// ```
/// use tabprep::{count_missing, fill_missing, FillStrategy};
/// use tabprep::table::{Column, Table};
///
/// let table = Table::new(vec![
///     Column::int("A", vec![Some(1), Some(2), None, Some(4)]),
///     Column::text("C", vec![Some("x"), Some("y"), Some("z"), Some("w")]),
/// ])
/// .unwrap();
///
/// let filled = fill_missing(&table, FillStrategy::Mean).unwrap();
/// assert_eq!(filled.column_names(), vec!["A"]);
/// assert_eq!(count_missing(&filled).total(), 0);
/// ```
pub fn fill_missing(table: &Table, strategy: FillStrategy) -> Result<Table> {
    tracing::debug!(
        rows = table.n_rows(),
        columns = table.n_columns(),
        strategy = %strategy,
        "filling missing values"
    );
    SimpleImputer::new(strategy).fit_transform(table)
}
