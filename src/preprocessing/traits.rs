//! Core traits for table transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; holds options and learns statistics from a table.
//! - [`FittedTransformer`]: After fitting; applies the learned statistics to a table.

use crate::error::Result;
use crate::table::Table;

/// Trait for unfitted transformers.
///
/// A transformer learns per-column statistics from a table and can then
/// transform that table, or another one with the same columns, using them.
///
/// # Example
/// ```
/// use tabprep::preprocessing::{FillStrategy, SimpleImputer, Transformer, FittedTransformer};
/// use tabprep::table::{Column, Table};
///
/// let table = Table::new(vec![Column::float("a", vec![Some(1.0), None, Some(3.0)])]).unwrap();
/// let fitted = SimpleImputer::new(FillStrategy::Mean).fit(&table).unwrap();
/// let filled = fitted.transform(&table).unwrap();
/// assert_eq!(filled.column("a").unwrap().missing_count(), 0);
/// ```
pub trait Transformer: Clone {
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer;

    /// Learn statistics from `table`.
    ///
    /// # Errors
    /// Returns [`TransformError`](crate::TransformError) when a statistic is
    /// undefined for a column (no present values, zero variance).
    fn fit(&self, table: &Table) -> Result<Self::Fitted>;

    /// Fit the transformer and transform the same table in one step.
    fn fit_transform(&self, table: &Table) -> Result<Table> {
        let fitted = self.fit(table)?;
        fitted.transform(table)
    }
}

/// Trait for fitted transformers.
pub trait FittedTransformer: Clone {
    /// Apply the learned statistics, returning a new table.
    ///
    /// # Errors
    /// Returns [`TransformError::UnknownColumn`](crate::TransformError::UnknownColumn)
    /// if `table` lacks a column the transformer needs.
    fn transform(&self, table: &Table) -> Result<Table>;

    /// Names of the columns seen during fit, in order.
    fn columns_in(&self) -> Vec<&str>;
}
