//! In-memory table representation.
//!
//! A [`Table`] is an ordered list of named, equal-length [`Column`]s plus a
//! row count. Column order is insertion order and is preserved by every
//! operation in this crate; rows are never reordered.
//!
//! # Core Concepts
//!
//! - **Column kinds**: each column is `Int`, `Float`, `Bool`, `Text`, or
//!   `Object` ([`ColumnKind`]). Only `Int` and `Float` are numeric.
//! - **Missing values**: a missing cell is `None` in typed storage
//!   ([`ColumnData`]) or [`Value::Null`] in an `Object` column. NaN floats
//!   are normalized to missing on construction.
//! - **Copy semantics**: tables are built fresh from caller input by
//!   [`to_table`] and every operation returns a new owned table.
//!
//! # Example
//!
//! ```
//! use tabprep::table::{Column, Table};
//!
//! let table = Table::new(vec![
//!     Column::int("A", vec![Some(1), Some(2), None, Some(4)]),
//!     Column::text("C", vec![Some("x"), Some("y"), Some("z"), Some("w")]),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.n_rows(), 4);
//! assert_eq!(table.column_names(), vec!["A", "C"]);
//! ```

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, TransformError};

pub mod column;
pub mod convert;
pub mod value;

pub use column::{Column, ColumnData, ColumnKind};
pub use convert::to_table;
pub use value::Value;

/// An ordered collection of named, equal-length columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<Column>,
    n_rows: usize,
}

impl TryFrom<RawTable> for Table {
    type Error = TransformError;

    fn try_from(raw: RawTable) -> Result<Self> {
        Table::with_rows(raw.n_rows, raw.columns)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::empty(0)
    }
}

impl Table {
    /// Build a table from columns; the row count is taken from the first column.
    ///
    /// # Errors
    /// Returns [`TransformError::Conversion`] if column lengths differ or a
    /// column name is repeated.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        Self::with_rows(n_rows, columns)
    }

    /// Build a table with an explicit row count, which every column must match.
    pub fn with_rows(n_rows: usize, columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(TransformError::Conversion(format!(
                    "duplicate column name '{}'",
                    column.name()
                )));
            }
            if column.len() != n_rows {
                return Err(TransformError::Conversion(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name(),
                    column.len(),
                    n_rows
                )));
            }
        }
        Ok(Self { columns, n_rows })
    }

    /// A table with `n_rows` rows and no columns.
    pub fn empty(n_rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            n_rows,
        }
    }

    /// Assemble a table whose columns are already known to be consistent.
    pub(crate) fn from_parts(n_rows: usize, columns: Vec<Column>) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == n_rows));
        Self { columns, n_rows }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Like [`column`](Self::column) but reports an absent name as an error.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| TransformError::UnknownColumn(name.to_string()))
    }

    /// Cell at (`row`, `name`).
    pub fn get(&self, row: usize, name: &str) -> Option<Value> {
        self.column(name).and_then(|c| c.value(row))
    }

    /// Keep the columns matching `keep`, in their current order.
    pub(crate) fn retain<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&Column) -> bool,
    {
        let columns = self.columns.iter().filter(|c| keep(c)).cloned().collect();
        Table::from_parts(self.n_rows, columns)
    }

    /// Numeric columns as a `(rows, numeric columns)` matrix, NaN for missing cells.
    pub fn to_array(&self) -> Array2<f64> {
        let numeric: Vec<Vec<Option<f64>>> =
            self.columns.iter().filter_map(Column::as_f64s).collect();
        Array2::from_shape_fn((self.n_rows, numeric.len()), |(row, col)| {
            numeric[col][row].unwrap_or(f64::NAN)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            Column::int("A", vec![Some(1), Some(2), None, Some(4)]),
            Column::int("B", vec![Some(1), Some(1), Some(1), Some(1)]),
            Column::text("C", vec![Some("x"), Some("y"), Some("z"), Some("w")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_shape_and_order() {
        let table = sample();
        assert_eq!(table.shape(), (4, 3));
        assert_eq!(table.column_names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_table_rejects_ragged_columns() {
        let result = Table::new(vec![
            Column::int("A", vec![Some(1), Some(2)]),
            Column::int("B", vec![Some(1)]),
        ]);
        assert!(matches!(result, Err(TransformError::Conversion(_))));
    }

    #[test]
    fn test_table_rejects_duplicate_names() {
        let result = Table::new(vec![
            Column::int("A", vec![Some(1)]),
            Column::float("A", vec![Some(1.0)]),
        ]);
        assert!(matches!(result, Err(TransformError::Conversion(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_table_get_and_require() {
        let table = sample();
        assert_eq!(table.get(2, "A"), Some(Value::Null));
        assert_eq!(table.get(3, "C"), Some(Value::Text("w".to_string())));
        assert!(matches!(
            table.require_column("Z"),
            Err(TransformError::UnknownColumn(name)) if name == "Z"
        ));
    }

    #[test]
    fn test_retain_preserves_rows() {
        let table = sample();
        let none = table.retain(|_| false);
        assert_eq!(none.shape(), (4, 0));
    }

    #[test]
    fn test_to_array_numeric_only() {
        let table = sample();
        let array = table.to_array();
        assert_eq!(array.dim(), (4, 2));
        assert_eq!(array[[0, 0]], 1.0);
        assert!(array[[2, 0]].is_nan());
        assert_eq!(array[[3, 1]], 1.0);
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let table = sample();
        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);

        let bad = r#"{"columns":[{"name":"A","data":{"kind":"int","values":[1]}}],"n_rows":2}"#;
        assert!(serde_json::from_str::<Table>(bad).is_err());
    }
}
