//! # tabprep
//!
//! Preprocessing helpers for tabular data: drop columns, drop non-numeric
//! columns, count missing values, impute missing values (mean, median,
//! mode), and standardize numeric columns to zero mean and unit variance.
//!
//! ## Core Design Principles
//!
//! - **Copy semantics**: every operation borrows a [`Table`] and returns a new
//!   one. Caller data is never mutated and no state survives between calls.
//! - **Typed failures**: every operation returns [`Result`] with a
//!   [`TransformError`] naming the offending column or option.
//! - **Fit/transform split**: imputation and scaling are [`Transformer`]s
//!   whose fitted form exposes the learned statistics and can be applied to
//!   other tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabprep::{count_missing, drop_non_numeric_columns, fill_missing, standardize, FillStrategy, Value};
//!
//! let rows = vec![
//!     vec![Value::Int(1), Value::Int(1), Value::from("x")],
//!     vec![Value::Int(2), Value::Int(1), Value::from("y")],
//!     vec![Value::Null, Value::Int(1), Value::from("z")],
//!     vec![Value::Int(4), Value::Int(1), Value::from("w")],
//! ];
//! let table = tabprep::to_table(rows).unwrap();
//!
//! let numeric = drop_non_numeric_columns(&table);
//! assert_eq!(numeric.column_names(), vec!["0", "1"]);
//!
//! let filled = fill_missing(&table, FillStrategy::Mean).unwrap();
//! assert_eq!(count_missing(&filled).total(), 0);
//!
//! // Column "1" is constant and cannot be standardized.
//! assert!(standardize(&filled, &[] as &[&str]).is_err());
//! assert!(standardize(&filled, &["1"]).is_ok());
//! ```
//!
//! ## Module Structure
//!
//! - `table`: `Table`, typed columns, and conversion from rows, `ndarray`, and JSON
//! - `preprocessing`: selection, imputation, scaling, and the combined pipeline
//! - `error`: the `TransformError` taxonomy

/// Error taxonomy shared by all operations.
pub mod error;

/// Data preprocessing operations and transformers.
pub mod preprocessing;

/// Table representation and input conversion.
pub mod table;

pub use error::{ErrorKind, Result, TransformError};
pub use preprocessing::{
    count_missing, drop_columns, drop_non_numeric_columns, fill_missing, standardize,
    standardize_with_fill, Fill, FillStrategy, FittedSimpleImputer, FittedStandardScaler,
    FittedTransformer, MissingCounts, PreprocessConfig, SimpleImputer, StandardScaler,
    Transformer,
};
pub use table::{to_table, Column, ColumnData, ColumnKind, Table, Value};
