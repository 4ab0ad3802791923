//! Preprocessing operations over [`Table`](crate::table::Table)s.
//!
//! Every operation takes a table by reference and returns a new table, so
//! the caller's data is never modified and results can be threaded into the
//! next call.
//!
//! # Core Traits
//!
//! - [`Transformer`]: Unfitted transformer with options
//! - [`FittedTransformer`]: Fitted transformer holding per-column statistics
//!
//! # Operations
//!
//! ## Selection
//! - [`drop_columns`]: Remove named columns
//! - [`drop_non_numeric_columns`]: Keep only `Int` and `Float` columns
//! - [`count_missing`]: Missing-cell count per column
//!
//! ## Imputation
//! - [`SimpleImputer`] / [`fill_missing`]: Fill with mean, median, or mode
//!
//! ## Scaling
//! - [`StandardScaler`] / [`standardize`]: Z-score normalization
//!
//! ## Pipeline
//! - [`PreprocessConfig`] / [`standardize_with_fill`]: Filter, impute, exclude, scale
//!
//! # Example
//!
//! ```
//! use tabprep::preprocessing::{standardize_with_fill, Fill};
//! use tabprep::to_table;
//! use serde_json::json;
//!
//! let table = to_table(json!({
//!     "A": [1, 2, null, 4],
//!     "B": [3.5, 1.0, 2.0, 0.5],
//!     "C": ["x", "y", "z", "w"],
//! }))
//! .unwrap();
//!
//! let scaled = standardize_with_fill(&table, &["B"], Fill::Mean).unwrap();
//! assert_eq!(scaled.column_names(), vec!["A"]);
//! assert_eq!(scaled.n_rows(), 4);
//! ```

pub mod imputation;
pub mod pipeline;
pub mod scaling;
pub mod selection;
pub mod traits;

pub use imputation::{fill_missing, FillStrategy, FittedSimpleImputer, ImputeStatistic, SimpleImputer};
pub use pipeline::{standardize_with_fill, Fill, PreprocessConfig};
pub use scaling::{standardize, FittedStandardScaler, ScaleParams, StandardScaler};
pub use selection::{count_missing, drop_columns, drop_non_numeric_columns, MissingCounts};
pub use traits::{FittedTransformer, Transformer};
