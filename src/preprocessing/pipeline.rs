//! Combined imputation and standardization.
//!
//! The order of operations is fixed:
//!
//! 1. keep numeric columns only,
//! 2. impute missing values (unless [`Fill::None`]),
//! 3. remove the excluded columns,
//! 4. standardize what is left.
//!
//! Every imputed statistic is per-column and excluded columns are removed
//! from the output, so imputation skips them. Their values never affect the
//! result, even when they are entirely missing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TransformError};
use crate::preprocessing::imputation::{fill_missing, FillStrategy};
use crate::preprocessing::scaling::standardize_excluding;
use crate::preprocessing::selection::{drop_non_numeric_columns, require_known};
use crate::table::Table;

/// Imputation choice for [`standardize_with_fill`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    /// Leave missing cells as they are.
    #[default]
    None,
    Mean,
    Median,
    Mode,
}

impl Fill {
    /// The imputation strategy, or `None` for [`Fill::None`].
    pub fn strategy(self) -> Option<FillStrategy> {
        match self {
            Fill::None => None,
            Fill::Mean => Some(FillStrategy::Mean),
            Fill::Median => Some(FillStrategy::Median),
            Fill::Mode => Some(FillStrategy::Mode),
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy() {
            Some(strategy) => fmt::Display::fmt(&strategy, f),
            None => f.write_str("none"),
        }
    }
}

impl From<FillStrategy> for Fill {
    fn from(strategy: FillStrategy) -> Self {
        Some(strategy).into()
    }
}

impl From<Option<FillStrategy>> for Fill {
    fn from(strategy: Option<FillStrategy>) -> Self {
        match strategy {
            None => Fill::None,
            Some(FillStrategy::Mean) => Fill::Mean,
            Some(FillStrategy::Median) => Fill::Median,
            Some(FillStrategy::Mode) => Fill::Mode,
        }
    }
}

impl FromStr for Fill {
    type Err = TransformError;

    /// Accepts `none`, `mean`, `median`, `mode` in any case.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(Fill::None);
        }
        s.parse::<FillStrategy>().map(Fill::from)
    }
}

impl TryFrom<&str> for Fill {
    type Error = TransformError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Fill {
    type Error = TransformError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Options for the combined fill-and-scale operation.
///
/// # Example
/// ```
/// use tabprep::preprocessing::{Fill, PreprocessConfig};
/// use tabprep::table::{Column, Table};
///
/// let table = Table::new(vec![
///     Column::float("a", vec![Some(1.0), None, Some(3.0)]),
///     Column::int("id", vec![Some(1), Some(2), Some(3)]),
/// ])
/// .unwrap();
///
/// let config = PreprocessConfig::new()
///     .with_drop_columns(["id"])
///     .with_fill(Fill::Mean);
/// let out = config.run(&table).unwrap();
/// assert_eq!(out.column_names(), vec!["a"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Columns excluded from scaling and from the output.
    pub drop_columns: Vec<String>,
    /// Imputation applied before scaling.
    pub fill: Fill,
}

impl PreprocessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the columns to exclude.
    pub fn with_drop_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the imputation choice.
    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Filter numeric columns, impute, exclude, and standardize `table`.
    ///
    /// # Errors
    /// - [`TransformError::UnknownColumn`] if an excluded name is not a column of `table`.
    /// - [`TransformError::EmptyColumn`] / [`TransformError::DegenerateColumn`]
    ///   from imputation or scaling.
    pub fn run(&self, table: &Table) -> Result<Table> {
        require_known(table, &self.drop_columns)?;
        tracing::debug!(
            rows = table.n_rows(),
            columns = table.n_columns(),
            fill = %self.fill,
            excluded = self.drop_columns.len(),
            "running fill and scale"
        );

        let numeric = drop_non_numeric_columns(table);
        let imputed = match self.fill.strategy() {
            Some(strategy) => {
                let kept = numeric.retain(|c| !self.drop_columns.iter().any(|n| n == c.name()));
                fill_missing(&kept, strategy)?
            }
            None => numeric,
        };
        standardize_excluding(&imputed, &self.drop_columns)
    }
}

/// Optionally impute, then standardize the numeric columns of `table`.
///
/// `fill` may be a [`Fill`], an `Option<FillStrategy>`, or a string such as
/// `"median"`.
///
/// # Errors
/// - [`TransformError::UnknownStrategy`] naming an unrecognised `fill` string.
/// - Any error of [`PreprocessConfig::run`].
///
/// # Example
/// ```
/// use tabprep::{standardize_with_fill, TransformError};
/// use tabprep::table::{Column, Table};
///
/// let table = Table::new(vec![Column::float("a", vec![Some(1.0), None, Some(3.0)])]).unwrap();
///
/// let out = standardize_with_fill(&table, &[] as &[&str], "median").unwrap();
/// assert_eq!(out.column("a").unwrap().missing_count(), 0);
///
/// let err = standardize_with_fill(&table, &[] as &[&str], "bogus").unwrap_err();
/// assert_eq!(err, TransformError::UnknownStrategy("bogus".to_string()));
/// ```
pub fn standardize_with_fill<S, F>(table: &Table, drop_columns: &[S], fill: F) -> Result<Table>
where
    S: AsRef<str>,
    F: TryInto<Fill>,
    TransformError: From<F::Error>,
{
    let fill = fill.try_into()?;
    PreprocessConfig::new()
        .with_drop_columns(drop_columns.iter().map(|c| c.as_ref().to_string()))
        .with_fill(fill)
        .run(table)
}
