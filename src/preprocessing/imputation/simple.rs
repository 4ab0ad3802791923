//! Simple Imputer.
//!
//! Imputation transformer for completing missing values in numeric columns.
//! Supports mean, median, and mode strategies.
//!
//! Non-numeric columns are dropped before fitting and transforming, so the
//! output contains only numeric columns.
//!
//! # Example
//! ```
//! use tabprep::preprocessing::{FillStrategy, FittedTransformer, SimpleImputer, Transformer};
//! use tabprep::table::{Column, Table};
//!
//! let table = Table::new(vec![Column::int("a", vec![Some(1), Some(2), None, Some(4)])]).unwrap();
//! let fitted = SimpleImputer::new(FillStrategy::Median).fit(&table).unwrap();
//! let imputed = fitted.transform(&table).unwrap();
//! assert_eq!(imputed.column("a").unwrap().as_f64s().unwrap()[2], Some(2.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TransformError};
use crate::preprocessing::selection::drop_non_numeric_columns;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::{Column, ColumnData, Table, Value};

/// Strategy for imputing missing values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStrategy {
    /// Replace missing values with the mean of each column.
    #[default]
    Mean,
    /// Replace missing values with the median of each column.
    Median,
    /// Replace missing values with the most frequent value of each column;
    /// ties go to the smallest value.
    Mode,
}

impl FillStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            FillStrategy::Mean => "mean",
            FillStrategy::Median => "median",
            FillStrategy::Mode => "mode",
        }
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillStrategy {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mean" => Ok(FillStrategy::Mean),
            "median" => Ok(FillStrategy::Median),
            "mode" => Ok(FillStrategy::Mode),
            _ => Err(TransformError::UnknownStrategy(s.to_string())),
        }
    }
}

/// The fill value learned for one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImputeStatistic {
    /// Column name.
    pub column: String,
    /// `None` when the column had no present values during fit.
    pub value: Option<Value>,
}

/// SimpleImputer transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct SimpleImputer {
    strategy: FillStrategy,
}

impl SimpleImputer {
    /// Create a new SimpleImputer with the specified strategy.
    pub fn new(strategy: FillStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> FillStrategy {
        self.strategy
    }
}

fn sort_f64(values: &mut [f64]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

fn median(mut values: Vec<f64>) -> f64 {
    sort_f64(&mut values);
    let n = values.len();
    if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    }
}

/// Most frequent value of an already sorted slice; the first (smallest)
/// wins among equally frequent values.
fn sorted_mode<T: PartialEq + Copy>(sorted: &[T]) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    let mut i = 0;
    while i < sorted.len() {
        let run = sorted[i..].iter().take_while(|&&v| v == sorted[i]).count();
        if best.map_or(true, |(_, count)| run > count) {
            best = Some((sorted[i], run));
        }
        i += run;
    }
    best.map(|(v, _)| v)
}

/// Compute the fill value for one column, ignoring missing cells.
///
/// Returns `None` if the column has no present values.
fn compute_statistic(data: &ColumnData, strategy: FillStrategy) -> Option<Value> {
    match (strategy, data) {
        (FillStrategy::Mode, ColumnData::Int(cells)) => {
            let mut present: Vec<i64> = cells.iter().flatten().copied().collect();
            present.sort_unstable();
            sorted_mode(&present).map(Value::Int)
        }
        (FillStrategy::Mode, _) => {
            let mut present = data.present_f64s();
            sort_f64(&mut present);
            sorted_mode(&present).map(Value::Float)
        }
        (FillStrategy::Mean, _) => {
            let present = data.present_f64s();
            if present.is_empty() {
                return None;
            }
            let mean = present.iter().sum::<f64>() / present.len() as f64;
            Some(Value::Float(mean))
        }
        (FillStrategy::Median, _) => {
            let present = data.present_f64s();
            if present.is_empty() {
                return None;
            }
            Some(Value::Float(median(present)))
        }
    }
}

/// Replace missing cells of a numeric column with `fill`.
///
/// An `Int` column stays `Int` only when the fill value is an integer.
fn fill_column(data: &ColumnData, fill: &Value) -> ColumnData {
    match (data, fill) {
        (ColumnData::Int(cells), Value::Int(v)) => {
            ColumnData::Int(cells.iter().map(|c| Some(c.unwrap_or(*v))).collect())
        }
        _ => {
            let fill = fill.as_f64();
            let cells = data.as_f64s().unwrap_or_default();
            ColumnData::Float(cells.into_iter().map(|c| c.or(fill)).collect())
        }
    }
}

impl Transformer for SimpleImputer {
    type Fitted = FittedSimpleImputer;

    fn fit(&self, table: &Table) -> Result<Self::Fitted> {
        let numeric = drop_non_numeric_columns(table);

        let mut statistics = Vec::with_capacity(numeric.n_columns());
        for column in numeric.columns() {
            let value = compute_statistic(column.data(), self.strategy);
            if value.is_none() && column.missing_count() > 0 {
                return Err(TransformError::EmptyColumn(column.name().to_string()));
            }
            tracing::trace!(
                column = column.name(),
                strategy = %self.strategy,
                value = ?value,
                "computed fill value"
            );
            statistics.push(ImputeStatistic {
                column: column.name().to_string(),
                value,
            });
        }

        Ok(FittedSimpleImputer {
            strategy: self.strategy,
            statistics,
        })
    }
}

/// Fitted SimpleImputer ready for inference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedSimpleImputer {
    strategy: FillStrategy,
    statistics: Vec<ImputeStatistic>,
}

impl FittedSimpleImputer {
    pub fn strategy(&self) -> FillStrategy {
        self.strategy
    }

    /// Get the fill value learned for each numeric column.
    pub fn statistics(&self) -> &[ImputeStatistic] {
        &self.statistics
    }

    /// Fill value for `column`, if one was learned.
    pub fn statistic(&self, column: &str) -> Option<&Value> {
        self.statistics
            .iter()
            .find(|s| s.column == column)
            .and_then(|s| s.value.as_ref())
    }
}

impl FittedTransformer for FittedSimpleImputer {
    fn transform(&self, table: &Table) -> Result<Table> {
        let numeric = drop_non_numeric_columns(table);

        let mut columns = Vec::with_capacity(numeric.n_columns());
        for column in numeric.into_columns() {
            let missing = column.missing_count();
            if missing == 0 {
                columns.push(column);
                continue;
            }
            let statistic = self
                .statistics
                .iter()
                .find(|s| s.column == column.name())
                .ok_or_else(|| TransformError::UnknownColumn(column.name().to_string()))?;
            let fill = statistic
                .value
                .as_ref()
                .ok_or_else(|| TransformError::EmptyColumn(column.name().to_string()))?;

            tracing::debug!(column = column.name(), missing, fill = %fill, "imputed column");
            let data = fill_column(column.data(), fill);
            columns.push(Column::new(column.name(), data));
        }

        Ok(Table::from_parts(table.n_rows(), columns))
    }

    fn columns_in(&self) -> Vec<&str> {
        self.statistics.iter().map(|s| s.column.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::selection::count_missing;

    fn create_test_table_with_missing() -> Table {
        // a: [1, NaN, 3, 5], b: [NaN, 4, 6, 6], c: text
        Table::new(vec![
            Column::float("a", vec![Some(1.0), None, Some(3.0), Some(5.0)]),
            Column::int("b", vec![None, Some(4), Some(6), Some(6)]),
            Column::text("c", vec![Some("x"), None, Some("y"), Some("z")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_simple_imputer_mean() {
        let table = create_test_table_with_missing();
        let fitted = SimpleImputer::new(FillStrategy::Mean).fit(&table).unwrap();

        // a: mean of [1, 3, 5] = 3, b: mean of [4, 6, 6] = 16/3
        assert_eq!(fitted.statistic("a"), Some(&Value::Float(3.0)));
        let b = fitted.statistic("b").and_then(Value::as_f64).unwrap();
        assert!((b - 16.0 / 3.0).abs() < 1e-12);

        let imputed = fitted.transform(&table).unwrap();
        assert_eq!(imputed.column_names(), vec!["a", "b"]);
        let a = imputed.column("a").unwrap().as_f64s().unwrap();
        assert_eq!(a, vec![Some(1.0), Some(3.0), Some(3.0), Some(5.0)]);
    }

    #[test]
    fn test_simple_imputer_median() {
        let table = create_test_table_with_missing();
        let fitted = SimpleImputer::new(FillStrategy::Median).fit(&table).unwrap();

        // a: median of [1, 3, 5] = 3, b: median of [4, 6, 6] = 6
        assert_eq!(fitted.statistic("a"), Some(&Value::Float(3.0)));
        assert_eq!(fitted.statistic("b"), Some(&Value::Float(6.0)));
    }

    #[test]
    fn test_simple_imputer_median_even_count() {
        let table = Table::new(vec![Column::int("a", vec![Some(4), None, Some(1), Some(3), Some(2)])])
            .unwrap();
        let fitted = SimpleImputer::new(FillStrategy::Median).fit(&table).unwrap();
        assert_eq!(fitted.statistic("a"), Some(&Value::Float(2.5)));
    }

    #[test]
    fn test_simple_imputer_mode_keeps_int() {
        let table = create_test_table_with_missing();
        let imputed = SimpleImputer::new(FillStrategy::Mode)
            .fit_transform(&table)
            .unwrap();

        let b = imputed.column("b").unwrap();
        assert_eq!(b.as_i64s(), Some(&[Some(6), Some(4), Some(6), Some(6)][..]));
    }

    #[test]
    fn test_simple_imputer_mode_tie_takes_smallest() {
        let table = Table::new(vec![
            Column::float("a", vec![Some(3.0), Some(1.0), Some(3.0), Some(1.0), None]),
            Column::int("b", vec![Some(9), Some(-2), Some(9), Some(-2), None]),
        ])
        .unwrap();
        let fitted = SimpleImputer::new(FillStrategy::Mode).fit(&table).unwrap();
        assert_eq!(fitted.statistic("a"), Some(&Value::Float(1.0)));
        assert_eq!(fitted.statistic("b"), Some(&Value::Int(-2)));
    }

    #[test]
    fn test_simple_imputer_int_mean_becomes_float() {
        let table =
            Table::new(vec![Column::int("A", vec![Some(1), Some(2), None, Some(4)])]).unwrap();
        let imputed = SimpleImputer::new(FillStrategy::Mean)
            .fit_transform(&table)
            .unwrap();
        let a = imputed.column("A").unwrap().as_f64s().unwrap();
        assert!((a[2].unwrap() - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(a[0], Some(1.0));
    }

    #[test]
    fn test_simple_imputer_untouched_columns() {
        let table = Table::new(vec![
            Column::int("full", vec![Some(1), Some(2), Some(3)]),
            Column::float("gap", vec![Some(1.0), None, Some(3.0)]),
        ])
        .unwrap();
        let imputed = SimpleImputer::new(FillStrategy::Mean)
            .fit_transform(&table)
            .unwrap();
        assert_eq!(imputed.column("full"), table.column("full"));
        assert_eq!(count_missing(&imputed).total(), 0);
    }

    #[test]
    fn test_simple_imputer_all_missing_column() {
        let table = Table::new(vec![
            Column::float("a", vec![Some(1.0), Some(2.0)]),
            Column::float("empty", vec![None, None]),
        ])
        .unwrap();
        let result = SimpleImputer::new(FillStrategy::Median).fit(&table);
        assert!(matches!(result, Err(TransformError::EmptyColumn(name)) if name == "empty"));
    }

    #[test]
    fn test_simple_imputer_zero_rows() {
        let table = Table::new(vec![Column::float("a", vec![])]).unwrap();
        let imputed = SimpleImputer::new(FillStrategy::Mean)
            .fit_transform(&table)
            .unwrap();
        assert_eq!(imputed.shape(), (0, 1));
    }

    #[test]
    fn test_simple_imputer_transform_unseen_column() {
        let train = Table::new(vec![Column::float("a", vec![Some(1.0), Some(2.0)])]).unwrap();
        let fitted = SimpleImputer::new(FillStrategy::Mean).fit(&train).unwrap();

        let other = Table::new(vec![Column::float("z", vec![None, Some(2.0)])]).unwrap();
        let result = fitted.transform(&other);
        assert!(matches!(result, Err(TransformError::UnknownColumn(name)) if name == "z"));
    }

    #[test]
    fn test_simple_imputer_columns_in() {
        let table = create_test_table_with_missing();
        let fitted = SimpleImputer::new(FillStrategy::Mean).fit(&table).unwrap();
        assert_eq!(fitted.columns_in(), vec!["a", "b"]);
    }

    #[test]
    fn test_fill_strategy_parse() {
        assert_eq!("mean".parse::<FillStrategy>().unwrap(), FillStrategy::Mean);
        assert_eq!("Median".parse::<FillStrategy>().unwrap(), FillStrategy::Median);
        assert_eq!("MODE".parse::<FillStrategy>().unwrap(), FillStrategy::Mode);

        let err = "bogus".parse::<FillStrategy>().unwrap_err();
        assert_eq!(err, TransformError::UnknownStrategy("bogus".to_string()));
    }
}
