//! Standard Scaler (Z-score normalization).
//!
//! Transforms numeric columns by removing the mean and scaling to unit variance.
//!
//! The standard score of a value `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the column's present values and `s` is their
//! population standard deviation (ddof = 0). Missing cells stay missing.
//!
//! # Example
//! ```
//! use tabprep::preprocessing::{FittedTransformer, StandardScaler, Transformer};
//! use tabprep::table::{Column, Table};
//!
//! let table = Table::new(vec![Column::float("a", vec![Some(0.0), Some(0.0), Some(1.0)])]).unwrap();
//! let fitted = StandardScaler::new().fit(&table).unwrap();
//! let scaled = fitted.transform(&table).unwrap();
//! let restored = fitted.inverse_transform(&scaled).unwrap();
//! assert!((restored.column("a").unwrap().as_f64s().unwrap()[2].unwrap() - 1.0).abs() < 1e-12);
//! ```

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};
use crate::preprocessing::selection::drop_non_numeric_columns;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::{Column, Table};

/// Mean and standard deviation learned for one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleParams {
    pub column: String,
    pub mean: f64,
    /// Population standard deviation (ddof = 0); never zero.
    pub std: f64,
}

/// StandardScaler transformer (unfitted).
///
/// Fits every numeric column of the input; non-numeric columns are ignored.
#[derive(Clone, Debug, Default)]
pub struct StandardScaler;

impl StandardScaler {
    /// Create a new StandardScaler.
    pub fn new() -> Self {
        Self
    }
}

fn fit_column(column: &Column) -> Result<ScaleParams> {
    let present = Array1::from(column.data().present_f64s());
    let mean = present
        .mean()
        .ok_or_else(|| TransformError::EmptyColumn(column.name().to_string()))?;
    let std = present.std(0.0);

    let first = present[0];
    if std == 0.0 || present.iter().all(|&v| v == first) {
        return Err(TransformError::DegenerateColumn(column.name().to_string()));
    }

    Ok(ScaleParams {
        column: column.name().to_string(),
        mean,
        std,
    })
}

impl Transformer for StandardScaler {
    type Fitted = FittedStandardScaler;

    fn fit(&self, table: &Table) -> Result<Self::Fitted> {
        let numeric = drop_non_numeric_columns(table);

        let params = numeric
            .columns()
            .iter()
            .map(fit_column)
            .collect::<Result<Vec<_>>>()?;
        for p in &params {
            tracing::trace!(column = %p.column, mean = p.mean, std = p.std, "fitted column");
        }

        Ok(FittedStandardScaler { params })
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedStandardScaler {
    params: Vec<ScaleParams>,
}

impl FittedStandardScaler {
    /// Per-column mean and standard deviation, in fitted column order.
    pub fn params(&self) -> &[ScaleParams] {
        &self.params
    }

    /// Get the mean values for each fitted column.
    pub fn mean(&self) -> Vec<f64> {
        self.params.iter().map(|p| p.mean).collect()
    }

    /// Get the standard deviation values for each fitted column.
    pub fn std(&self) -> Vec<f64> {
        self.params.iter().map(|p| p.std).collect()
    }

    /// Apply `f(value, params)` to every present cell of each fitted column.
    fn map_columns<F>(&self, table: &Table, f: F) -> Result<Table>
    where
        F: Fn(f64, &ScaleParams) -> f64,
    {
        let columns = self
            .params
            .iter()
            .map(|p| {
                let cells = table
                    .column(&p.column)
                    .and_then(Column::as_f64s)
                    .ok_or_else(|| TransformError::UnknownColumn(p.column.clone()))?;
                let scaled = cells.into_iter().map(|c| c.map(|v| f(v, p))).collect();
                Ok(Column::float(p.column.as_str(), scaled))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Table::from_parts(table.n_rows(), columns))
    }

    /// Map standardized values back to the original scale.
    ///
    /// # Errors
    /// Returns [`TransformError::UnknownColumn`] if a fitted column is absent
    /// or not numeric.
    pub fn inverse_transform(&self, table: &Table) -> Result<Table> {
        self.map_columns(table, |v, p| v * p.std + p.mean)
    }
}

impl FittedTransformer for FittedStandardScaler {
    /// Standardize the fitted columns of `table`; other columns are left out
    /// of the result.
    fn transform(&self, table: &Table) -> Result<Table> {
        self.map_columns(table, |v, p| (v - p.mean) / p.std)
    }

    fn columns_in(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.column.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> Table {
        // a: [0, 0, 1], b: [1, 1, 3], c: text
        Table::new(vec![
            Column::int("a", vec![Some(0), Some(0), Some(1)]),
            Column::float("b", vec![Some(1.0), Some(1.0), Some(3.0)]),
            Column::text("c", vec![Some("x"), Some("y"), Some("z")]),
        ])
        .unwrap()
    }

    fn mean_and_std(values: &[f64]) -> (f64, f64) {
        let arr = Array1::from(values.to_vec());
        (arr.mean().unwrap(), arr.std(0.0))
    }

    #[test]
    fn test_standard_scaler_fit() {
        let table = create_test_table();
        let fitted = StandardScaler::new().fit(&table).unwrap();

        // Mean: [1/3, 5/3]
        let mean = fitted.mean();
        assert!((mean[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((mean[1] - 5.0 / 3.0).abs() < 1e-12);

        // Population std of [0, 0, 1] is sqrt(2)/3
        let std = fitted.std();
        assert!((std[0] - 2f64.sqrt() / 3.0).abs() < 1e-12);
        assert_eq!(fitted.columns_in(), vec!["a", "b"]);
    }

    #[test]
    fn test_standard_scaler_transform() {
        let table = create_test_table();
        let transformed = StandardScaler::new().fit_transform(&table).unwrap();
        assert_eq!(transformed.column_names(), vec!["a", "b"]);

        for column in transformed.columns() {
            let values: Vec<f64> = column.as_f64s().unwrap().into_iter().flatten().collect();
            let (mean, std) = mean_and_std(&values);
            assert!(mean.abs() < 1e-10, "mean[{}] = {}", column.name(), mean);
            assert!((std - 1.0).abs() < 1e-10, "std[{}] = {}", column.name(), std);
        }
    }

    #[test]
    fn test_standard_scaler_inverse_transform() {
        let table = create_test_table();
        let fitted = StandardScaler::new().fit(&table).unwrap();

        let transformed = fitted.transform(&table).unwrap();
        let recovered = fitted.inverse_transform(&transformed).unwrap();

        for name in ["a", "b"] {
            let original = table.column(name).unwrap().as_f64s().unwrap();
            let back = recovered.column(name).unwrap().as_f64s().unwrap();
            for (o, r) in original.iter().zip(back.iter()) {
                assert!((o.unwrap() - r.unwrap()).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_standard_scaler_missing_cells_stay_missing() {
        let table = Table::new(vec![Column::float(
            "a",
            vec![Some(1.0), None, Some(3.0)],
        )])
        .unwrap();
        let fitted = StandardScaler::new().fit(&table).unwrap();
        assert!((fitted.mean()[0] - 2.0).abs() < 1e-12);
        assert!((fitted.std()[0] - 1.0).abs() < 1e-12);

        let scaled = fitted.transform(&table).unwrap();
        let values = scaled.column("a").unwrap().as_f64s().unwrap();
        assert!((values[0].unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(values[1], None);
        assert!((values[2].unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_standard_scaler_constant_column() {
        let table = Table::new(vec![
            Column::float("x", vec![Some(1.0), Some(2.0), Some(3.0)]),
            Column::float("const", vec![Some(0.1), Some(0.1), Some(0.1)]),
        ])
        .unwrap();
        let result = StandardScaler::new().fit(&table);
        assert!(matches!(result, Err(TransformError::DegenerateColumn(name)) if name == "const"));
    }

    #[test]
    fn test_standard_scaler_empty_column() {
        let table = Table::new(vec![Column::float("a", vec![None, None])]).unwrap();
        let result = StandardScaler::new().fit(&table);
        assert!(matches!(result, Err(TransformError::EmptyColumn(name)) if name == "a"));
    }

    #[test]
    fn test_standard_scaler_transform_missing_column() {
        let table = create_test_table();
        let fitted = StandardScaler::new().fit(&table).unwrap();

        let other = Table::new(vec![Column::int("a", vec![Some(5)])]).unwrap();
        let result = fitted.transform(&other);
        assert!(matches!(result, Err(TransformError::UnknownColumn(name)) if name == "b"));
    }

    #[test]
    fn test_standard_scaler_transform_new_data() {
        let table = create_test_table();
        let fitted = StandardScaler::new().fit(&table).unwrap();

        let new_data = Table::new(vec![
            Column::float("b", vec![Some(5.0 / 3.0)]),
            Column::int("a", vec![Some(0)]),
        ])
        .unwrap();
        let scaled = fitted.transform(&new_data).unwrap();
        // Output follows fitted order, not input order.
        assert_eq!(scaled.column_names(), vec!["a", "b"]);
        let b = scaled.get(0, "b").and_then(|v| v.as_f64()).unwrap();
        assert!(b.abs() < 1e-12);
    }
}
