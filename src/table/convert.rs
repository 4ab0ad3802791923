//! Conversion of array-like and table-like input into a [`Table`].
//!
//! Every supported input implements `TryFrom<_> for Table` with
//! [`TransformError`] as the error type, so [`to_table`] accepts any of them:
//!
//! | Input | Column names |
//! |-------|--------------|
//! | `Vec<Vec<Value>>` (rows) | `"0"`, `"1"`, ... |
//! | `Vec<Value>` (one column) | `"0"` |
//! | `ndarray::Array2<f64>` / `ArrayView2<f64>` | `"0"`, `"1"`, ... |
//! | `ndarray::Array1<f64>` / `ArrayView1<f64>` | `"0"` |
//! | `serde_json::Value`: array of arrays | `"0"`, `"1"`, ... |
//! | `serde_json::Value`: array of scalars | `"0"` |
//! | `serde_json::Value`: array of objects (records) | keys, first appearance |
//! | `serde_json::Value`: object of arrays | keys, in order |
//! | `Vec<(String, Vec<Value>)>` | given |
//! | `Vec<Column>` | given |
//!
//! Input is always copied; the returned table never aliases caller storage.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde_json::Value as Json;
use std::collections::HashMap;

use super::column::Column;
use super::value::Value;
use super::Table;
use crate::error::{Result, TransformError};

/// Convert any supported input into a [`Table`].
///
/// # Errors
/// Returns [`TransformError::Conversion`] if the input is not rectangular
/// (ragged rows, unequal column lengths), repeats a column name, nests
/// arrays or objects inside cells, or is a JSON scalar.
///
/// # Example
/// ```
/// use tabprep::{to_table, Value};
///
/// let rows = vec![
///     vec![Value::Int(1), Value::from("x")],
///     vec![Value::Null, Value::from("y")],
/// ];
/// let table = to_table(rows).unwrap();
/// assert_eq!(table.column_names(), vec!["0", "1"]);
/// assert_eq!(table.column("0").unwrap().missing_count(), 1);
/// ```
pub fn to_table<T>(input: T) -> Result<Table>
where
    T: TryInto<Table, Error = TransformError>,
{
    let table = input.try_into()?;
    tracing::debug!(
        rows = table.n_rows(),
        columns = table.n_columns(),
        "converted input to table"
    );
    Ok(table)
}

impl Table {
    /// Parse JSON text and convert it with the JSON rules of [`to_table`].
    pub fn from_json_str(text: &str) -> Result<Table> {
        let json: Json = serde_json::from_str(text)?;
        to_table(json)
    }
}

fn default_names(width: usize) -> impl Iterator<Item = String> {
    (0..width).map(|i| i.to_string())
}

fn columns_from_rows(rows: Vec<Vec<Value>>) -> Result<Table> {
    let n_rows = rows.len();
    let width = rows.first().map(Vec::len).unwrap_or(0);

    let mut cells: Vec<Vec<Value>> = (0..width).map(|_| Vec::with_capacity(n_rows)).collect();
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(TransformError::Conversion(format!(
                "row {} has {} values, expected {}",
                i,
                row.len(),
                width
            )));
        }
        for (col, value) in row.into_iter().enumerate() {
            cells[col].push(value);
        }
    }

    let columns = default_names(width)
        .zip(cells)
        .map(|(name, values)| Column::from_values(name, values))
        .collect();
    Table::with_rows(n_rows, columns)
}

impl TryFrom<Vec<Vec<Value>>> for Table {
    type Error = TransformError;

    fn try_from(rows: Vec<Vec<Value>>) -> Result<Self> {
        columns_from_rows(rows)
    }
}

impl TryFrom<Vec<Value>> for Table {
    type Error = TransformError;

    fn try_from(values: Vec<Value>) -> Result<Self> {
        let n_rows = values.len();
        Table::with_rows(n_rows, vec![Column::from_values("0", values)])
    }
}

impl TryFrom<Vec<(String, Vec<Value>)>> for Table {
    type Error = TransformError;

    fn try_from(named: Vec<(String, Vec<Value>)>) -> Result<Self> {
        let columns = named
            .into_iter()
            .map(|(name, values)| Column::from_values(name, values))
            .collect();
        Table::new(columns)
    }
}

impl TryFrom<Vec<Column>> for Table {
    type Error = TransformError;

    fn try_from(columns: Vec<Column>) -> Result<Self> {
        Table::new(columns)
    }
}

impl TryFrom<ArrayView2<'_, f64>> for Table {
    type Error = TransformError;

    fn try_from(array: ArrayView2<'_, f64>) -> Result<Self> {
        let columns = default_names(array.ncols())
            .zip(array.axis_iter(Axis(1)))
            .map(|(name, col)| Column::float(name, col.iter().map(|&v| Some(v)).collect()))
            .collect();
        Table::with_rows(array.nrows(), columns)
    }
}

impl TryFrom<Array2<f64>> for Table {
    type Error = TransformError;

    fn try_from(array: Array2<f64>) -> Result<Self> {
        Table::try_from(array.view())
    }
}

impl TryFrom<&Array2<f64>> for Table {
    type Error = TransformError;

    fn try_from(array: &Array2<f64>) -> Result<Self> {
        Table::try_from(array.view())
    }
}

impl TryFrom<ArrayView1<'_, f64>> for Table {
    type Error = TransformError;

    fn try_from(array: ArrayView1<'_, f64>) -> Result<Self> {
        let column = Column::float("0", array.iter().map(|&v| Some(v)).collect());
        Table::with_rows(array.len(), vec![column])
    }
}

impl TryFrom<Array1<f64>> for Table {
    type Error = TransformError;

    fn try_from(array: Array1<f64>) -> Result<Self> {
        Table::try_from(array.view())
    }
}

impl TryFrom<&Array1<f64>> for Table {
    type Error = TransformError;

    fn try_from(array: &Array1<f64>) -> Result<Self> {
        Table::try_from(array.view())
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Convert a JSON scalar into a cell; `location` names the cell for errors.
fn json_cell(json: Json, location: impl FnOnce() -> String) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(b)),
        Json::Number(n) => Ok(match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        }),
        Json::String(s) => Ok(Value::Text(s)),
        nested => Err(TransformError::Conversion(format!(
            "nested {} at {}",
            json_kind(&nested),
            location()
        ))),
    }
}

fn table_from_json_rows(rows: Vec<Json>) -> Result<Table> {
    let mut parsed = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let cells = match row {
            Json::Array(cells) => cells,
            other => {
                return Err(TransformError::Conversion(format!(
                    "row {} is a JSON {}, expected array",
                    i,
                    json_kind(&other)
                )));
            }
        };
        let values = cells
            .into_iter()
            .enumerate()
            .map(|(j, cell)| json_cell(cell, || format!("row {}, column {}", i, j)))
            .collect::<Result<Vec<_>>>()?;
        parsed.push(values);
    }
    columns_from_rows(parsed)
}

fn table_from_json_series(items: Vec<Json>) -> Result<Table> {
    let values = items
        .into_iter()
        .enumerate()
        .map(|(row, cell)| json_cell(cell, || format!("row {}", row)))
        .collect::<Result<Vec<_>>>()?;
    Table::try_from(values)
}

fn table_from_json_records(records: Vec<Json>) -> Result<Table> {
    let n_rows = records.len();
    let mut names: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut cells: Vec<Vec<Value>> = Vec::new();

    for (i, record) in records.into_iter().enumerate() {
        let fields = match record {
            Json::Object(fields) => fields,
            other => {
                return Err(TransformError::Conversion(format!(
                    "record {} is a JSON {}, expected object",
                    i,
                    json_kind(&other)
                )));
            }
        };
        for (key, cell) in fields {
            let value = json_cell(cell, || format!("record {}, key '{}'", i, key))?;
            let col = match index.get(&key) {
                Some(&col) => col,
                None => {
                    // Earlier records lacked this key.
                    index.insert(key.clone(), names.len());
                    names.push(key);
                    cells.push(vec![Value::Null; i]);
                    cells.len() - 1
                }
            };
            cells[col].push(value);
        }
        for column in cells.iter_mut() {
            column.resize(i + 1, Value::Null);
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::from_values(name, values))
        .collect();
    Table::with_rows(n_rows, columns)
}

fn table_from_json_columns(fields: serde_json::Map<String, Json>) -> Result<Table> {
    let mut columns = Vec::with_capacity(fields.len());
    for (name, column) in fields {
        let cells = match column {
            Json::Array(cells) => cells,
            other => {
                return Err(TransformError::Conversion(format!(
                    "column '{}' is a JSON {}, expected array",
                    name,
                    json_kind(&other)
                )));
            }
        };
        let values = cells
            .into_iter()
            .enumerate()
            .map(|(row, cell)| json_cell(cell, || format!("column '{}', row {}", name, row)))
            .collect::<Result<Vec<_>>>()?;
        columns.push(Column::from_values(name, values));
    }
    Table::new(columns)
}

impl TryFrom<Json> for Table {
    type Error = TransformError;

    fn try_from(json: Json) -> Result<Self> {
        match json {
            Json::Array(items) => match items.first() {
                None => Ok(Table::empty(0)),
                Some(Json::Object(_)) => table_from_json_records(items),
                Some(Json::Array(_)) => table_from_json_rows(items),
                Some(_) => table_from_json_series(items),
            },
            Json::Object(fields) => table_from_json_columns(fields),
            other => Err(TransformError::Conversion(format!(
                "expected a JSON array or object, found {}",
                json_kind(&other)
            ))),
        }
    }
}
