//! Typed columns and kind inference.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::Value;

/// Semantic kind of a column's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// 64-bit signed integers.
    Int,
    /// 64-bit floating point.
    Float,
    Bool,
    Text,
    /// Mixed or untyped values (including all-missing columns).
    Object,
}

impl ColumnKind {
    /// True for `Int` and `Float`, the only kinds preprocessing operates on.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Int | ColumnKind::Float)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Int => "int",
            ColumnKind::Float => "float",
            ColumnKind::Bool => "bool",
            ColumnKind::Text => "text",
            ColumnKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Cell storage for one column. `None` (or `Value::Null`) marks a missing cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Bool(Vec<Option<bool>>),
    Text(Vec<Option<String>>),
    Object(Vec<Value>),
}

impl ColumnData {
    /// Infer the narrowest kind that holds every present value.
    ///
    /// Integers alone give `Int`, integers mixed with floats give `Float`,
    /// booleans alone give `Bool`, strings alone give `Text`. Anything else,
    /// including a column with no present values, is kept as `Object`.
    pub fn from_values(values: Vec<Value>) -> Self {
        let (mut ints, mut floats, mut bools, mut texts, mut present) = (0, 0, 0, 0, 0);
        for v in values.iter().filter(|v| !v.is_missing()) {
            present += 1;
            match v {
                Value::Int(_) => ints += 1,
                Value::Float(_) => floats += 1,
                Value::Bool(_) => bools += 1,
                Value::Text(_) => texts += 1,
                Value::Null => {}
            }
        }

        if present == 0 {
            return ColumnData::Object(values.into_iter().map(normalize_missing).collect());
        }
        if ints == present {
            return ColumnData::Int(
                values
                    .into_iter()
                    .map(|v| match v {
                        Value::Int(i) => Some(i),
                        _ => None,
                    })
                    .collect(),
            );
        }
        if ints + floats == present {
            return ColumnData::Float(values.iter().map(Value::as_f64).collect());
        }
        if bools == present {
            return ColumnData::Bool(
                values
                    .into_iter()
                    .map(|v| match v {
                        Value::Bool(b) => Some(b),
                        _ => None,
                    })
                    .collect(),
            );
        }
        if texts == present {
            return ColumnData::Text(
                values
                    .into_iter()
                    .map(|v| match v {
                        Value::Text(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            );
        }
        ColumnData::Object(values.into_iter().map(normalize_missing).collect())
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Int(_) => ColumnKind::Int,
            ColumnData::Float(_) => ColumnKind::Float,
            ColumnData::Bool(_) => ColumnKind::Bool,
            ColumnData::Text(_) => ColumnKind::Text,
            ColumnData::Object(_) => ColumnKind::Object,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Object(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Float(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Bool(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Text(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Object(v) => v.iter().filter(|c| c.is_missing()).count(),
        }
    }

    /// Cell at `row` as a [`Value`], or `None` past the end.
    pub fn value(&self, row: usize) -> Option<Value> {
        match self {
            ColumnData::Int(v) => v.get(row).map(|c| Value::from(*c)),
            ColumnData::Float(v) => v.get(row).map(|c| Value::from(*c)),
            ColumnData::Bool(v) => v.get(row).map(|c| Value::from(*c)),
            ColumnData::Text(v) => v.get(row).map(|c| Value::from(c.clone())),
            ColumnData::Object(v) => v.get(row).cloned(),
        }
    }

    /// Numeric cells widened to `f64`; `None` if the column is not numeric.
    pub fn as_f64s(&self) -> Option<Vec<Option<f64>>> {
        match self {
            ColumnData::Int(v) => Some(v.iter().map(|c| c.map(|i| i as f64)).collect()),
            ColumnData::Float(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Present numeric cells widened to `f64`, in row order.
    pub(crate) fn present_f64s(&self) -> Vec<f64> {
        match self {
            ColumnData::Int(v) => v.iter().flatten().map(|&i| i as f64).collect(),
            ColumnData::Float(v) => v.iter().flatten().copied().collect(),
            _ => Vec::new(),
        }
    }
}

fn normalize_missing(v: Value) -> Value {
    if v.is_missing() {
        Value::Null
    } else {
        v
    }
}

/// A named column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create a column from already-typed storage.
    ///
    /// NaN cells of a `Float` column are normalized to missing.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        let data = match data {
            ColumnData::Float(v) => {
                ColumnData::Float(v.into_iter().map(|c| c.filter(|x| !x.is_nan())).collect())
            }
            ColumnData::Object(v) => ColumnData::Object(v.into_iter().map(normalize_missing).collect()),
            other => other,
        };
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn int(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Self::new(name, ColumnData::Int(values))
    }

    pub fn float(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, ColumnData::Float(values))
    }

    pub fn boolean(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Self::new(name, ColumnData::Bool(values))
    }

    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<Option<S>>) -> Self {
        Self::new(
            name,
            ColumnData::Text(values.into_iter().map(|c| c.map(Into::into)).collect()),
        )
    }

    /// Create a column from untyped values, inferring its kind.
    pub fn from_values(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(name, ColumnData::from_values(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn into_data(self) -> ColumnData {
        self.data
    }

    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.data.missing_count()
    }

    pub fn value(&self, row: usize) -> Option<Value> {
        self.data.value(row)
    }

    pub fn as_f64s(&self) -> Option<Vec<Option<f64>>> {
        self.data.as_f64s()
    }

    /// Integer cells; `None` unless the column kind is `Int`.
    pub fn as_i64s(&self) -> Option<&[Option<i64>]> {
        match &self.data {
            ColumnData::Int(v) => Some(v),
            _ => None,
        }
    }
}
