//! Column selection and missing-value accounting.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, TransformError};
use crate::table::Table;

/// Remove the named columns.
///
/// # Errors
/// - [`TransformError::MissingArgument`] if `columns` is empty.
/// - [`TransformError::UnknownColumn`] naming the first column not in `table`.
///   Nothing is removed in that case.
pub fn drop_columns<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<Table> {
    if columns.is_empty() {
        return Err(TransformError::MissingArgument(
            "no columns specified to drop".to_string(),
        ));
    }
    let names = require_known(table, columns)?;
    let result = table.retain(|c| !names.contains(c.name()));
    tracing::debug!(
        dropped = names.len(),
        remaining = result.n_columns(),
        "dropped columns"
    );
    Ok(result)
}

/// Keep only `Int` and `Float` columns, in their original order.
///
/// `Bool`, `Text`, and `Object` (mixed) columns are dropped. Idempotent.
pub fn drop_non_numeric_columns(table: &Table) -> Table {
    let result = table.retain(|c| c.is_numeric());
    tracing::debug!(
        kept = result.n_columns(),
        dropped = table.n_columns() - result.n_columns(),
        "dropped non-numeric columns"
    );
    result
}

/// Count missing cells in every column, in table order.
pub fn count_missing(table: &Table) -> MissingCounts {
    MissingCounts(
        table
            .columns()
            .iter()
            .map(|c| (c.name().to_string(), c.missing_count()))
            .collect(),
    )
}

/// Check every name against `table`, returning them as a set.
pub(crate) fn require_known<'a, S: AsRef<str>>(
    table: &Table,
    columns: &'a [S],
) -> Result<HashSet<&'a str>> {
    columns
        .iter()
        .map(|name| {
            let name = name.as_ref();
            if table.contains(name) {
                Ok(name)
            } else {
                Err(TransformError::UnknownColumn(name.to_string()))
            }
        })
        .collect()
}

/// Missing-cell counts keyed by column name, in table column order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCounts(Vec<(String, usize)>);

impl MissingCounts {
    /// Count for `column`, or `None` if the table had no such column.
    pub fn get(&self, column: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|&(_, count)| count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Sum over all columns.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for MissingCounts {
    type Item = (String, usize);
    type IntoIter = std::vec::IntoIter<(String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
