//! Task-table ingestion.
//!
//! The scheduler's input table arrives from upstream prediction tooling as a
//! list of records with named columns. The column names are configuration,
//! not algorithm: [`TableBindings`] maps them onto [`FieldTask`] fields so a
//! spreadsheet export can be consumed without renaming its headers.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use harvestplan_core::FieldTask;

use crate::StoreError;

fn default_field_column() -> String {
    "Field".to_string()
}

fn default_group_column() -> String {
    "Variety Group".to_string()
}

fn default_hours_column() -> String {
    "total_hours".to_string()
}

fn default_round_column() -> String {
    "Harvest Round".to_string()
}

/// Column-name bindings for the task table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBindings {
    /// Column carrying the field identifier
    #[serde(default = "default_field_column")]
    pub field: String,
    /// Column carrying the variety group
    #[serde(default = "default_group_column")]
    pub group: String,
    /// Column carrying the required hours
    #[serde(default = "default_hours_column")]
    pub hours: String,
    /// Column carrying the harvest round; rows without it default to round 1
    #[serde(default = "default_round_column")]
    pub harvest_round: String,
}

impl Default for TableBindings {
    fn default() -> Self {
        Self {
            field: default_field_column(),
            group: default_group_column(),
            hours: default_hours_column(),
            harvest_round: default_round_column(),
        }
    }
}

/// Read a YAML record table into scheduler input rows, preserving row order
pub fn read_field_table(path: &Path, bindings: &TableBindings) -> Result<Vec<FieldTask>, StoreError> {
    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<Value> = serde_yaml::from_str(&contents)?;

    records
        .iter()
        .enumerate()
        .map(|(row, record)| parse_row(record, bindings, row))
        .collect()
}

fn parse_row(record: &Value, bindings: &TableBindings, row: usize) -> Result<FieldTask, StoreError> {
    let field = string_column(record, &bindings.field, row)?;
    let group = string_column(record, &bindings.group, row)?;

    let hours = record
        .get(bindings.hours.as_str())
        .ok_or_else(|| missing(&bindings.hours, row))?
        .as_f64()
        .ok_or_else(|| invalid(&bindings.hours, row))?;

    let harvest_round = match record.get(bindings.harvest_round.as_str()) {
        Some(value) => u32::try_from(
            value
                .as_u64()
                .ok_or_else(|| invalid(&bindings.harvest_round, row))?,
        )
        .map_err(|_| invalid(&bindings.harvest_round, row))?,
        None => 1,
    };

    Ok(FieldTask::new(field, group, hours).harvest_round(harvest_round))
}

fn string_column(record: &Value, column: &str, row: usize) -> Result<String, StoreError> {
    record
        .get(column)
        .ok_or_else(|| missing(column, row))?
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| invalid(column, row))
}

fn missing(column: &str, row: usize) -> StoreError {
    StoreError::MissingColumn {
        column: column.to_string(),
        row,
    }
}

fn invalid(column: &str, row: usize) -> StoreError {
    StoreError::InvalidValue {
        column: column.to_string(),
        row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_table(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.yaml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_default_columns_in_order() {
        let (_dir, path) = write_table(
            r"
- {Field: north-3, Variety Group: hauptsorte, total_hours: 20.5, Harvest Round: 2}
- {Field: south-1, Variety Group: fruehsorte, total_hours: 8}
",
        );
        let tasks = read_field_table(&path, &TableBindings::default()).unwrap();
        assert_eq!(
            tasks,
            vec![
                FieldTask::new("north-3", "hauptsorte", 20.5).harvest_round(2),
                FieldTask::new("south-1", "fruehsorte", 8.0),
            ]
        );
    }

    #[test]
    fn custom_bindings_rename_columns() {
        let (_dir, path) = write_table(
            "- {plot: a, sorte: g, predicted_hours: 3.5}\n",
        );
        let bindings = TableBindings {
            field: "plot".into(),
            group: "sorte".into(),
            hours: "predicted_hours".into(),
            harvest_round: "pass".into(),
        };
        let tasks = read_field_table(&path, &bindings).unwrap();
        assert_eq!(tasks, vec![FieldTask::new("a", "g", 3.5)]);
    }

    #[test]
    fn missing_bound_column_is_an_error() {
        let (_dir, path) = write_table("- {Field: a, total_hours: 1}\n");
        let err = read_field_table(&path, &TableBindings::default());
        assert!(matches!(
            err,
            Err(StoreError::MissingColumn { column, row: 0 }) if column == "Variety Group"
        ));
    }

    #[test]
    fn non_numeric_hours_is_an_error() {
        let (_dir, path) = write_table(
            "- {Field: a, Variety Group: g, total_hours: lots}\n",
        );
        let err = read_field_table(&path, &TableBindings::default());
        assert!(matches!(err, Err(StoreError::InvalidValue { .. })));
    }

    #[test]
    fn empty_file_is_an_empty_table() {
        let (_dir, path) = write_table("");
        assert!(read_field_table(&path, &TableBindings::default())
            .unwrap()
            .is_empty());
    }
}
