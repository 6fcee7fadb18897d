use std::collections::BTreeMap;

use crate::error::IndexError;
use crate::indices::IndexDef;
use crate::model::record::{Record, Value};
use crate::model::thresholds::Sex;

#[derive(Debug)]
pub struct Stage1Output {
    pub n_records: usize,
    /// Row indices per canonical group key, in key order.
    pub groups: BTreeMap<String, Vec<usize>>,
    pub sexes: Vec<Sex>,
    /// Numeric values of every field a component reads from.
    pub columns: BTreeMap<&'static str, Vec<f64>>,
}

/// Checks the whole dataset before anything is scored: every required
/// column on every record, then numeric parsing of every source field.
pub fn run_stage1(records: &[Record], def: &IndexDef) -> Result<Stage1Output, IndexError> {
    if records.is_empty() {
        return Err(IndexError::InvalidInput(format!(
            "{} requires at least one respondent",
            def.label
        )));
    }

    for record in records {
        for &column in def.required {
            if !record.contains_key(column) {
                return Err(IndexError::MissingColumn(column.to_string()));
            }
        }
    }

    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut sexes = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let key = field(record, def.group_field)?;
        groups.entry(key.group_key()).or_default().push(row);
        sexes.push(Sex::from_value(key));
    }

    let mut columns: BTreeMap<&'static str, Vec<f64>> = BTreeMap::new();
    for comp in def.components {
        for name in comp.source.fields() {
            if columns.contains_key(name) {
                continue;
            }
            columns.insert(name, numeric_column(records, name, def.id_field)?);
        }
    }

    Ok(Stage1Output {
        n_records: records.len(),
        groups,
        sexes,
        columns,
    })
}

pub fn field<'a>(record: &'a Record, name: &str) -> Result<&'a Value, IndexError> {
    record
        .get(name)
        .ok_or_else(|| IndexError::MissingColumn(name.to_string()))
}

fn numeric_column(
    records: &[Record],
    name: &str,
    id_field: &str,
) -> Result<Vec<f64>, IndexError> {
    let mut out = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let value = field(record, name)?;
        match value.as_f64() {
            Some(v) => out.push(v),
            None => {
                let id = record
                    .get(id_field)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                return Err(IndexError::InvalidInput(format!(
                    "non-numeric value '{value}' in column {name} (row {row}, {id_field}={id})"
                )));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
