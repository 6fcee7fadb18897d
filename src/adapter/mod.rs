//! Tabular representation and the seam between it and the record engine.
//!
//! The evaluator only sees `&[Record]`. A `Representation` converts to
//! records, and rebuilds itself from the scored records with the new
//! fields appended, so scores never depend on which form was used.

use std::collections::BTreeSet;

use crate::auxiliary::{self, AuxScore};
use crate::error::{IndexError, InputError};
use crate::indices::DietIndex;
use crate::model::record::{Record, Value};
use crate::pipeline::evaluate;

/// Column-major table. Every column holds `n_rows` cells; `None` marks a
/// field the source record never had.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    data: Vec<Vec<Option<Value>>>,
    n_rows: usize,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Result<Self, InputError> {
        check_unique(&columns)?;
        let data = vec![Vec::new(); columns.len()];
        Ok(Self {
            columns,
            data,
            n_rows: 0,
        })
    }

    pub fn from_columns(columns: Vec<(String, Vec<Value>)>) -> Result<Self, InputError> {
        let n_rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        if let Some((name, values)) = columns.iter().find(|(_, v)| v.len() != n_rows) {
            return Err(InputError::Parse(format!(
                "column {name} has {} values, expected {n_rows}",
                values.len()
            )));
        }
        let (names, data): (Vec<String>, Vec<Vec<Option<Value>>>) = columns
            .into_iter()
            .map(|(name, values)| (name, values.into_iter().map(Some).collect()))
            .unzip();
        check_unique(&names)?;
        Ok(Self {
            columns: names,
            data,
            n_rows,
        })
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), InputError> {
        self.push_cells(row.into_iter().map(Some).collect())
    }

    fn push_cells(&mut self, row: Vec<Option<Value>>) -> Result<(), InputError> {
        if row.len() != self.columns.len() {
            return Err(InputError::Parse(format!(
                "row {} has {} cells, expected {}",
                self.n_rows + 1,
                row.len(),
                self.columns.len()
            )));
        }
        for (column, cell) in self.data.iter_mut().zip(row) {
            column.push(cell);
        }
        self.n_rows += 1;
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[Option<Value>]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|idx| self.data[idx].as_slice())
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Value> {
        self.column(name)?.get(row)?.as_ref()
    }

    pub fn row(&self, idx: usize) -> Option<Vec<Option<&Value>>> {
        if idx >= self.n_rows {
            return None;
        }
        Some(self.data.iter().map(|col| col[idx].as_ref()).collect())
    }

    pub fn to_records(&self) -> Vec<Record> {
        (0..self.n_rows)
            .map(|row| {
                self.columns
                    .iter()
                    .zip(&self.data)
                    .filter_map(|(name, col)| Some((name.clone(), col[row].clone()?)))
                    .collect()
            })
            .collect()
    }

    /// `leading` columns first in the given order, then every other field in
    /// first-seen order. Fields a record lacks stay absent.
    pub fn from_records(records: &[Record], leading: &[String]) -> Result<Self, InputError> {
        let mut columns: Vec<String> = leading.to_vec();
        let mut seen: BTreeSet<&str> = leading.iter().map(String::as_str).collect();
        for record in records {
            for key in record.keys() {
                if seen.insert(key.as_str()) {
                    columns.push(key.clone());
                }
            }
        }
        let mut table = Table::new(columns)?;
        for record in records {
            let row = table.columns.iter().map(|c| record.get(c).cloned()).collect();
            table.push_cells(row)?;
        }
        Ok(table)
    }
}

fn check_unique(columns: &[String]) -> Result<(), InputError> {
    let mut seen = BTreeSet::new();
    for c in columns {
        if !seen.insert(c.as_str()) {
            return Err(InputError::Parse(format!("duplicate column name: {c}")));
        }
    }
    Ok(())
}

pub trait Representation: Sized {
    fn to_records(&self) -> Vec<Record>;

    /// Rebuilds `Self` from scored records. `appended` lists the new
    /// fields in output order.
    fn from_scored(&self, scored: Vec<Record>, appended: &[&str]) -> Result<Self, IndexError>;
}

impl Representation for Vec<Record> {
    fn to_records(&self) -> Vec<Record> {
        self.clone()
    }

    fn from_scored(&self, scored: Vec<Record>, _appended: &[&str]) -> Result<Self, IndexError> {
        Ok(scored)
    }
}

impl Representation for Table {
    fn to_records(&self) -> Vec<Record> {
        Table::to_records(self)
    }

    fn from_scored(&self, scored: Vec<Record>, appended: &[&str]) -> Result<Self, IndexError> {
        let mut leading = self.columns.clone();
        for field in appended {
            if !leading.iter().any(|c| c == field) {
                leading.push(field.to_string());
            }
        }
        Table::from_records(&scored, &leading)
            .map_err(|e| IndexError::InvalidInput(format!("rebuilding scored table: {e}")))
    }
}

/// Scores `data` with `index`, returning the same representation with the
/// component and total fields appended.
pub fn score<R: Representation>(data: &R, index: DietIndex) -> Result<R, IndexError> {
    let records = data.to_records();
    let scored = evaluate(&records, index)?;
    data.from_scored(scored, &index.definition().output_fields())
}

pub fn score_auxiliary<R: Representation>(data: &R) -> Result<R, IndexError> {
    let records = data.to_records();
    let scored = auxiliary::score_records(&records)?;
    let appended: Vec<&str> = AuxScore::ALL.iter().map(|a| a.output()).collect();
    data.from_scored(scored, &appended)
}

#[cfg(test)]
#[path = "../../tests/src_inline/adapter/mod.rs"]
mod tests;
