//! Per-record supplementary scores: DII, MIND and a simplified HEI.
//!
//! None of these group respondents or use quantiles. A component column
//! that is absent contributes nothing; one that is present must be numeric.

pub mod dii;
pub mod hei;
pub mod mind;

use std::fmt;

use tracing::info;

use crate::error::IndexError;
use crate::model::record::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxScore {
    Dii,
    Mind,
    Hei,
}

impl AuxScore {
    pub const ALL: [AuxScore; 3] = [AuxScore::Dii, AuxScore::Mind, AuxScore::Hei];

    pub fn output(self) -> &'static str {
        match self {
            AuxScore::Dii => "DII_ALL",
            AuxScore::Mind => "MIND_ALL",
            AuxScore::Hei => "HEI_ALL",
        }
    }

    pub fn score(self, record: &Record) -> Result<f64, IndexError> {
        match self {
            AuxScore::Dii => dii::dii_score(record),
            AuxScore::Mind => mind::mind_score(record),
            AuxScore::Hei => hei::hei_score(record),
        }
    }
}

impl fmt::Display for AuxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.output())
    }
}

/// Copies `records` with `DII_ALL`, `MIND_ALL` and `HEI_ALL` appended.
/// Every record is scored before any copy is returned.
pub fn score_records(records: &[Record]) -> Result<Vec<Record>, IndexError> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let mut augmented = record.clone();
        for aux in AuxScore::ALL {
            augmented.insert(aux.output().to_string(), Value::Number(aux.score(record)?));
        }
        out.push(augmented);
    }
    info!(records = records.len(), "supplementary scores computed");
    Ok(out)
}

/// `Ok(None)` when the column is absent; `InvalidInput` when present but
/// not a number.
pub(crate) fn optional_number(record: &Record, field: &str) -> Result<Option<f64>, IndexError> {
    match record.get(field) {
        None => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| {
            IndexError::InvalidInput(format!("non-numeric value '{value}' in column {field}"))
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/auxiliary/mod.rs"]
mod tests;
