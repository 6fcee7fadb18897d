//! Index evaluation: validate, derive, score components, total.
//!
//! Each call works only on its own input slice and returns new records, so
//! independent evaluations can run on separate threads without sharing
//! anything.

pub mod stage1_validate;
pub mod stage2_derive;
pub mod stage3_components;
pub mod stage4_totals;

use tracing::info;

use crate::error::IndexError;
use crate::indices::{DietIndex, IndexDef};
use crate::model::record::{Record, Value};
use stage1_validate::run_stage1;
use stage2_derive::run_stage2;
use stage3_components::run_stage3;
use stage4_totals::run_stage4;

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub index: DietIndex,
    pub records: Vec<Record>,
    /// Respondents per group key, in key order.
    pub group_sizes: Vec<(String, usize)>,
}

/// Scores `records` with `index`. Input records are left untouched; the
/// result holds copies augmented with every component field and the
/// total field(s).
pub fn evaluate(records: &[Record], index: DietIndex) -> Result<Vec<Record>, IndexError> {
    Ok(evaluate_detailed(records, index.definition())?.records)
}

pub fn evaluate_detailed(records: &[Record], def: &IndexDef) -> Result<Evaluation, IndexError> {
    let stage1 = run_stage1(records, def)?;
    let stage2 = run_stage2(def, &stage1)?;
    let stage3 = run_stage3(def, &stage1, &stage2)?;
    let stage4 = run_stage4(def, &stage3)?;

    info!(
        index = def.index.name(),
        records = stage1.n_records,
        groups = stage1.groups.len(),
        "index evaluated"
    );

    let mut out = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let mut augmented = record.clone();
        for comp in &stage3.components {
            augmented.insert(comp.output.to_string(), Value::Number(comp.scores[row]));
        }
        augmented.insert(def.total.to_string(), Value::Number(stage4.total[row]));
        if let (Some(sec), Some(values)) = (&def.secondary, &stage4.secondary) {
            augmented.insert(sec.output.to_string(), Value::Number(values[row]));
        }
        out.push(augmented);
    }

    let group_sizes = stage1
        .groups
        .iter()
        .map(|(key, rows)| (key.clone(), rows.len()))
        .collect();

    Ok(Evaluation {
        index: def.index,
        records: out,
        group_sizes,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluate.rs"]
mod tests;
