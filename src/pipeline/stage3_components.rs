use std::collections::BTreeMap;

use tracing::debug;

use crate::error::IndexError;
use crate::indices::{ComponentDef, IndexDef, Strategy};
use crate::model::quantile::QuantileTriple;
use crate::model::scoring::{
    DecileTable, alcohol_score, linear_score, quantile_cut_score, threshold_score,
};
use crate::model::thresholds::Sex;
use crate::pipeline::stage1_validate::Stage1Output;
use crate::pipeline::stage2_derive::Stage2Output;

#[derive(Debug, Clone)]
pub struct ComponentScores {
    pub output: &'static str,
    pub scores: Vec<f64>,
}

#[derive(Debug)]
pub struct Stage3Output {
    pub components: Vec<ComponentScores>,
}

pub fn run_stage3(
    def: &IndexDef,
    stage1: &Stage1Output,
    stage2: &Stage2Output,
) -> Result<Stage3Output, IndexError> {
    let mut components = Vec::with_capacity(def.components.len());
    for (comp, values) in def.components.iter().zip(&stage2.values) {
        let scores = score_component(comp, values, stage1)?;
        components.push(ComponentScores {
            output: comp.output,
            scores,
        });
    }
    Ok(Stage3Output { components })
}

fn score_component(
    comp: &ComponentDef,
    values: &[f64],
    stage1: &Stage1Output,
) -> Result<Vec<f64>, IndexError> {
    let scores = match comp.strategy {
        Strategy::QuantileCut { ascending, scores } => {
            grouped_quantile_cut(comp, values, &stage1.groups, ascending, &scores)?
        }
        Strategy::Linear {
            floor,
            ceiling,
            min_score,
            max_score,
        } => values
            .iter()
            .map(|&v| linear_score(v, floor, ceiling, min_score, max_score))
            .collect(),
        Strategy::SexLinear {
            floor,
            female_ceiling,
            male_ceiling,
            min_score,
            max_score,
        } => values
            .iter()
            .zip(&stage1.sexes)
            .map(|(&v, &sex)| {
                let ceiling = match sex {
                    Sex::Female => female_ceiling,
                    Sex::Male => male_ceiling,
                };
                linear_score(v, floor, ceiling, min_score, max_score)
            })
            .collect(),
        Strategy::Threshold {
            cutpoints,
            inclusive,
            scores,
        } => values
            .iter()
            .map(|&v| threshold_score(v, &cutpoints, &inclusive, &scores))
            .collect(),
        Strategy::Decile => {
            let table = DecileTable::from_sample(values).map_err(|e| context(comp, None, e))?;
            debug!(component = comp.id, cuts = ?table.cuts, "decile cut values");
            values.iter().map(|&v| table.score(v)).collect()
        }
        Strategy::Alcohol => values
            .iter()
            .zip(&stage1.sexes)
            .map(|(&v, &sex)| alcohol_score(sex, v))
            .collect(),
    };
    Ok(scores)
}

/// Quartiles are recomputed inside every group from that group's values only.
fn grouped_quantile_cut(
    comp: &ComponentDef,
    values: &[f64],
    groups: &BTreeMap<String, Vec<usize>>,
    ascending: bool,
    scores: &[f64; 4],
) -> Result<Vec<f64>, IndexError> {
    let mut out = vec![0.0; values.len()];
    for (key, rows) in groups {
        let sample: Vec<f64> = rows.iter().map(|&row| values[row]).collect();
        let triple = QuantileTriple::from_sample(&sample).map_err(|e| context(comp, Some(key), e))?;
        debug!(
            component = comp.id,
            group = %key,
            n = rows.len(),
            q1 = triple.q1,
            median = triple.median,
            q3 = triple.q3,
            "group quartiles"
        );
        for &row in rows {
            out[row] = quantile_cut_score(values[row], &triple, ascending, scores);
        }
    }
    Ok(out)
}

fn context(comp: &ComponentDef, group: Option<&String>, err: IndexError) -> IndexError {
    match err {
        IndexError::InvalidInput(msg) => match group {
            Some(key) => IndexError::InvalidInput(format!("{} (group {key}): {msg}", comp.output)),
            None => IndexError::InvalidInput(format!("{}: {msg}", comp.output)),
        },
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_components.rs"]
mod tests;
