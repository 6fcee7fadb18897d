use crate::error::IndexError;
use crate::indices::{IndexDef, Source};
use crate::pipeline::stage1_validate::Stage1Output;

#[derive(Debug)]
pub struct Stage2Output {
    /// Scoring input per component, in declared component order.
    pub values: Vec<Vec<f64>>,
}

pub fn run_stage2(def: &IndexDef, stage1: &Stage1Output) -> Result<Stage2Output, IndexError> {
    let mut values = Vec::with_capacity(def.components.len());
    for comp in def.components {
        values.push(derive_source(&comp.source, stage1)?);
    }
    Ok(Stage2Output { values })
}

fn derive_source(source: &Source, stage1: &Stage1Output) -> Result<Vec<f64>, IndexError> {
    match *source {
        Source::Field(name) => Ok(column(stage1, name)?.to_vec()),
        Source::PerKcal { field, kcal, per } => {
            let intake = column(stage1, field)?;
            let energy = column(stage1, kcal)?;
            Ok(intake
                .iter()
                .zip(energy)
                .map(|(&x, &e)| per_kcal(x, e, per))
                .collect())
        }
    }
}

/// Intake per `per` kilocalories. Zero energy yields an infinite or NaN
/// value, which is scored as-is.
pub fn per_kcal(intake: f64, kcal: f64, per: f64) -> f64 {
    intake / (kcal / per)
}

fn column<'a>(stage1: &'a Stage1Output, name: &str) -> Result<&'a [f64], IndexError> {
    stage1
        .columns
        .get(name)
        .map(Vec::as_slice)
        .ok_or_else(|| IndexError::MissingColumn(name.to_string()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_derive.rs"]
mod tests;
