use crate::error::IndexError;
use crate::indices::IndexDef;
use crate::pipeline::stage3_components::Stage3Output;

#[derive(Debug)]
pub struct Stage4Output {
    pub total: Vec<f64>,
    pub secondary: Option<Vec<f64>>,
}

/// Sums component scores in declared order, after every component is scored.
pub fn run_stage4(def: &IndexDef, stage3: &Stage3Output) -> Result<Stage4Output, IndexError> {
    let n_records = stage3
        .components
        .first()
        .map(|c| c.scores.len())
        .unwrap_or(0);

    let mut total = vec![0.0; n_records];
    for comp in &stage3.components {
        for (acc, score) in total.iter_mut().zip(&comp.scores) {
            *acc += score;
        }
    }

    let secondary = match &def.secondary {
        Some(sec) => {
            let excluded = stage3
                .components
                .iter()
                .find(|c| c.output == sec.excludes)
                .ok_or_else(|| {
                    IndexError::InvalidInput(format!(
                        "{} excludes unknown component {}",
                        sec.output, sec.excludes
                    ))
                })?;
            Some(
                total
                    .iter()
                    .zip(&excluded.scores)
                    .map(|(t, s)| t - s)
                    .collect(),
            )
        }
        None => None,
    };

    Ok(Stage4Output { total, secondary })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_totals.rs"]
mod tests;
