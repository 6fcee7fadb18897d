pub mod json;
pub mod output;
pub mod text;

use serde::Serialize;

use crate::error::IndexError;
use crate::model::quantile::quantiles;
use crate::model::record::Record;
use crate::pipeline::Evaluation;

pub const TOOL_NAME: &str = "kira-dietindex";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldStats {
    pub name: String,
    pub mean: f64,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSize {
    pub key: String,
    pub n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    /// Index name, or `auxiliary` for the supplementary scores.
    pub index: String,
    pub label: String,
    pub n_records: usize,
    pub groups: Vec<GroupSize>,
    pub fields: Vec<FieldStats>,
}

pub fn field_stats(name: &str, values: &[f64]) -> Result<FieldStats, IndexError> {
    let q = quantiles(values, &[0.0, 0.1, 0.5, 0.9, 1.0]).map_err(|e| match e {
        IndexError::InvalidInput(msg) => IndexError::InvalidInput(format!("{name}: {msg}")),
        other => other,
    })?;
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Ok(FieldStats {
        name: name.to_string(),
        mean,
        median: q[2],
        p10: q[1],
        p90: q[3],
        min: q[0],
        max: q[4],
    })
}

pub fn build_summary(
    index: &str,
    label: &str,
    records: &[Record],
    fields: &[&str],
    groups: &[(String, usize)],
) -> Result<SummaryData, IndexError> {
    let mut stats = Vec::with_capacity(fields.len());
    for &field in fields {
        let mut values = Vec::with_capacity(records.len());
        for record in records {
            let value = record
                .get(field)
                .ok_or_else(|| IndexError::MissingColumn(field.to_string()))?;
            let v = value.as_f64().ok_or_else(|| {
                IndexError::InvalidInput(format!("non-numeric value '{value}' in column {field}"))
            })?;
            values.push(v);
        }
        stats.push(field_stats(field, &values)?);
    }

    Ok(SummaryData {
        tool: TOOL_NAME.to_string(),
        version: TOOL_VERSION.to_string(),
        index: index.to_string(),
        label: label.to_string(),
        n_records: records.len(),
        groups: groups
            .iter()
            .map(|(key, n)| GroupSize {
                key: key.clone(),
                n: *n,
            })
            .collect(),
        fields: stats,
    })
}

pub fn summarize_evaluation(eval: &Evaluation) -> Result<SummaryData, IndexError> {
    let def = eval.index.definition();
    build_summary(
        eval.index.name(),
        def.label,
        &eval.records,
        &def.output_fields(),
        &eval.group_sizes,
    )
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
