//! Sample quantiles with linear interpolation between closest ranks.
//!
//! For probability `p` over `n` sorted values the position is
//! `k = p * (n - 1)`; with `f = floor(k)` and `c = min(f + 1, n - 1)` the
//! result is `v[f] + (v[c] - v[f]) * (k - f)`. This is the only quantile
//! method in the crate; scoring and reporting both go through it.

use crate::error::IndexError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileTriple {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl QuantileTriple {
    pub fn from_sample(values: &[f64]) -> Result<Self, IndexError> {
        let q = quantiles(values, &[0.25, 0.5, 0.75])?;
        Ok(Self {
            q1: q[0],
            median: q[1],
            q3: q[2],
        })
    }
}

pub fn quantiles(values: &[f64], probs: &[f64]) -> Result<Vec<f64>, IndexError> {
    if values.is_empty() {
        return Err(IndexError::InvalidInput(
            "quantile requested on an empty sample".to_string(),
        ));
    }
    if let Some(p) = probs.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        return Err(IndexError::InvalidInput(format!(
            "quantile probability {p} outside [0, 1]"
        )));
    }
    let sorted = sorted_copy(values);
    Ok(probs.iter().map(|&p| quantile_sorted(&sorted, p)).collect())
}

pub fn quantile(values: &[f64], p: f64) -> Result<f64, IndexError> {
    Ok(quantiles(values, &[p])?[0])
}

/// `sorted` must be non-empty and ascending.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let k = p * (n - 1) as f64;
    let f = k.floor() as usize;
    let c = (f + 1).min(n - 1);
    if f == c {
        sorted[f]
    } else {
        sorted[f] + (sorted[c] - sorted[f]) * (k - f as f64)
    }
}

pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/quantile.rs"]
mod tests;
