use crate::error::IndexError;
use crate::model::quantile::{QuantileTriple, quantiles};
use crate::model::thresholds::{AlcoholTable, DECILE_CUTS, Sex, decile_probabilities};

/// Bin of `value` against `(-inf, Q1], (Q1, Q2], (Q2, Q3], (Q3, inf)`.
/// Edges belong to the lower bin.
pub fn quartile_bin(value: f64, triple: &QuantileTriple) -> usize {
    if value <= triple.q1 {
        0
    } else if value <= triple.median {
        1
    } else if value <= triple.q3 {
        2
    } else {
        3
    }
}

/// Ascending maps `scores[0..4]` onto the bins in order; descending maps
/// the reversed list, so the lowest bin receives `scores[3]`.
pub fn quantile_cut_score(
    value: f64,
    triple: &QuantileTriple,
    ascending: bool,
    scores: &[f64; 4],
) -> f64 {
    let bin = quartile_bin(value, triple);
    if ascending {
        scores[bin]
    } else {
        scores[3 - bin]
    }
}

/// Linear score between `floor` (min score) and `ceiling` (max score),
/// clamped outside. `floor > ceiling` gives a score that falls as intake
/// rises.
pub fn linear_score(value: f64, floor: f64, ceiling: f64, min_score: f64, max_score: f64) -> f64 {
    if floor == ceiling {
        return if value >= ceiling { max_score } else { min_score };
    }
    let t = (value - floor) / (ceiling - floor);
    if t >= 1.0 {
        max_score
    } else if t <= 0.0 {
        min_score
    } else {
        min_score + (value - floor) * (max_score - min_score) / (ceiling - floor)
    }
}

/// Fixed ascending cutpoints. A value on cutpoint `i` belongs to bin `i`
/// only when `inclusive[i]` is set, otherwise it moves up a bin; overflow
/// takes the last score.
pub fn threshold_score(
    value: f64,
    cutpoints: &[f64; 3],
    inclusive: &[bool; 3],
    scores: &[f64; 4],
) -> f64 {
    for ((upper, closed), score) in cutpoints.iter().zip(inclusive).zip(scores) {
        if value < *upper || (*closed && value == *upper) {
            return *score;
        }
    }
    scores[3]
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecileTable {
    pub cuts: [f64; DECILE_CUTS],
}

impl DecileTable {
    pub fn from_sample(values: &[f64]) -> Result<Self, IndexError> {
        let q = quantiles(values, &decile_probabilities())?;
        let mut cuts = [0.0; DECILE_CUTS];
        cuts.copy_from_slice(&q);
        Ok(Self { cuts })
    }

    /// Bucket `i` in `0..10` has upper edge `cuts[i + 1]`; bucket 10 takes
    /// everything above `cuts[10]`.
    pub fn bucket(&self, value: f64) -> usize {
        for i in 0..DECILE_CUTS - 1 {
            if value <= self.cuts[i + 1] {
                return i;
            }
        }
        DECILE_CUTS - 1
    }

    pub fn score(&self, value: f64) -> f64 {
        self.bucket(value) as f64
    }
}

pub fn alcohol_score(sex: Sex, intake: f64) -> f64 {
    let t = AlcoholTable::for_sex(sex);
    if intake >= t.zero_at {
        0.0
    } else if intake > t.plateau_high {
        (intake - t.zero_at) * t.max_score / (t.plateau_high - t.zero_at)
    } else if intake >= t.plateau_low {
        t.max_score
    } else if intake > t.abstainer_cut {
        intake * t.max_score / t.plateau_low
    } else {
        t.abstainer_score
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scoring.rs"]
mod tests;
