pub mod defs;

use std::fmt;
use std::str::FromStr;

use crate::error::IndexError;

pub use defs::{builtin_indices, index_def};

/// Supported dietary-quality indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DietIndex {
    Acs2020V1,
    Acs2020V2,
    Ahei,
}

impl DietIndex {
    pub const ALL: [DietIndex; 3] = [DietIndex::Acs2020V1, DietIndex::Acs2020V2, DietIndex::Ahei];

    pub fn name(self) -> &'static str {
        match self {
            DietIndex::Acs2020V1 => "acs2020_v1",
            DietIndex::Acs2020V2 => "acs2020_v2",
            DietIndex::Ahei => "ahei",
        }
    }

    pub fn definition(self) -> &'static IndexDef {
        index_def(self)
    }
}

impl fmt::Display for DietIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DietIndex {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DietIndex::ALL
            .into_iter()
            .find(|idx| idx.name() == lower)
            .ok_or_else(|| {
                IndexError::InvalidInput(format!(
                    "unknown index '{s}' (use acs2020_v1|acs2020_v2|ahei)"
                ))
            })
    }
}

/// Where a component's raw value comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    Field(&'static str),
    /// `field / (kcal / per)`, i.e. intake per `per` kilocalories.
    PerKcal {
        field: &'static str,
        kcal: &'static str,
        per: f64,
    },
}

impl Source {
    pub fn fields(&self) -> Vec<&'static str> {
        match *self {
            Source::Field(field) => vec![field],
            Source::PerKcal { field, kcal, .. } => vec![field, kcal],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Quartile bins computed within each sex group.
    QuantileCut { ascending: bool, scores: [f64; 4] },
    Linear {
        floor: f64,
        ceiling: f64,
        min_score: f64,
        max_score: f64,
    },
    /// Linear with a ceiling that depends on sex.
    SexLinear {
        floor: f64,
        female_ceiling: f64,
        male_ceiling: f64,
        min_score: f64,
        max_score: f64,
    },
    /// Absolute bins; `inclusive[i]` closes bin `i` at its cutpoint.
    Threshold {
        cutpoints: [f64; 3],
        inclusive: [bool; 3],
        scores: [f64; 4],
    },
    /// Bucket 0..=10 over the whole (ungrouped) sample.
    Decile,
    Alcohol,
}

impl Strategy {
    pub fn is_grouped(&self) -> bool {
        matches!(self, Strategy::QuantileCut { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::QuantileCut { .. } => "quantile_cut",
            Strategy::Linear { .. } => "linear",
            Strategy::SexLinear { .. } => "sex_linear",
            Strategy::Threshold { .. } => "threshold",
            Strategy::Decile => "decile",
            Strategy::Alcohol => "alcohol",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentDef {
    pub id: &'static str,
    pub output: &'static str,
    pub source: Source,
    pub strategy: Strategy,
}

/// Secondary total: main total minus one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryTotal {
    pub output: &'static str,
    pub excludes: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexDef {
    pub index: DietIndex,
    pub label: &'static str,
    pub id_field: &'static str,
    pub group_field: &'static str,
    pub required: &'static [&'static str],
    pub components: &'static [ComponentDef],
    pub total: &'static str,
    pub secondary: Option<SecondaryTotal>,
}

impl IndexDef {
    /// Component fields in declared order, then the total field(s).
    pub fn output_fields(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = self.components.iter().map(|c| c.output).collect();
        out.push(self.total);
        if let Some(secondary) = &self.secondary {
            out.push(secondary.output);
        }
        out
    }

    pub fn component(&self, output: &str) -> Option<&ComponentDef> {
        self.components.iter().find(|c| c.output == output)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/indices/tests.rs"]
mod tests;
