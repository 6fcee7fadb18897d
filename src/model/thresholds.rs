use crate::model::record::Value;

/// Sex code used by the reference tables for female respondents.
pub const FEMALE_CODE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Code 2 is female; every other code takes the male branch.
    pub fn from_value(value: &Value) -> Self {
        match value.as_f64() {
            Some(code) if code == FEMALE_CODE => Sex::Female,
            _ => Sex::Male,
        }
    }
}

/// ACS2020 sugar-sweetened beverage / fruit juice servings, absolute bins:
/// `<= 0`, `< 0.428`, `< 1`, then everything above.
pub const ACS2020_SSB_CUTPOINTS: [f64; 3] = [0.0, 0.428, 1.0];
pub const ACS2020_SSB_INCLUSIVE: [bool; 3] = [true, false, false];
pub const ACS2020_SSB_SCORES: [f64; 4] = [1.5, 1.0, 0.5, 0.0];

/// Eleven cut values at probabilities k/11, k = 0..=10.
pub const DECILE_CUTS: usize = 11;

pub fn decile_probabilities() -> [f64; DECILE_CUTS] {
    let mut probs = [0.0; DECILE_CUTS];
    for (k, p) in probs.iter_mut().enumerate() {
        *p = k as f64 / DECILE_CUTS as f64;
    }
    probs
}

/// Whole-grain ceilings (grams) for the AHEI.
pub const AHEI_WGRAIN_CEILING_FEMALE: f64 = 75.0;
pub const AHEI_WGRAIN_CEILING_MALE: f64 = 90.0;

/// Five-segment AHEI alcohol curve, drinks per day:
/// - `intake >= zero_at`: 0
/// - `plateau_high < intake < zero_at`: falls linearly from max to 0
/// - `plateau_low <= intake <= plateau_high`: max
/// - `abstainer_cut < intake < plateau_low`: rises linearly from 0 at intake 0
/// - `intake <= abstainer_cut`: abstainer score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlcoholTable {
    pub zero_at: f64,
    pub plateau_high: f64,
    pub plateau_low: f64,
    pub abstainer_cut: f64,
    pub abstainer_score: f64,
    pub max_score: f64,
}

pub const ALCOHOL_FEMALE: AlcoholTable = AlcoholTable {
    zero_at: 2.5,
    plateau_high: 1.5,
    plateau_low: 0.5,
    abstainer_cut: 0.125,
    abstainer_score: 2.5,
    max_score: 10.0,
};

pub const ALCOHOL_MALE: AlcoholTable = AlcoholTable {
    zero_at: 3.5,
    plateau_high: 2.0,
    plateau_low: 0.5,
    abstainer_cut: 0.125,
    abstainer_score: 2.5,
    max_score: 10.0,
};

impl AlcoholTable {
    pub fn for_sex(sex: Sex) -> &'static AlcoholTable {
        match sex {
            Sex::Female => &ALCOHOL_FEMALE,
            Sex::Male => &ALCOHOL_MALE,
        }
    }
}
