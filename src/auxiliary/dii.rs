//! Simplified Dietary Inflammatory Index.
//!
//! Each parameter is standardised against a global mean and standard
//! deviation, mapped to a centered percentile `2 * Phi(z) - 1` and weighted
//! by its overall inflammatory effect score.

use std::f64::consts::SQRT_2;

use crate::auxiliary::optional_number;
use crate::error::IndexError;
use crate::model::record::Record;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiiParam {
    pub column: &'static str,
    pub coefficient: f64,
    pub mean: f64,
    pub sd: f64,
}

const fn p(column: &'static str, coefficient: f64, mean: f64, sd: f64) -> DiiParam {
    DiiParam {
        column,
        coefficient,
        mean,
        sd,
    }
}

pub const DII_PARAMS: [DiiParam; 45] = [
    p("ALCOHOL_DII", -0.278, 13.98, 3.72),
    p("VITB12_DII", 0.106, 5.15, 2.7),
    p("VITB6_DII", -0.365, 1.47, 0.74),
    p("BCAROTENE_DII", -0.584, 3718.0, 1720.0),
    p("CAFFEINE_DII", -0.11, 8.05, 6.67),
    p("CARB_DII", 0.097, 272.2, 40.0),
    p("CHOLES_DII", 0.11, 279.4, 51.2),
    p("KCAL_DII", 0.18, 2056.0, 338.0),
    p("EUGENOL_DII", -0.14, 0.01, 0.08),
    p("TOTALFAT_DII", 0.298, 71.4, 19.4),
    p("FIBER_DII", -0.663, 18.8, 4.9),
    p("FOLICACID_DII", -0.19, 273.0, 70.7),
    p("GARLIC_DII", -0.412, 4.35, 2.9),
    p("GINGER_DII", -0.453, 59.0, 63.2),
    p("IRON_DII", 0.032, 13.35, 3.71),
    p("MG_DII", -0.484, 310.1, 139.4),
    p("MUFA_DII", -0.009, 27.0, 6.1),
    p("NIACIN_DII", -0.246, 25.9, 11.77),
    p("N3FAT_DII", -0.436, 1.06, 1.06),
    p("N6FAT_DII", -0.159, 10.8, 7.5),
    p("ONION_DII", -0.301, 35.9, 18.4),
    p("PROTEIN_DII", 0.021, 79.4, 13.9),
    p("PUFA_DII", -0.337, 13.88, 3.76),
    p("RIBOFLAVIN_DII", -0.068, 1.7, 0.79),
    p("SAFFRON_DII", -0.14, 0.37, 1.78),
    p("SATFAT_DII", 0.373, 28.6, 8.0),
    p("SE_DII", -0.191, 67.0, 25.1),
    p("THIAMIN_DII", -0.098, 1.7, 0.66),
    p("TRANSFAT_DII", 0.229, 3.75, 3.75),
    p("TURMERIC_DII", -0.785, 533.6, 754.3),
    p("VITA_DII", -0.401, 983.9, 518.6),
    p("VITC_DII", -0.424, 118.2, 43.46),
    p("VITD_DII", -0.446, 6.26, 2.21),
    p("VITE_DII", -0.419, 8.73, 1.49),
    p("ZN_DII", -0.313, 9.84, 2.19),
    p("TEA_DII", -0.536, 1.69, 1.53),
    p("FLA3OL_DII", -0.415, 95.8, 85.9),
    p("FLAVONES_DII", -0.616, 1.55, 0.07),
    p("FLAVONOLS_DII", -0.467, 17.7, 6.79),
    p("FLAVONONES_DII", -0.25, 11.7, 3.82),
    p("ANTHOC_DII", -0.131, 18.05, 21.14),
    p("ISOFLAVONES_DII", -0.593, 1.2, 0.2),
    p("PEPPER_DII", -0.131, 10.0, 7.07),
    p("THYME_DII", -0.102, 0.33, 0.99),
    p("ROSEMARY_DII", -0.013, 1.0, 15.0),
];

impl DiiParam {
    pub fn contribution(&self, intake: f64) -> f64 {
        let z = (intake - self.mean) / self.sd;
        centered_percentile(z) * self.coefficient
    }
}

pub fn dii_score(record: &Record) -> Result<f64, IndexError> {
    let mut total = 0.0;
    for param in &DII_PARAMS {
        if let Some(intake) = optional_number(record, param.column)? {
            total += param.contribution(intake);
        }
    }
    Ok(total)
}

/// `2 * Phi(z) - 1`, in `(-1, 1)`.
pub fn centered_percentile(z: f64) -> f64 {
    2.0 * normal_cdf(z) - 1.0
}

/// Standard normal CDF through the fdlibm `erf` port, correct to the last
/// few ulps.
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z / SQRT_2))
}

#[cfg(test)]
#[path = "../../tests/src_inline/auxiliary/dii.rs"]
mod tests;
