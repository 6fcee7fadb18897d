use crate::auxiliary::optional_number;
use crate::error::IndexError;
use crate::model::record::Record;

/// `(column, max score)`; inputs are already on the component's scale.
pub const HEI_COMPONENTS: [(&str, f64); 13] = [
    ("TOTAL_FRT", 5.0),
    ("WHOLE_FRT", 5.0),
    ("TOTAL_VEG", 5.0),
    ("GREENS_BEANS", 5.0),
    ("WHOLE_GRAIN", 10.0),
    ("DAIRY", 10.0),
    ("TOTAL_PROTEIN", 5.0),
    ("SEA_PLANT_PROTEIN", 5.0),
    ("FATTY_ACID", 10.0),
    ("REFINED_GRAIN", 10.0),
    ("SODIUM", 10.0),
    ("ADDED_SUGARS", 10.0),
    ("SAT_FAT", 10.0),
];

/// Sum of component columns clipped to `[0, max]`; at most 100.
pub fn hei_score(record: &Record) -> Result<f64, IndexError> {
    let mut total = 0.0;
    for (column, max) in HEI_COMPONENTS {
        if let Some(v) = optional_number(record, column)? {
            total += v.clamp(0.0, max);
        }
    }
    Ok(total)
}

#[cfg(test)]
#[path = "../../tests/src_inline/auxiliary/hei.rs"]
mod tests;
