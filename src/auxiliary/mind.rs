use crate::auxiliary::optional_number;
use crate::error::IndexError;
use crate::model::record::Record;

/// One point each when eaten at all.
pub const MIND_HEALTHY: [&str; 10] = [
    "GREEN_LEAFY",
    "OTHER_VEG",
    "NUTS",
    "BERRIES",
    "BEANS",
    "WHOLE_GRAINS",
    "FISH",
    "POULTRY",
    "OLIVE_OIL",
    "WINE",
];

/// One point each when not eaten.
pub const MIND_UNHEALTHY: [&str; 5] = ["RED_MEAT", "BUTTER", "CHEESE", "PASTRIES", "FRIED_FOOD"];

/// Simplified MIND score, 0 to 15.
pub fn mind_score(record: &Record) -> Result<f64, IndexError> {
    let mut total = 0.0;
    for column in MIND_HEALTHY {
        if optional_number(record, column)?.is_some_and(|v| v > 0.0) {
            total += 1.0;
        }
    }
    for column in MIND_UNHEALTHY {
        if optional_number(record, column)?.is_some_and(|v| v == 0.0) {
            total += 1.0;
        }
    }
    Ok(total)
}

#[cfg(test)]
#[path = "../../tests/src_inline/auxiliary/mind.rs"]
mod tests;
