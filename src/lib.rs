//! Dietary-quality index scoring: ACS2020 v1/v2 and AHEI over
//! per-respondent intake records, plus simplified DII, MIND and HEI.

pub mod adapter;
pub mod auxiliary;
pub mod error;
pub mod indices;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use adapter::{Representation, Table, score};
pub use error::{Error, IndexError, InputError, Result};
pub use indices::{DietIndex, IndexDef};
pub use model::record::{Record, Value};
pub use pipeline::{Evaluation, evaluate, evaluate_detailed};

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
pub(crate) mod fixtures;
