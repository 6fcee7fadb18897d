use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::info;

use crate::adapter::Table;
use crate::error::InputError;

pub mod delimited;
pub mod json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

/// Format and compression from the file name: `.csv`, `.json`, each
/// optionally followed by `.gz`.
pub fn detect_format(path: &Path) -> Result<(InputFormat, bool), InputError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let (stem, gzipped) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };
    let format = if stem.ends_with(".csv") {
        InputFormat::Csv
    } else if stem.ends_with(".json") {
        InputFormat::Json
    } else {
        return Err(InputError::UnsupportedFormat(format!(
            "{} (expected .csv, .csv.gz or .json)",
            path.display()
        )));
    };
    Ok((format, gzipped))
}

pub fn open_maybe_gz(path: &Path, gzipped: bool) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path)?;
    if gzipped {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_table(path: &Path) -> Result<Table, InputError> {
    let (format, gzipped) = detect_format(path)?;
    let reader = open_maybe_gz(path, gzipped)?;
    let table = match format {
        InputFormat::Csv => delimited::read_csv(reader)?,
        InputFormat::Json => json::read_json(reader)?,
    };
    info!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.columns().len(),
        "input loaded"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
