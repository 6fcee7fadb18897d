use std::io::Read;

use crate::adapter::Table;
use crate::error::InputError;
use crate::model::record::Value;

/// Header row first; every data row must have exactly the header's width.
/// Cells are kept as their text; numeric columns are parsed when scored, so
/// identifiers such as `001` are written back unchanged.
pub fn read_csv<R: Read>(reader: R) -> Result<Table, InputError> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(reader);

    let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if header.is_empty() || header.iter().all(String::is_empty) {
        return Err(InputError::Parse("CSV header is empty".to_string()));
    }
    let width = header.len();
    let mut table = Table::new(header)?;

    for (idx, row) in rdr.records().enumerate() {
        let row = row?;
        // line 1 is the header
        let line = row.position().map(|p| p.line()).unwrap_or(idx as u64 + 2);
        if row.len() != width {
            return Err(InputError::Parse(format!(
                "line {line}: expected {width} fields, found {}",
                row.len()
            )));
        }
        table.push_row(row.iter().map(Value::from).collect())?;
    }
    Ok(table)
}

pub fn write_csv<W: std::io::Write>(table: &Table, writer: W) -> Result<(), InputError> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(table.columns())?;
    for idx in 0..table.n_rows() {
        if let Some(row) = table.row(idx) {
            // absent cells are written blank
            let cells = row
                .into_iter()
                .map(|v| v.map(ToString::to_string).unwrap_or_default());
            wtr.write_record(cells)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/delimited.rs"]
mod tests;
