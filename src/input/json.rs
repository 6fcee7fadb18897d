use std::io::Read;

use crate::adapter::Table;
use crate::error::InputError;
use crate::model::record::Record;

/// A JSON array of flat objects whose values are numbers or strings.
pub fn read_json<R: Read>(reader: R) -> Result<Table, InputError> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    Table::from_records(&records, &[])
}

pub fn write_json<W: std::io::Write>(records: &[Record], writer: W) -> Result<(), InputError> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/json.rs"]
mod tests;
