use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapter::Table;
use crate::error::{Error, InputError};
use crate::input::delimited::write_csv;
use crate::input::json::write_json;
use crate::report::SummaryData;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn scores_file(self) -> &'static str {
        match self {
            OutputFormat::Csv => "scores.csv",
            OutputFormat::Json => "scores.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub scores: Option<PathBuf>,
    pub summary: PathBuf,
    pub report: PathBuf,
}

/// Writes the scored table (unless `summary_only`), `summary.json` and
/// `report.txt` into `out_dir`, creating it if needed.
pub fn write_reports(
    out_dir: &Path,
    scored: &Table,
    summary: &SummaryData,
    format: OutputFormat,
    summary_only: bool,
) -> Result<WrittenReports, Error> {
    fs::create_dir_all(out_dir).map_err(|source| Error::Output {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let scores = if summary_only {
        None
    } else {
        let path = out_dir.join(format.scores_file());
        write_with(&path, |w| match format {
            OutputFormat::Csv => write_csv(scored, w),
            OutputFormat::Json => write_json(&scored.to_records(), w),
        })?;
        info!(path = %path.display(), rows = scored.n_rows(), "scores written");
        Some(path)
    };

    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(summary).map_err(InputError::from)?;
    write_text(&summary_path, &json)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(summary))?;
    info!(dir = %out_dir.display(), "reports written");

    Ok(WrittenReports {
        scores,
        summary: summary_path,
        report: report_path,
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), Error> {
    write_with(path, |w| {
        w.write_all(contents.as_bytes())?;
        w.write_all(b"\n")?;
        Ok(())
    })
}

fn write_with<F>(path: &Path, write: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), InputError>,
{
    let file = File::create(path).map_err(|source| Error::Output {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = BufWriter::new(file);
    write(&mut w)
        .and_then(|()| w.flush().map_err(InputError::from))
        .map_err(|e| match e {
            InputError::Io(source) => Error::Output {
                path: path.to_path_buf(),
                source,
            },
            other => Error::Input(other),
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/output.rs"]
mod tests;
