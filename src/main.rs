use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use kira_dietindex::adapter::{Representation, score_auxiliary};
use kira_dietindex::auxiliary::AuxScore;
use kira_dietindex::error::Error;
use kira_dietindex::indices::{DietIndex, builtin_indices};
use kira_dietindex::input::load_table;
use kira_dietindex::logging;
use kira_dietindex::pipeline::evaluate_detailed;
use kira_dietindex::report::output::{OutputFormat, WrittenReports, write_reports};
use kira_dietindex::report::{build_summary, summarize_evaluation};

#[derive(Debug, Parser)]
#[command(name = "kira-dietindex", version)]
#[command(about = "Score dietary-quality indices from per-respondent intake tables", long_about = None)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one index and write scores plus summary reports
    Run {
        /// Intake table (.csv, .csv.gz or .json)
        #[arg(short, long)]
        input: PathBuf,

        /// acs2020_v1 | acs2020_v2 | ahei
        #[arg(long)]
        index: String,

        /// Output directory
        #[arg(short, long)]
        out: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Write summary.json and report.txt only
        #[arg(long)]
        summary_only: bool,
    },
    /// Append DII_ALL, MIND_ALL and HEI_ALL
    Auxiliary {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        out: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// List supported indices and their required columns
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RunConfig {
    Index {
        input: PathBuf,
        index: DietIndex,
        out_dir: PathBuf,
        format: OutputFormat,
        summary_only: bool,
    },
    Auxiliary {
        input: PathBuf,
        out_dir: PathBuf,
        format: OutputFormat,
    },
    List,
}

impl RunConfig {
    fn from_command(command: Command) -> Result<Self, Error> {
        Ok(match command {
            Command::Run {
                input,
                index,
                out,
                format,
                summary_only,
            } => RunConfig::Index {
                input,
                index: index.parse()?,
                out_dir: out,
                format,
                summary_only,
            },
            Command::Auxiliary { input, out, format } => RunConfig::Auxiliary {
                input,
                out_dir: out,
                format,
            },
            Command::List => RunConfig::List,
        })
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Error> {
    match RunConfig::from_command(command)? {
        RunConfig::Index {
            input,
            index,
            out_dir,
            format,
            summary_only,
        } => {
            let written = run_index(&input, index, &out_dir, format, summary_only)?;
            log_written(&written);
        }
        RunConfig::Auxiliary {
            input,
            out_dir,
            format,
        } => {
            let written = run_auxiliary(&input, &out_dir, format)?;
            log_written(&written);
        }
        RunConfig::List => print!("{}", render_index_list()),
    }
    Ok(())
}

fn run_index(
    input: &Path,
    index: DietIndex,
    out_dir: &Path,
    format: OutputFormat,
    summary_only: bool,
) -> Result<WrittenReports, Error> {
    let table = load_table(input)?;
    let def = index.definition();
    let eval = evaluate_detailed(&table.to_records(), def)?;
    let summary = summarize_evaluation(&eval)?;
    let scored = table.from_scored(eval.records, &def.output_fields())?;
    write_reports(out_dir, &scored, &summary, format, summary_only)
}

fn run_auxiliary(
    input: &Path,
    out_dir: &Path,
    format: OutputFormat,
) -> Result<WrittenReports, Error> {
    let table = load_table(input)?;
    let scored = score_auxiliary(&table)?;
    let fields: Vec<&str> = AuxScore::ALL.iter().map(|a| a.output()).collect();
    let summary = build_summary(
        "auxiliary",
        "Supplementary scores (DII, MIND, HEI)",
        &scored.to_records(),
        &fields,
        &[],
    )?;
    write_reports(out_dir, &scored, &summary, format, false)
}

fn log_written(written: &WrittenReports) {
    if let Some(scores) = &written.scores {
        info!(path = %scores.display(), "scores");
    }
    info!(path = %written.summary.display(), "summary");
    info!(path = %written.report.display(), "report");
}

fn render_index_list() -> String {
    let mut out = String::new();
    for def in builtin_indices() {
        out.push_str(&format!("{}\t{}\n", def.index, def.label));
        out.push_str(&format!("  requires: {}\n", def.required.join(", ")));
        for comp in def.components {
            let scope = if comp.strategy.is_grouped() {
                format!(" within {}", def.group_field)
            } else {
                String::new()
            };
            out.push_str(&format!(
                "  {:<24} {}{}\n",
                comp.output,
                comp.strategy.label(),
                scope
            ));
        }
        out.push_str(&format!("  outputs:  {}\n", def.output_fields().join(", ")));
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
