use anyhow::Context;
use census_reader::{CensusConfig, RelationshipVocabulary, analyze_workbook};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Command-line arguments for the census reader
#[derive(Parser, Debug)]
#[command(
    name = "census-reader",
    about = "Household census workbook analyzer",
    version
)]
struct CliArgs {
    /// Path to the census workbook
    #[arg(value_name = "WORKBOOK")]
    workbook: PathBuf,

    /// Name of the sheet holding the census rows
    #[arg(long, value_name = "NAME", default_value = "Sheet1")]
    sheet: String,

    /// Reference date for age computation, defaults to today
    #[arg(long, value_name = "YYYY-MM-DD")]
    reference_date: Option<NaiveDate>,

    /// JSON file replacing the built-in relationship vocabulary
    #[arg(long, value_name = "FILE")]
    vocabulary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();

    let vocabulary = match &args.vocabulary {
        Some(path) => RelationshipVocabulary::from_json_file(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => RelationshipVocabulary::default(),
    };
    let config = CensusConfig {
        reference_date: args
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive()),
        sheet: args.sheet,
        vocabulary,
    };

    info!("{config}");

    let start = Instant::now();
    let report = analyze_workbook(&args.workbook, &config)
        .with_context(|| format!("Failed to analyze workbook {}", args.workbook.display()))?;
    info!(
        "Analyzed {} in {:?}",
        args.workbook.display(),
        start.elapsed()
    );

    for (label, count) in report.lines() {
        info!("{label}: {count}");
    }

    Ok(())
}
