use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use matchstats::core::{
    reader::{CsvRecordReaderBuilder, MatchRowMapper},
    summary::Summary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Print the summary to standard output
    Console,
    /// Write the summary as a minimal HTML document
    Html,
}

#[derive(Parser)]
#[command(name = "matchstats")]
#[command(about = "Compute win statistics from a CSV file of match results")]
struct Args {
    /// Path to the match results CSV file
    csv_path: PathBuf,

    /// Team to compute win statistics for
    #[arg(short, long, default_value = "Man United")]
    team: String,

    /// Report output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Output path of the HTML report
    #[arg(short, long, default_value = "report.html")]
    output: PathBuf,

    /// Treat the first row of the file as a header row
    #[arg(long)]
    has_headers: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let reader = CsvRecordReaderBuilder::new()
        .has_headers(args.has_headers)
        .from_path(MatchRowMapper, &args.csv_path)?;
    let records = reader.load()?;

    info!(
        "Loaded {} match records from {}",
        records.len(),
        args.csv_path.display()
    );

    let summary = match args.report {
        ReportFormat::Console => Summary::wins_with_console_report(&args.team),
        ReportFormat::Html => Summary::wins_with_html_report(&args.team, &args.output),
    };

    summary.build_and_print_report(&records)?;

    Ok(())
}
