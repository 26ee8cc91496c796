mod common;

use std::fs;

use common::MockReport;
use matchstats::{
    core::{
        analyzer::WinsAnalysis,
        reader::{CsvRecordReaderBuilder, MatchRowMapper},
        record::MatchRecord,
        summary::Summary,
    },
    report::console::ConsoleReport,
};

const FIXTURE: &str = "\
10/08/2018,Man United,Leicester,2,1,H,A Marriner
11/08/2018,Bournemouth,Cardiff,2,0,H,K Friend
11/08/2018,Fulham,Crystal Palace,0,2,A,M Dean
12/08/2018,Liverpool,Man United,1,2,A,J Moss
";

#[test]
fn csv_file_to_console_summary() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input_path = dir.path().join("matches.csv");
    fs::write(&input_path, FIXTURE).expect("Failed to write CSV fixture");

    let reader = CsvRecordReaderBuilder::new()
        .has_headers(false)
        .from_path(MatchRowMapper, &input_path)
        .expect("Unable to open CSV file");
    let records: Vec<MatchRecord> = reader.load().expect("Fixture should parse");

    assert_eq!(records.len(), 4);

    let report = ConsoleReport::from_writer(Vec::new());
    let summary = Summary::new(Box::new(WinsAnalysis::new("Man United")), Box::new(report));

    summary
        .build_and_print_report(&records)
        .expect("Report should render");
}

#[test]
fn summary_forwards_exact_text_to_the_report_target() {
    let reader = CsvRecordReaderBuilder::new()
        .has_headers(false)
        .from_reader(MatchRowMapper, FIXTURE.as_bytes());
    let records: Vec<MatchRecord> = reader.load().expect("Fixture should parse");

    let mut report = MockReport::new();
    report
        .expect_print()
        .withf(|summary| summary == "Team Man United won 2 number of games.")
        .times(1)
        .returning(|_| Ok(()));

    let summary = Summary::new(Box::new(WinsAnalysis::new("Man United")), Box::new(report));
    summary
        .build_and_print_report(&records)
        .expect("Report should render");
}

#[test]
fn csv_file_to_html_report() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input_path = dir.path().join("matches.csv");
    let output_path = dir.path().join("report.html");
    fs::write(&input_path, FIXTURE).expect("Failed to write CSV fixture");

    let reader = CsvRecordReaderBuilder::new()
        .has_headers(false)
        .from_path(MatchRowMapper, &input_path)
        .expect("Unable to open CSV file");
    let records = reader.load().expect("Fixture should parse");

    let summary = Summary::wins_with_html_report("Fulham", &output_path);
    summary
        .build_and_print_report(&records)
        .expect("Report should render");

    let html = fs::read_to_string(&output_path).expect("HTML report should exist");
    assert!(html.contains("<html>"));
    assert!(html.contains("Team Fulham won 0 number of games."));
}

#[test]
fn records_survive_multiple_analyses_unchanged() {
    let reader = CsvRecordReaderBuilder::new()
        .has_headers(false)
        .from_reader(MatchRowMapper, FIXTURE.as_bytes());
    let records: Vec<MatchRecord> = reader.load().expect("Fixture should parse");
    let before = records.clone();

    for team in ["Man United", "Liverpool", "Cardiff"] {
        let mut report = MockReport::new();
        report.expect_print().times(1).returning(|_| Ok(()));

        Summary::new(Box::new(WinsAnalysis::new(team)), Box::new(report))
            .build_and_print_report(&records)
            .expect("Report should render");
    }

    assert_eq!(records, before);
}
