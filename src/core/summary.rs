use std::path::Path;

use log::debug;

use crate::{
    core::analyzer::{Analyzer, WinsAnalysis},
    core::record::MatchRecord,
    error::Result,
    report::{console::ConsoleReport, html::HtmlReport, ReportTarget},
};

/// Orchestrates one [`Analyzer`] and one [`ReportTarget`].
///
/// Running a summary executes the analysis over the given records and hands
/// the resulting text to the report target. No state is retained between
/// runs beyond the two injected collaborators.
pub struct Summary {
    analyzer: Box<dyn Analyzer>,
    report: Box<dyn ReportTarget>,
}

impl Summary {
    pub fn new(analyzer: Box<dyn Analyzer>, report: Box<dyn ReportTarget>) -> Self {
        Self { analyzer, report }
    }

    /// Wins analysis for `team`, printed to standard output.
    pub fn wins_with_console_report(team: impl Into<String>) -> Self {
        Self::new(
            Box::new(WinsAnalysis::new(team)),
            Box::new(ConsoleReport::stdout()),
        )
    }

    /// Wins analysis for `team`, rendered as an HTML document at `path`.
    pub fn wins_with_html_report(team: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::new(
            Box::new(WinsAnalysis::new(team)),
            Box::new(HtmlReport::to_path(path)),
        )
    }

    /// Runs the analysis and renders its result.
    pub fn build_and_print_report(&self, records: &[MatchRecord]) -> Result<()> {
        debug!("Start of summary over {} records", records.len());

        let summary = self.analyzer.run(records);
        self.report.print(&summary)?;

        debug!("End of summary");
        Ok(())
    }
}
