use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::{Result, StatsError},
    report::ReportTarget,
};

/// Report target that wraps the summary in a minimal HTML document and
/// writes it to a file.
pub struct HtmlReport {
    path: PathBuf,
}

impl HtmlReport {
    pub fn to_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn render(summary: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <title>Analysis Report</title>\n\
             </head>\n\
             <body>\n\
             <h1>Analysis Output</h1>\n\
             <div>{summary}</div>\n\
             </body>\n\
             </html>\n"
        )
    }
}

impl ReportTarget for HtmlReport {
    fn print(&self, summary: &str) -> Result<()> {
        let document = Self::render(summary);
        fs::write(&self.path, document).map_err(|err| StatsError::Report(err.to_string()))?;

        info!("Report written to {}", self.path.display());
        Ok(())
    }
}
