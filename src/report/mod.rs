/// Console report target, writing summaries to standard output.
pub mod console;

/// HTML report target, rendering summaries as a minimal document on disk.
pub mod html;

use crate::error::Result;

/// Sink that renders one analysis summary for a human.
///
/// Implementations only produce a side effect (display or persist); they
/// never return data and never touch the records the summary came from.
pub trait ReportTarget {
    fn print(&self, summary: &str) -> Result<()>;
}
