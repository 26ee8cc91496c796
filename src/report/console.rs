use std::{
    cell::RefCell,
    io::{self, Write},
};

use crate::{
    error::{Result, StatsError},
    report::ReportTarget,
};

/// Report target that writes the summary as a single line of text.
///
/// Generic over the destination so tests can capture the output in a buffer;
/// production code uses [`ConsoleReport::stdout`].
pub struct ConsoleReport<W: Write> {
    out: RefCell<W>,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ReportTarget for ConsoleReport<W> {
    fn print(&self, summary: &str) -> Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{summary}").map_err(|err| StatsError::Report(err.to_string()))?;
        out.flush().map_err(|err| StatsError::Report(err.to_string()))
    }
}
