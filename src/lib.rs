/*!
 # matchstats

 A small batch pipeline for football match results: read a CSV file of
 played matches, run an analysis over the typed records, and render the
 result through a report target.

 ## Core Concepts

 - **RowMapper:** An abstraction that turns one raw CSV row into a typed
   record. [`MatchRowMapper`](core::reader::MatchRowMapper) produces
   [`MatchRecord`](core::record::MatchRecord)s; alternate schemas can reuse
   the same reader by supplying their own mapper.
 - **CsvRecordReader:** Reads a CSV source, applies the row mapper to each
   row, and exposes the resulting records. Built through
   [`CsvRecordReaderBuilder`](core::reader::CsvRecordReaderBuilder).
 - **Analyzer:** The business logic of a statistic. Consumes the full record
   sequence and produces a textual summary.
 - **ReportTarget:** The output of a run, one summary at a time. Console and
   HTML targets are provided.
 - **Summary:** Orchestrates one analyzer and one report target.

 ## Getting Started

```rust
use matchstats::{
    core::{
        reader::{CsvRecordReaderBuilder, MatchRowMapper},
        summary::Summary,
    },
    error::StatsError,
};

fn main() -> Result<(), StatsError> {
    let csv = "\
10/08/2018,Man United,Leicester,2,1,H,A Marriner
11/08/2018,Bournemouth,Cardiff,2,0,H,K Friend
11/08/2018,Huddersfield,Chelsea,0,3,A,C Kavanagh";

    let reader = CsvRecordReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .from_reader(MatchRowMapper, csv.as_bytes());

    let records = reader.load()?;

    let summary = Summary::wins_with_console_report("Man United");
    summary.build_and_print_report(&records)?;

    Ok(())
}
```
 */

/// Core module: records, reader, analyzers and orchestration
pub mod core;

/// Error types for the pipeline
pub mod error;

#[doc(inline)]
pub use error::*;

/// Report targets (console and HTML)
pub mod report;
