//! Mock report target for orchestration tests.
use mockall::mock;

use matchstats::{error::Result, report::ReportTarget};

mock! {
    pub Report {}
    impl ReportTarget for Report {
        fn print(&self, summary: &str) -> Result<()>;
    }
}
