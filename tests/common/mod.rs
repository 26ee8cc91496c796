pub mod mocks;

pub use mocks::MockReport;
