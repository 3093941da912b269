//! The `SummaryWriter` trait implemented by all backend writers.

use pm_nav::MarkingSummary;

use crate::StoreResult;

/// Trait implemented by the CSV and SQLite writers.
pub trait SummaryWriter {
    /// Append one finished marking session.  Returns the id assigned to it.
    fn write_summary(&mut self, summary: &MarkingSummary) -> StoreResult<u64>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> StoreResult<()>;
}
