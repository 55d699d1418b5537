//! The `TraceWriter` trait implemented by trace backends.

use crate::{OutputResult, SnapshotRow, SummaryRow};

/// Sink for snapshot and summary rows.
///
/// Errors are stored by [`CsvRecorder`][crate::CsvRecorder] and retrieved with
/// its `take_error`, since observer callbacks cannot return them.
pub trait TraceWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
