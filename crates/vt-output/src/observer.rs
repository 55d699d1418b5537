//! `CsvRecorder<W>` bridges the snapshot stream to a `TraceWriter`.

use tracing::debug;

use vt_sim::{CompletionSummary, Observer, StateSnapshot, UpdateKind};

use crate::row::{SnapshotRow, SummaryRow};
use crate::writer::TraceWriter;
use crate::{CsvWriter, OutputError, OutputResult};

/// An [`Observer`] that writes every snapshot to a [`TraceWriter`], plus a
/// summary row each time the route is finished.
///
/// Errors from the writer are stored internally because observer callbacks
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct CsvRecorder<W: TraceWriter = CsvWriter> {
    writer:     W,
    next_seq:   u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> CsvRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, next_seq: 0, last_error: None }
    }

    /// Number of snapshots seen so far.
    pub fn recorded(&self) -> u64 {
        self.next_seq
    }

    /// Flush the writer.  Call once the run is over.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer (e.g. to inspect rows after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> Observer<StateSnapshot> for CsvRecorder<W> {
    fn notify(&mut self, snap: &StateSnapshot) {
        let row = SnapshotRow::from_snapshot(self.next_seq, snap);
        self.next_seq += 1;
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);

        if snap.kind == UpdateKind::Finished {
            let summary = CompletionSummary {
                distance_km:   snap.cumulative_distance_km,
                duration_secs: snap.elapsed_secs,
            };
            debug!(distance_km = summary.distance_km, "recording completion summary");
            let result = self.writer.write_summary(&SummaryRow::from(summary));
            self.store_err(result);
        }
    }
}
