//! `vt-output`: consumers of the traversal engine's snapshot stream.
//!
//! | Type             | Role                                                        |
//! |------------------|-------------------------------------------------------------|
//! | [`CsvRecorder`]  | Writes every snapshot (and the completion summary) to CSV   |
//! | [`TrailTracker`] | Keeps the remaining route path in step with the vehicle     |
//!
//! Both implement `vt_sim::Observer<StateSnapshot>` and are registered with
//! `Notifier::subscribe_observer`, so the caller keeps an `Rc` to read them
//! back after the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vt_output::{CsvRecorder, CsvWriter};
//!
//! let recorder = Rc::new(RefCell::new(CsvRecorder::new(CsvWriter::new(dir)?)));
//! engine.notifier().subscribe_observer(Rc::clone(&recorder));
//! FixedStepDriver::from_config(&config).run(&mut engine);
//! recorder.borrow_mut().finish();
//! if let Some(e) = recorder.borrow_mut().take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod trail;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CsvRecorder;
pub use row::{SnapshotRow, SummaryRow};
pub use trail::{Trail, TrailTracker};
pub use writer::TraceWriter;
