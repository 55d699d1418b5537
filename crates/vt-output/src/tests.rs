//! Unit tests for vt-output.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;

    use vt_core::{GeoPoint, SimConfig};
    use vt_route::Route;
    use vt_sim::TraversalEngine;

    use crate::writer::TraceWriter;
    use crate::{OutputError, OutputResult, SnapshotRow, SummaryRow};

    /// Equator route, three waypoints ~111 m apart.
    pub fn equator_route() -> Arc<Route> {
        Arc::new(
            Route::from_points([
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 0.001),
                GeoPoint::new(0.0, 0.002),
            ])
            .unwrap(),
        )
    }

    pub fn engine(route: Arc<Route>) -> TraversalEngine {
        TraversalEngine::new(route, &SimConfig::default()).unwrap()
    }

    /// In-memory writer; optionally fails every snapshot write.
    #[derive(Default)]
    pub struct MemWriter {
        pub snapshots: Vec<SnapshotRow>,
        pub summaries: Vec<SummaryRow>,
        pub finishes:  usize,
        pub fail:      bool,
    }

    impl TraceWriter for MemWriter {
        fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
            if self.fail {
                let msg = format!("row {} rejected", row.seq);
                return Err(OutputError::Io(std::io::Error::other(msg)));
            }
            self.snapshots.push(*row);
            Ok(())
        }

        fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
            self.summaries.push(row.clone());
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod csv_tests {
    use chrono::DateTime;
    use tempfile::TempDir;
    use vt_sim::UpdateKind;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{SnapshotRow, SummaryRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(seq: u64, recorded: Option<f64>) -> SnapshotRow {
        SnapshotRow {
            seq,
            kind:                   UpdateKind::Advanced,
            lat:                    17.385044,
            lon:                    78.486671,
            bearing_deg:            45.04,
            speed_kmh:              36.0,
            speed_multiplier:       1.0,
            recorded_speed_kmh:     recorded,
            cumulative_distance_km: 0.0126,
            segment_index:          2,
            elapsed_secs:           1.25,
            recorded_at:            recorded.and(DateTime::from_timestamp(1_721_469_600, 0)),
        }
    }

    #[test]
    fn files_created_in_new_directory() {
        let dir = tmp();
        let out = dir.path().join("trace");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("snapshots.csv").exists());
        assert!(out.join("summary.csv").exists());
    }

    #[test]
    fn headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADER);
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&row(0, Some(27.44))).unwrap();
        w.write_snapshot(&row(1, None)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "advanced");
        assert_eq!(&rows[0][2], "17.385044");
        assert_eq!(&rows[0][4], "45.0");
        assert_eq!(&rows[0][7], "27.4");
        assert_eq!(&rows[0][8], "0.013"); // km, 3 dp
        assert_eq!(&rows[0][9], "2");
        assert_eq!(&rows[0][11], "2024-07-20T10:00:00+00:00");
        assert_eq!(&rows[1][7], ""); // no recorded speed
        assert_eq!(&rows[1][11], "");
    }

    #[test]
    fn summary_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&SummaryRow {
            distance_km:    1.5,
            duration_secs:  125.0,
            duration_label: "2:05".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1.500");
        assert_eq!(&rows[0][2], "2:05");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod recorder {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tempfile::TempDir;
    use vt_sim::{FixedStepDriver, Observer, UpdateKind};

    use super::helpers::{MemWriter, engine, equator_route};
    use crate::{CsvRecorder, CsvWriter, OutputError};

    #[test]
    fn records_every_snapshot_and_one_summary() {
        let mut eng = engine(equator_route());
        let rec = Rc::new(RefCell::new(CsvRecorder::new(MemWriter::default())));
        eng.notifier().subscribe_observer(Rc::clone(&rec));

        let report = FixedStepDriver::new(1.0, 100).run(&mut eng);
        assert!(report.finished);
        rec.borrow_mut().finish();

        let rec = rec.borrow();
        let w = rec.writer();
        // Started, one per tick.
        assert_eq!(w.snapshots.len() as u64, report.ticks + 1);
        assert_eq!(rec.recorded(), report.ticks + 1);
        assert_eq!(w.snapshots[0].kind, UpdateKind::Started);
        assert_eq!(w.snapshots.last().unwrap().kind, UpdateKind::Finished);
        assert!(w.snapshots.iter().enumerate().all(|(i, r)| r.seq == i as u64));

        assert_eq!(w.summaries.len(), 1);
        let expected_km = eng.route().total_length_m() / 1_000.0;
        assert!((w.summaries[0].distance_km - expected_km).abs() < 1e-12);
        assert_eq!(w.summaries[0].duration_label, "0:22");
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn keeps_first_error_only() {
        let mut rec = CsvRecorder::new(MemWriter { fail: true, ..MemWriter::default() });
        let mut eng = engine(equator_route());
        eng.start();
        let snap = eng.snapshot(UpdateKind::Started);
        rec.notify(&snap);
        rec.notify(&snap);

        match rec.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "row 0 rejected"),
            other => panic!("expected the first I/O error, got {other:?}"),
        }
        assert!(rec.take_error().is_none());
        assert_eq!(rec.recorded(), 2);
    }

    #[test]
    fn writes_csv_trace_end_to_end() {
        let dir: TempDir = tempfile::tempdir().expect("create temp dir");
        let mut eng = engine(equator_route());
        let rec = Rc::new(RefCell::new(CsvRecorder::new(CsvWriter::new(dir.path()).unwrap())));
        eng.notifier().subscribe_observer(Rc::clone(&rec));

        FixedStepDriver::new(0.5, 1_000).run(&mut eng);
        rec.borrow_mut().finish();
        assert!(rec.borrow_mut().take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len() as u64, rec.borrow().recorded());
        assert_eq!(&rows[rows.len() - 1][1], "finished");

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }
}

#[cfg(test)]
mod trail {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vt_core::GeoPoint;
    use vt_spatial::Degrees;

    use super::helpers::{engine, equator_route};
    use crate::{Trail, TrailTracker};

    #[test]
    fn whole_route_visible_before_first_update() {
        let route = equator_route();
        let tracker = TrailTracker::new(route.clone());
        assert_eq!(tracker.trail().points().len(), route.len());
        assert!(tracker.trail().is_visible());
    }

    #[test]
    fn update_trims_travelled_part() {
        let route = equator_route();
        let mut tracker = TrailTracker::with_space(route, Degrees);
        let points = tracker.update(GeoPoint::new(0.0, 0.0015)).points().to_vec();
        assert_eq!(points.len(), 2);
        assert!((points[0].lon - 0.0015).abs() < 1e-12);
        assert_eq!(points[1], GeoPoint::new(0.0, 0.002));
    }

    #[test]
    fn follows_engine_and_hides_on_finish() {
        let route = equator_route();
        let mut eng = engine(route.clone());
        let tracker = Rc::new(RefCell::new(TrailTracker::new(route.clone())));
        eng.notifier().subscribe_observer(Rc::clone(&tracker));

        eng.start();
        eng.advance(15.0); // 150 m, on the second segment
        {
            let t = tracker.borrow();
            let points = t.trail().points();
            assert_eq!(points.len(), 2);
            assert!((points[0].lon - eng.state().position.lon).abs() < 1e-12);
            assert_eq!(points[1], route.end());
        }

        eng.advance(15.0);
        assert!(eng.is_finished());
        assert_eq!(*tracker.borrow().trail(), Trail::Hidden);

        eng.reset();
        assert_eq!(tracker.borrow().trail().points().len(), route.len());
    }
}
