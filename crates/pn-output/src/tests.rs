//! Tests for pn-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{ParcelEventRow, ParcelSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<::csv::StringRecord>) {
        let mut rdr = ::csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (events, _) = read(&dir, "parcel_events.csv");
        assert_eq!(events, ["tick", "unix_time_secs", "kind", "parcel", "detail"]);
        let (summaries, _) = read(&dir, "tick_summaries.csv");
        assert_eq!(
            summaries,
            ["tick", "unix_time_secs", "transitions", "reroutes", "newly_blocked", "in_flight", "queued"]
        );
        let (snapshots, _) = read(&dir, "parcel_snapshots.csv");
        assert_eq!(snapshots, ["tick", "parcel", "status", "position", "eta_secs"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("run").join("01");
        CsvWriter::new(&nested).unwrap();
        assert!(nested.join("parcel_events.csv").exists());
    }

    #[test]
    fn event_with_commas_is_quoted() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&ParcelEventRow {
            tick:           4,
            unix_time_secs: 104,
            kind:           "status",
            parcel:         "P1".into(),
            detail:         "P1: In Transit -> MISSING (Signal Lost, Unknown)".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let (_, rows) = read(&dir, "parcel_events.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "status");
        assert_eq!(&rows[0][4], "P1: In Transit -> MISSING (Signal Lost, Unknown)");
    }

    #[test]
    fn snapshot_without_eta_leaves_cell_empty() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[
            ParcelSnapshotRow { tick: 10, parcel: "A".into(), status: "In Transit", position: 1, eta_secs: Some(7) },
            ParcelSnapshotRow { tick: 10, parcel: "B".into(), status: "Delivered", position: 2, eta_secs: None },
        ])
        .unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:           10,
            unix_time_secs: 10,
            transitions:    1,
            reroutes:       0,
            newly_blocked:  0,
            in_flight:      1,
            queued:         0,
        })
        .unwrap();
        w.finish().unwrap();
        // Idempotent.
        w.finish().unwrap();

        let (_, rows) = read(&dir, "parcel_snapshots.csv");
        assert_eq!(&rows[0][4], "7");
        assert_eq!(&rows[1][4], "");
        let (_, summaries) = read(&dir, "tick_summaries.csv");
        assert_eq!(&summaries[0][2], "1");
    }
}

#[cfg(test)]
mod observer_tests {
    use pn_core::{SimConfig, SimRng};
    use pn_lifecycle::PickupRequest;
    use pn_network::{BoundedDfs, CityGraph};
    use pn_sim::{DispatchConfig, SimBuilder};
    use tempfile::TempDir;

    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver};
    use crate::row::{ParcelEventRow, ParcelSnapshotRow, TickSummaryRow};

    fn graph() -> CityGraph {
        let mut g = CityGraph::new(4);
        let hub = g.add_city("Hub", "A").unwrap();
        let far = g.add_city("Far", "B").unwrap();
        g.add_road(hub, far, 40, 4).unwrap();
        g
    }

    fn config() -> SimConfig {
        SimConfig { total_ticks: 20, output_interval_ticks: 10, start_unix_secs: 1_000, ..SimConfig::default() }
    }

    #[test]
    fn run_writes_all_three_files() {
        let dir = TempDir::new().unwrap();
        let dispatch = DispatchConfig { hub: "Hub".into(), disruption_probability: 0.0, ..DispatchConfig::default() };
        let mut sim = SimBuilder::new(config(), graph(), BoundedDfs::default(), SimRng::new(1))
            .dispatch(dispatch)
            .build()
            .unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config());

        sim.request_pickup(PickupRequest::new("P1", "Far", 2.0, 2), &mut obs).unwrap();
        sim.dispatch_next(&mut obs).unwrap();
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut events = ::csv::Reader::from_path(dir.path().join("parcel_events.csv")).unwrap();
        let events: Vec<_> = events.records().map(|r| r.unwrap()).collect();
        assert_eq!(&events[0][2], "pickup");
        assert_eq!(&events[0][3], "P1");
        assert_eq!(&events[0][1], "1000");
        assert!(events.iter().any(|r| &r[2] == "dispatched"));

        let mut summaries = ::csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.records().count(), 20);

        let mut snapshots = ::csv::Reader::from_path(dir.path().join("parcel_snapshots.csv")).unwrap();
        let ticks: Vec<String> = snapshots.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ticks, ["0", "10"]);
    }

    /// Fails every write with an I/O error.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_event(&mut self, _row: &ParcelEventRow) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Err(std::io::Error::other("second").into())
        }
        fn write_snapshots(&mut self, _rows: &[ParcelSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_kept() {
        let dispatch = DispatchConfig { hub: "Hub".into(), ..DispatchConfig::default() };
        let mut sim = SimBuilder::new(config(), graph(), BoundedDfs::default(), SimRng::new(1))
            .dispatch(dispatch)
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(Broken, &config());
        sim.request_pickup(PickupRequest::new("P1", "Far", 2.0, 1), &mut obs).unwrap();
        sim.run(&mut obs).unwrap();

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(obs.take_error().is_none());
    }
}
