mod helpers;

use std::path::PathBuf;

use dalal::export::{EXPORT_FILE, SORTED_EXPORT_FILE};
use dalal::present::{ALL_TITLE, SORTED_TITLE};
use dalal::{Dalal, Dashboard, DetailReport, ExportStatus, Presenter, SummaryTable};
use dalal_core::{Capability, ErrorKind};
use dalal_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};

use helpers::{snap, sym, two_names};

#[derive(Default)]
struct Recorder {
    details: Vec<DetailReport>,
    tables: Vec<(String, SummaryTable)>,
    statuses: Vec<ExportStatus>,
    unknown: Vec<String>,
}

impl Presenter for Recorder {
    fn show_detail(&mut self, report: &DetailReport) {
        self.details.push(report.clone());
    }
    fn show_table(&mut self, title: &str, table: &SummaryTable) {
        self.tables.push((title.to_string(), table.clone()));
    }
    fn export_status(&mut self, status: &ExportStatus) {
        self.statuses.push(status.clone());
    }
    fn unknown_ticker(&mut self, input: &str) {
        self.unknown.push(input.to_string());
    }
}

async fn seeded() -> (Dalal, DynamicMockController) {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_snapshot_behavior(sym("INFY.NS"), MockBehavior::Return(snap("Technology", "1500")))
        .await;
    ctl.set_snapshot_behavior(sym("WIPRO.NS"), MockBehavior::Return(snap("Energy", "250")))
        .await;
    (Dalal::builder().with_connector(conn).build().unwrap(), ctl)
}

#[tokio::test]
async fn both_exports_share_one_batch() {
    let (dalal, ctl) = seeded().await;
    let registry = two_names();
    let dir = tempfile::tempdir().unwrap();
    let mut dash = Dashboard::new(&dalal, &registry, Recorder::default());

    let all = dash.export_all(&dir.path().join(EXPORT_FILE)).await;
    let sorted = dash
        .export_sorted_by_sector(&dir.path().join(SORTED_EXPORT_FILE))
        .await;

    assert!(all.is_written());
    assert_eq!(
        sorted,
        ExportStatus::Written {
            path: dir.path().join(SORTED_EXPORT_FILE),
            rows: 2
        }
    );
    assert_eq!(ctl.total_calls(Capability::Snapshot).await, 2);

    let rec = dash.into_presenter();
    assert_eq!(rec.tables.len(), 2);
    assert_eq!(rec.tables[0].0, ALL_TITLE);
    assert_eq!(rec.tables[0].1.rows()[0].name, "Infosys");
    assert_eq!(rec.tables[1].0, SORTED_TITLE);
    assert_eq!(rec.tables[1].1.rows()[0].name, "Wipro");
}

#[tokio::test]
async fn failed_export_still_shows_table() {
    let (dalal, _ctl) = seeded().await;
    let registry = two_names();
    let dir = tempfile::tempdir().unwrap();
    let bad: PathBuf = dir.path().join("nope").join(EXPORT_FILE);
    let mut dash = Dashboard::new(&dalal, &registry, Recorder::default());

    let status = dash.export_all(&bad).await;

    let ExportStatus::Failed { path, error } = &status else {
        panic!("expected failure, got {status:?}");
    };
    assert_eq!(path, &bad);
    assert_eq!(error.kind(), ErrorKind::ExportFailure);
    assert_eq!(dash.presenter().tables.len(), 1);
    assert_eq!(dash.presenter().tables[0].1.len(), 2);
    assert_eq!(dash.presenter().statuses, vec![status.clone()]);
}

#[tokio::test]
async fn empty_or_unknown_selection_shows_nothing() {
    let (dalal, ctl) = seeded().await;
    let registry = two_names();
    let mut dash = Dashboard::new(&dalal, &registry, Recorder::default());

    assert!(dash.show_ticker("").await.is_none());
    assert!(dash.show_ticker("no such company").await.is_none());

    assert!(dash.presenter().details.is_empty());
    assert_eq!(dash.presenter().unknown, ["", "no such company"]);
    assert_eq!(ctl.total_calls(Capability::Snapshot).await, 0);
}

#[tokio::test]
async fn selection_by_name_shows_detail() {
    let (dalal, _ctl) = seeded().await;
    let registry = two_names();
    let mut dash = Dashboard::new(&dalal, &registry, Recorder::default());

    let report = dash.show_ticker("Infosys").await.unwrap();

    assert_eq!(report.symbol, sym("INFY.NS"));
    assert_eq!(
        report.snapshot.as_ref().and_then(|s| s.sector.as_deref()),
        Some("Technology")
    );
    assert_eq!(dash.presenter().details.len(), 1);
}

#[tokio::test]
async fn symbol_without_any_data_is_reported_unknown() {
    let (dalal, ctl) = seeded().await;
    let registry = two_names();
    let mut dash = Dashboard::new(&dalal, &registry, Recorder::default());

    assert!(dash.show_ticker("NOPE.NS").await.is_none());

    assert!(dash.presenter().details.is_empty());
    assert_eq!(dash.presenter().unknown, ["NOPE.NS"]);
    assert_eq!(ctl.calls(Capability::Snapshot, &sym("NOPE.NS")).await, 1);
}
