#![cfg(test)]
use scout_common::compare::mode::CompareMode;
use scout_common::compare::report::ComparisonReport;
use scout_common::config::{NormalizerConfig, RawCountPolicy};
use scout_common::error::CompareError;
use scout_common::inventory::source::SourceName;
use scout_core::compare::{ComparisonService, SourcePayload};
use scout_core::export::{self, ExportFormat};
use serde_json::json;

const SCAN: &str = "WEB01.corp.local\nweb02\n\ndb01\nWEB01\n10.20.0.5\n";
const HPSM: &str = "Asset,Hostname,Status\nA-1,web01,Active\nA-2,web03,Active\nA-3,,Retired\nA-4,10.20.0.5,Active\n";
const ZABBIX: &str = "Name;Host\nFrontend;web01\nDatabase;db01.corp.local\nEdge;edge07\n";

fn service() -> ComparisonService {
    ComparisonService::new(NormalizerConfig::new(["corp.local"], RawCountPolicy::NonBlank))
}

fn payloads() -> Vec<SourcePayload> {
    vec![
        SourcePayload::new(SourceName::Scan, SCAN),
        SourcePayload::new(SourceName::Hpsm, HPSM),
        SourcePayload::new(SourceName::Zabbix, ZABBIX),
    ]
}

fn keys(report: &ComparisonReport, partition: &str) -> Vec<String> {
    report
        .partition(partition)
        .map(|p| p.keys().map(str::to_string).collect())
        .unwrap_or_else(|| panic!("missing partition {partition}"))
}

/// Every host of every source lands in exactly one partition.
fn assert_partitioned(report: &ComparisonReport) {
    let mut seen: Vec<&str> = report.partitions().iter().flat_map(|p| p.keys()).collect();
    let total = seen.len();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), total, "a host appears in two partitions");

    for summary in report.sources() {
        let listed: usize = report
            .partitions()
            .iter()
            .filter(|p| p.sources.contains(&summary.source))
            .map(|p| p.count)
            .sum();
        assert_eq!(listed, summary.normalized_count, "{} hosts not all placed", summary.source);
    }
}

#[test]
fn scan_hpsm_comparison() {
    let report = service().compare(CompareMode::ScanHpsm, &payloads()).unwrap();

    assert_eq!(keys(&report, "matching"), ["10.20.0.5", "web01"]);
    assert_eq!(keys(&report, "only_in_scan"), ["db01", "web02"]);
    assert_eq!(keys(&report, "only_in_hpsm"), ["web03"]);

    let scan = report.source(SourceName::Scan).unwrap();
    assert_eq!((scan.raw_count, scan.normalized_count), (5, 4));
    let hpsm = report.source(SourceName::Hpsm).unwrap();
    assert_eq!((hpsm.raw_count, hpsm.normalized_count), (3, 3));
    assert_partitioned(&report);
}

#[test]
fn full_comparison_has_seven_partitions() {
    let report = service().compare(CompareMode::Full, &payloads()).unwrap();

    let names: Vec<&str> = report.partitions().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "in_all_three",
            "in_scan_and_hpsm_only",
            "in_scan_and_zabbix_only",
            "in_hpsm_and_zabbix_only",
            "only_in_scan",
            "only_in_hpsm",
            "only_in_zabbix",
        ]
    );
    assert_eq!(keys(&report, "in_all_three"), ["web01"]);
    assert_eq!(keys(&report, "in_scan_and_hpsm_only"), ["10.20.0.5"]);
    assert_eq!(keys(&report, "in_scan_and_zabbix_only"), ["db01"]);
    assert!(keys(&report, "in_hpsm_and_zabbix_only").is_empty());
    assert_eq!(keys(&report, "only_in_scan"), ["web02"]);
    assert_eq!(keys(&report, "only_in_hpsm"), ["web03"]);
    assert_eq!(keys(&report, "only_in_zabbix"), ["edge07"]);
    assert_partitioned(&report);
}

#[test]
fn display_names_come_from_the_first_source() {
    let report = service().compare(CompareMode::Full, &payloads()).unwrap();
    let shared = report.partition("in_all_three").unwrap();
    assert_eq!(shared.displays().collect::<Vec<_>>(), ["WEB01.corp.local"]);

    let report = service().compare(CompareMode::HpsmZabbix, &payloads()).unwrap();
    let shared = report.partition("matching").unwrap();
    assert_eq!(shared.displays().collect::<Vec<_>>(), ["web01"]);
}

#[test]
fn upload_order_does_not_matter() {
    let mut reversed = payloads();
    reversed.reverse();

    for mode in CompareMode::ALL {
        let forward = service().compare(mode, &payloads()).unwrap();
        let backward = service().compare(mode, &reversed).unwrap();
        assert_eq!(forward, backward, "{mode} differs with reversed uploads");
    }
}

#[test]
fn missing_upload_is_an_error() {
    let only_scan = [SourcePayload::new(SourceName::Scan, SCAN)];
    let err = service().compare(CompareMode::ScanZabbix, &only_scan).unwrap_err();
    assert_eq!(err, CompareError::InputMissing { missing: vec![SourceName::Zabbix] });
}

#[test]
fn legacy_fields_match_the_inventory_ui() {
    let report = service().compare(CompareMode::ScanZabbix, &payloads()).unwrap();
    let fields = report.to_fields();

    assert_eq!(fields["compare_type"], json!("scan-zabbix"));
    assert_eq!(fields["scan_count"], json!(4));
    assert_eq!(fields["zabbix_count"], json!(3));
    assert_eq!(fields["matching"], json!(["db01", "WEB01.corp.local"]));
    assert_eq!(fields["missing_in_zabbix"], json!(["10.20.0.5", "web02"]));
    assert_eq!(fields["missing_in_scan"], json!(["edge07"]));
}

#[test]
fn report_is_handed_from_compare_to_export() {
    let report = service().compare(CompareMode::Full, &payloads()).unwrap();

    let mut saved: Vec<u8> = Vec::new();
    ExportFormat::Json.exporter().export(&report, &mut saved).unwrap();
    let reloaded = export::read_report(saved.as_slice()).unwrap();
    assert_eq!(reloaded, report);

    let mut csv: Vec<u8> = Vec::new();
    ExportFormat::Csv.exporter().export(&reloaded, &mut csv).unwrap();
    let text = String::from_utf8(csv).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "partition,sources,hostname,key");
    assert_eq!(lines[1], "in_all_three,scan+hpsm+zabbix,WEB01.corp.local,web01");
    assert!(lines.contains(&"in_hpsm_and_zabbix_only,hpsm+zabbix,,"));
    assert_eq!(lines.len(), 1 + 7);
}
