#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use scout_common::compare::mode::CompareMode;
use scout_common::config::{NormalizerConfig, ProbeConfig, RawCountPolicy};
use scout_common::inventory::server::{HostFacts, Server, ServerStatus};
use scout_common::inventory::source::SourceName;
use scout_core::compare::ComparisonService;
use scout_core::inventory::InventoryService;
use scout_core::parser::{ScanParser, parser_for};
use scout_core::probe::FactCollector;
use scout_core::store::MemoryStore;
use tokio::net::TcpListener;

/// Names servers after the last octet of their address.
struct OctetCollector;

#[async_trait]
impl FactCollector for OctetCollector {
    async fn collect(&self, server: &Server) -> Result<HostFacts> {
        let octet = server.ip.rsplit('.').next().unwrap_or_default();
        Ok(HostFacts {
            hostname: Some(format!("SRV{octet}.corp.local")),
            ip_addresses: vec![server.ip.clone()],
            ..HostFacts::default()
        })
    }
}

async fn open_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// Loopback answers on the test listener. 192.0.2.0/24 (TEST-NET-1) never does.
const SERVERS: &str = "ip,os_type,project\n127.0.0.1,Linux,core\nlocalhost,Windows,core\n192.0.2.10,Linux,edge\n";

#[tokio::test]
async fn probe_run_updates_the_inventory() {
    let (_listener, port) = open_port().await;
    let cfg = ProbeConfig {
        connect_timeout: Duration::from_millis(300),
        ports: vec![port],
        ..ProbeConfig::default()
    };

    let mut inventory = InventoryService::new(Box::new(MemoryStore::new()))
        .with_collector(Arc::new(OctetCollector));
    let import = inventory.import_csv(SERVERS.as_bytes());
    assert_eq!(import.added, 3);

    let results = inventory.scan_all(&cfg, None).await;
    assert_eq!(results.len(), 3);

    let servers = inventory.servers();
    assert_eq!(servers[0].status, ServerStatus::Online);
    assert_eq!(servers[0].hostname(), Some("SRV1.corp.local"));
    assert_eq!(servers[2].status, ServerStatus::Offline);
    assert!(servers[2].last_error.is_some());

    let stats = inventory.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.offline, 1);
}

#[tokio::test]
async fn live_scan_reconciles_against_hpsm() {
    let (_listener, port) = open_port().await;
    let cfg = ProbeConfig {
        connect_timeout: Duration::from_millis(300),
        ports: vec![port],
        ..ProbeConfig::default()
    };
    let normalizer = NormalizerConfig::new(["corp.local"], RawCountPolicy::NonBlank);

    let mut inventory = InventoryService::new(Box::new(MemoryStore::new()))
        .with_collector(Arc::new(OctetCollector));
    inventory.import_csv(b"ip,os_type\n127.0.0.1,linux\n");
    let results = inventory.scan_all(&cfg, None).await;

    let scan = ScanParser::from_probes(&results, &normalizer);
    let hpsm = parser_for(SourceName::Hpsm).parse(b"Hostname\nsrv1\nsrv9\n", &normalizer);

    let report = ComparisonService::new(normalizer)
        .compare_sets(CompareMode::ScanHpsm, vec![scan, hpsm])
        .unwrap();

    let matching = report.partition("matching").unwrap();
    assert_eq!(matching.keys().collect::<Vec<_>>(), ["srv1"]);
    assert_eq!(matching.displays().collect::<Vec<_>>(), ["SRV1.corp.local"]);
    assert_eq!(report.partition("only_in_hpsm").map(|p| p.count), Some(1));
}
