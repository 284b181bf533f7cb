//! # Inventory Service
//!
//! Implements the "scan managed servers" use case.
//!
//! Orchestrates:
//! 1. registering servers in a [`ServerStore`] (single or bulk CSV import).
//! 2. probing them through [`probe::probe_all`].
//! 3. recording every outcome back into the store.

use std::sync::Arc;

use scout_common::config::ProbeConfig;
use scout_common::inventory::server::{InventoryStats, NewServer, OsType, Server};
use scout_common::inventory::store::{BulkImport, ServerStore};
use scout_common::utils::validation;
use tracing::{info, warn};

use crate::probe::{self, FactCollector, ProbeCallback, ProbeResult};

const IP_COLUMNS: &[&str] = &["ip", "ip address", "ip_address", "address"];
const OS_COLUMNS: &[&str] = &["os_type", "os type", "os"];
const PROJECT_COLUMNS: &[&str] = &["project", "project name", "project_name"];

pub struct InventoryService {
    store: Box<dyn ServerStore>,
    collector: Option<Arc<dyn FactCollector>>,
}

impl InventoryService {
    pub fn new(store: Box<dyn ServerStore>) -> Self {
        Self {
            store,
            collector: None,
        }
    }

    pub fn with_collector(mut self, collector: Arc<dyn FactCollector>) -> Self {
        self.collector = Some(collector);
        self
    }

    pub fn store(&self) -> &dyn ServerStore {
        self.store.as_ref()
    }

    pub fn servers(&self) -> Vec<Server> {
        self.store.list()
    }

    pub fn stats(&self) -> InventoryStats {
        self.store.stats()
    }

    /// Registers servers from CSV with an `ip,os_type[,project]` header.
    ///
    /// Bad rows end up in [`BulkImport::errors`]; they never abort the import.
    pub fn import_csv(&mut self, content: &[u8]) -> BulkImport {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content);

        let headers: Vec<String> = match reader.headers() {
            Ok(headers) => headers.iter().map(|h| h.to_lowercase()).collect(),
            Err(e) => {
                return BulkImport {
                    errors: vec![format!("unreadable header: {e}")],
                    ..BulkImport::default()
                };
            }
        };
        let column = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

        let Some(ip_col) = column(IP_COLUMNS) else {
            return BulkImport {
                errors: vec!["missing 'ip' column".to_string()],
                ..BulkImport::default()
            };
        };
        let os_col: Option<usize> = column(OS_COLUMNS);
        let project_col: Option<usize> = column(PROJECT_COLUMNS);

        let mut servers: Vec<NewServer> = Vec::new();
        let mut errors: Vec<String> = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let line = idx + 2;
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    errors.push(format!("line {line}: {e}"));
                    continue;
                }
            };

            let ip: &str = record.get(ip_col).unwrap_or("");
            if ip.is_empty() && record.iter().all(str::is_empty) {
                continue;
            }
            let os_type: Option<&str> = os_col.and_then(|col| record.get(col));
            let os_type: OsType = match validation::validate_os_type(os_type) {
                Ok(Some(os_type)) => os_type,
                Ok(None) => {
                    errors.push(format!("line {line}: OS type is required"));
                    continue;
                }
                Err(e) => {
                    errors.push(format!("line {line}: {e}"));
                    continue;
                }
            };
            let project: Option<String> = project_col
                .and_then(|col| record.get(col))
                .and_then(|value| validation::sanitize_string(value, None));

            servers.push(NewServer {
                ip: ip.to_string(),
                os_type,
                project,
            });
        }

        let mut result = self.store.bulk_add(servers);
        errors.append(&mut result.errors);
        result.errors = errors;

        info!(
            "Imported {} servers, {} duplicates skipped, {} rejected",
            result.added,
            result.skipped,
            result.errors.len()
        );
        result
    }

    /// Probes every registered server and stores the outcomes.
    pub async fn scan_all(
        &mut self,
        cfg: &ProbeConfig,
        on_probe_done: Option<ProbeCallback>,
    ) -> Vec<ProbeResult> {
        let servers: Vec<Server> = self.store.list();
        let results: Vec<ProbeResult> =
            probe::probe_all(servers, cfg, self.collector.clone(), on_probe_done).await;

        for result in &results {
            if let Err(e) = self.store.record_outcome(result.server_id, result.outcome.clone()) {
                warn!("could not record probe of {}: {e}", result.ip);
            }
        }
        results
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use scout_common::inventory::server::ServerStatus;
    use std::time::Duration;
    use tokio::net::TcpListener;

    fn service() -> InventoryService {
        InventoryService::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn import_reads_named_columns_in_any_order() {
        let mut inventory = service();
        let content = b"Project,OS_Type,IP\ncore,Linux,10.0.0.1\n,windows,10.0.0.2\n\n";
        let result = inventory.import_csv(content);

        assert_eq!(result.added, 2);
        assert!(result.errors.is_empty());
        let servers = inventory.servers();
        assert_eq!(servers[0].project.as_deref(), Some("core"));
        assert_eq!(servers[1].os_type, OsType::Windows);
        assert_eq!(servers[1].project, None);
    }

    #[test]
    fn import_collects_row_errors() {
        let mut inventory = service();
        let content = b"ip,os_type\n10.0.0.1,Linux\n10.0.0.2,\n10.0.0.3,beos\nnope,Linux\n10.0.0.1,linux\n";
        let result = inventory.import_csv(content);

        assert_eq!(result.added, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(
            result.errors,
            [
                "line 3: OS type is required",
                "line 4: OS type must be 'Windows' or 'Linux', got 'beos'",
                "nope: invalid IP address format: nope",
            ]
        );
    }

    #[test]
    fn import_without_ip_column_adds_nothing() {
        let mut inventory = service();
        let result = inventory.import_csv(b"host,os\nweb01,linux\n");
        assert_eq!(result.added, 0);
        assert_eq!(result.errors, ["missing 'ip' column"]);
    }

    #[tokio::test]
    async fn scan_all_records_outcomes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let cfg = ProbeConfig {
            connect_timeout: Duration::from_millis(500),
            ports: vec![port],
            ..ProbeConfig::default()
        };

        let mut inventory = service();
        inventory.import_csv(b"ip,os_type\n127.0.0.1,linux\n");
        let results = inventory.scan_all(&cfg, None).await;

        assert_eq!(results.len(), 1);
        assert!(results[0].outcome.is_online());
        assert_eq!(inventory.servers()[0].status, ServerStatus::Online);
        assert_eq!(inventory.stats().online, 1);
    }
}
