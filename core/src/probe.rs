//! # Liveness Probing
//!
//! Checks whether the managed servers answer on their management channel and,
//! for those that do, asks a [`FactCollector`] for their OS facts.
//!
//! Credentialed collection (WinRM, SSH) happens outside this crate; it plugs in
//! through the [`FactCollector`] port.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use scout_common::config::ProbeConfig;
use scout_common::inventory::server::{HostFacts, ScanOutcome, Server, ServerId};
use scout_common::utils::ip;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::network::tcp;

/// Gathers OS facts from a server whose management port is open.
#[async_trait]
pub trait FactCollector: Send + Sync {
    async fn collect(&self, server: &Server) -> anyhow::Result<HostFacts>;
}

/// Called with the number of finished probes after each one completes.
pub type ProbeCallback = Arc<dyn Fn(usize) + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub server_id: ServerId,
    pub ip: String,
    pub outcome: ScanOutcome,
}

/// Probes one server.
///
/// Never fails: an unreachable server, a bad address or a collector error all
/// come back as [`ScanOutcome::Offline`] with the reason. Without a collector a
/// reachable server is reported online with its address as the only fact.
pub async fn probe_server(
    server: &Server,
    cfg: &ProbeConfig,
    collector: Option<&dyn FactCollector>,
) -> ScanOutcome {
    let Some(addr) = ip::parse_address(&server.ip) else {
        return ScanOutcome::Offline {
            reason: format!("invalid address: {}", server.ip),
        };
    };

    let ports: &[u16] = cfg.ports_for(server.os_type);
    let Some(port) = tcp::first_open_port(addr, ports, cfg.connect_timeout).await else {
        return ScanOutcome::Offline {
            reason: cfg.unreachable_reason(server.os_type),
        };
    };
    debug!(server = server.id, port, "management port open");

    let Some(collector) = collector else {
        return ScanOutcome::Online(HostFacts {
            ip_addresses: vec![server.ip.clone()],
            ..HostFacts::default()
        });
    };

    match collector.collect(server).await {
        Ok(facts) => ScanOutcome::Online(facts),
        Err(e) => ScanOutcome::Offline {
            reason: format!("{e:#}"),
        },
    }
}

/// Probes every server, at most [`ProbeConfig::workers_for`] at a time.
///
/// Results come back sorted by server id, whatever order the probes finished in.
pub async fn probe_all(
    servers: Vec<Server>,
    cfg: &ProbeConfig,
    collector: Option<Arc<dyn FactCollector>>,
    on_probe_done: Option<ProbeCallback>,
) -> Vec<ProbeResult> {
    let workers: usize = cfg.workers_for(servers.len());
    let semaphore = Arc::new(Semaphore::new(workers));
    let finished = Arc::new(AtomicUsize::new(0));
    debug!(servers = servers.len(), workers, "probing inventory");

    let mut tasks: JoinSet<ProbeResult> = JoinSet::new();
    for server in servers {
        let semaphore = Arc::clone(&semaphore);
        let finished = Arc::clone(&finished);
        let collector = collector.clone();
        let on_probe_done = on_probe_done.clone();
        let cfg = cfg.clone();

        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await;
            let outcome = probe_server(&server, &cfg, collector.as_deref()).await;

            let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(callback) = &on_probe_done {
                callback(done);
            }

            ProbeResult {
                server_id: server.id,
                ip: server.ip,
                outcome,
            }
        });
    }

    let mut results: Vec<ProbeResult> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(e) => error!("probe task failed: {e}"),
        }
    }

    results.sort_by_key(|result| result.server_id);
    results
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
