//! In-memory [`ServerStore`], used by the CLI and by tests.

use std::collections::BTreeMap;

use scout_common::error::StoreError;
use scout_common::inventory::server::{NewServer, ScanOutcome, Server, ServerId};
use scout_common::inventory::store::ServerStore;
use scout_common::utils::validation;

#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: ServerId,
    servers: BTreeMap<ServerId, Server>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServerStore for MemoryStore {
    fn add(&mut self, server: NewServer) -> Result<ServerId, StoreError> {
        let ip: String = validation::validate_ip(&server.ip)?;
        let project: Option<String> = match server.project.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) => Some(validation::validate_project_name(name)?),
        };

        if self.servers.values().any(|existing| existing.ip.eq_ignore_ascii_case(&ip)) {
            return Err(StoreError::DuplicateIp(ip));
        }

        self.next_id += 1;
        let id: ServerId = self.next_id;
        let record = NewServer {
            ip,
            os_type: server.os_type,
            project,
        };
        self.servers.insert(id, Server::new(id, record));
        Ok(id)
    }

    fn get(&self, id: ServerId) -> Option<Server> {
        self.servers.get(&id).cloned()
    }

    fn list(&self) -> Vec<Server> {
        self.servers.values().cloned().collect()
    }

    fn delete(&mut self, id: ServerId) -> Result<(), StoreError> {
        self.servers
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn record_outcome(&mut self, id: ServerId, outcome: ScanOutcome) -> Result<(), StoreError> {
        let server = self.servers.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        server.apply(outcome);
        Ok(())
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
