use serde::Serialize;

use crate::error::StoreError;
use crate::inventory::server::{InventoryStats, NewServer, ScanOutcome, Server, ServerId};

/// Outcome of a bulk registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkImport {
    pub added: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Defines the contract for persisting the server inventory.
///
/// The inventory only needs row-store semantics: insert, fetch, list, delete
/// and update-in-place.
pub trait ServerStore: Send + Sync {
    /// Registers a server and returns its id.
    ///
    /// # Errors
    /// * [`StoreError::DuplicateIp`] - a server with the same address exists.
    fn add(&mut self, server: NewServer) -> Result<ServerId, StoreError>;

    fn get(&self, id: ServerId) -> Option<Server>;

    /// All servers in ascending id order.
    fn list(&self) -> Vec<Server>;

    fn delete(&mut self, id: ServerId) -> Result<(), StoreError>;

    fn record_outcome(&mut self, id: ServerId, outcome: ScanOutcome) -> Result<(), StoreError>;

    /// Registers every server it can. Duplicates are skipped, other failures collected.
    fn bulk_add(&mut self, servers: Vec<NewServer>) -> BulkImport {
        let mut result = BulkImport::default();
        for server in servers {
            let ip = server.ip.clone();
            match self.add(server) {
                Ok(_) => result.added += 1,
                Err(StoreError::DuplicateIp(_)) => result.skipped += 1,
                Err(e) => result.errors.push(format!("{ip}: {e}")),
            }
        }
        result
    }

    fn stats(&self) -> InventoryStats {
        InventoryStats::from_servers(&self.list())
    }

    fn by_project(&self, project: Option<&str>) -> Vec<Server> {
        self.list()
            .into_iter()
            .filter(|server| server.project.as_deref() == project)
            .collect()
    }
}
