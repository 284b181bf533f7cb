//! # Server Model
//!
//! A managed server, its liveness state and the OS-level facts that the
//! credentialed collectors report back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub type ServerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsType {
    Windows,
    Linux,
}

impl OsType {
    /// Ports whose reachability means the management channel is up.
    pub fn management_ports(&self) -> &'static [u16] {
        match self {
            OsType::Windows => &[5985, 5986],
            OsType::Linux => &[22],
        }
    }

    /// Reason reported when none of the [`OsType::management_ports`] answer.
    pub fn unreachable_reason(&self) -> &'static str {
        match self {
            OsType::Windows => "WinRM ports (5985/5986) not accessible",
            OsType::Linux => "SSH port (22) not accessible",
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsType::Windows => f.write_str("Windows"),
            OsType::Linux => f.write_str("Linux"),
        }
    }
}

impl FromStr for OsType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(OsType::Windows),
            "linux" => Ok(OsType::Linux),
            _ => Err(ValidationError::InvalidOsType(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerStatus {
    /// Never scanned.
    #[default]
    Pending,
    Online,
    Offline,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskInfo {
    pub name: String,
    pub size_gb: f64,
    pub free_gb: f64,
}

/// Facts a credentialed collector gathered from a live host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostFacts {
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
    pub cpu: Option<String>,
    pub cpu_cores: Option<u32>,
    pub ram_gb: Option<f64>,
    pub disks: Vec<DiskInfo>,
    pub ip_addresses: Vec<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub service_pack: Option<String>,
}

/// Result of probing one server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScanOutcome {
    Online(HostFacts),
    Offline { reason: String },
}

impl ScanOutcome {
    pub fn is_online(&self) -> bool {
        matches!(self, ScanOutcome::Online(_))
    }
}

/// Input for registering a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServer {
    pub ip: String,
    pub os_type: OsType,
    pub project: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: ServerId,
    pub ip: String,
    pub os_type: OsType,
    pub status: ServerStatus,
    pub project: Option<String>,
    pub facts: Option<HostFacts>,
    /// Reason of the last failed probe.
    pub last_error: Option<String>,
}

impl Server {
    pub fn new(id: ServerId, new: NewServer) -> Self {
        Self {
            id,
            ip: new.ip,
            os_type: new.os_type,
            status: ServerStatus::Pending,
            project: new.project,
            facts: None,
            last_error: None,
        }
    }

    /// Applies a probe result. Facts from earlier scans survive an offline probe.
    pub fn apply(&mut self, outcome: ScanOutcome) {
        match outcome {
            ScanOutcome::Online(facts) => {
                self.status = ServerStatus::Online;
                self.facts = Some(facts);
                self.last_error = None;
            }
            ScanOutcome::Offline { reason } => {
                self.status = ServerStatus::Offline;
                self.last_error = Some(reason);
            }
        }
    }

    pub fn hostname(&self) -> Option<&str> {
        self.facts.as_ref().and_then(|facts| facts.hostname.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub pending: usize,
    pub windows: usize,
    pub linux: usize,
}

impl InventoryStats {
    pub fn from_servers<'a>(servers: impl IntoIterator<Item = &'a Server>) -> Self {
        let mut stats = InventoryStats::default();
        for server in servers {
            stats.total += 1;
            match server.status {
                ServerStatus::Online => stats.online += 1,
                ServerStatus::Offline => stats.offline += 1,
                ServerStatus::Pending => stats.pending += 1,
            }
            match server.os_type {
                OsType::Windows => stats.windows += 1,
                OsType::Linux => stats.linux += 1,
            }
        }
        stats
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
