//! # Inventory Sources
//!
//! The three systems whose host lists get reconciled, and the per-run set of
//! hosts extracted from one of them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::inventory::host::HostIdentifier;

/// One independent inventory system.
///
/// Declaration order is the canonical source order used for naming and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceName {
    /// Hosts found by a live scan.
    Scan,
    /// The HPSM ticketing/asset system.
    Hpsm,
    /// The Zabbix monitoring system.
    Zabbix,
}

impl SourceName {
    pub const ALL: [SourceName; 3] = [SourceName::Scan, SourceName::Hpsm, SourceName::Zabbix];

    /// Lowercase token used in field names (`scan_count`, `only_in_hpsm`).
    pub fn slug(&self) -> &'static str {
        match self {
            SourceName::Scan => "scan",
            SourceName::Hpsm => "hpsm",
            SourceName::Zabbix => "zabbix",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceName::Scan => "Scan",
            SourceName::Hpsm => "HPSM",
            SourceName::Zabbix => "Zabbix",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SourceName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        SourceName::ALL
            .into_iter()
            .find(|source| source.slug() == lower)
            .ok_or_else(|| format!("unknown source: {s}"))
    }
}

/// The hosts one source reported during a single comparison run.
///
/// `raw_count` tracks rows attempted, which can exceed [`SourceSet::len`] when
/// the input held duplicates or unusable rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    source: SourceName,
    raw_count: usize,
    skipped: usize,
    identifiers: BTreeMap<String, HostIdentifier>,
}

impl SourceSet {
    pub fn new(source: SourceName) -> Self {
        Self {
            source,
            raw_count: 0,
            skipped: 0,
            identifiers: BTreeMap::new(),
        }
    }

    pub fn source(&self) -> SourceName {
        self.source
    }

    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    /// Number of distinct normalized hosts.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn record_attempt(&mut self) {
        self.raw_count += 1;
    }

    /// Rows that produced no usable identifier.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Adds a host. The first raw spelling seen for a key is the one kept.
    ///
    /// Returns `false` when the key was already present.
    pub fn insert(&mut self, identifier: HostIdentifier) -> bool {
        if self.identifiers.contains_key(identifier.key()) {
            return false;
        }
        self.identifiers
            .insert(identifier.key().to_string(), identifier);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.identifiers.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&HostIdentifier> {
        self.identifiers.get(key)
    }

    /// Hosts in ascending key order.
    pub fn identifiers(&self) -> impl Iterator<Item = &HostIdentifier> {
        self.identifiers.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.identifiers.keys().map(String::as_str)
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
