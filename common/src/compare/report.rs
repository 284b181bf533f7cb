//! # Comparison Report
//!
//! The single value a comparison produces. It is built once, never mutated, and
//! passed by value or reference to whatever renders or exports it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::compare::mode::CompareMode;
use crate::inventory::source::SourceName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub source: SourceName,
    /// Rows attempted while parsing the source.
    pub raw_count: usize,
    /// Distinct hosts after normalization.
    pub normalized_count: usize,
}

/// One host as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Normalized comparison key.
    pub key: String,
    /// The host as it was written in the first source (canonical order) that listed it.
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionReport {
    pub name: String,
    pub sources: Vec<SourceName>,
    pub count: usize,
    pub hosts: Vec<ReportEntry>,
}

impl PartitionReport {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(|entry| entry.key.as_str())
    }

    pub fn displays(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(|entry| entry.display.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    mode: CompareMode,
    sources: Vec<SourceSummary>,
    partitions: Vec<PartitionReport>,
}

impl ComparisonReport {
    pub fn new(
        mode: CompareMode,
        sources: Vec<SourceSummary>,
        partitions: Vec<PartitionReport>,
    ) -> Self {
        Self {
            mode,
            sources,
            partitions,
        }
    }

    pub fn mode(&self) -> CompareMode {
        self.mode
    }

    /// Per-source counts in canonical source order.
    pub fn sources(&self) -> &[SourceSummary] {
        &self.sources
    }

    /// Partitions, widest overlap first.
    pub fn partitions(&self) -> &[PartitionReport] {
        &self.partitions
    }

    pub fn source(&self, source: SourceName) -> Option<&SourceSummary> {
        self.sources.iter().find(|summary| summary.source == source)
    }

    pub fn partition(&self, name: &str) -> Option<&PartitionReport> {
        self.partitions.iter().find(|partition| partition.name == name)
    }

    /// Flattens the report into the field layout the inventory UI and spreadsheet
    /// exporter consume.
    ///
    /// * `compare_type`, plus `<source>_count` and `<source>_raw_count` per source.
    /// * 2-way: `matching`, and `missing_in_<b>` for hosts only `<a>` knows (and vice versa).
    /// * full: `in_all_three`, `in_<x>_and_<y>_only`, `only_in_<x>`.
    ///
    /// Host lists carry display names.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields: Map<String, Value> = Map::new();
        fields.insert("compare_type".to_string(), json!(self.mode.as_str()));

        for summary in &self.sources {
            let slug = summary.source.slug();
            fields.insert(format!("{slug}_count"), json!(summary.normalized_count));
            fields.insert(format!("{slug}_raw_count"), json!(summary.raw_count));
        }

        for partition in &self.partitions {
            let hosts: Vec<&str> = partition.displays().collect();
            fields.insert(self.field_name(partition), json!(hosts));
        }

        fields
    }

    fn field_name(&self, partition: &PartitionReport) -> String {
        if self.sources.len() != 2 {
            return partition.name.clone();
        }
        match partition.sources.as_slice() {
            [only] => self
                .sources
                .iter()
                .find(|summary| summary.source != *only)
                .map(|other| format!("missing_in_{}", other.source.slug()))
                .unwrap_or_else(|| partition.name.clone()),
            _ => partition.name.clone(),
        }
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
