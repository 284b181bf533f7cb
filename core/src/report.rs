//! # Comparison Report Builder
//!
//! Names the reconciler's partitions after their member sources and attaches
//! the per-source counts.

use scout_common::compare::mode::CompareMode;
use scout_common::compare::partition::{Partition, Signature};
use scout_common::compare::report::{ComparisonReport, PartitionReport, ReportEntry, SourceSummary};
use scout_common::inventory::source::{SourceName, SourceSet};

/// Assembles the report for `sets` from the partitions [`crate::reconciler::reconcile`] returned.
///
/// Source summaries come out in canonical source order, partitions in the order given.
pub fn build(mode: CompareMode, sets: &[SourceSet], partitions: &[Partition]) -> ComparisonReport {
    let mut sources: Vec<SourceSummary> = sets
        .iter()
        .map(|set| SourceSummary {
            source: set.source(),
            raw_count: set.raw_count(),
            normalized_count: set.len(),
        })
        .collect();
    sources.sort_by_key(|summary| summary.source);

    let names: Vec<SourceName> = sources.iter().map(|summary| summary.source).collect();
    let universe = Signature::of(&names);

    let partitions: Vec<PartitionReport> = partitions
        .iter()
        .map(|partition| PartitionReport {
            name: partition.signature().name_within(universe),
            sources: partition.signature().sources(),
            count: partition.len(),
            hosts: partition
                .hosts()
                .iter()
                .map(|host| ReportEntry {
                    key: host.key().to_string(),
                    display: host.raw().to_string(),
                })
                .collect(),
        })
        .collect();

    ComparisonReport::new(mode, sources, partitions)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
