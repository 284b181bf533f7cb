//! # Set Reconciler
//!
//! Partitions the union of 2 or 3 source sets by membership signature. Every
//! host lands in exactly one partition, and every non-empty subset of the
//! supplied sources gets a partition even when no host falls into it.
//!
//! The result depends only on which sources were supplied and what they hold,
//! not on the order they were passed in.

use std::collections::BTreeMap;

use scout_common::compare::partition::{Partition, Signature};
use scout_common::error::ReconcileError;
use scout_common::inventory::host::HostIdentifier;
use scout_common::inventory::source::SourceSet;

pub const MIN_SOURCES: usize = 2;
pub const MAX_SOURCES: usize = 3;

/// Returns one partition per non-empty subset of the supplied sources, widest
/// overlap first.
///
/// When a host is listed by several sources, its partition keeps the spelling
/// from the first of them in canonical source order.
///
/// # Errors
/// * [`ReconcileError::InvalidComparisonArity`] - fewer than 2 or more than 3 sets.
/// * [`ReconcileError::DuplicateSource`] - the same source appears twice.
pub fn reconcile(sets: &[SourceSet]) -> Result<Vec<Partition>, ReconcileError> {
    if !(MIN_SOURCES..=MAX_SOURCES).contains(&sets.len()) {
        return Err(ReconcileError::InvalidComparisonArity(sets.len()));
    }

    let mut universe = Signature::empty();
    for set in sets {
        if universe.contains(set.source()) {
            return Err(ReconcileError::DuplicateSource(set.source()));
        }
        universe = universe.with(set.source());
    }

    let mut ordered: Vec<&SourceSet> = sets.iter().collect();
    ordered.sort_by_key(|set| set.source());

    let mut membership: BTreeMap<&str, (Signature, &HostIdentifier)> = BTreeMap::new();
    for set in ordered {
        let source = set.source();
        for identifier in set.identifiers() {
            membership
                .entry(identifier.key())
                .and_modify(|entry| entry.0 = entry.0.with(source))
                .or_insert((Signature::empty().with(source), identifier));
        }
    }

    let mut buckets: BTreeMap<Signature, Vec<HostIdentifier>> = universe
        .subsets()
        .map(|signature| (signature, Vec::new()))
        .collect();
    for (signature, identifier) in membership.into_values() {
        buckets.entry(signature).or_default().push(identifier.clone());
    }

    let mut partitions: Vec<Partition> = buckets
        .into_iter()
        .map(|(signature, hosts)| Partition::new(signature, hosts))
        .collect();
    partitions.sort_by_key(|partition| partition.signature().report_key());
    Ok(partitions)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
