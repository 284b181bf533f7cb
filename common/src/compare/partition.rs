//! # Partitions
//!
//! A partition groups every host that appears in exactly the same subset of
//! sources. That subset is its [`Signature`]; names and report order derive
//! from the signature alone, never from the position sources were supplied in.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::inventory::host::HostIdentifier;
use crate::inventory::source::SourceName;

/// A set of sources, stored as one bit per [`SourceName`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature(u8);

impl Signature {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn of(sources: &[SourceName]) -> Self {
        sources
            .iter()
            .fold(Self::empty(), |signature, source| signature.with(*source))
    }

    pub fn with(self, source: SourceName) -> Self {
        Self(self.0 | (1 << source.index()))
    }

    pub fn contains(&self, source: SourceName) -> bool {
        self.0 & (1 << source.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Member sources in canonical order.
    pub fn sources(&self) -> Vec<SourceName> {
        SourceName::ALL
            .into_iter()
            .filter(|source| self.contains(*source))
            .collect()
    }

    /// Every non-empty subset of this signature.
    pub fn subsets(&self) -> impl Iterator<Item = Signature> + '_ {
        (1..=self.0)
            .filter(|mask| mask & !self.0 == 0)
            .map(Signature)
    }

    /// Sort key for reports: widest overlap first, then canonical source order.
    pub fn report_key(&self) -> (Reverse<usize>, Vec<SourceName>) {
        (Reverse(self.len()), self.sources())
    }

    /// Semantic name of this signature within a comparison over `universe`.
    ///
    /// * every source: `matching` (2-way) or `in_all_three` (3-way)
    /// * one source: `only_in_scan`
    /// * several: `in_scan_and_hpsm_only`
    pub fn name_within(&self, universe: Signature) -> String {
        if *self == universe {
            return match universe.len() {
                2 => "matching".to_string(),
                3 => "in_all_three".to_string(),
                n => format!("in_all_{n}"),
            };
        }
        let slugs: Vec<&str> = self.sources().iter().map(SourceName::slug).collect();
        match slugs.as_slice() {
            [single] => format!("only_in_{single}"),
            _ => format!("in_{}_only", slugs.join("_and_")),
        }
    }
}

/// Hosts sharing one membership signature, ordered by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    signature: Signature,
    hosts: Vec<HostIdentifier>,
}

impl Partition {
    pub fn new(signature: Signature, mut hosts: Vec<HostIdentifier>) -> Self {
        hosts.sort();
        Self { signature, hosts }
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    pub fn hosts(&self) -> &[HostIdentifier] {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(HostIdentifier::key)
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
