//! # Comparison Service
//!
//! Implements the "compare inventories" use case: parse each required source,
//! reconcile the sets and build the report.

use scout_common::compare::mode::CompareMode;
use scout_common::compare::report::ComparisonReport;
use scout_common::config::NormalizerConfig;
use scout_common::error::CompareError;
use scout_common::inventory::source::{SourceName, SourceSet};
use tracing::{debug, info};

use crate::parser::parser_for;
use crate::{reconciler, report};

/// Raw content uploaded for one source.
#[derive(Debug, Clone)]
pub struct SourcePayload {
    pub source: SourceName,
    pub content: Vec<u8>,
}

impl SourcePayload {
    pub fn new(source: SourceName, content: impl Into<Vec<u8>>) -> Self {
        Self {
            source,
            content: content.into(),
        }
    }
}

pub struct ComparisonService {
    normalizer: NormalizerConfig,
}

impl ComparisonService {
    pub fn new(normalizer: NormalizerConfig) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &NormalizerConfig {
        &self.normalizer
    }

    /// Runs the comparison `mode` asks for over the uploaded payloads.
    ///
    /// Payloads for sources the mode does not cover are ignored. When a source
    /// is uploaded twice, the first payload is used.
    ///
    /// # Errors
    /// * [`CompareError::InputMissing`] - a required source has no payload. Nothing is parsed.
    pub fn compare(
        &self,
        mode: CompareMode,
        payloads: &[SourcePayload],
    ) -> Result<ComparisonReport, CompareError> {
        // 1. Every required source must be present before any parsing happens
        let mut selected: Vec<&SourcePayload> = Vec::with_capacity(mode.sources().len());
        let mut missing: Vec<SourceName> = Vec::new();
        for source in mode.sources() {
            match payloads.iter().find(|payload| payload.source == *source) {
                Some(payload) => selected.push(payload),
                None => missing.push(*source),
            }
        }
        if !missing.is_empty() {
            return Err(CompareError::InputMissing { missing });
        }

        // 2. Parse
        let sets: Vec<SourceSet> = selected
            .into_iter()
            .map(|payload| parser_for(payload.source).parse(&payload.content, &self.normalizer))
            .collect();

        // 3. Reconcile and report
        self.compare_sets(mode, sets)
    }

    /// Same as [`ComparisonService::compare`], for sets that were built elsewhere
    /// (for example from a live probe run).
    pub fn compare_sets(
        &self,
        mode: CompareMode,
        sets: Vec<SourceSet>,
    ) -> Result<ComparisonReport, CompareError> {
        let missing: Vec<SourceName> = mode
            .sources()
            .iter()
            .copied()
            .filter(|source| !sets.iter().any(|set| set.source() == *source))
            .collect();
        if !missing.is_empty() {
            return Err(CompareError::InputMissing { missing });
        }

        let sets: Vec<SourceSet> = sets
            .into_iter()
            .filter(|set| {
                let wanted = mode.sources().contains(&set.source());
                if !wanted {
                    debug!(source = %set.source(), %mode, "ignoring source outside the comparison");
                }
                wanted
            })
            .collect();

        for set in &sets {
            info!(
                "{}: {} rows, {} unique hosts",
                set.source(),
                set.raw_count(),
                set.len()
            );
        }

        let partitions = reconciler::reconcile(&sets)?;
        let report = report::build(mode, &sets, &partitions);

        info!(
            "{mode} comparison: {} partitions, {} hosts in total",
            report.partitions().len(),
            report.partitions().iter().map(|p| p.count).sum::<usize>()
        );
        Ok(report)
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
    use scout_common::config::RawCountPolicy;
    use scout_common::error::ReconcileError;
    use scout_common::inventory::host::HostIdentifier;

    fn service() -> ComparisonService {
        ComparisonService::new(NormalizerConfig::new(["corp.local"], RawCountPolicy::NonBlank))
    }

    #[test]
    fn missing_input_is_reported_per_source() {
        let payloads = [SourcePayload::new(SourceName::Hpsm, "Hostname\nweb01\n")];
        let err = service().compare(CompareMode::Full, &payloads).unwrap_err();
        assert_eq!(
            err,
            CompareError::InputMissing {
                missing: vec![SourceName::Scan, SourceName::Zabbix]
            }
        );
        assert_eq!(err.to_string(), "select required files: no input for Scan, Zabbix");
    }

    #[test]
    fn extra_payloads_are_ignored() {
        let payloads = [
            SourcePayload::new(SourceName::Zabbix, "Host\nweb01\n"),
            SourcePayload::new(SourceName::Scan, "WEB01.corp.local\nweb02\n"),
            SourcePayload::new(SourceName::Hpsm, "Hostname\nweb09\n"),
        ];
        let report = service().compare(CompareMode::ScanZabbix, &payloads).unwrap();

        assert!(report.source(SourceName::Hpsm).is_none());
        let matching = report.partition("matching").unwrap();
        assert_eq!(matching.keys().collect::<Vec<_>>(), ["web01"]);
        assert_eq!(matching.displays().collect::<Vec<_>>(), ["WEB01.corp.local"]);
        assert_eq!(report.partition("only_in_scan").map(|p| p.count), Some(1));
        assert_eq!(report.partition("only_in_zabbix").map(|p| p.count), Some(0));
    }

    #[test]
    fn empty_upload_is_a_valid_source() {
        let payloads = [
            SourcePayload::new(SourceName::Scan, "x\ny\n"),
            SourcePayload::new(SourceName::Hpsm, ""),
        ];
        let report = service().compare(CompareMode::ScanHpsm, &payloads).unwrap();
        assert_eq!(report.partition("matching").map(|p| p.count), Some(0));
        assert_eq!(report.partition("only_in_scan").map(|p| p.count), Some(2));
        assert_eq!(report.source(SourceName::Hpsm).map(|s| s.raw_count), Some(0));
    }

    #[test]
    fn duplicate_prebuilt_sets_are_rejected() {
        let sets = vec![
            SourceSet::new(SourceName::Scan),
            SourceSet::new(SourceName::Hpsm),
            SourceSet::new(SourceName::Hpsm),
        ];
        let err = service().compare_sets(CompareMode::ScanHpsm, sets).unwrap_err();
        assert_eq!(
            err,
            CompareError::Reconcile(ReconcileError::DuplicateSource(SourceName::Hpsm))
        );
    }

    #[test]
    fn prebuilt_sets_match_and_sort_case_insensitively() {
        let mut scan = SourceSet::new(SourceName::Scan);
        for name in ["Web02", "APP01", "web01"] {
            scan.record_attempt();
            scan.insert(HostIdentifier::new(name, name));
        }
        let mut hpsm = SourceSet::new(SourceName::Hpsm);
        for name in ["WEB02", "app01", "Web01"] {
            hpsm.record_attempt();
            hpsm.insert(HostIdentifier::new(name, name));
        }

        let report = service().compare_sets(CompareMode::ScanHpsm, vec![scan, hpsm]).unwrap();
        let matching = report.partition("matching").unwrap();
        assert_eq!(matching.keys().collect::<Vec<_>>(), ["app01", "web01", "web02"]);
        assert_eq!(report.partition("only_in_scan").map(|p| p.count), Some(0));
        assert_eq!(report.partition("only_in_hpsm").map(|p| p.count), Some(0));
    }
}
