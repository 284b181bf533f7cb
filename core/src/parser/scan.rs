use scout_common::config::NormalizerConfig;
use scout_common::inventory::server::ScanOutcome;
use scout_common::inventory::source::{SourceName, SourceSet};
use tracing::debug;

use super::SourceParser;
use super::table::{self, HostColumn};
use crate::normalizer;
use crate::probe::ProbeResult;

/// Scan exports are one host per line. Only the first column is read.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanParser;

impl ScanParser {
    /// Builds the Scan set straight from a probe run instead of an exported file.
    ///
    /// Only reachable servers count. A server is named by its collected hostname,
    /// falling back to its address when no facts were gathered.
    pub fn from_probes(results: &[ProbeResult], cfg: &NormalizerConfig) -> SourceSet {
        let mut set = SourceSet::new(SourceName::Scan);
        for result in results {
            let ScanOutcome::Online(facts) = &result.outcome else {
                continue;
            };
            let name: &str = facts
                .hostname
                .as_deref()
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(&result.ip);
            match normalizer::normalize(name, cfg) {
                Ok(identifier) => {
                    set.record_attempt();
                    set.insert(identifier);
                }
                Err(e) => {
                    set.record_skip();
                    debug!(server = result.server_id, "skipping probe result: {e}");
                }
            }
        }
        set
    }
}

impl SourceParser for ScanParser {
    fn source(&self) -> SourceName {
        SourceName::Scan
    }

    fn parse(&self, content: &[u8], cfg: &NormalizerConfig) -> SourceSet {
        table::extract(SourceName::Scan, content, HostColumn::First, cfg)
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
