use scout_common::config::NormalizerConfig;
use scout_common::inventory::source::{SourceName, SourceSet};

use super::SourceParser;
use super::table::{self, HostColumn};

const HOST_COLUMNS: &[&str] = &["hostname", "host name", "logical name"];

/// HPSM asset exports carry a header row with the host under `Hostname`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HpsmParser;

impl SourceParser for HpsmParser {
    fn source(&self) -> SourceName {
        SourceName::Hpsm
    }

    fn parse(&self, content: &[u8], cfg: &NormalizerConfig) -> SourceSet {
        table::extract(SourceName::Hpsm, content, HostColumn::Named(HOST_COLUMNS), cfg)
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
