//! # Source Parsers
//!
//! Each inventory source exports its host list differently. A parser knows which
//! column of its source carries the host identifier and turns a raw payload into
//! a [`SourceSet`].
//!
//! Parsing never fails: unreadable or empty input yields an empty set with a raw
//! count of zero, which is a valid source for a comparison.

use scout_common::config::NormalizerConfig;
use scout_common::inventory::source::{SourceName, SourceSet};

mod hpsm;
mod scan;
mod table;
mod zabbix;

pub use hpsm::HpsmParser;
pub use scan::ScanParser;
pub use zabbix::ZabbixParser;

pub trait SourceParser {
    fn source(&self) -> SourceName;

    /// Extracts the host set from raw CSV-like or newline-separated content.
    fn parse(&self, content: &[u8], cfg: &NormalizerConfig) -> SourceSet;
}

pub fn parser_for(source: SourceName) -> Box<dyn SourceParser> {
    match source {
        SourceName::Scan => Box::new(ScanParser),
        SourceName::Hpsm => Box::new(HpsmParser),
        SourceName::Zabbix => Box::new(ZabbixParser),
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
