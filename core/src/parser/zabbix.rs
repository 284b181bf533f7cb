use scout_common::config::NormalizerConfig;
use scout_common::inventory::source::{SourceName, SourceSet};

use super::SourceParser;
use super::table::{self, HostColumn};

const HOST_COLUMNS: &[&str] = &["hostname", "host name", "host"];

/// Zabbix host exports, with either a `Host`/`Hostname` header or a bare list.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZabbixParser;

impl SourceParser for ZabbixParser {
    fn source(&self) -> SourceName {
        SourceName::Zabbix
    }

    fn parse(&self, content: &[u8], cfg: &NormalizerConfig) -> SourceSet {
        table::extract(SourceName::Zabbix, content, HostColumn::Named(HOST_COLUMNS), cfg)
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
