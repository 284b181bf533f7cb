use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::inventory::source::SourceName;

/// The comparison a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareMode {
    #[serde(rename = "scan-hpsm")]
    ScanHpsm,
    #[serde(rename = "scan-zabbix")]
    ScanZabbix,
    #[serde(rename = "hpsm-zabbix")]
    HpsmZabbix,
    /// All three sources at once.
    #[serde(rename = "full")]
    Full,
}

impl CompareMode {
    pub const ALL: [CompareMode; 4] = [
        CompareMode::ScanHpsm,
        CompareMode::ScanZabbix,
        CompareMode::HpsmZabbix,
        CompareMode::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompareMode::ScanHpsm => "scan-hpsm",
            CompareMode::ScanZabbix => "scan-zabbix",
            CompareMode::HpsmZabbix => "hpsm-zabbix",
            CompareMode::Full => "full",
        }
    }

    /// Required sources, in canonical order.
    pub fn sources(&self) -> &'static [SourceName] {
        match self {
            CompareMode::ScanHpsm => &[SourceName::Scan, SourceName::Hpsm],
            CompareMode::ScanZabbix => &[SourceName::Scan, SourceName::Zabbix],
            CompareMode::HpsmZabbix => &[SourceName::Hpsm, SourceName::Zabbix],
            CompareMode::Full => &SourceName::ALL,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, CompareMode::Full)
    }
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompareMode {
    type Err = String;

    /// Accepts the request selectors `scan-hpsm`, `scan-zabbix`, `hpsm-zabbix` and `full`
    /// (case-insensitive, `_` allowed in place of `-`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase().replace('_', "-");
        CompareMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lower)
            .ok_or_else(|| format!("invalid compare type: {s}"))
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

    #[test]
    fn test_from_str_full_parsing() {
        assert_eq!(CompareMode::from_str("scan-hpsm"), Ok(CompareMode::ScanHpsm));
        assert_eq!(CompareMode::from_str("SCAN_ZABBIX"), Ok(CompareMode::ScanZabbix));
        assert_eq!(CompareMode::from_str("hpsm-zabbix"), Ok(CompareMode::HpsmZabbix));
        assert_eq!(CompareMode::from_str("Full"), Ok(CompareMode::Full));
        assert!(CompareMode::from_str("zabbix-hpsm").is_err());
        assert!(CompareMode::from_str("").is_err());
    }

    #[test]
    fn serde_uses_request_selectors() {
        let json = serde_json::to_string(&CompareMode::HpsmZabbix).unwrap();
        assert_eq!(json, "\"hpsm-zabbix\"");
        let mode: CompareMode = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(mode, CompareMode::Full);
    }

    #[test]
    fn two_way_modes_never_include_a_third_source() {
        for mode in CompareMode::ALL {
            let expected = if mode.is_full() { 3 } else { 2 };
            assert_eq!(mode.sources().len(), expected, "{mode}");
        }
        assert!(!CompareMode::ScanHpsm.sources().contains(&SourceName::Zabbix));
    }
}
