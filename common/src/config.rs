use std::time::Duration;

use crate::inventory::server::OsType;

/// Run settings, assembled by the command line before any work starts.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `0` prints everything, `1` drops banners and headers, `2` prints summaries only.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
    pub normalizer: NormalizerConfig,
    pub probe: ProbeConfig,
}

/// Controls how raw host tokens become comparison keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Internal domain suffixes removed from hostnames, stored lowercase without a leading dot.
    strip_domains: Vec<String>,
    pub raw_count: RawCountPolicy,
}

/// Which rows count toward a source's `raw_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RawCountPolicy {
    /// Every row whose host cell is non-blank, duplicates included.
    #[default]
    NonBlank,
    /// Every data row, blank host cells included.
    AllRows,
}

impl NormalizerConfig {
    pub fn new<I, S>(strip_domains: I, raw_count: RawCountPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domains: Vec<String> = Vec::new();
        for domain in strip_domains {
            let domain = domain.as_ref().trim().trim_start_matches('.').to_lowercase();
            if !domain.is_empty() && !domains.contains(&domain) {
                domains.push(domain);
            }
        }
        Self {
            strip_domains: domains,
            raw_count,
        }
    }

    pub fn strip_domains(&self) -> &[String] {
        &self.strip_domains
    }

    /// Whether `remainder` (everything after a hostname's first dot) is a known internal domain.
    ///
    /// Deeper names such as `dc1.corp.local` also match the suffix `corp.local`.
    pub fn strips(&self, remainder: &str) -> bool {
        self.strip_domains.iter().any(|domain| {
            remainder == domain
                || remainder
                    .strip_suffix(domain.as_str())
                    .is_some_and(|head| head.ends_with('.'))
        })
    }
}

/// Settings for liveness probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub connect_timeout: Duration,
    /// Fixed worker count. `None` sizes the pool from the inventory.
    pub workers: Option<usize>,
    /// Management ports to try instead of the OS defaults. Empty keeps the defaults.
    pub ports: Vec<u16>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(3),
            workers: None,
            ports: Vec::new(),
        }
    }
}

impl ProbeConfig {
    pub fn ports_for(&self, os_type: OsType) -> &[u16] {
        if self.ports.is_empty() {
            os_type.management_ports()
        } else {
            &self.ports
        }
    }

    pub fn unreachable_reason(&self, os_type: OsType) -> String {
        if self.ports.is_empty() {
            return os_type.unreachable_reason().to_string();
        }
        let ports: Vec<String> = self.ports.iter().map(u16::to_string).collect();
        format!("management ports ({}) not accessible", ports.join("/"))
    }

    pub fn workers_for(&self, inventory_size: usize) -> usize {
        if let Some(workers) = self.workers {
            return workers.max(1);
        }
        match inventory_size {
            0..50 => 10,
            50..200 => 20,
            200..500 => 30,
            _ => 50,
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
