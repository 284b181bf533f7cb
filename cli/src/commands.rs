pub mod compare;
pub mod export;
pub mod probe;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use scout_common::compare::mode::CompareMode;
use scout_common::config::{Config, NormalizerConfig, ProbeConfig, RawCountPolicy};
use scout_core::export::ExportFormat;

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Reconciles server inventories from live scans, HPSM and Zabbix.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output: -q hides banner and headers, -qq prints summaries only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Internal domain suffix removed from hostnames before comparing (repeatable)
    #[arg(
        long = "strip-domain",
        value_name = "SUFFIX",
        env = "SCOUT_STRIP_DOMAINS",
        value_delimiter = ',',
        global = true
    )]
    pub strip_domains: Vec<String>,

    /// Count rows with a blank host cell in the raw totals
    #[arg(long, global = true)]
    pub count_blank_rows: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare host lists exported from two or three sources
    #[command(alias = "c")]
    Compare(CompareArgs),
    /// Write a saved JSON report in another format
    #[command(alias = "e")]
    Export(ExportArgs),
    /// Probe managed servers, optionally reconciling them against exports
    #[command(alias = "p")]
    Probe(ProbeArgs),
}

/// Where a finished report should be written, besides the terminal.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Write the full report as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
    /// Write the flat field view as JSON
    #[arg(long, value_name = "FILE")]
    pub fields: Option<PathBuf>,
    /// Write one CSV row per host
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}

impl OutputArgs {
    pub fn targets(&self) -> Vec<(ExportFormat, &PathBuf)> {
        [
            (ExportFormat::Json, self.json.as_ref()),
            (ExportFormat::Fields, self.fields.as_ref()),
            (ExportFormat::Csv, self.csv.as_ref()),
        ]
        .into_iter()
        .filter_map(|(format, path)| path.map(|path| (format, path)))
        .collect()
    }
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// scan-hpsm, scan-zabbix, hpsm-zabbix or full
    pub mode: CompareMode,
    /// Scan export (one host per line)
    #[arg(long, value_name = "FILE")]
    pub scan: Option<PathBuf>,
    /// HPSM export (CSV with a Hostname column)
    #[arg(long, value_name = "FILE")]
    pub hpsm: Option<PathBuf>,
    /// Zabbix export (CSV with a Host column, or one host per line)
    #[arg(long, value_name = "FILE")]
    pub zabbix: Option<PathBuf>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Report previously written with --json
    pub report: PathBuf,
    /// json, fields or csv
    #[arg(short, long, default_value = "csv")]
    pub format: ExportFormat,
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// CSV of servers with an ip,os_type[,project] header
    pub servers: PathBuf,
    /// Reconcile the live scan against this HPSM export
    #[arg(long, value_name = "FILE")]
    pub hpsm: Option<PathBuf>,
    /// Reconcile the live scan against this Zabbix export
    #[arg(long, value_name = "FILE")]
    pub zabbix: Option<PathBuf>,
    /// Connect timeout per port, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub timeout_ms: u64,
    /// Concurrent probes (default scales with the inventory size)
    #[arg(long)]
    pub workers: Option<usize>,
    /// Management ports to try instead of 5985/5986 (Windows) and 22 (Linux)
    #[arg(long = "port", value_delimiter = ',')]
    pub ports: Vec<u16>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let raw_count = if self.count_blank_rows {
            RawCountPolicy::AllRows
        } else {
            RawCountPolicy::NonBlank
        };

        let probe: ProbeConfig = match &self.command {
            Commands::Probe(args) => ProbeConfig {
                connect_timeout: Duration::from_millis(args.timeout_ms),
                workers: args.workers,
                ports: args.ports.clone(),
            },
            _ => ProbeConfig::default(),
        };

        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            normalizer: NormalizerConfig::new(&self.strip_domains, raw_count),
            probe,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_well_formed() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn compare_flags_build_the_config() {
        let cli = CommandLine::try_parse_from([
            "scout",
            "compare",
            "scan-hpsm",
            "--scan",
            "scan.txt",
            "--hpsm",
            "hpsm.csv",
            "--strip-domain",
            "corp.local,lab.internal",
            "--count-blank-rows",
            "-qq",
            "--csv",
            "out.csv",
        ])
        .unwrap();

        let cfg = cli.config();
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.normalizer.strip_domains(), ["corp.local", "lab.internal"]);
        assert_eq!(cfg.normalizer.raw_count, RawCountPolicy::AllRows);

        let Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.mode, CompareMode::ScanHpsm);
        assert!(args.zabbix.is_none());
        assert_eq!(args.output.targets().len(), 1);
    }

    #[test]
    fn probe_flags_build_the_probe_config() {
        let cli = CommandLine::try_parse_from([
            "scout", "probe", "servers.csv", "--timeout-ms", "250", "--workers", "4", "--port", "2222,22",
        ])
        .unwrap();

        let cfg = cli.config();
        assert_eq!(cfg.probe.connect_timeout, Duration::from_millis(250));
        assert_eq!(cfg.probe.workers, Some(4));
        assert_eq!(cfg.probe.ports, [2222, 22]);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(CommandLine::try_parse_from(["scout", "compare", "scan-nagios"]).is_err());
    }
}
