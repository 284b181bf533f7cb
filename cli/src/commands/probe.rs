use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use scout_common::compare::mode::CompareMode;
use scout_common::config::Config;
use scout_common::inventory::server::{InventoryStats, Server, ServerStatus};
use scout_common::inventory::source::{SourceName, SourceSet};
use scout_core::compare::ComparisonService;
use scout_core::inventory::InventoryService;
use scout_core::parser::{ScanParser, parser_for};
use scout_core::probe::{ProbeCallback, ProbeResult};
use scout_core::store::MemoryStore;
use tracing::{Instrument, info, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands::{ProbeArgs, export};
use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

type Detail = (String, ColoredString);

pub async fn probe(args: ProbeArgs, cfg: &Config) -> anyhow::Result<()> {
    let content: Vec<u8> = fs::read(&args.servers)
        .with_context(|| format!("failed to read {}", args.servers.display()))?;

    let mut inventory = InventoryService::new(Box::new(MemoryStore::new()));
    let import = inventory.import_csv(&content);
    for problem in &import.errors {
        warn!("{problem}");
    }
    if import.added == 0 {
        print::header("no servers to probe", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    let span = spinner::probe_span(import.added);
    let progress = span.clone();
    let on_probe_done: ProbeCallback = Arc::new(move |done| progress.pb_set_position(done as u64));

    let start_time: Instant = Instant::now();
    let results: Vec<ProbeResult> = inventory
        .scan_all(&cfg.probe, Some(on_probe_done))
        .instrument(span)
        .await;
    let elapsed: Duration = start_time.elapsed();

    print::header("Server Probe", cfg.quiet);
    print_servers(&inventory.servers(), cfg);
    print_stats(&inventory.stats(), elapsed, cfg);

    let Some(mode) = comparison_mode(&args) else {
        return Ok(());
    };
    let report = ComparisonService::new(cfg.normalizer.clone())
        .compare_sets(mode, reconcile_inputs(&args, &results, cfg)?)?;

    format::print_report(&report, start_time.elapsed(), cfg);
    export::write_all(&report, &args.output)
}

fn comparison_mode(args: &ProbeArgs) -> Option<CompareMode> {
    match (&args.hpsm, &args.zabbix) {
        (Some(_), Some(_)) => Some(CompareMode::Full),
        (Some(_), None) => Some(CompareMode::ScanHpsm),
        (None, Some(_)) => Some(CompareMode::ScanZabbix),
        (None, None) => None,
    }
}

/// The live scan as the Scan source, plus whichever exports were given.
fn reconcile_inputs(args: &ProbeArgs, results: &[ProbeResult], cfg: &Config) -> anyhow::Result<Vec<SourceSet>> {
    let mut sets: Vec<SourceSet> = vec![ScanParser::from_probes(results, &cfg.normalizer)];
    let exports: [(SourceName, &Option<PathBuf>); 2] =
        [(SourceName::Hpsm, &args.hpsm), (SourceName::Zabbix, &args.zabbix)];

    for (source, path) in exports {
        let Some(path) = path else {
            continue;
        };
        let content: Vec<u8> = fs::read(path)
            .with_context(|| format!("failed to read {source} export {}", path.display()))?;
        sets.push(parser_for(source).parse(&content, &cfg.normalizer));
    }
    info!("Live scan found {} reachable hosts", sets[0].len());
    Ok(sets)
}

fn print_servers(servers: &[Server], cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    for (idx, server) in servers.iter().enumerate() {
        print::tree_head(idx, &server.ip);
        print::as_tree_one_level(server_details(server));
        if idx + 1 != servers.len() {
            mprint!();
        }
    }
}

fn server_details(server: &Server) -> Vec<Detail> {
    let status: ColoredString = match server.status {
        ServerStatus::Online => "online".color(colors::ONLINE).bold(),
        ServerStatus::Offline => "offline".color(colors::OFFLINE).bold(),
        ServerStatus::Pending => "pending".color(colors::SEPARATOR),
    };
    let mut details: Vec<Detail> = vec![
        ("Status".to_string(), status),
        ("OS".to_string(), server.os_type.to_string().normal()),
    ];
    if let Some(hostname) = server.hostname() {
        details.push(("Host".to_string(), hostname.color(colors::PRIMARY)));
    }
    if let Some(project) = &server.project {
        details.push(("Project".to_string(), project.normal()));
    }
    if let Some(reason) = &server.last_error {
        details.push(("Reason".to_string(), reason.color(colors::OFFLINE)));
    }
    details
}

fn print_stats(stats: &InventoryStats, elapsed: Duration, cfg: &Config) {
    let online: ColoredString = format!("{} online", stats.online).color(colors::ONLINE).bold();
    let offline: ColoredString = format!("{} offline", stats.offline).color(colors::OFFLINE).bold();
    let total_time: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "Probe Complete: {online}, {offline} of {} servers in {total_time}",
        stats.total
    );

    match cfg.quiet {
        0 => {
            print::rule();
            print::centerln(&output);
            print::aligned_line(7, "Windows", stats.windows);
            print::aligned_line(7, "Linux", stats.linux);
        }
        _ => {
            mprint!();
            info!("{output}");
        }
    }
}
