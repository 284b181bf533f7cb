use std::time::Duration;

use colored::*;
use scout_common::compare::report::{ComparisonReport, PartitionReport, SourceSummary};
use scout_common::config::Config;
use scout_common::inventory::source::SourceName;
use tracing::info;

use crate::mprint;
use crate::terminal::{colors, print};

/// Human label for a partition, as the inventory team words it.
///
/// 2-way: `Matching`, `Missing in HPSM`. Full: `Verified (All 3)`, `Scan+HPSM Only`, `Only in Zabbix`.
pub fn partition_label(report: &ComparisonReport, partition: &PartitionReport) -> String {
    let universe: usize = report.sources().len();
    match partition.sources.as_slice() {
        all if all.len() == universe && universe == 2 => "Matching".to_string(),
        all if all.len() == universe => format!("Verified (All {universe})"),
        [only] if universe == 2 => report
            .sources()
            .iter()
            .find(|summary| summary.source != *only)
            .map(|other| format!("Missing in {}", other.source.label()))
            .unwrap_or_else(|| format!("Only in {}", only.label())),
        [only] => format!("Only in {}", only.label()),
        some => {
            let labels: Vec<&str> = some.iter().map(SourceName::label).collect();
            format!("{} Only", labels.join("+"))
        }
    }
}

fn partition_color(report: &ComparisonReport, partition: &PartitionReport) -> Color {
    match partition.sources.len() {
        n if n == report.sources().len() => colors::IN_ALL,
        1 => colors::IN_ONE,
        _ => colors::IN_SOME,
    }
}

pub fn print_report(report: &ComparisonReport, elapsed: Duration, cfg: &Config) {
    print::header(&format!("{} comparison", report.mode()), cfg.quiet);
    print_sources(report.sources(), cfg);

    if cfg.quiet < 2 {
        for (idx, partition) in report.partitions().iter().enumerate() {
            mprint!();
            print_partition(report, partition, idx);
        }
    }

    mprint!();
    print_totals(report, elapsed, cfg);
}

/// Counts only, for reports loaded from disk.
pub fn print_summary(report: &ComparisonReport, cfg: &Config) {
    print::header(&format!("saved {} report", report.mode()), cfg.quiet);
    print_sources(report.sources(), cfg);
    for partition in report.partitions() {
        let label: ColoredString = partition_label(report, partition).color(partition_color(report, partition));
        print::print_status(format!("{label}: {}", partition.count));
    }
}

fn print_sources(sources: &[SourceSummary], cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    let width: usize = sources.iter().map(|s| s.source.label().len()).max().unwrap_or(0);
    for summary in sources {
        let value: String = format!(
            "{} hosts ({} rows)",
            summary.normalized_count, summary.raw_count
        );
        print::aligned_line(width, summary.source.label(), value);
    }
}

fn print_partition(report: &ComparisonReport, partition: &PartitionReport, idx: usize) {
    let color: Color = partition_color(report, partition);
    let title: String = format!(
        "{} ({})",
        partition_label(report, partition),
        partition.count
    );
    print::tree_head(idx, &title);

    if partition.hosts.is_empty() {
        print::as_list(vec!["none".color(colors::SEPARATOR)]);
        return;
    }
    let hosts: Vec<ColoredString> = partition
        .hosts
        .iter()
        .map(|host| {
            if host.display.eq_ignore_ascii_case(&host.key) {
                host.display.color(color)
            } else {
                format!("{} {}", host.display.color(color), format!("({})", host.key).color(colors::SEPARATOR)).normal()
            }
        })
        .collect();
    print::as_list(hosts);
}

fn print_totals(report: &ComparisonReport, elapsed: Duration, cfg: &Config) {
    let agreed: usize = report
        .partitions()
        .iter()
        .filter(|p| p.sources.len() == report.sources().len())
        .map(|p| p.count)
        .sum();
    let review: usize = report
        .partitions()
        .iter()
        .filter(|p| p.sources.len() < report.sources().len())
        .map(|p| p.count)
        .sum();

    let agreed: ColoredString = format!("{agreed} in every source").color(colors::IN_ALL).bold();
    let review: ColoredString = format!("{review} to review").color(colors::IN_ONE).bold();
    let total_time: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    let output: String = format!("Comparison Complete: {agreed}, {review} in {total_time}");

    match cfg.quiet {
        0 => {
            print::rule();
            print::centerln(&output);
        }
        _ => info!("{output}"),
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
