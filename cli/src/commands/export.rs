use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use scout_common::compare::report::ComparisonReport;
use scout_common::config::Config;
use scout_core::export::{self as exporter, ExportFormat};
use tracing::info;

use crate::commands::{ExportArgs, OutputArgs};
use crate::terminal::format;

pub fn export(args: ExportArgs, cfg: &Config) -> anyhow::Result<()> {
    let file = File::open(&args.report)
        .with_context(|| format!("failed to open {}", args.report.display()))?;
    let report: ComparisonReport = exporter::read_report(BufReader::new(file))
        .with_context(|| format!("{} is not a saved report", args.report.display()))?;

    format::print_summary(&report, cfg);
    write_report(&report, args.format, &args.out)
}

/// Writes `report` to every output the user asked for.
pub fn write_all(report: &ComparisonReport, output: &OutputArgs) -> anyhow::Result<()> {
    for (format, path) in output.targets() {
        write_report(report, format, path)?;
    }
    Ok(())
}

pub fn write_report(report: &ComparisonReport, format: ExportFormat, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    format
        .exporter()
        .export(report, &mut writer)
        .with_context(|| format!("failed to write {format} report"))?;
    writer.flush()?;

    info!("Saved {format} report to {}", path.display());
    Ok(())
}
