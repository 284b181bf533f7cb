use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use scout_common::compare::report::ComparisonReport;
use scout_common::config::Config;
use scout_common::inventory::source::SourceName;
use scout_core::compare::{ComparisonService, SourcePayload};

use crate::commands::{CompareArgs, export};
use crate::terminal::format;

pub fn compare(args: CompareArgs, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let payloads: Vec<SourcePayload> = load_payloads(&args)?;

    let service = ComparisonService::new(cfg.normalizer.clone());
    let report: ComparisonReport = service.compare(args.mode, &payloads)?;

    format::print_report(&report, start_time.elapsed(), cfg);
    export::write_all(&report, &args.output)
}

/// Reads every file given on the command line. Sources the mode does not need
/// are still read; the comparison ignores them.
fn load_payloads(args: &CompareArgs) -> anyhow::Result<Vec<SourcePayload>> {
    let files: [(SourceName, &Option<PathBuf>); 3] = [
        (SourceName::Scan, &args.scan),
        (SourceName::Hpsm, &args.hpsm),
        (SourceName::Zabbix, &args.zabbix),
    ];

    let mut payloads: Vec<SourcePayload> = Vec::new();
    for (source, path) in files {
        let Some(path) = path else {
            continue;
        };
        let content: Vec<u8> = fs::read(path)
            .with_context(|| format!("failed to read {source} export {}", path.display()))?;
        payloads.push(SourcePayload::new(source, content));
    }
    Ok(payloads)
}
