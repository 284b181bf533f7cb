use std::io::Write;

use scout_common::compare::report::ComparisonReport;
use scout_common::inventory::source::SourceName;

use super::{ExportError, ReportExporter};

const HEADER: [&str; 4] = ["partition", "sources", "hostname", "key"];

/// One row per host. Empty partitions still get one row, with blank host cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl ReportExporter for CsvExporter {
    fn export(&self, report: &ComparisonReport, out: &mut dyn Write) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(HEADER)?;

        for partition in report.partitions() {
            let sources: String = partition
                .sources
                .iter()
                .map(SourceName::slug)
                .collect::<Vec<&str>>()
                .join("+");

            if partition.hosts.is_empty() {
                writer.write_record([partition.name.as_str(), sources.as_str(), "", ""])?;
                continue;
            }
            for host in &partition.hosts {
                writer.write_record([
                    partition.name.as_str(),
                    sources.as_str(),
                    host.display.as_str(),
                    host.key.as_str(),
                ])?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "csv"
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
