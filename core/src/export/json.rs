use std::io::Write;

use scout_common::compare::report::ComparisonReport;

use super::{ExportError, ReportExporter};

/// Pretty JSON of the whole report. [`super::read_report`] reads it back.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn export(&self, report: &ComparisonReport, out: &mut dyn Write) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Pretty JSON of [`ComparisonReport::to_fields`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldsExporter;

impl ReportExporter for FieldsExporter {
    fn export(&self, report: &ComparisonReport, out: &mut dyn Write) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *out, &report.to_fields())?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "json"
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
    use scout_common::compare::mode::CompareMode;
    use scout_common::compare::report::{PartitionReport, ReportEntry, SourceSummary};
    use scout_common::inventory::source::SourceName;
    use serde_json::{Value, json};

    fn report() -> ComparisonReport {
        ComparisonReport::new(
            CompareMode::HpsmZabbix,
            vec![
                SourceSummary { source: SourceName::Hpsm, raw_count: 2, normalized_count: 1 },
                SourceSummary { source: SourceName::Zabbix, raw_count: 1, normalized_count: 1 },
            ],
            vec![PartitionReport {
                name: "matching".to_string(),
                sources: vec![SourceName::Hpsm, SourceName::Zabbix],
                count: 1,
                hosts: vec![ReportEntry { key: "db01".to_string(), display: "DB01".to_string() }],
            }],
        )
    }

    #[test]
    fn json_export_uses_wire_names() {
        let mut out: Vec<u8> = Vec::new();
        JsonExporter.export(&report(), &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["mode"], json!("hpsm-zabbix"));
        assert_eq!(value["sources"][0]["source"], json!("hpsm"));
        assert_eq!(value["partitions"][0]["hosts"][0]["display"], json!("DB01"));
    }

    #[test]
    fn fields_export_is_flat() {
        let mut out: Vec<u8> = Vec::new();
        FieldsExporter.export(&report(), &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["compare_type"], json!("hpsm-zabbix"));
        assert_eq!(value["hpsm_raw_count"], json!(2));
        assert_eq!(value["matching"], json!(["DB01"]));
    }
}
