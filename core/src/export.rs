//! # Report Export
//!
//! Renders a [`ComparisonReport`] to a file format. The report is always handed
//! in by the caller; exporters keep no state between calls.

use std::fmt;
use std::io::{self, Read, Write};
use std::str::FromStr;

use scout_common::compare::report::ComparisonReport;
use thiserror::Error;

mod delimited;
mod json;

pub use delimited::CsvExporter;
pub use json::{FieldsExporter, JsonExporter};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("report JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub trait ReportExporter {
    fn export(&self, report: &ComparisonReport, out: &mut dyn Write) -> Result<(), ExportError>;

    /// File extension for the output, without the dot.
    fn extension(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The full report.
    Json,
    /// The flat field view consumed by the inventory UI.
    Fields,
    Csv,
}

impl ExportFormat {
    pub fn exporter(&self) -> Box<dyn ReportExporter> {
        match self {
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Fields => Box::new(FieldsExporter),
            ExportFormat::Csv => Box::new(CsvExporter),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Fields => "fields",
            ExportFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "fields" => Ok(ExportFormat::Fields),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unknown export format '{other}', expected json, fields or csv")),
        }
    }
}

/// Loads a report previously written by [`JsonExporter`].
pub fn read_report(reader: impl Read) -> Result<ComparisonReport, ExportError> {
    Ok(serde_json::from_reader(reader)?)
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
    use crate::compare::{ComparisonService, SourcePayload};
    use scout_common::compare::mode::CompareMode;
    use scout_common::config::NormalizerConfig;
    use scout_common::inventory::source::SourceName;

    fn report() -> ComparisonReport {
        let payloads = [
            SourcePayload::new(SourceName::Scan, "web01\nweb02\n"),
            SourcePayload::new(SourceName::Hpsm, "Hostname\nWEB01\n"),
        ];
        ComparisonService::new(NormalizerConfig::default())
            .compare(CompareMode::ScanHpsm, &payloads)
            .unwrap()
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!(" csv ".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("fields".parse::<ExportFormat>(), Ok(ExportFormat::Fields));
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn saved_report_can_be_exported_again() {
        let original = report();
        let mut saved: Vec<u8> = Vec::new();
        ExportFormat::Json.exporter().export(&original, &mut saved).unwrap();

        let loaded = read_report(saved.as_slice()).unwrap();
        assert_eq!(loaded, original);

        let mut csv_out: Vec<u8> = Vec::new();
        ExportFormat::Csv.exporter().export(&loaded, &mut csv_out).unwrap();
        assert!(String::from_utf8(csv_out).unwrap().starts_with("partition,sources,hostname,key"));
    }

    #[test]
    fn garbage_report_is_rejected() {
        let err = read_report(&b"{not json"[..]).unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
        assert!(err.to_string().starts_with("report JSON error: "));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_json_write_is_not_called_invalid_input() {
        let err = ExportFormat::Json.exporter().export(&report(), &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
        assert!(err.to_string().starts_with("report JSON error: "));
        assert!(!err.to_string().contains("invalid"));
    }
}
