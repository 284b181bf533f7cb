//! Row extraction shared by every source parser.

use scout_common::config::{NormalizerConfig, RawCountPolicy};
use scout_common::inventory::source::{SourceName, SourceSet};
use tracing::{debug, warn};

use crate::normalizer;

const DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// First-cell values that mark a header row rather than a host.
const HEADER_WORDS: &[&str] = &[
    "hostname",
    "host name",
    "host",
    "name",
    "server",
    "server name",
    "computer name",
    "ip",
    "ip address",
];

/// Where a source keeps its host identifier.
#[derive(Debug, Clone, Copy)]
pub(crate) enum HostColumn {
    First,
    /// Header names, lowercase, accepted for the host column.
    Named(&'static [&'static str]),
}

pub(crate) fn extract(
    source: SourceName,
    content: &[u8],
    column: HostColumn,
    cfg: &NormalizerConfig,
) -> SourceSet {
    let rows: Vec<Vec<String>> = read_rows(source, content);
    let (index, body) = locate(source, &rows, column);

    let mut set = SourceSet::new(source);
    for (line, row) in body.iter().enumerate() {
        let cell: &str = row.get(index).map(String::as_str).unwrap_or("");
        match normalizer::normalize(cell, cfg) {
            Ok(identifier) => {
                set.record_attempt();
                set.insert(identifier);
            }
            Err(e) => {
                if cfg.raw_count == RawCountPolicy::AllRows {
                    set.record_attempt();
                }
                set.record_skip();
                debug!(%source, row = line + 1, "skipping row: {e}");
            }
        }
    }

    debug!(
        %source,
        raw = set.raw_count(),
        hosts = set.len(),
        skipped = set.skipped(),
        "source parsed"
    );
    set
}

fn read_rows(source: SourceName, content: &[u8]) -> Vec<Vec<String>> {
    let text = String::from_utf8_lossy(content);
    let text: &str = text.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sniff_delimiter(text))
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) => warn!("{source}: unreadable row {}: {e}", idx + 1),
        }
    }
    rows
}

/// Picks the delimiter that occurs most often on the first non-blank line. Defaults to `,`.
fn sniff_delimiter(text: &str) -> u8 {
    let line: &str = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let mut best: u8 = b',';
    let mut best_count: usize = 0;
    for delimiter in DELIMITERS {
        let count = line.bytes().filter(|b| *b == delimiter).count();
        if count > best_count {
            best = delimiter;
            best_count = count;
        }
    }
    best
}

/// Returns the host column index and the data rows below any header.
///
/// Named sources export a header row. When none of its cells names the host
/// column, the first column is read instead and the row is still dropped, unless
/// it is a lone cell that is not a header word (a bare host list).
///
/// A first-column source only has a header when its first row carries several
/// cells and starts with a header word, so a host called `server` at the top of
/// a plain list survives.
fn locate(source: SourceName, rows: &[Vec<String>], column: HostColumn) -> (usize, &[Vec<String>]) {
    let Some(first) = rows.first() else {
        return (0, rows);
    };
    let starts_with_header_word = first
        .first()
        .is_some_and(|cell| HEADER_WORDS.contains(&header_token(cell).as_str()));

    let has_header = match column {
        HostColumn::Named(aliases) => {
            let named = first
                .iter()
                .position(|cell| aliases.contains(&header_token(cell).as_str()));
            if let Some(index) = named {
                return (index, &rows[1..]);
            }
            warn!("{source} input has no Hostname column, reading the first column instead");
            first.len() > 1 || starts_with_header_word
        }
        HostColumn::First => first.len() > 1 && starts_with_header_word,
    };

    if has_header { (0, &rows[1..]) } else { (0, rows) }
}

fn header_token(cell: &str) -> String {
    cell.trim().to_lowercase().replace('_', " ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
