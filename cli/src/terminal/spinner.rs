use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// A span that renders as a progress spinner while probes run inside it.
pub fn probe_span(total: usize) -> Span {
    let span = info_span!("probe", indicatif.pb_show = true);
    span.pb_set_style(&style());
    span.pb_set_length(total as u64);
    span.pb_set_message("Probing management ports...");
    span
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} {pos}/{len} servers [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}
