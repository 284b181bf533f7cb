//! Line-oriented terminal output. Every line goes through the logging layer so
//! it stays below the progress bars.

use std::fmt::Display;

use crate::terminal::{banner, colors, logging};
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: logging::PRINT_TARGET, raw_msg = msg);
}

/// Pads `title` on both sides with `fill` up to the full line width.
fn framed(title: ColoredString, fill: &str) -> String {
    let pad: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&title.to_string()));
    let left: usize = pad / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        title,
        fill.repeat(pad - left).color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let title: ColoredString = format!("⟦ SCOUT v{} ⟧", env!("CARGO_PKG_VERSION")).bright_green().bold();
    print(&framed(title, "═"));
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title: ColoredString = format!("⟦ {} ⟧", msg.to_uppercase()).bright_green();
    print(&framed(title, "─"));
}

/// Full-width double rule, used above totals and at exit.
pub fn rule() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg.as_ref()));
}

/// `> key....: value`, with keys padded to `width`.
pub fn aligned_line(width: usize, key: &str, value: impl Display) {
    let dots: String = ".".repeat((width + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

fn branch(last: bool) -> ColoredString {
    if last { "└─".color(colors::SEPARATOR) } else { "├─".color(colors::SEPARATOR) }
}

pub fn as_tree_one_level(pairs: Vec<(String, ColoredString)>) {
    let width: usize = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (i, (key, value)) in pairs.iter().enumerate() {
        let dots: String = ".".repeat(width + 1 - key.len());
        print(&format!(
            " {} {}{}{} {}",
            branch(i + 1 == pairs.len()),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn as_list(values: Vec<ColoredString>) {
    for (i, value) in values.iter().enumerate() {
        print(&format!(" {} {}", branch(i + 1 == values.len()), value));
    }
}

const NO_SERVERS: &str = r#"
         _   _  ___    ____  _____ ______     _______ ____  ____
        | \ | |/ _ \  / ___|| ____|  _ \ \   / / ____|  _ \/ ___|
        |  \| | | | | \___ \|  _| | |_) \ \ / /|  _| | |_) \___ \
        | |\  | |_| |  ___) | |___|  _ < \ V / | |___|  _ < ___) |
        |_| \_|\___/  |____/|_____|_| \_\ \_/  |_____|_| \_\____/
"#;

pub fn no_results() {
    print(&NO_SERVERS.red().bold().to_string());
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
