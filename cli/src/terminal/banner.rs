use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                  ____   ____ ___  _   _ _____
                 / ___| / ___/ _ \| | | |_   _|
                 \___ \| |  | | | | | | | | |
                  ___) | |__| |_| | |_| | | |
                 |____/ \____\___/ \___/  |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
