use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 175, b: 95 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

// Partition membership
pub const IN_ALL: Color = Color::Green;
pub const IN_SOME: Color = Color::Yellow;
pub const IN_ONE: Color = Color::Red;

pub const ONLINE: Color = Color::Green;
pub const OFFLINE: Color = Color::Red;
