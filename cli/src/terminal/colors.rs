use colored::Color;

pub const PRIMARY: Color = Color::BrightBlue;
pub const ACCENT: Color = Color::BrightMagenta;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const RESULT: Color = Color::BrightGreen;

pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const IPV4_PREFIX: Color = Color::Cyan;

pub const BIT_SET: Color = Color::BrightBlue;
pub const BIT_CLEAR: Color = Color::BrightBlack;

pub const WARNING: Color = Color::Yellow;
