/// ANSI color helper utilities for terminal output.
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap())
}

/// Parse `#rrggbb` into its RGB components.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let caps = hex_re().captures(hex.trim())?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

/// Wrap `text` in the background color of an event.
pub fn paint_bg(text: &str, hex: Option<&str>) -> String {
    match hex.and_then(parse_hex) {
        Some((r, g, b)) => Colour::Black.on(Colour::RGB(r, g, b)).paint(text).to_string(),
        None => text.to_string(),
    }
}

/// Status color: Done → green, In Progress → blue, otherwise grey.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "Done" => GREEN,
        "In Progress" => BLUE,
        "Not Started" => GREY,
        _ => RESET,
    }
}

/// Priority color: High → red, Medium → yellow, Low → green.
pub fn color_for_priority(priority: &str) -> &'static str {
    match priority {
        "High" => RED,
        "Medium" => YELLOW,
        "Low" => GREEN,
        _ => RESET,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}

/// Strip ANSI escapes (used to measure the visible width of a cell).
pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());
    re.replace_all(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex("#b3d9ff"), Some((0xb3, 0xd9, 0xff)));
        assert_eq!(parse_hex("#B3D9FF"), Some((0xb3, 0xd9, 0xff)));
        assert_eq!(parse_hex("b3d9ff"), None);
        assert_eq!(parse_hex("#b3d9f"), None);
    }

    #[test]
    fn strip_removes_escapes() {
        let painted = paint_bg("x", Some("#ffffff"));
        assert!(painted.contains("48;2;255;255;255"));
        assert_eq!(strip_ansi(&painted), "x");
        assert_eq!(paint_bg("x", None), "x");
        assert_eq!(strip_ansi(&colorize("Done", GREEN)), "Done");
    }
}
