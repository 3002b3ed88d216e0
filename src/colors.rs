use std::collections::HashMap;

use lazy_static::lazy_static;

/// Color used for languages missing from the table.
pub const FALLBACK_COLOR: &str = "#ccc";

lazy_static! {
    static ref LANGUAGE_COLORS: HashMap<&'static str, &'static str> = HashMap::from([
        ("JavaScript", "#f1e05a"),
        ("Python", "#3572a5"),
        ("Java", "#b07219"),
        ("TypeScript", "#2b7489"),
        ("HTML", "#e34c26"),
        ("CSS", "#563d7c"),
        ("PHP", "#4f5d95"),
        ("C", "#555555"),
        ("C++", "#f34b7d"),
        ("Go", "#00add8"),
        ("Rust", "#dea584"),
        ("Swift", "#ffac45"),
        ("Kotlin", "#f18e33"),
        ("Dart", "#00b4ab"),
        ("Ruby", "#701516"),
        ("Shell", "#89e051"),
    ]);
}

/// Maps a GitHub language name to its display color.
pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS.get(language).copied().unwrap_or(FALLBACK_COLOR)
}

/// Shifts every RGB channel of a hex color by `amount`, clamping to 0..=255.
///
/// Accepts `#rrggbb` or `rrggbb` and keeps the leading `#` only if the input
/// had one. Three-digit shorthand is expanded first. Returns `None` when the
/// input is not a hex color.
pub fn adjust_brightness(color: &str, amount: i16) -> Option<String> {
    let (use_pound, hex) = match color.strip_prefix('#') {
        Some(rest) => (true, rest),
        None => (false, color),
    };

    let expanded = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_string(),
        _ => return None,
    };
    let num = u32::from_str_radix(&expanded, 16).ok()?;

    let shift =
        |channel: u32| -> u32 { (channel as i32 + i32::from(amount)).clamp(0, 255) as u32 };
    let r = shift(num >> 16);
    let g = shift((num >> 8) & 0xff);
    let b = shift(num & 0xff);

    let prefix = if use_pound { "#" } else { "" };
    Some(format!("{prefix}{:06x}", (r << 16) | (g << 8) | b))
}
