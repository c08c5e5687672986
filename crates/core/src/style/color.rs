//! Color string normalization.

/// Returns the trimmed color when it names something visible.
///
/// Empty strings, `none` and `transparent` (any case, any surrounding
/// whitespace) are treated as "no color".
#[must_use]
pub fn usable_color(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.is_empty() || lowered == "none" || lowered == "transparent" {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Returns `value` trimmed, or `fallback` when `value` is not a usable color.
///
/// The original case of `value` is preserved.
///
/// ```
/// use linkpage_core::style::to_valid_color;
///
/// assert_eq!(to_valid_color("", "#112233"), "#112233");
/// assert_eq!(to_valid_color(" #ABCDEF ", "#112233"), "#ABCDEF");
/// ```
#[must_use]
pub fn to_valid_color(value: &str, fallback: &str) -> String {
    usable_color(value).unwrap_or_else(|| fallback.to_owned())
}

/// Parses `#RGB` or `#RRGGBB` into its channels.
pub(crate) fn parse_hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<Vec<u8>>>()?;

    match digits.as_slice() {
        [r, g, b] => Some((r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Some((r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
        _ => None,
    }
}

/// Formats channels as an uppercase `#RRGGBB` string.
pub(crate) fn format_hex_rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}
