//! Highlight color palettes.
//!
//! Fixed index → hex lookups for text and background highlight colors.
//! Both palettes run over the same seven hues (red, orange, yellow, green,
//! blue, purple, gray); font colors use the saturated shade, backgrounds
//! the pale one. Index 0 means "no color" and never resolves.

/// Saturated font colors, indexed 1..=7.
const FONT_COLORS: &[(i32, &str)] = &[
    (1, "#ef4444"),
    (2, "#f97316"),
    (3, "#eab308"),
    (4, "#22c55e"),
    (5, "#3b82f6"),
    (6, "#a855f7"),
    (7, "#6b7280"),
];

/// Pale background colors, indexed 1..=7.
const BACKGROUND_COLORS: &[(i32, &str)] = &[
    (1, "#fef2f2"),
    (2, "#fff7ed"),
    (3, "#fefce8"),
    (4, "#f0fdf4"),
    (5, "#eff6ff"),
    (6, "#faf5ff"),
    (7, "#f9fafb"),
];

fn lookup(palette: &'static [(i32, &str)], index: i32) -> Option<&'static str> {
    palette
        .iter()
        .find(|&&(i, _)| i == index)
        .map(|&(_, hex)| hex)
}

/// Resolve a font color index. Index 0 and unknown indices yield `None`.
pub fn font_color_hex(index: i32) -> Option<&'static str> {
    lookup(FONT_COLORS, index)
}

/// Resolve a background color index. Index 0 and unknown indices yield `None`.
pub fn background_color_hex(index: i32) -> Option<&'static str> {
    lookup(BACKGROUND_COLORS, index)
}
