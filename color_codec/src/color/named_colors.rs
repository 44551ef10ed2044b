// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named colors accepted by [`parse_color`](crate::parse_color).
//!
//! To add a named color, add an entry to [`NAMED_COLORS`]. Names must be lowercase,
//! since lookup lowercases its input before matching.
//!
//! Values are not the CSS keyword colors. The primaries (`red`, `green`, `blue`),
//! `yellow`, and `black` use full or zero intensity channels, so `green` is `#00ff00`
//! rather than CSS `#008000`. `gray` is the exact midpoint `0.5` on every channel
//! rather than CSS `#808080`. `orange` and `pink` have no such form, so they use
//! their CSS values, `rgb(255, 165, 0)` and `rgb(255, 192, 203)`.

use crate::Color;

/// Lowercase name → canonical opaque color.
pub const NAMED_COLORS: [(&str, Color); 8] = [
    ("red", Color::rgb(1.0, 0.0, 0.0)),
    ("green", Color::rgb(0.0, 1.0, 0.0)),
    ("blue", Color::rgb(0.0, 0.0, 1.0)),
    ("yellow", Color::rgb(1.0, 1.0, 0.0)),
    // rgb(255, 165, 0)
    ("orange", Color::rgb(1.0, 165.0 / 255.0, 0.0)),
    // rgb(255, 192, 203)
    ("pink", Color::rgb(1.0, 192.0 / 255.0, 203.0 / 255.0)),
    ("black", Color::rgb(0.0, 0.0, 0.0)),
    ("gray", Color::rgb(0.5, 0.5, 0.5)),
];

/// Case insensitive lookup in [`NAMED_COLORS`].
#[must_use]
pub fn lookup_named_color(name: &str) -> Option<Color> {
    let name = name.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(it, _)| *it == name)
        .map(|(_, color)| *color)
}

pub fn named_colors() -> impl Iterator<Item = (&'static str, Color)> {
    NAMED_COLORS.iter().copied()
}
