//! Centralized colors: one per fruit tier (per theme) plus the well itself.
//! Single source of truth for fruits, preview and debug overlay.

use bevy::prelude::*;

use crate::gameplay::fruits::Theme;

pub const BACKGROUND: Color = Color::srgb(1.0, 0.996, 0.808); // #FFFECE
pub const WALL: Color = Color::srgb(1.0, 0.816, 0.78); // #FFD0C7
pub const DEATH_LINE: Color = Color::srgb(0.902, 0.616, 0.722); // #E69DB8
pub const SCORE_TEXT: Color = Color::srgb(0.2, 0.2, 0.2); // #333

pub const BASE_TIER_COLORS: [Color; 11] = [
    Color::srgb(0.86, 0.08, 0.24), // cherry
    Color::srgb(0.98, 0.33, 0.40), // strawberry
    Color::srgb(0.55, 0.27, 0.75), // grape
    Color::srgb(1.00, 0.65, 0.15), // gyool
    Color::srgb(1.00, 0.50, 0.05), // orange
    Color::srgb(0.90, 0.15, 0.15), // apple
    Color::srgb(0.85, 0.88, 0.35), // pear
    Color::srgb(1.00, 0.72, 0.65), // peach
    Color::srgb(0.95, 0.85, 0.20), // pineapple
    Color::srgb(0.60, 0.85, 0.35), // melon
    Color::srgb(0.15, 0.55, 0.20), // watermelon
];

pub const HALLOWEEN_TIER_COLORS: [Color; 11] = [
    Color::srgb(1.00, 0.85, 0.35),
    Color::srgb(0.95, 0.95, 0.90),
    Color::srgb(0.20, 0.20, 0.22),
    Color::srgb(0.35, 0.25, 0.40),
    Color::srgb(0.88, 0.86, 0.80),
    Color::srgb(0.80, 0.85, 0.95),
    Color::srgb(0.10, 0.10, 0.12),
    Color::srgb(0.25, 0.45, 0.25),
    Color::srgb(0.40, 0.15, 0.55),
    Color::srgb(1.00, 0.55, 0.10),
    Color::srgb(0.95, 0.45, 0.05),
];

/// Color for a tier, wrapping around the theme's palette.
#[inline]
pub fn tier_color(theme: Theme, tier: usize) -> Color {
    let colors: &[Color] = match theme {
        Theme::Base => &BASE_TIER_COLORS,
        Theme::Halloween => &HALLOWEEN_TIER_COLORS,
    };
    colors[tier % colors.len()]
}
