//! # Theme Constants
//!
//! Centralized color and style definitions for consistent UI.

use iocraft::prelude::*;

/// Theme constants for the Rally TUI
pub struct Theme;

impl Theme {
    // === Primary Colors ===
    pub const PRIMARY: Color = Color::Green;
    pub const SECONDARY: Color = Color::DarkGreen;
    pub const ACCENT: Color = Color::Cyan;

    // === Text Colors ===
    pub const TEXT: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::AnsiValue(245); // Light grey - visible on dark backgrounds
    pub const TEXT_DISABLED: Color = Color::AnsiValue(240); // Darker grey - inactive elements

    // === Background Colors ===
    pub const BG_DARK: Color = Color::AnsiValue(236); // Dark grey for unselected rows
    pub const BG_SELECTED: Color = Color::AnsiValue(22); // Dark green - distinct but not overpowering

    // === Border Colors ===
    pub const BORDER: Color = Color::DarkGrey;
    pub const BORDER_FOCUS: Color = Color::Green;

    // === Status Colors ===
    pub const POSITIVE: Color = Color::Green;
    pub const NEGATIVE: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;

    /// Per-account accent colors, assigned by row index
    pub const ACCOUNT_COLORS: [Color; 4] = [
        Color::Green,
        Color::AnsiValue(43), // teal
        Color::AnsiValue(81), // sky blue
        Color::AnsiValue(135), // violet
    ];

    /// Accent color for an account row
    pub fn account_color(index: usize) -> Color {
        Self::ACCOUNT_COLORS[index % Self::ACCOUNT_COLORS.len()]
    }
}

/// Spacing scale for consistent layout
pub struct Spacing;

impl Spacing {
    /// Extra small spacing (1 unit)
    pub const XS: u32 = 1;
    /// Small spacing (2 units)
    pub const SM: u32 = 2;
    /// Medium spacing (3 units)
    pub const MD: u32 = 3;
    /// Standard panel padding
    pub const PANEL_PADDING: u32 = 1;
}
