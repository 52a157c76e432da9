//! # Destination Registry
//!
//! The fixed set of navigable destinations and tab resolution.

use crate::route::Route;

/// Destination identifiers for navigation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Financial overview (home)
    #[default]
    Overview,
    /// Account balances
    Accounts,
    /// Upcoming bills
    Bills,
    /// Single-account detail (not a tab; reached from list screens)
    SingleAccount,
}

impl Destination {
    /// Get the stable route identifier for this destination
    pub fn route(&self) -> &'static str {
        match self {
            Destination::Overview => "overview",
            Destination::Accounts => "accounts",
            Destination::Bills => "bills",
            Destination::SingleAccount => "single_account",
        }
    }

    /// Get the display name for the destination
    pub fn title(&self) -> &'static str {
        match self {
            Destination::Overview => "Overview",
            Destination::Accounts => "Accounts",
            Destination::Bills => "Bills",
            Destination::SingleAccount => "Account",
        }
    }

    /// Get the icon glyph for the destination
    pub fn icon(&self) -> &'static str {
        match self {
            Destination::Overview => "◔",
            Destination::Accounts => "$",
            Destination::Bills => "▤",
            Destination::SingleAccount => "◈",
        }
    }

    /// Get the numeric key (1-3) for this tab, if it is one
    pub fn key_number(&self) -> Option<u8> {
        match self {
            Destination::Overview => Some(1),
            Destination::Accounts => Some(2),
            Destination::Bills => Some(3),
            Destination::SingleAccount => None,
        }
    }

    /// Get the tab destination from a numeric key (1-3)
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            1 => Some(Destination::Overview),
            2 => Some(Destination::Accounts),
            3 => Some(Destination::Bills),
            _ => None,
        }
    }

    /// Get the ordered top-level tab set
    pub fn tabs() -> &'static [Destination] {
        &[
            Destination::Overview,
            Destination::Accounts,
            Destination::Bills,
        ]
    }

    /// Get the next tab in cycle order (detail routes cycle from Overview)
    pub fn next_tab(&self) -> Destination {
        match self {
            Destination::Overview => Destination::Accounts,
            Destination::Accounts => Destination::Bills,
            Destination::Bills => Destination::Overview,
            Destination::SingleAccount => Destination::Accounts,
        }
    }

    /// Get the previous tab in cycle order
    pub fn prev_tab(&self) -> Destination {
        match self {
            Destination::Overview => Destination::Bills,
            Destination::Accounts => Destination::Overview,
            Destination::Bills => Destination::Accounts,
            Destination::SingleAccount => Destination::Bills,
        }
    }
}

/// Resolve which tab the tab row should highlight for the current route.
///
/// Returns the first entry in `tabs` whose route matches `current`; when
/// nothing matches (no current route yet, or a non-tab route such as the
/// detail screen) falls back to `default_tab`. The fallback keeps the tab
/// row synchronized while on the detail screen; it deliberately shows the
/// fixed default rather than the tab that launched the detail.
pub fn resolve_current_tab(
    current: Option<&Route>,
    tabs: &[Destination],
    default_tab: Destination,
) -> Destination {
    current
        .and_then(|route| tabs.iter().copied().find(|tab| *tab == route.destination()))
        .unwrap_or(default_tab)
}
