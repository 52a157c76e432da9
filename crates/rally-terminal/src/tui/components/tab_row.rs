//! Tab row component.
//!
//! Renders the ordered top-level tab set with the active tab highlighted.
//! Which tab counts as active is decided by `resolve_current_tab` before the
//! props reach this component, so the row stays synchronized with the
//! back-stack even while a non-tab route (the account detail) is showing.

use iocraft::prelude::*;
use rally_app::Destination;

use crate::tui::theme::{Spacing, Theme};

/// Props for RallyTabRow
#[derive(Default, Props)]
pub struct RallyTabRowProps {
    /// Tab to highlight
    pub active: Destination,
}

/// Tab bar for screen navigation
#[component]
pub fn RallyTabRow(props: &RallyTabRowProps) -> impl Into<AnyElement<'static>> {
    let active = props.active;

    element! {
        View(
            flex_direction: FlexDirection::Row,
            gap: Spacing::MD,
            padding_left: Spacing::SM,
            padding_right: Spacing::SM,
            padding_top: Spacing::XS,
            border_style: BorderStyle::Single,
            border_edges: Edges::Bottom,
            border_color: Theme::BORDER,
        ) {
            #(Destination::tabs().iter().map(|&tab| {
                let is_active = tab == active;
                let color = if is_active { Theme::PRIMARY } else { Theme::TEXT_MUTED };
                let weight = if is_active { Weight::Bold } else { Weight::Normal };
                let label = format!("{} {}", tab.icon(), tab.title().to_uppercase());
                element! {
                    Text(content: label, color: color, weight: weight)
                }
            }))
        }
    }
}
