//! Key hints component.
//!
//! Displays keyboard shortcuts at the bottom of the screen: screen-specific
//! hints first, then the global navigation hints in a fixed order.

use iocraft::prelude::*;

use crate::tui::theme::{Spacing, Theme};
use crate::tui::types::KeyHint;

/// Props for KeyHintsBar
#[derive(Default, Props)]
pub struct KeyHintsBarProps {
    /// Screen-specific hints (varies by screen)
    pub screen_hints: Vec<KeyHint>,
}

/// A bar showing keyboard shortcut hints
#[component]
pub fn KeyHintsBar(props: &KeyHintsBarProps) -> impl Into<AnyElement<'static>> {
    let global_hints = [
        KeyHint::new("1-3/Tab", "Screen"),
        KeyHint::new("↑↓", "Navigate"),
        KeyHint::new("q", "Quit"),
    ];

    let hints: Vec<KeyHint> = props
        .screen_hints
        .iter()
        .cloned()
        .chain(global_hints.iter().cloned())
        .collect();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            gap: Spacing::SM,
            padding_left: Spacing::SM,
            padding_right: Spacing::SM,
            border_style: BorderStyle::Single,
            border_edges: Edges::Top,
            border_color: Theme::BORDER,
        ) {
            #(hints.into_iter().map(|hint| {
                let key = hint.key;
                let description = format!(" {}", hint.description);
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(content: key, weight: Weight::Bold)
                        Text(content: description, color: Theme::TEXT_MUTED)
                    }
                }
            }))
        }
    }
}
