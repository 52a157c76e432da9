//! Empty-state placeholder for lists with nothing to show.

use iocraft::prelude::*;

use crate::tui::theme::{Spacing, Theme};

/// Props for EmptyState
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub title: String,
}

/// Centered muted placeholder
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let title = props.title.clone();

    element! {
        View(
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: Spacing::PANEL_PADDING,
        ) {
            Text(content: title, color: Theme::TEXT_MUTED)
        }
    }
}
