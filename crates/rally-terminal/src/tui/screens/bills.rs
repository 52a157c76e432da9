//! # Bills Screen
//!
//! Upcoming bills with due dates.

use iocraft::prelude::*;
use rally_app::Bill;

use crate::tui::components::EmptyState;
use crate::tui::theme::{Spacing, Theme};
use crate::tui::types::format_usd;

/// Props for BillRow
#[derive(Default, Props)]
pub struct BillRowProps {
    pub bill: Bill,
    pub is_selected: bool,
}

/// A single bill in the list
#[component]
pub fn BillRow(props: &BillRowProps) -> impl Into<AnyElement<'static>> {
    let bg = if props.is_selected {
        Theme::BG_SELECTED
    } else {
        Theme::BG_DARK
    };

    let name = props.bill.name.clone();
    let due = format!("Due {}", props.bill.due);
    let amount = format!("-{}", format_usd(props.bill.amount));

    element! {
        View(
            flex_direction: FlexDirection::Row,
            background_color: bg,
            padding_left: Spacing::XS,
            padding_right: Spacing::XS,
            gap: Spacing::SM,
        ) {
            View(width: 20) {
                Text(content: name, color: Theme::TEXT)
            }
            Text(content: due, color: Theme::TEXT_MUTED)
            View(flex_grow: 1.0, justify_content: JustifyContent::End) {
                Text(content: amount, color: Theme::NEGATIVE)
            }
        }
    }
}

/// Props for BillsScreen
#[derive(Default, Props)]
pub struct BillsScreenProps {
    pub bills: Vec<Bill>,
    pub selected_index: usize,
}

/// The bills screen
#[component]
pub fn BillsScreen(props: &BillsScreenProps) -> impl Into<AnyElement<'static>> {
    let bills = props.bills.clone();
    let selected = props.selected_index;
    let total = format!("Due {}", format_usd(bills.iter().map(|b| b.amount).sum()));

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            View(
                flex_direction: FlexDirection::Row,
                padding: Spacing::PANEL_PADDING,
                border_style: BorderStyle::Single,
                border_edges: Edges::Bottom,
                border_color: Theme::BORDER,
                gap: Spacing::SM,
            ) {
                Text(content: "Bills", weight: Weight::Bold, color: Theme::PRIMARY)
                Text(content: total, color: Theme::TEXT)
            }

            View(
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                padding: Spacing::PANEL_PADDING,
                overflow: Overflow::Scroll,
            ) {
                #(if bills.is_empty() {
                    vec![element! {
                        View {
                            EmptyState(title: "No bills due".to_string())
                        }
                    }]
                } else {
                    bills.iter().enumerate().map(|(idx, bill)| {
                        let is_selected = idx == selected;
                        element! {
                            View {
                                BillRow(bill: bill.clone(), is_selected: is_selected)
                            }
                        }
                    }).collect::<Vec<_>>()
                })
            }
        }
    }
}
