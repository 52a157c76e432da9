//! # Accounts Screen
//!
//! All accounts with balances; Enter opens the selected account's detail.

use iocraft::prelude::*;
use rally_app::Account;

use crate::tui::components::EmptyState;
use crate::tui::theme::{Spacing, Theme};
use crate::tui::types::format_usd;

/// Props for AccountRow
#[derive(Default, Props)]
pub struct AccountRowProps {
    pub account: Account,
    pub accent: Option<Color>,
    pub is_selected: bool,
}

/// A single account in the list
#[component]
pub fn AccountRow(props: &AccountRowProps) -> impl Into<AnyElement<'static>> {
    let bg = if props.is_selected {
        Theme::BG_SELECTED
    } else {
        Theme::BG_DARK
    };
    let accent = props.accent.unwrap_or(Theme::PRIMARY);

    let name = props.account.name.clone();
    let number = format!("•••• {}", props.account.number_suffix());
    let balance = format_usd(props.account.balance);

    element! {
        View(
            flex_direction: FlexDirection::Row,
            background_color: bg,
            padding_left: Spacing::XS,
            padding_right: Spacing::XS,
            gap: Spacing::SM,
        ) {
            Text(content: "▌", color: accent)
            View(width: 20) {
                Text(content: name, color: Theme::TEXT)
            }
            Text(content: number, color: Theme::TEXT_MUTED)
            View(flex_grow: 1.0, justify_content: JustifyContent::End) {
                Text(content: balance, color: Theme::TEXT)
            }
        }
    }
}

/// Props for AccountsScreen
#[derive(Default, Props)]
pub struct AccountsScreenProps {
    pub accounts: Vec<Account>,
    pub selected_index: usize,
}

/// The accounts screen
#[component]
pub fn AccountsScreen(props: &AccountsScreenProps) -> impl Into<AnyElement<'static>> {
    let accounts = props.accounts.clone();
    let selected = props.selected_index;
    let total = format_usd(accounts.iter().map(|a| a.balance).sum());

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            // Header with the running total
            View(
                flex_direction: FlexDirection::Row,
                padding: Spacing::PANEL_PADDING,
                border_style: BorderStyle::Single,
                border_edges: Edges::Bottom,
                border_color: Theme::BORDER,
                gap: Spacing::SM,
            ) {
                Text(content: "Accounts", weight: Weight::Bold, color: Theme::PRIMARY)
                Text(content: total, color: Theme::TEXT)
            }

            View(
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                padding: Spacing::PANEL_PADDING,
                overflow: Overflow::Scroll,
            ) {
                #(if accounts.is_empty() {
                    vec![element! {
                        View {
                            EmptyState(title: "No accounts".to_string())
                        }
                    }]
                } else {
                    accounts.iter().enumerate().map(|(idx, account)| {
                        let is_selected = idx == selected;
                        element! {
                            View {
                                AccountRow(
                                    account: account.clone(),
                                    accent: Some(Theme::account_color(idx)),
                                    is_selected: is_selected,
                                )
                            }
                        }
                    }).collect::<Vec<_>>()
                })
            }
        }
    }
}
