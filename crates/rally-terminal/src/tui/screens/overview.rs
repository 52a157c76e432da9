//! # Overview Screen
//!
//! The start destination: alert banner plus account and bill summaries.
//! Enter on a highlighted account opens its detail; `a`/`b` jump to the
//! full Accounts and Bills screens.

use iocraft::prelude::*;
use rally_app::{Account, Bill};

use crate::tui::theme::{Spacing, Theme};
use crate::tui::types::format_usd;

/// Props for AlertCard
#[derive(Default, Props)]
pub struct AlertCardProps {
    pub message: String,
}

/// Alert banner at the top of the overview
#[component]
pub fn AlertCard(props: &AlertCardProps) -> impl Into<AnyElement<'static>> {
    let message = props.message.clone();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: Theme::WARNING,
            padding_left: Spacing::XS,
            padding_right: Spacing::XS,
            gap: Spacing::XS,
        ) {
            Text(content: "Alerts", weight: Weight::Bold, color: Theme::WARNING)
            Text(content: message, color: Theme::TEXT)
        }
    }
}

/// Props for OverviewScreen
#[derive(Default, Props)]
pub struct OverviewScreenProps {
    pub accounts: Vec<Account>,
    pub bills: Vec<Bill>,
    /// Highlighted account row
    pub selected_index: usize,
}

/// The overview screen
#[component]
pub fn OverviewScreen(props: &OverviewScreenProps) -> impl Into<AnyElement<'static>> {
    let accounts = props.accounts.clone();
    let bills = props.bills.clone();
    let selected = props.selected_index;

    let accounts_total = format_usd(accounts.iter().map(|a| a.balance).sum());
    let bills_total = format_usd(bills.iter().map(|b| b.amount).sum());

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
            padding: Spacing::PANEL_PADDING,
            gap: Spacing::XS,
        ) {
            AlertCard(message: "Heads up, you've used up 90% of your Shopping budget for this month.".to_string())

            // Accounts summary
            View(
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: Theme::BORDER,
                padding_left: Spacing::XS,
                padding_right: Spacing::XS,
            ) {
                View(flex_direction: FlexDirection::Row, gap: Spacing::SM) {
                    Text(content: "Accounts", weight: Weight::Bold, color: Theme::PRIMARY)
                    Text(content: accounts_total, color: Theme::TEXT)
                }
                #(accounts.iter().enumerate().map(|(idx, account)| {
                    let is_selected = idx == selected;
                    let bg = if is_selected { Theme::BG_SELECTED } else { Color::Reset };
                    let accent = Theme::account_color(idx);
                    let name = account.name.clone();
                    let balance = format_usd(account.balance);
                    element! {
                        View(
                            flex_direction: FlexDirection::Row,
                            background_color: bg,
                            gap: Spacing::SM,
                        ) {
                            Text(content: "▌", color: accent)
                            View(width: 16) {
                                Text(content: name, color: Theme::TEXT)
                            }
                            View(flex_grow: 1.0, justify_content: JustifyContent::End) {
                                Text(content: balance, color: Theme::TEXT)
                            }
                        }
                    }
                }))
                Text(content: "SEE ALL [a]", color: Theme::TEXT_MUTED)
            }

            // Bills summary
            View(
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: Theme::BORDER,
                padding_left: Spacing::XS,
                padding_right: Spacing::XS,
            ) {
                View(flex_direction: FlexDirection::Row, gap: Spacing::SM) {
                    Text(content: "Bills", weight: Weight::Bold, color: Theme::PRIMARY)
                    Text(content: bills_total, color: Theme::TEXT)
                }
                #(bills.iter().map(|bill| {
                    let name = bill.name.clone();
                    let due = format!("Due {}", bill.due);
                    let amount = format!("-{}", format_usd(bill.amount));
                    element! {
                        View(flex_direction: FlexDirection::Row, gap: Spacing::SM) {
                            View(width: 16) {
                                Text(content: name, color: Theme::TEXT)
                            }
                            Text(content: due, color: Theme::TEXT_MUTED)
                            View(flex_grow: 1.0, justify_content: JustifyContent::End) {
                                Text(content: amount, color: Theme::NEGATIVE)
                            }
                        }
                    }
                }))
                Text(content: "SEE ALL [b]", color: Theme::TEXT_MUTED)
            }
        }
    }
}
