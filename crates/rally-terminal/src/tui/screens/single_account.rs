//! # Single Account Screen
//!
//! Detail view for one account, reached from the overview and accounts
//! lists or through a deep link.

use iocraft::prelude::*;
use rally_app::Account;

use crate::tui::components::EmptyState;
use crate::tui::theme::{Spacing, Theme};
use crate::tui::types::format_usd;

/// Pick the account to show. When the route carried no argument (or the
/// argument matches nothing), the screen falls back to its own default: the
/// first account in the set. Rendering with the argument absent is a defined
/// state, not an error.
pub fn resolve_account<'a>(accounts: &'a [Account], account_type: Option<&str>) -> Option<&'a Account> {
    account_type
        .and_then(|name| accounts.iter().find(|a| a.name == name))
        .or_else(|| accounts.first())
}

/// Props for SingleAccountScreen
#[derive(Default, Props)]
pub struct SingleAccountScreenProps {
    pub accounts: Vec<Account>,
    /// `account_type` argument extracted from the back-stack entry, absent
    /// for the bare detail route
    pub account_type: Option<String>,
}

/// The single-account detail screen
#[component]
pub fn SingleAccountScreen(props: &SingleAccountScreenProps) -> impl Into<AnyElement<'static>> {
    let account = resolve_account(&props.accounts, props.account_type.as_deref()).cloned();

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            View(
                padding: Spacing::PANEL_PADDING,
                border_style: BorderStyle::Single,
                border_edges: Edges::Bottom,
                border_color: Theme::BORDER,
            ) {
                Text(content: "Account", weight: Weight::Bold, color: Theme::PRIMARY)
            }

            View(
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                align_items: AlignItems::Center,
                padding: Spacing::MD,
                gap: Spacing::XS,
            ) {
                #(if let Some(account) = account {
                    let name = account.name.clone();
                    let balance = format_usd(account.balance);
                    let number = format!("Account •••• {}", account.number_suffix());
                    vec![
                        element! { View { Text(content: name, weight: Weight::Bold, color: Theme::PRIMARY) } },
                        element! { View { Text(content: balance, weight: Weight::Bold, color: Theme::TEXT) } },
                        element! { View { Text(content: number, color: Theme::TEXT_MUTED) } },
                    ]
                } else {
                    vec![element! {
                        View {
                            EmptyState(title: "No accounts to show".to_string())
                        }
                    }]
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rally_app::UserData;

    #[test]
    fn test_resolves_named_account() {
        let data = UserData::demo();
        let account = resolve_account(&data.accounts, Some("Vacation")).unwrap();
        assert_eq!(account.name, "Vacation");
    }

    #[test]
    fn test_missing_argument_falls_back_to_first_account() {
        let data = UserData::demo();
        let account = resolve_account(&data.accounts, None).unwrap();
        assert_eq!(account.name, "Checking");
    }

    #[test]
    fn test_unknown_account_falls_back_to_first_account() {
        let data = UserData::demo();
        let account = resolve_account(&data.accounts, Some("Retirement")).unwrap();
        assert_eq!(account.name, "Checking");
    }

    #[test]
    fn test_empty_dataset_yields_nothing() {
        assert!(resolve_account(&[], Some("Checking")).is_none());
    }
}
