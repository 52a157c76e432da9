//! # App Shell
//!
//! Main application component: tab row on top, the screen the current route
//! maps to below, key hints at the bottom. Every route in the registry has
//! exactly one arm in the dispatch below; the match is exhaustive over
//! [`Route`], so an unroutable destination cannot exist at runtime.

use iocraft::prelude::*;
use rally_app::{Destination, Route};

use crate::tui::components::{KeyHintsBar, RallyTabRow};
use crate::tui::iocraft_adapter::convert_iocraft_event;
use crate::tui::screens::{AccountsScreen, BillsScreen, OverviewScreen, SingleAccountScreen};
use crate::tui::state_machine::{transition, TuiCommand, TuiState};
use crate::tui::types::KeyHint;

/// Props for RallyApp
#[derive(Default, Props)]
pub struct RallyAppProps {
    /// Deep-link target to show on top of the overview, if any
    pub initial_route: Option<Route>,
}

/// Main application with screen navigation
#[component]
pub fn RallyApp(props: &RallyAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();

    // TuiState is not Copy; keep it in a ref and trigger re-renders through
    // a version counter, writing back the state each transition produces.
    let initial_route = props.initial_route.clone();
    let state_ref = hooks.use_ref(move || match initial_route {
        Some(route) => TuiState::with_deep_link(route),
        None => TuiState::new(),
    });
    let version = hooks.use_state(|| 0usize);
    let should_exit = hooks.use_state(|| false);

    // Tab row and host re-derive from the navigator's current-route stream;
    // the state machine's clones share the same channel, so this receiver
    // stays live across transitions.
    hooks.use_future({
        let mut version = version.clone();
        let mut current_route = state_ref.read().navigator().subscribe();
        async move {
            while current_route.changed().await.is_ok() {
                version.set(version.get().wrapping_add(1));
            }
        }
    });

    hooks.use_terminal_events({
        let mut state_ref = state_ref.clone();
        let mut version = version.clone();
        let mut should_exit = should_exit.clone();
        move |event| {
            let Some(event) = convert_iocraft_event(event) else {
                return;
            };
            let snapshot = state_ref.read().clone();
            let (next, commands) = transition(&snapshot, event);
            *state_ref.write() = next;
            version.set(version.get().wrapping_add(1));
            for command in commands {
                match command {
                    TuiCommand::Exit => should_exit.set(true),
                }
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    // version is read to re-render after each transition
    let _ = version.get();
    let state = state_ref.read();
    let route = state.route().clone();
    let current_tab = state.current_tab();
    let selection = state.selection();
    let accounts = state.data().accounts.clone();
    let bills = state.data().bills.clone();
    drop(state);

    let screen_hints: Vec<KeyHint> = match route.destination() {
        Destination::Overview => vec![
            KeyHint::new("Enter", "Open account"),
            KeyHint::new("a", "All accounts"),
            KeyHint::new("b", "All bills"),
        ],
        Destination::Accounts => vec![KeyHint::new("Enter", "Open account")],
        Destination::Bills => vec![],
        Destination::SingleAccount => vec![KeyHint::new("Esc", "Back")],
    };

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            // Tab row, re-derived from the back-stack on every change
            RallyTabRow(active: current_tab)

            // Screen content
            View(flex_grow: 1.0, flex_shrink: 1.0, overflow: Overflow::Hidden) {
                #(match &route {
                    Route::Overview => vec![element! {
                        View(width: 100pct, height: 100pct) {
                            OverviewScreen(
                                accounts: accounts.clone(),
                                bills: bills.clone(),
                                selected_index: selection,
                            )
                        }
                    }],
                    Route::Accounts => vec![element! {
                        View(width: 100pct, height: 100pct) {
                            AccountsScreen(
                                accounts: accounts.clone(),
                                selected_index: selection,
                            )
                        }
                    }],
                    Route::Bills => vec![element! {
                        View(width: 100pct, height: 100pct) {
                            BillsScreen(
                                bills: bills.clone(),
                                selected_index: selection,
                            )
                        }
                    }],
                    Route::SingleAccount { account_type } => vec![element! {
                        View(width: 100pct, height: 100pct) {
                            SingleAccountScreen(
                                accounts: accounts.clone(),
                                account_type: account_type.clone(),
                            )
                        }
                    }],
                })
            }

            KeyHintsBar(screen_hints: screen_hints)
        }
    }
}

/// Run the application fullscreen until the user quits
pub async fn run_app(initial_route: Option<Route>) -> std::io::Result<()> {
    element! {
        RallyApp(initial_route: initial_route)
    }
    .fullscreen()
    .await
}
