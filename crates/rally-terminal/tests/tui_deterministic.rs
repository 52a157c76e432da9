//! # Deterministic TUI Tests
//!
//! These tests validate navigation behavior using the pure state machine
//! model. They are:
//! - **Fast**: no PTY setup, no sleeps, pure computation
//! - **Deterministic**: same inputs = same outputs, every time
//! - **Debuggable**: full state visibility at every step

use proptest::prelude::*;
use rally_app::{resolve_current_tab, Destination, Navigator, Route};
use rally_terminal::tui::events::{events, TerminalEvent};
use rally_terminal::tui::{resolve_account, transition, TuiCommand, TuiState};

// ============================================================================
// Test Helpers
// ============================================================================

/// Simple test wrapper for the state machine
struct TestTui {
    state: TuiState,
    commands: Vec<TuiCommand>,
}

impl TestTui {
    fn new() -> Self {
        Self {
            state: TuiState::new(),
            commands: Vec::new(),
        }
    }

    /// Start the TUI as a deep link would
    fn opened_at(route: Route) -> Self {
        Self {
            state: TuiState::with_deep_link(route),
            commands: Vec::new(),
        }
    }

    fn send(&mut self, event: TerminalEvent) {
        let (new_state, cmds) = transition(&self.state, event);
        self.state = new_state;
        self.commands.extend(cmds);
    }

    fn send_char(&mut self, c: char) {
        self.send(events::char(c));
    }

    fn route(&self) -> Route {
        self.state.route().clone()
    }

    fn assert_route(&self, expected: Route) {
        assert_eq!(
            self.route(),
            expected,
            "Expected {:?}, got {:?}",
            expected,
            self.route()
        );
    }

    fn depth(&self) -> usize {
        self.state.navigator().depth()
    }

    /// Name of the account the detail screen would render, applying the
    /// screen's own default when the argument is absent
    fn detail_account(&self) -> Option<String> {
        match self.state.route() {
            Route::SingleAccount { account_type } => {
                resolve_account(&self.state.data().accounts, account_type.as_deref())
                    .map(|a| a.name.clone())
            }
            _ => None,
        }
    }
}

// ============================================================================
// Startup (spec: initial render always shows overview)
// ============================================================================

#[test]
fn test_initial_render_shows_overview() {
    let tui = TestTui::new();
    tui.assert_route(Route::Overview);
    assert_eq!(tui.depth(), 1);
}

#[test]
fn test_deep_link_startup_keeps_overview_at_stack_bottom() {
    let tui = TestTui::opened_at(Route::single_account("Checking"));
    tui.assert_route(Route::single_account("Checking"));
    assert_eq!(tui.depth(), 2);
    assert_eq!(
        tui.state.navigator().entries()[0].route(),
        &Route::Overview
    );
}

// ============================================================================
// Tab Navigation
// ============================================================================

#[test]
fn test_number_keys_navigate_tabs() {
    let mut tui = TestTui::new();

    tui.send_char('2');
    tui.assert_route(Route::Accounts);

    tui.send_char('3');
    tui.assert_route(Route::Bills);

    tui.send_char('1');
    tui.assert_route(Route::Overview);
}

#[test]
fn test_tab_key_cycles_screens() {
    let mut tui = TestTui::new();

    tui.send(events::tab());
    tui.assert_route(Route::Accounts);

    tui.send(events::tab());
    tui.assert_route(Route::Bills);

    tui.send(events::tab());
    tui.assert_route(Route::Overview);

    tui.send(events::back_tab());
    tui.assert_route(Route::Bills);
}

#[test]
fn test_repeated_tab_taps_do_not_grow_back_stack() {
    let mut tui = TestTui::new();

    for _ in 0..10 {
        tui.send_char('2');
        assert_eq!(tui.depth(), 2);
    }
    for _ in 0..10 {
        tui.send_char('1');
        assert_eq!(tui.depth(), 1);
    }
}

// ============================================================================
// Tab Resolution (spec: fallback to default on non-tab routes)
// ============================================================================

#[test]
fn test_resolve_current_tab_without_route_is_default() {
    let tab = resolve_current_tab(None, Destination::tabs(), Destination::Overview);
    assert_eq!(tab, Destination::Overview);
}

#[test]
fn test_resolve_current_tab_matches_bills() {
    let tab = resolve_current_tab(
        Some(&Route::Bills),
        Destination::tabs(),
        Destination::Overview,
    );
    assert_eq!(tab, Destination::Bills);
}

#[test]
fn test_detail_route_highlights_default_tab() {
    let mut tui = TestTui::new();
    tui.send_char('2');
    tui.send(events::enter());

    tui.assert_route(Route::single_account("Checking"));
    // The detail route is not a tab; the tab row falls back to the default
    assert_eq!(tui.state.current_tab(), Destination::Overview);
}

// ============================================================================
// Detail Route Arguments
// ============================================================================

#[test]
fn test_opening_account_extracts_argument() {
    let mut tui = TestTui::new();
    tui.send_char('2');
    tui.send(events::down());
    tui.send(events::down());
    tui.send(events::enter());

    tui.assert_route(Route::single_account("Car Savings"));
    assert_eq!(
        tui.state.route().argument("account_type"),
        Some("Car Savings")
    );
    assert_eq!(tui.detail_account().as_deref(), Some("Car Savings"));
}

#[test]
fn test_bare_detail_route_renders_default_account() {
    let route = Route::parse("single_account").unwrap();
    let tui = TestTui::opened_at(route);

    assert_eq!(tui.state.route().argument("account_type"), None);
    assert_eq!(tui.detail_account().as_deref(), Some("Checking"));
}

#[test]
fn test_deep_link_render_matches_in_app_navigation() {
    let deep = Route::parse_deep_link("rally://single_account/Savings").unwrap();
    let from_deep_link = TestTui::opened_at(deep);

    let mut in_app = Navigator::new();
    in_app.navigate_single_top(Route::single_account("Savings"));

    assert_eq!(from_deep_link.state.route(), in_app.current());
    assert_eq!(
        from_deep_link.state.navigator().entries(),
        in_app.entries()
    );
    // "Savings" names no demo account, so both paths degrade to the same
    // default render
    assert_eq!(from_deep_link.detail_account().as_deref(), Some("Checking"));
}

// ============================================================================
// Back Navigation
// ============================================================================

#[test]
fn test_escape_from_detail_returns_to_overview() {
    let mut tui = TestTui::new();
    tui.send_char('2');
    tui.send(events::enter());
    tui.send(events::escape());

    tui.assert_route(Route::Overview);
    assert_eq!(tui.depth(), 1);
}

#[test]
fn test_escape_on_overview_is_a_no_op() {
    let mut tui = TestTui::new();
    tui.send(events::escape());
    tui.assert_route(Route::Overview);
    assert_eq!(tui.depth(), 1);
}

#[test]
fn test_selection_restored_when_tab_re_entered() {
    let mut tui = TestTui::new();
    tui.send_char('2');
    tui.send(events::down());
    assert_eq!(tui.state.selection(), 1);

    tui.send_char('3');
    assert_eq!(tui.state.selection(), 0);

    tui.send_char('2');
    assert_eq!(tui.state.selection(), 1);
}

// ============================================================================
// Exit
// ============================================================================

#[test]
fn test_quit_requests_exit() {
    let mut tui = TestTui::new();
    tui.send_char('q');
    assert!(tui.state.should_exit);
    assert_eq!(tui.commands, vec![TuiCommand::Exit]);
}

#[test]
fn test_resize_updates_terminal_size() {
    let mut tui = TestTui::new();
    tui.send(events::resize(120, 40));
    assert_eq!(tui.state.terminal_size, (120, 40));
}

// ============================================================================
// Property-Based Tests (proptest)
// ============================================================================

fn event_strategy() -> impl Strategy<Value = TerminalEvent> {
    prop_oneof![
        prop::char::range('a', 'z').prop_map(events::char),
        (0u8..10).prop_map(|d| events::char((b'0' + d) as char)),
        Just(events::enter()),
        Just(events::escape()),
        Just(events::tab()),
        Just(events::back_tab()),
        Just(events::up()),
        Just(events::down()),
        Just(events::backspace()),
        (10u16..200, 5u16..100).prop_map(|(w, h)| events::resize(w, h)),
    ]
}

proptest! {
    /// Property: the back-stack never grows past the start destination plus
    /// one top entry, whatever the input sequence.
    #[test]
    fn prop_back_stack_depth_bounded(
        evts in prop::collection::vec(event_strategy(), 0..100)
    ) {
        let mut tui = TestTui::new();
        for event in evts {
            tui.send(event);
            prop_assert!(tui.depth() <= 2);
            let entries = tui.state.navigator().entries();
            for pair in entries.windows(2) {
                prop_assert_ne!(pair[0].route(), pair[1].route());
            }
        }
    }

    /// Property: the tab row always highlights a real tab, even while a
    /// non-tab route is showing.
    #[test]
    fn prop_highlighted_tab_is_always_a_tab(
        evts in prop::collection::vec(event_strategy(), 0..100)
    ) {
        let mut tui = TestTui::new();
        for event in evts {
            tui.send(event);
            prop_assert!(Destination::tabs().contains(&tui.state.current_tab()));
        }
    }

    /// Property: arbitrary event sequences never panic and leave the
    /// selection inside the dataset bounds.
    #[test]
    fn prop_no_panics_on_arbitrary_events(
        evts in prop::collection::vec(event_strategy(), 0..100)
    ) {
        let mut tui = TestTui::new();
        let account_count = tui.state.data().accounts.len();
        for event in evts {
            tui.send(event);
            prop_assert!(tui.state.selection() < account_count.max(1));
        }
    }

    /// Property: state transitions are deterministic.
    #[test]
    fn prop_transitions_are_deterministic(
        evts in prop::collection::vec(event_strategy(), 1..30)
    ) {
        let mut tui1 = TestTui::new();
        for event in &evts {
            tui1.send(event.clone());
        }

        let mut tui2 = TestTui::new();
        for event in &evts {
            tui2.send(event.clone());
        }

        prop_assert_eq!(tui1.route(), tui2.route());
        prop_assert_eq!(tui1.state.selection(), tui2.state.selection());
        prop_assert_eq!(tui1.state.terminal_size, tui2.state.terminal_size);
        prop_assert_eq!(tui1.state.should_exit, tui2.state.should_exit);
        prop_assert_eq!(tui1.depth(), tui2.depth());
    }
}
