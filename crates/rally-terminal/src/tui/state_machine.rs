//! # TUI State Machine
//!
//! Pure state machine model for deterministic testing:
//!
//! ```text
//! TuiState × TerminalEvent → (TuiState, Vec<TuiCommand>)
//! ```
//!
//! The state machine owns the [`Navigator`] and routes every input intent
//! through it: number keys and Tab cycling select tabs with the single-top
//! policy, Enter opens the selected account's detail route, Esc pops back.
//! Rendering reads from the resulting state; no navigation happens anywhere
//! else.

use rally_app::{resolve_current_tab, Destination, Navigator, Route, ScreenMemory, UserData};

use crate::tui::events::{KeyCode, TerminalEvent};

/// Commands emitted by transitions for the runtime to execute
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TuiCommand {
    /// Leave the TUI
    Exit,
}

/// Complete TUI state
#[derive(Clone, Debug)]
pub struct TuiState {
    navigator: Navigator,
    data: UserData,
    /// Selection in the current screen's primary list
    selection: usize,
    /// Last observed terminal size
    pub terminal_size: (u16, u16),
    /// Set once the user asked to quit
    pub should_exit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    /// Initial state: the overview route, demo dataset, nothing selected
    pub fn new() -> Self {
        Self {
            navigator: Navigator::new(),
            data: UserData::demo(),
            selection: 0,
            terminal_size: (80, 24),
            should_exit: false,
        }
    }

    /// Initial state entered through a deep link. The back-stack is still
    /// seeded with the overview route; the deep-link target navigates on
    /// top of it, exactly as an in-app navigation would.
    pub fn with_deep_link(route: Route) -> Self {
        let mut state = Self::new();
        state.navigator.navigate_single_top(route);
        state
    }

    /// The current route
    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// The tab the tab row highlights for the current route
    pub fn current_tab(&self) -> Destination {
        resolve_current_tab(
            Some(self.route()),
            Destination::tabs(),
            Destination::Overview,
        )
    }

    /// Selection in the current screen's primary list
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// The dataset screens render from
    pub fn data(&self) -> &UserData {
        &self.data
    }

    /// The navigation controller
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Length of the current screen's primary list
    fn list_len(&self) -> usize {
        match self.route().destination() {
            Destination::Overview | Destination::Accounts => self.data.accounts.len(),
            Destination::Bills => self.data.bills.len(),
            Destination::SingleAccount => 0,
        }
    }

    /// Save the current destination's selection so it can be restored when
    /// the destination is re-entered.
    fn remember_selection(&mut self) {
        let destination = self.route().destination();
        self.navigator
            .save_memory(destination, ScreenMemory::with_selection(self.selection));
    }

    /// Adopt the restored selection for the destination just entered.
    fn restore_selection(&mut self) {
        let destination = self.route().destination();
        self.selection = self
            .navigator
            .restore_memory(destination)
            .map(|memory| memory.selected_index)
            .unwrap_or(0);
        // Clamp in case the list shrank since the state was saved
        self.selection = self.selection.min(self.list_len().saturating_sub(1));
    }

    /// Single-top navigation to a top-level tab
    fn select_tab(&mut self, tab: Destination) {
        let route = match tab {
            Destination::Overview => Route::Overview,
            Destination::Accounts => Route::Accounts,
            Destination::Bills => Route::Bills,
            Destination::SingleAccount => return,
        };
        self.remember_selection();
        self.navigator.navigate_single_top(route);
        self.restore_selection();
    }

    /// List screens construct the detail route from the selected account and
    /// delegate to the single-top policy.
    fn open_selected_account(&mut self) {
        let Some(account) = self.data.accounts.get(self.selection) else {
            return;
        };
        let route = Route::single_account(account.name.clone());
        self.remember_selection();
        self.navigator.navigate_single_top(route);
        self.selection = 0;
    }

    /// Back navigation; restores the re-entered destination's selection
    fn go_back(&mut self) {
        if self.navigator.pop_back() {
            self.restore_selection();
        }
    }

    fn move_selection_up(&mut self) {
        let count = self.list_len();
        if count == 0 {
            return;
        }
        self.selection = if self.selection == 0 {
            count - 1
        } else {
            self.selection - 1
        };
    }

    fn move_selection_down(&mut self) {
        let count = self.list_len();
        if count == 0 {
            return;
        }
        self.selection = if self.selection + 1 >= count {
            0
        } else {
            self.selection + 1
        };
    }
}

/// Apply one event to the state, producing the next state and any commands
/// for the runtime. Pure: same inputs always produce the same outputs.
pub fn transition(state: &TuiState, event: TerminalEvent) -> (TuiState, Vec<TuiCommand>) {
    let mut next = state.clone();
    let mut commands = Vec::new();

    match event {
        TerminalEvent::Resize { width, height } => {
            next.terminal_size = (width, height);
        }
        TerminalEvent::Key(key) => match key.code {
            KeyCode::Char('q') => {
                next.should_exit = true;
                commands.push(TuiCommand::Exit);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let digit = c as u8 - b'0';
                if let Some(tab) = Destination::from_key(digit) {
                    next.select_tab(tab);
                }
            }
            KeyCode::Tab => {
                let tab = next.current_tab().next_tab();
                next.select_tab(tab);
            }
            KeyCode::BackTab => {
                let tab = next.current_tab().prev_tab();
                next.select_tab(tab);
            }
            KeyCode::Up | KeyCode::Char('k') => next.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => next.move_selection_down(),
            KeyCode::Enter => {
                if matches!(
                    next.route().destination(),
                    Destination::Overview | Destination::Accounts
                ) {
                    next.open_selected_account();
                }
            }
            // See-all shortcuts on the overview, mirroring its list footers
            KeyCode::Char('a') if next.route().destination() == Destination::Overview => {
                next.select_tab(Destination::Accounts);
            }
            KeyCode::Char('b') if next.route().destination() == Destination::Overview => {
                next.select_tab(Destination::Bills);
            }
            KeyCode::Esc | KeyCode::Backspace => next.go_back(),
            _ => {}
        },
    }

    (next, commands)
}
